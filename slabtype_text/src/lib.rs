// Copyright 2026 the Slabtype Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for slab layout.
//!
//! The slab layout engine needs the natural width and line height of each
//! broken line before it can compute per-line stretch factors. Shaping and
//! glyph rendering stay downstream, so the engine depends only on this tiny
//! measurement interface.
//!
//! This crate is intentionally:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for owned strings), and
//! - renderer-agnostic (native shaping engines and web canvas measurement can
//!   both implement the same trait).

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

/// Multiplier applied to the font size when no explicit line height is set.
///
/// Browsers report a computed line height of `normal` unless one is set in
/// CSS, and `normal` resolves to roughly 1.2 em in common engines. The exact
/// value is engine- and font-dependent; this constant is a deliberate
/// approximation kept for compatibility with existing visual output.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// A minimal text measurement interface used by the slab layout engine.
///
/// `text` is treated as a single line; callers should break text into lines
/// before measuring.
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate),
/// - backed by a shaping engine (e.g. Parley), or
/// - backed by web platform text measurement (e.g. HTML canvas).
///
/// Backend failures are reported as [`MeasureError`] and must not be
/// swallowed; the layout engine propagates them verbatim.
pub trait TextMeasurer {
    /// Measure a single line of text.
    fn measure(&self, text: &str, style: &TextStyle) -> Result<LineMetrics, MeasureError>;
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineMetrics {
    /// The natural advance width of the line, before any scaling.
    pub natural_width: f64,
    /// The line height (including leading) to use when stacking lines.
    pub line_height: f64,
}

/// Error reported by a measurement backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasureError {
    /// Human-readable description from the backend.
    pub message: String,
}

impl MeasureError {
    /// Creates a measurement error with the given description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Text styling inputs relevant to measurement.
///
/// This is intentionally minimal: it's just enough to make slab layout
/// consistent across measurement backends. More detailed typography
/// (attributed text, shaping options, fallback, etc.) belongs in a
/// higher-level text system.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the layout's coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
    /// Explicit line height, if one is known.
    ///
    /// When `None`, [`TextStyle::resolved_line_height`] falls back to
    /// `font_size * LINE_HEIGHT_FACTOR`.
    pub line_height: Option<f64>,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
            line_height: None,
        }
    }

    /// Sets an explicit line height.
    #[must_use]
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = Some(line_height);
        self
    }

    /// Returns the explicit line height, or the documented fallback.
    #[must_use]
    pub fn resolved_line_height(&self) -> f64 {
        self.line_height
            .unwrap_or(self.font_size * LINE_HEIGHT_FACTOR)
    }

    /// Returns this style as a CSS shorthand font declaration.
    ///
    /// The order matches what canvas 2D contexts accept for their `font`
    /// property: style, weight, size, family.
    #[must_use]
    pub fn css_font(&self) -> String {
        let font_style = match self.font_style {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        };
        format!(
            "{font_style} {} {}px {}",
            self.font_weight.0,
            self.font_size,
            self.font_family.as_css_family()
        )
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// A tiny heuristic text measurer suitable for demos and tests.
///
/// It assumes an average glyph width of ~0.6em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Result<LineMetrics, MeasureError> {
        let natural_width = 0.6 * style.font_size * text.chars().count() as f64;
        Ok(LineMetrics {
            natural_width,
            line_height: style.resolved_line_height(),
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_width_scales_with_char_count() {
        let style = TextStyle::new(10.0);
        let short = HeuristicTextMeasurer.measure("ab", &style).unwrap();
        let long = HeuristicTextMeasurer.measure("abcd", &style).unwrap();
        assert!(
            (long.natural_width - 2.0 * short.natural_width).abs() < 1e-9,
            "width should be proportional to char count"
        );
    }

    #[test]
    fn line_height_falls_back_to_factor() {
        let style = TextStyle::new(10.0);
        assert!((style.resolved_line_height() - 12.0).abs() < 1e-9);

        let explicit = TextStyle::new(10.0).with_line_height(30.0);
        assert!((explicit.resolved_line_height() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn css_font_shorthand_order() {
        let style = TextStyle {
            font_size: 16.0,
            font_family: FontFamily::Named("Inter".into()),
            font_weight: FontWeight::BOLD,
            font_style: FontStyle::Italic,
            line_height: None,
        };
        assert_eq!(style.css_font(), "italic 700 16px Inter");
    }
}
