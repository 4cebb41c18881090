// Copyright 2026 the Slabtype Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed text measurement adapter.
//!
//! This crate implements [`slabtype_text::TextMeasurer`] using Parley,
//! enabling shaping-aware natural widths for slab layout on native targets.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::format;
use core::cell::RefCell;

use parley::style::{FontFamily as ParleyFontFamily, FontStack, GenericFamily, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, FontStyle as ParleyFontStyle, FontWeight};
use slabtype_text::{
    FontFamily, FontStyle, LINE_HEIGHT_FACTOR, LineMetrics, MeasureError, TextMeasurer, TextStyle,
};

/// A [`TextMeasurer`] backed by Parley.
///
/// Measurement borrows interior font/layout contexts through `RefCell`, so a
/// single instance must not be shared across concurrent layout calls; give
/// each thread its own measurer.
pub struct ParleyTextMeasurer {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<parley::LayoutContext<()>>,
    display_scale: f32,
    quantize: bool,
}

impl core::fmt::Debug for ParleyTextMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyTextMeasurer")
            .field("display_scale", &self.display_scale)
            .field("quantize", &self.quantize)
            .finish_non_exhaustive()
    }
}

impl ParleyTextMeasurer {
    /// Creates a new Parley-backed text measurer using Parley's default
    /// system font configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(parley::LayoutContext::new()),
            display_scale: 1.0,
            quantize: true,
        }
    }

    /// Sets the display scale passed to Parley.
    ///
    /// This is typically a device pixel ratio. Measurements returned by this
    /// measurer are scaled back into logical coordinates (divide by scale).
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale.max(0.0);
        self
    }

    /// Sets whether Parley should quantize layout coordinates to pixel
    /// boundaries.
    #[must_use]
    pub fn with_quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }

    fn parley_font_stack<'a>(family: &'a FontFamily) -> FontStack<'a> {
        let family = match family {
            FontFamily::Serif => ParleyFontFamily::Generic(GenericFamily::Serif),
            FontFamily::SansSerif => ParleyFontFamily::Generic(GenericFamily::SansSerif),
            FontFamily::Monospace => ParleyFontFamily::Generic(GenericFamily::Monospace),
            FontFamily::Named(name) => ParleyFontFamily::Named(Cow::Borrowed(name.as_ref())),
        };
        FontStack::from(family)
    }

    fn parley_font_style(style: FontStyle) -> ParleyFontStyle {
        match style {
            FontStyle::Normal => ParleyFontStyle::Normal,
            FontStyle::Italic => ParleyFontStyle::Italic,
            FontStyle::Oblique => ParleyFontStyle::Oblique(None),
        }
    }

    fn font_size_f32(font_size: f64) -> f32 {
        if !font_size.is_finite() {
            return 0.0;
        }
        let font_size = font_size.max(0.0);
        if font_size >= f64::from(f32::MAX) {
            f32::MAX
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Value is clamped to f32::MAX above"
            )]
            {
                font_size as f32
            }
        }
    }
}

impl Default for ParleyTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for ParleyTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Result<LineMetrics, MeasureError> {
        let text = text.split('\n').next().unwrap_or("");
        if text.is_empty() {
            return Ok(LineMetrics {
                natural_width: 0.0,
                line_height: style.resolved_line_height(),
            });
        }

        let scale = self.display_scale.max(1.0e-6);

        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();

        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, scale, self.quantize);
        builder.push_default(StyleProperty::FontSize(Self::font_size_f32(
            style.font_size,
        )));
        builder.push_default(StyleProperty::FontStack(Self::parley_font_stack(
            &style.font_family,
        )));
        builder.push_default(StyleProperty::FontStyle(Self::parley_font_style(
            style.font_style,
        )));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(
            style.font_weight.0 as f32,
        )));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, AlignmentOptions::default());

        let Some(line) = layout.lines().next() else {
            return Err(MeasureError::new(format!(
                "parley produced no lines for {text:?}"
            )));
        };

        let m = line.metrics();
        let natural_width = f64::from(m.advance) / f64::from(scale);
        let line_height = match style.line_height {
            Some(explicit) => explicit,
            None => {
                let shaped = f64::from(m.ascent + m.descent + m.leading) / f64::from(scale);
                if shaped > 0.0 {
                    shaped
                } else {
                    style.font_size * LINE_HEIGHT_FACTOR
                }
            }
        };

        Ok(LineMetrics {
            natural_width,
            line_height,
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn empty_text_measures_zero_width_with_resolved_height() {
        let m = ParleyTextMeasurer::new();
        let style = TextStyle::new(10.0).with_line_height(30.0);
        let metrics = m.measure("", &style).unwrap();
        assert!((metrics.natural_width - 0.0).abs() < 1e-9);
        assert!((metrics.line_height - 30.0).abs() < 1e-9);
    }

    #[test]
    fn only_the_first_line_of_multiline_text_is_measured() {
        let m = ParleyTextMeasurer::new();
        let style = TextStyle::new(12.0);
        let first = m.measure("hello", &style);
        let multi = m.measure("hello\nand a much longer second line", &style);
        assert_eq!(first, multi, "text after a newline must be ignored");
    }
}
