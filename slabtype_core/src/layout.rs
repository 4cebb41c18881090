// Copyright 2026 the Slabtype Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-pass slab layout engine.
//!
//! Pass 1 measures each line once and derives its stretch factor so the line
//! exactly spans the available width; short lines stretch more than long
//! ones, which is the defining visual property of slab type, not an aspect
//! ratio bug. Pass 2 takes one of two branches: center the stacked block
//! vertically when it fits, or shrink the whole block uniformly when it is
//! too tall. Per-line scales never change in the shrink branch; only the
//! block's containing transform does.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Vec2};
use slabtype_text::{MeasureError, TextMeasurer, TextStyle};
use smallvec::SmallVec;

/// A width/height pair in layout coordinate units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in layout coordinate units.
    pub width: f64,
    /// Height in layout coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Insets that reduce the space available to the slab on each side.
///
/// Zero by default. Renderers that draw text shadows typically derive these
/// from the shadow so that blur is not clipped at the container edge; see
/// [`ShadowSpec`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingSpec {
    /// Left inset.
    pub left: f64,
    /// Right inset.
    pub right: f64,
    /// Top inset.
    pub top: f64,
    /// Bottom inset.
    pub bottom: f64,
}

/// A text shadow given by its offset and blur radius.
///
/// This is plain data; parsing platform shadow declarations into it belongs
/// to the rendering layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShadowSpec {
    /// Horizontal shadow offset.
    pub offset_x: f64,
    /// Vertical shadow offset.
    pub offset_y: f64,
    /// Blur radius.
    pub blur: f64,
}

impl From<ShadowSpec> for PaddingSpec {
    /// Reserves just enough space on each side for the blurred shadow.
    fn from(shadow: ShadowSpec) -> Self {
        Self {
            left: shadow.blur - shadow.offset_x,
            right: shadow.blur + shadow.offset_x,
            top: shadow.blur - shadow.offset_y,
            bottom: shadow.blur + shadow.offset_y,
        }
    }
}

/// Errors returned by [`SlabSpec::layout`].
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// The container width or height is not positive and finite, or the
    /// padding leaves no horizontal space for text.
    InvalidContainer {
        /// The offending container width.
        width: f64,
        /// The offending container height.
        height: f64,
    },
    /// A line measured to zero (or negative) natural width, which would make
    /// its stretch factor undefined.
    DegenerateLine {
        /// Index of the offending line.
        index: usize,
    },
    /// The measurement backend reported an error.
    Measurement(MeasureError),
}

/// One line of a [`LayoutPlan`], placed in pre-block-scale coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    /// The line's text.
    pub text: String,
    /// Horizontal (and implicitly proportional vertical) stretch factor.
    pub scale: f64,
    /// Vertical offset: top padding plus the scaled heights of prior lines.
    pub offset_y: f64,
}

impl PlacedLine {
    /// Returns this line's local transform (translate, then scale).
    ///
    /// The block transform wraps this one; see [`LayoutPlan::block_transform`].
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(Vec2::new(0.0, self.offset_y)) * Affine::scale(self.scale)
    }
}

/// The complete, immutable output of one layout invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    /// Lines in order, top to bottom.
    pub lines: Vec<PlacedLine>,
    /// Total stacked height before the block scale: padding plus the sum of
    /// each line's scaled height.
    pub slab_height: f64,
    /// Uniform shrink factor for the whole block; `1.0` whenever the slab
    /// fits the container.
    pub block_scale: f64,
    /// Block translation, expressed in pre-block-scale coordinates.
    pub block_offset: Vec2,
}

impl LayoutPlan {
    /// Returns the block-level transform (scale, then translate in the
    /// scaled frame).
    ///
    /// A renderer places each line with `block_transform() * line.transform()`.
    #[must_use]
    pub fn block_transform(&self) -> Affine {
        Affine::scale(self.block_scale) * Affine::translate(self.block_offset)
    }

    /// Returns the slab height after the block scale is applied.
    #[must_use]
    pub fn scaled_height(&self) -> f64 {
        self.slab_height * self.block_scale
    }
}

/// Layout inputs for one slab: the container box, optional padding, and the
/// text style handed to the measurer.
#[derive(Clone, Debug, PartialEq)]
pub struct SlabSpec {
    /// The container to fill.
    pub container: Size,
    /// Insets reducing the available space; zero by default.
    pub padding: PaddingSpec,
    /// Style passed to the measurer for every line.
    pub style: TextStyle,
}

impl SlabSpec {
    /// Creates a spec for the given container with no padding and the
    /// default text style.
    #[must_use]
    pub fn new(container: Size) -> Self {
        Self {
            container,
            padding: PaddingSpec::default(),
            style: TextStyle::default(),
        }
    }

    /// Sets the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: PaddingSpec) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the text style.
    #[must_use]
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Computes a [`LayoutPlan`] for `lines` using the given measurer.
    ///
    /// Each line is measured exactly once per call; nothing is cached across
    /// calls, so identical inputs with a deterministic measurer yield
    /// identical plans. Measurer failures propagate verbatim; there is no
    /// partial plan.
    pub fn layout<S: AsRef<str>>(
        &self,
        lines: &[S],
        measurer: &dyn TextMeasurer,
    ) -> Result<LayoutPlan, LayoutError> {
        let Size { width, height } = self.container;
        if !(width > 0.0 && width.is_finite()) || !(height > 0.0 && height.is_finite()) {
            return Err(LayoutError::InvalidContainer { width, height });
        }

        let pad = self.padding;
        let available_width = width - pad.left - pad.right;
        if available_width.is_nan() || available_width <= 0.0 {
            return Err(LayoutError::InvalidContainer { width, height });
        }

        // Pass 1: measure every line and accumulate the natural slab height.
        let mut scaled_heights: SmallVec<[f64; 8]> = SmallVec::with_capacity(lines.len());
        let mut scales: SmallVec<[f64; 8]> = SmallVec::with_capacity(lines.len());
        let mut slab_height = pad.top + pad.bottom;
        for (index, line) in lines.iter().enumerate() {
            let metrics = measurer
                .measure(line.as_ref(), &self.style)
                .map_err(LayoutError::Measurement)?;
            if metrics.natural_width.is_nan() || metrics.natural_width <= 0.0 {
                return Err(LayoutError::DegenerateLine { index });
            }
            let scale = available_width / metrics.natural_width;
            let scaled_height = metrics.line_height * scale;
            scales.push(scale);
            scaled_heights.push(scaled_height);
            slab_height += scaled_height;
        }

        // Pass 2: center the block vertically, or shrink it to fit. Exactly
        // one of the two applies.
        let (block_scale, block_offset) = if slab_height <= height {
            let offset_y = (height - slab_height) / 2.0;
            (1.0, Vec2::new(pad.left, offset_y))
        } else {
            let block_scale = height / slab_height;
            let offset_x = (width - width * block_scale) / (2.0 * block_scale);
            (block_scale, Vec2::new(offset_x + pad.left, 0.0))
        };
        log::debug!(
            "slab height {slab_height} in {width}x{height} container: block scale {block_scale}"
        );

        let mut placed = Vec::with_capacity(lines.len());
        let mut offset_y = pad.top;
        for ((line, scale), scaled_height) in lines.iter().zip(scales).zip(scaled_heights) {
            placed.push(PlacedLine {
                text: String::from(line.as_ref()),
                scale,
                offset_y,
            });
            offset_y += scaled_height;
        }

        Ok(LayoutPlan {
            lines: placed,
            slab_height,
            block_scale,
            block_offset,
        })
    }
}
