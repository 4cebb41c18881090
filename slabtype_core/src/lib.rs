// Copyright 2026 the Slabtype Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slab-type text layout.
//!
//! "Slab type" is the display effect where a run of text is broken into a few
//! visually balanced lines and every line is stretched to exactly fill a
//! rectangular container, so each line appears equally prominent regardless
//! of its character count.
//!
//! The crate is split along the two stages of the algorithm:
//! - [`make_lines`] partitions text into lines of near-uniform length
//!   (greedy word wrap with a one-step lookahead correction), following
//!   Erik Loyer's slabtype algorithm.
//! - [`SlabSpec::layout`] measures each line through an injected
//!   [`slabtype_text::TextMeasurer`] and produces a [`LayoutPlan`]: per-line
//!   stretch factors and offsets plus a block-level scale/offset, shrinking
//!   the whole block uniformly when the stacked height exceeds the container.
//!
//! Rendering (DOM, canvas, SVG) is out of scope: a plan carries enough
//! information for any backend to place each line independently and then
//! apply one block-level transform.

#![no_std]

extern crate alloc;

mod layout;
mod lines;

pub use layout::{LayoutError, LayoutPlan, PaddingSpec, PlacedLine, ShadowSpec, Size, SlabSpec};
pub use lines::{
    LineBreakError, derive_target_from_container, derive_target_line_length, make_lines,
};
