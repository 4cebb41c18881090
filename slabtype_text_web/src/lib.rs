// Copyright 2026 the Slabtype Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web/WASM text measurement adapter.
//!
//! This crate provides a [`slabtype_text::TextMeasurer`] implementation for
//! `wasm32-*` targets using HTML Canvas `measureText`, the same measurement
//! the original slabtype rendering path relied on.
//!
//! Notes:
//! - This uses `web-sys`/`wasm-bindgen` only on `wasm32` targets.
//! - Non-`wasm32` builds fall back to a heuristic measurer.
//! - Canvas contexts are stateful platform objects; do not share one
//!   measurer across concurrent layout calls without external
//!   synchronization.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
use alloc::format;
#[cfg(not(target_arch = "wasm32"))]
use slabtype_text::HeuristicTextMeasurer;
use slabtype_text::{LineMetrics, MeasureError, TextMeasurer, TextStyle};

/// A `wasm32` measurer backed by HTML Canvas 2D text metrics.
///
/// On non-`wasm32` targets, this type is still available but always falls
/// back to [`HeuristicTextMeasurer`].
#[derive(Clone, Debug)]
pub struct WebTextMeasurer {
    #[cfg(target_arch = "wasm32")]
    ctx: web_sys::CanvasRenderingContext2d,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for WebTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl WebTextMeasurer {
    /// Creates a web measurer using an offscreen canvas.
    ///
    /// This requires a browser-like environment with `window` and `document`.
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Result<Self, wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast as _;

        let window = web_sys::window()
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("slabtype_text_web: missing window"))?;
        let document = window.document().ok_or_else(|| {
            wasm_bindgen::JsValue::from_str("slabtype_text_web: missing document")
        })?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| {
                wasm_bindgen::JsValue::from_str("slabtype_text_web: missing 2d context")
            })?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Creates a web measurer that uses an existing canvas 2D context.
    ///
    /// This is useful for embedders that want to measure with the very
    /// context they will render into (so font state matches), instead of
    /// having this crate create DOM nodes.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn from_canvas_context(ctx: web_sys::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Creates a non-web measurer that always falls back to heuristics.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl TextMeasurer for WebTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Result<LineMetrics, MeasureError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.ctx.set_font(&style.css_font());
            let metrics = self
                .ctx
                .measure_text(text)
                .map_err(|err| MeasureError::new(format!("measureText failed: {err:?}")))?;

            // Canvas metrics carry no line height; computed line-height comes
            // from the style (with the documented `normal` fallback).
            Ok(LineMetrics {
                natural_width: metrics.width(),
                line_height: style.resolved_line_height(),
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        HeuristicTextMeasurer.measure(text, style)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn host_fallback_matches_the_heuristic_measurer() {
        let style = TextStyle::new(10.0);
        let web = WebTextMeasurer::new().measure("slab", &style);
        let heuristic = HeuristicTextMeasurer.measure("slab", &style);
        assert_eq!(web, heuristic);
    }
}
