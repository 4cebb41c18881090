// Copyright 2026 the Slabtype Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web canvas rendering backend for slab layout plans.
//!
//! Everything here is presentation plumbing around [`slabtype_core`]:
//! preparing a HiDPI-aware canvas, turning a CSS `text-shadow` declaration
//! into the [`ShadowSpec`] the layout engine pads for, and replaying a
//! [`LayoutPlan`]'s transforms as canvas draw calls. No layout decisions are
//! made in this crate.
//!
//! The `text-shadow` parser is plain string handling and compiles on every
//! target; the canvas entry points exist only on `wasm32`.

#![no_std]

extern crate alloc;

use alloc::string::String;

use slabtype_core::ShadowSpec;
#[cfg(target_arch = "wasm32")]
use slabtype_core::{LayoutPlan, PaddingSpec};
#[cfg(target_arch = "wasm32")]
use slabtype_text::TextStyle;

/// A parsed CSS `text-shadow` declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct TextShadow {
    /// The shadow color, verbatim (e.g. `"rgba(0, 0, 0, 0.5)"`).
    pub color: String,
    /// Offset and blur, in pixels.
    pub shadow: ShadowSpec,
}

/// Parses a computed `text-shadow` value of the form
/// `<color> <x>px <y>px <blur>px`.
///
/// This accepts the single-shadow form browsers report for computed styles
/// (color first, integer pixel lengths, non-negative blur). Anything else,
/// including `none`, yields `None`.
#[must_use]
pub fn parse_text_shadow(value: &str) -> Option<TextShadow> {
    let mut tail = value.trim().rsplitn(4, ' ');
    let blur = px_value(tail.next()?, false)?;
    let offset_y = px_value(tail.next()?, true)?;
    let offset_x = px_value(tail.next()?, true)?;
    let color = tail.next()?.trim();
    if color.is_empty() {
        return None;
    }
    Some(TextShadow {
        color: String::from(color),
        shadow: ShadowSpec {
            offset_x,
            offset_y,
            blur,
        },
    })
}

fn px_value(token: &str, signed: bool) -> Option<f64> {
    let digits = token.strip_suffix("px")?;
    if !signed && digits.starts_with('-') {
        return None;
    }
    digits.parse::<i32>().ok().map(f64::from)
}

/// Sizes a canvas for the device pixel ratio and returns its 2D context,
/// pre-scaled so that all further drawing happens in CSS pixels.
///
/// The canvas backing store is enlarged by `devicePixelRatio` while its CSS
/// size stays at `width`x`height`, so text stays sharp on HiDPI displays.
#[cfg(target_arch = "wasm32")]
pub fn prepare_canvas(
    canvas: &web_sys::HtmlCanvasElement,
    width: f64,
    height: f64,
) -> Result<web_sys::CanvasRenderingContext2d, wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast as _;

    let ratio = web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| *r > 0.0)
        .unwrap_or(1.0);

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "canvas backing sizes are small positive pixel counts"
    )]
    {
        canvas.set_width((width * ratio) as u32);
        canvas.set_height((height * ratio) as u32);
    }
    let style = canvas.style();
    style.set_property("width", &alloc::format!("{width}px"))?;
    style.set_property("height", &alloc::format!("{height}px"))?;

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("slabtype_render_web: missing 2d context"))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()?;
    ctx.scale(ratio, ratio)?;
    Ok(ctx)
}

/// Applies a shadow to the context and returns the padding the layout engine
/// should reserve for it.
#[cfg(target_arch = "wasm32")]
pub fn apply_shadow(ctx: &web_sys::CanvasRenderingContext2d, shadow: &TextShadow) -> PaddingSpec {
    ctx.set_shadow_color(&shadow.color);
    ctx.set_shadow_offset_x(shadow.shadow.offset_x);
    ctx.set_shadow_offset_y(shadow.shadow.offset_y);
    ctx.set_shadow_blur(shadow.shadow.blur);
    PaddingSpec::from(shadow.shadow)
}

/// Draws every line of a [`LayoutPlan`] to the context.
///
/// The block transform is applied once, then each line is drawn under its
/// own transform with the baseline at half the line height, so the two
/// transforms compose exactly as the plan specifies.
#[cfg(target_arch = "wasm32")]
pub fn render_plan(
    ctx: &web_sys::CanvasRenderingContext2d,
    plan: &LayoutPlan,
    style: &TextStyle,
) -> Result<(), wasm_bindgen::JsValue> {
    ctx.set_font(&style.css_font());
    ctx.set_text_baseline("middle");

    let font_offset = style.resolved_line_height() / 2.0;

    ctx.save();
    ctx.scale(plan.block_scale, plan.block_scale)?;
    ctx.translate(plan.block_offset.x, plan.block_offset.y)?;
    for line in &plan.lines {
        ctx.save();
        ctx.translate(0.0, line.offset_y)?;
        ctx.scale(line.scale, line.scale)?;
        ctx.fill_text(&line.text, 0.0, font_offset)?;
        ctx.restore();
    }
    ctx.restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn parses_the_computed_single_shadow_form() {
        let parsed = parse_text_shadow("rgba(0, 0, 0, 0.5) 2px -3px 5px").unwrap();
        assert_eq!(parsed.color, "rgba(0, 0, 0, 0.5)");
        assert_eq!(parsed.shadow, ShadowSpec {
            offset_x: 2.0,
            offset_y: -3.0,
            blur: 5.0,
        });
    }

    #[test]
    fn rejects_malformed_declarations() {
        assert_eq!(parse_text_shadow("none"), None);
        assert_eq!(parse_text_shadow(""), None);
        assert_eq!(parse_text_shadow("red 2px 3px"), None);
        assert_eq!(parse_text_shadow("red 2px 3px 4"), None);
        // Blur must be non-negative.
        assert_eq!(parse_text_shadow("red 2px 3px -4px"), None);
        // Lengths are integer pixel counts.
        assert_eq!(parse_text_shadow("red 2.5px 3px 4px"), None);
    }
}
