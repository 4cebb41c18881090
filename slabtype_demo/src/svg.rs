// Copyright 2026 the Slabtype Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `slabtype_demo`.

use kurbo::Affine;
use peniko::Color;
use slabtype_core::{LayoutPlan, Size};
use slabtype_text::TextStyle;

/// Renders a layout plan as a standalone SVG document.
///
/// The block transform becomes an outer `<g>`, and each line becomes an
/// inner `<g>` around a `<text>` element with its baseline at half the line
/// height, mirroring how a canvas backend would replay the plan.
pub(crate) fn plan_to_svg(
    plan: &LayoutPlan,
    container: Size,
    style: &TextStyle,
    fill: Color,
) -> String {
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {} {}" width="{}" height="{}">"#,
        container.width, container.height, container.width, container.height
    ));
    out.push('\n');

    out.push_str(&format!(
        r#"<g transform="{}">"#,
        matrix_attr(plan.block_transform())
    ));
    out.push('\n');

    let font_offset = style.resolved_line_height() / 2.0;
    let (fill_attr, fill_opacity) = svg_paint(fill);
    for line in &plan.lines {
        out.push_str(&format!(
            r#"<g transform="{}"><text x="0" y="{}" font-size="{}" font-family="{}" dominant-baseline="middle" fill="{}""#,
            matrix_attr(line.transform()),
            font_offset,
            style.font_size,
            style.font_family.as_css_family(),
            fill_attr,
        ));
        if let Some(o) = fill_opacity {
            out.push_str(&format!(r#" fill-opacity="{o}""#));
        }
        out.push('>');
        out.push_str(&escape_xml(&line.text));
        out.push_str("</text></g>\n");
    }

    out.push_str("</g>\n</svg>\n");
    out
}

fn matrix_attr(transform: Affine) -> String {
    let [a, b, c, d, e, f] = transform.as_coeffs();
    format!("matrix({a} {b} {c} {d} {e} {f})")
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let fill_opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (fill, fill_opacity)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use slabtype_core::SlabSpec;
    use slabtype_text::HeuristicTextMeasurer;

    use super::*;

    #[test]
    fn one_text_element_per_line() {
        let container = Size::new(200.0, 150.0);
        let style = TextStyle::new(16.0);
        let plan = SlabSpec::new(container)
            .with_style(style.clone())
            .layout(&["SLAB", "TYPE & CO"], &HeuristicTextMeasurer)
            .unwrap();

        let svg = plan_to_svg(&plan, container, &style, Color::BLACK);
        assert_eq!(svg.matches("<text").count(), 2);
        assert!(svg.contains("TYPE &amp; CO"), "text must be XML-escaped");
        assert!(svg.contains("matrix("), "transforms must be emitted");
    }
}
