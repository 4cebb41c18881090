// Copyright 2026 the Slabtype Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `slabtype_core`: breaks a phrase into balanced lines,
//! lays it out with the heuristic measurer, and dumps the plan as SVG.

mod svg;

use peniko::Color;
use slabtype_core::{Size, SlabSpec, derive_target_line_length, make_lines};
use slabtype_text::{HeuristicTextMeasurer, TextStyle};

fn main() {
    let phrase = "the quick brown fox jumps over the lazy dog";

    // Slab type is traditionally set in caps; uppercase before breaking so
    // the derived target sees the text that will actually be measured.
    let text = phrase.to_uppercase();
    let target = derive_target_line_length(&text);
    let lines = make_lines(&text, target).expect("derived target is always positive");

    eprintln!("target line length {target}, {} lines:", lines.len());
    for line in &lines {
        eprintln!("  {line}");
    }

    let container = Size::new(400.0, 300.0);
    let style = TextStyle::new(16.0);
    let plan = SlabSpec::new(container)
        .with_style(style.clone())
        .layout(&lines, &HeuristicTextMeasurer)
        .expect("heuristic measurement cannot fail");

    eprintln!(
        "slab height {:.1}, block scale {:.3}",
        plan.slab_height, plan.block_scale
    );
    println!("{}", svg::plan_to_svg(&plan, container, &style, Color::BLACK));
}
