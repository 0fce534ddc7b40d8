// SPDX-License-Identifier: MIT OR Apache-2.0
//! Terminal renderer.
//!
//! A minimal implementation of the renderer contract for the demo
//! binary: sort frames draw as labelled bars (plus the bucket row when
//! radix sort asks for it), graph frames as a node/link listing. Output
//! is a pure function of the frame, so repeated renders of the same
//! frame print identically.

use algolens_graph::{GraphState, NodeColor};
use algolens_player::{Frame, LineRef, Renderer};
use algolens_sort::{Highlight, SlotStatus, SortState};

/// Renderer printing frames to stdout
#[derive(Debug, Default)]
pub struct TermRenderer;

impl TermRenderer {
    /// Create a terminal renderer
    pub fn new() -> Self {
        Self
    }
}

const BAR_WIDTH: usize = 40;

fn highlight_tag(highlight: Highlight) -> String {
    match highlight {
        Highlight::Plain => String::new(),
        Highlight::Compared => " <comparing>".to_string(),
        Highlight::Special => " <special>".to_string(),
        Highlight::Sorted => " <sorted>".to_string(),
        Highlight::Pivot => " <pivot>".to_string(),
        Highlight::Left => " <left run>".to_string(),
        Highlight::Right => " <right run>".to_string(),
        Highlight::Place(place) => format!(" <place {place}>"),
    }
}

fn line_tag(line_ref: &LineRef) -> String {
    match line_ref {
        LineRef::None => String::new(),
        LineRef::Line(n) => format!("  [line {n}]"),
        LineRef::Lines(ns) => {
            let parts: Vec<String> = ns.iter().map(ToString::to_string).collect();
            format!("  [lines {}]", parts.join(","))
        }
    }
}

impl Renderer<SortState> for TermRenderer {
    fn render(&mut self, frame: &SortState, secondary_row: bool) {
        let max = frame
            .backlinks
            .iter()
            .map(|b| b.value.max(1))
            .max()
            .unwrap_or(1);

        println!("{}{}", frame.status(), line_tag(frame.line_ref()));
        for backlink in &frame.backlinks {
            if backlink.slot != SlotStatus::Primary {
                continue;
            }
            let width = (backlink.value.max(0) as usize * BAR_WIDTH) / max as usize;
            println!(
                "  {:>5} {}{}",
                backlink.value,
                "#".repeat(width.max(1)),
                highlight_tag(backlink.highlight)
            );
        }
        if secondary_row {
            for backlink in &frame.backlinks {
                if let SlotStatus::Bucket(digit) = backlink.slot {
                    println!("  {:>5} -> bucket {digit}", backlink.value);
                }
            }
        }
        if !frame.log_message().is_empty() {
            println!("  {}", frame.log_message());
        }
        println!();
    }
}

fn color_tag(color: NodeColor) -> &'static str {
    match color {
        NodeColor::Plain => "",
        NodeColor::Source => " <source>",
        NodeColor::Frontier => " <frontier>",
        NodeColor::Visited => " <visited>",
    }
}

impl Renderer<GraphState> for TermRenderer {
    fn render(&mut self, frame: &GraphState, _secondary_row: bool) {
        println!("{}", frame.status());
        for node in &frame.nodes {
            let reflexive = if node.reflexive { " (reflexive)" } else { "" };
            println!("  node {}{}{}", node.id.0, color_tag(node.color), reflexive);
        }
        for link in &frame.links {
            let arrow = match (link.left, link.right) {
                (true, true) => "<->",
                (true, false) => "<--",
                _ => "-->",
            };
            println!("  {} {arrow} {}", link.source.0, link.target.0);
        }
        if !frame.log_message().is_empty() {
            println!("  {}", frame.log_message());
        }
        println!();
    }
}
