//! SVG renderer — converts a layout to a standalone SVG document.
//!
//! Layout x coordinates map to pixels through an [`Axis`], so neighbouring
//! boxes on a level keep at least [`MIN_GAP`] pixels between them; each depth
//! is one band of [`LEVEL_H`] pixels.

use std::collections::HashMap;
use std::fmt::Write as _;

use super::Renderer;
use super::axis::{Axis, Extent};
use crate::layout::{LayoutGraph, NodeLabel, Point};

// ── Constants ────────────────────────────────────────────────────────────────

const CHAR_W: f64 = 8.5;
const NODE_H: f64 = 28.0;
const NODE_PAD: f64 = 10.0;
const LEVEL_H: f64 = 72.0;
const MIN_GAP: f64 = 12.0;
const MARGIN: f64 = 20.0;
const FONT_SIZE: i32 = 14;
const FONT_FAMILY: &str = "monospace";

const NODE_STYLE: &str = r##"fill="#ffff4d" stroke="black" stroke-width="1.5""##;
const LEAF_STYLE: &str = r##"fill="#ff99ff" stroke="black" stroke-width="1.5""##;
const EDGE_STYLE: &str = r#"stroke="black" stroke-width="1""#;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn node_width(text: &str) -> f64 {
    text.chars().count() as f64 * CHAR_W + 2.0 * NODE_PAD
}

/// Pixel axis keeping [`MIN_GAP`] between neighbouring boxes on a level.
fn pixel_axis(graph: &LayoutGraph) -> Axis {
    let extents: Vec<Vec<Extent>> = graph
        .levels()
        .values()
        .map(|level| {
            level
                .iter()
                .map(|(label, p)| {
                    let half = node_width(&label.to_string()) / 2.0;
                    Extent::new(p.x, half, half)
                })
                .collect()
        })
        .collect();
    Axis::fit(&extents, MIN_GAP)
}

struct Placed {
    text: String,
    cx: f64,
    top: f64,
    width: f64,
}

// ── Renderer ─────────────────────────────────────────────────────────────────

/// Renders a layout to SVG markup.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, graph: &LayoutGraph) -> String {
        if graph.is_empty() {
            return String::new();
        }
        let axis = pixel_axis(graph);
        let positions: Vec<(&NodeLabel, Point)> = graph.positions();

        let left = positions
            .iter()
            .map(|(label, p)| axis.position(p.x) - node_width(&label.to_string()) / 2.0)
            .fold(f64::INFINITY, f64::min);

        let placed: HashMap<&NodeLabel, Placed> = positions
            .iter()
            .map(|&(label, p)| {
                let text = label.to_string();
                let width = node_width(&text);
                let cx = axis.position(p.x) - left + MARGIN;
                let top = -p.y * LEVEL_H + MARGIN;
                (
                    label,
                    Placed {
                        text,
                        cx,
                        top,
                        width,
                    },
                )
            })
            .collect();

        let svg_w = placed
            .values()
            .map(|n| n.cx + n.width / 2.0)
            .fold(0.0, f64::max)
            + MARGIN;
        let svg_h = placed.values().map(|n| n.top + NODE_H).fold(0.0, f64::max) + MARGIN;

        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{svg_w:.0}" height="{svg_h:.0}" viewBox="0 0 {svg_w:.0} {svg_h:.0}">"#
        );
        let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#);

        // Edges behind nodes.
        for (parent, child) in graph.edges() {
            let (Some(p), Some(c)) = (placed.get(parent), placed.get(child)) else {
                continue;
            };
            let _ = writeln!(
                out,
                r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" {EDGE_STYLE}/>"#,
                p.cx,
                p.top + NODE_H,
                c.cx,
                c.top
            );
        }

        let leaves = graph.leaves();
        for (label, _) in &positions {
            let Some(n) = placed.get(label) else {
                continue;
            };
            let style = if leaves.contains(label) {
                LEAF_STYLE
            } else {
                NODE_STYLE
            };
            let x = n.cx - n.width / 2.0;
            let cy = n.top + NODE_H / 2.0;
            let _ = writeln!(
                out,
                r#"<rect x="{x:.1}" y="{:.1}" width="{:.1}" height="{NODE_H}" rx="6" {style}/>"#,
                n.top, n.width
            );
            let _ = writeln!(
                out,
                r#"<text x="{:.1}" y="{cy:.1}" dominant-baseline="central" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="{FONT_SIZE}">{}</text>"#,
                n.cx,
                escape(&n.text)
            );
        }

        out.push_str("</svg>\n");
        out
    }
}
