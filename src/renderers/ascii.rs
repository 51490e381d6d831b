//! ASCII/Unicode text renderer.
//!
//! Each depth becomes a band of rows: a three-row box, a connector row where
//! edges fan out horizontally, and a drop row leading into the child boxes.
//! Layout x coordinates map onto columns through an [`Axis`], so no two boxes
//! on a level come closer than the configured gap and the drawing stays as
//! wide as its nodes need.

use std::collections::{HashMap, HashSet};

use super::Renderer;
use super::axis::{Axis, Extent};
use super::canvas::{Canvas, Rect};
use super::charset::{Arms, BoxChars, CharSet};
use crate::config::RenderConfig;
use crate::layout::{LayoutGraph, NodeLabel};

const BOX_HEIGHT: i64 = 3;
/// Rows from the top of one level's boxes to the top of the next level's.
const LEVEL_PITCH: i64 = BOX_HEIGHT + 2;

/// Renders a layout to box-drawing text.
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    pub unicode: bool,
    pub padding: usize,
    pub gap: usize,
}

impl AsciiRenderer {
    pub fn new(unicode: bool) -> Self {
        let defaults = RenderConfig::default();
        Self {
            unicode,
            padding: defaults.padding,
            gap: defaults.gap,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            unicode: config.unicode,
            padding: config.padding,
            gap: config.gap,
        }
    }
}

/// A node ready to paint: its box and the column its edges attach to.
#[derive(Debug, Clone)]
struct PlacedBox {
    text: String,
    rect: Rect,
    center: i64,
    leaf: bool,
}

fn len_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn box_width(text: &str, padding: usize) -> i64 {
    len_i64(text.chars().count() + 2 * padding + 2)
}

/// Column footprint of a box `width` cells wide centred at `x`.
fn extent(x: f64, width: i64) -> Extent {
    let left = width / 2;
    Extent::new(x, left as f64, (width - left - 1) as f64)
}

fn place_boxes(graph: &LayoutGraph, padding: usize, gap: i64) -> HashMap<&NodeLabel, PlacedBox> {
    let levels = graph.levels();
    let leaves: HashSet<&NodeLabel> = graph.leaves().into_iter().collect();

    let extents: Vec<Vec<Extent>> = levels
        .values()
        .map(|level| {
            level
                .iter()
                .map(|(label, p)| extent(p.x, box_width(&label.to_string(), padding)))
                .collect()
        })
        .collect();
    // Cells are inclusive: `gap` free columns put edges `gap + 1` apart.
    let axis = Axis::fit(&extents, (gap + 1) as f64);
    let column = |x: f64| axis.position(x).round() as i64;

    // Shift right until no box pokes out past column 0.
    let offset = levels
        .values()
        .flatten()
        .map(|(label, p)| box_width(&label.to_string(), padding) / 2 - column(p.x))
        .max()
        .unwrap_or(0)
        .max(0);

    let mut boxes = HashMap::new();
    for (&depth, level) in &levels {
        for &(label, p) in level {
            let text = label.to_string();
            let width = box_width(&text, padding);
            let center = column(p.x) + offset;
            let rect = Rect::new(
                center - width / 2,
                i64::from(depth) * LEVEL_PITCH,
                width,
                BOX_HEIGHT,
            );
            boxes.insert(
                label,
                PlacedBox {
                    text,
                    rect,
                    center,
                    leaf: leaves.contains(label),
                },
            );
        }
    }
    boxes
}

fn paint_node(canvas: &mut Canvas, node: &PlacedBox) {
    let bc = BoxChars::for_node(canvas.charset(), node.leaf);
    canvas.draw_box(node.rect, &bc);
    let inner = node.rect.width - 2;
    let pad = (inner - len_i64(node.text.chars().count())).max(0) / 2;
    canvas.write_str(node.rect.x + 1 + pad, node.rect.y + 1, &node.text);
}

/// Route parent → child: down from the parent's bottom edge, along the
/// connector row, then down into the child's top edge.
fn paint_edge(canvas: &mut Canvas, parent: &PlacedBox, child: &PlacedBox) {
    let bottom = parent.rect.bottom();
    let connector = bottom + 1;
    let top = child.rect.y;
    let (pc, cc) = (parent.center, child.center);

    canvas.merge_arms(pc, bottom, Arms::DOWN);
    canvas.merge_arms(pc, connector, Arms::UP);
    if pc != cc {
        canvas.hline(connector, pc, cc);
    }
    canvas.vline(cc, connector, top);
}

impl Renderer for AsciiRenderer {
    fn render(&self, graph: &LayoutGraph) -> String {
        if graph.is_empty() {
            return String::new();
        }
        let boxes = place_boxes(graph, self.padding, len_i64(self.gap));

        let width = boxes.values().map(|b| b.rect.right() + 1).max().unwrap_or(0);
        let height = boxes.values().map(|b| b.rect.bottom() + 1).max().unwrap_or(0);
        let mut canvas = Canvas::new(
            usize::try_from(width).unwrap_or(0),
            usize::try_from(height).unwrap_or(0),
            CharSet::from_unicode_flag(self.unicode),
        );

        for node in boxes.values() {
            paint_node(&mut canvas, node);
        }
        for (parent, child) in graph.edges() {
            if let (Some(p), Some(c)) = (boxes.get(parent), boxes.get(child)) {
                paint_edge(&mut canvas, p, c);
            }
        }
        canvas.render_to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_ascii.rs"]
mod tests;
