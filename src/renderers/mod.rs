//! Renderers that turn a [`LayoutGraph`] into a drawing.

pub mod ascii;
pub mod axis;
pub mod canvas;
pub mod charset;
pub mod svg;

pub use ascii::AsciiRenderer;
pub use svg::SvgRenderer;

use crate::layout::LayoutGraph;

/// Trait for diagram renderers.
pub trait Renderer {
    /// Render a laid-out tree to a string. An empty graph renders to "".
    fn render(&self, graph: &LayoutGraph) -> String;
}
