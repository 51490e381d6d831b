//! segtree-layout — lay out segment trees as planar binary-tree diagrams.
//!
//! The core is [`layout`]: [`StaticLayoutBuilder`] walks array-backed trees,
//! [`DynamicLayoutBuilder`] walks linked ones, and both produce a
//! [`LayoutGraph`] of labelled nodes, parent→child edges and positions.
//! [`renderers`] draw that graph as text or SVG.
//!
//! Public API for the description pipeline: [`render_source()`].

pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod syntax;
pub mod tree;

#[cfg(feature = "wasm")]
pub mod wasm;

use tracing::debug;

pub use crate::config::{OutputFormat, RenderConfig};
pub use crate::error::{Error, LayoutError, ParseError, TreeError};
pub use crate::layout::{
    DynamicLayoutBuilder, IndexBase, IndexedSource, LayoutGraph, LinkedNode, NodeAttrs,
    NodeLabel, Point, Span, StaticLayoutBuilder,
};
pub use crate::renderers::{AsciiRenderer, Renderer, SvgRenderer};

use crate::syntax::types::{Assignment, TreeDescription, TreeShape};
use crate::tree::{ArraySegmentTree, DynamicSegmentTree};

fn apply<F>(assignments: &[Assignment], mut set: F) -> Result<(), Error>
where
    F: FnMut(i64, i64) -> Result<(), TreeError>,
{
    for a in assignments {
        set(a.index, a.value).map_err(|e| ParseError::new(a.line, e.to_string()))?;
    }
    Ok(())
}

/// Build the tree a description names and lay it out.
///
/// Point assignments are applied after the first layout and the layout is
/// rebuilt once from the updated tree.
pub fn layout_description(desc: &TreeDescription) -> Result<LayoutGraph, Error> {
    match &desc.shape {
        TreeShape::Static { values, base } => {
            let mut tree = ArraySegmentTree::build(values, desc.aggregate, *base)?;
            let mut builder = StaticLayoutBuilder::with_base(tree.len(), tree.clone(), *base)?;
            if !desc.assignments.is_empty() {
                apply(&desc.assignments, |i, v| tree.set(i, v))?;
                builder.rebuild(tree)?;
            }
            Ok(builder.into_graph())
        }
        TreeShape::Dynamic { l, r } => {
            let mut tree = DynamicSegmentTree::new(*l, *r, desc.aggregate)?;
            let mut builder = DynamicLayoutBuilder::new(tree.root(), *l, *r)?;
            if !desc.assignments.is_empty() {
                apply(&desc.assignments, |i, v| tree.set(i, v))?;
                builder.rebuild(tree.root(), *l, *r)?;
            }
            Ok(builder.into_graph())
        }
    }
}

/// Parse a tree description and render it.
pub fn render_source(src: &str, config: &RenderConfig) -> Result<String, Error> {
    let desc = parsers::parse(src)?;
    let graph = layout_description(&desc)?;
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        format = ?config.format,
        "rendering layout"
    );
    let out = match config.format {
        OutputFormat::Text => AsciiRenderer::from_config(config).render(&graph),
        OutputFormat::Svg => SvgRenderer::new().render(&graph),
    };
    Ok(out)
}
