//! Layout for pointer-backed (lazily materialised) segment trees.
//!
//! Children are discovered through owned links rather than index arithmetic.
//! A node without links is a leaf whatever range it covers, so unexpanded
//! subtrees show up as leaves over wide spans.

use std::marker::PhantomData;

use tracing::debug;

use super::graph::LayoutGraph;
use super::root_half_width;
use super::types::Span;
use super::walk::{self, TreeCursor};
use crate::error::LayoutError;

/// A segment tree node with optional left/right children.
pub trait LinkedNode {
    fn attrs(&self) -> Vec<String>;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;
}

struct LinkCursor<'a, N>(PhantomData<&'a N>);

impl<'a, N: LinkedNode> TreeCursor for LinkCursor<'a, N> {
    type Node = &'a N;

    const RIGHT_FIRST: bool = false;

    fn attrs(&self, node: &'a N, _span: Span) -> Result<Vec<String>, LayoutError> {
        Ok(LinkedNode::attrs(node))
    }

    fn left(&self, node: &'a N, _span: Span) -> Option<&'a N> {
        node.left()
    }

    fn right(&self, node: &'a N, _span: Span) -> Option<&'a N> {
        node.right()
    }
}

/// Lays out a linked segment tree whose root covers `[l, r]`.
///
/// The root half-width comes from `r` at construction and stays fixed across
/// rebuilds, so redraws of the same tree line up.
#[derive(Debug, Clone)]
pub struct DynamicLayoutBuilder {
    half_width: f64,
    span: Span,
    graph: LayoutGraph,
    scratch: LayoutGraph,
}

impl DynamicLayoutBuilder {
    pub fn new<N: LinkedNode>(root: &N, l: i64, r: i64) -> Result<Self, LayoutError> {
        let half_width = root_half_width(r)?;
        let span = checked_span(l, r)?;
        let mut graph = LayoutGraph::new();
        walk::lay_out(&LinkCursor::<N>(PhantomData), root, span, half_width, &mut graph)?;
        debug!(
            %span,
            half_width,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built dynamic segment tree layout"
        );
        Ok(Self {
            half_width,
            span,
            graph,
            scratch: LayoutGraph::new(),
        })
    }

    /// Recompute the layout for a new snapshot of the tree.
    ///
    /// On error the previous graph is kept.
    pub fn rebuild<N: LinkedNode>(&mut self, root: &N, l: i64, r: i64) -> Result<(), LayoutError> {
        let span = checked_span(l, r)?;
        walk::lay_out(
            &LinkCursor::<N>(PhantomData),
            root,
            span,
            self.half_width,
            &mut self.scratch,
        )?;
        std::mem::swap(&mut self.graph, &mut self.scratch);
        self.scratch.clear();
        self.span = span;
        debug!(
            %span,
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "rebuilt dynamic segment tree layout"
        );
        Ok(())
    }

    pub fn graph(&self) -> &LayoutGraph {
        &self.graph
    }

    /// Root half-width, fixed at construction.
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Range covered by the root of the current snapshot.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn into_graph(self) -> LayoutGraph {
        self.graph
    }
}

fn checked_span(l: i64, r: i64) -> Result<Span, LayoutError> {
    if l > r {
        return Err(LayoutError::InvalidRange { l, r });
    }
    Ok(Span::new(l, r))
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_dynamic.rs"]
mod tests;
