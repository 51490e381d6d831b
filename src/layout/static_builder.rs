//! Layout for array-backed segment trees.
//!
//! The tree is implicit: node `id` covering `[l, r]` has children at the
//! indices given by [`IndexBase::children`], covering `[l, mid]` and
//! `[mid + 1, r]`. A node covering a single index is a leaf.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use tracing::debug;

use super::graph::LayoutGraph;
use super::root_half_width;
use super::types::{NodeAttrs, Span};
use super::walk::{self, TreeCursor};
use crate::error::LayoutError;

// ─── IndexBase ───────────────────────────────────────────────────────────────

/// Where the root of an array segment tree lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexBase {
    /// Root at 0, children at `2·id + 1` and `2·id + 2`.
    Zero,
    /// Root at 1, children at `2·id` and `2·id + 1`.
    #[default]
    One,
}

impl IndexBase {
    pub fn root(self) -> usize {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }

    /// `(left, right)` child indices of `id`.
    pub fn children(self, id: usize) -> (usize, usize) {
        match self {
            IndexBase::Zero => (2 * id + 1, 2 * id + 2),
            IndexBase::One => (2 * id, 2 * id + 1),
        }
    }

    /// Slots an array tree over `n` elements needs so every index the walk
    /// visits is in bounds. One-based indices stay below `4n`, zero-based
    /// ones one lower.
    pub fn slots(self, n: usize) -> usize {
        match self {
            IndexBase::Zero => 4 * n,
            IndexBase::One => 4 * n + 1,
        }
    }
}

// ─── IndexedSource ───────────────────────────────────────────────────────────

/// Mapping from array index to the attributes of the node stored there.
pub trait IndexedSource {
    /// Attributes at `id`, or `None` when the source has no node there.
    fn attrs_at(&self, id: usize) -> Option<Vec<String>>;
}

impl<A: NodeAttrs> IndexedSource for [A] {
    fn attrs_at(&self, id: usize) -> Option<Vec<String>> {
        self.get(id).map(NodeAttrs::attrs)
    }
}

impl<A: NodeAttrs> IndexedSource for Vec<A> {
    fn attrs_at(&self, id: usize) -> Option<Vec<String>> {
        self.as_slice().attrs_at(id)
    }
}

impl<A: NodeAttrs, H: BuildHasher> IndexedSource for HashMap<usize, A, H> {
    fn attrs_at(&self, id: usize) -> Option<Vec<String>> {
        self.get(&id).map(NodeAttrs::attrs)
    }
}

impl<A: NodeAttrs> IndexedSource for BTreeMap<usize, A> {
    fn attrs_at(&self, id: usize) -> Option<Vec<String>> {
        self.get(&id).map(NodeAttrs::attrs)
    }
}

impl<T: IndexedSource + ?Sized> IndexedSource for &T {
    fn attrs_at(&self, id: usize) -> Option<Vec<String>> {
        (**self).attrs_at(id)
    }
}

struct IndexCursor<'a, S: ?Sized> {
    source: &'a S,
    base: IndexBase,
}

impl<S: IndexedSource + ?Sized> TreeCursor for IndexCursor<'_, S> {
    type Node = usize;

    const RIGHT_FIRST: bool = true;

    fn attrs(&self, id: usize, span: Span) -> Result<Vec<String>, LayoutError> {
        self.source
            .attrs_at(id)
            .ok_or(LayoutError::MalformedSourceMapping { id, span })
    }

    fn left(&self, id: usize, span: Span) -> Option<usize> {
        (!span.is_unit()).then(|| self.base.children(id).0)
    }

    fn right(&self, id: usize, span: Span) -> Option<usize> {
        (!span.is_unit()).then(|| self.base.children(id).1)
    }
}

// ─── StaticLayoutBuilder ─────────────────────────────────────────────────────

/// Lays out the complete segment tree over `[0, n - 1]` stored in `S`.
#[derive(Debug, Clone)]
pub struct StaticLayoutBuilder<S> {
    n: usize,
    base: IndexBase,
    half_width: f64,
    source: S,
    graph: LayoutGraph,
    /// Rebuild target, swapped with `graph` once a rebuild succeeds.
    scratch: LayoutGraph,
}

impl<S: IndexedSource> StaticLayoutBuilder<S> {
    /// Lay out a tree rooted at index 1.
    pub fn new(n: usize, source: S) -> Result<Self, LayoutError> {
        Self::with_base(n, source, IndexBase::default())
    }

    pub fn with_base(n: usize, source: S, base: IndexBase) -> Result<Self, LayoutError> {
        let bound = i64::try_from(n).unwrap_or(i64::MAX);
        let half_width = root_half_width(bound)?;
        let mut graph = LayoutGraph::new();
        lay_out(n, base, half_width, &source, &mut graph)?;
        debug!(
            n,
            half_width,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built static segment tree layout"
        );
        Ok(Self {
            n,
            base,
            half_width,
            source,
            graph,
            scratch: LayoutGraph::new(),
        })
    }

    /// Replace the source and recompute the layout from scratch.
    ///
    /// On error both the previous source and the previous graph are kept.
    pub fn rebuild(&mut self, source: S) -> Result<(), LayoutError> {
        lay_out(
            self.n,
            self.base,
            self.half_width,
            &source,
            &mut self.scratch,
        )?;
        std::mem::swap(&mut self.graph, &mut self.scratch);
        self.scratch.clear();
        self.source = source;
        debug!(
            n = self.n,
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "rebuilt static segment tree layout"
        );
        Ok(())
    }

    pub fn graph(&self) -> &LayoutGraph {
        &self.graph
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn base(&self) -> IndexBase {
        self.base
    }

    /// Root half-width, fixed at construction.
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_graph(self) -> LayoutGraph {
        self.graph
    }
}

fn lay_out<S: IndexedSource + ?Sized>(
    n: usize,
    base: IndexBase,
    half_width: f64,
    source: &S,
    graph: &mut LayoutGraph,
) -> Result<(), LayoutError> {
    let last = i64::try_from(n).unwrap_or(i64::MAX) - 1;
    let cursor = IndexCursor { source, base };
    walk::lay_out(&cursor, base.root(), Span::new(0, last), half_width, graph)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_static.rs"]
mod tests;
