//! Recursive placement shared by the static and dynamic builders.
//!
//! A node at `x` with half-width `w` places its left child at `x - w` and its
//! right child at `x + w`, both one level down with half-width `w / 2`.
//! Coordinates depend only on the path from the root, never on visiting order.

use petgraph::graph::NodeIndex;
use tracing::trace;

use super::graph::LayoutGraph;
use super::types::{NodeLabel, Point, Span};
use crate::error::LayoutError;

/// How the walk reads one tree representation.
pub(crate) trait TreeCursor {
    /// Handle to a node: an array index or a reference.
    type Node: Copy;

    /// Visit the right subtree before the left one.
    const RIGHT_FIRST: bool;

    fn attrs(&self, node: Self::Node, span: Span) -> Result<Vec<String>, LayoutError>;

    fn left(&self, node: Self::Node, span: Span) -> Option<Self::Node>;

    fn right(&self, node: Self::Node, span: Span) -> Option<Self::Node>;
}

struct Step<N> {
    node: N,
    span: Span,
    x: f64,
    depth: u32,
    half_width: f64,
    parent: Option<NodeIndex>,
}

/// Clear `graph` and lay out the tree under `root` into it.
///
/// On error the graph holds a partial layout; callers build into a scratch
/// graph and discard it.
pub(crate) fn lay_out<C: TreeCursor>(
    cursor: &C,
    root: C::Node,
    span: Span,
    half_width: f64,
    graph: &mut LayoutGraph,
) -> Result<(), LayoutError> {
    graph.clear();
    place(
        cursor,
        graph,
        Step {
            node: root,
            span,
            x: 0.0,
            depth: 0,
            half_width,
            parent: None,
        },
    )
}

fn place<C: TreeCursor>(
    cursor: &C,
    graph: &mut LayoutGraph,
    step: Step<C::Node>,
) -> Result<(), LayoutError> {
    let Step {
        node,
        span,
        x,
        depth,
        half_width,
        parent,
    } = step;

    let label = NodeLabel::new(cursor.attrs(node, span)?, span);
    trace!(%label, x, depth, "place node");
    let idx = graph.add_node(label, Point::new(x, -f64::from(depth)));
    if let Some(parent) = parent {
        graph.add_edge(parent, idx);
    }

    let child = |node: C::Node, span: Span, x: f64| Step {
        node,
        span,
        x,
        depth: depth + 1,
        half_width: half_width / 2.0,
        parent: Some(idx),
    };
    let left = cursor
        .left(node, span)
        .map(|n| child(n, span.left_half(), x - half_width));
    let right = cursor
        .right(node, span)
        .map(|n| child(n, span.right_half(), x + half_width));

    let order = if C::RIGHT_FIRST {
        [right, left]
    } else {
        [left, right]
    };
    for step in order.into_iter().flatten() {
        place(cursor, graph, step)?;
    }
    Ok(())
}
