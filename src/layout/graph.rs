//! LayoutGraph — the node/edge/position artifact produced by the builders.
//!
//! Wraps a petgraph DiGraph keyed by [`NodeLabel`], with edges pointing from
//! parent to child, and keeps one [`Point`] per node.

use std::collections::{BTreeMap, HashMap};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{NodeLabel, Point};

/// Laid-out segment tree: nodes, parent→child edges and positions for one
/// tree snapshot.
///
/// Only the builders emit into it; callers read it or [`clear`](Self::clear) it.
#[derive(Debug, Clone, Default)]
pub struct LayoutGraph {
    digraph: DiGraph<NodeLabel, ()>,
    /// Maps label → petgraph NodeIndex.
    node_index: HashMap<NodeLabel, NodeIndex>,
    positions: HashMap<NodeIndex, Point>,
}

impl LayoutGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty the node set, edge set and position map.
    pub fn clear(&mut self) {
        self.digraph.clear();
        self.node_index.clear();
        self.positions.clear();
    }

    // ── Emission (builders only) ─────────────────────────────────────────────

    /// Add a node at `position`. A label already present is reused and moved
    /// to the new position.
    pub(crate) fn add_node(&mut self, label: NodeLabel, position: Point) -> NodeIndex {
        let idx = match self.node_index.get(&label) {
            Some(&idx) => idx,
            None => {
                let idx = self.digraph.add_node(label.clone());
                self.node_index.insert(label, idx);
                idx
            }
        };
        self.positions.insert(idx, position);
        idx
    }

    pub(crate) fn add_edge(&mut self, parent: NodeIndex, child: NodeIndex) {
        self.digraph.update_edge(parent, child, ());
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.digraph.node_count() == 0
    }

    /// Underlying petgraph graph, for callers running their own algorithms.
    pub fn digraph(&self) -> &DiGraph<NodeLabel, ()> {
        &self.digraph
    }

    /// Node labels in emission order.
    pub fn nodes(&self) -> Vec<&NodeLabel> {
        self.digraph
            .node_indices()
            .map(|idx| &self.digraph[idx])
            .collect()
    }

    /// `(parent, child)` label pairs in emission order.
    pub fn edges(&self) -> Vec<(&NodeLabel, &NodeLabel)> {
        self.digraph
            .edge_indices()
            .filter_map(|e| self.digraph.edge_endpoints(e))
            .map(|(a, b)| (&self.digraph[a], &self.digraph[b]))
            .collect()
    }

    pub fn contains(&self, label: &NodeLabel) -> bool {
        self.node_index.contains_key(label)
    }

    pub fn position(&self, label: &NodeLabel) -> Option<Point> {
        let idx = self.node_index.get(label)?;
        self.positions.get(idx).copied()
    }

    /// `(label, position)` pairs in emission order.
    pub fn positions(&self) -> Vec<(&NodeLabel, Point)> {
        self.digraph
            .node_indices()
            .filter_map(|idx| Some((&self.digraph[idx], *self.positions.get(&idx)?)))
            .collect()
    }

    /// Depth of a node, read back from its `y = -depth` coordinate.
    pub fn depth_of(&self, label: &NodeLabel) -> Option<u32> {
        self.position(label).map(|p| (-p.y).round() as u32)
    }

    /// The first emitted node without a parent.
    pub fn root(&self) -> Option<&NodeLabel> {
        self.digraph
            .node_indices()
            .find(|&idx| {
                self.digraph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|idx| &self.digraph[idx])
    }

    pub fn parent_of(&self, label: &NodeLabel) -> Option<&NodeLabel> {
        let &idx = self.node_index.get(label)?;
        self.digraph
            .neighbors_directed(idx, Direction::Incoming)
            .next()
            .map(|p| &self.digraph[p])
    }

    /// Children of a node, ordered left to right.
    pub fn children_of(&self, label: &NodeLabel) -> Vec<&NodeLabel> {
        let Some(&idx) = self.node_index.get(label) else {
            return Vec::new();
        };
        let mut children: Vec<NodeIndex> = self
            .digraph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect();
        children.sort_by(|a, b| self.x_of(*a).total_cmp(&self.x_of(*b)));
        children.into_iter().map(|c| &self.digraph[c]).collect()
    }

    /// Nodes without children, in emission order.
    pub fn leaves(&self) -> Vec<&NodeLabel> {
        self.digraph
            .node_indices()
            .filter(|&idx| {
                self.digraph
                    .neighbors_directed(idx, Direction::Outgoing)
                    .next()
                    .is_none()
            })
            .map(|idx| &self.digraph[idx])
            .collect()
    }

    /// Nodes grouped by depth, each level sorted by x.
    pub fn levels(&self) -> BTreeMap<u32, Vec<(&NodeLabel, Point)>> {
        let mut levels: BTreeMap<u32, Vec<(&NodeLabel, Point)>> = BTreeMap::new();
        for (label, p) in self.positions() {
            levels
                .entry((-p.y).round() as u32)
                .or_default()
                .push((label, p));
        }
        for level in levels.values_mut() {
            level.sort_by(|a, b| a.1.x.total_cmp(&b.1.x));
        }
        levels
    }

    fn x_of(&self, idx: NodeIndex) -> f64 {
        self.positions.get(&idx).map_or(0.0, |p| p.x)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
