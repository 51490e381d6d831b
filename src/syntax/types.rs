//! Parsed form of a tree description: which tree to build, over what, and
//! which point assignments to apply afterwards.

use crate::layout::IndexBase;
use crate::tree::Aggregate;

// ─── TreeShape ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeShape {
    /// Array segment tree built from `values`.
    Static { values: Vec<i64>, base: IndexBase },
    /// Linked segment tree over `[l, r]`, empty until assigned.
    Dynamic { l: i64, r: i64 },
}

// ─── Assignment ──────────────────────────────────────────────────────────────

/// `set <index> = <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub index: i64,
    pub value: i64,
    /// Source line, for error reporting.
    pub line: usize,
}

// ─── TreeDescription ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeDescription {
    pub shape: TreeShape,
    pub aggregate: Aggregate,
    pub assignments: Vec<Assignment>,
}

impl TreeDescription {
    pub fn is_static(&self) -> bool {
        matches!(self.shape, TreeShape::Static { .. })
    }
}
