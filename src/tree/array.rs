//! Array-backed segment tree.

use crate::error::TreeError;
use crate::layout::{IndexBase, IndexedSource, Span};

use super::Aggregate;

/// Segment tree over `values`, stored in `4n + 1` slots addressed by an
/// [`IndexBase`]. Slots outside the tree stay empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArraySegmentTree {
    n: usize,
    base: IndexBase,
    aggregate: Aggregate,
    nodes: Vec<Option<i64>>,
}

impl ArraySegmentTree {
    pub fn build(values: &[i64], aggregate: Aggregate, base: IndexBase) -> Result<Self, TreeError> {
        if values.is_empty() {
            return Err(TreeError::Empty);
        }
        let n = values.len();
        let mut tree = Self {
            n,
            base,
            aggregate,
            nodes: vec![None; base.slots(n)],
        };
        tree.build_node(base.root(), 0, n - 1, values);
        Ok(tree)
    }

    fn build_node(&mut self, id: usize, l: usize, r: usize, values: &[i64]) -> i64 {
        let value = if l == r {
            values[l]
        } else {
            let mid = (l + r) / 2;
            let (left, right) = self.base.children(id);
            let a = self.build_node(left, l, mid, values);
            let b = self.build_node(right, mid + 1, r, values);
            self.aggregate.combine(a, b)
        };
        self.nodes[id] = Some(value);
        value
    }

    /// Assign `value` at array position `index` and refresh its ancestors.
    pub fn set(&mut self, index: i64, value: i64) -> Result<(), TreeError> {
        let span = self.span();
        let pos = usize::try_from(index)
            .ok()
            .filter(|_| span.contains(index))
            .ok_or(TreeError::IndexOutOfRange {
                index,
                l: span.l,
                r: span.r,
            })?;
        self.set_node(self.base.root(), 0, self.n - 1, pos, value);
        Ok(())
    }

    fn set_node(&mut self, id: usize, l: usize, r: usize, pos: usize, value: i64) -> i64 {
        let (left, right) = self.base.children(id);
        let updated = if l == r {
            value
        } else {
            let mid = (l + r) / 2;
            if pos <= mid {
                let a = self.set_node(left, l, mid, pos, value);
                self.aggregate.combine(a, self.value_at(right))
            } else {
                let b = self.set_node(right, mid + 1, r, pos, value);
                self.aggregate.combine(self.value_at(left), b)
            }
        };
        self.nodes[id] = Some(updated);
        updated
    }

    fn value_at(&self, id: usize) -> i64 {
        self.nodes.get(id).copied().flatten().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn base(&self) -> IndexBase {
        self.base
    }

    pub fn aggregate(&self) -> Aggregate {
        self.aggregate
    }

    /// Index range covered by the root.
    pub fn span(&self) -> Span {
        Span::new(0, i64::try_from(self.n).unwrap_or(i64::MAX) - 1)
    }

    /// Aggregate stored at slot `id`.
    pub fn node(&self, id: usize) -> Option<i64> {
        self.nodes.get(id).copied().flatten()
    }

    /// Aggregate over the whole array.
    pub fn total(&self) -> i64 {
        self.value_at(self.base.root())
    }
}

impl IndexedSource for ArraySegmentTree {
    fn attrs_at(&self, id: usize) -> Option<Vec<String>> {
        self.node(id).map(|v| vec![v.to_string()])
    }
}
