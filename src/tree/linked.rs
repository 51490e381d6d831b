//! Pointer-backed segment tree whose nodes are created on first write.

use crate::error::TreeError;
use crate::layout::{LinkedNode, NodeAttrs, Span};

use super::Aggregate;

/// Segment tree node owning its optional children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DynamicNode<A> {
    pub attrs: A,
    pub left: Option<Box<DynamicNode<A>>>,
    pub right: Option<Box<DynamicNode<A>>>,
}

impl<A> DynamicNode<A> {
    pub fn leaf(attrs: A) -> Self {
        Self {
            attrs,
            left: None,
            right: None,
        }
    }

    pub fn with_children(attrs: A, left: Option<Self>, right: Option<Self>) -> Self {
        Self {
            attrs,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Number of materialised nodes in this subtree.
    pub fn size(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.size()) + self.right.as_ref().map_or(0, |n| n.size())
    }
}

impl<A: NodeAttrs> LinkedNode for DynamicNode<A> {
    fn attrs(&self) -> Vec<String> {
        self.attrs.attrs()
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Sparse segment tree over `[l, r]`. Starts as a single root holding 0;
/// each assignment materialises the path down to its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicSegmentTree {
    span: Span,
    aggregate: Aggregate,
    root: DynamicNode<i64>,
}

impl DynamicSegmentTree {
    pub fn new(l: i64, r: i64, aggregate: Aggregate) -> Result<Self, TreeError> {
        if l > r {
            return Err(TreeError::InvalidRange { l, r });
        }
        Ok(Self {
            span: Span::new(l, r),
            aggregate,
            root: DynamicNode::leaf(0),
        })
    }

    pub fn set(&mut self, index: i64, value: i64) -> Result<(), TreeError> {
        if !self.span.contains(index) {
            return Err(TreeError::IndexOutOfRange {
                index,
                l: self.span.l,
                r: self.span.r,
            });
        }
        set_node(&mut self.root, self.span, index, value, self.aggregate);
        Ok(())
    }

    pub fn root(&self) -> &DynamicNode<i64> {
        &self.root
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn aggregate(&self) -> Aggregate {
        self.aggregate
    }
}

fn set_node(node: &mut DynamicNode<i64>, span: Span, index: i64, value: i64, agg: Aggregate) {
    if span.is_unit() {
        node.attrs = value;
        return;
    }
    let (updated, sibling, child_span) = if index <= span.mid() {
        (&mut node.left, &node.right, span.left_half())
    } else {
        (&mut node.right, &node.left, span.right_half())
    };
    let child = updated.get_or_insert_with(|| Box::new(DynamicNode::leaf(0)));
    set_node(child, child_span, index, value, agg);
    node.attrs = match sibling {
        Some(other) => agg.combine(child.attrs, other.attrs),
        None => child.attrs,
    };
}
