//! Layout types: Span, NodeLabel, Point and the NodeAttrs labeling trait.

use std::fmt;

// ─── Span ─────────────────────────────────────────────────────────────────────

/// Inclusive index range `[l, r]` covered by a segment tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub l: i64,
    pub r: i64,
}

impl Span {
    pub fn new(l: i64, r: i64) -> Self {
        Self { l, r }
    }

    /// Floor midpoint; the left child covers `[l, mid]`, the right `[mid + 1, r]`.
    ///
    /// Halves each end before adding so spans near the `i64` limits do not
    /// overflow.
    pub fn mid(&self) -> i64 {
        (self.l >> 1) + (self.r >> 1) + (self.l & self.r & 1)
    }

    pub fn is_unit(&self) -> bool {
        self.l == self.r
    }

    pub fn left_half(&self) -> Self {
        Self::new(self.l, self.mid())
    }

    pub fn right_half(&self) -> Self {
        Self::new(self.mid().saturating_add(1), self.r)
    }

    pub fn contains(&self, index: i64) -> bool {
        self.l <= index && index <= self.r
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.l, self.r)
    }
}

// ─── NodeLabel ────────────────────────────────────────────────────────────────

/// Drawable identity of a node: caller attributes followed by the covered span.
///
/// Labels key the nodes of a [`LayoutGraph`](super::LayoutGraph). Two nodes
/// that produce equal labels collapse into one; callers must supply attributes
/// that tell apart nodes sharing a span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeLabel {
    pub attrs: Vec<String>,
    pub span: Span,
}

impl NodeLabel {
    pub fn new(attrs: Vec<String>, span: Span) -> Self {
        Self { attrs, span }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for attr in &self.attrs {
            write!(f, "{attr} ")?;
        }
        write!(f, "{}", self.span)
    }
}

// ─── Point ───────────────────────────────────────────────────────────────────

/// Planar position of a node. `y` is the negated depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── NodeAttrs ───────────────────────────────────────────────────────────────

/// Attribute sequence a tree node contributes to its label.
pub trait NodeAttrs {
    fn attrs(&self) -> Vec<String>;
}

macro_rules! display_attrs {
    ($($t:ty),* $(,)?) => {
        $(
            impl NodeAttrs for $t {
                fn attrs(&self) -> Vec<String> {
                    vec![self.to_string()]
                }
            }
        )*
    };
}

display_attrs!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    String, &str,
);

impl NodeAttrs for () {
    fn attrs(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<T: fmt::Display> NodeAttrs for Vec<T> {
    fn attrs(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
