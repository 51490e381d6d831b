//! Segment tree sources that feed the layout builders.
//!
//! Only build and point assignment are provided; they are enough to produce
//! snapshots for drawing.

pub mod array;
pub mod linked;

pub use array::ArraySegmentTree;
pub use linked::{DynamicNode, DynamicSegmentTree};

/// Aggregate a segment tree node stores over its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregate {
    #[default]
    Sum,
    Min,
    Max,
}

impl Aggregate {
    pub fn combine(self, a: i64, b: i64) -> i64 {
        match self {
            Aggregate::Sum => a.saturating_add(b),
            Aggregate::Min => a.min(b),
            Aggregate::Max => a.max(b),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sum" => Some(Aggregate::Sum),
            "min" => Some(Aggregate::Min),
            "max" => Some(Aggregate::Max),
            _ => None,
        }
    }
}
