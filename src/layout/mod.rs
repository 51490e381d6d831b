//! Layout engine — turns a segment tree snapshot into a [`LayoutGraph`].

pub mod dynamic_builder;
pub mod graph;
pub mod static_builder;
pub mod types;
mod walk;

pub use dynamic_builder::{DynamicLayoutBuilder, LinkedNode};
pub use graph::LayoutGraph;
pub use static_builder::{IndexBase, IndexedSource, StaticLayoutBuilder};
pub use types::{NodeAttrs, NodeLabel, Point, Span};

use crate::error::LayoutError;

/// Root half-width for a tree bounded by `m`: half the smallest power of two
/// that is at least `m`.
///
/// `m` is the element count for array trees and the upper range end for
/// linked trees.
pub fn root_half_width(m: i64) -> Result<f64, LayoutError> {
    if m < 1 {
        return Err(LayoutError::InvalidSize { bound: m });
    }
    let pow = m.unsigned_abs().next_power_of_two();
    Ok(pow as f64 / 2.0)
}
