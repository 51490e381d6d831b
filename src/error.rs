//! Error types for layout construction, tree sources and description parsing.

use thiserror::Error;

use crate::layout::types::Span;

/// Errors raised while building a layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The element count / range bound has no valid root width.
    #[error("segment tree must cover at least one element (bound {bound} < 1)")]
    InvalidSize { bound: i64 },

    /// A dynamic root was given a range whose left end exceeds its right end.
    #[error("invalid range [{l}, {r}]: left end exceeds right end")]
    InvalidRange { l: i64, r: i64 },

    /// The indexed source has no entry for an index the walk visited.
    #[error("source has no node at index {id} (covering {span})")]
    MalformedSourceMapping { id: usize, span: Span },
}

/// Errors raised by the bundled segment tree sources.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("index {index} is outside the tree range [{l}, {r}]")]
    IndexOutOfRange { index: i64, l: i64, r: i64 },

    #[error("cannot build a segment tree over an empty array")]
    Empty,

    #[error("invalid tree range [{l}, {r}]")]
    InvalidRange { l: i64, r: i64 },
}

/// A tree description failed to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ParseError {
    /// 1-based line number; 0 when the error concerns the whole input.
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Top-level error returned by [`crate::render_source`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
