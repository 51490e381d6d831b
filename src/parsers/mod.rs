//! Parsers for tree descriptions.

pub mod description;

pub use description::DescriptionParser;

use crate::error::ParseError;
use crate::syntax::types::TreeDescription;

/// Trait for tree description parsers.
pub trait Parser {
    /// Parse the input source string into a tree description.
    fn parse(&self, src: &str) -> Result<TreeDescription, ParseError>;
}

/// Parse a tree description with the default line parser.
pub fn parse(src: &str) -> Result<TreeDescription, ParseError> {
    DescriptionParser.parse(src)
}
