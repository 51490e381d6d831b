//! Line parser for the tree description format.
//!
//! ```text
//! static sum          # kind + aggregate
//! values 5 3 8 1      # static: array contents
//! base 0              # static, optional: root index 0 or 1
//! range 0 15          # dynamic: covered range (also `0..15`)
//! set 3 = 7           # point assignment, repeatable
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::Parser;
use crate::error::ParseError;
use crate::layout::IndexBase;
use crate::syntax::types::{Assignment, TreeDescription, TreeShape};
use crate::tree::Aggregate;

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(static|dynamic)(?:\s+([a-z]+))?$").expect("valid regex"));
static VALUES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^values((?:\s+-?\d+)+)$").expect("valid regex"));
static RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^range\s+(-?\d+)(?:\s*\.\.\s*|\s+)(-?\d+)$").expect("valid regex")
});
static SET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^set\s+(-?\d+)\s*=\s*(-?\d+)$").expect("valid regex"));
static BASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^base\s+(\S+)$").expect("valid regex"));

/// Parser for the line-oriented tree description format.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionParser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Static,
    Dynamic,
}

/// Fields collected so far; validated once the input is exhausted.
#[derive(Debug, Default)]
struct Pending {
    kind: Option<Kind>,
    aggregate: Aggregate,
    values: Option<Vec<i64>>,
    range: Option<(i64, i64)>,
    base: Option<IndexBase>,
    assignments: Vec<Assignment>,
}

fn number(text: &str, line: usize) -> Result<i64, ParseError> {
    text.parse::<i64>()
        .map_err(|e| ParseError::new(line, format!("invalid number '{text}': {e}")))
}

/// Strip a `#` comment and surrounding whitespace.
fn content(line: &str) -> &str {
    line.split_once('#').map_or(line, |(before, _)| before).trim()
}

impl Pending {
    fn header(&mut self, text: &str, line: usize) -> Result<(), ParseError> {
        let caps = HEADER.captures(text).ok_or_else(|| {
            ParseError::new(
                line,
                format!("expected header 'static|dynamic [sum|min|max]', found '{text}'"),
            )
        })?;
        self.kind = Some(if caps[1].eq_ignore_ascii_case("static") {
            Kind::Static
        } else {
            Kind::Dynamic
        });
        if let Some(name) = caps.get(2) {
            self.aggregate = Aggregate::from_name(name.as_str()).ok_or_else(|| {
                ParseError::new(line, format!("unknown aggregate '{}'", name.as_str()))
            })?;
        }
        Ok(())
    }

    fn statement(&mut self, kind: Kind, text: &str, line: usize) -> Result<(), ParseError> {
        if let Some(caps) = SET.captures(text) {
            self.assignments.push(Assignment {
                index: number(&caps[1], line)?,
                value: number(&caps[2], line)?,
                line,
            });
        } else if let Some(caps) = VALUES.captures(text) {
            if kind != Kind::Static {
                return Err(ParseError::new(line, "'values' only applies to static trees"));
            }
            if self.values.is_some() {
                return Err(ParseError::new(line, "duplicate 'values' line"));
            }
            let values = caps[1]
                .split_whitespace()
                .map(|v| number(v, line))
                .collect::<Result<Vec<_>, _>>()?;
            self.values = Some(values);
        } else if let Some(caps) = RANGE.captures(text) {
            if kind != Kind::Dynamic {
                return Err(ParseError::new(line, "'range' only applies to dynamic trees"));
            }
            if self.range.is_some() {
                return Err(ParseError::new(line, "duplicate 'range' line"));
            }
            self.range = Some((number(&caps[1], line)?, number(&caps[2], line)?));
        } else if let Some(caps) = BASE.captures(text) {
            if kind != Kind::Static {
                return Err(ParseError::new(line, "'base' only applies to static trees"));
            }
            self.base = Some(match &caps[1] {
                "0" => IndexBase::Zero,
                "1" => IndexBase::One,
                other => {
                    return Err(ParseError::new(
                        line,
                        format!("index base must be 0 or 1, found '{other}'"),
                    ));
                }
            });
        } else {
            return Err(ParseError::new(line, format!("unrecognised line '{text}'")));
        }
        Ok(())
    }

    fn finish(self) -> Result<TreeDescription, ParseError> {
        let shape = match self.kind {
            None => return Err(ParseError::new(0, "empty tree description")),
            Some(Kind::Static) => TreeShape::Static {
                values: self
                    .values
                    .ok_or_else(|| ParseError::new(0, "static tree needs a 'values' line"))?,
                base: self.base.unwrap_or_default(),
            },
            Some(Kind::Dynamic) => {
                let (l, r) = self
                    .range
                    .ok_or_else(|| ParseError::new(0, "dynamic tree needs a 'range' line"))?;
                TreeShape::Dynamic { l, r }
            }
        };
        Ok(TreeDescription {
            shape,
            aggregate: self.aggregate,
            assignments: self.assignments,
        })
    }
}

impl Parser for DescriptionParser {
    fn parse(&self, src: &str) -> Result<TreeDescription, ParseError> {
        let mut pending = Pending::default();
        for (i, raw) in src.lines().enumerate() {
            let line = i + 1;
            let text = content(raw);
            if text.is_empty() {
                continue;
            }
            match pending.kind {
                None => pending.header(text, line)?,
                Some(kind) => pending.statement(kind, text, line)?,
            }
        }
        pending.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_description.rs"]
mod tests;
