//! Shared types for the wagering-points engine.
//!
//! These types form the data model used by the parser, calculator,
//! validator and rewriter, plus the batch and document layers built on
//! top of them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Combination direction between axis and partner horses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `→`: axis to partner only.
    OneWay,
    /// `⇔`: both ways, doubling the count.
    TwoWay,
}

impl Direction {
    /// Factor applied to `axis × partner`.
    pub fn multiplier(&self) -> u64 {
        match self {
            Direction::OneWay => 1,
            Direction::TwoWay => 2,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::OneWay => write!(f, "one-way"),
            Direction::TwoWay => write!(f, "two-way"),
        }
    }
}

// ---------------------------------------------------------------------------
// Wagering expression
// ---------------------------------------------------------------------------

/// A parsed wagering line such as `"13 ⇔ 1,2,8,9　8点"`.
///
/// Horse numbers are kept as the textual tokens they were written as.
/// Duplicates are counted; ranges are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageringExpression {
    pub axis_horses: Vec<String>,
    pub partner_horses: Vec<String>,
    pub direction: Direction,
    /// Point count found in the trailing `N点` annotation, if any.
    pub annotated_points: Option<u64>,
    /// The expression text with the annotation stripped and trimmed.
    pub body: String,
}

impl WageringExpression {
    /// Whether the line carried a point annotation.
    pub fn is_annotated(&self) -> bool {
        self.annotated_points.is_some()
    }
}

impl fmt::Display for WageringExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} axis × {} partner, {}]",
            self.body,
            self.axis_horses.len(),
            self.partner_horses.len(),
            self.direction,
        )
    }
}

// ---------------------------------------------------------------------------
// Validation result
// ---------------------------------------------------------------------------

/// Outcome of comparing the annotated point count with the computed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointValidation {
    pub is_valid: bool,
    pub expected: u64,
    /// `None` when the line had no annotation.
    pub actual: Option<u64>,
}

impl fmt::Display for PointValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.actual {
            Some(actual) => write!(
                f,
                "{} (expected {}点, annotated {}点)",
                if self.is_valid { "valid" } else { "invalid" },
                self.expected,
                actual,
            ),
            None => write!(f, "missing annotation (expected {}点)", self.expected),
        }
    }
}

// ---------------------------------------------------------------------------
// Batch entries
// ---------------------------------------------------------------------------

/// Name of the record field that carries the wagering text.
pub const NUMBERS_FIELD: &str = "numbers";

/// One element of a heterogeneous bet list.
///
/// Serializes to exactly the JSON it was read from: a bare string, an
/// object with a non-empty `numbers` string field (kept whole, fields in
/// order), or any other value.
#[derive(Debug, Clone, PartialEq)]
pub enum BetEntry {
    Text(String),
    /// Invariant: `numbers` is present and a non-empty string.
    Record(Map<String, Value>),
    Other(Value),
}

impl BetEntry {
    /// The `numbers` text of a record.
    pub fn numbers(&self) -> Option<&str> {
        match self {
            BetEntry::Record(map) => map.get(NUMBERS_FIELD).and_then(Value::as_str),
            _ => None,
        }
    }
}

impl From<Value> for BetEntry {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => BetEntry::Text(s),
            Value::Object(mut map) => {
                if numbers_mut(&mut map).is_some() {
                    BetEntry::Record(map)
                } else {
                    BetEntry::Other(Value::Object(map))
                }
            }
            other => BetEntry::Other(other),
        }
    }
}

impl From<BetEntry> for Value {
    fn from(entry: BetEntry) -> Self {
        match entry {
            BetEntry::Text(s) => Value::String(s),
            BetEntry::Record(map) => Value::Object(map),
            BetEntry::Other(v) => v,
        }
    }
}

impl From<&str> for BetEntry {
    fn from(s: &str) -> Self {
        BetEntry::Text(s.to_string())
    }
}

impl Serialize for BetEntry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BetEntry::Text(s) => s.serialize(serializer),
            BetEntry::Record(map) => map.serialize(serializer),
            BetEntry::Other(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for BetEntry {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(BetEntry::from)
    }
}

/// Something that exposes a wagering line the batch fixer may rewrite.
pub trait Correctable {
    /// The correctable text, or `None` to pass the element through.
    fn correctable_text(&mut self) -> Option<&mut String>;
}

fn numbers_mut(map: &mut Map<String, Value>) -> Option<&mut String> {
    match map.get_mut(NUMBERS_FIELD) {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

impl Correctable for BetEntry {
    fn correctable_text(&mut self) -> Option<&mut String> {
        match self {
            BetEntry::Text(s) => Some(s),
            BetEntry::Record(map) => numbers_mut(map),
            BetEntry::Other(_) => None,
        }
    }
}

impl Correctable for Value {
    fn correctable_text(&mut self) -> Option<&mut String> {
        match self {
            Value::String(s) => Some(s),
            Value::Object(map) => numbers_mut(map),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BetError {
    #[error("Ambiguous or missing separator in {0:?}: expected exactly one of ⇔ or →")]
    AmbiguousOrMissingSeparator(String),

    #[error("Empty operand in {0:?}: both sides need at least one horse number")]
    EmptyOperand(String),

    #[error("Point count overflow in {0:?}")]
    Overflow(String),

    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Invalid notation: {0}")]
    InvalidNotation(String),
}

pub type BetResult<T> = Result<T, BetError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
