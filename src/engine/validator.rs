//! Validator: annotated points vs. computed points.
//!
//! Also provides [`diagnose_bet`], a human-readable report for a single
//! line used when auditing data by hand.

use std::fmt;

use super::notation::Notation;
use super::{parser, points, rewriter};
use crate::types::{BetError, BetResult, PointValidation, WageringExpression};

/// Compare a parsed expression's annotation with its computed points.
pub fn validate(expr: &WageringExpression) -> BetResult<PointValidation> {
    let expected = points::compute_points(expr)?;
    let actual = expr.annotated_points;
    Ok(PointValidation {
        is_valid: actual == Some(expected),
        expected,
        actual,
    })
}

/// Parse `expression` and validate its annotation.
///
/// An unannotated line is never valid.
pub fn validate_bet_points(expression: &str) -> BetResult<PointValidation> {
    validate_bet_points_with(expression, &Notation::default())
}

/// [`validate_bet_points`] with a custom notation.
pub fn validate_bet_points_with(
    expression: &str,
    notation: &Notation,
) -> BetResult<PointValidation> {
    let expr = parser::parse_with(expression, notation)?;
    validate(&expr)
}

// ---------------------------------------------------------------------------
// Diagnosis
// ---------------------------------------------------------------------------

/// Everything known about one line: validation outcome and the fix.
#[derive(Debug, Clone, PartialEq)]
pub struct BetDiagnosis {
    pub input: String,
    pub outcome: Result<PointValidation, BetError>,
    /// Corrected line, present when the line parsed but is not valid.
    pub corrected: Option<String>,
}

impl BetDiagnosis {
    pub fn needs_fix(&self) -> bool {
        self.corrected.is_some()
    }
}

impl fmt::Display for BetDiagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "input:     {}", self.input)?;
        match &self.outcome {
            Ok(v) => writeln!(f, "result:    {v}")?,
            Err(e) => writeln!(f, "error:     {e}")?,
        }
        match &self.corrected {
            Some(fixed) => write!(f, "corrected: {fixed}"),
            None if self.outcome.is_ok() => write!(f, "points are correct"),
            None => write!(f, "left unchanged"),
        }
    }
}

/// Diagnose a single line with the default notation.
pub fn diagnose_bet(expression: &str) -> BetDiagnosis {
    diagnose_bet_with(expression, &Notation::default())
}

/// [`diagnose_bet`] with a custom notation.
pub fn diagnose_bet_with(expression: &str, notation: &Notation) -> BetDiagnosis {
    let outcome = validate_bet_points_with(expression, notation);
    let corrected = match &outcome {
        Ok(v) if !v.is_valid => rewriter::add_points_to_bet_with(expression, notation).ok(),
        _ => None,
    };
    BetDiagnosis {
        input: expression.to_string(),
        outcome,
        corrected,
    }
}
