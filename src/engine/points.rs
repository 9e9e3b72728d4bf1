//! Point calculator.
//!
//! points = |axis| × |partner| × (2 if two-way else 1)
//!
//! A one-way bet pairs each axis horse with each partner horse once; a
//! two-way bet also pairs them back. Integers only.

use super::notation::Notation;
use super::parser;
use crate::types::{BetError, BetResult, WageringExpression};

/// Points represented by an already-parsed expression.
///
/// Always recomputed from the token lists; the annotation is ignored.
pub fn compute_points(expr: &WageringExpression) -> BetResult<u64> {
    let points = (expr.axis_horses.len() as u64)
        .checked_mul(expr.partner_horses.len() as u64)
        .and_then(|p| p.checked_mul(expr.direction.multiplier()))
        .ok_or_else(|| BetError::Overflow(expr.body.clone()))?;

    // The parser never yields an empty side.
    if points == 0 {
        return Err(BetError::InvariantViolation(format!(
            "zero points computed for {:?}",
            expr.body
        )));
    }

    Ok(points)
}

/// Parse `expression` and return the number of points it represents.
pub fn compute_bet_points(expression: &str) -> BetResult<u64> {
    compute_bet_points_with(expression, &Notation::default())
}

/// [`compute_bet_points`] with a custom notation.
pub fn compute_bet_points_with(expression: &str, notation: &Notation) -> BetResult<u64> {
    let expr = parser::parse_with(expression, notation)?;
    compute_points(&expr)
}
