//! Rewriter: replace or add the trailing point annotation.

use tracing::debug;

use super::notation::Notation;
use super::{parser, points};
use crate::types::BetResult;

/// Return `expression` with a correct `　N点` annotation.
///
/// Any existing annotation is dropped first, so the result is stable
/// under repeated application.
pub fn add_points_to_bet(expression: &str) -> BetResult<String> {
    add_points_to_bet_with(expression, &Notation::default())
}

/// [`add_points_to_bet`] with a custom notation.
pub fn add_points_to_bet_with(expression: &str, notation: &Notation) -> BetResult<String> {
    let expr = parser::parse_with(expression, notation)?;
    let points = points::compute_points(&expr)?;
    let rewritten = format!("{}{}", expr.body, notation.annotation(points));

    if rewritten != expression {
        debug!(from = expression, to = %rewritten, "Rewrote point annotation");
    }

    Ok(rewritten)
}
