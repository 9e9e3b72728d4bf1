//! Staged parser for wagering lines.
//!
//! strip annotation → detect separator → split operands → check operands.
//! Each stage is a standalone function so it can be tested on its own.

use tracing::debug;

use super::notation::Notation;
use crate::types::{BetError, BetResult, Direction, WageringExpression};

/// Parse a raw wagering line with the default notation.
pub fn parse(line: &str) -> BetResult<WageringExpression> {
    parse_with(line, &Notation::default())
}

/// Parse a raw wagering line.
pub fn parse_with(line: &str, notation: &Notation) -> BetResult<WageringExpression> {
    let (body, annotated_points) = strip_annotation(line, notation);
    let body = body.trim();

    let (direction, axis, partner) = split_on_marker(body, notation)
        .ok_or_else(|| BetError::AmbiguousOrMissingSeparator(line.to_string()))?;

    let axis_horses = tokens(axis, |c| notation.is_axis_separator(c));
    let partner_horses = tokens(partner, |c| notation.is_partner_separator(c));

    if axis_horses.is_empty() || partner_horses.is_empty() {
        return Err(BetError::EmptyOperand(line.to_string()));
    }

    debug!(
        line,
        %direction,
        axis = axis_horses.len(),
        partner = partner_horses.len(),
        annotated = ?annotated_points,
        "Parsed wagering line"
    );

    Ok(WageringExpression {
        axis_horses,
        partner_horses,
        direction,
        annotated_points,
        body: body.to_string(),
    })
}

/// Remove a trailing `<ws>*<digits>点<ws>*` annotation.
///
/// Returns the remaining text (untrimmed on the left) and the annotated
/// count. Text that does not end in an annotation is returned whole.
/// A count too large for `u64` is still stripped and saturates.
pub fn strip_annotation<'a>(line: &'a str, notation: &Notation) -> (&'a str, Option<u64>) {
    let rest = line.trim_end();
    let Some(rest) = rest.strip_suffix(notation.points_suffix) else {
        return (line, None);
    };

    let digits_start = rest
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i);
    let Some(start) = digits_start else {
        return (line, None);
    };

    let points = rest[start..].parse::<u64>().unwrap_or(u64::MAX);

    (rest[..start].trim_end(), Some(points))
}

/// Find the single direction marker and split around it.
///
/// `None` when neither marker is present, both are, or the marker
/// occurs more than once.
fn split_on_marker<'a>(
    body: &'a str,
    notation: &Notation,
) -> Option<(Direction, &'a str, &'a str)> {
    let two_way = body.matches(notation.two_way).count();
    let one_way = body.matches(notation.one_way).count();

    let (direction, marker) = match (two_way, one_way) {
        (1, 0) => (Direction::TwoWay, notation.two_way),
        (0, 1) => (Direction::OneWay, notation.one_way),
        _ => return None,
    };

    body.split_once(marker)
        .map(|(left, right)| (direction, left, right))
}

/// Split on `is_sep`, trim, and drop empty tokens.
fn tokens(side: &str, is_sep: impl Fn(char) -> bool) -> Vec<String> {
    side.split(is_sep)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
