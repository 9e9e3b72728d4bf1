//! Batch correction over heterogeneous bet lists.
//!
//! Each element is corrected on its own. An element that fails to parse
//! is left untouched and recorded in the [`BatchReport`]; it never aborts
//! the rest of the batch.

use serde::Serialize;
use tracing::{debug, warn};

use super::notation::Notation;
use super::rewriter;
use crate::types::{BetEntry, BetError, Correctable};

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// A line whose annotation was changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineFix {
    pub index: usize,
    pub from: String,
    pub to: String,
}

/// A line left as-is because it could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    pub index: usize,
    pub text: String,
    pub error: String,
}

/// What happened to each element of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub total: usize,
    /// Correctable elements whose text was already right.
    pub unchanged: usize,
    /// Elements with no correctable text, passed through.
    pub passed_through: usize,
    pub fixed: Vec<LineFix>,
    pub skipped: Vec<SkippedLine>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.fixed.is_empty() && self.skipped.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Batch fixer
// ---------------------------------------------------------------------------

/// Correct every string-bearing element; pass everything else through.
pub fn fix_all_bet_points(entries: Vec<BetEntry>) -> Vec<BetEntry> {
    fix_all_bet_points_with_report(entries, &Notation::default()).0
}

/// [`fix_all_bet_points`] returning the per-element report as well.
pub fn fix_all_bet_points_with_report(
    mut entries: Vec<BetEntry>,
    notation: &Notation,
) -> (Vec<BetEntry>, BatchReport) {
    let report = fix_in_place(&mut entries, notation);
    (entries, report)
}

/// Correct a slice of [`Correctable`] elements in place.
pub fn fix_in_place<T: Correctable>(entries: &mut [T], notation: &Notation) -> BatchReport {
    let mut report = BatchReport {
        total: entries.len(),
        ..BatchReport::default()
    };

    for (index, entry) in entries.iter_mut().enumerate() {
        let Some(text) = entry.correctable_text() else {
            report.passed_through += 1;
            continue;
        };

        match rewriter::add_points_to_bet_with(text, notation) {
            Ok(fixed) if fixed == *text => report.unchanged += 1,
            Ok(fixed) => {
                let from = std::mem::replace(text, fixed.clone());
                report.fixed.push(LineFix { index, from, to: fixed });
            }
            Err(e) => {
                warn!(index, text = %text, error = %e, "Skipping unparseable bet line");
                report.skipped.push(skipped(index, text, &e));
            }
        }
    }

    debug!(
        total = report.total,
        fixed = report.fixed.len(),
        skipped = report.skipped.len(),
        passed_through = report.passed_through,
        "Batch corrected"
    );

    report
}

fn skipped(index: usize, text: &str, error: &BetError) -> SkippedLine {
    SkippedLine {
        index,
        text: text.to_string(),
        error: error.to_string(),
    }
}
