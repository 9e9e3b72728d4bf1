//! Prediction-document correction.
//!
//! Walks `races[].strategies.<name>.bets[]` of a prediction document and
//! runs the batch fixer over every `bets` array. Anything that does not
//! have that shape is ignored.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::engine::batch::{self, BatchReport};
use crate::engine::notation::Notation;

/// A bet line changed inside a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Correction {
    /// `raceNumber` of the race, or its 1-based position as `"<n>R"`.
    pub race: String,
    pub strategy: String,
    pub index: usize,
    pub from: String,
    pub to: String,
}

/// A bet line that could not be parsed and was left alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    pub race: String,
    pub strategy: String,
    pub index: usize,
    pub text: String,
    pub error: String,
}

/// Outcome of correcting a whole document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub checked_at: DateTime<Utc>,
    pub dry_run: bool,
    pub races: usize,
    pub bet_lists: usize,
    pub bets: usize,
    pub corrections: Vec<Correction>,
    pub skipped: Vec<Skipped>,
}

impl DocumentReport {
    fn new(dry_run: bool) -> Self {
        Self {
            checked_at: Utc::now(),
            dry_run,
            races: 0,
            bet_lists: 0,
            bets: 0,
            corrections: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Whether a write-back would change the document.
    pub fn has_changes(&self) -> bool {
        !self.corrections.is_empty()
    }

    fn absorb(&mut self, race: &str, strategy: &str, report: BatchReport) {
        self.bet_lists += 1;
        self.bets += report.total;
        self.corrections.extend(report.fixed.into_iter().map(|f| Correction {
            race: race.to_string(),
            strategy: strategy.to_string(),
            index: f.index,
            from: f.from,
            to: f.to,
        }));
        self.skipped.extend(report.skipped.into_iter().map(|s| Skipped {
            race: race.to_string(),
            strategy: strategy.to_string(),
            index: s.index,
            text: s.text,
            error: s.error,
        }));
    }
}

/// Correct every bet list in `doc` in place.
pub fn fix_document(doc: &mut Value, notation: &Notation) -> DocumentReport {
    let mut report = DocumentReport::new(false);
    walk(doc, notation, &mut report);
    log_summary(&report);
    report
}

/// Report what [`fix_document`] would change without touching `doc`.
pub fn audit_document(doc: &Value, notation: &Notation) -> DocumentReport {
    let mut scratch = doc.clone();
    let mut report = DocumentReport::new(true);
    walk(&mut scratch, notation, &mut report);
    log_summary(&report);
    report
}

fn walk(doc: &mut Value, notation: &Notation, report: &mut DocumentReport) {
    let Some(races) = doc.get_mut("races").and_then(Value::as_array_mut) else {
        debug!("Document has no races array");
        return;
    };

    for (i, race) in races.iter_mut().enumerate() {
        report.races += 1;
        let label = race_label(race, i);

        let Some(strategies) = race.get_mut("strategies").and_then(Value::as_object_mut) else {
            continue;
        };

        for (name, strategy) in strategies.iter_mut() {
            let Some(bets) = strategy.get_mut("bets").and_then(Value::as_array_mut) else {
                continue;
            };
            let batch_report = batch::fix_in_place(bets.as_mut_slice(), notation);
            report.absorb(&label, name, batch_report);
        }
    }
}

fn race_label(race: &Value, index: usize) -> String {
    match race.get("raceNumber") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => format!("{n}R"),
        _ => format!("{}R", index + 1),
    }
}

fn log_summary(report: &DocumentReport) {
    info!(
        dry_run = report.dry_run,
        races = report.races,
        bet_lists = report.bet_lists,
        bets = report.bets,
        corrections = report.corrections.len(),
        skipped = report.skipped.len(),
        "Document checked"
    );
}
