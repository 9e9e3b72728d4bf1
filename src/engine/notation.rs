//! Textual conventions of wagering lines.
//!
//! The markers, separators and annotation suffix used by the prediction
//! data are collected here so the parser and rewriter never hard-code
//! them. Defaults match the published data; `config.toml` may override.

use serde::Deserialize;

use crate::types::{BetError, BetResult};

/// Characters that make up a wagering line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Notation {
    /// One-way marker (axis → partner).
    pub one_way: char,
    /// Two-way marker (axis ⇔ partner).
    pub two_way: char,
    /// Horse separator accepted on both sides.
    pub separator: char,
    /// Extra separators accepted on the partner side only.
    pub partner_separators: Vec<char>,
    /// Suffix that closes a point annotation.
    pub points_suffix: char,
    /// Written between the expression and its annotation by the rewriter.
    pub annotation_gap: char,
}

impl Default for Notation {
    fn default() -> Self {
        Self {
            one_way: '→',
            two_way: '⇔',
            separator: ',',
            partner_separators: vec!['、'],
            points_suffix: '点',
            annotation_gap: '\u{3000}',
        }
    }
}

impl Notation {
    /// Whether `c` splits horse numbers on the axis side.
    pub fn is_axis_separator(&self, c: char) -> bool {
        c == self.separator
    }

    /// Whether `c` splits horse numbers on the partner side.
    pub fn is_partner_separator(&self, c: char) -> bool {
        c == self.separator || self.partner_separators.contains(&c)
    }

    /// Reject notations the parser and rewriter cannot round-trip.
    ///
    /// The gap must be whitespace so a rewritten line strips back to the
    /// same body; markers must differ from each other and from every
    /// separator; the suffix cannot be a digit or whitespace.
    pub fn validate(&self) -> BetResult<()> {
        let invalid = |msg: String| Err(BetError::InvalidNotation(msg));

        if !self.annotation_gap.is_whitespace() {
            return invalid(format!("annotation_gap {:?} is not whitespace", self.annotation_gap));
        }
        if self.one_way == self.two_way {
            return invalid(format!("one_way and two_way are both {:?}", self.one_way));
        }
        if self.points_suffix.is_ascii_digit() || self.points_suffix.is_whitespace() {
            return invalid(format!("points_suffix {:?} is a digit or whitespace", self.points_suffix));
        }
        let separators = std::iter::once(&self.separator).chain(&self.partner_separators);
        for &sep in separators {
            if sep == self.one_way || sep == self.two_way {
                return invalid(format!("separator {sep:?} is also a direction marker"));
            }
        }
        Ok(())
    }

    /// Render the trailing annotation for `points`, gap included.
    pub fn annotation(&self, points: u64) -> String {
        format!("{}{}{}", self.annotation_gap, points, self.points_suffix)
    }
}
