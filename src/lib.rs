//! bet-points: wagering-points engine for horse-racing predictions.
//!
//! Parses wagering lines such as `"2 ⇔ 1,3,6,7,9,13,14　14点"`, counts the
//! points they represent, checks the trailing annotation and rewrites it
//! when it is wrong or missing.

pub mod config;
pub mod types;
pub mod engine;
pub mod document;
pub mod storage;

pub use engine::batch::{fix_all_bet_points, fix_all_bet_points_with_report, BatchReport};
pub use engine::notation::Notation;
pub use engine::parser::parse;
pub use engine::points::compute_bet_points;
pub use engine::rewriter::add_points_to_bet;
pub use engine::validator::{diagnose_bet, validate_bet_points, BetDiagnosis};
pub use types::{BetEntry, BetError, BetResult, Direction, PointValidation, WageringExpression};
