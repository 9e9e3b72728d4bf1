//! Wagering-points engine: parse → compute → validate → rewrite.

pub mod notation;
pub mod parser;
pub mod points;
pub mod validator;
pub mod rewriter;
pub mod batch;
