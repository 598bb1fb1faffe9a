//! rapport-scoring
//!
//! Statement scoring: case classification, guideline lookup, prompt
//! composition, sentiment scoring, and rubric synthesis. The server
//! crate wraps [`analyzer::Analyzer`] in HTTP.

pub mod analyzer;
pub mod case;
pub mod error;
pub mod lexicon;
pub mod noise;
pub mod prompt;
pub mod rubric;
pub mod sentiment;
