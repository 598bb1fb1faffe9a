//! rapport-dataset
//!
//! Turns raw doctor/patient transcripts into a labeled JSON dataset.

pub mod error;
pub mod label;
pub mod transcript;
