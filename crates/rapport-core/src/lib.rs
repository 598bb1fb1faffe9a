//! rapport-core
//!
//! Pure domain types for statement analysis. No HTTP or classifier
//! dependency. This is the shared vocabulary of the Rapport system.

pub mod models;
