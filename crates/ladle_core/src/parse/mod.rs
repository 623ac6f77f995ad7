//! Free-text parsing heuristics.
//!
//! # Responsibility
//! - Turn raw ingredient lines into structured records.
//! - Keep all tokenization and unit vocabulary inside core.

pub mod ingredient;
