//! Starburst charts and similarity reports for CliftonStrengths rosters.
//!
//! One-shot batch pipeline: load the roster, aggregate per configured
//! group, render polar starburst charts, write the pairwise similarity
//! tables.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod roster;
pub mod similarity;
pub mod starburst;
pub mod taxonomy;
