//! Final result aggregation.

pub mod aggregate;
pub mod service;

pub use aggregate::{FinalScore, aggregate_final_score};
pub use service::{FinalResult, ResultService};
