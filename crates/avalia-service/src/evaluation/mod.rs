//! Behavioral and deliverables evaluation operations.

pub mod behavioral;
pub mod deliverables;

pub use behavioral::BehavioralEvaluationService;
pub use deliverables::DeliverablesEvaluationService;
