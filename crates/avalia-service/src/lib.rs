//! # avalia-service
//!
//! Business logic service layer for Avalia. Each service orchestrates the
//! repositories and auth components to implement one group of use cases.
//!
//! Services follow constructor injection: every dependency is handed over at
//! construction time, repositories as `Arc<dyn …>` trait objects.

pub mod context;
pub mod cycle;
pub mod employee;
pub mod evaluation;
pub mod goal;
pub mod result;
pub mod seed;
mod validation;

#[cfg(test)]
mod testing;

pub use context::RequestContext;
pub use cycle::CycleService;
pub use employee::EmployeeService;
pub use evaluation::{BehavioralEvaluationService, DeliverablesEvaluationService};
pub use goal::GoalService;
pub use result::{FinalResult, FinalScore, ResultService};
pub use seed::{SeedReport, Seeder};
