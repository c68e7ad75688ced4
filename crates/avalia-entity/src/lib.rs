//! # avalia-entity
//!
//! Domain entity models for Avalia. Every struct in this crate represents a
//! database row, a creation payload, or a partial-update patch. Row types
//! derive `sqlx::FromRow`; payloads derive `validator::Validate`.

pub mod cycle;
pub mod employee;
pub mod evaluation;
pub mod goal;
pub mod score;

pub use cycle::{Cycle, CyclePatch, CycleStatus, NewCycle};
pub use employee::{CreateEmployee, Employee, EmployeeChanges, EmployeeFilter, EmployeePatch, NewEmployee};
pub use evaluation::{
    BehavioralEvaluation, BehavioralEvaluationPatch, DeliverablesEvaluation,
    DeliverablesEvaluationPatch, Evaluation, EvaluationFilter, EvaluationStatus, EvaluationType,
    NewBehavioralEvaluation, NewDeliverablesEvaluation,
};
pub use goal::{Goal, GoalFilter, GoalPatch, NewGoal};
