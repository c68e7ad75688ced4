//! Route handlers organized by domain.

pub mod auth;
pub mod cycle;
pub mod deliverables;
pub mod employee;
pub mod evaluation;
pub mod goal;
pub mod health;
pub mod result;
