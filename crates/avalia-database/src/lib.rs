//! # avalia-database
//!
//! Persistence for Avalia. Repository traits live in [`repository`]; they are
//! implemented by the PostgreSQL backend in [`postgres`] and by the
//! process-local [`memory::MemoryStore`]. [`Repositories`] bundles one backend
//! behind trait objects, selected from configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod provider;
pub mod repository;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use provider::Repositories;
pub use repository::{
    BehavioralEvaluationRepository, CycleRepository, DeliverablesEvaluationRepository,
    EmployeeRepository, GoalRepository,
};
