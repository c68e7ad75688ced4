//! Goal operations.

pub mod service;

pub use service::GoalService;
