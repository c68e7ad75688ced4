//! Review cycle operations.

pub mod service;

pub use service::CycleService;
