//! Employee registry operations.

pub mod service;

pub use service::EmployeeService;
