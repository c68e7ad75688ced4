//! Employee (`colaborador`) domain entities.

pub mod model;

pub use model::{CreateEmployee, Employee, EmployeeChanges, EmployeeFilter, EmployeePatch, NewEmployee};
