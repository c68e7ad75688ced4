//! HTTP-level integration tests against the in-memory backend.

mod helpers;

mod auth_test;
mod cycle_test;
mod employee_test;
mod evaluation_test;
mod goal_test;
mod result_test;
