//! # avalia-core
//!
//! Core crate for Avalia. Contains configuration schemas, pagination and
//! patch helper types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Avalia crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
