//! Core type definitions used across the Avalia workspace.

pub mod pagination;
pub mod patch;

pub use pagination::PageRequest;
pub use patch::deserialize_some;
