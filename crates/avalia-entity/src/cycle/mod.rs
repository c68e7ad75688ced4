//! Review cycle (`ciclo`) domain entities.

pub mod model;
pub mod status;

pub use model::{Cycle, CyclePatch, NewCycle};
pub use status::CycleStatus;
