//! Goal (`meta`) domain entities.

pub mod model;

pub use model::{Goal, GoalFilter, GoalPatch, NewGoal};
