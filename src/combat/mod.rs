//! Combat system: the enemy factory and the battle engine.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
