//! Character types and progression logic.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
