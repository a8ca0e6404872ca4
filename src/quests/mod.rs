//! Quest system: catalog, acceptance rules, and completion rewards.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
