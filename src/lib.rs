//! Quest Chronicles - Terminal Turn-Based RPG Library
//!
//! This module exposes the game logic for testing and external use.

pub mod character;
pub mod character_manager;
pub mod combat;
pub mod core;
pub mod error;
pub mod items;
pub mod quests;
pub mod ui;
