//! Domain error taxonomy.
//!
//! None of these are retried internally; they propagate to the caller,
//! which decides user-facing messaging (e.g. offering revival on defeat).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("enemy kind '{0}' not recognized")]
    InvalidTargetKind(String),

    #[error("character class '{0}' not recognized")]
    InvalidClass(String),

    #[error("character is dead")]
    CharacterAlreadyDead,

    #[error("battle is not active")]
    BattleNotActive,

    #[error("item '{0}' not found in inventory")]
    ItemNotFound(String),

    #[error("item '{0}' is unknown")]
    UnknownItem(String),

    #[error("item '{0}' cannot be used that way")]
    InvalidItemKind(String),

    #[error("inventory is full")]
    InventoryFull,

    #[error("not enough gold (need {needed}, have {available})")]
    InsufficientGold { needed: u32, available: u32 },

    #[error("quest '{0}' not found")]
    QuestNotFound(String),

    #[error("quest '{0}' already completed or active")]
    QuestAlreadyCompleted(String),

    #[error("quest '{0}' is not active")]
    QuestNotActive(String),

    #[error("level {required} required for quest '{quest_id}'")]
    InsufficientLevel { quest_id: String, required: u32 },

    #[error("prerequisite '{prerequisite}' of quest '{quest_id}' not completed")]
    QuestRequirementsNotMet {
        quest_id: String,
        prerequisite: String,
    },
}

pub type GameResult<T> = Result<T, GameError>;
