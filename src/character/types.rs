//! Character and class definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::constants::STARTING_GOLD;
use crate::error::GameError;
use crate::items::ItemEffect;

/// The four playable classes. Each carries its own special ability in
/// battle (see `combat::logic`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Class {
    Warrior,
    Mage,
    Rogue,
    Cleric,
}

impl Class {
    pub const ALL: [Class; 4] = [Class::Warrior, Class::Mage, Class::Rogue, Class::Cleric];

    /// Base stats at character creation: (health, strength, magic).
    pub fn base_stats(&self) -> (u32, u32, u32) {
        match self {
            Class::Warrior => (120, 15, 3),
            Class::Mage => (80, 5, 20),
            Class::Rogue => (100, 12, 8),
            Class::Cleric => (90, 8, 15),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Class::Warrior => "Warrior",
            Class::Mage => "Mage",
            Class::Rogue => "Rogue",
            Class::Cleric => "Cleric",
        }
    }

    /// Short flavor line for the special ability, shown in the UI.
    pub fn ability_name(&self) -> &'static str {
        match self {
            Class::Warrior => "Power Strike",
            Class::Mage => "Fireball",
            Class::Rogue => "Critical Strike",
            Class::Cleric => "Heal",
        }
    }
}

impl FromStr for Class {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warrior" => Ok(Class::Warrior),
            "mage" => Ok(Class::Mage),
            "rogue" => Ok(Class::Rogue),
            "cleric" => Ok(Class::Cleric),
            other => Err(GameError::InvalidClass(other.to_string())),
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An equipped weapon or armor piece. The applied effect is stored so
/// unequipping can revert it without a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedItem {
    pub item_id: String,
    pub effect: ItemEffect,
}

/// The player character record. Battle mutates `health`, `experience` and
/// `gold` in place; everything else belongs to the surrounding systems.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub class: Class,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub strength: u32,
    pub magic: u32,
    pub experience: u32,
    pub gold: u32,
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub equipped_weapon: Option<EquippedItem>,
    #[serde(default)]
    pub equipped_armor: Option<EquippedItem>,
    #[serde(default)]
    pub active_quests: Vec<String>,
    #[serde(default)]
    pub completed_quests: Vec<String>,
}

impl Character {
    pub fn new(name: String, class: Class) -> Self {
        let (health, strength, magic) = class.base_stats();
        Self {
            name,
            class,
            level: 1,
            health,
            max_health: health,
            strength,
            magic,
            experience: 0,
            gold: STARTING_GOLD,
            inventory: Vec::new(),
            equipped_weapon: None,
            equipped_armor: None,
            active_quests: Vec::new(),
            completed_quests: Vec::new(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Reduces health, clamped at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Restores health up to `max_health`. Returns the amount actually
    /// restored, which is zero at full health.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health - self.health);
        self.health += healed;
        healed
    }
}
