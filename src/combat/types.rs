//! Enemy definitions, the enemy factory, and battle result types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::constants::{GOBLIN_MAX_LEVEL, ORC_MAX_LEVEL};
use crate::error::{GameError, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Goblin,
    Orc,
    Dragon,
}

impl EnemyKind {
    /// Base stats by kind: (health, strength, magic, xp_reward, gold_reward).
    pub fn base_stats(&self) -> (u32, u32, u32, u32, u32) {
        match self {
            EnemyKind::Goblin => (50, 8, 2, 25, 10),
            EnemyKind::Orc => (80, 12, 5, 50, 25),
            EnemyKind::Dragon => (200, 25, 15, 200, 100),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::Goblin => "goblin",
            EnemyKind::Orc => "orc",
            EnemyKind::Dragon => "dragon",
        }
    }

    /// Selects the enemy tier for a character level: goblins up to level 2,
    /// orcs through level 5, dragons beyond.
    pub fn for_level(level: u32) -> Self {
        if level <= GOBLIN_MAX_LEVEL {
            EnemyKind::Goblin
        } else if level <= ORC_MAX_LEVEL {
            EnemyKind::Orc
        } else {
            EnemyKind::Dragon
        }
    }
}

impl FromStr for EnemyKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "goblin" => Ok(EnemyKind::Goblin),
            "orc" => Ok(EnemyKind::Orc),
            "dragon" => Ok(EnemyKind::Dragon),
            other => Err(GameError::InvalidTargetKind(other.to_string())),
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub health: u32,
    pub max_health: u32,
    pub strength: u32,
    pub magic: u32,
    pub xp_reward: u32,
    pub gold_reward: u32,
}

impl Enemy {
    pub fn spawn(kind: EnemyKind) -> Self {
        let (health, strength, magic, xp_reward, gold_reward) = kind.base_stats();
        Self {
            kind,
            health,
            max_health: health,
            strength,
            magic,
            xp_reward,
            gold_reward,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

/// Creates an enemy from a kind name. Internal callers go through
/// `Enemy::spawn` with the typed kind; this entry point exists for
/// data-driven callers and fails on unrecognized names.
pub fn create_enemy(kind: &str) -> GameResult<Enemy> {
    let kind: EnemyKind = kind.parse()?;
    Ok(Enemy::spawn(kind))
}

/// Produces an enemy appropriate to a character's level.
pub fn enemy_for_level(level: u32) -> Enemy {
    Enemy::spawn(EnemyKind::for_level(level))
}

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Escaped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    Active,
    Ended(BattleOutcome),
}

/// The action a player takes on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    Special,
    Flee,
}

/// Final battle summary returned to the caller after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleResult {
    pub outcome: BattleOutcome,
    pub xp_gained: u32,
    pub gold_gained: u32,
}

/// Events emitted during a round so the UI can render a battle log
/// without the combat core printing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    PlayerAttack {
        damage: u32,
    },
    AbilityDamage {
        ability: &'static str,
        damage: u32,
        was_crit: bool,
    },
    AbilityHeal {
        ability: &'static str,
        amount: u32,
    },
    EscapeFailed,
    Escaped,
    EnemyAttack {
        damage: u32,
    },
    Victory {
        xp_gained: u32,
        gold_gained: u32,
        levels_gained: u32,
    },
    Defeat,
}
