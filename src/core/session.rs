//! The game session: the explicit context object holding the current
//! character, the static catalogs, and the message log.

use std::collections::VecDeque;

use crate::character::{revive, spend_gold, Character};
use crate::combat::{enemy_for_level, Enemy};
use crate::core::constants::{MESSAGE_LOG_CAPACITY, REVIVE_COST_GOLD};
use crate::error::GameResult;
use crate::items::{item_catalog, Item};
use crate::quests::{quest_catalog, Quest};

pub struct GameSession {
    pub character: Character,
    pub items: Vec<Item>,
    pub quests: Vec<Quest>,
    pub messages: VecDeque<String>,
}

impl GameSession {
    pub fn new(character: Character) -> Self {
        Self {
            character,
            items: item_catalog(),
            quests: quest_catalog(),
            messages: VecDeque::with_capacity(MESSAGE_LOG_CAPACITY),
        }
    }

    /// Appends to the bounded message log shown in the UI.
    pub fn add_message(&mut self, message: String) {
        if self.messages.len() >= MESSAGE_LOG_CAPACITY {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    /// Rolls an encounter appropriate to the character's level.
    pub fn encounter_enemy(&self) -> Enemy {
        enemy_for_level(self.character.level)
    }

    /// Pays the revival fee and brings a dead character back at half
    /// health. Returns false (charging nothing) if the character is
    /// alive; errors if the gold is not there.
    pub fn paid_revival(&mut self) -> GameResult<bool> {
        if !self.character.is_dead() {
            return Ok(false);
        }
        spend_gold(&mut self.character, REVIVE_COST_GOLD)?;
        revive(&mut self.character);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Class;
    use crate::combat::EnemyKind;
    use crate::error::GameError;

    fn session() -> GameSession {
        GameSession::new(Character::new("Hero".to_string(), Class::Warrior))
    }

    #[test]
    fn test_message_log_is_bounded() {
        let mut s = session();
        for i in 0..25 {
            s.add_message(format!("msg {}", i));
        }
        assert_eq!(s.messages.len(), MESSAGE_LOG_CAPACITY);
        assert_eq!(s.messages.front().unwrap(), "msg 15");
    }

    #[test]
    fn test_encounter_matches_level() {
        let mut s = session();
        assert_eq!(s.encounter_enemy().kind, EnemyKind::Goblin);
        s.character.level = 4;
        assert_eq!(s.encounter_enemy().kind, EnemyKind::Orc);
        s.character.level = 9;
        assert_eq!(s.encounter_enemy().kind, EnemyKind::Dragon);
    }

    #[test]
    fn test_paid_revival() {
        let mut s = session();
        // Alive: nothing happens, nothing charged.
        assert!(!s.paid_revival().unwrap());
        assert_eq!(s.character.gold, 100);

        s.character.take_damage(1000);
        assert!(s.paid_revival().unwrap());
        assert_eq!(s.character.gold, 100 - REVIVE_COST_GOLD);
        assert_eq!(s.character.health, s.character.max_health / 2);
    }

    #[test]
    fn test_paid_revival_without_gold() {
        let mut s = session();
        s.character.take_damage(1000);
        s.character.gold = 5;
        assert!(matches!(
            s.paid_revival(),
            Err(GameError::InsufficientGold { .. })
        ));
        assert!(s.character.is_dead());
    }
}
