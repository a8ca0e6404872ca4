//! Character progression: experience, leveling, gold, and revival.

use crate::core::constants::{
    LEVEL_UP_MAGIC_GAIN, LEVEL_UP_MAX_HEALTH_GAIN, LEVEL_UP_STRENGTH_GAIN, XP_PER_LEVEL_FACTOR,
};
use crate::error::{GameError, GameResult};

use super::types::Character;

/// Experience needed to go from `level` to `level + 1`.
pub fn xp_threshold(level: u32) -> u32 {
    level * XP_PER_LEVEL_FACTOR
}

/// Summary of what `gain_experience` did, for UI messaging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelUpReport {
    pub levels_gained: u32,
}

/// Grants experience and applies any level-ups.
///
/// Each level-up consumes `level * 100` experience and grants +10 max
/// health, +2 strength, +2 magic, and a full heal. Dead characters cannot
/// gain experience.
pub fn gain_experience(character: &mut Character, xp: u32) -> GameResult<LevelUpReport> {
    if character.is_dead() {
        return Err(GameError::CharacterAlreadyDead);
    }

    character.experience += xp;

    let mut report = LevelUpReport::default();
    while character.experience >= xp_threshold(character.level) {
        character.experience -= xp_threshold(character.level);
        character.level += 1;
        character.max_health += LEVEL_UP_MAX_HEALTH_GAIN;
        character.strength += LEVEL_UP_STRENGTH_GAIN;
        character.magic += LEVEL_UP_MAGIC_GAIN;
        character.health = character.max_health;
        report.levels_gained += 1;
    }

    Ok(report)
}

pub fn add_gold(character: &mut Character, amount: u32) -> u32 {
    character.gold += amount;
    character.gold
}

/// Deducts gold, failing without mutation if the balance is too low.
pub fn spend_gold(character: &mut Character, amount: u32) -> GameResult<u32> {
    if character.gold < amount {
        return Err(GameError::InsufficientGold {
            needed: amount,
            available: character.gold,
        });
    }
    character.gold -= amount;
    Ok(character.gold)
}

/// Brings a dead character back at half max health. Returns false (and
/// changes nothing) if the character is still alive.
pub fn revive(character: &mut Character) -> bool {
    if !character.is_dead() {
        return false;
    }
    character.health = character.max_health / 2;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Class;

    fn hero() -> Character {
        Character::new("Hero".to_string(), Class::Warrior)
    }

    #[test]
    fn test_gain_experience_no_level_up() {
        let mut c = hero();
        let report = gain_experience(&mut c, 99).unwrap();
        assert_eq!(report.levels_gained, 0);
        assert_eq!(c.experience, 99);
        assert_eq!(c.level, 1);
    }

    #[test]
    fn test_gain_experience_single_level_up() {
        let mut c = hero();
        c.take_damage(50);
        let report = gain_experience(&mut c, 120).unwrap();
        assert_eq!(report.levels_gained, 1);
        assert_eq!(c.level, 2);
        assert_eq!(c.experience, 20);
        assert_eq!(c.max_health, 130);
        assert_eq!(c.strength, 17);
        assert_eq!(c.magic, 5);
        // Level-up fully heals.
        assert_eq!(c.health, c.max_health);
    }

    #[test]
    fn test_gain_experience_multi_level_up() {
        let mut c = hero();
        // 100 (1->2) + 200 (2->3) + 10 left over
        let report = gain_experience(&mut c, 310).unwrap();
        assert_eq!(report.levels_gained, 2);
        assert_eq!(c.level, 3);
        assert_eq!(c.experience, 10);
    }

    #[test]
    fn test_gain_experience_dead_character() {
        let mut c = hero();
        c.take_damage(1000);
        assert_eq!(
            gain_experience(&mut c, 50),
            Err(GameError::CharacterAlreadyDead)
        );
        assert_eq!(c.experience, 0);
    }

    #[test]
    fn test_spend_gold() {
        let mut c = hero();
        assert_eq!(spend_gold(&mut c, 30).unwrap(), 70);
        let err = spend_gold(&mut c, 1000).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientGold {
                needed: 1000,
                available: 70
            }
        );
        assert_eq!(c.gold, 70);
    }

    #[test]
    fn test_revive() {
        let mut c = hero();
        assert!(!revive(&mut c));
        c.take_damage(1000);
        assert!(revive(&mut c));
        assert_eq!(c.health, c.max_health / 2);
    }
}
