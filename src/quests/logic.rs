//! Quest acceptance, completion, and bookkeeping over the character's
//! quest log.

use crate::character::{add_gold, gain_experience, Character};
use crate::error::{GameError, GameResult};

use super::types::{find_quest, Quest};

/// Rewards granted by a completed quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestRewards {
    pub xp: u32,
    pub gold: u32,
}

/// Accepts a quest, enforcing level and prerequisite requirements.
pub fn accept_quest(character: &mut Character, quest_id: &str, catalog: &[Quest]) -> GameResult<()> {
    let quest = find_quest(catalog, quest_id)
        .ok_or_else(|| GameError::QuestNotFound(quest_id.to_string()))?;

    if character.completed_quests.iter().any(|q| q == quest_id)
        || character.active_quests.iter().any(|q| q == quest_id)
    {
        return Err(GameError::QuestAlreadyCompleted(quest_id.to_string()));
    }
    if character.level < quest.required_level {
        return Err(GameError::InsufficientLevel {
            quest_id: quest_id.to_string(),
            required: quest.required_level,
        });
    }
    if let Some(prereq) = quest.prerequisite {
        if !character.completed_quests.iter().any(|q| q == prereq) {
            return Err(GameError::QuestRequirementsNotMet {
                quest_id: quest_id.to_string(),
                prerequisite: prereq.to_string(),
            });
        }
    }

    character.active_quests.push(quest_id.to_string());
    Ok(())
}

/// Completes an active quest and grants its rewards through the
/// character module (so quest xp can trigger level-ups).
pub fn complete_quest(
    character: &mut Character,
    quest_id: &str,
    catalog: &[Quest],
) -> GameResult<QuestRewards> {
    let quest = find_quest(catalog, quest_id)
        .ok_or_else(|| GameError::QuestNotFound(quest_id.to_string()))?;

    let pos = character
        .active_quests
        .iter()
        .position(|q| q == quest_id)
        .ok_or_else(|| GameError::QuestNotActive(quest_id.to_string()))?;

    character.active_quests.remove(pos);
    character.completed_quests.push(quest_id.to_string());

    gain_experience(character, quest.reward_xp)?;
    add_gold(character, quest.reward_gold);

    Ok(QuestRewards {
        xp: quest.reward_xp,
        gold: quest.reward_gold,
    })
}

/// Drops a quest from the active list without reward.
pub fn abandon_quest(character: &mut Character, quest_id: &str) -> GameResult<()> {
    let pos = character
        .active_quests
        .iter()
        .position(|q| q == quest_id)
        .ok_or_else(|| GameError::QuestNotActive(quest_id.to_string()))?;
    character.active_quests.remove(pos);
    Ok(())
}

pub fn can_accept_quest(character: &Character, quest_id: &str, catalog: &[Quest]) -> bool {
    let Some(quest) = find_quest(catalog, quest_id) else {
        return false;
    };
    if character.active_quests.iter().any(|q| q == quest_id)
        || character.completed_quests.iter().any(|q| q == quest_id)
    {
        return false;
    }
    if character.level < quest.required_level {
        return false;
    }
    match quest.prerequisite {
        Some(prereq) => character.completed_quests.iter().any(|q| q == prereq),
        None => true,
    }
}

pub fn active_quests<'a>(character: &Character, catalog: &'a [Quest]) -> Vec<&'a Quest> {
    character
        .active_quests
        .iter()
        .filter_map(|id| find_quest(catalog, id))
        .collect()
}

pub fn completed_quests<'a>(character: &Character, catalog: &'a [Quest]) -> Vec<&'a Quest> {
    character
        .completed_quests
        .iter()
        .filter_map(|id| find_quest(catalog, id))
        .collect()
}

/// Quests the character could accept right now.
pub fn available_quests<'a>(character: &Character, catalog: &'a [Quest]) -> Vec<&'a Quest> {
    catalog
        .iter()
        .filter(|q| can_accept_quest(character, q.id, catalog))
        .collect()
}

/// The prerequisite chain ending at `quest_id`, root first.
pub fn prerequisite_chain(quest_id: &str, catalog: &[Quest]) -> GameResult<Vec<String>> {
    let mut chain = Vec::new();
    let mut current = Some(quest_id.to_string());
    while let Some(id) = current {
        let quest =
            find_quest(catalog, &id).ok_or_else(|| GameError::QuestNotFound(id.clone()))?;
        chain.push(id);
        current = quest.prerequisite.map(String::from);
    }
    chain.reverse();
    Ok(chain)
}

/// Percentage of the catalog the character has completed.
pub fn completion_percentage(character: &Character, catalog: &[Quest]) -> f64 {
    if catalog.is_empty() {
        return 0.0;
    }
    let completed = catalog
        .iter()
        .filter(|q| character.completed_quests.iter().any(|c| c == q.id))
        .count();
    completed as f64 / catalog.len() as f64 * 100.0
}

/// Total quest rewards the character has earned so far: (xp, gold).
pub fn total_rewards_earned(character: &Character, catalog: &[Quest]) -> (u32, u32) {
    completed_quests(character, catalog)
        .iter()
        .fold((0, 0), |(xp, gold), q| {
            (xp + q.reward_xp, gold + q.reward_gold)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Class;
    use crate::quests::types::quest_catalog;

    fn hero() -> Character {
        Character::new("Hero".to_string(), Class::Warrior)
    }

    #[test]
    fn test_accept_quest() {
        let catalog = quest_catalog();
        let mut c = hero();
        accept_quest(&mut c, "goblin_menace", &catalog).unwrap();
        assert_eq!(c.active_quests, vec!["goblin_menace"]);
    }

    #[test]
    fn test_accept_unknown_quest() {
        let catalog = quest_catalog();
        let mut c = hero();
        assert!(matches!(
            accept_quest(&mut c, "lost_socks", &catalog),
            Err(GameError::QuestNotFound(_))
        ));
    }

    #[test]
    fn test_accept_requires_level() {
        let catalog = quest_catalog();
        let mut c = hero();
        c.completed_quests.push("goblin_menace".to_string());
        let err = accept_quest(&mut c, "orc_warcamp", &catalog).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientLevel {
                quest_id: "orc_warcamp".to_string(),
                required: 3,
            }
        );
    }

    #[test]
    fn test_accept_requires_prerequisite() {
        let catalog = quest_catalog();
        let mut c = hero();
        c.level = 3;
        let err = accept_quest(&mut c, "orc_warcamp", &catalog).unwrap_err();
        assert_eq!(
            err,
            GameError::QuestRequirementsNotMet {
                quest_id: "orc_warcamp".to_string(),
                prerequisite: "goblin_menace".to_string(),
            }
        );
    }

    #[test]
    fn test_accept_rejects_duplicates() {
        let catalog = quest_catalog();
        let mut c = hero();
        accept_quest(&mut c, "goblin_menace", &catalog).unwrap();
        assert!(matches!(
            accept_quest(&mut c, "goblin_menace", &catalog),
            Err(GameError::QuestAlreadyCompleted(_))
        ));
    }

    #[test]
    fn test_complete_quest_grants_rewards() {
        let catalog = quest_catalog();
        let mut c = hero();
        accept_quest(&mut c, "goblin_menace", &catalog).unwrap();

        let rewards = complete_quest(&mut c, "goblin_menace", &catalog).unwrap();
        assert_eq!(rewards, QuestRewards { xp: 50, gold: 20 });
        assert_eq!(c.experience, 50);
        assert_eq!(c.gold, 120);
        assert!(c.active_quests.is_empty());
        assert_eq!(c.completed_quests, vec!["goblin_menace"]);
    }

    #[test]
    fn test_complete_inactive_quest() {
        let catalog = quest_catalog();
        let mut c = hero();
        assert!(matches!(
            complete_quest(&mut c, "goblin_menace", &catalog),
            Err(GameError::QuestNotActive(_))
        ));
    }

    #[test]
    fn test_abandon_quest() {
        let catalog = quest_catalog();
        let mut c = hero();
        accept_quest(&mut c, "goblin_menace", &catalog).unwrap();
        abandon_quest(&mut c, "goblin_menace").unwrap();
        assert!(c.active_quests.is_empty());
        assert!(matches!(
            abandon_quest(&mut c, "goblin_menace"),
            Err(GameError::QuestNotActive(_))
        ));
    }

    #[test]
    fn test_available_quests_filters() {
        let catalog = quest_catalog();
        let mut c = hero();
        let available: Vec<&str> = available_quests(&c, &catalog).iter().map(|q| q.id).collect();
        assert_eq!(available, vec!["goblin_menace", "herbalist_errand"]);

        c.completed_quests.push("goblin_menace".to_string());
        c.level = 3;
        let available: Vec<&str> = available_quests(&c, &catalog).iter().map(|q| q.id).collect();
        assert_eq!(available, vec!["orc_warcamp", "herbalist_errand"]);
    }

    #[test]
    fn test_prerequisite_chain_root_first() {
        let catalog = quest_catalog();
        let chain = prerequisite_chain("dragons_hoard", &catalog).unwrap();
        assert_eq!(chain, vec!["goblin_menace", "orc_warcamp", "dragons_hoard"]);
    }

    #[test]
    fn test_completion_percentage() {
        let catalog = quest_catalog();
        let mut c = hero();
        assert_eq!(completion_percentage(&c, &catalog), 0.0);
        c.completed_quests.push("goblin_menace".to_string());
        assert_eq!(completion_percentage(&c, &catalog), 25.0);
    }

    #[test]
    fn test_total_rewards_earned() {
        let catalog = quest_catalog();
        let mut c = hero();
        c.completed_quests.push("goblin_menace".to_string());
        c.completed_quests.push("herbalist_errand".to_string());
        assert_eq!(total_rewards_earned(&c, &catalog), (80, 35));
    }
}
