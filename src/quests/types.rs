//! Quest definitions and the static quest catalog.

#[derive(Debug, Clone)]
pub struct Quest {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub reward_xp: u32,
    pub reward_gold: u32,
    pub required_level: u32,
    pub prerequisite: Option<&'static str>,
}

/// Returns the quest catalog. Prerequisites form chains; a quest with
/// `prerequisite: None` is a chain root.
pub fn quest_catalog() -> Vec<Quest> {
    vec![
        Quest {
            id: "goblin_menace",
            title: "The Goblin Menace",
            description: "Drive the goblins out of the village fields.",
            reward_xp: 50,
            reward_gold: 20,
            required_level: 1,
            prerequisite: None,
        },
        Quest {
            id: "orc_warcamp",
            title: "The Orc Warcamp",
            description: "Scatter the orc warband massing in the hills.",
            reward_xp: 120,
            reward_gold: 60,
            required_level: 3,
            prerequisite: Some("goblin_menace"),
        },
        Quest {
            id: "dragons_hoard",
            title: "The Dragon's Hoard",
            description: "Slay the dragon and reclaim the mountain hoard.",
            reward_xp: 400,
            reward_gold: 250,
            required_level: 6,
            prerequisite: Some("orc_warcamp"),
        },
        Quest {
            id: "herbalist_errand",
            title: "The Herbalist's Errand",
            description: "Gather moonpetal herbs for the village healer.",
            reward_xp: 30,
            reward_gold: 15,
            required_level: 1,
            prerequisite: None,
        },
    ]
}

pub fn find_quest<'a>(catalog: &'a [Quest], quest_id: &str) -> Option<&'a Quest> {
    catalog.iter().find(|q| q.id == quest_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_prerequisites_exist() {
        let catalog = quest_catalog();
        for quest in &catalog {
            if let Some(prereq) = quest.prerequisite {
                assert!(
                    find_quest(&catalog, prereq).is_some(),
                    "quest {} has dangling prerequisite {}",
                    quest.id,
                    prereq
                );
            }
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = quest_catalog();
        for (i, a) in catalog.iter().enumerate() {
            for b in catalog.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
