//! Item definitions and the static item catalog.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Armor,
    Consumable,
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "weapon",
            ItemKind::Armor => "armor",
            ItemKind::Consumable => "consumable",
        }
    }
}

/// Which character stat an item modifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatKind {
    Health,
    MaxHealth,
    Strength,
    Magic,
}

/// A typed stat modification carried by an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEffect {
    pub stat: StatKind,
    pub amount: u32,
}

#[derive(Debug, Clone)]
pub struct Item {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ItemKind,
    pub effect: ItemEffect,
    pub cost: u32,
    pub description: &'static str,
}

/// Returns the full item catalog available in shops and drops.
pub fn item_catalog() -> Vec<Item> {
    vec![
        Item {
            id: "potion",
            name: "Health Potion",
            kind: ItemKind::Consumable,
            effect: ItemEffect {
                stat: StatKind::Health,
                amount: 20,
            },
            cost: 10,
            description: "Restores 20 health when used.",
        },
        Item {
            id: "greater_potion",
            name: "Greater Health Potion",
            kind: ItemKind::Consumable,
            effect: ItemEffect {
                stat: StatKind::Health,
                amount: 50,
            },
            cost: 25,
            description: "Restores 50 health when used.",
        },
        Item {
            id: "sword",
            name: "Iron Sword",
            kind: ItemKind::Weapon,
            effect: ItemEffect {
                stat: StatKind::Strength,
                amount: 5,
            },
            cost: 20,
            description: "A dependable blade. +5 strength.",
        },
        Item {
            id: "steel_sword",
            name: "Steel Sword",
            kind: ItemKind::Weapon,
            effect: ItemEffect {
                stat: StatKind::Strength,
                amount: 10,
            },
            cost: 60,
            description: "Forged for dragon hunters. +10 strength.",
        },
        Item {
            id: "armor",
            name: "Leather Armor",
            kind: ItemKind::Armor,
            effect: ItemEffect {
                stat: StatKind::MaxHealth,
                amount: 10,
            },
            cost: 15,
            description: "Light protection. +10 max health.",
        },
        Item {
            id: "plate_armor",
            name: "Plate Armor",
            kind: ItemKind::Armor,
            effect: ItemEffect {
                stat: StatKind::MaxHealth,
                amount: 30,
            },
            cost: 70,
            description: "Heavy protection. +30 max health.",
        },
        Item {
            id: "focus_crystal",
            name: "Focus Crystal",
            kind: ItemKind::Weapon,
            effect: ItemEffect {
                stat: StatKind::Magic,
                amount: 8,
            },
            cost: 45,
            description: "Channels raw magic. +8 magic.",
        },
    ]
}

/// Looks up an item in the catalog by id.
pub fn find_item(catalog: &[Item], item_id: &str) -> Option<Item> {
    catalog.iter().find(|i| i.id == item_id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_core_items() {
        let catalog = item_catalog();
        for id in ["potion", "sword", "armor"] {
            assert!(find_item(&catalog, id).is_some(), "missing {}", id);
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = item_catalog();
        for (i, a) in catalog.iter().enumerate() {
            for b in catalog.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_item_unknown() {
        let catalog = item_catalog();
        assert!(find_item(&catalog, "excalibur").is_none());
    }
}
