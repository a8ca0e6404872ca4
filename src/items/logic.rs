//! Inventory management, item usage, equipment, and shop transactions.

use crate::character::{spend_gold, Character, EquippedItem};
use crate::core::constants::{MAX_INVENTORY_SIZE, SELL_PRICE_DIVISOR};
use crate::error::{GameError, GameResult};

use super::types::{find_item, Item, ItemEffect, ItemKind, StatKind};

pub fn add_item(character: &mut Character, item_id: &str) -> GameResult<()> {
    if character.inventory.len() >= MAX_INVENTORY_SIZE {
        return Err(GameError::InventoryFull);
    }
    character.inventory.push(item_id.to_string());
    Ok(())
}

pub fn remove_item(character: &mut Character, item_id: &str) -> GameResult<()> {
    let pos = character
        .inventory
        .iter()
        .position(|i| i == item_id)
        .ok_or_else(|| GameError::ItemNotFound(item_id.to_string()))?;
    character.inventory.remove(pos);
    Ok(())
}

pub fn has_item(character: &Character, item_id: &str) -> bool {
    character.inventory.iter().any(|i| i == item_id)
}

pub fn count_item(character: &Character, item_id: &str) -> usize {
    character.inventory.iter().filter(|i| *i == item_id).count()
}

pub fn space_remaining(character: &Character) -> usize {
    // Saved inventories are external input and may exceed the cap.
    MAX_INVENTORY_SIZE.saturating_sub(character.inventory.len())
}

/// Applies an item effect to the character. Health gains are clamped to
/// `max_health`; other stats add directly.
fn apply_effect(character: &mut Character, effect: ItemEffect) {
    match effect.stat {
        StatKind::Health => {
            character.heal(effect.amount);
        }
        StatKind::MaxHealth => character.max_health += effect.amount,
        StatKind::Strength => character.strength += effect.amount,
        StatKind::Magic => character.magic += effect.amount,
    }
}

/// Reverts a previously applied equipment effect. Max-health reductions
/// pull current health down with them so the invariant holds.
fn revert_effect(character: &mut Character, effect: ItemEffect) {
    match effect.stat {
        StatKind::Health => {}
        StatKind::MaxHealth => {
            character.max_health = character.max_health.saturating_sub(effect.amount);
            character.health = character.health.min(character.max_health);
        }
        StatKind::Strength => character.strength = character.strength.saturating_sub(effect.amount),
        StatKind::Magic => character.magic = character.magic.saturating_sub(effect.amount),
    }
}

/// Uses a consumable from the inventory, applying its effect and
/// discarding it. Returns the item definition for messaging.
pub fn use_item(character: &mut Character, item_id: &str, catalog: &[Item]) -> GameResult<Item> {
    if !has_item(character, item_id) {
        return Err(GameError::ItemNotFound(item_id.to_string()));
    }
    let item =
        find_item(catalog, item_id).ok_or_else(|| GameError::UnknownItem(item_id.to_string()))?;
    if item.kind != ItemKind::Consumable {
        return Err(GameError::InvalidItemKind(item_id.to_string()));
    }

    apply_effect(character, item.effect);
    remove_item(character, item_id)?;
    Ok(item)
}

/// Equips a weapon from the inventory, swapping out any currently
/// equipped one (its bonus is reverted and it returns to the freed slot).
pub fn equip_weapon(character: &mut Character, item_id: &str, catalog: &[Item]) -> GameResult<Item> {
    equip_slot(character, item_id, catalog, ItemKind::Weapon)
}

pub fn equip_armor(character: &mut Character, item_id: &str, catalog: &[Item]) -> GameResult<Item> {
    equip_slot(character, item_id, catalog, ItemKind::Armor)
}

fn equip_slot(
    character: &mut Character,
    item_id: &str,
    catalog: &[Item],
    slot: ItemKind,
) -> GameResult<Item> {
    if !has_item(character, item_id) {
        return Err(GameError::ItemNotFound(item_id.to_string()));
    }
    let item =
        find_item(catalog, item_id).ok_or_else(|| GameError::UnknownItem(item_id.to_string()))?;
    if item.kind != slot {
        return Err(GameError::InvalidItemKind(item_id.to_string()));
    }

    // Remove the new item first so the swapped-out piece always has a slot.
    remove_item(character, item_id)?;

    let previous = match slot {
        ItemKind::Weapon => character.equipped_weapon.take(),
        ItemKind::Armor => character.equipped_armor.take(),
        ItemKind::Consumable => None,
    };
    if let Some(old) = previous {
        revert_effect(character, old.effect);
        character.inventory.push(old.item_id);
    }

    apply_effect(character, item.effect);
    let equipped = EquippedItem {
        item_id: item.id.to_string(),
        effect: item.effect,
    };
    match slot {
        ItemKind::Weapon => character.equipped_weapon = Some(equipped),
        ItemKind::Armor => character.equipped_armor = Some(equipped),
        ItemKind::Consumable => {}
    }
    Ok(item)
}

/// Unequips the current weapon, returning its id if one was equipped.
pub fn unequip_weapon(character: &mut Character) -> GameResult<Option<String>> {
    unequip_slot(character, ItemKind::Weapon)
}

pub fn unequip_armor(character: &mut Character) -> GameResult<Option<String>> {
    unequip_slot(character, ItemKind::Armor)
}

fn unequip_slot(character: &mut Character, slot: ItemKind) -> GameResult<Option<String>> {
    let equipped = match slot {
        ItemKind::Weapon => &mut character.equipped_weapon,
        ItemKind::Armor => &mut character.equipped_armor,
        ItemKind::Consumable => return Ok(None),
    };
    let Some(old) = equipped.take() else {
        return Ok(None);
    };

    if character.inventory.len() >= MAX_INVENTORY_SIZE {
        // Put it back; nothing changed.
        match slot {
            ItemKind::Weapon => character.equipped_weapon = Some(old),
            ItemKind::Armor => character.equipped_armor = Some(old),
            ItemKind::Consumable => {}
        }
        return Err(GameError::InventoryFull);
    }

    revert_effect(character, old.effect);
    character.inventory.push(old.item_id.clone());
    Ok(Some(old.item_id))
}

/// Buys an item from the shop at catalog cost.
pub fn purchase_item(
    character: &mut Character,
    item_id: &str,
    catalog: &[Item],
) -> GameResult<Item> {
    let item =
        find_item(catalog, item_id).ok_or_else(|| GameError::UnknownItem(item_id.to_string()))?;
    if character.inventory.len() >= MAX_INVENTORY_SIZE {
        return Err(GameError::InventoryFull);
    }
    spend_gold(character, item.cost)?;
    character.inventory.push(item.id.to_string());
    Ok(item)
}

/// Sells an inventory item back for half its catalog cost.
pub fn sell_item(character: &mut Character, item_id: &str, catalog: &[Item]) -> GameResult<u32> {
    if !has_item(character, item_id) {
        return Err(GameError::ItemNotFound(item_id.to_string()));
    }
    let item =
        find_item(catalog, item_id).ok_or_else(|| GameError::UnknownItem(item_id.to_string()))?;
    let price = item.cost / SELL_PRICE_DIVISOR;
    remove_item(character, item_id)?;
    character.gold += price;
    Ok(price)
}
