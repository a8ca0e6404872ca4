//! Progression tests: leveling through battles, quest chains, and gear.

use quest_chronicles::character::{xp_threshold, Character, Class};
use quest_chronicles::combat::{calculate_damage, Battle, BattleOutcome, BattleState, Enemy, EnemyKind, PlayerAction};
use quest_chronicles::items::{equip_weapon, item_catalog, purchase_item, use_item};
use quest_chronicles::quests::{accept_quest, complete_quest, quest_catalog};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn win_battle(player: &mut Character, kind: EnemyKind, rng: &mut ChaCha8Rng) {
    let mut enemy = Enemy::spawn(kind);
    let mut battle = Battle::new(player, &mut enemy).unwrap();
    while battle.is_active() {
        battle.run_round(PlayerAction::Attack, rng).unwrap();
    }
    assert_eq!(battle.state(), BattleState::Ended(BattleOutcome::Victory));
}

#[test]
fn test_grinding_goblins_levels_up() {
    let mut player = Character::new("Hero".to_string(), Class::Warrior);
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    // Four goblins at 25 xp each cross the level 1 threshold of 100.
    for _ in 0..4 {
        win_battle(&mut player, EnemyKind::Goblin, &mut rng);
    }

    assert_eq!(player.level, 2);
    assert_eq!(player.experience, 0);
    assert_eq!(player.max_health, 130);
    assert_eq!(player.strength, 17);
    assert_eq!(player.magic, 5);
    // Level-up fully heals.
    assert_eq!(player.health, player.max_health);
    assert_eq!(player.gold, 140);
}

#[test]
fn test_xp_threshold_scales_with_level() {
    assert_eq!(xp_threshold(1), 100);
    assert_eq!(xp_threshold(2), 200);
    assert_eq!(xp_threshold(10), 1000);
}

#[test]
fn test_quest_chain_gates_on_level_and_prerequisites() {
    let catalog = quest_catalog();
    let mut player = Character::new("Hero".to_string(), Class::Warrior);

    // The warcamp quest is locked until the goblin quest is done and
    // level 3 is reached.
    assert!(accept_quest(&mut player, "orc_warcamp", &catalog).is_err());

    accept_quest(&mut player, "goblin_menace", &catalog).unwrap();
    let rewards = complete_quest(&mut player, "goblin_menace", &catalog).unwrap();
    assert_eq!(rewards.xp, 50);
    assert!(accept_quest(&mut player, "orc_warcamp", &catalog).is_err());

    player.level = 3;
    accept_quest(&mut player, "orc_warcamp", &catalog).unwrap();
    complete_quest(&mut player, "orc_warcamp", &catalog).unwrap();

    // Quest xp feeds the same leveling path as combat xp.
    assert!(player.experience < xp_threshold(player.level));
    assert_eq!(
        player.completed_quests,
        vec!["goblin_menace", "orc_warcamp"]
    );
}

#[test]
fn test_bought_weapon_speeds_up_battles() {
    let catalog = item_catalog();
    let mut player = Character::new("Hero".to_string(), Class::Warrior);

    purchase_item(&mut player, "sword", &catalog).unwrap();
    assert_eq!(player.gold, 80);
    equip_weapon(&mut player, "sword", &catalog).unwrap();
    assert_eq!(player.strength, 20);
    assert!(player.inventory.is_empty());

    // Str 20 vs the goblin's 8: 18 a swing, three swings for 50 health
    // instead of the four an unarmed warrior needs.
    assert_eq!(calculate_damage(player.strength, 8), 18);

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut enemy = Enemy::spawn(EnemyKind::Goblin);
    let mut battle = Battle::new(&mut player, &mut enemy).unwrap();
    let mut rounds = 0;
    while battle.is_active() {
        battle.run_round(PlayerAction::Attack, &mut rng).unwrap();
        rounds += 1;
    }
    assert_eq!(rounds, 3);
}

#[test]
fn test_potion_restores_health_between_battles() {
    let catalog = item_catalog();
    let mut player = Character::new("Hero".to_string(), Class::Warrior);
    purchase_item(&mut player, "potion", &catalog).unwrap();

    player.take_damage(50);
    let used = use_item(&mut player, "potion", &catalog).unwrap();
    assert_eq!(used.id, "potion");
    assert_eq!(player.health, 90);
    assert!(player.inventory.is_empty());
}

#[test]
fn test_dragon_requires_a_grown_character() {
    // A fresh warrior loses to the dragon; a leveled one with gear wins.
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let mut fresh = Character::new("Fresh".to_string(), Class::Warrior);
    let mut dragon = Enemy::spawn(EnemyKind::Dragon);
    let mut battle = Battle::new(&mut fresh, &mut dragon).unwrap();
    while battle.is_active() {
        battle.run_round(PlayerAction::Attack, &mut rng).unwrap();
    }
    assert_eq!(battle.state(), BattleState::Ended(BattleOutcome::Defeat));

    let mut veteran = Character::new("Veteran".to_string(), Class::Warrior);
    veteran.level = 8;
    veteran.max_health = 190;
    veteran.health = 190;
    veteran.strength = 29;

    let mut dragon = Enemy::spawn(EnemyKind::Dragon);
    let mut battle = Battle::new(&mut veteran, &mut dragon).unwrap();
    while battle.is_active() {
        battle.run_round(PlayerAction::Attack, &mut rng).unwrap();
    }
    assert_eq!(battle.state(), BattleState::Ended(BattleOutcome::Victory));
    assert_eq!(veteran.gold, 200);
}
