//! The turn-based battle engine.
//!
//! A `Battle` borrows the player character and the enemy for the duration
//! of one encounter and drives rounds until a terminal state: victory,
//! defeat, or a successful escape. Rewards are settled exactly once, at the
//! moment the battle ends, and are written straight through to the
//! character so the caller sees them after the battle is dropped.

use rand::Rng;

use crate::character::{add_gold, gain_experience, Character, Class};
use crate::core::constants::{
    ESCAPE_CHANCE, FIREBALL_MULTIPLIER, HEAL_ABILITY_AMOUNT, MIN_DAMAGE, POWER_STRIKE_MULTIPLIER,
    ROGUE_CRIT_MULTIPLIER,
};
use crate::error::{GameError, GameResult};

use super::types::{BattleEvent, BattleOutcome, BattleResult, BattleState, Enemy, PlayerAction};

/// Basic attack damage: `attacker_strength - defender_strength / 4`,
/// floored at 1 so battles always terminate.
pub fn calculate_damage(attacker_strength: u32, defender_strength: u32) -> u32 {
    attacker_strength
        .saturating_sub(defender_strength / 4)
        .max(MIN_DAMAGE)
}

pub struct Battle<'a> {
    player: &'a mut Character,
    enemy: &'a mut Enemy,
    state: BattleState,
    turn_count: u32,
    result: Option<BattleResult>,
}

impl<'a> Battle<'a> {
    /// Starts a battle. Fails with `CharacterAlreadyDead` (mutating
    /// nothing) if the player is already at zero health.
    pub fn new(player: &'a mut Character, enemy: &'a mut Enemy) -> GameResult<Self> {
        if player.is_dead() {
            return Err(GameError::CharacterAlreadyDead);
        }
        Ok(Self {
            player,
            enemy,
            state: BattleState::Active,
            turn_count: 0,
            result: None,
        })
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == BattleState::Active
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// The settled result, available once the battle has ended.
    pub fn result(&self) -> Option<BattleResult> {
        self.result
    }

    pub fn player(&self) -> &Character {
        self.player
    }

    pub fn enemy(&self) -> &Enemy {
        self.enemy
    }

    /// Runs one full round: player action, then (if the battle is still
    /// active) the enemy's counterattack. The turn counter advances once
    /// per round regardless of how the round ended.
    pub fn run_round(
        &mut self,
        action: PlayerAction,
        rng: &mut impl Rng,
    ) -> GameResult<Vec<BattleEvent>> {
        let mut events = self.perform_player_action(action, rng)?;
        if self.is_active() {
            events.extend(self.perform_enemy_action()?);
        }
        self.turn_count += 1;
        Ok(events)
    }

    /// Resolves the player's chosen action. Fails with `BattleNotActive`
    /// once the battle has ended.
    pub fn perform_player_action(
        &mut self,
        action: PlayerAction,
        rng: &mut impl Rng,
    ) -> GameResult<Vec<BattleEvent>> {
        if !self.is_active() {
            return Err(GameError::BattleNotActive);
        }

        let mut events = Vec::new();
        match action {
            PlayerAction::Attack => {
                let damage = calculate_damage(self.player.strength, self.enemy.strength);
                self.enemy.take_damage(damage);
                events.push(BattleEvent::PlayerAttack { damage });
            }
            PlayerAction::Special => {
                events.push(self.use_special_ability());
            }
            PlayerAction::Flee => {
                if rng.gen_bool(ESCAPE_CHANCE) {
                    self.end(BattleOutcome::Escaped, &mut events);
                    events.push(BattleEvent::Escaped);
                    return Ok(events);
                }
                events.push(BattleEvent::EscapeFailed);
            }
        }

        if !self.enemy.is_alive() {
            self.end(BattleOutcome::Victory, &mut events);
        }
        Ok(events)
    }

    /// The enemy's turn: always a basic attack against the player.
    pub fn perform_enemy_action(&mut self) -> GameResult<Vec<BattleEvent>> {
        if !self.is_active() {
            return Err(GameError::BattleNotActive);
        }

        let mut events = Vec::new();
        let damage = calculate_damage(self.enemy.strength, self.player.strength);
        self.player.take_damage(damage);
        events.push(BattleEvent::EnemyAttack { damage });

        if self.player.is_dead() {
            self.end(BattleOutcome::Defeat, &mut events);
        }
        Ok(events)
    }

    /// Class-specific special ability dispatch.
    fn use_special_ability(&mut self) -> BattleEvent {
        match self.player.class {
            Class::Warrior => {
                let damage = self.player.strength * POWER_STRIKE_MULTIPLIER;
                self.enemy.take_damage(damage);
                BattleEvent::AbilityDamage {
                    ability: "Power Strike",
                    damage,
                    was_crit: false,
                }
            }
            Class::Mage => {
                let damage = self.player.magic * FIREBALL_MULTIPLIER;
                self.enemy.take_damage(damage);
                BattleEvent::AbilityDamage {
                    ability: "Fireball",
                    damage,
                    was_crit: false,
                }
            }
            Class::Rogue => {
                // Deterministic crit rule: the strike lands critically when
                // the enemy's current health is even.
                let was_crit = self.enemy.health % 2 == 0;
                let damage = if was_crit {
                    self.player.strength * ROGUE_CRIT_MULTIPLIER
                } else {
                    self.player.strength
                };
                self.enemy.take_damage(damage);
                BattleEvent::AbilityDamage {
                    ability: "Critical Strike",
                    damage,
                    was_crit,
                }
            }
            Class::Cleric => {
                let amount = self.player.heal(HEAL_ABILITY_AMOUNT);
                BattleEvent::AbilityHeal {
                    ability: "Heal",
                    amount,
                }
            }
        }
    }

    /// Transitions to the ended state and settles rewards. The state
    /// invariant (a battle ends exactly once) makes this run at most once.
    fn end(&mut self, outcome: BattleOutcome, events: &mut Vec<BattleEvent>) {
        debug_assert!(self.is_active());
        self.state = BattleState::Ended(outcome);

        let (xp_gained, gold_gained) = match outcome {
            BattleOutcome::Victory => (self.enemy.xp_reward, self.enemy.gold_reward),
            BattleOutcome::Defeat | BattleOutcome::Escaped => (0, 0),
        };

        if outcome == BattleOutcome::Victory {
            // The player is alive here (the battle started alive and a
            // defeat would have ended it first), so the xp grant succeeds.
            let report = gain_experience(self.player, xp_gained).unwrap_or_default();
            add_gold(self.player, gold_gained);
            events.push(BattleEvent::Victory {
                xp_gained,
                gold_gained,
                levels_gained: report.levels_gained,
            });
        } else if outcome == BattleOutcome::Defeat {
            events.push(BattleEvent::Defeat);
        }

        self.result = Some(BattleResult {
            outcome,
            xp_gained,
            gold_gained,
        });
    }
}
