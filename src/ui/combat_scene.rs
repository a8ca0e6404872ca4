use crate::combat::{Battle, BattleEvent, BattleOutcome, BattleState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the battle scene: player and enemy HP bars around a scrolling
/// battle log, with the action hints at the bottom.
pub fn draw_combat_scene(frame: &mut Frame, area: Rect, battle: &Battle, log: &[String]) {
    let title = format!(" Battle: {} ", battle.enemy().name());
    let combat_block = Block::default().borders(Borders::ALL).title(title);

    let inner = combat_block.inner(area);
    frame.render_widget(combat_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Player HP bar
            Constraint::Length(3), // Enemy HP bar
            Constraint::Min(5),    // Battle log
            Constraint::Length(2), // Action hints
        ])
        .split(inner);

    draw_player_hp(frame, chunks[0], battle);
    draw_enemy_hp(frame, chunks[1], battle);
    draw_battle_log(frame, chunks[2], log);
    draw_action_hints(frame, chunks[3], battle);
}

fn draw_player_hp(frame: &mut Frame, area: Rect, battle: &Battle) {
    let player = battle.player();
    let hp_ratio = if player.max_health > 0 {
        player.health as f64 / player.max_health as f64
    } else {
        0.0
    };

    let hp_color = if hp_ratio > 0.66 {
        Color::Green
    } else if hp_ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    };

    let label = format!("{}/{}", player.health, player.max_health);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(player.name.clone()),
        )
        .gauge_style(Style::default().fg(hp_color).add_modifier(Modifier::BOLD))
        .label(label)
        .ratio(hp_ratio);

    frame.render_widget(gauge, area);
}

fn draw_enemy_hp(frame: &mut Frame, area: Rect, battle: &Battle) {
    let enemy = battle.enemy();
    let hp_ratio = if enemy.max_health > 0 {
        enemy.health as f64 / enemy.max_health as f64
    } else {
        0.0
    };

    let label = format!("{}/{}", enemy.health, enemy.max_health);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(enemy.name()))
        .gauge_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .label(label)
        .ratio(hp_ratio);

    frame.render_widget(gauge, area);
}

fn draw_battle_log(frame: &mut Frame, area: Rect, log: &[String]) {
    let block = Block::default().borders(Borders::ALL).title("Log");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Show only the lines that fit, newest at the bottom.
    let visible = inner.height as usize;
    let start = log.len().saturating_sub(visible);
    let lines: Vec<Line> = log[start..].iter().map(|m| Line::from(m.as_str())).collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_action_hints(frame: &mut Frame, area: Rect, battle: &Battle) {
    let text = match battle.state() {
        BattleState::Active => {
            let ability = battle.player().class.ability_name();
            format!("[1] Attack    [2] {}    [3] Flee", ability)
        }
        BattleState::Ended(BattleOutcome::Victory) => "Victory! Press any key...".to_string(),
        BattleState::Ended(BattleOutcome::Defeat) => {
            "You have fallen. Press any key...".to_string()
        }
        BattleState::Ended(BattleOutcome::Escaped) => "You got away. Press any key...".to_string(),
    };

    let hints = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hints, area);
}

/// Renders one battle event as a log line.
pub fn event_line(event: &BattleEvent, enemy_name: &str) -> String {
    match event {
        BattleEvent::PlayerAttack { damage } => {
            format!("You hit the {} for {} damage.", enemy_name, damage)
        }
        BattleEvent::AbilityDamage {
            ability,
            damage,
            was_crit,
        } => {
            if *was_crit {
                format!("{} crits the {} for {} damage!", ability, enemy_name, damage)
            } else {
                format!("{} hits the {} for {} damage.", ability, enemy_name, damage)
            }
        }
        BattleEvent::AbilityHeal { ability, amount } => {
            format!("{} restores {} health.", ability, amount)
        }
        BattleEvent::EscapeFailed => "You fail to escape!".to_string(),
        BattleEvent::Escaped => "You escape the battle.".to_string(),
        BattleEvent::EnemyAttack { damage } => {
            format!("The {} hits you for {} damage.", enemy_name, damage)
        }
        BattleEvent::Victory {
            xp_gained,
            gold_gained,
            levels_gained,
        } => {
            if *levels_gained > 0 {
                format!(
                    "Victory! +{} XP, +{} gold. Level up x{}!",
                    xp_gained, gold_gained, levels_gained
                )
            } else {
                format!("Victory! +{} XP, +{} gold.", xp_gained, gold_gained)
            }
        }
        BattleEvent::Defeat => "You have been defeated...".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_line_attack() {
        let line = event_line(&BattleEvent::PlayerAttack { damage: 13 }, "goblin");
        assert_eq!(line, "You hit the goblin for 13 damage.");
    }

    #[test]
    fn test_event_line_crit() {
        let line = event_line(
            &BattleEvent::AbilityDamage {
                ability: "Critical Strike",
                damage: 36,
                was_crit: true,
            },
            "orc",
        );
        assert_eq!(line, "Critical Strike crits the orc for 36 damage!");
    }

    #[test]
    fn test_event_line_victory_with_level_up() {
        let line = event_line(
            &BattleEvent::Victory {
                xp_gained: 25,
                gold_gained: 10,
                levels_gained: 1,
            },
            "goblin",
        );
        assert_eq!(line, "Victory! +25 XP, +10 gold. Level up x1!");
    }
}
