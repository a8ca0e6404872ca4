use crate::character::xp_threshold;
use crate::core::GameSession;
use crate::items::find_item;
use crate::quests::{active_quests, available_quests};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the main game screen: character stats on the left, quests and
/// inventory on the right, the message log and key hints below.
pub fn draw_game_screen(frame: &mut Frame, area: Rect, session: &GameSession) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Main content
            Constraint::Length(7), // Message log
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Stats
            Constraint::Percentage(50), // Quests + inventory
        ])
        .split(v_chunks[0]);

    draw_stats_panel(frame, h_chunks[0], session);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Quests
            Constraint::Percentage(50), // Inventory
        ])
        .split(h_chunks[1]);

    draw_quests_panel(frame, right_chunks[0], session);
    draw_inventory_panel(frame, right_chunks[1], session);
    draw_message_log(frame, v_chunks[1], session);
    draw_footer(frame, v_chunks[2], session);
}

fn draw_stats_panel(frame: &mut Frame, area: Rect, session: &GameSession) {
    let character = &session.character;

    let block = Block::default().borders(Borders::ALL).title("Character");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Name + class
            Constraint::Length(3), // HP gauge
            Constraint::Length(3), // XP gauge
            Constraint::Min(0),    // Stats
        ])
        .split(inner);

    let header = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            character.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  Lv {} {}",
            character.level,
            character.class.name()
        )),
    ])]);
    frame.render_widget(header, chunks[0]);

    // HP gauge
    let hp_ratio = if character.max_health > 0 {
        character.health as f64 / character.max_health as f64
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
    let hp_gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Health"))
        .gauge_style(Style::default().fg(hp_color))
        .label(format!("{}/{}", character.health, character.max_health))
        .ratio(hp_ratio);
    frame.render_widget(hp_gauge, chunks[1]);

    // XP gauge toward the next level
    let threshold = xp_threshold(character.level);
    let xp_ratio = if threshold > 0 {
        (character.experience as f64 / threshold as f64).min(1.0)
    } else {
        0.0
    };
    let xp_gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Experience"))
        .gauge_style(Style::default().fg(Color::Magenta))
        .label(format!("{}/{}", character.experience, threshold))
        .ratio(xp_ratio);
    frame.render_widget(xp_gauge, chunks[2]);

    let mut lines = vec![
        Line::from(format!("Strength: {}", character.strength)),
        Line::from(format!("Magic: {}", character.magic)),
        Line::from(format!("Gold: {}", character.gold)),
        Line::from(""),
    ];

    let weapon = character
        .equipped_weapon
        .as_ref()
        .map(|e| e.item_id.as_str())
        .unwrap_or("none");
    let armor = character
        .equipped_armor
        .as_ref()
        .map(|e| e.item_id.as_str())
        .unwrap_or("none");
    lines.push(Line::from(format!("Weapon: {}", weapon)));
    lines.push(Line::from(format!("Armor: {}", armor)));

    frame.render_widget(Paragraph::new(lines), chunks[3]);
}

fn draw_quests_panel(frame: &mut Frame, area: Rect, session: &GameSession) {
    let block = Block::default().borders(Borders::ALL).title("Quests");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();

    let active = active_quests(&session.character, &session.quests);
    if active.is_empty() {
        lines.push(Line::from(Span::styled(
            "No active quests.",
            Style::default().fg(Color::Gray),
        )));
    } else {
        for quest in active {
            lines.push(Line::from(vec![
                Span::styled("► ", Style::default().fg(Color::Yellow)),
                Span::raw(quest.title),
            ]));
        }
    }

    let available = available_quests(&session.character, &session.quests);
    if !available.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Available:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for quest in available {
            lines.push(Line::from(format!(
                "  {} (Lv {}, +{} XP, +{}g)",
                quest.title, quest.required_level, quest.reward_xp, quest.reward_gold
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_inventory_panel(frame: &mut Frame, area: Rect, session: &GameSession) {
    let character = &session.character;
    let title = format!("Inventory ({}/20)", character.inventory.len());
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if character.inventory.is_empty() {
        let empty = Paragraph::new("Empty.").style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, inner);
        return;
    }

    let lines: Vec<Line> = character
        .inventory
        .iter()
        .map(|id| match find_item(&session.items, id) {
            Some(item) => Line::from(format!("{} ({})", item.name, item.kind.name())),
            None => Line::from(id.clone()),
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_message_log(frame: &mut Frame, area: Rect, session: &GameSession) {
    let block = Block::default().borders(Borders::ALL).title("Messages");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    let skip = session.messages.len().saturating_sub(visible);
    let lines: Vec<Line> = session
        .messages
        .iter()
        .skip(skip)
        .map(|m| Line::from(m.as_str()))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_footer(frame: &mut Frame, area: Rect, session: &GameSession) {
    let text = if session.character.is_dead() {
        "[R] Revive (20g)    [S] Save    [Esc] Save & Quit".to_string()
    } else {
        "[B] Battle    [G] Shop    [A] Accept Quest    [C] Complete Quest    [U] Use Potion    [S] Save    [Esc] Save & Quit"
            .to_string()
    };

    let footer = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
