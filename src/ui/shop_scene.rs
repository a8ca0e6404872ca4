use crate::core::GameSession;
use crate::items::{
    count_item, equip_armor, equip_weapon, purchase_item, sell_item, ItemKind,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// The village shop: browse the catalog, buy, sell back at half price,
/// and equip weapons or armor straight from the stall.
pub struct ShopScreen {
    pub selected_index: usize,
}

impl ShopScreen {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, session: &GameSession) {
        let block = Block::default().borders(Borders::ALL).title(" Shop ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Gold + capacity
                Constraint::Min(5),    // Wares
                Constraint::Length(2), // Controls
            ])
            .split(inner);

        let header = Paragraph::new(format!(
            "Gold: {}    Inventory: {}/20",
            session.character.gold,
            session.character.inventory.len()
        ))
        .style(Style::default().fg(Color::Yellow));
        f.render_widget(header, chunks[0]);

        let mut lines = Vec::new();
        for (i, item) in session.items.iter().enumerate() {
            let is_selected = i == self.selected_index;
            let marker = if is_selected { "▶" } else { " " };
            let owned = count_item(&session.character, item.id);
            let owned_note = if owned > 0 {
                format!("  (own {})", owned)
            } else {
                String::new()
            };

            let text = format!(
                "{} {:<22} {:>3}g  {}{}",
                marker, item.name, item.cost, item.description, owned_note
            );
            let style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Span::styled(text, style)));
        }
        f.render_widget(Paragraph::new(lines), chunks[1]);

        let controls =
            Paragraph::new("[↑/↓] Browse    [Enter] Buy    [E] Equip    [X] Sell    [Esc] Leave")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[2]);
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self, catalog_len: usize) {
        if catalog_len > 0 && self.selected_index < catalog_len - 1 {
            self.selected_index += 1;
        }
    }

    /// Buys the highlighted item. Returns the message for the log.
    pub fn buy_selected(&self, session: &mut GameSession) -> String {
        let Some(item) = session.items.get(self.selected_index).cloned() else {
            return "Nothing to buy.".to_string();
        };
        match purchase_item(&mut session.character, item.id, &session.items) {
            Ok(item) => format!("Bought {} for {} gold.", item.name, item.cost),
            Err(e) => format!("Cannot buy: {}", e),
        }
    }

    /// Equips the highlighted item from the inventory.
    pub fn equip_selected(&self, session: &mut GameSession) -> String {
        let Some(item) = session.items.get(self.selected_index).cloned() else {
            return "Nothing to equip.".to_string();
        };
        let result = match item.kind {
            ItemKind::Weapon => equip_weapon(&mut session.character, item.id, &session.items),
            ItemKind::Armor => equip_armor(&mut session.character, item.id, &session.items),
            ItemKind::Consumable => {
                return format!("{} cannot be equipped.", item.name);
            }
        };
        match result {
            Ok(item) => format!("Equipped {}.", item.name),
            Err(e) => format!("Cannot equip: {}", e),
        }
    }

    /// Sells one of the highlighted item back for half price.
    pub fn sell_selected(&self, session: &mut GameSession) -> String {
        let Some(item) = session.items.get(self.selected_index).cloned() else {
            return "Nothing to sell.".to_string();
        };
        match sell_item(&mut session.character, item.id, &session.items) {
            Ok(price) => format!("Sold {} for {} gold.", item.name, price),
            Err(e) => format!("Cannot sell: {}", e),
        }
    }
}
