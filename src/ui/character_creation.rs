use crate::character::Class;
use crate::character_manager::validate_name;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct CharacterCreationScreen {
    pub name_input: String,
    pub class_index: usize,
    pub validation_error: Option<String>,
}

impl CharacterCreationScreen {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
            class_index: 0,
            validation_error: None,
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .title(" New Character ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Name field
                Constraint::Length(1), // Feedback line
                Constraint::Length(1), // Spacer
                Constraint::Length(8), // Class panel
                Constraint::Min(0),    // Filler
                Constraint::Length(1), // Controls
            ])
            .split(inner);

        self.draw_name_field(f, chunks[0]);
        self.draw_feedback(f, chunks[1]);
        self.draw_class_panel(f, chunks[3]);

        let controls = Paragraph::new("[←/→] Class    [Enter] Create    [Esc] Back")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[5]);
    }

    fn draw_name_field(&self, f: &mut Frame, area: Rect) {
        // The border goes red while the typed name breaks a rule.
        let border_color = if self.validation_error.is_some() {
            Color::Red
        } else {
            Color::White
        };

        let name_line = Line::from(vec![
            Span::raw(self.name_input.clone()),
            Span::styled("█", Style::default().fg(Color::DarkGray)),
        ]);
        let field = Paragraph::new(name_line).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Name")
                .border_style(Style::default().fg(border_color)),
        );
        f.render_widget(field, area);
    }

    fn draw_feedback(&self, f: &mut Frame, area: Rect) {
        let feedback = match &self.validation_error {
            Some(error) => Span::styled(error.clone(), Style::default().fg(Color::Red)),
            None => Span::styled(
                "Up to 16 letters, digits, spaces, hyphens, or underscores.",
                Style::default().fg(Color::DarkGray),
            ),
        };
        f.render_widget(Paragraph::new(Line::from(feedback)), area);
    }

    fn draw_class_panel(&self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Class");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines = Vec::new();
        for (i, class) in Class::ALL.iter().enumerate() {
            let is_selected = i == self.class_index;
            let marker = if is_selected { "▶" } else { " " };
            let (health, strength, magic) = class.base_stats();

            let text = format!(
                "{} {:<8} HP {:>3}   STR {:>2}   MAG {:>2}",
                marker,
                class.name(),
                health,
                strength,
                magic
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

        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "Special ability: {}",
            self.selected_class().ability_name()
        )));

        f.render_widget(Paragraph::new(lines), inner);
    }

    pub fn handle_char_input(&mut self, c: char) {
        self.name_input.push(c);
        self.validate();
    }

    pub fn handle_backspace(&mut self) {
        self.name_input.pop();
        self.validate();
    }

    pub fn next_class(&mut self) {
        self.class_index = (self.class_index + 1) % Class::ALL.len();
    }

    pub fn prev_class(&mut self) {
        self.class_index = (self.class_index + Class::ALL.len() - 1) % Class::ALL.len();
    }

    pub fn selected_class(&self) -> Class {
        Class::ALL[self.class_index]
    }

    pub fn validate(&mut self) {
        // An empty field shows the rules hint, not an error.
        self.validation_error = if self.name_input.trim().is_empty() {
            None
        } else {
            validate_name(&self.name_input).err()
        };
    }

    pub fn is_valid(&self) -> bool {
        self.validation_error.is_none() && !self.name_input.trim().is_empty()
    }

    pub fn get_name(&self) -> String {
        self.name_input.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_cycling_wraps() {
        let mut screen = CharacterCreationScreen::new();
        assert_eq!(screen.selected_class(), Class::Warrior);
        screen.prev_class();
        assert_eq!(screen.selected_class(), Class::Cleric);
        for _ in 0..4 {
            screen.next_class();
        }
        assert_eq!(screen.selected_class(), Class::Cleric);
    }

    #[test]
    fn test_name_editing() {
        let mut screen = CharacterCreationScreen::new();
        for c in "Hero".chars() {
            screen.handle_char_input(c);
        }
        assert!(screen.is_valid());
        assert_eq!(screen.get_name(), "Hero");

        screen.handle_backspace();
        assert_eq!(screen.get_name(), "Her");
    }

    #[test]
    fn test_invalid_name_flagged() {
        let mut screen = CharacterCreationScreen::new();
        screen.handle_char_input('!');
        assert!(!screen.is_valid());
        assert!(screen.validation_error.is_some());
    }

    #[test]
    fn test_empty_name_is_not_an_error() {
        let mut screen = CharacterCreationScreen::new();
        screen.handle_char_input('a');
        screen.handle_backspace();
        assert!(screen.validation_error.is_none());
        assert!(!screen.is_valid());
    }
}
