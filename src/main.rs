use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use quest_chronicles::character::Character;
use quest_chronicles::character_manager::CharacterManager;
use quest_chronicles::combat::{Battle, BattleOutcome, PlayerAction};
use quest_chronicles::core::GameSession;
use quest_chronicles::items::{has_item, use_item};
use quest_chronicles::quests::{accept_quest, available_quests, complete_quest};
use quest_chronicles::ui::character_creation::CharacterCreationScreen;
use quest_chronicles::ui::character_select::CharacterSelectScreen;
use quest_chronicles::ui::shop_scene::ShopScreen;
use quest_chronicles::ui::{combat_scene, game_screen};

enum Screen {
    CharacterSelect,
    CharacterCreation,
    Game,
}

fn main() -> io::Result<()> {
    let character_manager = CharacterManager::new()?;

    // Start in creation if there is nothing to select yet.
    let characters = character_manager.list_characters()?;
    let mut current_screen = if characters.is_empty() {
        Screen::CharacterCreation
    } else {
        Screen::CharacterSelect
    };

    let mut creation_screen = CharacterCreationScreen::new();
    let mut select_screen = CharacterSelectScreen::new();
    let mut session: Option<GameSession> = None;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        match current_screen {
            Screen::CharacterCreation => {
                terminal.draw(|f| {
                    let area = f.size();
                    creation_screen.draw(f, area);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char(c) => {
                                creation_screen.handle_char_input(c);
                            }
                            KeyCode::Backspace => {
                                creation_screen.handle_backspace();
                            }
                            KeyCode::Left => {
                                creation_screen.prev_class();
                            }
                            KeyCode::Right => {
                                creation_screen.next_class();
                            }
                            KeyCode::Enter => {
                                if creation_screen.is_valid() {
                                    let character = Character::new(
                                        creation_screen.get_name(),
                                        creation_screen.selected_class(),
                                    );
                                    if let Err(e) = character_manager.save_character(&character) {
                                        creation_screen.validation_error =
                                            Some(format!("Save failed: {}", e));
                                    } else {
                                        creation_screen = CharacterCreationScreen::new();
                                        select_screen = CharacterSelectScreen::new();
                                        current_screen = Screen::CharacterSelect;
                                    }
                                }
                            }
                            KeyCode::Esc => {
                                // Cancel - go to select if characters exist, else quit
                                let chars = character_manager.list_characters()?;
                                if chars.is_empty() {
                                    break;
                                }
                                creation_screen = CharacterCreationScreen::new();
                                current_screen = Screen::CharacterSelect;
                            }
                            _ => {}
                        }
                    }
                }
            }
            Screen::CharacterSelect => {
                let characters = character_manager.list_characters()?;

                terminal.draw(|f| {
                    let area = f.size();
                    select_screen.draw(f, area, &characters);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Up => {
                                select_screen.move_up(&characters);
                            }
                            KeyCode::Down => {
                                select_screen.move_down(&characters);
                            }
                            KeyCode::Enter => {
                                if let Some(info) = select_screen.get_selected_character(&characters)
                                {
                                    if !info.is_corrupted {
                                        let character =
                                            character_manager.load_character(&info.filename)?;
                                        let mut new_session = GameSession::new(character);
                                        new_session.add_message(format!(
                                            "Welcome back, {}!",
                                            new_session.character.name
                                        ));
                                        session = Some(new_session);
                                        current_screen = Screen::Game;
                                    }
                                }
                            }
                            KeyCode::Char('n') | KeyCode::Char('N') => {
                                creation_screen = CharacterCreationScreen::new();
                                current_screen = Screen::CharacterCreation;
                            }
                            KeyCode::Char('d') | KeyCode::Char('D') => {
                                if let Some(info) = select_screen.get_selected_character(&characters)
                                {
                                    character_manager.delete_character(&info.filename)?;
                                    select_screen = CharacterSelectScreen::new();
                                }
                            }
                            KeyCode::Esc => {
                                break;
                            }
                            _ => {}
                        }
                    }
                }
            }
            Screen::Game => {
                let mut leave = false;

                if let Some(sess) = session.as_mut() {
                    terminal.draw(|f| {
                        let area = f.size();
                        game_screen::draw_game_screen(f, area, sess);
                    })?;

                    if event::poll(Duration::from_millis(100))? {
                        if let Event::Key(key_event) = event::read()? {
                            match key_event.code {
                                KeyCode::Char('b') | KeyCode::Char('B') => {
                                    if sess.character.is_dead() {
                                        sess.add_message(
                                            "You are dead. Revive first.".to_string(),
                                        );
                                    } else {
                                        run_battle(&mut terminal, sess)?;
                                    }
                                }
                                KeyCode::Char('g') | KeyCode::Char('G') => {
                                    run_shop(&mut terminal, sess)?;
                                }
                                KeyCode::Char('a') | KeyCode::Char('A') => {
                                    handle_accept_quest(sess);
                                }
                                KeyCode::Char('c') | KeyCode::Char('C') => {
                                    handle_complete_quest(sess);
                                }
                                KeyCode::Char('u') | KeyCode::Char('U') => {
                                    handle_use_potion(sess);
                                }
                                KeyCode::Char('r') | KeyCode::Char('R') => {
                                    handle_revival(sess);
                                }
                                KeyCode::Char('s') | KeyCode::Char('S') => {
                                    character_manager.save_character(&sess.character)?;
                                    sess.add_message("Game saved.".to_string());
                                }
                                KeyCode::Esc => {
                                    character_manager.save_character(&sess.character)?;
                                    leave = true;
                                }
                                _ => {}
                            }
                        }
                    }
                } else {
                    leave = true;
                }

                if leave {
                    session = None;
                    select_screen = CharacterSelectScreen::new();
                    current_screen = Screen::CharacterSelect;
                }
            }
        }
    }

    // Cleanup
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}

/// Runs one battle to completion as a blocking inner loop. The battle
/// borrows the session's character, so victory rewards and damage are
/// already applied when this returns.
fn run_battle<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut GameSession,
) -> io::Result<()> {
    let mut enemy = session.encounter_enemy();
    let enemy_name = enemy.name();
    let mut log = vec![format!("A wild {} appears!", enemy_name)];
    let mut rng = rand::thread_rng();

    let mut battle = match Battle::new(&mut session.character, &mut enemy) {
        Ok(battle) => battle,
        Err(_) => return Ok(()),
    };

    loop {
        terminal.draw(|f| {
            let area = f.size();
            combat_scene::draw_combat_scene(f, area, &battle, &log);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let key_event = match event::read()? {
            Event::Key(key_event) => key_event,
            _ => continue,
        };

        if !battle.is_active() {
            // Any key closes the result screen.
            break;
        }

        let action = match key_event.code {
            KeyCode::Char('1') => Some(PlayerAction::Attack),
            KeyCode::Char('2') => Some(PlayerAction::Special),
            KeyCode::Char('3') => Some(PlayerAction::Flee),
            _ => None,
        };

        if let Some(action) = action {
            if let Ok(events) = battle.run_round(action, &mut rng) {
                for event in &events {
                    log.push(combat_scene::event_line(event, enemy_name));
                }
            }
        }
    }

    let result = battle.result();

    if let Some(result) = result {
        match result.outcome {
            BattleOutcome::Victory => {
                session.add_message(format!(
                    "Defeated the {}! +{} XP, +{} gold.",
                    enemy_name, result.xp_gained, result.gold_gained
                ));
            }
            BattleOutcome::Defeat => {
                session.add_message(format!("The {} has slain you.", enemy_name));
                session.add_message("Press [R] to revive for 20 gold.".to_string());
            }
            BattleOutcome::Escaped => {
                session.add_message(format!("You fled from the {}.", enemy_name));
            }
        }
    }

    Ok(())
}

/// Runs the shop as a blocking inner loop. Purchases, sales, and gear
/// swaps apply to the session's character immediately; the outcome of
/// each transaction lands in the message log.
fn run_shop<B: Backend>(terminal: &mut Terminal<B>, session: &mut GameSession) -> io::Result<()> {
    let mut shop = ShopScreen::new();

    loop {
        terminal.draw(|f| {
            let area = f.size();
            shop.draw(f, area, session);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let key_event = match event::read()? {
            Event::Key(key_event) => key_event,
            _ => continue,
        };

        match key_event.code {
            KeyCode::Up => shop.move_up(),
            KeyCode::Down => shop.move_down(session.items.len()),
            KeyCode::Enter => {
                let message = shop.buy_selected(session);
                session.add_message(message);
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                let message = shop.equip_selected(session);
                session.add_message(message);
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                let message = shop.sell_selected(session);
                session.add_message(message);
            }
            KeyCode::Esc => break,
            _ => {}
        }
    }

    Ok(())
}

fn handle_accept_quest(session: &mut GameSession) {
    let next: Option<(String, &str)> = available_quests(&session.character, &session.quests)
        .first()
        .map(|q| (q.id.to_string(), q.title));

    match next {
        Some((id, title)) => match accept_quest(&mut session.character, &id, &session.quests) {
            Ok(()) => session.add_message(format!("Quest accepted: {}", title)),
            Err(e) => session.add_message(format!("Cannot accept quest: {}", e)),
        },
        None => session.add_message("No quests available right now.".to_string()),
    }
}

fn handle_complete_quest(session: &mut GameSession) {
    let first_active = session.character.active_quests.first().cloned();

    match first_active {
        Some(id) => match complete_quest(&mut session.character, &id, &session.quests) {
            Ok(rewards) => session.add_message(format!(
                "Quest complete! +{} XP, +{} gold.",
                rewards.xp, rewards.gold
            )),
            Err(e) => session.add_message(format!("Cannot complete quest: {}", e)),
        },
        None => session.add_message("No active quest to complete.".to_string()),
    }
}

fn handle_use_potion(session: &mut GameSession) {
    let potion_id = if has_item(&session.character, "potion") {
        "potion"
    } else if has_item(&session.character, "greater_potion") {
        "greater_potion"
    } else {
        session.add_message("No potions in your inventory.".to_string());
        return;
    };

    match use_item(&mut session.character, potion_id, &session.items) {
        Ok(item) => session.add_message(format!("Used {}.", item.name)),
        Err(e) => session.add_message(format!("Cannot use item: {}", e)),
    }
}

fn handle_revival(session: &mut GameSession) {
    match session.paid_revival() {
        Ok(true) => session.add_message("You awaken at half health, 20 gold poorer.".to_string()),
        Ok(false) => session.add_message("You are not dead.".to_string()),
        Err(e) => session.add_message(format!("Cannot revive: {}", e)),
    }
}
