//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate App methods based on the
//! current screen and dialog state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::app::{App, Screen};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows delivers both press and release events
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    // Help dialog swallows everything
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    match app.screen {
        Screen::Preferences => handle_preferences_key(app, key),
        Screen::Story => handle_story_key(app, key),
    }
}

/// Handle keys on the preferences screen
fn handle_preferences_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // While a submit is in flight only cancellation and quit are allowed;
    // everything else would mutate state mid-navigation.
    if app.wizard.is_submitting {
        match key.code {
            KeyCode::Esc => app.cancel_submit(),
            KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        // Help
        KeyCode::Char('?') => app.show_help = true,

        // Focus navigation
        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => app.focus_prev(),

        // Card cursor within the focused section
        KeyCode::Char('h') | KeyCode::Left => app.move_card_left(),
        KeyCode::Char('l') | KeyCode::Right => app.move_card_right(),

        // Direct card jump
        KeyCode::Char(c @ '1'..='9') => {
            app.jump_to_card(c as usize - '0' as usize);
        }

        // Select / submit
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),

        _ => {}
    }

    Ok(())
}

/// Handle keys on the story screen
fn handle_story_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Focus;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn complete_wizard(app: &mut App) {
        app.wizard.set_age("3-5");
        app.wizard.toggle_style("warm");
        app.wizard.set_voice("default");
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Story);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Age);
    }

    #[test]
    fn test_select_age_with_arrows_and_enter() {
        let mut app = App::new();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.selected_age, "6-8");

        // Selecting a different age replaces, never clears
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.selected_age, "3-5");
    }

    #[test]
    fn test_space_toggles_story_style() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.wizard.selected_styles, vec!["warm".to_string()]);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.wizard.selected_styles.is_empty());
    }

    #[test]
    fn test_number_key_jumps_to_card() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.selected_styles, vec!["scifi".to_string()]);
    }

    #[test]
    fn test_enter_on_next_submits_when_complete() {
        let mut app = App::new();
        complete_wizard(&mut app);
        app.focus = Focus::Next;
        press(&mut app, KeyCode::Enter);
        assert!(app.wizard.is_submitting);
    }

    #[test]
    fn test_enter_on_next_blocked_when_incomplete() {
        let mut app = App::new();
        app.focus = Focus::Next;
        press(&mut app, KeyCode::Enter);
        assert!(!app.wizard.is_submitting);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_keys_ignored_while_submitting() {
        let mut app = App::new();
        complete_wizard(&mut app);
        app.submit();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Age, "focus frozen during submit");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.selected_age, "3-5");
    }

    #[test]
    fn test_esc_cancels_in_flight_submit() {
        let mut app = App::new();
        complete_wizard(&mut app);
        app.submit();

        press(&mut app, KeyCode::Esc);
        assert!(!app.wizard.is_submitting);
        assert!(!app.has_pending_submit());
    }

    #[test]
    fn test_help_opens_and_any_key_closes() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.show_help);
        // The closing key is swallowed, not applied to the wizard
        assert!(app.wizard.selected_styles.is_empty());
    }

    #[test]
    fn test_story_screen_quit_keys() {
        let mut app = App::new();
        app.screen = Screen::Story;
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
