mod help;
pub(crate) mod helpers;

use crate::app::state::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Entry point for key presses carrying modifiers. Ctrl+C quits from anywhere;
/// other Ctrl or Alt chords are dropped so they never reach the draft.
/// Ctrl+Alt together is AltGr on some platforms and is treated as typing.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    let chord = key.modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT);

    if chord == KeyModifiers::CONTROL {
        if key.code == KeyCode::Char('c') {
            app.quit();
        }
        return;
    }

    if chord == KeyModifiers::ALT {
        return;
    }

    handle_input(app, key.code);
}

pub fn handle_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    match key {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        _ => match app.focus {
            Focus::Input => handle_text_input(app, key),
            Focus::AddButton => {
                if is_activation(key) {
                    app.submit();
                }
            }
            Focus::RemoveAll => {
                if is_activation(key) {
                    app.remove_all();
                }
            }
        },
    }
}

fn handle_text_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => app.type_char(c),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Enter => app.submit(),
        _ => {}
    }
}

const fn is_activation(key: KeyCode) -> bool {
    matches!(key, KeyCode::Enter | KeyCode::Char(' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_input(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_enables_add_and_clearing_disables_it() {
        let mut app = App::new("Items");

        type_text(&mut app, "New Item");
        assert_eq!(app.controller().draft(), "New Item");
        assert!(app.controller().can_submit());

        for _ in 0.."New Item".len() {
            handle_input(&mut app, KeyCode::Backspace);
        }
        assert_eq!(app.controller().draft(), "");
        assert!(!app.controller().can_submit());
    }

    #[test]
    fn test_enter_submits_and_clears_input() {
        let mut app = App::new("Items");
        type_text(&mut app, "New Item");

        handle_input(&mut app, KeyCode::Enter);

        assert_eq!(app.controller().entries(), ["New Item".to_string()]);
        assert_eq!(app.controller().draft(), "");
        assert!(!app.controller().can_submit());
    }

    #[test]
    fn test_enter_on_blank_input_does_nothing() {
        let mut app = App::new("Items");
        type_text(&mut app, "   ");

        handle_input(&mut app, KeyCode::Enter);

        assert!(app.controller().entries().is_empty());
        assert_eq!(app.controller().draft(), "   ");
    }

    #[test]
    fn test_space_is_text_while_typing() {
        let mut app = App::new("Items");
        type_text(&mut app, "a b");
        assert_eq!(app.controller().draft(), "a b");
    }

    #[test]
    fn test_add_button_submits_on_activation() {
        let mut app = App::new("Items");
        type_text(&mut app, "Milk");
        handle_input(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::AddButton);

        handle_input(&mut app, KeyCode::Char(' '));

        assert_eq!(app.controller().entries(), ["Milk".to_string()]);
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_remove_all_clears_entries_but_not_draft() {
        let mut app = App::new("Items");
        for item in ["Item #1", "Item #2", "Item #3"] {
            type_text(&mut app, item);
            handle_input(&mut app, KeyCode::Enter);
        }
        type_text(&mut app, "draft");

        handle_input(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::RemoveAll);
        handle_input(&mut app, KeyCode::Enter);
        handle_input(&mut app, KeyCode::Enter);

        assert!(app.controller().entries().is_empty());
        assert_eq!(app.controller().draft(), "draft");
    }

    #[test]
    fn test_typing_on_buttons_is_ignored() {
        let mut app = App::new("Items");
        handle_input(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::RemoveAll);

        type_text(&mut app, "xyz");

        assert_eq!(app.controller().draft(), "");
    }

    #[test]
    fn test_ctrl_c_quits_without_typing() {
        let mut app = App::new("Items");
        type_text(&mut app, "ab");

        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(!app.running);
        assert_eq!(app.controller().draft(), "ab");
    }

    #[test]
    fn test_ctrl_c_quits_while_help_is_open() {
        let mut app = App::new("Items");
        app.show_help = true;

        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(!app.running);
    }

    #[test]
    fn test_other_chords_are_ignored() {
        let mut app = App::new("Items");

        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        handle_key_event(
            &mut app,
            KeyEvent::new(
                KeyCode::Char('@'),
                KeyModifiers::CONTROL | KeyModifiers::ALT,
            ),
        );

        assert!(app.running);
        assert_eq!(app.controller().draft(), "A@");
    }

    #[test]
    fn test_help_popup_swallows_keys_until_closed() {
        let mut app = App::new("Items");

        handle_input(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        type_text(&mut app, "abc");
        assert_eq!(app.controller().draft(), "");

        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(app.running);

        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }
}
