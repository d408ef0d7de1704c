use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use item_list_tui::ListController;
use tracing::info;

/// Which control currently receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    AddButton,
    RemoveAll,
}

impl Focus {
    const ORDER: [Self; 3] = [Self::Input, Self::AddButton, Self::RemoveAll];

    const fn index(self) -> usize {
        match self {
            Self::Input => 0,
            Self::AddButton => 1,
            Self::RemoveAll => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::AddButton => "Add",
            Self::RemoveAll => "Remove all",
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub focus: Focus,
    pub title: String,
    controller: ListController,
}

impl App {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            running: true,
            show_help: false,
            focus: Focus::Input,
            title: title.into(),
            controller: ListController::new(),
        }
    }

    pub const fn controller(&self) -> &ListController {
        &self.controller
    }

    pub fn type_char(&mut self, ch: char) {
        let mut text = self.controller.draft().to_owned();
        text.push(ch);
        self.controller.set_draft(text);
    }

    pub fn delete_char(&mut self) {
        let mut text = self.controller.draft().to_owned();
        if text.pop().is_some() {
            self.controller.set_draft(text);
        }
    }

    pub fn submit(&mut self) {
        self.controller.submit();

        // A disabled button cannot keep focus
        if self.focus == Focus::AddButton && !self.controller.can_submit() {
            self.focus = Focus::Input;
        }
    }

    pub fn remove_all(&mut self) {
        self.controller.clear_all();
    }

    pub fn focus_next(&mut self) {
        self.move_focus(wrap_increment);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(wrap_decrement);
    }

    fn move_focus(&mut self, step: fn(usize, usize) -> usize) {
        let mut index = self.focus.index();
        loop {
            index = step(index, Focus::ORDER.len());
            let candidate = Focus::ORDER[index];
            if self.is_focusable(candidate) {
                self.focus = candidate;
                return;
            }
        }
    }

    fn is_focusable(&self, focus: Focus) -> bool {
        focus != Focus::AddButton || self.controller.can_submit()
    }

    pub fn quit(&mut self) {
        info!(entries = self.controller.entries().len(), "quitting");
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_focuses_input() {
        let app = App::new("Items");

        assert!(app.running);
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.controller().draft(), "");
        assert!(app.controller().entries().is_empty());
    }

    #[test]
    fn test_typing_and_deleting_edits_draft() {
        let mut app = App::new("Items");
        for ch in "Hi!".chars() {
            app.type_char(ch);
        }
        assert_eq!(app.controller().draft(), "Hi!");

        app.delete_char();
        assert_eq!(app.controller().draft(), "Hi");

        app.delete_char();
        app.delete_char();
        app.delete_char();
        assert_eq!(app.controller().draft(), "");
    }

    #[test]
    fn test_focus_skips_disabled_add_button() {
        let mut app = App::new("Items");

        app.focus_next();
        assert_eq!(app.focus, Focus::RemoveAll);
        app.focus_next();
        assert_eq!(app.focus, Focus::Input);
        app.focus_prev();
        assert_eq!(app.focus, Focus::RemoveAll);
    }

    #[test]
    fn test_focus_visits_enabled_add_button() {
        let mut app = App::new("Items");
        app.type_char('x');

        app.focus_next();
        assert_eq!(app.focus, Focus::AddButton);
        app.focus_next();
        assert_eq!(app.focus, Focus::RemoveAll);
        app.focus_prev();
        assert_eq!(app.focus, Focus::AddButton);
    }

    #[test]
    fn test_submit_from_add_button_returns_focus_to_input() {
        let mut app = App::new("Items");
        app.type_char('x');
        app.focus = Focus::AddButton;

        app.submit();

        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.controller().entries(), ["x".to_string()]);
    }

    #[test]
    fn test_quit_stops_running() {
        let mut app = App::new("Items");
        app.quit();
        assert!(!app.running);
    }
}
