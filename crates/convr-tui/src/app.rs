//! Application state and key handling

use convr_core::Converter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use tracing::debug;

/// Which widget receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Amount,
    Source,
    Target,
    Converted,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Amount, Focus::Source, Focus::Target, Focus::Converted];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Where the rate table came from (shown in the header)
#[derive(Debug, Clone, PartialEq)]
pub enum RatesOrigin {
    Fixture,
    File(String),
}

pub struct App {
    pub converter: Converter,
    pub focus: Focus,
    pub origin: RatesOrigin,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub status_start: Option<Instant>,
    pub should_quit: bool,
}

impl App {
    pub fn new(converter: Converter, origin: RatesOrigin) -> Self {
        Self {
            converter,
            focus: Focus::default(),
            origin,
            show_help: false,
            status_message: None,
            status_start: None,
            should_quit: false,
        }
    }

    /// Set a temporary status message
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
        self.status_start = Some(Instant::now());
    }

    /// Clear status message after 3s
    pub fn clear_status_if_expired(&mut self) {
        if let Some(start) = self.status_start {
            if start.elapsed().as_millis() >= 3000 {
                self.status_message = None;
                self.status_start = None;
            }
        }
    }

    /// Toggle help popup
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn reverse(&mut self) {
        self.converter.reverse();
        let msg = format!(
            "Reversed: {} → {}",
            self.converter.source(),
            self.converter.target()
        );
        self.set_status(&msg);
    }

    /// Append a character to the amount field
    pub fn insert_char(&mut self, c: char) {
        let mut text = self.converter.amount().to_string();
        text.push(c);
        self.converter.set_amount(&text);
    }

    /// Delete the last character of the amount field
    pub fn delete_char(&mut self) {
        let mut text = self.converter.amount().to_string();
        if text.pop().is_some() {
            self.converter.set_amount(&text);
        }
    }

    pub fn clear_amount(&mut self) {
        self.converter.clear_amount();
    }

    /// Typing into the converted field goes through the converter, which refuses it
    fn write_converted(&mut self, text: &str) {
        if let Err(e) = self.converter.set_converted(text) {
            let msg = capitalize(&e.to_string());
            self.set_status(&msg);
        }
    }

    fn step_selector(&mut self, offset: isize) {
        match self.focus {
            Focus::Source => self.converter.step_source(offset),
            Focus::Target => self.converter.step_target(offset),
            Focus::Amount | Focus::Converted => {}
        }
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        debug!(code = ?key.code, ctrl, focus = ?self.focus, "key");

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            KeyCode::F(1) => {
                self.toggle_help();
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.reverse();
                return;
            }
            KeyCode::Char('u') if ctrl => {
                self.clear_amount();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Amount => match key.code {
                KeyCode::Char(c) if !ctrl => self.insert_char(c),
                KeyCode::Backspace => self.delete_char(),
                _ => {}
            },
            Focus::Source | Focus::Target => match key.code {
                KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                    self.step_selector(-1)
                }
                KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                    self.step_selector(1)
                }
                KeyCode::Char('r') => self.reverse(),
                KeyCode::Char('?') => self.toggle_help(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Focus::Converted => match key.code {
                KeyCode::Char('r') => self.reverse(),
                KeyCode::Char('?') => self.toggle_help(),
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char(c) if !ctrl => {
                    let mut text = self.converter.converted_text();
                    text.push(c);
                    self.write_converted(&text);
                }
                KeyCode::Backspace => {
                    let mut text = self.converter.converted_text();
                    text.pop();
                    self.write_converted(&text);
                }
                _ => {}
            },
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn new_app() -> App {
        App::new(Converter::default(), RatesOrigin::Fixture)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_focus_cycle() {
        let mut app = new_app();
        assert_eq!(app.focus, Focus::Amount);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Source);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Target);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Converted);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Amount);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Converted);
    }

    #[test]
    fn test_typing_updates_converted() {
        let mut app = new_app();
        ctrl(&mut app, 'u');
        assert_eq!(app.converter.converted_text(), "");
        type_str(&mut app, "200");
        assert_eq!(app.converter.amount(), "200");
        assert_eq!(app.converter.converted_text(), "200");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.converter.amount(), "20");
        assert_eq!(app.converter.converted_text(), "20");
    }

    #[test]
    fn test_letters_go_into_amount() {
        let mut app = new_app();
        ctrl(&mut app, 'u');
        type_str(&mut app, "abc");
        assert_eq!(app.converter.amount(), "abc");
        assert_eq!(app.converter.converted(), None);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_selectors_step() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.converter.source().code, "EUR");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.converter.target().code, "GBP");
    }

    #[test]
    fn test_reverse_keeps_amount() {
        let mut app = new_app();
        app.converter.set_source("EUR").unwrap();
        app.converter.set_target("JPY").unwrap();
        app.converter.set_amount("50");
        ctrl(&mut app, 'r');
        assert_eq!(app.converter.amount(), "50");
        assert_eq!(app.converter.source().code, "JPY");
        assert_eq!(app.converter.converted_text(), "46.92");
        assert_eq!(app.status_message.as_deref(), Some("Reversed: JPY → EUR"));
    }

    #[test]
    fn test_converted_field_rejects_input() {
        let mut app = new_app();
        app.focus = Focus::Converted;
        type_str(&mut app, "999");
        assert_eq!(app.converter.converted_text(), "100");
        assert_eq!(
            app.status_message.as_deref(),
            Some("The converted amount is read-only")
        );
    }

    #[test]
    fn test_help_toggle() {
        let mut app = new_app();
        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        // Keys are swallowed while help is open
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.converter.amount(), "100");
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "q types into the amount field");
        assert_eq!(app.converter.amount(), "100q");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app();
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }
}
