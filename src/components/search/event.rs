// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Input handling for the search bar.
//!
//! While focused every key is consumed. Edits that change the text post the
//! whole current value as a search event so results follow the typing.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::{components::SearchBar, events::AppEvent};

impl SearchBar {
    /// Returns `true` if the event was consumed.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.focused {
            if key_event.code == KeyCode::Char('/') {
                self.focused = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Enter, _) | (KeyCode::Tab, _) => {
                self.focused = false;
            }

            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if !self.input.value().is_empty() {
                    self.input.reset();
                    self.send_term(event_tx)?;
                }
            }

            _ => {
                let changed = self.input.handle_event(event).is_some_and(|c| c.value);
                if changed {
                    self.send_term(event_tx)?;
                }
            }
        }

        Ok(true)
    }

    fn send_term(&self, event_tx: &Sender<AppEvent>) -> Result<()> {
        event_tx.send(AppEvent::SearchChanged(self.input.value().to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::KeyEvent;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn terms(rx: &mpsc::Receiver<AppEvent>) -> Vec<String> {
        rx.try_iter()
            .filter_map(|e| match e {
                AppEvent::SearchChanged(term) => Some(term),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn ignores_keys_until_focused() {
        let (tx, rx) = mpsc::channel();
        let mut search = SearchBar::new();

        assert!(!search.handle_event(&key(KeyCode::Char('a')), &tx).unwrap());
        assert!(search.handle_event(&key(KeyCode::Char('/')), &tx).unwrap());
        assert!(search.focused());
        assert!(terms(&rx).is_empty());
    }

    #[test]
    fn reports_every_edit_with_the_full_value() {
        let (tx, rx) = mpsc::channel();
        let mut search = SearchBar::new();
        search.handle_event(&key(KeyCode::Char('/')), &tx).unwrap();

        for c in "du n".chars() {
            search.handle_event(&key(KeyCode::Char(c)), &tx).unwrap();
        }
        search.handle_event(&key(KeyCode::Backspace), &tx).unwrap();

        assert_eq!(terms(&rx), vec!["d", "du", "du ", "du n", "du "]);
    }

    #[test]
    fn cursor_movement_is_not_a_search() {
        let (tx, rx) = mpsc::channel();
        let mut search = SearchBar::new();
        search.handle_event(&key(KeyCode::Char('/')), &tx).unwrap();
        search.handle_event(&key(KeyCode::Char('x')), &tx).unwrap();

        search.handle_event(&key(KeyCode::Left), &tx).unwrap();

        assert_eq!(terms(&rx), vec!["x"]);
    }

    #[test]
    fn escape_leaves_the_term_in_place() {
        let (tx, rx) = mpsc::channel();
        let mut search = SearchBar::new();
        search.handle_event(&key(KeyCode::Char('/')), &tx).unwrap();
        search.handle_event(&key(KeyCode::Char('e')), &tx).unwrap();

        assert!(search.handle_event(&key(KeyCode::Esc), &tx).unwrap());

        assert!(!search.focused());
        assert_eq!(search.input.value(), "e");
        assert_eq!(terms(&rx), vec!["e"]);
    }
}
