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

//! Free-text search input.
//!
//! Holds the text input for the search term and whether it currently has
//! keyboard focus. The term itself is owned by the catalog, this component
//! only reports edits.

mod event;
mod render;

use tui_input::Input;

pub(crate) struct SearchBar {
    focused: bool,
    pub(crate) input: Input,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            focused: false,
            input: Input::default(),
        }
    }

    pub(crate) fn focused(&self) -> bool {
        self.focused
    }
}
