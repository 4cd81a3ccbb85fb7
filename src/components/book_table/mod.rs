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

//! Book table widget and state management.
//!
//! Persistent state (`BookTableState`) is kept apart from the transient widget
//! view (`BookTable`), which borrows the books currently on display each time
//! it is drawn or handles a key.

mod event;
mod render;

use std::rc::Rc;

use ratatui::widgets::TableState;

use crate::model::{Book, catalog::LoadState};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum BookTableAction {
    /// Open the detail panel for the book at this index.
    Pick(usize),
}

#[derive(Default)]
pub(crate) struct BookTableState {
    table_state: TableState,
    /// Rows visible when last drawn, used for page movement.
    page_size: usize,
}

impl BookTableState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Moves back to the first row after the displayed books changed.
    pub(crate) fn reset_selection(&mut self, len: usize) {
        *self.table_state.offset_mut() = 0;
        self.table_state.select(if len == 0 { None } else { Some(0) });
    }

    pub(crate) fn as_widget<'a>(&'a mut self, books: &'a [Rc<Book>]) -> BookTable<'a> {
        BookTable {
            books,
            table_state: &mut self.table_state,
            page_size: &mut self.page_size,
            title: "",
            load_state: None,
            search_term: "",
            dimmed: false,
        }
    }
}

pub(crate) struct BookTable<'a> {
    books: &'a [Rc<Book>],
    table_state: &'a mut TableState,
    page_size: &'a mut usize,
    title: &'a str,
    load_state: Option<&'a LoadState>,
    search_term: &'a str,
    dimmed: bool,
}

impl<'a> BookTable<'a> {
    pub(crate) fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub(crate) fn load_state(mut self, load_state: &'a LoadState) -> Self {
        self.load_state = Some(load_state);
        self
    }

    pub(crate) fn search_term(mut self, search_term: &'a str) -> Self {
        self.search_term = search_term;
        self
    }

    pub(crate) fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }

    fn goto_next(&mut self) {
        let len = self.books.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.books.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.books.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if let Some(last) = self.books.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }

    fn goto_half_page_forward(&mut self) {
        let Some(last) = self.books.len().checked_sub(1) else { return };
        let step = (*self.page_size / 2).max(1);
        let i = self.table_state.selected().map_or(0, |i| (i + step).min(last));
        self.table_state.select(Some(i));
    }

    fn goto_half_page_back(&mut self) {
        if self.books.is_empty() { return; }
        let step = (*self.page_size / 2).max(1);
        let i = self.table_state.selected().map_or(0, |i| i.saturating_sub(step));
        self.table_state.select(Some(i));
    }

    fn selected_index(&self) -> Option<usize> {
        self.table_state.selected().filter(|&i| i < self.books.len())
    }
}
