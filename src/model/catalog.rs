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

//! Catalog view state.
//!
//! [`Catalog`] owns the authoritative book collection as last retrieved, the
//! current search term, the filtered view derived from both, and the detail
//! selection. Every mutation recomputes the derived view before returning, so
//! whatever is drawn next is always consistent.

use std::rc::Rc;

use crate::model::{Book, filter::filter_books, selection::Selection};

pub(crate) const ALL_BOOKS_TITLE: &str = "All books";
pub(crate) const SEARCH_RESULTS_TITLE: &str = "Search results";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Default)]
pub(crate) struct Catalog {
    books: Vec<Rc<Book>>,
    filtered: Vec<Rc<Book>>,
    search_term: String,
    selection: Selection,
    load_state: LoadState,
}

impl Catalog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection with a freshly retrieved one.
    ///
    /// The filtered view is rebuilt against whatever term is active, which is
    /// the full list unless the user started typing while loading.
    pub(crate) fn set_books(&mut self, books: Vec<Book>) {
        self.books = books.into_iter().map(Rc::new).collect();
        self.load_state = LoadState::Loaded;
        self.refilter();
    }

    /// Records a failed retrieval, the collection stays empty.
    pub(crate) fn set_load_failed(&mut self, message: impl Into<String>) {
        self.books.clear();
        self.filtered.clear();
        self.load_state = LoadState::Failed(message.into());
    }

    pub(crate) fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refilter();
    }

    pub(crate) fn pick_book(&mut self, book: &Rc<Book>) {
        self.selection.select(book);
    }

    /// Picks the book at `index` in the filtered view, if there is one.
    pub(crate) fn pick_filtered(&mut self, index: usize) -> bool {
        match self.filtered.get(index) {
            Some(book) => {
                let book = Rc::clone(book);
                self.pick_book(&book);
                true
            }
            None => false,
        }
    }

    pub(crate) fn close_panel(&mut self) {
        self.selection.close();
    }

    pub(crate) fn books(&self) -> &[Rc<Book>] {
        &self.books
    }

    pub(crate) fn filtered(&self) -> &[Rc<Book>] {
        &self.filtered
    }

    pub(crate) fn search_term(&self) -> &str {
        &self.search_term
    }

    pub(crate) fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub(crate) fn selected(&self) -> (Option<Rc<Book>>, bool) {
        self.selection.current()
    }

    pub(crate) fn panel_open(&self) -> bool {
        self.selection.panel_open()
    }

    /// True when the filtered view is shorter than the collection.
    ///
    /// Filtering only ever removes books, so a differing length is taken to
    /// mean a search is narrowing the list.
    pub(crate) fn has_active_filter(&self) -> bool {
        self.filtered.len() != self.books.len()
    }

    pub(crate) fn title(&self) -> &'static str {
        if self.has_active_filter() {
            SEARCH_RESULTS_TITLE
        } else {
            ALL_BOOKS_TITLE
        }
    }

    fn refilter(&mut self) {
        self.filtered = filter_books(&self.books, &self.search_term);
    }
}
