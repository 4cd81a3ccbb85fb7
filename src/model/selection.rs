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

//! Detail selection state.
//!
//! Remembers which book was last picked for the detail panel and whether the
//! panel is currently shown. The book is held weakly, the collection owns it.

use std::rc::{Rc, Weak};

use crate::model::Book;

#[derive(Debug, Default)]
pub(crate) struct Selection {
    book: Option<Weak<Book>>,
    panel_open: bool,
}

impl Selection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn select(&mut self, book: &Rc<Book>) {
        self.book = Some(Rc::downgrade(book));
        self.panel_open = true;
    }

    /// Hides the panel, the selected book is still remembered.
    pub(crate) fn close(&mut self) {
        self.panel_open = false;
    }

    pub(crate) fn current(&self) -> (Option<Rc<Book>>, bool) {
        (self.book.as_ref().and_then(Weak::upgrade), self.panel_open)
    }

    pub(crate) fn panel_open(&self) -> bool {
        self.panel_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_selected_and_panel_closed() {
        let selection = Selection::new();
        let (book, open) = selection.current();
        assert!(book.is_none());
        assert!(!open);
    }

    #[test]
    fn select_opens_panel_and_close_keeps_book() {
        let dune = Rc::new(Book::new("Dune", "Herbert"));
        let mut selection = Selection::new();

        selection.select(&dune);
        let (book, open) = selection.current();
        assert!(Rc::ptr_eq(&book.unwrap(), &dune));
        assert!(open);

        selection.close();
        let (book, open) = selection.current();
        assert!(Rc::ptr_eq(&book.unwrap(), &dune));
        assert!(!open);
    }

    #[test]
    fn reselecting_replaces_the_book() {
        let dune = Rc::new(Book::new("Dune", "Herbert"));
        let emma = Rc::new(Book::new("Emma", "Austen"));
        let mut selection = Selection::new();

        selection.select(&dune);
        selection.close();
        selection.select(&emma);

        let (book, open) = selection.current();
        assert_eq!(book.unwrap().title, "Emma");
        assert!(open);
    }

    #[test]
    fn does_not_keep_book_alive() {
        let dune = Rc::new(Book::new("Dune", "Herbert"));
        let mut selection = Selection::new();
        selection.select(&dune);

        drop(dune);

        assert!(selection.current().0.is_none());
    }

    #[test]
    fn close_without_selection_is_a_no_op() {
        let mut selection = Selection::new();
        selection.close();
        assert_eq!(selection.current(), (None, false));
    }
}
