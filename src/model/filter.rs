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

//! Free-text search over the book collection.

use std::rc::Rc;

use crate::model::Book;

/// Returns the books whose title or author contains `term`, ignoring case.
///
/// An empty or whitespace-only term matches everything. The relative order of
/// `books` is preserved and each matching book appears exactly once.
pub(crate) fn filter_books(books: &[Rc<Book>], term: &str) -> Vec<Rc<Book>> {
    if term.trim().is_empty() {
        return books.to_vec();
    }

    let needle = term.to_lowercase();
    books
        .iter()
        .filter(|book| matches(book, &needle))
        .cloned()
        .collect()
}

fn matches(book: &Book, needle: &str) -> bool {
    book.title.to_lowercase().contains(needle) || book.author.to_lowercase().contains(needle)
}
