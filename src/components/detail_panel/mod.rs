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

//! Detail overlay for the selected book.
//!
//! The panel slides in from the right edge while the transition is opening
//! and back out while closing; its width follows the transition progress.

mod render;

use crate::model::Book;

pub(crate) struct DetailPanel<'a> {
    book: &'a Book,
    /// Fraction of the full panel width to show.
    progress: f64,
}

impl<'a> DetailPanel<'a> {
    pub(crate) fn new(book: &'a Book, progress: f64) -> Self {
        Self {
            book,
            progress: progress.clamp(0.0, 1.0),
        }
    }
}
