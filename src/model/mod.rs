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

//! Domain models and core data structures.
//!
//! This module defines the book record as delivered by the remote catalog,
//! together with the state that is derived from the collection of books: the
//! search filter, the detail selection and the view controller that ties them
//! together.

pub(crate) mod catalog;
pub(crate) mod filter;
pub(crate) mod selection;
pub(crate) mod transition;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Formats a JSON value for display. Strings are shown without quotes, null
/// as nothing, and anything else as compact JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// A single catalog record.
///
/// Only `title` and `author` are interpreted. The identifier is opaque and
/// may be any JSON value. Every other field is kept
/// verbatim in `extra` (in the order the source sent them) for display in the
/// detail panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Book {
    #[serde(default)]
    pub(crate) id: Option<Value>,
    pub(crate) title: String,
    pub(crate) author: String,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

impl Book {
    #[cfg(test)]
    pub(crate) fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            extra: Map::new(),
        }
    }

    /// The identifier formatted for display, if the record has one.
    pub(crate) fn display_id(&self) -> Option<String> {
        self.id.as_ref().map(display_value)
    }

    /// Passthrough fields formatted for display.
    pub(crate) fn extra_fields(&self) -> impl Iterator<Item = (&str, String)> {
        self.extra
            .iter()
            .map(|(key, value)| (key.as_str(), display_value(value)))
    }
}
