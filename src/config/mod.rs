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

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "bookui";

pub(crate) const DEFAULT_ENDPOINT: &str = "https://book-club-json.herokuapp.com/books";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub endpoint: String,
    /// Transport timeout for the catalog request.
    pub timeout_secs: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Where log output goes, the configured file or one in the temp
    /// directory.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(format!("{}.log", CONFIG_NAME)))
    }
}

/// Loads the configuration file, creating it with defaults on first run.
pub fn load_config() -> Result<AppConfig, confy::ConfyError> {
    confy::load(CONFIG_NAME, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"endpoint": "http://localhost/books"}"#).unwrap();

        assert_eq!(config.endpoint, "http://localhost/books");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.version, 1);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn log_path_prefers_configured_file() {
        let config = AppConfig {
            log_file: Some(PathBuf::from("/var/log/bookui.log")),
            ..AppConfig::default()
        };
        assert_eq!(config.log_path(), PathBuf::from("/var/log/bookui.log"));

        let config = AppConfig::default();
        assert_eq!(config.log_path(), std::env::temp_dir().join("bookui.log"));
    }
}
