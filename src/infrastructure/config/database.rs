//! Database location and startup behavior.

use serde::Deserialize;

/// Default database file, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "School.db";

/// Database configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file path, or `:memory:`.
    pub path: String,
    /// Drop and recreate the schema before the demo runs.
    ///
    /// When false the schema is only created if missing.
    pub reset_on_start: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.into(),
            reset_on_start: true,
        }
    }
}
