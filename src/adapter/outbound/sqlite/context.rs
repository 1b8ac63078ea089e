//! Database context: owns the connection and the schema lifecycle.
//!
//! A [`SchoolContext`] is opened once per process (or per test) and handed to
//! whatever needs storage. Dropping it closes the connection.

use std::path::Path;

use tracing::{debug, info};

use super::database::connection::{
    create_pool, drop_all_objects, run_migrations, DbConnection, DbPool,
};
use crate::error::{Error, Result};

/// Database URL that opens a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Connection and schema owner for the school database.
pub struct SchoolContext {
    database_url: String,
    pool: DbPool,
}

impl SchoolContext {
    /// Open the database at `database_url`, creating the file and its parent
    /// directories if missing. The schema is not touched.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the connection
    /// cannot be opened.
    pub fn open(database_url: &str) -> Result<Self> {
        if database_url != IN_MEMORY {
            if let Some(parent) = Path::new(database_url).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let pool = create_pool(database_url)?;
        debug!(database = %database_url, "Opened database");
        Ok(Self {
            database_url: database_url.to_string(),
            pool,
        })
    }

    /// Open a fresh in-memory database with the schema created.
    ///
    /// # Errors
    /// Returns an error if the connection or the migrations fail.
    pub fn in_memory() -> Result<Self> {
        let context = Self::open(IN_MEMORY)?;
        context.ensure_created()?;
        Ok(context)
    }

    /// Location this context was opened with.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Shared handle to the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Check out the connection.
    ///
    /// # Errors
    /// Returns an error if the connection is unavailable.
    pub fn connection(&self) -> Result<DbConnection> {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }

    /// Empty the database: every table and view goes, whether this crate
    /// created it or not.
    ///
    /// Returns `true` if anything existed and was removed.
    ///
    /// # Errors
    /// Returns an error if the schema cannot be dropped.
    pub fn ensure_deleted(&self) -> Result<bool> {
        let dropped = drop_all_objects(&self.pool)?;
        debug!(dropped, "Schema dropped");
        Ok(dropped > 0)
    }

    /// Create the schema if it does not exist yet.
    ///
    /// Returns `true` if the schema was created by this call.
    ///
    /// # Errors
    /// Returns an error if a migration fails.
    pub fn ensure_created(&self) -> Result<bool> {
        let applied = run_migrations(&self.pool)?;
        debug!(applied, "Schema ensured");
        Ok(applied > 0)
    }

    /// Drop any existing schema and data, then create the schema again.
    ///
    /// Destructive. Meant for demo and test bootstrap only.
    ///
    /// # Errors
    /// Returns an error if dropping or creating the schema fails.
    pub fn reset_and_create_schema(&self) -> Result<()> {
        self.ensure_deleted()?;
        self.ensure_created()?;
        info!(database = %self.database_url, "Database reset");
        Ok(())
    }
}

impl std::fmt::Debug for SchoolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchoolContext")
            .field("database_url", &self.database_url)
            .finish_non_exhaustive()
    }
}
