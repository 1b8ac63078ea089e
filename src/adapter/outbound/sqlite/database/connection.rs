//! Database connection management using Diesel ORM.
//!
//! Provides the single-connection pool, migration support, and connection
//! configuration for SQLite databases.

use std::time::Duration;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sql_types::Text;
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Type alias for a connection checked out of [`DbPool`].
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Applies connection pragmas every time the pool opens a connection.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        configure_sqlite_connection(conn).map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a connection pool holding exactly one connection.
///
/// The connection is opened eagerly and kept for the life of the pool, so an
/// in-memory database survives between checkouts.
///
/// # Errors
/// Returns an error if the connection cannot be opened.
pub fn create_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(1)
        // A recycled connection would lose an in-memory database.
        .max_lifetime(None)
        .idle_timeout(None)
        .connection_timeout(Duration::from_secs(5))
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))
}

/// Run all pending database migrations.
///
/// Returns the number of migrations applied.
///
/// # Errors
/// Returns an error if a migration fails.
pub fn run_migrations(pool: &DbPool) -> Result<usize> {
    let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Migration(e.to_string()))?;
    Ok(applied.len())
}

#[derive(QueryableByName)]
struct SchemaObject {
    #[diesel(sql_type = Text)]
    name: String,
    #[diesel(sql_type = Text)]
    kind: String,
}

/// Drop every table and view in the database, including the migration
/// bookkeeping table, whatever created them.
///
/// Returns the number of objects dropped.
///
/// # Errors
/// Returns an error if the schema cannot be read or an object cannot be dropped.
pub fn drop_all_objects(pool: &DbPool) -> Result<usize> {
    let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;

    let objects: Vec<SchemaObject> = diesel::sql_query(
        "SELECT name, type AS kind FROM sqlite_master \
         WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite_%'",
    )
    .load(&mut conn)
    .map_err(|e| Error::Database(e.to_string()))?;

    if objects.is_empty() {
        return Ok(0);
    }

    // Must be toggled outside a transaction.
    diesel::sql_query("PRAGMA foreign_keys = OFF")
        .execute(&mut conn)
        .map_err(|e| Error::Database(e.to_string()))?;

    let dropped = conn.transaction(|conn| {
        for object in &objects {
            let keyword = if object.kind == "view" { "VIEW" } else { "TABLE" };
            diesel::sql_query(format!(
                "DROP {keyword} IF EXISTS \"{}\"",
                object.name.replace('"', "\"\"")
            ))
            .execute(conn)?;
        }
        Ok::<_, diesel::result::Error>(objects.len())
    });

    let restored = diesel::sql_query("PRAGMA foreign_keys = ON").execute(&mut conn);
    let dropped = dropped.map_err(|e| Error::Database(e.to_string()))?;
    restored.map_err(|e| Error::Database(e.to_string()))?;
    Ok(dropped)
}

/// Configure SQLite connection pragmas.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(conn: &mut SqliteConnection) -> QueryResult<()> {
    diesel::sql_query("PRAGMA foreign_keys = ON").execute(conn)?;
    diesel::sql_query("PRAGMA busy_timeout = 5000").execute(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(diesel::QueryableByName)]
    struct TableName {
        #[diesel(sql_type = diesel::sql_types::Text)]
        name: String,
    }

    #[derive(diesel::QueryableByName)]
    struct ForeignKeys {
        #[diesel(sql_type = diesel::sql_types::Integer)]
        foreign_keys: i32,
    }

    fn table_names(pool: &DbPool) -> Vec<String> {
        let mut conn = pool.get().unwrap();
        diesel::sql_query(
            "SELECT name FROM sqlite_master WHERE type = 'table' \
             AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' \
             ORDER BY name",
        )
        .load::<TableName>(&mut conn)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect()
    }

    #[test]
    fn create_pool_with_memory_db() {
        let pool = create_pool(":memory:");
        assert!(pool.is_ok());
    }

    #[test]
    fn pool_holds_a_single_connection() {
        let pool = create_pool(":memory:").unwrap();
        let conn = pool.get();
        assert!(conn.is_ok());
        assert_eq!(pool.state().connections, 1);
    }

    #[test]
    fn run_migrations_creates_tables() {
        let pool = create_pool(":memory:").unwrap();
        assert_eq!(run_migrations(&pool).unwrap(), 1);

        assert_eq!(
            table_names(&pool),
            vec!["student_subjects", "students", "subjects"]
        );
    }

    #[test]
    fn run_migrations_is_idempotent() {
        let pool = create_pool(":memory:").unwrap();

        assert_eq!(run_migrations(&pool).unwrap(), 1);
        assert_eq!(run_migrations(&pool).unwrap(), 0);
        assert_eq!(run_migrations(&pool).unwrap(), 0);

        assert_eq!(table_names(&pool).len(), 3);
    }

    #[test]
    fn drop_all_objects_removes_schema_and_bookkeeping() {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();

        // Three schema tables plus __diesel_schema_migrations.
        assert_eq!(drop_all_objects(&pool).unwrap(), 4);
        assert!(table_names(&pool).is_empty());
        assert_eq!(drop_all_objects(&pool).unwrap(), 0);

        // Migrations apply again from scratch.
        assert_eq!(run_migrations(&pool).unwrap(), 1);
    }

    #[test]
    fn drop_all_objects_removes_foreign_tables_and_views() {
        let pool = create_pool(":memory:").unwrap();
        {
            let mut conn = pool.get().unwrap();
            for sql in [
                "CREATE TABLE \"Students\" (\"Id\" INTEGER PRIMARY KEY, \"Name\" TEXT)",
                "CREATE TABLE \"StudentSubject\" (\"StudentsId\" INTEGER \
                 REFERENCES \"Students\" (\"Id\"))",
                "INSERT INTO \"Students\" VALUES (1, 'Alice')",
                "INSERT INTO \"StudentSubject\" VALUES (1)",
                "CREATE VIEW roster AS SELECT \"Name\" FROM \"Students\"",
            ] {
                diesel::sql_query(sql).execute(&mut conn).unwrap();
            }
        }

        assert_eq!(drop_all_objects(&pool).unwrap(), 3);
        assert!(table_names(&pool).is_empty());

        let mut conn = pool.get().unwrap();
        let pragma = diesel::sql_query("PRAGMA foreign_keys")
            .get_result::<ForeignKeys>(&mut conn)
            .unwrap();
        assert_eq!(pragma.foreign_keys, 1);
    }

    #[test]
    fn connections_enforce_foreign_keys() {
        let pool = create_pool(":memory:").unwrap();
        let mut conn = pool.get().unwrap();

        let pragma = diesel::sql_query("PRAGMA foreign_keys")
            .get_result::<ForeignKeys>(&mut conn)
            .unwrap();
        assert_eq!(pragma.foreign_keys, 1);
    }

    #[test]
    fn migrations_constant_is_accessible() {
        let _migrations = MIGRATIONS;
    }
}
