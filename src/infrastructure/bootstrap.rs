//! Infrastructure bootstrap helpers for runtime wiring.

use tracing::info;

use crate::adapter::outbound::sqlite::SchoolContext;
use crate::error::Result;
use crate::infrastructure::config::database::DatabaseConfig;

/// Open the configured database and prepare its schema.
///
/// With `reset_on_start` the schema and all rows are dropped and recreated;
/// otherwise the schema is only created if missing.
///
/// # Errors
/// Returns an error if the database cannot be opened or migrated.
pub fn open_database(config: &DatabaseConfig) -> Result<SchoolContext> {
    let context = SchoolContext::open(&config.path)?;

    if config.reset_on_start {
        context.reset_and_create_schema()?;
    } else if context.ensure_created()? {
        info!(database = %config.path, "Schema created");
    }

    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::SchoolRepository;
    use crate::domain::NewSubject;

    fn file_config(path: &std::path::Path, reset_on_start: bool) -> DatabaseConfig {
        DatabaseConfig {
            path: path.to_string_lossy().to_string(),
            reset_on_start,
        }
    }

    #[test]
    fn reset_on_start_discards_previous_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("school.db");

        {
            let context = open_database(&file_config(&path, true)).unwrap();
            SchoolRepository::new(&context)
                .add_subject(NewSubject::new("Mathematics", 30))
                .unwrap();
        }

        let context = open_database(&file_config(&path, true)).unwrap();
        let subjects = SchoolRepository::new(&context).get_all_subjects().unwrap();
        assert!(subjects.is_empty());
    }

    #[test]
    fn without_reset_rows_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("school.db");

        {
            let context = open_database(&file_config(&path, false)).unwrap();
            SchoolRepository::new(&context)
                .add_subject(NewSubject::new("Mathematics", 30))
                .unwrap();
        }

        let context = open_database(&file_config(&path, false)).unwrap();
        let subjects = SchoolRepository::new(&context).get_all_subjects().unwrap();
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].subject.title, "Mathematics");
    }
}
