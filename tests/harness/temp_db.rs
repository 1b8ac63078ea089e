use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use school::adapter::outbound::sqlite::{SchoolContext, SchoolRepository};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Temporary file-backed SQLite database for integration tests.
pub struct TempDb {
    path: PathBuf,
    context: Option<SchoolContext>,
}

impl TempDb {
    /// Create a fresh database file with the schema in place.
    pub fn create(name: &str) -> Self {
        let path = temp_path(name);
        let context = SchoolContext::open(&path.to_string_lossy()).expect("open sqlite database");
        context.reset_and_create_schema().expect("create schema");

        Self {
            path,
            context: Some(context),
        }
    }

    pub fn context(&self) -> &SchoolContext {
        self.context.as_ref().expect("context is open")
    }

    pub fn repository(&self) -> SchoolRepository {
        SchoolRepository::new(self.context())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the connection and open the same file again.
    pub fn reopen(&mut self) {
        drop(self.context.take());
        let context =
            SchoolContext::open(&self.path.to_string_lossy()).expect("reopen sqlite database");
        self.context = Some(context);
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        drop(self.context.take());
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Unique path in the system temp directory.
pub fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!(
        "school-{name}-{}-{nanos}-{suffix}.db",
        std::process::id()
    ));
    path
}
