//! Handler for the default run.

use std::io;

use tracing::info;

use crate::adapter::inbound::cli::command::Cli;
use crate::adapter::outbound::sqlite::SchoolRepository;
use crate::application::demo;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Build the effective configuration: file (if given), then CLI overrides.
///
/// # Errors
/// Returns an error if the config file is unreadable or the result is invalid.
pub fn resolve_config(args: &Cli) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(database) = &args.database {
        config.database.path = database.to_string_lossy().to_string();
    }
    if args.no_reset {
        config.database.reset_on_start = false;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".into();
    }

    config.validate()?;
    Ok(config)
}

/// Open the database, run the sample scenario and print the report to stdout.
///
/// # Errors
/// Returns an error if any storage operation or write fails.
pub fn execute(config: &Config) -> Result<()> {
    let context = bootstrap::open_database(&config.database)?;
    let repo = SchoolRepository::new(&context);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&repo, &mut out)?;

    info!(database = %context.database_url(), "Run complete");
    Ok(())
}
