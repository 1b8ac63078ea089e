use clap::Parser;
use school::adapter::inbound::cli::command::Cli;
use school::adapter::inbound::cli::run;
use tracing::{error, info};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = match run::resolve_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!(database = %config.database.path, "school starting");

    if let Err(e) = run::execute(&config) {
        error!(error = %e, "Fatal error");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
