use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::logging;
use crate::types::OutputFormat;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    logging::init_logging(cli.log_level);

    let config = match &cli.config {
        Some(path) => Config::load_from(&expand_tilde(path))?,
        None => Config::load()?,
    };
    let format = cli.format.or(config.format).unwrap_or(OutputFormat::Plain);

    match cli.command {
        Commands::Run {
            artifacts,
            only,
            skip,
        } => handlers::run::handle(&config, &artifacts, only, skip, format),
        Commands::List => handlers::list::handle(&config, format),
        Commands::Reasons { code, grep } => handlers::reasons::handle(code, grep, format),
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
