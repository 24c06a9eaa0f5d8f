use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pageaudit")]
#[command(about = "Audit collected page artifacts for back/forward cache problems", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: ~/.pageaudit/config.toml)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Output format (default: from config, else plain)")]
    pub format: Option<OutputFormat>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run audits over an artifacts JSON file
    Run {
        #[arg(long, help = "Artifacts JSON file, or '-' to read stdin")]
        artifacts: String,

        #[arg(long, value_delimiter = ',', help = "Only run these audit ids")]
        only: Vec<String>,

        #[arg(long, value_delimiter = ',', help = "Skip these audit ids")]
        skip: Vec<String>,
    },

    /// List available audits
    List,

    /// Show back/forward cache not-restored reason descriptions
    Reasons {
        #[arg(long, help = "Show a single reason code")]
        code: Option<String>,

        #[arg(long, help = "Filter codes and descriptions by regex")]
        grep: Option<String>,
    },
}
