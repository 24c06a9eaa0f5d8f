use crate::config::Config;
use crate::output;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use pageaudit_engine::AuditRegistry;
use pageaudit_types::Artifacts;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

pub fn handle(
    config: &Config,
    artifacts_path: &str,
    only: Vec<String>,
    skip: Vec<String>,
    format: OutputFormat,
) -> Result<()> {
    let artifacts = load_artifacts(artifacts_path)?;

    // Flags replace the configured `only` list and add to the configured skips
    let only = if only.is_empty() {
        config.only_audits.clone()
    } else {
        only
    };
    let skip: Vec<String> = config.skip_audits.iter().cloned().chain(skip).collect();

    let registry = AuditRegistry::default();
    for id in only.iter().chain(skip.iter()) {
        if registry.get(id).is_none() {
            warn!(audit = %id, "unknown audit id");
        }
    }

    let registry = registry.select(&only, &skip);
    if registry.is_empty() {
        anyhow::bail!("No audits selected");
    }

    info!(audits = registry.len(), "running audits");
    let summary = registry.run(&artifacts);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            print!("{}", output::render_summary(&summary, color));
        }
    }

    Ok(())
}

fn load_artifacts(path: &str) -> Result<Artifacts> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read artifacts from stdin")?;
        return Artifacts::from_json_str(&content).context("Failed to parse artifacts from stdin");
    }

    Artifacts::load(Path::new(path))
        .with_context(|| format!("Failed to load artifacts from {}", path))
}
