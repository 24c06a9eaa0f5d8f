use crate::config::Config;
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use pageaudit_engine::AuditRegistry;
use pageaudit_types::AuditMeta;
use serde::Serialize;

#[derive(Serialize)]
struct AuditEntry<'a> {
    #[serde(flatten)]
    meta: &'a AuditMeta,
    enabled: bool,
}

pub fn handle(config: &Config, format: OutputFormat) -> Result<()> {
    let registry = AuditRegistry::default();
    let entries: Vec<AuditEntry> = registry
        .audits()
        .map(|audit| AuditEntry {
            meta: audit.meta(),
            enabled: config.is_enabled(audit.meta().id),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            for entry in &entries {
                let id = if color {
                    entry.meta.id.bold().to_string()
                } else {
                    entry.meta.id.to_string()
                };
                let state = if entry.enabled { "" } else { " (disabled)" };
                println!("{}  {}{}", id, entry.meta.title, state);
            }
        }
    }

    Ok(())
}
