use crate::types::OutputFormat;
use anyhow::{Context, Result};
use pageaudit_engine::reasons::NOT_RESTORED_REASONS;
use regex::RegexBuilder;
use serde::Serialize;

#[derive(Serialize)]
struct ReasonEntry {
    code: &'static str,
    description: &'static str,
}

pub fn handle(code: Option<String>, grep: Option<String>, format: OutputFormat) -> Result<()> {
    let entries: Vec<ReasonEntry> = match (code, grep) {
        (Some(code), _) => {
            let &(code, description) = NOT_RESTORED_REASONS
                .iter()
                .find(|(known, _)| *known == code)
                .with_context(|| format!("Unknown reason code: {}", code))?;
            vec![ReasonEntry { code, description }]
        }
        (None, Some(pattern)) => {
            let re = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("Invalid pattern: {}", pattern))?;
            NOT_RESTORED_REASONS
                .iter()
                .filter(|(code, description)| re.is_match(code) || re.is_match(description))
                .map(|&(code, description)| ReasonEntry { code, description })
                .collect()
        }
        (None, None) => NOT_RESTORED_REASONS
            .iter()
            .map(|&(code, description)| ReasonEntry { code, description })
            .collect(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Plain => {
            for entry in &entries {
                println!("{}: {}", entry.code, entry.description);
            }
        }
    }

    Ok(())
}
