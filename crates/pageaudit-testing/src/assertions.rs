//! Custom assertions for pageaudit JSON output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Find an audit report by id in `pageaudit --format json run` output.
pub fn find_audit<'a>(json: &'a Value, id: &str) -> Result<&'a Value> {
    json["audits"]
        .as_array()
        .context("Expected 'audits' array in JSON")?
        .iter()
        .find(|a| a["id"] == id)
        .with_context(|| format!("No audit with id {}", id))
}

/// Assert the score of an audit.
pub fn assert_audit_score(json: &Value, id: &str, expected: f64) -> Result<()> {
    let audit = find_audit(json, id)?;
    let score = audit["score"]
        .as_f64()
        .with_context(|| format!("Audit {} has no numeric score", id))?;

    if score != expected {
        anyhow::bail!("Expected score {} for {}, got {}", expected, id, score);
    }

    Ok(())
}

/// Assert the number of table rows in an audit's details.
pub fn assert_row_count(json: &Value, id: &str, expected: usize) -> Result<()> {
    let audit = find_audit(json, id)?;
    let items = audit["details"]["items"]
        .as_array()
        .with_context(|| format!("Audit {} has no table items", id))?;

    if items.len() != expected {
        anyhow::bail!("Expected {} rows for {}, got {}", expected, id, items.len());
    }

    Ok(())
}
