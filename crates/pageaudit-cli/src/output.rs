//! Plain-text rendering of audit runs.

use owo_colors::OwoColorize;
use pageaudit_types::{AuditReport, Details, RunSummary, TableDetails, TableItem};

pub fn render_summary(summary: &RunSummary, color: bool) -> String {
    let mut out = String::new();
    if let Some(fetch_time) = summary.fetch_time {
        out.push_str(&format!("Fetched: {}\n\n", fetch_time.to_rfc3339()));
    }
    for report in &summary.audits {
        out.push_str(&render_report(report, color));
        out.push('\n');
    }
    out
}

pub fn render_report(report: &AuditReport, color: bool) -> String {
    let mut out = String::new();

    let title = if color {
        report.title.bold().to_string()
    } else {
        report.title.clone()
    };
    out.push_str(&format!("{} {} ({})", badge(report, color), title, report.id));
    if let Some(display_value) = &report.display_value {
        out.push_str(&format!(" - {}", display_value));
    }
    out.push('\n');

    if let Some(message) = &report.error_message {
        out.push_str(&format!("  {}\n", message));
    }

    if let Some(table) = report.details.as_ref().and_then(Details::as_table) {
        render_table(&mut out, table);
    }

    out
}

fn badge(report: &AuditReport, color: bool) -> String {
    let text = match report.score {
        None => "[ERROR]",
        Some(score) if score >= 1.0 => "[PASS]",
        Some(_) => "[FAIL]",
    };
    if !color {
        return text.to_string();
    }
    match report.score {
        None => text.magenta().to_string(),
        Some(score) if score >= 1.0 => text.green().to_string(),
        Some(_) => text.red().to_string(),
    }
}

fn render_table(out: &mut String, table: &TableDetails) {
    if table.items.is_empty() {
        return;
    }

    let labels: Vec<&str> = table
        .headings
        .iter()
        .map(|h| h.label.as_deref().unwrap_or(&h.key))
        .collect();
    out.push_str(&format!("  {}\n", labels.join(" | ")));

    for item in &table.items {
        let cells: Vec<&str> = table
            .headings
            .iter()
            .map(|h| cell_text(item, &h.key))
            .collect();
        out.push_str(&format!("  - {}\n", cells.join(" | ")));

        for heading in &table.headings {
            let Some(sub_heading) = &heading.sub_items_heading else {
                continue;
            };
            let sub_items = item
                .get("subItems")
                .and_then(|s| s.get("items"))
                .and_then(|items| items.as_array());
            for sub_item in sub_items.into_iter().flatten() {
                if let Some(sub_item) = sub_item.as_object() {
                    out.push_str(&format!("      {}\n", cell_text(sub_item, &sub_heading.key)));
                }
            }
        }
    }
}

fn cell_text<'a>(item: &'a TableItem, key: &str) -> &'a str {
    item.get(key).and_then(|v| v.as_str()).unwrap_or("")
}
