//! Back/forward cache: reports why the page could not be restored from the
//! bfcache, grouped by whether the page author can act on it.

use crate::audit::Audit;
use crate::i18n::{actionable_display_value, ui_strings};
use crate::reasons;
use crate::Result;
use pageaudit_types::{
    Artifacts, AuditMeta, AuditMode, AuditProduct, BfCacheFailure, Details, Error, FailureType,
    ScoreDisplayMode, SubItems, TableDetails, TableHeading, ValueType,
};
use serde::Serialize;
use tracing::debug;

const FRAME_URL_KEY: &str = "frameUrl";

static META: AuditMeta = AuditMeta {
    id: "bf-cache",
    title: ui_strings::BF_CACHE_TITLE,
    failure_title: ui_strings::BF_CACHE_FAILURE_TITLE,
    description: ui_strings::BF_CACHE_DESCRIPTION,
    supported_modes: &[AuditMode::Navigation, AuditMode::Timespan],
    score_display_mode: ScoreDisplayMode::Binary,
    guidance_level: 2,
    required_artifacts: &[Artifacts::BF_CACHE_FAILURES],
};

pub struct BfCacheAudit;

impl Audit for BfCacheAudit {
    fn meta(&self) -> &'static AuditMeta {
        &META
    }

    fn audit(&self, artifacts: &Artifacts) -> Result<AuditProduct> {
        let failures = artifacts
            .bf_cache_failures
            .as_deref()
            .ok_or_else(|| Error::MissingArtifact(Artifacts::BF_CACHE_FAILURES.to_string()))?;
        evaluate(failures)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FailureReasonRow<'a> {
    reason: &'a str,
    failure_type: &'static str,
    sub_items: SubItems,
    protocol_reason: &'a str,
}

fn headings() -> Vec<TableHeading> {
    vec![
        TableHeading::new("reason", ValueType::Text, ui_strings::FAILURE_REASON_COLUMN)
            .with_sub_items(FRAME_URL_KEY, ValueType::Url),
        TableHeading::new(
            "failureType",
            ValueType::Text,
            ui_strings::FAILURE_TYPE_COLUMN,
        ),
    ]
}

/// Score and tabulate the not-restored reasons of a navigation.
///
/// Only the first failure is analyzed; later entries are ignored. Rows are
/// ordered actionable, not actionable, pending support, and within each
/// category in the order the reasons were collected. The score is 0 when any
/// actionable reason exists, otherwise 1. Once a failure exists the display
/// value always reports the actionable count, including zero.
pub fn evaluate(failures: &[BfCacheFailure]) -> Result<AuditProduct> {
    let Some(first) = failures.first() else {
        return Ok(AuditProduct::pass());
    };
    if failures.len() > 1 {
        debug!(
            ignored = failures.len() - 1,
            "analyzing first bfcache failure only"
        );
    }

    let tree = &first.not_restored_reasons_tree;
    let mut actionable = 0usize;
    let mut rows = Vec::with_capacity(tree.reason_count());

    for failure_type in FailureType::ORDERED {
        for (code, frame_urls) in tree.reasons(failure_type) {
            if failure_type.is_actionable() {
                actionable += 1;
            }
            rows.push(FailureReasonRow {
                reason: reasons::describe_or_code(code),
                failure_type: failure_type.label(),
                sub_items: SubItems::from_values(FRAME_URL_KEY, frame_urls.iter().cloned()),
                protocol_reason: code,
            });
        }
    }

    debug!(reasons = rows.len(), actionable, "evaluated bfcache failure");

    let details = TableDetails::from_rows(headings(), &rows)?;

    Ok(AuditProduct {
        score: if actionable > 0 { 0.0 } else { 1.0 },
        display_value: Some(actionable_display_value(actionable)),
        details: Some(Details::Table(details)),
    })
}
