use crate::{Error, FailureType, Result};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Reason code → frame URLs where that reason applied.
///
/// Keeps the order in which reasons appear in the collected artifact.
pub type ReasonMap = IndexMap<String, Vec<String>>;

/// Per-category breakdown of why a navigation was not restored from the
/// back/forward cache.
///
/// A category absent from the collected data, or a reason whose frame list
/// is `null`, reads back as empty rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotRestoredReasonsTree {
    #[serde(
        rename = "PageSupportNeeded",
        default,
        deserialize_with = "nullable_reason_map"
    )]
    pub page_support_needed: ReasonMap,
    #[serde(
        rename = "Circumstantial",
        default,
        deserialize_with = "nullable_reason_map"
    )]
    pub circumstantial: ReasonMap,
    #[serde(
        rename = "SupportPending",
        default,
        deserialize_with = "nullable_reason_map"
    )]
    pub support_pending: ReasonMap,
}

impl NotRestoredReasonsTree {
    pub fn reasons(&self, failure_type: FailureType) -> &ReasonMap {
        match failure_type {
            FailureType::PageSupportNeeded => &self.page_support_needed,
            FailureType::Circumstantial => &self.circumstantial,
            FailureType::SupportPending => &self.support_pending,
        }
    }

    pub fn reasons_mut(&mut self, failure_type: FailureType) -> &mut ReasonMap {
        match failure_type {
            FailureType::PageSupportNeeded => &mut self.page_support_needed,
            FailureType::Circumstantial => &mut self.circumstantial,
            FailureType::SupportPending => &mut self.support_pending,
        }
    }

    /// Total number of distinct reasons across all categories.
    pub fn reason_count(&self) -> usize {
        FailureType::ORDERED
            .iter()
            .map(|ft| self.reasons(*ft).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.reason_count() == 0
    }
}

fn nullable_reason_map<'de, D>(deserializer: D) -> std::result::Result<ReasonMap, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<IndexMap<String, Option<Vec<String>>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(reason, urls)| (reason, urls.unwrap_or_default()))
        .collect())
}

/// One navigation that could not be served from the back/forward cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BfCacheFailure {
    pub not_restored_reasons_tree: NotRestoredReasonsTree,
}

/// Bag of artifacts gathered for a page before auditing.
///
/// Only the artifacts audits in this workspace read are typed; everything
/// else is kept as raw JSON so presence checks still work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artifacts {
    #[serde(
        rename = "BFCacheFailures",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bf_cache_failures: Option<Vec<BfCacheFailure>>,

    #[serde(rename = "fetchTime", default, skip_serializing_if = "Option::is_none")]
    pub fetch_time: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Artifacts {
    pub const BF_CACHE_FAILURES: &'static str = "BFCacheFailures";

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load artifacts from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ArtifactsNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Whether an artifact with the given name was collected (and is not null).
    pub fn has(&self, name: &str) -> bool {
        match name {
            Self::BF_CACHE_FAILURES => self.bf_cache_failures.is_some(),
            other => self.other.get(other).is_some_and(|v| !v.is_null()),
        }
    }

    /// Names of the given artifacts that are not present.
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| !self.has(name))
            .collect()
    }
}
