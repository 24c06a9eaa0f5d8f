//! Builders for artifacts used across test suites.

use pageaudit_types::{Artifacts, BfCacheFailure, FailureType, NotRestoredReasonsTree};

/// Builds a `NotRestoredReasonsTree`, preserving insertion order.
///
/// # Example
/// ```
/// use pageaudit_testing::TreeBuilder;
///
/// let tree = TreeBuilder::new()
///     .actionable("WebSocket", &["https://example.com/"])
///     .pending("BroadcastChannel", &[])
///     .build();
/// assert_eq!(tree.reason_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: NotRestoredReasonsTree,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reason(mut self, failure_type: FailureType, code: &str, frame_urls: &[&str]) -> Self {
        self.tree.reasons_mut(failure_type).insert(
            code.to_string(),
            frame_urls.iter().map(|u| u.to_string()).collect(),
        );
        self
    }

    pub fn actionable(self, code: &str, frame_urls: &[&str]) -> Self {
        self.reason(FailureType::PageSupportNeeded, code, frame_urls)
    }

    pub fn circumstantial(self, code: &str, frame_urls: &[&str]) -> Self {
        self.reason(FailureType::Circumstantial, code, frame_urls)
    }

    pub fn pending(self, code: &str, frame_urls: &[&str]) -> Self {
        self.reason(FailureType::SupportPending, code, frame_urls)
    }

    pub fn build(self) -> NotRestoredReasonsTree {
        self.tree
    }

    pub fn into_failure(self) -> BfCacheFailure {
        BfCacheFailure {
            not_restored_reasons_tree: self.tree,
        }
    }
}

/// Builds an `Artifacts` bag.
#[derive(Debug, Default)]
pub struct ArtifactsBuilder {
    artifacts: Artifacts,
}

impl ArtifactsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the bfcache artifact as collected with no failures.
    pub fn no_failures(mut self) -> Self {
        self.artifacts.bf_cache_failures = Some(Vec::new());
        self
    }

    pub fn failure(mut self, tree: TreeBuilder) -> Self {
        self.artifacts
            .bf_cache_failures
            .get_or_insert_with(Vec::new)
            .push(tree.into_failure());
        self
    }

    pub fn other(mut self, name: &str, value: serde_json::Value) -> Self {
        self.artifacts.other.insert(name.to_string(), value);
        self
    }

    pub fn build(self) -> Artifacts {
        self.artifacts
    }

    /// Serialize to the JSON shape the CLI reads.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.artifacts).expect("artifacts serialize")
    }
}
