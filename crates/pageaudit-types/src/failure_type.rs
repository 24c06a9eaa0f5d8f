use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a page could not be restored, grouped by who can act on it.
///
/// Serialized with the protocol's PascalCase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureType {
    /// The page author can fix it by changing page behavior.
    PageSupportNeeded,
    /// Caused by the environment the page was loaded in.
    Circumstantial,
    /// The browser does not support caching this page yet.
    SupportPending,
}

impl FailureType {
    /// Display order: actionable first, then not actionable, then pending.
    pub const ORDERED: [FailureType; 3] = [
        FailureType::PageSupportNeeded,
        FailureType::Circumstantial,
        FailureType::SupportPending,
    ];

    /// Human-readable label shown in the failure type column.
    pub fn label(self) -> &'static str {
        match self {
            FailureType::PageSupportNeeded => "Actionable",
            FailureType::Circumstantial => "Not actionable",
            FailureType::SupportPending => "Pending browser support",
        }
    }

    pub fn is_actionable(self) -> bool {
        self == FailureType::PageSupportNeeded
    }
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::PageSupportNeeded => write!(f, "PageSupportNeeded"),
            FailureType::Circumstantial => write!(f, "Circumstantial"),
            FailureType::SupportPending => write!(f, "SupportPending"),
        }
    }
}
