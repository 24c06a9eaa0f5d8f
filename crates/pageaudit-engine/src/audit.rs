use crate::Result;
use pageaudit_types::{AuditMeta, AuditProduct, Artifacts};

/// A single check over collected page artifacts.
///
/// Implementations are stateless; the runner may share them across threads.
pub trait Audit: Send + Sync {
    fn meta(&self) -> &'static AuditMeta;

    /// Evaluate the audit. Required artifacts listed in `meta()` may be
    /// assumed present when called through the runner.
    fn audit(&self, artifacts: &Artifacts) -> Result<AuditProduct>;
}
