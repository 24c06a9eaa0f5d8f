// Engine module - Audit evaluation over collected page artifacts
// This layer sits between raw artifacts (types) and CLI presentation

mod audit;
pub mod audits;
mod error;
pub mod i18n;
pub mod reasons;
pub mod runner;

pub use audit::Audit;
pub use audits::BfCacheAudit;
pub use error::{AuditError, Result};
pub use runner::{AuditRegistry, run_audit};

use pageaudit_types::{Artifacts, AuditProduct, BfCacheFailure, RunSummary};

// Façade API - Stable public interface for CLI layer

/// Evaluate the back/forward cache audit directly from failure records
pub fn audit_bf_cache(failures: &[BfCacheFailure]) -> Result<AuditProduct> {
    audits::bf_cache::evaluate(failures)
}

/// Run every built-in audit over the artifacts
pub fn run_default_audits(artifacts: &Artifacts) -> RunSummary {
    AuditRegistry::default().run(artifacts)
}
