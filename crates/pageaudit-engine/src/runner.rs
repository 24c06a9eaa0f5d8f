use crate::audit::Audit;
use crate::audits::BfCacheAudit;
use pageaudit_types::{Artifacts, AuditReport, RunSummary};
use tracing::{debug, warn};

/// Ordered set of audits to run over an artifact bag.
pub struct AuditRegistry {
    audits: Vec<Box<dyn Audit>>,
}

impl AuditRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self { audits: Vec::new() }
    }

    /// Register an audit. A later registration with the same id replaces the earlier one.
    pub fn register(&mut self, audit: Box<dyn Audit>) {
        let id = audit.meta().id;
        self.audits.retain(|a| a.meta().id != id);
        self.audits.push(audit);
    }

    pub fn get(&self, id: &str) -> Option<&dyn Audit> {
        self.audits
            .iter()
            .find(|a| a.meta().id == id)
            .map(|a| a.as_ref())
    }

    pub fn audits(&self) -> impl Iterator<Item = &dyn Audit> {
        self.audits.iter().map(|a| a.as_ref())
    }

    pub fn len(&self) -> usize {
        self.audits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audits.is_empty()
    }

    /// Keep only `only` (when non-empty), then drop everything in `skip`.
    pub fn select(mut self, only: &[String], skip: &[String]) -> Self {
        if !only.is_empty() {
            self.audits.retain(|a| only.iter().any(|id| id == a.meta().id));
        }
        self.audits.retain(|a| !skip.iter().any(|id| id == a.meta().id));
        self
    }

    /// Run every registered audit in registration order.
    pub fn run(&self, artifacts: &Artifacts) -> RunSummary {
        let audits = self
            .audits
            .iter()
            .map(|audit| run_audit(audit.as_ref(), artifacts))
            .collect();

        RunSummary {
            fetch_time: artifacts.fetch_time,
            audits,
        }
    }
}

impl Default for AuditRegistry {
    /// Registry with every built-in audit.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(BfCacheAudit));
        registry
    }
}

/// Run one audit, turning missing artifacts and audit errors into an errored report.
pub fn run_audit(audit: &dyn Audit, artifacts: &Artifacts) -> AuditReport {
    let meta = audit.meta();

    let missing = artifacts.missing(meta.required_artifacts);
    if !missing.is_empty() {
        warn!(audit = meta.id, missing = ?missing, "required artifacts missing");
        return AuditReport::errored(
            meta,
            format!("Required {} gatherer did not run.", missing.join(", ")),
        );
    }

    match audit.audit(artifacts) {
        Ok(product) => {
            debug!(audit = meta.id, score = product.score, "audit complete");
            AuditReport::from_product(meta, product)
        }
        Err(e) => {
            warn!(audit = meta.id, error = %e, "audit failed");
            AuditReport::errored(meta, format!("Audit error: {}", e))
        }
    }
}
