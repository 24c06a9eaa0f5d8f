pub mod bf_cache;

pub use bf_cache::BfCacheAudit;
