//! Testing infrastructure for pageaudit integration tests.
//!
//! - `builders`: Fluent construction of artifacts and not-restored reason trees
//! - `assertions`: Checks over JSON run output
//! - `TestWorld`: Isolated directory with artifacts/config files for CLI runs

pub mod assertions;
pub mod builders;
pub mod world;

pub use builders::{ArtifactsBuilder, TreeBuilder};
pub use world::TestWorld;
