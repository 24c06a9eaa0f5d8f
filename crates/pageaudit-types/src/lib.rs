pub mod artifact;
pub mod audit;
pub mod details;
pub mod error;
mod failure_type;

pub use artifact::*;
pub use audit::*;
pub use details::*;
pub use error::{Error, Result};
pub use failure_type::FailureType;
