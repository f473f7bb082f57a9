//! `tourmarket-core` — shared identifiers and the domain error model.
//!
//! Nothing here performs IO; the hosted data store stays outside this workspace.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::UserId;
