use thiserror::Error;

/// Failure to interpret an untrusted role or permission tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("unknown role '{0}'")]
    UnknownRole(String),

    #[error("unknown permission '{0}'")]
    UnknownPermission(String),
}
