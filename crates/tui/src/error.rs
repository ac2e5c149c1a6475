//! Error types for the guide.

use thiserror::Error;

/// Errors raised while handling guide requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GuideError {
    /// The requested section does not exist. State is left unchanged.
    #[error("Unknown section '{0}'")]
    InvalidSectionId(String),
}
