//! Fixture loading errors

use std::path::PathBuf;

use thiserror::Error;

use core_kernel::PortError;
use domain_claims::ClaimError;
use domain_policy::PolicyError;

/// Errors that can occur while loading a fixture document
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture file could not be read
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the record shapes
    #[error("Failed to parse fixture: {0}")]
    Parse(#[from] serde_json::Error),

    /// The records parsed but break an invariant
    #[error("Fixture integrity error: {0}")]
    Integrity(String),
}

impl FixtureError {
    pub fn integrity(message: impl Into<String>) -> Self {
        FixtureError::Integrity(message.into())
    }

    /// Checks if the error comes from the data rather than the file system
    pub fn is_data_error(&self) -> bool {
        matches!(self, FixtureError::Parse(_) | FixtureError::Integrity(_))
    }
}

impl From<PolicyError> for FixtureError {
    fn from(error: PolicyError) -> Self {
        FixtureError::Integrity(error.to_string())
    }
}

impl From<ClaimError> for FixtureError {
    fn from(error: ClaimError) -> Self {
        FixtureError::Integrity(error.to_string())
    }
}

impl From<FixtureError> for PortError {
    fn from(error: FixtureError) -> Self {
        match error {
            FixtureError::Integrity(message) => PortError::validation(message),
            other => PortError::Internal {
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }
}
