//! Policy domain errors

use thiserror::Error;

use core_kernel::{PolicyId, TemporalError, UnknownStatusError};

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// A policy record breaks one of its invariants
    #[error("Invalid policy {policy_id}: {reason}")]
    InvalidPolicy {
        policy_id: PolicyId,
        reason: String,
    },

    /// The cover period is malformed
    #[error("Invalid term on policy {policy_id}: {source}")]
    Temporal {
        policy_id: PolicyId,
        #[source]
        source: TemporalError,
    },

    /// A raw status or type string is outside its enum
    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatusError),
}

impl PolicyError {
    pub fn invalid(policy_id: &PolicyId, reason: impl Into<String>) -> Self {
        PolicyError::InvalidPolicy {
            policy_id: policy_id.clone(),
            reason: reason.into(),
        }
    }
}
