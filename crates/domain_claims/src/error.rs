//! Claims domain errors

use thiserror::Error;

use core_kernel::{PolicyId, UnknownStatusError};
use domain_policy::PolicyError;

use crate::status::ClaimStatus;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    /// A claim or its timeline breaks an invariant
    #[error("Invalid claim: {0}")]
    InvalidClaim(String),

    /// A raw status string is outside its enum
    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatusError),

    /// A claim points at a policy that does not exist
    #[error("Claim {claim_number} references unknown policy {policy_id}")]
    DanglingReference {
        claim_number: String,
        policy_id: PolicyId,
    },

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: ClaimStatus, to: ClaimStatus },

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

impl ClaimError {
    /// InvalidClaim error prefixed with the claim number
    pub fn for_claim(claim_number: &str, reason: impl std::fmt::Display) -> Self {
        ClaimError::InvalidClaim(format!("{claim_number}: {reason}"))
    }

    pub fn is_invalid_claim(&self) -> bool {
        matches!(self, ClaimError::InvalidClaim(_))
    }
}
