//! Fixture document shape and load-time checks

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use domain_claims::{validate_references, Claim};
use domain_policy::Policy;

use crate::error::FixtureError;

/// `{ "policies": [...], "claims": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalFixture {
    #[serde(default)]
    pub policies: Vec<Policy>,
    #[serde(default)]
    pub claims: Vec<Claim>,
}

impl PortalFixture {
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks every record and the references between them
    ///
    /// Timelines are already checked by deserialisation; this covers the
    /// remaining policy and claim invariants, id uniqueness and references.
    pub fn validate(&self) -> Result<(), FixtureError> {
        let mut policy_ids = HashSet::new();
        for policy in &self.policies {
            if !policy_ids.insert(&policy.id) {
                return Err(FixtureError::integrity(format!(
                    "duplicate policy id {}",
                    policy.id
                )));
            }
            policy.validate().inspect_err(|e| {
                warn!(policy_id = %policy.id, error = %e, "Rejected fixture policy");
            })?;
        }

        let mut claim_ids = HashSet::new();
        for claim in &self.claims {
            if !claim_ids.insert(&claim.id) {
                return Err(FixtureError::integrity(format!(
                    "duplicate claim id {}",
                    claim.id
                )));
            }
            claim.validate().inspect_err(|e| {
                warn!(claim_number = %claim.claim_number, error = %e, "Rejected fixture claim");
            })?;
        }

        validate_references(&self.policies, &self.claims)?;
        Ok(())
    }
}
