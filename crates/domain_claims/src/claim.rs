//! Claim entity
//!
//! A `Claim` is a request for payout against a policy. It is issued and moved
//! through its statuses by the claims system upstream; here it is read-only.
//!
//! # Invariants
//!
//! - the timeline is non-empty and well-ordered (enforced by [`Timeline`])
//! - `approved_amount` is present and `<= amount` for approved and paid claims
//! - `approved_amount` is absent for every other status
//! - `date_updated` is not before `date_submitted`
//! - document ids are unique within the claim
//!
//! Deserialisation only enforces the timeline. Call [`Claim::validate`] (or
//! build through [`ClaimBuilder`]) for the rest.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::temporal::ensure_not_before;
use core_kernel::{ClaimId, PolicyId, Rand};
use domain_policy::PolicyType;

use crate::document::ClaimDocument;
use crate::error::ClaimError;
use crate::status::ClaimStatus;
use crate::timeline::{ClaimTimelineEvent, Timeline};

/// A request for payout against a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: ClaimId,
    /// Policy claimed against
    pub policy_id: PolicyId,
    /// Copy of the parent policy's product line
    pub policy_type: PolicyType,
    /// Human-readable claim number (`CLM-2025-08847`)
    pub claim_number: String,
    /// Free-text kind of loss ("Accident Damage")
    #[serde(rename = "type")]
    pub claim_type: String,
    pub status: ClaimStatus,
    /// Amount claimed
    pub amount: Rand,
    /// Amount approved for payout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_amount: Option<Rand>,
    pub date_submitted: NaiveDate,
    /// Last status change
    pub date_updated: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub timeline: Timeline,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<ClaimDocument>>,
}

impl Claim {
    /// Starts a strict builder
    pub fn builder(
        id: impl Into<ClaimId>,
        policy_id: impl Into<PolicyId>,
        policy_type: PolicyType,
        claim_number: impl Into<String>,
    ) -> ClaimBuilder {
        ClaimBuilder::new(id, policy_id, policy_type, claim_number)
    }

    /// Checks every invariant, returning the first violation
    pub fn validate(&self) -> Result<(), ClaimError> {
        let number = self.claim_number.as_str();

        if number.trim().is_empty() {
            return Err(ClaimError::InvalidClaim(format!(
                "claim {} has no claim number",
                self.id
            )));
        }

        match (self.status.requires_approved_amount(), self.approved_amount) {
            (true, None) => {
                return Err(ClaimError::for_claim(
                    number,
                    format!("{} claim has no approved amount", self.status),
                ));
            }
            (true, Some(approved)) if approved > self.amount => {
                return Err(ClaimError::for_claim(
                    number,
                    format!(
                        "approved amount {} exceeds claimed amount {}",
                        approved, self.amount
                    ),
                ));
            }
            (false, Some(_)) => {
                return Err(ClaimError::for_claim(
                    number,
                    format!("{} claim must not carry an approved amount", self.status),
                ));
            }
            _ => {}
        }

        ensure_not_before(self.date_submitted, self.date_updated)
            .map_err(|e| ClaimError::for_claim(number, e))?;

        if let Some(documents) = &self.documents {
            let mut seen = HashSet::new();
            for doc in documents {
                if !seen.insert(&doc.id) {
                    return Err(ClaimError::for_claim(
                        number,
                        format!("duplicate document id {}", doc.id),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Approved amount once decided, otherwise the claimed amount
    ///
    /// A zero approved amount also falls back to the claimed amount.
    pub fn display_amount(&self) -> Rand {
        self.approved_amount
            .filter(|approved| !approved.is_zero())
            .unwrap_or(self.amount)
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn document_count(&self) -> usize {
        self.documents.as_ref().map_or(0, Vec::len)
    }
}

/// Strict claim construction: `build` runs [`Claim::validate`]
#[derive(Debug, Clone)]
pub struct ClaimBuilder {
    id: ClaimId,
    policy_id: PolicyId,
    policy_type: PolicyType,
    claim_number: String,
    claim_type: String,
    status: ClaimStatus,
    amount: Rand,
    approved_amount: Option<Rand>,
    date_submitted: Option<NaiveDate>,
    date_updated: Option<NaiveDate>,
    description: String,
    events: Vec<ClaimTimelineEvent>,
    documents: Option<Vec<ClaimDocument>>,
}

impl ClaimBuilder {
    pub fn new(
        id: impl Into<ClaimId>,
        policy_id: impl Into<PolicyId>,
        policy_type: PolicyType,
        claim_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            policy_id: policy_id.into(),
            policy_type,
            claim_number: claim_number.into(),
            claim_type: String::new(),
            status: ClaimStatus::Submitted,
            amount: Rand::zero(),
            approved_amount: None,
            date_submitted: None,
            date_updated: None,
            description: String::new(),
            events: Vec::new(),
            documents: None,
        }
    }

    pub fn claim_type(mut self, claim_type: impl Into<String>) -> Self {
        self.claim_type = claim_type.into();
        self
    }

    pub fn status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn amount(mut self, amount: Rand) -> Self {
        self.amount = amount;
        self
    }

    pub fn approved_amount(mut self, amount: Rand) -> Self {
        self.approved_amount = Some(amount);
        self
    }

    pub fn submitted_on(mut self, date: NaiveDate) -> Self {
        self.date_submitted = Some(date);
        self
    }

    /// Defaults to the submission date
    pub fn updated_on(mut self, date: NaiveDate) -> Self {
        self.date_updated = Some(date);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn event(mut self, event: ClaimTimelineEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn events(mut self, events: impl IntoIterator<Item = ClaimTimelineEvent>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn document(mut self, document: ClaimDocument) -> Self {
        self.documents.get_or_insert_with(Vec::new).push(document);
        self
    }

    pub fn build(self) -> Result<Claim, ClaimError> {
        let date_submitted = self.date_submitted.ok_or_else(|| {
            ClaimError::for_claim(&self.claim_number, "submission date is required")
        })?;
        let timeline = Timeline::new(self.events)?;

        let claim = Claim {
            id: self.id,
            policy_id: self.policy_id,
            policy_type: self.policy_type,
            claim_number: self.claim_number,
            claim_type: self.claim_type,
            status: self.status,
            amount: self.amount,
            approved_amount: self.approved_amount,
            date_submitted,
            date_updated: self.date_updated.unwrap_or(date_submitted),
            description: self.description,
            timeline,
            documents: self.documents,
        };

        claim.validate()?;
        Ok(claim)
    }
}
