//! Claim status taxonomy
//!
//! The six statuses a claim can be observed in, the decision-level state
//! machine between them, and the list filters the portal offers.
//!
//! ```text
//! submitted ──> under_review ──> approved ──> paid
//!     │              ▲      └──> rejected
//!     └──> pending_documents
//! ```
//!
//! Transitions are executed by the upstream claims system. The model only
//! exposes the vocabulary so every consumer agrees on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use core_kernel::{StatusDisplay, StatusTone, UnknownStatusError};

use crate::claim::Claim;
use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Received, not yet picked up
    Submitted,
    /// Being assessed by the claims team
    UnderReview,
    /// Approved for payout
    Approved,
    /// Declined
    Rejected,
    /// Settled
    Paid,
    /// Waiting on the claimant for documents
    PendingDocuments,
}

impl ClaimStatus {
    /// Every status, in lifecycle order
    pub const ALL: [ClaimStatus; 6] = [
        ClaimStatus::Submitted,
        ClaimStatus::PendingDocuments,
        ClaimStatus::UnderReview,
        ClaimStatus::Approved,
        ClaimStatus::Rejected,
        ClaimStatus::Paid,
    ];

    /// Statuses the claims system may move this status to
    pub fn next_statuses(&self) -> &'static [ClaimStatus] {
        use ClaimStatus::*;
        match self {
            Submitted => &[UnderReview, PendingDocuments],
            PendingDocuments => &[UnderReview],
            UnderReview => &[Approved, Rejected],
            Approved => &[Paid],
            Rejected | Paid => &[],
        }
    }

    /// Checks if a transition is part of the lifecycle
    pub fn can_transition_to(&self, target: ClaimStatus) -> bool {
        self.next_statuses().contains(&target)
    }

    /// Fails with `InvalidStatusTransition` unless the transition is legal
    pub fn ensure_transition(&self, target: ClaimStatus) -> Result<(), ClaimError> {
        if !self.can_transition_to(target) {
            return Err(ClaimError::InvalidStatusTransition {
                from: *self,
                to: target,
            });
        }
        Ok(())
    }

    /// No further transitions
    pub fn is_terminal(&self) -> bool {
        self.next_statuses().is_empty()
    }

    /// Still moving through assessment (the portal's "Active" filter)
    pub fn is_active(&self) -> bool {
        matches!(self, ClaimStatus::Submitted | ClaimStatus::UnderReview)
    }

    /// A payout decision carries an approved amount
    pub fn requires_approved_amount(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Paid)
    }

    /// A payout decision has been made
    pub fn is_decided(&self) -> bool {
        matches!(
            self,
            ClaimStatus::Approved | ClaimStatus::Paid | ClaimStatus::Rejected
        )
    }
}

impl StatusDisplay for ClaimStatus {
    fn code(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "submitted",
            ClaimStatus::UnderReview => "under_review",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::Paid => "paid",
            ClaimStatus::PendingDocuments => "pending_documents",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "Submitted",
            ClaimStatus::UnderReview => "Under Review",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
            ClaimStatus::Paid => "Paid",
            ClaimStatus::PendingDocuments => "Pending Documents",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            ClaimStatus::Submitted => StatusTone::Info,
            ClaimStatus::UnderReview => StatusTone::Review,
            ClaimStatus::Approved | ClaimStatus::Paid => StatusTone::Success,
            ClaimStatus::Rejected => StatusTone::Error,
            ClaimStatus::PendingDocuments => StatusTone::Warning,
        }
    }
}

impl FromStr for ClaimStatus {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| UnknownStatusError::new("claim", s))
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Status filter offered on the claims list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatusFilter {
    #[default]
    All,
    /// Submitted or under review
    Active,
    Approved,
    Paid,
    Rejected,
}

impl ClaimStatusFilter {
    pub const ALL: [ClaimStatusFilter; 5] = [
        ClaimStatusFilter::All,
        ClaimStatusFilter::Active,
        ClaimStatusFilter::Approved,
        ClaimStatusFilter::Paid,
        ClaimStatusFilter::Rejected,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ClaimStatusFilter::All => "all",
            ClaimStatusFilter::Active => "active",
            ClaimStatusFilter::Approved => "approved",
            ClaimStatusFilter::Paid => "paid",
            ClaimStatusFilter::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClaimStatusFilter::All => "All Claims",
            ClaimStatusFilter::Active => "Active",
            ClaimStatusFilter::Approved => ClaimStatus::Approved.label(),
            ClaimStatusFilter::Paid => ClaimStatus::Paid.label(),
            ClaimStatusFilter::Rejected => ClaimStatus::Rejected.label(),
        }
    }

    /// Checks whether a claim status passes this filter
    pub fn matches(&self, status: ClaimStatus) -> bool {
        match self {
            ClaimStatusFilter::All => true,
            ClaimStatusFilter::Active => status.is_active(),
            ClaimStatusFilter::Approved => status == ClaimStatus::Approved,
            ClaimStatusFilter::Paid => status == ClaimStatus::Paid,
            ClaimStatusFilter::Rejected => status == ClaimStatus::Rejected,
        }
    }

    /// Applies the filter, keeping input order
    pub fn apply<'a>(&self, claims: &'a [Claim]) -> Vec<&'a Claim> {
        claims.iter().filter(|c| self.matches(c.status)).collect()
    }

    /// Number of claims passing the filter
    pub fn count(&self, claims: &[Claim]) -> usize {
        claims.iter().filter(|c| self.matches(c.status)).count()
    }
}

impl FromStr for ClaimStatusFilter {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimStatusFilter::ALL
            .into_iter()
            .find(|f| f.code() == s)
            .ok_or_else(|| UnknownStatusError::new("claim filter", s))
    }
}

impl fmt::Display for ClaimStatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
