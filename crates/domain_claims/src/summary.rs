//! Claim list aggregates for the dashboard and the claims page

use serde::Serialize;
use tracing::debug;

use core_kernel::{Rand, StatusDisplay};

use crate::claim::Claim;
use crate::status::{ClaimStatus, ClaimStatusFilter};

/// Claims in one status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub status: ClaimStatus,
    pub label: &'static str,
    pub count: usize,
    /// Approved amounts where decided, claimed amounts otherwise
    pub amount: Rand,
}

/// Headline numbers over a list of claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimsSummary {
    pub total_claims: usize,
    /// Submitted or under review
    pub active_claims: usize,
    /// Approved or already paid
    pub approved_claims: usize,
    pub total_claimed: Rand,
    /// Approved amounts of paid claims
    pub total_paid: Rand,
    /// Per-status split, in first-seen order
    pub breakdown: Vec<StatusBreakdown>,
}

/// Count for one tab of the claims list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCount {
    pub filter: ClaimStatusFilter,
    pub label: &'static str,
    pub count: usize,
}

pub fn summarize_claims(claims: &[Claim]) -> ClaimsSummary {
    let mut breakdown: Vec<StatusBreakdown> = Vec::new();
    for claim in claims {
        let amount = claim.display_amount();
        match breakdown.iter_mut().find(|b| b.status == claim.status) {
            Some(entry) => {
                entry.count += 1;
                entry.amount = entry.amount + amount;
            }
            None => breakdown.push(StatusBreakdown {
                status: claim.status,
                label: claim.status.label(),
                count: 1,
                amount,
            }),
        }
    }

    let summary = ClaimsSummary {
        total_claims: claims.len(),
        active_claims: claims.iter().filter(|c| c.status.is_active()).count(),
        approved_claims: claims
            .iter()
            .filter(|c| c.status.requires_approved_amount())
            .count(),
        total_claimed: claims.iter().map(|c| c.amount).sum(),
        total_paid: claims
            .iter()
            .filter(|c| c.status == ClaimStatus::Paid)
            .filter_map(|c| c.approved_amount)
            .sum(),
        breakdown,
    };

    debug!(
        total = summary.total_claims,
        active = summary.active_claims,
        "Summarised claims"
    );

    summary
}

/// Counts for every claims-list tab, in tab order
pub fn filter_counts(claims: &[Claim]) -> Vec<FilterCount> {
    ClaimStatusFilter::ALL
        .into_iter()
        .map(|filter| FilterCount {
            filter,
            label: filter.label(),
            count: filter.count(claims),
        })
        .collect()
}
