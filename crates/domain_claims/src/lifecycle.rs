//! Lifecycle derivations
//!
//! Every value the portal renders about a claim's progress is computed here
//! and nowhere else: progress fractions, the highlighted step, the next step
//! waiting on someone, list ordering and filtering, and the integrity checks
//! that make those derivations safe to call.
//!
//! All functions are pure. They take borrowed records and return either plain
//! values or references into the input.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, warn};

use core_kernel::{PolicyId, StatusDisplay, UnknownStatusError};
use domain_policy::{Policy, PolicyStatus};

use crate::claim::Claim;
use crate::error::ClaimError;
use crate::status::{ClaimStatus, ClaimStatusFilter};
use crate::timeline::{ClaimTimelineEvent, TimelineStatus};

/// Completed steps over all steps, in `[0, 1]`
///
/// A `Timeline` is never empty, so the ratio is always defined.
pub fn progress_fraction(claim: &Claim) -> f64 {
    claim.timeline.completed_count() as f64 / claim.timeline.len() as f64
}

/// Step counts behind a progress bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimProgress {
    pub completed_steps: usize,
    pub total_steps: usize,
    pub fraction: f64,
}

impl ClaimProgress {
    /// Whole-number percentage for progress-bar widths
    pub fn percent(&self) -> u8 {
        (self.fraction * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

pub fn claim_progress(claim: &Claim) -> ClaimProgress {
    ClaimProgress {
        completed_steps: claim.timeline.completed_count(),
        total_steps: claim.timeline.len(),
        fraction: progress_fraction(claim),
    }
}

/// How a timeline step should render
pub fn timeline_event_visual_state(event: &ClaimTimelineEvent) -> TimelineStatus {
    event.status
}

/// The step currently in progress
///
/// A timeline with only completed and pending steps has nothing in progress
/// and yields `None`; the first pending step is not promoted.
pub fn next_actionable_event(claim: &Claim) -> Option<&ClaimTimelineEvent> {
    claim.timeline.current()
}

/// Most recently updated first, ties by claim number ascending
pub fn recency_order(a: &Claim, b: &Claim) -> Ordering {
    b.date_updated
        .cmp(&a.date_updated)
        .then_with(|| a.claim_number.cmp(&b.claim_number))
}

/// Sorts claims most recently updated first
///
/// The sort is stable and idempotent; the input is not reordered.
pub fn sort_claims_by_recency<'a, I>(claims: I) -> Vec<&'a Claim>
where
    I: IntoIterator<Item = &'a Claim>,
{
    let mut sorted: Vec<&Claim> = claims.into_iter().collect();
    sorted.sort_by(|a, b| recency_order(a, b));
    sorted
}

/// Claims against one policy, in input order
pub fn filter_claims_by_policy<'a>(claims: &'a [Claim], policy_id: &PolicyId) -> Vec<&'a Claim> {
    claims.iter().filter(|c| &c.policy_id == policy_id).collect()
}

/// Claims passing a list filter, in input order
pub fn filter_claims_by_status<'a>(
    claims: &'a [Claim],
    filter: ClaimStatusFilter,
) -> Vec<&'a Claim> {
    filter.apply(claims)
}

/// Checks a single claim's invariants
pub fn validate_claim(claim: &Claim) -> Result<(), ClaimError> {
    claim.validate()
}

/// Checks claims against the policies they reference
///
/// Fails on the first claim whose policy is missing, whose `policy_type`
/// disagrees with its policy, or whose claim number repeats an earlier one.
pub fn validate_references(policies: &[Policy], claims: &[Claim]) -> Result<(), ClaimError> {
    let by_id: HashMap<&PolicyId, &Policy> = policies.iter().map(|p| (&p.id, p)).collect();
    let mut numbers = HashSet::new();

    for claim in claims {
        let Some(policy) = by_id.get(&claim.policy_id) else {
            warn!(
                claim_number = %claim.claim_number,
                policy_id = %claim.policy_id,
                "Claim references unknown policy"
            );
            return Err(ClaimError::DanglingReference {
                claim_number: claim.claim_number.clone(),
                policy_id: claim.policy_id.clone(),
            });
        };

        if policy.policy_type != claim.policy_type {
            return Err(ClaimError::for_claim(
                &claim.claim_number,
                format!(
                    "policy type {} does not match policy {} ({})",
                    claim.policy_type.code(),
                    policy.id,
                    policy.policy_type.code()
                ),
            ));
        }

        if !numbers.insert(claim.claim_number.as_str()) {
            return Err(ClaimError::for_claim(
                &claim.claim_number,
                "claim number is not unique",
            ));
        }
    }

    debug!(
        policies = policies.len(),
        claims = claims.len(),
        "Claim references resolved"
    );
    Ok(())
}

/// Label for a raw claim status code
pub fn status_label_for_code(code: &str) -> Result<&'static str, UnknownStatusError> {
    code.parse::<ClaimStatus>().map(|status| status.label())
}

/// Colour classes for a raw claim or policy status code
pub fn status_colour_class_for_code(code: &str) -> Result<&'static str, UnknownStatusError> {
    if let Ok(status) = code.parse::<ClaimStatus>() {
        return Ok(core_kernel::status_colour_class(status));
    }
    code.parse::<PolicyStatus>()
        .map(core_kernel::status_colour_class)
        .map_err(|_| UnknownStatusError::new("claim or policy", code))
}
