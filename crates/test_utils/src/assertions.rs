//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Rand;
use domain_claims::{progress_fraction, recency_order, Claim, ClaimError, TimelineStatus};

/// Asserts that a claim's progress fraction equals `expected` within 1e-9
pub fn assert_progress_eq(claim: &Claim, expected: f64) {
    let actual = progress_fraction(claim);
    assert!(
        (actual - expected).abs() < 1e-9,
        "Progress mismatch for {}: actual={}, expected={}",
        claim.claim_number,
        actual,
        expected
    );
}

/// Asserts the `completed* current? pending*` shape of a claim's timeline
pub fn assert_timeline_well_formed(claim: &Claim) {
    let statuses: Vec<TimelineStatus> = claim.timeline.iter().map(|e| e.status).collect();
    assert!(!statuses.is_empty(), "Empty timeline on {}", claim.claim_number);
    assert!(
        statuses.windows(2).all(|w| w[0] <= w[1]),
        "Timeline out of order on {}: {:?}",
        claim.claim_number,
        statuses
    );
    assert!(
        statuses.iter().filter(|s| **s == TimelineStatus::Current).count() <= 1,
        "More than one current event on {}",
        claim.claim_number
    );
}

/// Asserts that claims are in recency order (newest update first)
pub fn assert_sorted_by_recency(claims: &[&Claim]) {
    for pair in claims.windows(2) {
        assert!(
            recency_order(pair[0], pair[1]).is_le(),
            "Claims out of recency order: {} ({}) before {} ({})",
            pair[0].claim_number,
            pair[0].date_updated,
            pair[1].claim_number,
            pair[1].date_updated
        );
    }
}

/// Asserts an approved amount is present and within the claimed amount
pub fn assert_approved_within_claimed(claim: &Claim) {
    let approved: Rand = claim
        .approved_amount
        .unwrap_or_else(|| panic!("{} has no approved amount", claim.claim_number));
    assert!(
        approved <= claim.amount,
        "{}: approved {} exceeds claimed {}",
        claim.claim_number,
        approved,
        claim.amount
    );
}

/// Asserts that a result failed with `InvalidClaim`
pub fn assert_invalid_claim<T: std::fmt::Debug>(result: Result<T, ClaimError>) {
    match result {
        Err(ClaimError::InvalidClaim(_)) => {}
        other => panic!("Expected InvalidClaim, got {other:?}"),
    }
}
