//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use core_kernel::{ClaimId, PolicyId, Rand};
use domain_claims::{Claim, ClaimStatus, ClaimTimelineEvent, Timeline, TimelineStatus};
use domain_policy::PolicyType;

/// Strategy for whole-unit Rand amounts
pub fn rand_strategy() -> impl Strategy<Value = Rand> {
    (0u64..5_000_000u64).prop_map(Rand::from_whole)
}

pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    proptest::sample::select(ClaimStatus::ALL.to_vec())
}

pub fn policy_type_strategy() -> impl Strategy<Value = PolicyType> {
    proptest::sample::select(PolicyType::ALL.to_vec())
}

/// Strategy for dates in 2024-2026
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..1000u64).prop_map(|offset| {
        crate::fixtures::DateFixtures::date(2024, 1, 1) + Days::new(offset)
    })
}

/// Strategy for well-ordered timeline shapes: `completed* current? pending*`, never empty
pub fn timeline_shape_strategy() -> impl Strategy<Value = Vec<TimelineStatus>> {
    (0usize..8, any::<bool>(), 0usize..8)
        .prop_filter("timeline must not be empty", |(done, current, todo)| {
            done + usize::from(*current) + todo > 0
        })
        .prop_map(|(done, current, todo)| {
            let mut shape = vec![TimelineStatus::Completed; done];
            if current {
                shape.push(TimelineStatus::Current);
            }
            shape.extend(std::iter::repeat(TimelineStatus::Pending).take(todo));
            shape
        })
}

/// Strategy for valid timelines, dated in order from `start`
pub fn timeline_strategy(start: NaiveDate) -> impl Strategy<Value = Timeline> {
    timeline_shape_strategy().prop_map(move |shape| {
        let events = shape
            .into_iter()
            .enumerate()
            .map(|(i, status)| {
                let event = ClaimTimelineEvent::new(format!("evt_{i}"), format!("Step {}", i + 1), status);
                match status {
                    TimelineStatus::Pending => event,
                    _ => event.on(start + Days::new(i as u64)),
                }
            })
            .collect();
        match Timeline::new(events) {
            Ok(timeline) => timeline,
            Err(e) => panic!("generated timeline is invalid: {e}"),
        }
    })
}

/// Strategy for claims satisfying every claim invariant
///
/// The claim number is derived from `index` so lists stay unique.
pub fn claim_strategy(index: usize) -> impl Strategy<Value = Claim> {
    (
        claim_status_strategy(),
        policy_type_strategy(),
        rand_strategy(),
        0u32..=100u32,
        date_strategy(),
        0u64..120u64,
    )
        .prop_flat_map(move |(status, policy_type, amount, approved_pct, submitted, age)| {
            timeline_strategy(submitted).prop_map(move |timeline| {
                let approved_amount = status.requires_approved_amount().then(|| {
                    let share = amount.amount() * rust_decimal::Decimal::from(approved_pct)
                        / rust_decimal::Decimal::from(100);
                    Rand::new(share.floor()).unwrap_or_default()
                });
                Claim {
                    id: ClaimId::new(format!("clm_{index:04}")),
                    policy_id: PolicyId::new(format!("pol_{}", policy_type.code())),
                    policy_type,
                    claim_number: format!("CLM-GEN-{index:04}"),
                    claim_type: "Generated".to_string(),
                    status,
                    amount,
                    approved_amount,
                    date_submitted: submitted,
                    date_updated: submitted + Days::new(age),
                    description: String::new(),
                    timeline,
                    documents: None,
                }
            })
        })
}

/// Strategy for lists of valid claims with unique numbers
pub fn claims_strategy(max: usize) -> impl Strategy<Value = Vec<Claim>> {
    (0..=max).prop_flat_map(|len| (0..len).map(claim_strategy).collect::<Vec<_>>())
}
