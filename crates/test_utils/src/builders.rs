//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else. Free text is filled in with `fake`.

use chrono::{Days, NaiveDate};
use fake::faker::lorem::en::{Sentence, Words};
use fake::Fake;

use core_kernel::{ClaimId, PolicyId, Rand};
use domain_claims::{Claim, ClaimStatus, ClaimTimelineEvent, TimelineStatus};
use domain_policy::{Policy, PolicyStatus, PolicyType, PremiumFrequency};

use crate::fixtures::{AmountFixtures, DateFixtures};

fn filler_title() -> String {
    let words: Vec<String> = Words(2..4).fake();
    words.join(" ")
}

fn filler_sentence() -> String {
    Sentence(4..9).fake()
}

/// Builder for test policies
pub struct TestPolicyBuilder {
    policy: Policy,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Creates an active monthly home policy
    pub fn new() -> Self {
        let id = PolicyId::generate();
        Self {
            policy: Policy {
                policy_number: format!("HME-{}", id.as_str().to_uppercase()),
                id,
                policy_type: PolicyType::Home,
                name: filler_title(),
                status: PolicyStatus::Active,
                premium: AmountFixtures::monthly_premium(),
                frequency: PremiumFrequency::Monthly,
                next_payment: DateFixtures::date(2026, 2, 1),
                start_date: DateFixtures::policy_start(),
                end_date: DateFixtures::policy_end(),
                cover_amount: AmountFixtures::cover(),
                excess: Rand::from_whole(2000),
                description: filler_sentence(),
                features: vec![filler_title(), filler_title()],
                insured_items: None,
            },
        }
    }

    pub fn with_id(mut self, id: impl Into<PolicyId>) -> Self {
        self.policy.id = id.into();
        self
    }

    pub fn with_type(mut self, policy_type: PolicyType) -> Self {
        self.policy.policy_type = policy_type;
        self
    }

    pub fn with_status(mut self, status: PolicyStatus) -> Self {
        self.policy.status = status;
        self
    }

    pub fn with_premium(mut self, premium: u64, frequency: PremiumFrequency) -> Self {
        self.policy.premium = Rand::from_whole(premium);
        self.policy.frequency = frequency;
        self
    }

    pub fn with_cover(mut self, cover: u64) -> Self {
        self.policy.cover_amount = Rand::from_whole(cover);
        self
    }

    pub fn with_term(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.policy.start_date = start;
        self.policy.end_date = end;
        self
    }

    pub fn build(self) -> Policy {
        self.policy
    }
}

/// Builder for test claims
///
/// The timeline is given as a list of step states; events are generated with
/// one day between dated steps and pending steps left undated.
pub struct TestClaimBuilder {
    id: ClaimId,
    policy_id: PolicyId,
    policy_type: PolicyType,
    claim_number: String,
    status: ClaimStatus,
    amount: Rand,
    approved_amount: Option<Rand>,
    submitted: NaiveDate,
    updated: Option<NaiveDate>,
    timeline: Vec<TimelineStatus>,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a submitted claim with one step in progress
    pub fn new() -> Self {
        let id = ClaimId::generate();
        Self {
            claim_number: format!("CLM-{}", id.as_str().to_uppercase()),
            id,
            policy_id: PolicyId::new("pol_001"),
            policy_type: PolicyType::Motor,
            status: ClaimStatus::Submitted,
            amount: AmountFixtures::claimed(),
            approved_amount: None,
            submitted: DateFixtures::claim_submitted(),
            updated: None,
            timeline: vec![TimelineStatus::Current],
        }
    }

    pub fn with_id(mut self, id: impl Into<ClaimId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_claim_number(mut self, number: impl Into<String>) -> Self {
        self.claim_number = number.into();
        self
    }

    pub fn for_policy(mut self, policy: &Policy) -> Self {
        self.policy_id = policy.id.clone();
        self.policy_type = policy.policy_type;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = Rand::from_whole(amount);
        self
    }

    pub fn with_approved_amount(mut self, amount: u64) -> Self {
        self.approved_amount = Some(Rand::from_whole(amount));
        self
    }

    /// Approved or paid, with the full claimed amount approved
    pub fn settled(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self.approved_amount = Some(self.amount);
        self
    }

    pub fn submitted_on(mut self, date: NaiveDate) -> Self {
        self.submitted = date;
        self
    }

    pub fn updated_on(mut self, date: NaiveDate) -> Self {
        self.updated = Some(date);
        self
    }

    pub fn with_timeline(mut self, steps: &[TimelineStatus]) -> Self {
        self.timeline = steps.to_vec();
        self
    }

    fn events(&self) -> Vec<ClaimTimelineEvent> {
        self.timeline
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let event = ClaimTimelineEvent::new(
                    format!("{}_evt_{}", self.id, i + 1),
                    filler_title(),
                    *status,
                )
                .with_description(filler_sentence());
                match status {
                    TimelineStatus::Pending => event,
                    _ => event.on(self.submitted + Days::new(i as u64)),
                }
            })
            .collect()
    }

    /// Builds through the strict claim builder
    ///
    /// # Panics
    ///
    /// Panics if the configured claim breaks an invariant
    pub fn build(self) -> Claim {
        self.try_build().expect("test claim is valid")
    }

    pub fn try_build(self) -> Result<Claim, domain_claims::ClaimError> {
        let events = self.events();
        let mut builder = Claim::builder(
            self.id,
            self.policy_id,
            self.policy_type,
            self.claim_number,
        )
        .claim_type(filler_title())
        .description(filler_sentence())
        .status(self.status)
        .amount(self.amount)
        .submitted_on(self.submitted)
        .updated_on(self.updated.unwrap_or(self.submitted))
        .events(events);

        if let Some(approved) = self.approved_amount {
            builder = builder.approved_amount(approved);
        }
        builder.build()
    }
}
