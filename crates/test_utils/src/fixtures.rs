//! Pre-built Test Fixtures
//!
//! The demo portfolio (four policies, three claims) is parsed once from the
//! bundled fixture document and shared by every test that needs it.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use core_kernel::{ClaimId, PolicyId, Rand};
use domain_claims::ports::mock::MockPortalPort;
use domain_claims::Claim;
use domain_policy::Policy;
use infra_fixtures::{FixturePortalAdapter, PortalFixture};

static DEMO_PORTFOLIO: Lazy<PortalFixture> = Lazy::new(|| {
    FixturePortalAdapter::bundled()
        .expect("bundled portal fixture is valid")
        .fixture()
        .clone()
});

/// Fixture for the demo portfolio
pub struct PortfolioFixtures;

impl PortfolioFixtures {
    pub fn document() -> &'static PortalFixture {
        &DEMO_PORTFOLIO
    }

    pub fn policies() -> Vec<Policy> {
        DEMO_PORTFOLIO.policies.clone()
    }

    pub fn claims() -> Vec<Claim> {
        DEMO_PORTFOLIO.claims.clone()
    }

    pub fn policy(id: &str) -> Policy {
        let id = PolicyId::new(id);
        DEMO_PORTFOLIO
            .policies
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .unwrap_or_else(|| panic!("no demo policy {id}"))
    }

    pub fn claim(id: &str) -> Claim {
        let id = ClaimId::new(id);
        DEMO_PORTFOLIO
            .claims
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .unwrap_or_else(|| panic!("no demo claim {id}"))
    }

    /// CLM-2025-08847: under review, step 4 of 6 in progress
    pub fn motor_claim_under_review() -> Claim {
        Self::claim("clm_001")
    }

    /// CLM-2025-07234: approved for 29500 of 32000, timeline complete
    pub fn approved_home_claim() -> Claim {
        Self::claim("clm_002")
    }

    /// CLM-2024-04521: windscreen claim, paid
    pub fn paid_windscreen_claim() -> Claim {
        Self::claim("clm_003")
    }

    /// In-memory port holding the demo portfolio
    pub fn mock_port() -> MockPortalPort {
        MockPortalPort::with_data(Self::policies(), Self::claims())
    }
}

/// Fixture for dates used across tests
pub struct DateFixtures;

impl DateFixtures {
    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
    }

    /// Default submission date for built claims
    pub fn claim_submitted() -> NaiveDate {
        Self::date(2025, 11, 10)
    }

    pub fn policy_start() -> NaiveDate {
        Self::date(2024, 1, 1)
    }

    pub fn policy_end() -> NaiveDate {
        Self::date(2026, 12, 31)
    }
}

/// Fixture for Rand amounts
pub struct AmountFixtures;

impl AmountFixtures {
    pub fn claimed() -> Rand {
        Rand::from_whole(32000)
    }

    pub fn approved() -> Rand {
        Rand::from_whole(29500)
    }

    pub fn monthly_premium() -> Rand {
        Rand::from_whole(980)
    }

    pub fn cover() -> Rand {
        Rand::from_whole(850000)
    }
}
