//! Portfolio-level views over a client's policies
//!
//! Dashboard and policy-list pages show the same handful of aggregates:
//! how many policies are in force, what they cost per month, the total cover,
//! and a split by product line. They are computed here once.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Rand, StatusDisplay, UnknownStatusError};

use crate::policy::{Policy, PolicyStatus, PolicyType};

/// Status filter offered on the policy list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatusFilter {
    #[default]
    All,
    Active,
    Pending,
    Expired,
}

impl PolicyStatusFilter {
    pub const ALL: [PolicyStatusFilter; 4] = [
        PolicyStatusFilter::All,
        PolicyStatusFilter::Active,
        PolicyStatusFilter::Pending,
        PolicyStatusFilter::Expired,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PolicyStatusFilter::All => "all",
            PolicyStatusFilter::Active => "active",
            PolicyStatusFilter::Pending => "pending",
            PolicyStatusFilter::Expired => "expired",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PolicyStatusFilter::All => "All Policies",
            PolicyStatusFilter::Active => PolicyStatus::Active.label(),
            PolicyStatusFilter::Pending => PolicyStatus::Pending.label(),
            PolicyStatusFilter::Expired => PolicyStatus::Expired.label(),
        }
    }

    /// Checks whether a policy status passes this filter
    pub fn matches(&self, status: PolicyStatus) -> bool {
        match self {
            PolicyStatusFilter::All => true,
            PolicyStatusFilter::Active => status == PolicyStatus::Active,
            PolicyStatusFilter::Pending => status == PolicyStatus::Pending,
            PolicyStatusFilter::Expired => status == PolicyStatus::Expired,
        }
    }

    /// Applies the filter, keeping input order
    pub fn apply<'a>(&self, policies: &'a [Policy]) -> Vec<&'a Policy> {
        policies.iter().filter(|p| self.matches(p.status)).collect()
    }

    /// Number of policies passing the filter
    pub fn count(&self, policies: &[Policy]) -> usize {
        policies.iter().filter(|p| self.matches(p.status)).count()
    }
}

impl FromStr for PolicyStatusFilter {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyStatusFilter::ALL
            .into_iter()
            .find(|f| f.code() == s)
            .ok_or_else(|| UnknownStatusError::new("policy filter", s))
    }
}

impl fmt::Display for PolicyStatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Policies of one product line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDistribution {
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    pub count: usize,
    /// Combined monthly-equivalent premium
    pub monthly_premium: Rand,
}

/// Headline numbers for a client's portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_policies: usize,
    pub active_policies: usize,
    /// Monthly-equivalent premium across active policies
    pub total_monthly_premium: Rand,
    /// Cover across active policies
    pub total_cover: Rand,
    /// Split by product line across all policies, in first-seen order
    pub distribution: Vec<TypeDistribution>,
}

/// Policies currently in force
pub fn active_policies(policies: &[Policy]) -> Vec<&Policy> {
    PolicyStatusFilter::Active.apply(policies)
}

/// Groups policies by product line in the order each line first appears
pub fn distribution_by_type(policies: &[Policy]) -> Vec<TypeDistribution> {
    let mut distribution: Vec<TypeDistribution> = Vec::new();

    for policy in policies {
        let monthly = policy.monthly_premium();
        match distribution.iter_mut().find(|d| d.policy_type == policy.policy_type) {
            Some(entry) => {
                entry.count += 1;
                entry.monthly_premium = entry.monthly_premium + monthly;
            }
            None => distribution.push(TypeDistribution {
                policy_type: policy.policy_type,
                count: 1,
                monthly_premium: monthly,
            }),
        }
    }

    distribution
}

/// Computes the portfolio summary
pub fn summarize_portfolio(policies: &[Policy]) -> PortfolioSummary {
    let active = active_policies(policies);

    let summary = PortfolioSummary {
        total_policies: policies.len(),
        active_policies: active.len(),
        total_monthly_premium: active.iter().map(|p| p.monthly_premium()).sum(),
        total_cover: active.iter().map(|p| p.cover_amount).sum(),
        distribution: distribution_by_type(policies),
    };

    debug!(
        total = summary.total_policies,
        active = summary.active_policies,
        "Summarised portfolio"
    );

    summary
}
