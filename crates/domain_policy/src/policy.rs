//! Policy entity
//!
//! A `Policy` is an insurance contract held by a portal client. Records are
//! issued by the policy-administration system upstream and are read-only
//! here; this module only describes their shape and checks their invariants.
//!
//! # Invariants
//!
//! - `end_date` is not before `start_date`
//! - cover, excess, premium and insured-item values are non-negative
//!   (enforced by [`Rand`])
//! - insured-item ids are unique within a policy

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{
    DateRange, InsuredItemId, PolicyId, Rand, StatusDisplay, StatusTone, UnknownStatusError,
};

use crate::error::PolicyError;
use crate::premium::PremiumFrequency;

/// Product line a policy belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    Motor,
    Home,
    Life,
    Business,
    Travel,
}

impl PolicyType {
    /// Every product line, in display order
    pub const ALL: [PolicyType; 5] = [
        PolicyType::Motor,
        PolicyType::Home,
        PolicyType::Life,
        PolicyType::Business,
        PolicyType::Travel,
    ];

    /// Wire value
    pub fn code(&self) -> &'static str {
        match self {
            PolicyType::Motor => "motor",
            PolicyType::Home => "home",
            PolicyType::Life => "life",
            PolicyType::Business => "business",
            PolicyType::Travel => "travel",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            PolicyType::Motor => "Motor",
            PolicyType::Home => "Home",
            PolicyType::Life => "Life",
            PolicyType::Business => "Business",
            PolicyType::Travel => "Travel",
        }
    }

    /// Material Symbols icon name
    pub fn icon(&self) -> &'static str {
        match self {
            PolicyType::Motor => "directions_car",
            PolicyType::Home => "home",
            PolicyType::Life => "favorite",
            PolicyType::Business => "business",
            PolicyType::Travel => "flight",
        }
    }
}

impl FromStr for PolicyType {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyType::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| UnknownStatusError::new("policy type", s))
    }
}

/// Policy status as reported by the policy-administration system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    /// In force
    Active,
    /// Awaiting underwriting or documentation
    Pending,
    /// Term has run out
    Expired,
    /// Cancelled before expiry
    Cancelled,
}

impl PolicyStatus {
    pub const ALL: [PolicyStatus; 4] = [
        PolicyStatus::Active,
        PolicyStatus::Pending,
        PolicyStatus::Expired,
        PolicyStatus::Cancelled,
    ];
}

impl StatusDisplay for PolicyStatus {
    fn code(&self) -> &'static str {
        match self {
            PolicyStatus::Active => "active",
            PolicyStatus::Pending => "pending",
            PolicyStatus::Expired => "expired",
            PolicyStatus::Cancelled => "cancelled",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PolicyStatus::Active => "Active",
            PolicyStatus::Pending => "Pending",
            PolicyStatus::Expired => "Expired",
            PolicyStatus::Cancelled => "Cancelled",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            PolicyStatus::Active => StatusTone::Success,
            PolicyStatus::Pending => StatusTone::Warning,
            PolicyStatus::Expired => StatusTone::Neutral,
            PolicyStatus::Cancelled => StatusTone::Error,
        }
    }
}

impl FromStr for PolicyStatus {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyStatus::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| UnknownStatusError::new("policy", s))
    }
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A specific insured asset listed on a policy schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuredItem {
    pub id: InsuredItemId,
    pub name: String,
    pub value: Rand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An insurance contract held by a portal client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// Unique identifier
    pub id: PolicyId,
    /// Product line
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    /// Product name shown to the client
    pub name: String,
    /// Human-readable policy number
    pub policy_number: String,
    /// Status
    pub status: PolicyStatus,
    /// Premium per collection period
    pub premium: Rand,
    /// Collection frequency
    pub frequency: PremiumFrequency,
    /// Next premium collection date
    pub next_payment: NaiveDate,
    /// Cover start (inclusive)
    pub start_date: NaiveDate,
    /// Cover end (inclusive)
    pub end_date: NaiveDate,
    /// Maximum payout
    pub cover_amount: Rand,
    /// Policyholder contribution per claim
    pub excess: Rand,
    /// Marketing description
    #[serde(default)]
    pub description: String,
    /// Benefits in display order
    #[serde(default)]
    pub features: Vec<String>,
    /// Scheduled items, if the product lists them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insured_items: Option<Vec<InsuredItem>>,
}

impl Policy {
    /// Checks the policy invariants
    pub fn validate(&self) -> Result<(), PolicyError> {
        self.term()?;

        if let Some(items) = &self.insured_items {
            let mut seen = HashSet::new();
            for item in items {
                if !seen.insert(&item.id) {
                    return Err(PolicyError::invalid(
                        &self.id,
                        format!("duplicate insured item id {}", item.id),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Cover period
    pub fn term(&self) -> Result<DateRange, PolicyError> {
        DateRange::new(self.start_date, self.end_date).map_err(|source| PolicyError::Temporal {
            policy_id: self.id.clone(),
            source,
        })
    }

    /// Returns true if the policy is in force
    pub fn is_active(&self) -> bool {
        self.status == PolicyStatus::Active
    }

    /// Premium expressed per month
    pub fn monthly_premium(&self) -> Rand {
        self.frequency.monthly_equivalent(self.premium)
    }

    /// Sum of all scheduled item values
    pub fn total_insured_value(&self) -> Rand {
        self.insured_items
            .iter()
            .flatten()
            .map(|item| item.value)
            .sum()
    }

    /// Checks whether the cover period includes a date
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.term().map(|term| term.contains(date)).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Policy {
        Policy {
            id: PolicyId::new("pol_001"),
            policy_type: PolicyType::Motor,
            name: "Comprehensive Motor Insurance".to_string(),
            policy_number: "MTR-2024-00847".to_string(),
            status: PolicyStatus::Active,
            premium: Rand::from_whole(1850),
            frequency: PremiumFrequency::Monthly,
            next_payment: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(),
            cover_amount: Rand::from_whole(450000),
            excess: Rand::from_whole(3500),
            description: String::new(),
            features: vec!["Accident damage cover".to_string()],
            insured_items: None,
        }
    }

    #[test]
    fn test_valid_policy() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_reversed_term_rejected() {
        let mut policy = sample();
        policy.end_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert!(matches!(policy.validate(), Err(PolicyError::Temporal { .. })));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("expired".parse::<PolicyStatus>().unwrap(), PolicyStatus::Expired);
        assert!("lapsed".parse::<PolicyStatus>().is_err());
    }
}
