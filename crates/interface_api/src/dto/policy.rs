//! Policy DTOs

use serde::{Deserialize, Serialize};

use core_kernel::{status_colour_class, Rand, StatusDisplay};
use domain_policy::Policy;

use crate::dto::claims::ClaimCard;

#[derive(Debug, Default, Deserialize)]
pub struct PolicyListQuery {
    /// `all`, `active`, `pending` or `expired`
    pub status: Option<String>,
}

/// A policy with its display metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyView {
    #[serde(flatten)]
    pub policy: Policy,
    pub type_label: &'static str,
    pub icon: &'static str,
    pub status_label: &'static str,
    pub status_colour: &'static str,
    pub monthly_premium: Rand,
}

impl From<Policy> for PolicyView {
    fn from(policy: Policy) -> Self {
        Self {
            type_label: policy.policy_type.label(),
            icon: policy.policy_type.icon(),
            status_label: policy.status.label(),
            status_colour: status_colour_class(policy.status),
            monthly_premium: policy.monthly_premium(),
            policy,
        }
    }
}

/// A policy with its claims, most recent first
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDetail {
    #[serde(flatten)]
    pub policy: PolicyView,
    pub claims: Vec<ClaimCard>,
}
