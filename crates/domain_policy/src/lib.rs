//! Policy Domain
//!
//! Read-only model of the policies a portal client holds. Records come from
//! the upstream policy-administration system; this crate validates them and
//! derives the portfolio views the portal shows.
//!
//! # Policy Status
//!
//! ```text
//! pending -> active -> expired
//!                  \-> cancelled
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{summarize_portfolio, Policy};
//!
//! let policies: Vec<Policy> = serde_json::from_str(json)?;
//! let summary = summarize_portfolio(&policies);
//! println!("{} active, {} per month", summary.active_policies, summary.total_monthly_premium);
//! ```

pub mod policy;
pub mod premium;
pub mod portfolio;
pub mod error;

pub use policy::{Policy, PolicyType, PolicyStatus, InsuredItem};
pub use premium::PremiumFrequency;
pub use portfolio::{
    PolicyStatusFilter, PortfolioSummary, TypeDistribution,
    active_policies, distribution_by_type, summarize_portfolio,
};
pub use error::PolicyError;
