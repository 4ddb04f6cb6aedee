//! Inbound data port
//!
//! Policies and claims are owned by systems upstream of the portal. The model
//! reads them through [`PortalDataPort`] so the derivations stay testable no
//! matter how the data is eventually fetched.
//!
//! # Example
//!
//! ```ignore
//! use domain_claims::ports::PortalDataPort;
//!
//! async fn policy_claims(port: &dyn PortalDataPort, id: &PolicyId) -> Result<usize, PortError> {
//!     port.get_policy(id).await?;
//!     Ok(port.claims_for_policy(id).await?.len())
//! }
//! ```
//!
//! Adapters return records that already satisfy the invariants of
//! [`Policy::validate`], [`Claim::validate`] and
//! [`validate_references`](crate::lifecycle::validate_references); the
//! fixture adapter checks them once at load time.

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, HealthCheckable, PolicyId, PortError};
use domain_policy::Policy;

use crate::claim::Claim;

/// Read access to a client's policies and claims
#[async_trait]
pub trait PortalDataPort: DomainPort + HealthCheckable {
    /// All policies, in upstream order
    async fn list_policies(&self) -> Result<Vec<Policy>, PortError>;

    /// One policy
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` if no policy has this id
    async fn get_policy(&self, id: &PolicyId) -> Result<Policy, PortError>;

    /// All claims, in upstream order
    async fn list_claims(&self) -> Result<Vec<Claim>, PortError>;

    /// One claim
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` if no claim has this id
    async fn get_claim(&self, id: &ClaimId) -> Result<Claim, PortError>;

    /// Claims against one policy, in upstream order
    async fn claims_for_policy(&self, policy_id: &PolicyId) -> Result<Vec<Claim>, PortError> {
        Ok(self
            .list_claims()
            .await?
            .into_iter()
            .filter(|c| &c.policy_id == policy_id)
            .collect())
    }
}

/// In-memory implementation of PortalDataPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[derive(Debug, Default, Clone)]
    pub struct MockPortalPort {
        policies: Arc<RwLock<Vec<Policy>>>,
        claims: Arc<RwLock<Vec<Claim>>>,
        health: Arc<RwLock<AdapterHealth>>,
    }

    impl MockPortalPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the port; records are stored as given, unchecked
        pub fn with_data(policies: Vec<Policy>, claims: Vec<Claim>) -> Self {
            Self {
                policies: Arc::new(RwLock::new(policies)),
                claims: Arc::new(RwLock::new(claims)),
                health: Arc::default(),
            }
        }

        pub async fn add_policy(&self, policy: Policy) {
            self.policies.write().await.push(policy);
        }

        pub async fn add_claim(&self, claim: Claim) {
            self.claims.write().await.push(claim);
        }

        /// Status reported by the next health checks
        pub async fn set_health(&self, status: AdapterHealth) {
            *self.health.write().await = status;
        }
    }

    impl DomainPort for MockPortalPort {}

    #[async_trait]
    impl HealthCheckable for MockPortalPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-portal-port".to_string(),
                status: *self.health.read().await,
                message: None,
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl PortalDataPort for MockPortalPort {
        async fn list_policies(&self) -> Result<Vec<Policy>, PortError> {
            Ok(self.policies.read().await.clone())
        }

        async fn get_policy(&self, id: &PolicyId) -> Result<Policy, PortError> {
            self.policies
                .read()
                .await
                .iter()
                .find(|p| &p.id == id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Policy", id))
        }

        async fn list_claims(&self) -> Result<Vec<Claim>, PortError> {
            Ok(self.claims.read().await.clone())
        }

        async fn get_claim(&self, id: &ClaimId) -> Result<Claim, PortError> {
            self.claims
                .read()
                .await
                .iter()
                .find(|c| &c.id == id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Claim", id))
        }
    }
}
