//! Fixture adapter for the portal data port
//!
//! Serves policies and claims from a JSON document held in memory. The
//! document is validated once when the adapter is built, so every record it
//! hands out satisfies the model's invariants.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_fixtures::FixturePortalAdapter;
//! use domain_claims::PortalDataPort;
//! use std::sync::Arc;
//!
//! let port: Arc<dyn PortalDataPort> = Arc::new(FixturePortalAdapter::bundled()?);
//! let claims = port.list_claims().await?;
//! ```

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, instrument};

use core_kernel::{
    AdapterHealth, ClaimId, DomainPort, HealthCheckResult, HealthCheckable, PolicyId, PortError,
};
use domain_claims::{Claim, PortalDataPort};
use domain_policy::Policy;

use crate::document::PortalFixture;
use crate::error::FixtureError;

const BUNDLED_PORTAL: &str = include_str!("../../fixtures/portal.json");

/// Read-only adapter over a validated fixture document
#[derive(Debug, Clone)]
pub struct FixturePortalAdapter {
    data: Arc<PortalFixture>,
    source: String,
}

impl FixturePortalAdapter {
    /// Validates a parsed document and wraps it
    pub fn from_fixture(fixture: PortalFixture, source: impl Into<String>) -> Result<Self, FixtureError> {
        let source = source.into();
        fixture.validate()?;
        info!(
            source = %source,
            policies = fixture.policies.len(),
            claims = fixture.claims.len(),
            "Loaded portal fixture"
        );
        Ok(Self {
            data: Arc::new(fixture),
            source,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        Self::from_fixture(PortalFixture::from_json(json)?, "inline")
    }

    /// Reads and validates a fixture file
    pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| FixtureError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_fixture(PortalFixture::from_json(&json)?, path.display().to_string())
    }

    /// The demo portfolio: four policies and three claims
    pub fn bundled() -> Result<Self, FixtureError> {
        Self::from_fixture(PortalFixture::from_json(BUNDLED_PORTAL)?, "bundled")
    }

    /// Where the document came from (`bundled`, `inline` or a file path)
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn fixture(&self) -> &PortalFixture {
        &self.data
    }
}

impl DomainPort for FixturePortalAdapter {}

#[async_trait]
impl HealthCheckable for FixturePortalAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: format!("fixture-portal:{}", self.source),
            status: AdapterHealth::Healthy,
            message: Some(format!(
                "{} policies, {} claims",
                self.data.policies.len(),
                self.data.claims.len()
            )),
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl PortalDataPort for FixturePortalAdapter {
    async fn list_policies(&self) -> Result<Vec<Policy>, PortError> {
        Ok(self.data.policies.clone())
    }

    #[instrument(skip_all, fields(policy_id = %id))]
    async fn get_policy(&self, id: &PolicyId) -> Result<Policy, PortError> {
        debug!("Looking up policy");
        self.data
            .policies
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Policy", id))
    }

    async fn list_claims(&self) -> Result<Vec<Claim>, PortError> {
        Ok(self.data.claims.clone())
    }

    #[instrument(skip_all, fields(claim_id = %id))]
    async fn get_claim(&self, id: &ClaimId) -> Result<Claim, PortError> {
        debug!("Looking up claim");
        self.data
            .claims
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Claim", id))
    }
}
