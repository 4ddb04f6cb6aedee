//! Fixture Infrastructure
//!
//! JSON-backed adapters for the portal's data ports. Fixtures stand in for
//! the policy and claims systems upstream of the portal: development servers
//! run against the bundled demo portfolio and tests load their own documents.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_fixtures::FixturePortalAdapter;
//!
//! let adapter = FixturePortalAdapter::load_from_path("fixtures/portal.json").await?;
//! ```

pub mod adapters;
pub mod document;
pub mod error;

pub use adapters::FixturePortalAdapter;
pub use document::PortalFixture;
pub use error::FixtureError;
