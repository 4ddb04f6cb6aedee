//! Core Kernel - Foundational types shared by the portal domain crates
//!
//! This crate provides the building blocks used across all domain modules:
//! - Opaque, strongly-typed identifiers
//! - Non-negative Rand amounts with precise decimal arithmetic
//! - Calendar date ranges and wire-format date helpers
//! - The shared status vocabulary (labels, tones, colour classes)
//! - Port error types for data-source adapters

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod status;
pub mod ports;

pub use money::{Rand, MoneyError, CURRENCY_CODE};
pub use temporal::{DateRange, TemporalError};
pub use identifiers::{
    PolicyId, InsuredItemId, ClaimId, TimelineEventId, DocumentId, EmptyIdentifier,
};
pub use status::{StatusDisplay, StatusTone, UnknownStatusError, status_label, status_colour_class};
pub use ports::{PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable};
