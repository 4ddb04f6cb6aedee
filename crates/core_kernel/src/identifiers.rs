//! Strongly-typed identifiers for portal entities
//!
//! Upstream systems hand us opaque string identifiers (`pol_001`, `clm_002`).
//! Newtype wrappers keep a claim id from being passed where a policy id is
//! expected, without assuming anything about the identifier's format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Error returned when parsing an empty identifier
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind} identifier must not be empty")]
pub struct EmptyIdentifier {
    pub kind: &'static str,
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an identifier issued by an upstream system
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generates a fresh time-ordered identifier (`<prefix>_<uuid v7>`)
            pub fn generate() -> Self {
                Self(format!("{}_{}", $prefix, Uuid::now_v7().simple()))
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the conventional prefix for generated identifiers
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = EmptyIdentifier;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(EmptyIdentifier { kind: stringify!($name) });
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Policy identifiers
define_id!(PolicyId, "pol");
define_id!(InsuredItemId, "item");

// Claim identifiers
define_id!(ClaimId, "clm");
define_id!(TimelineEventId, "evt");
define_id!(DocumentId, "doc");
