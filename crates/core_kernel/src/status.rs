//! Shared status vocabulary
//!
//! Policy, claim and document statuses are rendered by several views (list
//! cards, detail timelines, dashboards, exports). Every status enum implements
//! [`StatusDisplay`] and maps onto a small set of [`StatusTone`]s; the tone is
//! the only place a colour class is defined. Renderers call
//! [`status_label`] and [`status_colour_class`] and never keep their own tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A status value outside the closed set of its enum
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {kind} status: '{value}'")]
pub struct UnknownStatusError {
    /// Which enum the value was parsed for (e.g. "claim")
    pub kind: &'static str,
    /// The offending raw value
    pub value: String,
}

impl UnknownStatusError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Colour family a status renders in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    /// Green: active, approved, paid
    Success,
    /// Amber: pending, awaiting documents
    Warning,
    /// Grey: expired
    Neutral,
    /// Red: cancelled, rejected
    Error,
    /// Blue: submitted
    Info,
    /// Indigo: under review
    Review,
}

impl StatusTone {
    /// Every tone, in display order
    pub const ALL: [StatusTone; 6] = [
        StatusTone::Success,
        StatusTone::Warning,
        StatusTone::Neutral,
        StatusTone::Error,
        StatusTone::Info,
        StatusTone::Review,
    ];

    /// Tailwind utility classes for a status badge in this tone
    pub fn colour_class(&self) -> &'static str {
        match self {
            StatusTone::Success => {
                "text-emerald-600 bg-emerald-50 dark:text-emerald-400 dark:bg-emerald-950"
            }
            StatusTone::Warning => {
                "text-amber-600 bg-amber-50 dark:text-amber-400 dark:bg-amber-950"
            }
            StatusTone::Neutral => {
                "text-stone-500 bg-stone-100 dark:text-stone-400 dark:bg-stone-800"
            }
            StatusTone::Error => "text-red-600 bg-red-50 dark:text-red-400 dark:bg-red-950",
            StatusTone::Info => "text-blue-600 bg-blue-50 dark:text-blue-400 dark:bg-blue-950",
            StatusTone::Review => {
                "text-indigo-600 bg-indigo-50 dark:text-indigo-400 dark:bg-indigo-950"
            }
        }
    }

    /// Stable name for non-web renderers (terminal colours, export columns)
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Success => "success",
            StatusTone::Warning => "warning",
            StatusTone::Neutral => "neutral",
            StatusTone::Error => "error",
            StatusTone::Info => "info",
            StatusTone::Review => "review",
        }
    }
}

impl fmt::Display for StatusTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata every status enum provides
pub trait StatusDisplay: Copy {
    /// Wire value (`"under_review"`)
    fn code(&self) -> &'static str;

    /// Human-readable label (`"Under Review"`)
    fn label(&self) -> &'static str;

    /// Colour family
    fn tone(&self) -> StatusTone;
}

/// Display label for a status
pub fn status_label<S: StatusDisplay>(status: S) -> &'static str {
    status.label()
}

/// Colour classes for a status, shared by policy, claim and document statuses
pub fn status_colour_class<S: StatusDisplay>(status: S) -> &'static str {
    status.tone().colour_class()
}
