//! Claims Domain
//!
//! The claim lifecycle model of the client portal: claims, their timelines
//! and documents, the status taxonomy, and every value derived from them for
//! display.
//!
//! # Claim Lifecycle
//!
//! ```text
//! submitted -> under_review -> approved -> paid
//!     |              ^      \-> rejected
//!     \-> pending_documents
//! ```
//!
//! Records are produced upstream and reach the model through
//! [`ports::PortalDataPort`]. Nothing here mutates them.

pub mod claim;
pub mod document;
pub mod error;
pub mod lifecycle;
pub mod ports;
pub mod status;
pub mod summary;
pub mod timeline;

pub use claim::{Claim, ClaimBuilder};
pub use document::{ClaimDocument, DocumentStatus};
pub use error::ClaimError;
pub use lifecycle::{
    claim_progress, filter_claims_by_policy, filter_claims_by_status, next_actionable_event,
    progress_fraction, recency_order, sort_claims_by_recency, status_colour_class_for_code,
    status_label_for_code, timeline_event_visual_state, validate_claim, validate_references,
    ClaimProgress,
};
pub use ports::PortalDataPort;
pub use status::{ClaimStatus, ClaimStatusFilter};
pub use summary::{filter_counts, summarize_claims, ClaimsSummary, FilterCount, StatusBreakdown};
pub use timeline::{ClaimTimelineEvent, Timeline, TimelineStatus};

pub use core_kernel::{status_colour_class, status_label, StatusDisplay};
