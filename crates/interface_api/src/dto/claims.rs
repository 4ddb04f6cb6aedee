//! Claims DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{
    status_colour_class, ClaimId, DocumentId, PolicyId, Rand, StatusDisplay, TimelineEventId,
};
use domain_claims::{
    claim_progress, next_actionable_event, timeline_event_visual_state, Claim, ClaimDocument,
    ClaimProgress, ClaimStatus, ClaimTimelineEvent, DocumentStatus, TimelineStatus,
};
use domain_policy::PolicyType;

#[derive(Debug, Default, Deserialize)]
pub struct ClaimListQuery {
    /// `all`, `active`, `approved`, `paid` or `rejected`
    pub filter: Option<String>,
    pub policy_id: Option<String>,
}

/// Compact claim card for lists
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimCard {
    pub id: ClaimId,
    pub claim_number: String,
    pub policy_id: PolicyId,
    pub policy_type: PolicyType,
    pub policy_icon: &'static str,
    #[serde(rename = "type")]
    pub claim_type: String,
    pub status: ClaimStatus,
    pub status_label: &'static str,
    pub status_colour: &'static str,
    pub amount: Rand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_amount: Option<Rand>,
    pub date_submitted: NaiveDate,
    pub date_updated: NaiveDate,
    pub progress: ClaimProgress,
    /// Title of the step in progress
    pub current_step: Option<String>,
}

impl From<&Claim> for ClaimCard {
    fn from(claim: &Claim) -> Self {
        Self {
            id: claim.id.clone(),
            claim_number: claim.claim_number.clone(),
            policy_id: claim.policy_id.clone(),
            policy_type: claim.policy_type,
            policy_icon: claim.policy_type.icon(),
            claim_type: claim.claim_type.clone(),
            status: claim.status,
            status_label: claim.status.label(),
            status_colour: status_colour_class(claim.status),
            amount: claim.amount,
            approved_amount: claim.approved_amount,
            date_submitted: claim.date_submitted,
            date_updated: claim.date_updated,
            progress: claim_progress(claim),
            current_step: next_actionable_event(claim).map(|e| e.title.clone()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEventView {
    pub id: TimelineEventId,
    pub date: Option<NaiveDate>,
    pub title: String,
    pub description: String,
    pub visual_state: TimelineStatus,
    pub icon: String,
    pub highlighted: bool,
}

impl From<&ClaimTimelineEvent> for TimelineEventView {
    fn from(event: &ClaimTimelineEvent) -> Self {
        Self {
            id: event.id.clone(),
            date: event.date,
            title: event.title.clone(),
            description: event.description.clone(),
            visual_state: timeline_event_visual_state(event),
            icon: event.display_icon().to_string(),
            highlighted: event.is_highlighted(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub id: DocumentId,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub uploaded_at: NaiveDate,
    pub status: DocumentStatus,
    pub status_label: &'static str,
    pub status_colour: &'static str,
    pub icon: &'static str,
}

impl From<&ClaimDocument> for DocumentView {
    fn from(doc: &ClaimDocument) -> Self {
        Self {
            id: doc.id.clone(),
            name: doc.name.clone(),
            file_type: doc.file_type.clone(),
            uploaded_at: doc.uploaded_at,
            status: doc.status,
            status_label: doc.status.label(),
            status_colour: status_colour_class(doc.status),
            icon: doc.icon(),
        }
    }
}

/// Expanded claim view with its full timeline
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDetail {
    #[serde(flatten)]
    pub card: ClaimCard,
    pub description: String,
    pub timeline: Vec<TimelineEventView>,
    pub next_action: Option<TimelineEventView>,
    pub documents: Vec<DocumentView>,
}

impl From<&Claim> for ClaimDetail {
    fn from(claim: &Claim) -> Self {
        Self {
            card: ClaimCard::from(claim),
            description: claim.description.clone(),
            timeline: claim.timeline.iter().map(TimelineEventView::from).collect(),
            next_action: next_actionable_event(claim).map(TimelineEventView::from),
            documents: claim
                .documents
                .iter()
                .flatten()
                .map(DocumentView::from)
                .collect(),
        }
    }
}
