//! Claim timeline
//!
//! A claim's processing history and outlook as an ordered list of steps.
//! Each step is `completed`, `current` or `pending`, and reading the list in
//! order the states never go backwards:
//!
//! ```text
//! completed* current? pending*
//! ```
//!
//! [`Timeline`] only exists in that shape. It is checked when constructed and
//! when deserialised, so every derivation downstream (progress, highlight,
//! next action) can assume it.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::TimelineEventId;

use crate::error::ClaimError;

/// Processing state of a timeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineStatus {
    Completed,
    Current,
    Pending,
}

impl TimelineStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TimelineStatus::Completed => "completed",
            TimelineStatus::Current => "current",
            TimelineStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for TimelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One step in a claim's processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimTimelineEvent {
    pub id: TimelineEventId,
    /// When the step happened; absent for steps still to come
    #[serde(default, with = "core_kernel::temporal::optional_date")]
    pub date: Option<NaiveDate>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TimelineStatus,
    /// Icon hint supplied by the claims system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ClaimTimelineEvent {
    pub fn new(
        id: impl Into<TimelineEventId>,
        title: impl Into<String>,
        status: TimelineStatus,
    ) -> Self {
        Self {
            id: id.into(),
            date: None,
            title: title.into(),
            description: String::new(),
            status,
            icon: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Icon to render for this step
    ///
    /// Completed steps always show a tick. Current and pending steps keep
    /// their own hint when they have one.
    pub fn display_icon(&self) -> &str {
        match self.status {
            TimelineStatus::Completed => "check_circle",
            TimelineStatus::Current => self.icon.as_deref().unwrap_or("pending"),
            TimelineStatus::Pending => self.icon.as_deref().unwrap_or("radio_button_unchecked"),
        }
    }

    /// The step renders highlighted (pulsing marker, emphasised title)
    pub fn is_highlighted(&self) -> bool {
        self.status == TimelineStatus::Current
    }
}

/// Non-empty, well-ordered sequence of timeline events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ClaimTimelineEvent>", into = "Vec<ClaimTimelineEvent>")]
pub struct Timeline(Vec<ClaimTimelineEvent>);

impl Timeline {
    /// Validates and wraps a sequence of events
    pub fn new(events: Vec<ClaimTimelineEvent>) -> Result<Self, ClaimError> {
        check_events(&events)?;
        Ok(Self(events))
    }

    pub fn events(&self) -> &[ClaimTimelineEvent] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClaimTimelineEvent> {
        self.0.iter()
    }

    /// Number of events; never zero
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.0
            .iter()
            .filter(|e| e.status == TimelineStatus::Completed)
            .count()
    }

    /// The single `current` event, if any
    pub fn current(&self) -> Option<&ClaimTimelineEvent> {
        self.0.iter().find(|e| e.status == TimelineStatus::Current)
    }

    /// Index of the `current` event
    pub fn current_index(&self) -> Option<usize> {
        self.0.iter().position(|e| e.status == TimelineStatus::Current)
    }

    /// Every step is done
    pub fn is_complete(&self) -> bool {
        self.completed_count() == self.0.len()
    }

    /// Latest dated event
    pub fn last_dated(&self) -> Option<&ClaimTimelineEvent> {
        self.0.iter().rev().find(|e| e.date.is_some())
    }

    pub fn into_events(self) -> Vec<ClaimTimelineEvent> {
        self.0
    }
}

impl TryFrom<Vec<ClaimTimelineEvent>> for Timeline {
    type Error = ClaimError;

    fn try_from(events: Vec<ClaimTimelineEvent>) -> Result<Self, Self::Error> {
        Timeline::new(events)
    }
}

impl From<Timeline> for Vec<ClaimTimelineEvent> {
    fn from(timeline: Timeline) -> Self {
        timeline.0
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ClaimTimelineEvent;
    type IntoIter = std::slice::Iter<'a, ClaimTimelineEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn check_events(events: &[ClaimTimelineEvent]) -> Result<(), ClaimError> {
    if events.is_empty() {
        return Err(ClaimError::InvalidClaim("timeline is empty".to_string()));
    }

    // Statuses only move forward; Current may appear once.
    let mut previous = TimelineStatus::Completed;
    let mut seen_current = false;
    for (index, event) in events.iter().enumerate() {
        if event.status < previous {
            return Err(ClaimError::InvalidClaim(format!(
                "timeline event {} ({}) is {} after a {} event",
                index, event.id, event.status, previous
            )));
        }
        if event.status == TimelineStatus::Current {
            if seen_current {
                return Err(ClaimError::InvalidClaim(format!(
                    "timeline event {} ({}) is a second current event",
                    index, event.id
                )));
            }
            seen_current = true;
        }
        previous = event.status;
    }

    let mut last_date: Option<NaiveDate> = None;
    for event in events {
        if let Some(date) = event.date {
            if let Some(earlier) = last_date {
                core_kernel::temporal::ensure_not_before(earlier, date).map_err(|e| {
                    ClaimError::InvalidClaim(format!("timeline event {}: {}", event.id, e))
                })?;
            }
            last_date = Some(date);
        }
    }

    Ok(())
}
