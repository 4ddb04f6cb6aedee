//! Supporting documents attached to a claim

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{DocumentId, StatusDisplay, StatusTone, UnknownStatusError};

/// Review state of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 3] = [
        DocumentStatus::Pending,
        DocumentStatus::Approved,
        DocumentStatus::Rejected,
    ];
}

impl StatusDisplay for DocumentStatus {
    fn code(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Approved => "Approved",
            DocumentStatus::Rejected => "Rejected",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            DocumentStatus::Pending => StatusTone::Warning,
            DocumentStatus::Approved => StatusTone::Success,
            DocumentStatus::Rejected => StatusTone::Error,
        }
    }
}

impl FromStr for DocumentStatus {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentStatus::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| UnknownStatusError::new("document", s))
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A file uploaded in support of a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDocument {
    pub id: DocumentId,
    /// File name as uploaded
    pub name: String,
    /// File type without the dot (`pdf`, `zip`, ...)
    #[serde(rename = "type")]
    pub file_type: String,
    pub uploaded_at: NaiveDate,
    pub status: DocumentStatus,
}

impl ClaimDocument {
    /// Icon for the document list
    pub fn icon(&self) -> &'static str {
        if self.file_type.eq_ignore_ascii_case("pdf") {
            "picture_as_pdf"
        } else {
            "folder_zip"
        }
    }
}
