//! Document status model — the closed set of lifecycle states.
//!
//! The happy path is `draft → submitted → reviewed → approved`;
//! `rejected` is reachable from `submitted` or `reviewed` only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a procurement document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Being assembled by the vendor; line items are still editable.
    Draft,
    /// Handed over for the initial warehouse check.
    Submitted,
    /// Checked by PIC gudang, awaiting the direksi decision.
    Reviewed,
    /// Accepted by direksi. Terminal.
    Approved,
    /// Turned down during review. Terminal.
    Rejected,
}

/// All statuses in canonical lifecycle order.
pub const ALL_STATUSES: &[DocumentStatus] = &[
    DocumentStatus::Draft,
    DocumentStatus::Submitted,
    DocumentStatus::Reviewed,
    DocumentStatus::Approved,
    DocumentStatus::Rejected,
];

impl DocumentStatus {
    /// Returns the statuses this one may legally transition to.
    pub fn allowed_next(self) -> &'static [DocumentStatus] {
        match self {
            DocumentStatus::Draft => &[DocumentStatus::Submitted],
            DocumentStatus::Submitted => &[DocumentStatus::Reviewed, DocumentStatus::Rejected],
            DocumentStatus::Reviewed => &[DocumentStatus::Approved, DocumentStatus::Rejected],
            DocumentStatus::Approved | DocumentStatus::Rejected => &[],
        }
    }

    /// Whether a transition from `self` to `next` is in the table.
    pub fn can_transition_to(self, next: DocumentStatus) -> bool {
        self.allowed_next().contains(&next)
    }

    /// Terminal statuses have no outgoing transitions.
    pub fn is_terminal(self) -> bool {
        self.allowed_next().is_empty()
    }

    /// Canonical wire value used by external collaborators.
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Submitted => "submitted",
            DocumentStatus::Reviewed => "reviewed",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
        }
    }

    /// Strict parse of a wire value.
    ///
    /// Unknown labels are a badge-rendering concern, never logic input,
    /// so they yield `None` instead of a default.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(DocumentStatus::Draft),
            "submitted" => Some(DocumentStatus::Submitted),
            "reviewed" => Some(DocumentStatus::Reviewed),
            "approved" => Some(DocumentStatus::Approved),
            "rejected" => Some(DocumentStatus::Rejected),
            _ => None,
        }
    }

    /// The single canonical display label for status badges.
    pub fn label(self) -> &'static str {
        match self {
            DocumentStatus::Draft => "Draft",
            DocumentStatus::Submitted => "Diajukan",
            DocumentStatus::Reviewed => "Diperiksa",
            DocumentStatus::Approved => "Disetujui",
            DocumentStatus::Rejected => "Ditolak",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
