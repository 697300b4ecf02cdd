//! Core document records shared by every dashboard view.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ActionError, LineItemsFrozen};

use super::status::DocumentStatus;

/// The two procurement artifact kinds handled by the dashboard.
///
/// Work-acceptance (BAPP) and goods-receipt (BAPB) records share one
/// lifecycle; the distinction only matters for grouping and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Bapp,
    Bapb,
}

impl DocumentType {
    /// Canonical wire value used by external collaborators.
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::Bapp => "bapp",
            DocumentType::Bapb => "bapb",
        }
    }

    /// Strict parse of a wire value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bapp" => Some(DocumentType::Bapp),
            "bapb" => Some(DocumentType::Bapb),
            _ => None,
        }
    }

    /// Display label for card headers.
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Bapp => "BAPP",
            DocumentType::Bapb => "BAPB",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A quantity/description line on a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: u32,
    /// Unit of measure (e.g. "pcs", "kg").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// One BAPP or BAPB instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique document identifier (UUID when minted here). Immutable.
    pub id: String,
    pub document_type: DocumentType,
    /// Current lifecycle status. Changes only through validated transitions.
    pub status: DocumentStatus,
    pub project_name: String,
    pub vendor_name: String,
    /// When the document was created. Immutable.
    pub created_at: DateTime<Utc>,
    /// Line items are editable in draft only; frozen once submitted.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

impl Document {
    /// Creates a new draft document with a fresh id.
    pub fn new(
        document_type: DocumentType,
        project_name: impl Into<String>,
        vendor_name: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            document_type,
            status: DocumentStatus::Draft,
            project_name: project_name.into(),
            vendor_name: vendor_name.into(),
            created_at: Utc::now(),
            line_items: Vec::new(),
        }
    }

    /// Returns a copy with the given status.
    ///
    /// Does not validate the transition — see [`Document::transition_to`]
    /// and `workflow::apply_action` for the validated paths.
    pub fn with_status(mut self, status: DocumentStatus) -> Self {
        self.status = status;
        self
    }

    /// Applies a status transition, returning the updated document.
    ///
    /// Never mutates `self`; an attempt outside the transition table fails
    /// with `InvalidTransition` carrying the document id and both statuses.
    pub fn transition_to(&self, next: DocumentStatus) -> Result<Document, ActionError> {
        if !self.status.can_transition_to(next) {
            return Err(ActionError::InvalidTransition {
                document_id: self.id.clone(),
                from: self.status,
                attempted: next,
            });
        }
        Ok(self.clone().with_status(next))
    }

    /// Line items may only change while the document is still a draft.
    pub fn line_items_frozen(&self) -> bool {
        self.status != DocumentStatus::Draft
    }

    /// Appends a line item, failing once the document left draft.
    pub fn push_line_item(&mut self, item: LineItem) -> Result<(), LineItemsFrozen> {
        if self.line_items_frozen() {
            return Err(LineItemsFrozen {
                document_id: self.id.clone(),
            });
        }
        self.line_items.push(item);
        Ok(())
    }
}
