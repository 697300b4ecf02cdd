//! Inbound collection envelope from the data-fetching collaborator.
//!
//! The collaborator delivers `{ data: [...], pagination?: {...} }`. Status
//! and type arrive as wire strings and are narrowed to the closed variants
//! before any logic runs; rows that fail narrowing never enter a queue or
//! a stats snapshot.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::dashboard::Page;
use crate::document::{Document, DocumentStatus, DocumentType, LineItem};
use crate::error::FetchError;

/// Raw document row as delivered by the fetch collaborator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    pub id: String,
    pub document_type: String,
    pub status: String,
    pub project_name: String,
    pub vendor_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

impl RawDocument {
    /// Narrows the wire strings into the closed status/type variants.
    pub fn into_document(self) -> Result<Document, FetchError> {
        let status = DocumentStatus::parse(&self.status).ok_or_else(|| FetchError::UnknownStatus {
            document_id: self.id.clone(),
            status: self.status.clone(),
        })?;
        let document_type =
            DocumentType::parse(&self.document_type).ok_or_else(|| FetchError::UnknownType {
                document_id: self.id.clone(),
                document_type: self.document_type.clone(),
            })?;

        Ok(Document {
            id: self.id,
            document_type,
            status,
            project_name: self.project_name,
            vendor_name: self.vendor_name,
            created_at: self.created_at,
            line_items: self.line_items,
        })
    }
}

/// Pagination block supplied when the collaborator paginates server-side.
///
/// Accepts both naming dialects seen on the wire
/// (`totalPages`/`lastPage`, `totalItems`/`total`, `itemsPerPage`/`perPage`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalPagination {
    pub current_page: usize,
    #[serde(alias = "lastPage")]
    pub total_pages: usize,
    #[serde(alias = "total")]
    pub total_items: usize,
    #[serde(alias = "perPage")]
    pub items_per_page: usize,
    #[serde(default)]
    pub from: usize,
    #[serde(default)]
    pub to: usize,
}

impl ExternalPagination {
    /// Verifies the block is internally consistent with the delivered
    /// items before it is rendered verbatim: `to - from + 1` must equal
    /// the item count, or both must be 0 for an empty page.
    pub fn is_consistent(&self, items_len: usize) -> bool {
        if items_len == 0 {
            return self.from == 0 && self.to == 0;
        }
        self.from >= 1 && self.to >= self.from && self.to - self.from + 1 == items_len
    }

    /// Wraps already-paginated items in a [`Page`], bypassing the local
    /// pager and using this block's metadata verbatim.
    pub fn into_page<T>(self, items: Vec<T>) -> Page<T> {
        Page {
            items,
            page_number: self.current_page,
            page_size: self.items_per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
            from: self.from,
            to: self.to,
        }
    }
}

/// The collection shape consumed from the fetch collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentCollection {
    pub data: Vec<RawDocument>,
    #[serde(default)]
    pub pagination: Option<ExternalPagination>,
}

impl DocumentCollection {
    /// Parses a raw JSON payload from the collaborator.
    pub fn from_json(payload: &str) -> Result<Self, FetchError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Converts every row, dropping (and logging) rows whose status or
    /// type fall outside the closed models. Free-text labels are a
    /// badge-rendering fallback, never logic input.
    pub fn documents(self) -> Vec<Document> {
        self.data
            .into_iter()
            .filter_map(|raw| match raw.into_document() {
                Ok(doc) => Some(doc),
                Err(e) => {
                    log::warn!("Dropping document from fetch payload: {}", e);
                    None
                }
            })
            .collect()
    }
}
