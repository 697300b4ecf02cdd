//! Builder patterns for creating test data programmatically.

#![allow(dead_code)]

use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};

use bapflow::{Document, DocumentStatus, DocumentType, LineItem, PersistError, StatusPersister};

/// Fixed reference instant so ordering assertions are deterministic.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap()
}

/// Builder for creating `Document` instances.
pub struct DocumentBuilder {
    id: String,
    document_type: DocumentType,
    status: DocumentStatus,
    project_name: String,
    vendor_name: String,
    created_at: DateTime<Utc>,
    line_items: Vec<LineItem>,
}

impl DocumentBuilder {
    /// Create a new builder with sensible defaults for testing.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            document_type: DocumentType::Bapp,
            status: DocumentStatus::Draft,
            project_name: "Gudang Cikarang".to_string(),
            vendor_name: "PT Maju Jaya".to_string(),
            created_at: base_time(),
            line_items: vec![],
        }
    }

    pub fn document_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = document_type;
        self
    }

    pub fn status(mut self, status: DocumentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn project(mut self, name: &str) -> Self {
        self.project_name = name.to_string();
        self
    }

    pub fn vendor(mut self, name: &str) -> Self {
        self.vendor_name = name.to_string();
        self
    }

    /// Shift creation time before the shared base instant.
    pub fn minutes_before_base(mut self, minutes: i64) -> Self {
        self.created_at = base_time() - Duration::minutes(minutes);
        self
    }

    pub fn line_item(mut self, description: &str, quantity: u32) -> Self {
        self.line_items.push(LineItem {
            description: description.to_string(),
            quantity,
            unit: None,
        });
        self
    }

    pub fn build(self) -> Document {
        Document {
            id: self.id,
            document_type: self.document_type,
            status: self.status,
            project_name: self.project_name,
            vendor_name: self.vendor_name,
            created_at: self.created_at,
            line_items: self.line_items,
        }
    }
}

/// A mixed collection covering every status and both document types.
pub fn review_mix() -> Vec<Document> {
    vec![
        DocumentBuilder::new("d-01")
            .status(DocumentStatus::Draft)
            .minutes_before_base(10)
            .build(),
        DocumentBuilder::new("d-02")
            .status(DocumentStatus::Submitted)
            .minutes_before_base(20)
            .build(),
        DocumentBuilder::new("d-03")
            .document_type(DocumentType::Bapb)
            .status(DocumentStatus::Submitted)
            .vendor("PT Sumber Rejeki")
            .minutes_before_base(30)
            .build(),
        DocumentBuilder::new("d-04")
            .status(DocumentStatus::Reviewed)
            .minutes_before_base(40)
            .build(),
        DocumentBuilder::new("d-05")
            .document_type(DocumentType::Bapb)
            .status(DocumentStatus::Approved)
            .minutes_before_base(50)
            .build(),
        DocumentBuilder::new("d-06")
            .status(DocumentStatus::Rejected)
            .minutes_before_base(60)
            .build(),
    ]
}

/// Records every persisted document; never fails.
pub struct InMemoryPersister {
    pub persisted: Mutex<Vec<Document>>,
}

impl InMemoryPersister {
    pub fn new() -> Self {
        Self {
            persisted: Mutex::new(Vec::new()),
        }
    }

    pub fn last(&self) -> Option<Document> {
        self.persisted.lock().unwrap().last().cloned()
    }
}

impl Default for InMemoryPersister {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusPersister for InMemoryPersister {
    fn persist(&self, document: &Document) -> Result<(), PersistError> {
        self.persisted.lock().unwrap().push(document.clone());
        Ok(())
    }
}
