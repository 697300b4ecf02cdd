//! Document data model: records, types, and the status lifecycle.

pub mod status;
pub mod types;

pub use status::{DocumentStatus, ALL_STATUSES};
pub use types::{Document, DocumentType, LineItem};
