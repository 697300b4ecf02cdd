use thiserror::Error;

use crate::document::DocumentStatus;
use crate::workflow::{Action, Role};

#[derive(Error, Debug)]
pub enum BapflowError {
    #[error("Workflow error: {0}")]
    Action(#[from] ActionError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Document error: {0}")]
    LineItems(#[from] LineItemsFrozen),
}

/// A user-triggered action the core refused.
///
/// Both local variants are recoverable: the document keeps its current
/// status and the view may prompt the user again.
#[derive(Error, Debug, PartialEq)]
pub enum ActionError {
    #[error("document '{document_id}' cannot move from {from} to {attempted}")]
    InvalidTransition {
        document_id: String,
        from: DocumentStatus,
        attempted: DocumentStatus,
    },

    #[error("{role} may not {action} a document in status {status}")]
    Forbidden {
        role: Role,
        action: Action,
        status: DocumentStatus,
    },

    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Failure reported by the external persistence collaborator.
#[derive(Error, Debug, PartialEq)]
#[error("persistence collaborator failed: {0}")]
pub struct PersistError(pub String);

/// A fetch payload row or envelope the core cannot narrow.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("document '{document_id}' carries unknown status '{status}'")]
    UnknownStatus {
        document_id: String,
        status: String,
    },

    #[error("document '{document_id}' carries unknown type '{document_type}'")]
    UnknownType {
        document_id: String,
        document_type: String,
    },

    #[error("malformed fetch payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Failure reported by the external notification-preference store.
#[derive(Error, Debug, PartialEq)]
#[error("preference store unavailable: {0}")]
pub struct PrefStoreError(pub String);

/// Attempted line-item mutation after the document left draft.
#[derive(Error, Debug, PartialEq)]
#[error("line items of document '{document_id}' are frozen after submission")]
pub struct LineItemsFrozen {
    pub document_id: String,
}

pub type Result<T> = std::result::Result<T, BapflowError>;
