//! Applies user-triggered workflow actions.
//!
//! Every inbound action is validated twice — permission gate first, status
//! model second — before the updated document is handed to the external
//! persistence collaborator. On any failure the caller's document is
//! untouched, so the view keeps rendering the current state.

use tracing::debug;

use crate::document::Document;
use crate::error::{ActionError, PersistError};

use super::gate::{can_act, Action, Role};

/// The acting session: a role plus the vendor identity it acts for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub role: Role,
    /// Vendor name for ownership checks; `None` for internal roles.
    pub vendor_name: Option<String>,
}

impl Actor {
    pub fn vendor(name: impl Into<String>) -> Self {
        Self {
            role: Role::Vendor,
            vendor_name: Some(name.into()),
        }
    }

    pub fn pic_gudang() -> Self {
        Self {
            role: Role::PicGudang,
            vendor_name: None,
        }
    }

    pub fn direksi() -> Self {
        Self {
            role: Role::Direksi,
            vendor_name: None,
        }
    }

    /// Vendors only act on (and see) their own documents; internal roles
    /// are not scoped by vendor.
    pub fn owns(&self, document: &Document) -> bool {
        match self.role {
            Role::Vendor => self.vendor_name.as_deref() == Some(document.vendor_name.as_str()),
            Role::PicGudang | Role::Direksi => true,
        }
    }
}

/// External persistence collaborator. The core validates and computes the
/// updated document; storing it is not this crate's concern.
pub trait StatusPersister {
    fn persist(&self, document: &Document) -> Result<(), PersistError>;
}

/// Validates `action` against the permission gate and the status model,
/// then hands the updated document to the persistence collaborator.
pub fn apply_action<P: StatusPersister>(
    document: &Document,
    actor: &Actor,
    action: Action,
    persister: &P,
) -> Result<Document, ActionError> {
    if !actor.owns(document) || !can_act(actor.role, Some(document.status), action) {
        debug!(
            role = %actor.role,
            action = %action,
            status = %document.status,
            document_id = %document.id,
            "action denied"
        );
        return Err(ActionError::Forbidden {
            role: actor.role,
            action,
            status: document.status,
        });
    }

    let updated = document.transition_to(action.target_status())?;
    persister.persist(&updated)?;
    Ok(updated)
}
