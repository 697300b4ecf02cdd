//! Permission gate — which role may take which action in which status.
//!
//! `can_act` is a pure, total decision table: every (role, status, action)
//! triple has an answer, and the answer for anything not listed is `false`.
//! Callers use the boolean to decide whether to expose an action; denial is
//! never an error here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::DocumentStatus;

/// Dashboard role attached to the acting session, never to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Vendor,
    PicGudang,
    Direksi,
}

impl Role {
    /// Display label for the role switcher and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Role::Vendor => "Vendor",
            Role::PicGudang => "PIC Gudang",
            Role::Direksi => "Direksi",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User-triggered workflow action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Start a new document. Only meaningful when none exists yet.
    Create,
    Submit,
    Review,
    Approve,
    Reject,
}

/// Document-bound actions, in the order views render their buttons.
/// `Create` is excluded: it concerns an absent document.
pub const DOCUMENT_ACTIONS: &[Action] = &[
    Action::Submit,
    Action::Review,
    Action::Approve,
    Action::Reject,
];

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Submit => "submit",
            Action::Review => "review",
            Action::Approve => "approve",
            Action::Reject => "reject",
        }
    }

    /// The status an accepted action moves the document into.
    /// `Create` has no source document and maps to the initial draft.
    pub fn target_status(self) -> DocumentStatus {
        match self {
            Action::Create => DocumentStatus::Draft,
            Action::Submit => DocumentStatus::Submitted,
            Action::Review => DocumentStatus::Reviewed,
            Action::Approve => DocumentStatus::Approved,
            Action::Reject => DocumentStatus::Rejected,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides whether `role` may perform `action` on a document currently in
/// `status`. `None` means no document exists yet for the intent; the only
/// triple allowed there is vendor creation.
///
/// Ownership is not a gate concern — see `workflow::Actor::owns`.
pub fn can_act(role: Role, status: Option<DocumentStatus>, action: Action) -> bool {
    use DocumentStatus::*;

    match (role, status, action) {
        (Role::Vendor, None, Action::Create) => true,
        (Role::Vendor, Some(Draft), Action::Submit) => true,
        (Role::PicGudang, Some(Submitted), Action::Review) => true,
        (Role::PicGudang, Some(Submitted), Action::Reject) => true,
        (Role::PicGudang, Some(Reviewed), Action::Reject) => true,
        (Role::Direksi, Some(Reviewed), Action::Approve) => true,
        (Role::Direksi, Some(Reviewed), Action::Reject) => true,
        _ => false,
    }
}

/// Enumerates the document actions `role` may currently take, so views can
/// render exactly the buttons the gate would accept.
pub fn allowed_actions(role: Role, status: DocumentStatus) -> Vec<Action> {
    DOCUMENT_ACTIONS
        .iter()
        .copied()
        .filter(|&action| can_act(role, Some(status), action))
        .collect()
}
