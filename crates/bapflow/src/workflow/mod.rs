//! Workflow rules: who may do what, and how actions are applied.

pub mod dispatch;
pub mod gate;

pub use dispatch::{apply_action, Actor, StatusPersister};
pub use gate::{allowed_actions, can_act, Action, Role, DOCUMENT_ACTIONS};
