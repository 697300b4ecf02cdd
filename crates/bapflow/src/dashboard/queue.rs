//! Review-queue projection — the actionable subset per role.
//!
//! Every role-specific dashboard table is a parameterization of this one
//! engine; the views no longer re-derive their own filtering.

use tracing::info_span;

use crate::document::{Document, DocumentStatus};
use crate::workflow::{Actor, Role};

/// Filters `documents` down to what `actor` must act on next.
///
/// Ordering is newest-first by `created_at`, with ascending `id` as the
/// tiebreak, so repeated calls over unchanged input return identical
/// sequences. The input is never mutated.
pub fn project(documents: &[Document], actor: &Actor) -> Vec<Document> {
    let _span = info_span!("dashboard.project", role = %actor.role).entered();

    let mut queue: Vec<Document> = documents
        .iter()
        .filter(|doc| is_actionable(doc, actor))
        .cloned()
        .collect();

    queue.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    queue
}

fn is_actionable(document: &Document, actor: &Actor) -> bool {
    match actor.role {
        // Rejected documents stay visible to their vendor so a fresh
        // submission can be started; drafts await submission.
        Role::Vendor => {
            matches!(
                document.status,
                DocumentStatus::Draft | DocumentStatus::Rejected
            ) && actor.owns(document)
        }
        // Reviewed documents have advanced past the warehouse queue.
        Role::PicGudang => document.status == DocumentStatus::Submitted,
        Role::Direksi => document.status == DocumentStatus::Reviewed,
    }
}
