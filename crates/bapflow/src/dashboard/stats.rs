//! Dashboard counters reduced from a document collection.

use serde::Serialize;

use crate::document::{Document, DocumentStatus, DocumentType};

/// Counter snapshot behind the dashboard stat cards.
///
/// Always recomputed from scratch — there is no incremental update path,
/// so out-of-band document changes can never leave stale counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    /// Documents awaiting any downstream action (submitted or reviewed).
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}

/// Reduces `documents` into the dashboard counters.
///
/// Each document lands in at most one bucket; drafts are not counted.
pub fn aggregate(documents: &[Document]) -> StatsSnapshot {
    let mut snapshot = StatsSnapshot::default();
    for doc in documents {
        match doc.status {
            DocumentStatus::Submitted | DocumentStatus::Reviewed => snapshot.pending += 1,
            DocumentStatus::Approved => snapshot.approved += 1,
            DocumentStatus::Rejected => snapshot.rejected += 1,
            DocumentStatus::Draft => {}
        }
    }
    snapshot
}

/// Per-document-type aggregate for the BAPP/BAPB card groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStat {
    pub document_type: DocumentType,
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}

/// Reduces `documents` into one row per document type, BAPP first.
pub fn aggregate_by_type(documents: &[Document]) -> Vec<TypeStat> {
    [DocumentType::Bapp, DocumentType::Bapb]
        .into_iter()
        .map(|document_type| {
            let mut stat = TypeStat {
                document_type,
                total: 0,
                pending: 0,
                approved: 0,
                rejected: 0,
            };
            for doc in documents.iter().filter(|d| d.document_type == document_type) {
                stat.total += 1;
                match doc.status {
                    DocumentStatus::Submitted | DocumentStatus::Reviewed => stat.pending += 1,
                    DocumentStatus::Approved => stat.approved += 1,
                    DocumentStatus::Rejected => stat.rejected += 1,
                    DocumentStatus::Draft => {}
                }
            }
            stat
        })
        .collect()
}
