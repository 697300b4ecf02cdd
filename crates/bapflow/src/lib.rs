pub mod dashboard;
pub mod document;
pub mod error;
pub mod fetch;
pub mod notify;
pub mod workflow;

pub use dashboard::{
    aggregate, aggregate_by_type, first_page, last_page, next_page, paginate, prev_page, project,
    Page, StatsSnapshot, TypeStat,
};
pub use document::{Document, DocumentStatus, DocumentType, LineItem, ALL_STATUSES};
pub use error::{
    ActionError, BapflowError, FetchError, LineItemsFrozen, PersistError, PrefStoreError, Result,
};
pub use fetch::{DocumentCollection, ExternalPagination, RawDocument};
pub use notify::{NotificationPrefs, PrefCache, PrefStore};
pub use workflow::{
    allowed_actions, apply_action, can_act, Action, Actor, Role, StatusPersister, DOCUMENT_ACTIONS,
};
