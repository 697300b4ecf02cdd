//! Derived dashboard views: queues, pages, and counters.
//!
//! Everything here is a pure computation over an immutable document
//! collection; nothing is persisted and every call stands alone.

pub mod pager;
pub mod queue;
pub mod stats;

pub use pager::{first_page, last_page, next_page, paginate, prev_page, Page};
pub use queue::project;
pub use stats::{aggregate, aggregate_by_type, StatsSnapshot, TypeStat};
