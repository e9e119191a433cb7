//! Stats crate: durable message/translation counters with atomic persistence.
//!
//! ## Modules
//!
//! - [`error`] – Stats error types
//! - [`snapshot`] – StatsSnapshot, the persisted JSON shape
//! - [`store`] – StatsStore: load, record, query, persist

mod error;
mod snapshot;
mod store;

#[cfg(test)]
mod store_test;

pub use error::StatsError;
pub use snapshot::{DailyBucket, StatsSnapshot};
pub use store::StatsStore;
