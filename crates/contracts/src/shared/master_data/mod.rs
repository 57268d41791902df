//! Generic master-data resource
//!
//! One `MasterResource<F, ..>` per reference table: a cached, ordered list
//! plus create/update/delete that invalidate the list on success and report
//! the outcome through a `Notifier`. Storage is reached only through the
//! `TableClient` collaborator trait.

pub mod cache;
pub mod client;
pub mod error;
pub mod load_state;
pub mod notify;
pub mod resource;
pub mod submit_state;

#[cfg(test)]
pub(crate) mod testing;

pub use cache::QueryCache;
pub use client::TableClient;
pub use error::MasterDataError;
pub use load_state::LoadState;
pub use notify::{Notification, Notifier, Severity};
pub use resource::MasterResource;
pub use submit_state::SubmitState;

/// Column every list is ordered by
pub const SORT_KEY: &str = "sort_order";
