//! `backoffice-infra` — adapter implementations of the domain ports.
//!
//! In-memory stores back the API in dev and test runs; the notifier
//! adapters cover structured-log delivery (dev) and in-process
//! recording (tests).

pub mod in_memory;
pub mod notify;

#[cfg(test)]
mod integration_tests;

pub use in_memory::{InMemoryCatalogStore, InMemoryUserStore};
pub use notify::{LogNotifier, RecordingNotifier};
