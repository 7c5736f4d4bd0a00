//! `backoffice-core` — shared kernel for the back-office engine.
//!
//! Holds the two contracts every collection-returning or mutating
//! operation shares: the listing contract (pagination + sort + search)
//! and the allow-list check for client-supplied update payloads.

pub mod fields;
pub mod listing;

pub use fields::disallowed_fields;
pub use listing::{DEFAULT_LIMIT, ListMeta, Listable, Listing, PageRequest, SortOrder, list};
