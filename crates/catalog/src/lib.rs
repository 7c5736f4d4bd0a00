//! `backoffice-catalog` — the reference-code catalog.
//!
//! Code types group codes (e.g. the `LANGUAGE` type holding `EN`,
//! `NL`, `FR`). Codes are soft-retired by deprecation rather than
//! deleted, so existing references stay resolvable.

pub mod code;
pub mod error;
pub mod service;
pub mod store;

pub use code::{CODE_MUTABLE_FIELDS, Code, CodeId, CodeType, CodeTypeId, CodeUpdate, NewCode};
pub use error::CatalogError;
pub use service::CodeCatalog;
pub use store::CatalogStore;
