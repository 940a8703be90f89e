//! cardfile-core — validated contact records.
//!
//! This crate holds the domain core of cardfile: the record types, the
//! draft validator, the append-only record store, and the query engine that
//! drives the All / Domestic / International list view.
//!
//! # Architecture
//!
//! ```text
//! Draft ──► Validator ──► Store ──► Query ──► UI
//! ```
//!
//! Everything is synchronous. A draft that passes validation becomes an
//! immutable [`Record`] and is appended to the [`RecordStore`]; the UI reads
//! filtered snapshots through the [`QueryEngine`] and never mutates records.

pub mod config;
pub mod query;
pub mod store;
pub mod types;
pub mod validate;

pub use query::{QueryEngine, Tab};
pub use store::RecordStore;
pub use types::{AddressEntry, Draft, PhoneEntry, Record};
pub use validate::{validate, FieldError, FieldPath, ValidationErrors};
