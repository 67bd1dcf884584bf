// portal/src/lib.rs
//
// The data-shaping core of the patient portal: pure section formatters
// over one fetched document, the social-history section router, the
// aggregation shapes the pages are built from, and the thin identity
// layer (resolver + authenticator) in front of the record store.

pub mod aggregate;
pub mod auth;
pub mod errors;
pub mod resolve;
pub mod sections;
pub mod social;
pub mod store;

pub use errors::PortalError;
pub use store::{MemoryRecordStore, RecordStore, SledRecordStore, StoreError};
