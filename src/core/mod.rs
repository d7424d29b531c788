//! Core business logic - framework-agnostic queries and claim mutations.
//!
//! Nothing in here knows about Discord; every function takes a
//! [`connection::ConnectionSource`] and returns plain data.

/// Claim create/read/update/delete and form choices
pub mod claim;
/// Per-call connection acquisition
pub mod connection;
/// Full listing retrieval and client-side filters
pub mod listing;
/// Report catalog and tabular results
pub mod report;

pub use connection::ConnectionSource;
pub use report::{Cell, Report, Table};
