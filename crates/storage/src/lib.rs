//! Storage layer for Aurora
//!
//! This crate provides:
//! - Ledger: the append-only event log with point lookup and paged scans
//! - snapshot: JSON-lines export and replay-based rehydration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ledger;
pub mod snapshot;

pub use ledger::Ledger;
pub use snapshot::{read_snapshot, write_snapshot};
