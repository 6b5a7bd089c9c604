//! Core types for Aurora
//!
//! This crate defines the shared vocabulary of the store:
//! - Event: the single immutable record kind stored in the ledger
//! - EventId / Tag: the two roles of the shared identifier space
//! - meta: the built-in meta-event ids
//! - AuroraError: the error taxonomy
//! - AuroraConfig: store options

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod event;
pub mod meta;

pub use config::AuroraConfig;
pub use error::{AuroraError, AuroraResult};
pub use event::{Event, EventId, Tag};
