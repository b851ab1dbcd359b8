//! todo-api - A demonstration REST backend over an in-memory todo collection
//!
//! todo-api exposes a small CRUD surface plus a health probe:
//! - List, fetch, create, update and delete todo records
//! - A single process-wide collection, no persistence
//! - Uniform success/failure response envelopes
//! - Simple HTTP API

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
