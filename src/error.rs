//! Error types for todo-api

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures produced by the service.
///
/// Display strings double as the client-facing `message` field, so they
/// must stay generic. `Internal` carries detail for server-side logging
/// that is never serialized into a response.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Text is required")]
    TextRequired,

    #[error("Todo not found")]
    TodoNotFound,

    #[error("Route not found")]
    RouteNotFound,

    #[error("Internal server error")]
    Internal(String),
}

impl Error {
    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }
}
