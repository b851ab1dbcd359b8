//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::types::{Todo, TodoId, TodoPatch};
use crate::{Error, Result};

/// Standard success wrapper shared by every data-bearing response.
///
/// Failures serialize as `{ "success": false, "message": ... }` via the
/// [`IntoResponse`] impl on [`Error`] below.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
            message: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::TextRequired => StatusCode::BAD_REQUEST,
            Error::TodoNotFound | Error::RouteNotFound => StatusCode::NOT_FOUND,
            Error::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(serde_json::json!({
            "success": false,
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

/// Health check with process status
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        environment: state.environment().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.uptime_secs(),
        port: state.port(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub environment: String,
    pub version: String,
    pub uptime: f64,
    pub port: u16,
}

/// List the full collection in insertion order
pub async fn list_todos(State(state): State<AppState>) -> Json<Envelope<Vec<Todo>>> {
    let todos = state.store.list().await;
    let count = todos.len();
    Json(Envelope::data(todos).with_count(count))
}

/// Fetch a single todo by id
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Todo>>> {
    let todo = state.store.get(parse_id(&id)?).await?;
    Ok(Json(Envelope::data(todo)))
}

/// Create a new todo
pub async fn create_todo(
    State(state): State<AppState>,
    Json(payload): Json<CreateTodoPayload>,
) -> Result<(StatusCode, Json<Envelope<Todo>>)> {
    let text = payload.text.ok_or(Error::TextRequired)?;
    let todo = state.store.create(&text).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(todo).with_message("Todo created successfully")),
    ))
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoPayload {
    #[serde(default)]
    pub text: Option<String>,
}

/// Apply a partial update to an existing todo
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<Envelope<Todo>>> {
    let todo = state.store.update(parse_id(&id)?, patch).await?;
    Ok(Json(Envelope::data(todo).with_message("Todo updated successfully")))
}

/// Remove a todo, answering with its prior field values
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Todo>>> {
    let todo = state.store.delete(parse_id(&id)?).await?;
    Ok(Json(Envelope::data(todo).with_message("Todo deleted successfully")))
}

/// Any unmatched method/path
pub async fn fallback() -> Error {
    Error::RouteNotFound
}

/// Panic boundary: convert an escaped panic into the generic 500 envelope.
/// The payload is logged server-side and never reaches the caller.
pub(crate) fn panic_response(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "non-string panic payload".to_string()
    };

    Error::internal(detail).into_response()
}

// A non-numeric segment never equals a stored id; fold the parse failure
// into the not-found path.
fn parse_id(segment: &str) -> Result<TodoId> {
    segment.parse().map_err(|_| Error::TodoNotFound)
}
