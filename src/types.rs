//! Core types for todo-api

use serde::{Deserialize, Serialize};

/// Todo ID type
pub type TodoId = i64;

/// Todo represents a single task record in the collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

/// Partial update applied to an existing todo.
///
/// Absent fields leave the record unchanged. A present-but-empty `text`
/// is applied as-is (only creation validates text presence).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}
