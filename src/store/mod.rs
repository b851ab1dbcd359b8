//! Todo collection management
//!
//! `TodoStore` owns the process-wide collection and is the only code that
//! touches it. Every operation takes the lock for its full read-modify-write,
//! so each call is atomic with respect to concurrent requests.

use tokio::sync::RwLock;

use crate::types::{Todo, TodoId, TodoPatch};
use crate::{Error, Result};

/// The process-wide ordered collection of todo records.
pub struct TodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl TodoStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            todos: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with the demo records served at startup
    pub fn with_seed_data() -> Self {
        Self {
            todos: RwLock::new(vec![
                Todo {
                    id: 1,
                    text: "Learn axum".to_string(),
                    completed: false,
                },
                Todo {
                    id: 2,
                    text: "Wire up the frontend".to_string(),
                    completed: true,
                },
                Todo {
                    id: 3,
                    text: "Ship the backend API".to_string(),
                    completed: false,
                },
            ]),
        }
    }

    /// Full collection in insertion order
    pub async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    /// Number of records currently stored
    pub async fn count(&self) -> usize {
        self.todos.read().await.len()
    }

    /// Look up a todo by id
    pub async fn get(&self, id: TodoId) -> Result<Todo> {
        self.todos
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(Error::TodoNotFound)
    }

    /// Append a new todo with a freshly assigned id.
    ///
    /// Ids are assigned as `max(current ids) + 1` (1 for an empty
    /// collection). Deleting the highest-id record frees its id for the
    /// next creation; lower freed ids are never reused.
    pub async fn create(&self, text: &str) -> Result<Todo> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::TextRequired);
        }

        let mut todos = self.todos.write().await;
        let id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let todo = Todo {
            id,
            text: text.to_string(),
            completed: false,
        };
        todos.push(todo.clone());
        Ok(todo)
    }

    /// Apply a partial update to an existing todo, returning the new state
    pub async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::TodoNotFound)?;

        if let Some(text) = patch.text {
            todo.text = text.trim().to_string();
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }

        Ok(todo.clone())
    }

    /// Remove a todo by id, returning its prior field values.
    ///
    /// Relative order of the remaining records is preserved.
    pub async fn delete(&self, id: TodoId) -> Result<Todo> {
        let mut todos = self.todos.write().await;
        let index = todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::TodoNotFound)?;
        Ok(todos.remove(index))
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_max_plus_one() {
        let store = TodoStore::new();

        let first = store.create("first").await.unwrap();
        assert_eq!(first.id, 1);
        assert!(!first.completed);

        let second = store.create("second").await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_trims_text() {
        let store = TodoStore::new();

        let todo = store.create("  padded  ").await.unwrap();
        assert_eq!(todo.text, "padded");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_text() {
        let store = TodoStore::new();

        assert!(matches!(
            store.create("").await,
            Err(Error::TextRequired)
        ));
        assert!(matches!(
            store.create("   ").await,
            Err(Error::TextRequired)
        ));
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn test_delete_max_id_frees_it_for_reuse() {
        // Seed ids are {1, 2, 3}; deleting 3 and creating again must
        // hand the freed id back out.
        let store = TodoStore::with_seed_data();

        store.delete(3).await.unwrap();
        let todo = store.create("A").await.unwrap();
        assert_eq!(todo.id, 3);

        // Deleting a lower id does not affect assignment
        store.delete(1).await.unwrap();
        let todo = store.create("B").await.unwrap();
        assert_eq!(todo.id, 4);
    }

    #[tokio::test]
    async fn test_update_applies_only_present_fields() {
        let store = TodoStore::with_seed_data();

        let updated = store
            .update(
                1,
                TodoPatch {
                    text: None,
                    completed: Some(true),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.text, "Learn axum");
        assert!(updated.completed);

        let updated = store
            .update(
                1,
                TodoPatch {
                    text: Some("  renamed ".to_string()),
                    completed: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.text, "renamed");
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_update_with_empty_patch_is_noop() {
        let store = TodoStore::with_seed_data();

        let before = store.get(2).await.unwrap();
        let after = store.update(2, TodoPatch::default()).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_update_applies_empty_text() {
        // Only creation validates text presence; an explicit empty string
        // on update is stored as-is.
        let store = TodoStore::with_seed_data();

        let updated = store
            .update(
                1,
                TodoPatch {
                    text: Some("   ".to_string()),
                    completed: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.text, "");
    }

    #[tokio::test]
    async fn test_delete_preserves_order_of_rest() {
        let store = TodoStore::with_seed_data();

        let removed = store.delete(2).await.unwrap();
        assert_eq!(removed.text, "Wire up the frontend");
        assert!(removed.completed);

        let remaining: Vec<TodoId> = store.list().await.iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_unknown_id_does_not_mutate() {
        let store = TodoStore::with_seed_data();

        assert!(matches!(store.get(99).await, Err(Error::TodoNotFound)));
        assert!(matches!(
            store.update(99, TodoPatch::default()).await,
            Err(Error::TodoNotFound)
        ));
        assert!(matches!(store.delete(99).await, Err(Error::TodoNotFound)));
        assert_eq!(store.count().await, 3);
    }
}
