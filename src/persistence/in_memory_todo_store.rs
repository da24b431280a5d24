use crate::domain;
use crate::domain::todo::Todo;
use anyhow::Error;
use tokio::sync::RwLock;
use tracing::debug;

/// Process-local todo storage. Everything is lost when the server stops.
///
/// Reads share the lock and writes are exclusive, so concurrent requests never observe
/// a half-applied mutation.
#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding [todos] in the given order
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        InMemoryTodoStore {
            todos: RwLock::new(todos),
        }
    }
}

impl domain::todo::driven_ports::TodoStore for InMemoryTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, Error> {
        let todos = self.todos.read().await;
        Ok(todos.clone())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Todo>, Error> {
        let todos = self.todos.read().await;
        Ok(todos.iter().find(|todo| todo.id == id).cloned())
    }

    async fn add(&self, todo: Todo) -> Result<Todo, Error> {
        let mut todos = self.todos.write().await;
        todos.push(todo.clone());
        debug!(todo_count = todos.len(), "Stored todo {}", todo.id);

        Ok(todo)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), Error> {
        let mut todos = self.todos.write().await;
        let count_before = todos.len();
        todos.retain(|todo| todo.id != id);
        debug!(removed = count_before - todos.len(), "Deleted todo {id}");

        Ok(())
    }
}
