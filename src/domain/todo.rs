use crate::domain::todo::driven_ports::TodoStore;
use crate::domain::todo::driving_ports::TodoError;
use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// A single item on the todo list. Todos are never edited in place; they are only
/// added and removed. Ids come from the client and are not guaranteed to be unique.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Todo {
    pub id: i32,
    pub name: String,
    pub due_date: DateTime<Utc>,
    pub is_completed: bool,
}

/// The todos a fresh server starts with, due one and two weeks after [now]
pub fn seed_todos(now: DateTime<Utc>) -> Vec<Todo> {
    vec![
        Todo {
            id: 1,
            name: "Learn ASP.NET Core".to_owned(),
            due_date: now + Duration::days(7),
            is_completed: false,
        },
        Todo {
            id: 2,
            name: "Build a web app".to_owned(),
            due_date: now + Duration::days(14),
            is_completed: false,
        },
    ]
}

pub mod driven_ports {
    use super::*;

    /// Owns the canonical, insertion-ordered collection of todos
    pub trait TodoStore {
        /// Snapshot of every todo in insertion order
        async fn list(&self) -> Result<Vec<Todo>, anyhow::Error>;
        /// The first todo with the given id, if any
        async fn get_by_id(&self, id: i32) -> Result<Option<Todo>, anyhow::Error>;
        async fn add(&self, todo: Todo) -> Result<Todo, anyhow::Error>;
        /// Removes every todo with the given id. Matching nothing is not an error.
        async fn delete_by_id(&self, id: i32) -> Result<(), anyhow::Error>;
    }
}

pub mod driving_ports {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum TodoError {
        #[error("todo {0} does not exist")]
        DoesNotExist(i32),
        #[error(transparent)]
        PortError(#[from] anyhow::Error),
    }


    pub trait TodoPort {
        async fn list_todos(&self, store: &impl TodoStore) -> Result<Vec<Todo>, TodoError>;
        async fn todo_by_id(
            &self,
            id: i32,
            store: &impl TodoStore,
        ) -> Result<Option<Todo>, TodoError>;
        async fn create_todo(&self, todo: Todo, store: &impl TodoStore)
        -> Result<Todo, TodoError>;
        async fn delete_todo(&self, id: i32, store: &impl TodoStore) -> Result<(), TodoError>;
    }
}

pub struct TodoService {}

impl driving_ports::TodoPort for TodoService {
    async fn list_todos(&self, store: &impl TodoStore) -> Result<Vec<Todo>, TodoError> {
        let todos = store.list().await.context("listing todos")?;
        Ok(todos)
    }

    async fn todo_by_id(&self, id: i32, store: &impl TodoStore) -> Result<Option<Todo>, TodoError> {
        let todo = store
            .get_by_id(id)
            .await
            .with_context(|| format!("looking up todo {id}"))?;
        Ok(todo)
    }

    async fn create_todo(&self, todo: Todo, store: &impl TodoStore) -> Result<Todo, TodoError> {
        let created = store.add(todo).await.context("adding a todo")?;
        Ok(created)
    }

    async fn delete_todo(&self, id: i32, store: &impl TodoStore) -> Result<(), TodoError> {
        let existing = store
            .get_by_id(id)
            .await
            .with_context(|| format!("looking up todo {id} before deleting it"))?;
        if existing.is_none() {
            debug!("Todo {id} was not present, nothing to delete");
            return Err(TodoError::DoesNotExist(id));
        }

        store
            .delete_by_id(id)
            .await
            .with_context(|| format!("deleting todo {id}"))?;
        Ok(())
    }
}
