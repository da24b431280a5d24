//! Driven adapters which back the domain's ports.

pub mod in_memory_todo_store;

pub use in_memory_todo_store::InMemoryTodoStore;
