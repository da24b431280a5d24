use std::sync::Arc;

use axum::Router;
use axum::extract::State;

pub mod api;
pub mod app_env;
pub mod domain;
pub mod dto;
pub mod logging;
pub mod persistence;
pub mod routing_utils;

/// Data shared by every request handler for the lifetime of the server
pub struct SharedData {
    pub todo_store: persistence::InMemoryTodoStore,
}

/// Shorthand for the state extractor every handler uses
pub type AppState = State<Arc<SharedData>>;

/// Builds the complete application: todo routes, API documentation and request logging
pub fn build_app(shared_data: Arc<SharedData>) -> Router {
    let router = Router::new()
        .merge(api::todo::todo_routes())
        .merge(api::docs::documentation_routes())
        .with_state(shared_data);

    logging::attach_tracing_http(router)
}
