use crate::domain::todo::driven_ports::TodoStore;
use crate::domain::todo::driving_ports::TodoPort;
use crate::routing_utils::{BasicErrorResponse, Json, TodoErrorResponse, ValidatedJson};
use crate::{AppState, SharedData, domain, dto};
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderName, StatusCode, header};
use axum::response::ErrorResponse;
use axum::routing::get;
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(list_todos, get_todo, create_todo, delete_todo),
    components(schemas(dto::TodoItem, dto::NewTodo, BasicErrorResponse))
)]
/// Defines the OpenAPI documentation for the todo API
pub struct TodoApi;

/// Builds the router for everything under "/todos"
pub fn todo_routes() -> Router<Arc<SharedData>> {
    Router::new()
        .route(
            "/todos",
            get(|State(app_state): AppState| async move {
                let todo_service = domain::todo::TodoService {};

                list_todos(&app_state.todo_store, &todo_service).await
            })
            .post(
                |State(app_state): AppState,
                 ValidatedJson(new_todo): ValidatedJson<dto::NewTodo>| async move {
                    let todo_service = domain::todo::TodoService {};

                    create_todo(new_todo, &app_state.todo_store, &todo_service).await
                },
            ),
        )
        .route(
            "/todos/:todo_id",
            get(
                |State(app_state): AppState, Path(todo_id): Path<i32>| async move {
                    let todo_service = domain::todo::TodoService {};

                    get_todo(todo_id, &app_state.todo_store, &todo_service).await
                },
            )
            .delete(
                |State(app_state): AppState, Path(todo_id): Path<i32>| async move {
                    let todo_service = domain::todo::TodoService {};

                    delete_todo(todo_id, &app_state.todo_store, &todo_service).await
                },
            ),
        )
}

#[utoipa::path(
    get,
    path = "/todos",
    tag = "Todos",
    responses(
        (status = 200, description = "Every todo in the order it was added", body = [dto::TodoItem]),
        (status = 500, description = "The todo store could not be read", body = BasicErrorResponse),
    ),
)]
/// Lists every todo
async fn list_todos(
    store: &impl TodoStore,
    todo_service: &impl TodoPort,
) -> Result<Json<Vec<dto::TodoItem>>, ErrorResponse> {
    info!("Listing todos");
    let todos = todo_service
        .list_todos(store)
        .await
        .map_err(TodoErrorResponse::from)?;

    Ok(Json(todos.into_iter().map(dto::TodoItem::from).collect()))
}

#[utoipa::path(
    get,
    path = "/todos/{todo_id}",
    tag = "Todos",
    params(("todo_id" = i32, Path, description = "Id of the todo to fetch")),
    responses(
        (status = 200, description = "The first todo with the requested id", body = dto::TodoItem),
        (status = 404, description = "No todo has the requested id"),
        (status = 500, description = "The todo store could not be read", body = BasicErrorResponse),
    ),
)]
/// Fetches a single todo
async fn get_todo(
    todo_id: i32,
    store: &impl TodoStore,
    todo_service: &impl TodoPort,
) -> Result<Json<dto::TodoItem>, ErrorResponse> {
    info!("Fetching todo {todo_id}");
    let todo = todo_service
        .todo_by_id(todo_id, store)
        .await
        .map_err(TodoErrorResponse::from)?;

    match todo {
        Some(found) => Ok(Json(dto::TodoItem::from(found))),
        None => Err(StatusCode::NOT_FOUND.into()),
    }
}

#[utoipa::path(
    post,
    path = "/todos",
    tag = "Todos",
    request_body = dto::NewTodo,
    responses(
        (status = 201, description = "The todo was stored", body = dto::TodoItem,
            headers(("Location" = String, description = "Path of the created todo"))),
        (status = 400, description = "Malformed JSON, or a map of field names to validation messages"),
        (status = 500, description = "The todo store could not be written", body = BasicErrorResponse),
    ),
)]
/// Adds a todo. By the time this runs the payload has already passed validation.
async fn create_todo(
    new_todo: dto::NewTodo,
    store: &impl TodoStore,
    todo_service: &impl TodoPort,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<dto::TodoItem>), ErrorResponse> {
    info!("Creating {new_todo}");
    let created = todo_service
        .create_todo(new_todo.into(), store)
        .await
        .map_err(TodoErrorResponse::from)?;

    let location = format!("/todos/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(dto::TodoItem::from(created)),
    ))
}

#[utoipa::path(
    delete,
    path = "/todos/{todo_id}",
    tag = "Todos",
    params(("todo_id" = i32, Path, description = "Id of the todos to delete")),
    responses(
        (status = 204, description = "Every todo with the requested id was removed"),
        (status = 404, description = "No todo has the requested id"),
        (status = 500, description = "The todo store could not be written", body = BasicErrorResponse),
    ),
)]
/// Deletes every todo with the given id
async fn delete_todo(
    todo_id: i32,
    store: &impl TodoStore,
    todo_service: &impl TodoPort,
) -> Result<StatusCode, ErrorResponse> {
    info!("Deleting todo {todo_id}");
    todo_service
        .delete_todo(todo_id, store)
        .await
        .map_err(TodoErrorResponse::from)?;

    Ok(StatusCode::NO_CONTENT)
}
