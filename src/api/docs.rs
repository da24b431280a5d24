use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Rust Todo API",
    description = "An in-memory to-do list API written in Rust"
))]
struct RootApi;

/// Assembles the OpenAPI document for the whole service, merging in the definitions
/// declared next to each group of routes
pub fn build_documentation() -> utoipa::openapi::OpenApi {
    let mut api_docs = RootApi::openapi();
    api_docs.merge(super::todo::TodoApi::openapi());

    api_docs
}

/// Serves the OpenAPI document as JSON at "/api-docs/openapi.json"
pub fn documentation_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let api_docs = build_documentation();
    Router::new().route(
        "/api-docs/openapi.json",
        get(move || {
            let api_docs = api_docs.clone();
            async move { Json(api_docs) }
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_todo_route() {
        let api_docs = build_documentation();
        let paths = &api_docs.paths.paths;

        assert!(paths.contains_key("/todos"));
        assert!(paths.contains_key("/todos/{todo_id}"));
        assert!(
            api_docs
                .components
                .as_ref()
                .is_some_and(|components| components.schemas.contains_key("TodoItem"))
        );
    }
}
