use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use dotenv::dotenv;
use todo_rest::app_env::AppConfig;
use todo_rest::persistence::InMemoryTodoStore;
use todo_rest::{SharedData, build_app, domain, logging};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let dotenv_loaded = dotenv().is_ok();
    logging::setup_logging(logging::init_env_filter()?);
    if !dotenv_loaded {
        info!("No .env file found, reading configuration from the environment only");
    }

    let config = AppConfig::from_env()?;
    let todo_store = if config.seed_todos {
        InMemoryTodoStore::with_todos(domain::todo::seed_todos(Utc::now()))
    } else {
        InMemoryTodoStore::new()
    };
    let app = build_app(Arc::new(SharedData { todo_store }));

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding to {}", config.listen_addr))?;
    info!("Starting server on {}", config.listen_addr);
    axum::serve(listener, app)
        .await
        .context("serving HTTP requests")?;

    Ok(())
}
