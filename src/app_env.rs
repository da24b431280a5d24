use std::net::SocketAddr;

use anyhow::Context;

/// Log level configuration for the application. For formatting info, see [tracing_subscriber's documentation](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html)
pub const LOG_LEVEL: &str = "LOG_LEVEL";
/// Socket address the HTTP server binds to, e.g. "127.0.0.1:3000"
pub const LISTEN_ADDR: &str = "LISTEN_ADDR";
/// Set to "false" to start with an empty todo list instead of the two sample todos
pub const SEED_TODOS: &str = "SEED_TODOS";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Settings read from the environment at startup
#[derive(Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub seed_todos: bool,
}

impl AppConfig {
    /// Reads configuration from the process environment
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through [lookup], which returns the value of a variable if it is set
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, anyhow::Error> {
        let raw_addr = lookup(LISTEN_ADDR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let listen_addr = raw_addr
            .parse()
            .with_context(|| format!("{LISTEN_ADDR} is not a socket address: {raw_addr}"))?;

        let seed_todos = match lookup(SEED_TODOS) {
            None => true,
            Some(raw_flag) => raw_flag
                .parse()
                .with_context(|| format!("{SEED_TODOS} must be true or false, got {raw_flag}"))?,
        };

        Ok(AppConfig {
            listen_addr,
            seed_todos,
        })
    }
}
