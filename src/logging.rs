use crate::app_env;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use chrono::{SecondsFormat, Utc};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing::{Span, field, info, info_span};
use tracing_subscriber::{EnvFilter, prelude::*, registry};

/// Attaches the request logging layer to the given router. Every request gets a span carrying
/// its method and path, one log line when it arrives and one once the response is ready.
/// The layer wraps the whole router, so rejected requests and unknown routes are logged too.
pub fn attach_tracing_http<T>(router: Router<T>) -> Router<T>
where
    T: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new().layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    info_span!(
                        "request",
                        method = request.method().as_str(),
                        path = request.uri().path(),
                        response_status = field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!(
                        method = request.method().as_str(),
                        path = request.uri().path(),
                        started_at = %now_timestamp(),
                        "request received"
                    );
                })
                .on_response(
                    |response: &Response<Body>, latency: Duration, span: &Span| {
                        span.record("response_status", field::display(response.status()));
                        info!(
                            status = response.status().as_u16(),
                            finished_at = %now_timestamp(),
                            latency_ms = latency.as_millis() as u64,
                            "request processing complete"
                        );
                    },
                ),
        ),
    )
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Constructs a filter which uses [app_env::LOG_LEVEL] to configure per-module logging. Filters
/// to the "info" level by default.
pub fn init_env_filter() -> Result<EnvFilter, anyhow::Error> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(app_env::LOG_LEVEL)
        .from_env()?;

    Ok(filter)
}

/// Sets up the global logging sink: JSON lines on stdout, filtered by [env_filter]. Libraries
/// still logging through the "log" crate are bridged in as well.
pub fn setup_logging(env_filter: EnvFilter) {
    registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_filter(env_filter),
        )
        .init();
}
