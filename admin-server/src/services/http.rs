use std::time::{Duration, Instant};

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

use crate::core::ServerState;
use crate::utils::AppError;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::warn!(target: "http_access", latency_ms, "{} {} {}", method, uri, status);
    } else {
        tracing::info!(target: "http_access", latency_ms, "{} {} {}", method, uri, status);
    }

    response
}

/// Unknown routes answer with the JSON error envelope
async fn fallback(uri: http::Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Route groups without state
pub fn routes() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::employees::router())
        .merge(crate::api::menu::router())
        .merge(crate::api::tables::router())
        .merge(crate::api::branches::router())
        .fallback(fallback)
}

/// Build the full application router for `state`
pub fn build_app(state: ServerState) -> Router {
    let request_timeout = Duration::from_millis(state.config.request_timeout_ms);

    routes()
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}
