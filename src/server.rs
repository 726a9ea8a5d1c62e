//! HTTP server: route table, error fallbacks and the listener loop.

use crate::config::Config;
use crate::dataset::DatasetCache;
use crate::diagnostics::handlers::handle_stats;
use crate::error::{ApiError, MSG_INTERNAL_ERROR, MSG_METHOD_NOT_ALLOWED, MSG_PAGE_NOT_FOUND};
use crate::lookup::handlers::handle_get_address;
use crate::search::handlers::handle_search;
use axum::response::{Html, IntoResponse, Response};
use axum::{routing::get, Extension, Router};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Builds the full application router over `cache`.
pub fn router(cache: Arc<DatasetCache>) -> Router {
    let routes = Router::new()
        .route("/", get(handle_index).fallback(handle_method_not_allowed))
        .route("/search", get(handle_search).fallback(handle_method_not_allowed))
        .route(
            "/address/:houseguid",
            get(handle_get_address).fallback(handle_method_not_allowed),
        )
        .route("/stats", get(handle_stats).fallback(handle_method_not_allowed))
        .fallback(handle_not_found);

    with_layers(routes, cache)
}

fn with_layers(routes: Router, cache: Arc<DatasetCache>) -> Router {
    routes
        .layer(Extension(cache))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Binds `config.bind` and serves until Ctrl-C or SIGTERM.
pub async fn serve(config: &Config, cache: Arc<DatasetCache>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("HTTP server listening on {}", config.bind);

    axum::serve(listener, router(cache))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn handle_index() -> Html<&'static str> {
    Html(include_str!("assets/index.html"))
}

async fn handle_not_found() -> ApiError {
    ApiError::not_found(MSG_PAGE_NOT_FOUND)
}

async fn handle_method_not_allowed() -> ApiError {
    ApiError::method_not_allowed(MSG_METHOD_NOT_ALLOWED)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "Request handler panicked");
    ApiError::internal(MSG_INTERNAL_ERROR).into_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
