//! HTTP API server for the guitar practice app.
//!
//! Exposes a single liveness route, `GET /ping`, behind request tracing and
//! panic recovery. Everything else answers 404.

pub mod config;
pub mod error;
pub mod routes;

use std::any::Any;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use config::Config;
use error::{ApiError, ServerError};

/// Creates the Axum application router.
pub fn create_app() -> Router {
    with_middleware(Router::new().route("/ping", get(routes::ping::ping)))
}

/// Adds the not-found fallbacks, panic recovery and request tracing.
///
/// Must run after every route is registered: a known path hit with an
/// unsupported method answers 404, same as an unknown path.
fn with_middleware(router: Router) -> Router {
    router
        .method_not_allowed_fallback(routes::fallback)
        .fallback(routes::fallback)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "handler panicked");
    ApiError::Internal("internal server error".to_string()).into_response()
}

/// Acquires the listening socket for `config.addr()`.
pub async fn bind(config: &Config) -> Result<TcpListener, ServerError> {
    let addr = config.addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves the application on an already bound listener.
///
/// Only returns if the accept loop fails.
pub async fn serve(listener: TcpListener) -> Result<(), ServerError> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "starting guitar practice API server");

    axum::serve(listener, create_app()).await?;
    Ok(())
}

/// Binds the configured address and serves until the process is killed.
pub async fn run(config: Config) -> Result<(), ServerError> {
    let listener = bind(&config).await?;
    serve(listener).await
}
