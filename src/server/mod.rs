//! # Asset Server
//!
//! Static file server for the extension's HTML/JS assets during development.
//!
//! Tableau loads extensions in an embedded browser, so every asset request is
//! cross-origin from the dashboard's point of view. The server therefore
//! stamps permissive CORS headers and a no-cache directive on every response
//! and answers `OPTIONS` preflights with an empty 200.
//!
//! Actual file serving (content-type inference, range requests, 404s,
//! `index.html` for directory requests) is delegated to `tower-http`'s
//! [`ServeDir`]; this module only adds the dev headers and per-request
//! diagnostics on top.
//!
//! ## Example
//!
//! ```no_run
//! use vitalflow::server::{create_router, AppState};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = Arc::new(AppState::new("./assets".into()));
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8765").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod diagnostics;
pub mod headers;

use axum::{middleware, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Shared state for the asset server.
pub struct AppState {
    /// Serving root; requests resolve against this directory, read-only.
    pub root: PathBuf,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

/// Create the asset server router.
///
/// Layer order matters: the header layer is outermost so that every
/// response, including preflight short-circuits and `ServeDir` errors,
/// carries the dev headers.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(state.root.clone()))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            diagnostics::log_request_outcome,
        ))
        .layer(middleware::from_fn(headers::handle_preflight))
        .layer(middleware::from_fn(headers::apply_dev_headers))
}
