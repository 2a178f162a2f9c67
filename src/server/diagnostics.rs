//! Per-request console diagnostics
//!
//! Replaces generic access logging with three distinct signals:
//! an INFO line for each file hit, a WARN naming both the request path and
//! the resolved filesystem path for each miss, and a WARN for any response
//! that leaves with an error status. Browser background noise
//! (`/favicon.ico`, `.well-known` probes) is suppressed entirely.

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::server::AppState;

/// Resolve a request path against the serving root.
///
/// The query string never reaches here (`Uri::path` excludes it). The path
/// is percent-decoded before joining, and directory requests resolve to
/// their `index.html`, so the result mirrors what `ServeDir` will serve.
pub fn resolve_path(root: &Path, request_path: &str) -> PathBuf {
    let decoded = percent_decode_str(request_path).decode_utf8_lossy();
    let mut resolved = root.join(decoded.trim_start_matches('/'));
    if resolved.is_dir() {
        resolved.push("index.html");
    }
    resolved
}

/// Paths browsers request on their own; misses on these are not worth a log line.
pub fn is_quiet_path(request_path: &str) -> bool {
    request_path == "/favicon.ico" || request_path.contains(".well-known")
}

/// Log the outcome of each request: hit, miss, or error status.
pub async fn log_request_outcome(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    if method == Method::GET {
        let resolved = resolve_path(&state.root, &path);
        if resolved.is_file() {
            tracing::info!(path = %path, "serving");
        } else if !is_quiet_path(&path) {
            tracing::warn!(
                path = %path,
                resolved = %resolved.display(),
                "not found"
            );
        }
    }

    let response = next.run(req).await;

    let status = response.status();
    if status == StatusCode::NOT_FOUND || status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::warn!(status = status.as_u16(), method = %method, path = %path, "request failed");
    }

    response
}
