//! CORS and cache-control header middleware
//!
//! Every response leaves the server with the same four headers so the
//! extension works no matter which origin Tableau embeds it from, and so
//! stale assets never survive a reload during development.

use axum::extract::Request;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Append the permissive CORS and no-cache headers to every response.
pub async fn apply_dev_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );

    response
}

/// Answer CORS preflight requests with an empty 200.
///
/// Runs inside [`apply_dev_headers`] so the short-circuit response still
/// picks up the dev headers.
pub async fn handle_preflight(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    next.run(req).await
}
