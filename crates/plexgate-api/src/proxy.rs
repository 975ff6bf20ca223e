//! Streaming relay to the origin server.
//!
//! The path of last resort for every request the gateway does not redirect:
//! forward the inbound method, path, query, and headers to the origin and
//! stream the response back. The body is never buffered in full - chunks flow
//! through as they arrive, and the origin connection is owned by the response
//! body stream, so it is released exactly once: when the stream is drained,
//! or when it is dropped because the client went away.

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, HeaderName},
    response::Response,
};
use futures::TryStreamExt;
use plexgate_core::AppError;
use std::sync::Arc;

/// Response headers describing the transport framing of the origin
/// connection. The relayed response rides a different connection with its own
/// framing, so these must not pass through.
fn is_excluded(name: &HeaderName) -> bool {
    *name == header::CONTENT_ENCODING
        || *name == header::CONTENT_LENGTH
        || *name == header::TRANSFER_ENCODING
        || *name == header::CONNECTION
        || *name == header::DATE
}

/// Copy a header map, dropping the excluded transport-framing headers.
/// Repeated values of retained headers are preserved.
fn filter_headers(headers: &HeaderMap) -> HeaderMap {
    let mut filtered = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !is_excluded(name) {
            filtered.append(name.clone(), value.clone());
        }
    }
    filtered
}

/// Forward a request to the origin and stream the response back.
///
/// Connection-establishment failures surface as 502; once streaming has
/// begun, a mid-stream error truncates the response instead. Nothing is
/// retried here - retry policy belongs to whoever sits in front of us.
pub async fn relay(state: &AppState, request: Request) -> Result<Response, HttpAppError> {
    let (parts, _body) = request.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = format!("{}{}", state.config.origin_base(), path_and_query);

    tracing::debug!(method = %parts.method, url = %url, "Relaying request to origin");

    let upstream = state
        .upstream
        .request(parts.method, url.as_str())
        .headers(parts.headers)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, url = %url, "Failed to reach origin");
            AppError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let headers = filter_headers(upstream.headers());

    let body_stream = upstream
        .bytes_stream()
        .map_err(|e| std::io::Error::other(format!("Origin stream error: {}", e)));

    let mut builder = Response::builder().status(status);
    if let Some(response_headers) = builder.headers_mut() {
        *response_headers = headers;
    }

    let response = builder.body(Body::from_stream(body_stream)).map_err(|e| {
        tracing::error!(error = %e, "Failed to build relayed response");
        AppError::Internal(e.to_string())
    })?;

    Ok(response)
}

/// Router fallback: everything without a dedicated route is relayed as-is.
pub async fn relay_fallback(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Response, HttpAppError> {
    relay(&state, request).await
}
