use crate::error::HttpAppError;
use crate::proxy;
use crate::state::AppState;
use axum::{
    extract::{Path, Request, State},
    http::Method,
    response::{IntoResponse, Redirect, Response},
};
use plexgate_storage::keys;
use std::sync::Arc;
use std::time::Duration;

/// `GET|PUT|PATCH /library/parts/{part}/{epoch}/{file}`
///
/// A GET for a part with a known backing file is answered with a 307 to a
/// presigned URL for that object; everything else is relayed to the origin.
/// `epoch` and `file` are accepted for URL compatibility with the origin but
/// play no role in the decision.
pub async fn stream_part(
    State(state): State<Arc<AppState>>,
    Path((part, _epoch, _file)): Path<(String, i64, String)>,
    request: Request,
) -> Result<Response, HttpAppError> {
    if request.method() == Method::GET {
        if let Some(url) = redirect_target(&state, &part).await {
            return Ok(Redirect::temporary(&url).into_response());
        }
    }

    proxy::relay(&state, request).await
}

/// Resolve a part id to a presigned URL.
///
/// Every failure on this path is soft: log it, return `None`, and let the
/// caller fall through to the relay. The origin can always serve the part
/// itself, so a degraded catalog or signer must never cost the client the
/// request.
async fn redirect_target(state: &AppState, part: &str) -> Option<String> {
    let stored_path = match state.catalog.file_for_part(part).await {
        Ok(Some(path)) => path,
        Ok(None) => {
            tracing::debug!(part = %part, "No stored file for part, relaying");
            return None;
        }
        Err(e) => {
            tracing::warn!(error = %e, part = %part, "Catalog lookup failed, relaying");
            return None;
        }
    };

    let key = keys::object_key(&stored_path);
    let expires_in = Duration::from_secs(state.config.signed_url_expiry_secs);

    match state.signer.presigned_get_url(key, expires_in).await {
        Ok(url) => {
            tracing::debug!(part = %part, key = %key, "Redirecting to presigned URL");
            Some(url)
        }
        Err(e) => {
            tracing::warn!(error = %e, part = %part, key = %key, "Presign failed, relaying");
            None
        }
    }
}
