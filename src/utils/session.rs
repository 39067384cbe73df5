// src/utils/session.rs

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header carrying the opaque session id. Clients that omit it get a fresh
/// id minted and echoed back.
pub const SESSION_HEADER: &str = "x-session-id";

/// The resolved session id for the current request, injected into request
/// extensions by `session_middleware`.
#[derive(Debug, Clone)]
pub struct SessionId(String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Axum Middleware: Session identity.
///
/// Reads the session id from the request header, minting a UUID when the
/// header is absent or blank, injects `SessionId` into the request
/// extensions for handlers to use, and echoes the effective id on the
/// response so first-time clients can stick to their session.
pub async fn session_middleware(mut req: Request<Body>, next: Next) -> Response {
    let session_id = req
        .headers()
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(SessionId(session_id.clone()));

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&session_id) {
        response.headers_mut().insert(SESSION_HEADER, value);
    }
    response
}
