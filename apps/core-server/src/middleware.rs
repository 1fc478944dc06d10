use std::sync::Arc;
use std::time::Instant;

use axum::Extension;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use gift_core::proto::session_provider::Session;

use crate::ServerConfig;
use crate::metrics::track_request_count_and_time;
use crate::session::with_session;

pub struct HttpRequestContext<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub request_id: Option<&'a str>,
}

pub async fn bearer_check(
    Extension(config): Extension<Arc<ServerConfig>>,
    request: Request<Body>,
    next: Next,
) -> Result<axum::response::Response, StatusCode> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok());

    let Some(auth_header) = auth_header else {
        tracing::warn!("Authorization header not found.");
        return Err(StatusCode::UNAUTHORIZED);
    };

    let mut split = auth_header.split(' ');
    let auth_type = split.next().unwrap_or_default();
    let token = split.next().unwrap_or_default();

    let identity = config
        .auth_tokens
        .get(token)
        .filter(|_| auth_type == "Bearer" && !token.is_empty());

    let Some(identity) = identity else {
        tracing::warn!("Could not authorize request. Incorrect authorization method or token.");
        return Err(StatusCode::UNAUTHORIZED);
    };

    let session = Session {
        user_id: identity.user_id.to_owned(),
        admin: identity.admin,
    };

    Ok(with_session(session, next.run(request)).await)
}

pub async fn metrics_counter(request: Request<Body>, next: Next) -> axum::response::Response {
    let start = Instant::now();
    let response = next.run(request).await;

    track_request_count_and_time(
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}

pub fn get_http_request_context<T>(request: &Request<T>) -> HttpRequestContext<'_> {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    HttpRequestContext {
        path: request.uri().path(),
        method: request.method().as_str(),
        request_id,
    }
}
