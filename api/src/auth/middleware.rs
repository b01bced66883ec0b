use crate::auth::claims::AuthUser;
use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts},
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::UserAgent;
use std::net::SocketAddr;
use std::time::Instant;

/// Logs one line per handled request: method, path, client IP, the caller's
/// user id when a valid access token is present, user agent, status and latency.
///
/// Media file hits are logged at `debug`, server errors at `warn`, and CORS
/// preflights are not logged at all.
///
/// Needs the server to run with `into_make_service_with_connect_info::<SocketAddr>()`.
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();

    // Decoding only; verify_jwt makes the real decision.
    let user_id = AuthUser::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|user| user.id());
    let user_agent = TypedHeader::<UserAgent>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(ua)| ua.to_string());

    let method = parts.method.clone();
    let path = parts.uri.path().to_owned();
    let started = Instant::now();

    let response = next.run(Request::from_parts(parts, body)).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let user = user_id.unwrap_or(0);
    let user_agent = user_agent.as_deref().unwrap_or("unknown");

    if response.status().is_server_error() {
        tracing::warn!(%method, %path, ip = %addr.ip(), user, user_agent, status, elapsed_ms, "Request failed");
    } else if path.starts_with("/media/") {
        tracing::debug!(%method, %path, ip = %addr.ip(), status, elapsed_ms, "Served media");
    } else {
        tracing::info!(%method, %path, ip = %addr.ip(), user, user_agent, status, elapsed_ms, "Handled request");
    }

    response
}
