use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::{TypedHeader, cookie::CookieJar};
use headers::{Authorization, authorization::Bearer};

use crate::auth::claims::AuthUser;
use crate::auth::tokens::{ACCESS_TOKEN_COOKIE, decode_access_token};
use crate::error::ApiError;

/// Reads the raw access token from the `accessToken` cookie, falling back to
/// an `Authorization: Bearer` header.
pub async fn access_token_from_parts(parts: &mut Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(ACCESS_TOKEN_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, &())
        .await
        .ok()
        .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string())
}

/// Extracts `AuthUser` from the access token without touching the database.
///
/// Routes behind `verify_jwt` should prefer `Extension<AuthUser>`, which is only
/// present once the user row has been confirmed to exist.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = access_token_from_parts(parts)
            .await
            .ok_or_else(|| ApiError::unauthorized("Unauthorized request"))?;

        decode_access_token(&token)
            .map(AuthUser)
            .ok_or_else(|| ApiError::unauthorized("Invalid access token"))
    }
}
