//! Access/refresh token issuing and the cookies that carry them.

use crate::auth::claims::{Claims, RefreshClaims};
use crate::error::ApiError;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use db::models::user::{self, Model as UserModel};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use util::config;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

fn sign<T: Serialize>(claims: &T, secret: &str) -> Result<String, ApiError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!(error = %e, "Token encoding failed");
        ApiError::Internal("Something went wrong while generating tokens".into())
    })
}

pub fn generate_access_token(user: &UserModel) -> Result<String, ApiError> {
    let expiry = Utc::now() + Duration::minutes(config::access_token_expiry_minutes());
    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        username: user.username.clone(),
        full_name: user.full_name.clone(),
        exp: expiry.timestamp() as usize,
    };
    sign(&claims, &config::access_token_secret())
}

pub fn generate_refresh_token(user_id: i64) -> Result<String, ApiError> {
    let expiry = Utc::now() + Duration::days(config::refresh_token_expiry_days());
    let claims = RefreshClaims {
        sub: user_id,
        jti: uuid::Uuid::new_v4().to_string(),
        exp: expiry.timestamp() as usize,
    };
    sign(&claims, &config::refresh_token_secret())
}

/// Issues a fresh token pair and stores the refresh token on the user row,
/// invalidating whichever refresh token was stored before.
pub async fn generate_access_and_refresh_tokens(
    db: &DatabaseConnection,
    user: &UserModel,
) -> Result<TokenPair, ApiError> {
    let access_token = generate_access_token(user)?;
    let refresh_token = generate_refresh_token(user.id)?;

    user::Model::set_refresh_token(db, user.id, Some(refresh_token.clone())).await?;

    Ok(TokenPair {
        access_token,
        refresh_token,
    })
}

/// Rotates the pair presented with `current`. Returns `None` when `current` is no
/// longer the stored refresh token, including when a concurrent rotation won.
pub async fn rotate_tokens(
    db: &DatabaseConnection,
    user: &UserModel,
    current: &str,
) -> Result<Option<TokenPair>, ApiError> {
    let access_token = generate_access_token(user)?;
    let refresh_token = generate_refresh_token(user.id)?;

    if !user::Model::swap_refresh_token(db, user.id, current, &refresh_token).await? {
        return Ok(None);
    }

    Ok(Some(TokenPair {
        access_token,
        refresh_token,
    }))
}

pub fn decode_access_token(token: &str) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config::access_token_secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .ok()
    .map(|data| data.claims)
}

pub fn decode_refresh_token(token: &str) -> Option<RefreshClaims> {
    decode::<RefreshClaims>(
        token,
        &DecodingKey::from_secret(config::refresh_token_secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .ok()
    .map(|data| data.claims)
}

fn auth_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .secure(config::cookie_secure())
        .path("/")
        .same_site(SameSite::Lax)
        .build()
}

/// Adds both auth cookies to the jar.
pub fn with_token_cookies(jar: CookieJar, tokens: &TokenPair) -> CookieJar {
    jar.add(auth_cookie(ACCESS_TOKEN_COOKIE, tokens.access_token.clone()))
        .add(auth_cookie(REFRESH_TOKEN_COOKIE, tokens.refresh_token.clone()))
}

/// Expires both auth cookies.
pub fn without_token_cookies(jar: CookieJar) -> CookieJar {
    jar.remove(auth_cookie(ACCESS_TOKEN_COOKIE, String::new()))
        .remove(auth_cookie(REFRESH_TOKEN_COOKIE, String::new()))
}
