use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub exp: usize,
}

/// Claims carried by a refresh token. `jti` keeps two tokens minted in the same second distinct.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RefreshClaims {
    pub sub: i64,
    pub jti: String,
    pub exp: usize,
}

/// The authenticated caller, inserted into request extensions by `verify_jwt`.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn id(&self) -> i64 {
        self.0.sub
    }
}
