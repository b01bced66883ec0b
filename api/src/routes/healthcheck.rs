use crate::error::ApiError;
use crate::response::ApiResponse;
use axum::{Json, Router, extract::State, routing::get};
use util::state::AppState;

/// Builds the `/healthcheck` route group. Public.
pub fn healthcheck_routes() -> Router<AppState> {
    Router::new().route("/", get(healthcheck))
}

/// GET /api/v1/healthcheck
///
/// Confirms the API is up and its database answers.
///
/// ### Responses
/// - `200 OK`
///
/// ```json
/// {
///   "success": true,
///   "data": "OK",
///   "message": "Health check passed"
/// }
/// ```
/// - `500 Internal Server Error`: `"Database unavailable"`
pub async fn healthcheck(
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<&'static str>>, ApiError> {
    if let Err(e) = app_state.db().ping().await {
        tracing::error!(error = %e, "Health check database ping failed");
        return Err(ApiError::Internal("Database unavailable".into()));
    }
    Ok(Json(ApiResponse::success("OK", "Health check passed")))
}
