use super::common::PlaylistRequest;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::non_blank;
use axum::{Extension, Json, extract::State, http::StatusCode};
use db::models::playlist;
use util::state::AppState;

/// POST /api/v1/playlist
///
/// ### Request Body
/// ```json
/// { "name": "Rust talks", "description": "Conference recordings" }
/// ```
///
/// ### Responses
/// - `201 Created` with the playlist, message `"Playlist created successfully"`
/// - `400 Bad Request`: `"Name is required"`
pub async fn create_playlist(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<PlaylistRequest>,
) -> Result<(StatusCode, Json<ApiResponse<playlist::Model>>), ApiError> {
    let name =
        non_blank(req.name.as_ref()).ok_or_else(|| ApiError::bad_request("Name is required"))?;
    let description = req.description.as_deref().unwrap_or_default();

    let created = playlist::Model::create(app_state.db(), auth.id(), name, description).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Playlist created successfully")),
    ))
}
