use crate::error::ApiError;
use axum::{
    Router,
    body::Body,
    extract::{Path, State},
    http::header::{CACHE_CONTROL, CONTENT_LENGTH, CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use util::{paths, state::AppState};

/// Builds the `/media` route group, serving files written by the local media store.
pub fn media_routes() -> Router<AppState> {
    Router::new().route("/{*path}", get(serve_media))
}

/// GET /media/{*path}
///
/// Streams a locally stored image or video with a MIME type guessed from its
/// extension. Paths that try to leave the media root are treated as missing.
///
/// ### Responses
/// - `200 OK` with the file body
/// - `404 Not Found`: `"File not found"`, also when media is hosted remotely
pub async fn serve_media(
    State(app_state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, ApiError> {
    let root = app_state
        .media()
        .local_root()
        .ok_or_else(|| ApiError::not_found("File not found"))?;
    let fs_path =
        paths::media_file(root, &path).ok_or_else(|| ApiError::not_found("File not found"))?;

    let file = File::open(&fs_path)
        .await
        .map_err(|_| ApiError::not_found("File not found"))?;
    let meta = file
        .metadata()
        .await
        .map_err(|_| ApiError::not_found("File not found"))?;
    if !meta.is_file() {
        return Err(ApiError::not_found("File not found"));
    }

    let mime = mime_guess::from_path(&fs_path)
        .first_or_octet_stream()
        .to_string();

    let mut response = (
        [(CONTENT_TYPE, mime), (CACHE_CONTROL, "public, max-age=3600".to_string())],
        Body::from_stream(ReaderStream::new(file)),
    )
        .into_response();
    response
        .headers_mut()
        .insert(CONTENT_LENGTH, meta.len().into());
    Ok(response)
}
