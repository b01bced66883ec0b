//! The JSON envelope every endpoint answers with.
//!
//! ```json
//! { "success": true, "data": { "id": 7, "title": "Borrowing in five minutes" }, "message": "Video fetched successfully" }
//! ```
//!
//! Failures carry `"success": false`, an empty `data` object and the reason in
//! `message`, e.g. `{ "success": false, "data": {}, "message": "Video not found" }`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Failure envelope; `data` is `T::default()`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

impl ApiResponse<Empty> {
    /// Success with nothing to return (logout, deletes, password change).
    pub fn message_only(message: impl Into<String>) -> Self {
        Self::success(Empty::default(), message)
    }
}

/// Serializes as `{}`.
#[derive(Debug, Serialize, Default)]
pub struct Empty {}
