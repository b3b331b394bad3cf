use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::DirectoryError;

impl DirectoryError {
    pub fn status(&self) -> StatusCode {
        match self {
            DirectoryError::ActivityNotFound => StatusCode::NOT_FOUND,
            DirectoryError::AlreadySignedUp | DirectoryError::NotRegistered => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
