use axum::response::IntoResponse;
use axum::Json;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SongError {
    #[error("Sugerencia inválida")]
    InvalidSuggestion(#[from] validator::ValidationErrors),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl IntoResponse for SongError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            SongError::InvalidSuggestion(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SongError::Unexpected(e) => {
                tracing::error!("Internal server error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = match &self {
            SongError::InvalidSuggestion(errors) => {
                json!({ "error_info": self.to_string(), "field_errors": errors })
            }
            SongError::Unexpected(_) => json!({ "error_info": "Unexpected server error" }),
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for SongError {
    fn from(e: sqlx::Error) -> Self {
        Self::Unexpected(anyhow::Error::from(e))
    }
}
