use axum::response::IntoResponse;
use axum::Json;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

/// Postgres SQLSTATE for a unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Error, Debug)]
pub enum RsvpError {
    #[error("Esta invitación ya fue confirmada")]
    AlreadyConfirmed,
    #[error("Not Found")]
    NotFound,
    #[error("Datos de confirmación inválidos")]
    InvalidForm(#[from] validator::ValidationErrors),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl IntoResponse for RsvpError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            RsvpError::AlreadyConfirmed => StatusCode::CONFLICT,
            RsvpError::NotFound => StatusCode::NOT_FOUND,
            RsvpError::InvalidForm(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RsvpError::Unexpected(e) => {
                tracing::error!("Internal server error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = match &self {
            RsvpError::AlreadyConfirmed => {
                json!({ "error_info": self.to_string(), "already_confirmed": true })
            }
            RsvpError::InvalidForm(errors) => {
                json!({ "error_info": self.to_string(), "field_errors": errors })
            }
            RsvpError::Unexpected(_) => json!({ "error_info": "Unexpected server error" }),
            _ => json!({ "error_info": self.to_string() }),
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for RsvpError {
    fn from(e: sqlx::Error) -> Self {
        // The unique index on invitation_code is the only constraint a client
        // can trip, so 23505 always means a duplicate confirmation.
        if let Some(db_error) = e.as_database_error() {
            if db_error.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return Self::AlreadyConfirmed;
            }
        }
        Self::Unexpected(anyhow::Error::from(e))
    }
}
