pub mod models;

use axum::{debug_handler, extract::State, routing::post, Json, Router};
use http::StatusCode;
use sqlx::PgPool;

use crate::modules::AppState;
use crate::routes::songs::models::SubmitSong;
use crate::utils::songs::{errors::SongError, submit_song_suggestion};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(suggest_song))
}

/// Suggest a song for the party playlist
#[debug_handler]
#[utoipa::path(post, path = "/songs", tag = "songs", request_body = SubmitSong, responses(
    (status = 200, description = "Stored song suggestion"),
    (status = 422, description = "Suggestion failed validation"),
))]
pub async fn suggest_song(
    State(pool): State<PgPool>,
    Json(suggestion): Json<SubmitSong>,
) -> Result<StatusCode, SongError> {
    submit_song_suggestion(&pool, suggestion).await?;
    Ok(StatusCode::OK)
}
