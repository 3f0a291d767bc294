pub mod errors;

use crate::modules::database::PgQuery;
use crate::routes::songs::models::SubmitSong;
use sqlx::{query, PgPool};
use tracing::trace;
use validator::Validate;

use self::errors::SongError;

pub struct Songs;

impl<'c> PgQuery<'c, Songs> {
    pub async fn create(&mut self, suggestion: &SubmitSong) -> Result<(), SongError> {
        query(
            r#"
            INSERT INTO song_suggestions (song_name, suggested_by)
            VALUES ($1, $2)
        "#,
        )
        .bind(suggestion.song_name.trim())
        .bind(suggestion.suggested_by.as_deref().map(str::trim))
        .execute(&mut *self.conn)
        .await?;

        trace!("Stored song suggestion");

        Ok(())
    }
}

/// Fire-and-forget: suggestions have no uniqueness constraint, so there is no
/// conflict branch.
pub async fn submit_song_suggestion(
    pool: &PgPool,
    suggestion: SubmitSong,
) -> Result<(), SongError> {
    suggestion.validate()?;

    let mut conn = pool.acquire().await?;
    let mut q = PgQuery::new(Songs, &mut conn);
    q.create(&suggestion).await
}
