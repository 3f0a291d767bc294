pub mod errors;

use crate::config::invitation::normalize_code;
use crate::modules::database::PgQuery;
use crate::routes::rsvp::models::{GuestEntry, RsvpForm};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{query, query_as, FromRow, PgPool};
use tracing::trace;
use uuid::Uuid;
use validator::Validate;

use self::errors::RsvpError;

pub struct Rsvp;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct QueryConfirmation {
    pub id: Uuid,
    pub invitation_code: String,
    pub guests: Json<Vec<GuestEntry>>,
}

impl<'c> PgQuery<'c, Rsvp> {
    pub async fn get(&mut self, code: &str) -> Result<Option<QueryConfirmation>, RsvpError> {
        let res = query_as::<_, QueryConfirmation>(
            r#"
            SELECT id, invitation_code, guests FROM rsvp_confirmations
            WHERE invitation_code = $1
        "#,
        )
        .bind(code)
        .fetch_optional(&mut *self.conn)
        .await?;

        if res.is_some() {
            trace!("Found an existing confirmation for code {code}");
        }

        Ok(res)
    }

    pub async fn create(
        &mut self,
        code: &str,
        guests: &[GuestEntry],
    ) -> Result<QueryConfirmation, RsvpError> {
        let confirmation = query_as::<_, QueryConfirmation>(
            r#"
            INSERT INTO rsvp_confirmations (invitation_code, guests)
            VALUES ($1, $2)
            RETURNING id, invitation_code, guests
        "#,
        )
        .bind(code)
        .bind(Json(guests))
        .fetch_one(&mut *self.conn)
        .await?;

        trace!(
            "Stored confirmation for code {code} with {} guest(s)",
            guests.len()
        );

        Ok(confirmation)
    }

    pub async fn delete(&mut self, code: &str) -> Result<u64, RsvpError> {
        let affected = query(
            r#"
            DELETE FROM rsvp_confirmations
            WHERE invitation_code = $1
        "#,
        )
        .bind(code)
        .execute(&mut *self.conn)
        .await?
        .rows_affected();

        trace!("Deleted {affected} confirmation(s) for code {code}");

        Ok(affected)
    }
}

/// Absence of a row is a regular outcome, not an error.
pub async fn check_existing_rsvp(
    pool: &PgPool,
    code: &str,
) -> Result<Option<QueryConfirmation>, RsvpError> {
    let mut conn = pool.acquire().await?;
    let mut q = PgQuery::new(Rsvp, &mut conn);
    q.get(&normalize_code(code)).await
}

/// Validates the form, then inserts the confirmation in a single atomic
/// statement. A unique violation on the code surfaces as
/// [`RsvpError::AlreadyConfirmed`] so the caller can re-fetch the stored
/// confirmation instead of retrying.
pub async fn submit_rsvp(pool: &PgPool, form: RsvpForm) -> Result<QueryConfirmation, RsvpError> {
    form.validate()?;

    let code = normalize_code(&form.invitation_code);
    let mut conn = pool.acquire().await?;
    let mut q = PgQuery::new(Rsvp, &mut conn);
    q.create(&code, &form.guests).await
}

/// Test-only escape hatch, mounted only on the development router.
pub async fn delete_rsvp(pool: &PgPool, code: &str) -> Result<(), RsvpError> {
    let mut conn = pool.acquire().await?;
    let mut q = PgQuery::new(Rsvp, &mut conn);
    let affected = q.delete(&normalize_code(code)).await?;
    if affected == 0 {
        return Err(RsvpError::NotFound);
    }
    Ok(())
}
