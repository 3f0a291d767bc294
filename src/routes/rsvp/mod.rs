pub mod models;

use axum::{
    debug_handler,
    extract::{Query, State},
    routing::{delete, get},
    Json, Router,
};
use http::StatusCode;
use sqlx::PgPool;
use tracing::info;

use crate::modules::AppState;
use crate::routes::rsvp::models::{RsvpConfirmation, RsvpForm, RsvpQuery, RsvpStatus};
use crate::utils::rsvp::{check_existing_rsvp, delete_rsvp, errors::RsvpError, submit_rsvp};

pub fn router(is_dev: bool) -> Router<AppState> {
    let mut router = Router::new().route("/", get(check_rsvp).post(create_rsvp));
    if is_dev {
        info!("Enabling test-only RSVP delete route");
        router = router.route("/", delete(remove_rsvp));
    }
    router
}

/// Check whether an invitation code was already confirmed
#[debug_handler]
#[utoipa::path(get, path = "/rsvp", tag = "rsvp", params(RsvpQuery), responses((status = 200, body = RsvpStatus, description = "Confirmation status for the code")))]
pub async fn check_rsvp(
    State(pool): State<PgPool>,
    Query(query): Query<RsvpQuery>,
) -> Result<Json<RsvpStatus>, RsvpError> {
    let found = check_existing_rsvp(&pool, &query.invitacion).await?;
    Ok(Json(RsvpStatus::from(found)))
}

/// Submit a confirmation
#[debug_handler]
#[utoipa::path(post, path = "/rsvp", tag = "rsvp", request_body = RsvpForm, responses(
    (status = 200, body = RsvpConfirmation, description = "Stored confirmation"),
    (status = 409, description = "This code was already confirmed"),
    (status = 422, description = "Form failed validation"),
))]
pub async fn create_rsvp(
    State(pool): State<PgPool>,
    Json(form): Json<RsvpForm>,
) -> Result<Json<RsvpConfirmation>, RsvpError> {
    let confirmation = submit_rsvp(&pool, form).await?;
    Ok(Json(RsvpConfirmation::from(confirmation)))
}

/// Remove a confirmation (development only)
#[debug_handler]
#[utoipa::path(delete, path = "/rsvp", tag = "rsvp", params(RsvpQuery), responses((status = 200, description = "Removed confirmation")))]
pub async fn remove_rsvp(
    State(pool): State<PgPool>,
    Query(query): Query<RsvpQuery>,
) -> Result<StatusCode, RsvpError> {
    delete_rsvp(&pool, &query.invitacion).await?;
    Ok(StatusCode::OK)
}
