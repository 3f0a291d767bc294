pub mod models;

use axum::{
    debug_handler,
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use http::header;
use std::sync::Arc;
use time::OffsetDateTime;

use crate::config::invitation::{GuestList, InvitationConfig};
use crate::modules::AppState;
use crate::routes::invitation::models::{EventLinks, GuestsQuery, InvitationResponse};
use crate::utils::invitation::{errors::InvitationError, resolve_event, resolve_guest_list};
use crate::utils::links::{directions_url, google_calendar_url, ics_content, ics_filename};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_invitation))
        .route("/guests", get(get_guest_list))
        .route("/events/:id/links", get(get_event_links))
        .route("/events/:id/calendar.ics", get(get_event_ics))
}

/// Get the public invitation content
#[debug_handler]
#[utoipa::path(get, path = "/invitation", tag = "invitation", responses((status = 200, body = InvitationResponse, description = "Invitation content")))]
pub async fn get_invitation(
    State(invitation): State<Arc<InvitationConfig>>,
) -> Json<InvitationResponse> {
    Json(InvitationResponse::from(invitation.as_ref()))
}

/// Resolve the guest list for an invitation code
#[debug_handler]
#[utoipa::path(get, path = "/invitation/guests", tag = "invitation", params(GuestsQuery), responses((status = 200, body = GuestList, description = "Guest list, or null for a missing or unknown code")))]
pub async fn get_guest_list(
    State(invitation): State<Arc<InvitationConfig>>,
    Query(query): Query<GuestsQuery>,
) -> Json<Option<GuestList>> {
    let list = resolve_guest_list(&invitation, query.invitacion.as_deref());
    Json(list.cloned())
}

/// Get the outbound links for an event
#[debug_handler]
#[utoipa::path(get, path = "/invitation/events/{id}/links", tag = "invitation", responses(
    (status = 200, body = EventLinks, description = "Calendar and directions links"),
    (status = 404, description = "Unknown event id"),
))]
pub async fn get_event_links(
    State(invitation): State<Arc<InvitationConfig>>,
    Path(id): Path<String>,
) -> Result<Json<EventLinks>, InvitationError> {
    let event = resolve_event(&invitation, &id)?;
    Ok(Json(EventLinks {
        google_calendar_url: google_calendar_url(&invitation.couple, event)?,
        directions_url: directions_url(&event.maps_query)?,
    }))
}

/// Download an event as an .ics file
#[debug_handler]
#[utoipa::path(get, path = "/invitation/events/{id}/calendar.ics", tag = "invitation", responses(
    (status = 200, description = "RFC 5545 calendar entry"),
    (status = 404, description = "Unknown event id"),
))]
pub async fn get_event_ics(
    State(invitation): State<Arc<InvitationConfig>>,
    Path(id): Path<String>,
) -> Result<([(header::HeaderName, String); 2], String), InvitationError> {
    let event = resolve_event(&invitation, &id)?;
    let body = ics_content(&invitation.couple, event, OffsetDateTime::now_utc())?;
    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/calendar; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", ics_filename(event)),
            ),
        ],
        body,
    ))
}
