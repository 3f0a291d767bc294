use crate::config::invitation::*;
use crate::routes::{invitation::models::*, invitation::*, rsvp::models::*, rsvp::*, songs::models::*, songs::*};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
info(title = "Boda", description = "Wedding invitation RSVP backend", ),
paths(
get_invitation,
get_guest_list,
get_event_links,
get_event_ics,
check_rsvp,
create_rsvp,
remove_rsvp,
suggest_song,
),
components(schemas(
InvitationResponse,
EventLinks,
EventId,
Couple,
Event,
GalleryItem,
RoomRate,
Room,
Accommodation,
FaqItem,
PartySection,
GiftDetails,
GuestList,
GuestEntry,
RsvpForm,
RsvpStatus,
RsvpConfirmation,
SubmitSong,
)),
tags((name = "invitation"),(name = "rsvp"),(name = "songs"))
)]
pub struct ApiDoc;
