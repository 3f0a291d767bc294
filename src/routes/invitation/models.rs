use crate::config::invitation::{
    Accommodation, Couple, Event, FaqItem, GalleryItem, GiftDetails, InvitationConfig, PartySection,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The whole public invitation payload the page renders from.
#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct InvitationResponse {
    pub audio_src: String,
    pub couple: Couple,
    pub events: Vec<Event>,
    pub gallery: Vec<GalleryItem>,
    pub gallery_subtitle: String,
    pub accommodation: Accommodation,
    pub faq: Vec<FaqItem>,
    pub party: PartySection,
    pub gifts: GiftDetails,
}

impl From<&InvitationConfig> for InvitationResponse {
    fn from(config: &InvitationConfig) -> Self {
        Self {
            audio_src: config.audio_src.clone(),
            couple: config.couple.clone(),
            events: config.events.clone(),
            gallery: config.gallery.clone(),
            gallery_subtitle: config.gallery_subtitle.clone(),
            accommodation: config.accommodation.clone(),
            faq: config.faq.clone(),
            party: config.party.clone(),
            gifts: config.gifts.clone(),
        }
    }
}

#[derive(Deserialize, IntoParams, Debug)]
pub struct GuestsQuery {
    /// Invitation code from the shared link, absent on the public page.
    pub invitacion: Option<String>,
}

#[derive(Serialize, ToSchema, Debug, PartialEq)]
pub struct EventLinks {
    pub google_calendar_url: String,
    pub directions_url: String,
}
