use anyhow::{bail, Context};
use config::{Config, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::PrimitiveDateTime;
use utoipa::ToSchema;

/// Invitation content lives next to the runtime settings and is baked into
/// the binary. It never changes between environments.
const INVITATION_TOML: &str = include_str!("../../configuration/invitation.toml");

/// Event datetimes are local wall-clock times without an offset,
/// e.g. `2027-01-29T15:00:00`.
pub const ISO_LOCAL: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

pub mod iso_local {
    use super::ISO_LOCAL;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use time::PrimitiveDateTime;

    pub fn serialize<S: Serializer>(dt: &PrimitiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.format(ISO_LOCAL).map_err(serde::ser::Error::custom)?)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<PrimitiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        PrimitiveDateTime::parse(&raw, ISO_LOCAL).map_err(Error::custom)
    }
}

/// The two fixed events of the day.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventId {
    Ceremonia,
    Celebracion,
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EventId::Ceremonia => write!(f, "ceremonia"),
            EventId::Celebracion => write!(f, "celebracion"),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Couple {
    pub groom_name: String,
    pub bride_name: String,
    #[serde(with = "iso_local")]
    #[schema(value_type = String)]
    pub date: PrimitiveDateTime,
    pub quote: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(with = "iso_local")]
    #[schema(value_type = String)]
    pub datetime: PrimitiveDateTime,
    pub venue_name: String,
    pub address: String,
    pub maps_query: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct GalleryItem {
    pub id: String,
    pub src: String,
    pub alt: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RoomRate {
    pub occupancy: String,
    pub price: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Room {
    pub name: String,
    pub rates: Vec<RoomRate>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Accommodation {
    pub hotel_name: String,
    pub description: String,
    pub coupon: String,
    pub coupon_note: String,
    pub phone: String,
    pub email: String,
    pub booking_url: String,
    pub address: String,
    pub amenities: Vec<String>,
    pub rooms: Vec<Room>,
    pub reservation_note: String,
    pub policy_note: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PartySection {
    pub dress_code_short: String,
    pub dress_code_long: String,
    pub tips: Vec<String>,
    pub song_prompt: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct GiftDetails {
    pub text: String,
    pub account_bac: String,
    pub account_iban: String,
    pub sinpe_movil: String,
}

/// One invited group, addressed by the code in `?invitacion=<code>`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct GuestList {
    pub total_count: u32,
    pub guests: Vec<String>,
    pub message: String,
}

#[derive(Deserialize)]
struct CoupleModel {
    groom_name: String,
    bride_name: String,
    date: String,
    quote: String,
}

#[derive(Deserialize)]
struct EventModel {
    id: EventId,
    title: String,
    datetime: String,
    venue_name: String,
    address: String,
    maps_query: String,
}

#[derive(Deserialize)]
struct InvitationConfigModel {
    audio_src: String,
    gallery_subtitle: String,
    couple: CoupleModel,
    events: Vec<EventModel>,
    gallery: Vec<GalleryItem>,
    accommodation: Accommodation,
    faq: Vec<FaqItem>,
    party: PartySection,
    gifts: GiftDetails,
    guest_lists: BTreeMap<String, GuestList>,
}

#[derive(Debug, Clone)]
pub struct InvitationConfig {
    pub audio_src: String,
    pub gallery_subtitle: String,
    pub couple: Couple,
    pub events: Vec<Event>,
    pub gallery: Vec<GalleryItem>,
    pub accommodation: Accommodation,
    pub faq: Vec<FaqItem>,
    pub party: PartySection,
    pub gifts: GiftDetails,
    guest_lists: BTreeMap<String, GuestList>,
}

impl InvitationConfig {
    pub fn parse_embedded() -> Result<Self, anyhow::Error> {
        Self::parse(INVITATION_TOML)
    }

    fn parse(raw: &str) -> Result<Self, anyhow::Error> {
        let model: InvitationConfigModel = Config::builder()
            .add_source(config::File::from_str(raw, FileFormat::Toml))
            .build()
            .context("Invalid invitation toml")?
            .try_deserialize()
            .context("Invitation content does not match the expected shape")?;
        model.to_config()
    }

    /// Exact lookup on the trimmed, lowercased code. A miss is not an error,
    /// the page simply hides its guest-specific sections.
    pub fn guest_list(&self, code: &str) -> Option<&GuestList> {
        self.guest_lists.get(&normalize_code(code))
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
}

pub fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}

impl InvitationConfigModel {
    fn to_config(self) -> Result<InvitationConfig, anyhow::Error> {
        let couple = Couple {
            groom_name: self.couple.groom_name,
            bride_name: self.couple.bride_name,
            date: PrimitiveDateTime::parse(&self.couple.date, ISO_LOCAL)
                .context("Invalid couple date")?,
            quote: self.couple.quote,
        };

        let mut events = Vec::with_capacity(self.events.len());
        for model in self.events {
            events.push(Event {
                id: model.id,
                title: model.title,
                datetime: PrimitiveDateTime::parse(&model.datetime, ISO_LOCAL)
                    .with_context(|| format!("Invalid datetime for event {}", model.id))?,
                venue_name: model.venue_name,
                address: model.address,
                maps_query: model.maps_query,
            });
        }
        for id in [EventId::Ceremonia, EventId::Celebracion] {
            if events.iter().filter(|e| e.id == id).count() != 1 {
                bail!("Expected exactly one `{id}` event");
            }
        }

        let guest_lists = self
            .guest_lists
            .into_iter()
            .map(|(code, list)| (normalize_code(&code), list))
            .collect();

        Ok(InvitationConfig {
            audio_src: self.audio_src,
            gallery_subtitle: self.gallery_subtitle,
            couple,
            events,
            gallery: self.gallery,
            accommodation: self.accommodation,
            faq: self.faq,
            party: self.party,
            gifts: self.gifts,
            guest_lists,
        })
    }
}

#[cfg(test)]
mod invitation_config_tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn embedded_content_parses() {
        let config = InvitationConfig::parse_embedded().unwrap();

        assert_eq!(config.couple.groom_name, "Pablo");
        assert_eq!(config.couple.bride_name, "May");
        assert_eq!(config.couple.date, datetime!(2027-01-29 15:00:00));
        assert_eq!(config.gallery.len(), 6);
        assert_eq!(config.accommodation.rooms.len(), 3);
        assert_eq!(config.faq.len(), 5);
        assert_eq!(config.faq[0].question, "¿Puedo llevar acompañante?");
        assert_eq!(config.party.tips.len(), 4);
    }

    #[test]
    fn both_fixed_events_are_present() {
        let config = InvitationConfig::parse_embedded().unwrap();

        let ceremonia = config.event(EventId::Ceremonia).unwrap();
        assert_eq!(ceremonia.venue_name, "Parroquia Santa Ana");
        assert_eq!(ceremonia.datetime, datetime!(2027-01-29 15:00:00));

        let celebracion = config.event(EventId::Celebracion).unwrap();
        assert_eq!(celebracion.venue_name, "El Rodeo Estancia");
        assert_eq!(celebracion.datetime, datetime!(2027-01-29 17:30:00));
    }

    #[test]
    fn guest_list_lookup_is_case_insensitive_and_trimmed() {
        let config = InvitationConfig::parse_embedded().unwrap();

        let expected = vec!["Juan García", "Sofía García", "Mateo García"];
        for code in ["garcia", "GARCIA", "  Garcia  "] {
            let list = config.guest_list(code).unwrap();
            assert_eq!(list.guests, expected);
            assert_eq!(list.total_count, 3);
        }
    }

    #[test]
    fn unknown_code_resolves_to_none() {
        let config = InvitationConfig::parse_embedded().unwrap();

        assert!(config.guest_list("ramirez").is_none());
        assert!(config.guest_list("").is_none());
    }

    #[test]
    fn duplicate_event_id_is_rejected() {
        let raw = INVITATION_TOML.replace("id = \"celebracion\"", "id = \"ceremonia\"");
        assert!(InvitationConfig::parse(&raw).is_err());
    }
}
