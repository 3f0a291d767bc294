use crate::utils::rsvp::QueryConfirmation;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// One named guest on an invitation. The optional message carries allergies
/// and dietary notes.
#[derive(Serialize, Deserialize, Validate, ToSchema, Debug, Clone, PartialEq)]
pub struct GuestEntry {
    #[validate(custom = "crate::validation::validate_guest_name")]
    pub name: String,
    pub attending: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GuestEntry {
    /// Guests default to attending until toggled off on the form.
    pub fn attending(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attending: true,
            message: None,
        }
    }
}

#[derive(Serialize, Deserialize, Validate, ToSchema, Debug, Clone, PartialEq)]
#[validate(schema(function = "crate::validation::validate_has_guests"))]
pub struct RsvpForm {
    #[validate(custom = "crate::validation::validate_not_blank")]
    pub invitation_code: String,
    #[validate]
    pub guests: Vec<GuestEntry>,
}

#[derive(Deserialize, IntoParams, Debug)]
pub struct RsvpQuery {
    /// Invitation code, as in `?invitacion=garcia`.
    pub invitacion: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct RsvpStatus {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<Vec<GuestEntry>>,
}

impl From<Option<QueryConfirmation>> for RsvpStatus {
    fn from(row: Option<QueryConfirmation>) -> Self {
        match row {
            Some(confirmation) => Self {
                exists: true,
                guests: Some(confirmation.guests.0),
            },
            None => Self {
                exists: false,
                guests: None,
            },
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct RsvpConfirmation {
    pub invitation_code: String,
    pub guests: Vec<GuestEntry>,
}

impl From<QueryConfirmation> for RsvpConfirmation {
    fn from(row: QueryConfirmation) -> Self {
        Self {
            invitation_code: row.invitation_code,
            guests: row.guests.0,
        }
    }
}
