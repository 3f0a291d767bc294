pub mod errors;

use crate::config::invitation::{Event, GuestList, InvitationConfig};

use self::errors::InvitationError;

/// A missing or unknown code is not an error, the caller simply renders no
/// guest-specific content.
pub fn resolve_guest_list<'a>(
    config: &'a InvitationConfig,
    code: Option<&str>,
) -> Option<&'a GuestList> {
    config.guest_list(code?)
}

/// Events are addressed by their path segment, e.g. `ceremonia`.
pub fn resolve_event<'a>(
    config: &'a InvitationConfig,
    id: &str,
) -> Result<&'a Event, InvitationError> {
    config
        .events
        .iter()
        .find(|event| event.id.to_string() == id.trim().to_lowercase())
        .ok_or(InvitationError::UnknownEvent)
}

#[cfg(test)]
mod resolution_tests {
    use super::*;
    use crate::config::invitation::EventId;

    #[test]
    fn known_code_resolves() {
        let config = InvitationConfig::parse_embedded().unwrap();
        let list = resolve_guest_list(&config, Some("garcia")).unwrap();
        assert_eq!(list.guests.len(), 3);
    }

    #[test]
    fn unknown_or_missing_code_resolves_to_none() {
        let config = InvitationConfig::parse_embedded().unwrap();
        assert!(resolve_guest_list(&config, Some("lopez")).is_none());
        assert!(resolve_guest_list(&config, None).is_none());
    }

    #[test]
    fn event_resolution_by_id() {
        let config = InvitationConfig::parse_embedded().unwrap();
        assert_eq!(
            resolve_event(&config, "ceremonia").unwrap().id,
            EventId::Ceremonia
        );
        assert_eq!(
            resolve_event(&config, "CELEBRACION").unwrap().id,
            EventId::Celebracion
        );
        assert!(resolve_event(&config, "fiesta").is_err());
    }
}
