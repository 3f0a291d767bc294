use crate::routes::rsvp::models::RsvpForm;
use validator::ValidationError;

/// Guest names must keep at least 2 characters once surrounding whitespace
/// is removed.
pub fn validate_guest_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < 2 {
        let mut error = ValidationError::new("name_too_short");
        error.message = Some("Al menos 2 caracteres".into());
        return Err(error);
    }
    Ok(())
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("No puede estar vacío".into());
        return Err(error);
    }
    Ok(())
}

/// A confirmation makes no sense without guests on it.
pub fn validate_has_guests(form: &RsvpForm) -> Result<(), ValidationError> {
    if form.guests.is_empty() {
        let mut error = ValidationError::new("no_guests");
        error.message = Some("Debe haber al menos un invitado".into());
        return Err(error);
    }
    Ok(())
}
