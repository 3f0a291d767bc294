use crate::config::invitation::{Couple, Event};
use anyhow::Context;
use reqwest::Url;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime};

const CALENDAR_RENDER_URL: &str = "https://calendar.google.com/calendar/render";
const MAPS_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";

/// Events have no explicit end in the invitation content.
const DEFAULT_EVENT_DURATION: Duration = Duration::hours(2);

const COMPACT: &[FormatItem<'static>] =
    format_description!("[year][month][day]T[hour][minute][second]");

pub fn event_title(couple: &Couple, event: &Event) -> String {
    format!(
        "Boda de {} y {} ({})",
        couple.groom_name, couple.bride_name, event.title
    )
}

pub fn google_calendar_url(couple: &Couple, event: &Event) -> Result<String, anyhow::Error> {
    let start = event.datetime;
    let end = start + DEFAULT_EVENT_DURATION;
    let dates = format!("{}/{}", start.format(COMPACT)?, end.format(COMPACT)?);
    let details = format!("{}\n{}", event.venue_name, event.address);
    let title = event_title(couple, event);

    let url = Url::parse_with_params(
        CALENDAR_RENDER_URL,
        &[
            ("action", "TEMPLATE"),
            ("text", title.as_str()),
            ("dates", dates.as_str()),
            ("details", details.as_str()),
            ("location", event.address.as_str()),
        ],
    )
    .context("Failed to build a calendar url")?;

    Ok(url.into())
}

pub fn directions_url(destination: &str) -> Result<String, anyhow::Error> {
    let url = Url::parse_with_params(
        MAPS_DIRECTIONS_URL,
        &[("api", "1"), ("destination", destination.trim())],
    )
    .context("Failed to build a directions url")?;

    Ok(url.into())
}

/// RFC 5545 text block for the "add to calendar" download. Event times are
/// emitted as floating local times, the stamp as UTC.
pub fn ics_content(
    couple: &Couple,
    event: &Event,
    now: OffsetDateTime,
) -> Result<String, anyhow::Error> {
    let start = event.datetime;
    let end = start + DEFAULT_EVENT_DURATION;
    let uid = format!(
        "{}-{}@wedding",
        event.id,
        start.assume_utc().unix_timestamp()
    );

    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//Wedding Invitation//ES".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{uid}"),
        format!("DTSTAMP:{}Z", now.format(COMPACT)?),
        format!("DTSTART:{}", start.format(COMPACT)?),
        format!("DTEND:{}", end.format(COMPACT)?),
        format!("SUMMARY:{}", event_title(couple, event)),
        format!("DESCRIPTION:{}\\n{}", event.venue_name, event.address),
        format!("LOCATION:{}", event.address),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    Ok(lines.join("\r\n"))
}

pub fn ics_filename(event: &Event) -> String {
    format!("boda-{}.ics", event.id)
}

#[cfg(test)]
mod link_tests {
    use super::*;
    use crate::config::invitation::InvitationConfig;
    use time::macros::datetime;

    fn config() -> InvitationConfig {
        InvitationConfig::parse_embedded().unwrap()
    }

    #[test]
    fn calendar_url_for_the_ceremony() {
        let config = config();
        let event = &config.events[0];
        let url = google_calendar_url(&config.couple, event).unwrap();

        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE"));
        assert!(url.contains("dates=20270129T150000%2F20270129T170000"));
        assert!(url.contains("text=Boda+de+Pablo+y+May+%28Ceremonia%29"));
        assert!(url.contains("location=Santa+Ana"));
    }

    #[test]
    fn directions_url_encodes_the_destination() {
        let url = directions_url("9.9324436,-84.1805954").unwrap();
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&destination=9.9324436%2C-84.1805954"
        );
    }

    #[test]
    fn directions_url_trims_the_destination() {
        let url = directions_url("  Belén  ").unwrap();
        assert!(url.ends_with("destination=Bel%C3%A9n"));
    }

    #[test]
    fn ics_block_has_the_contract_fields() {
        let config = config();
        let event = config.events.iter().find(|e| e.title == "Celebración").unwrap();
        let now = datetime!(2026-08-30 12:00:00 UTC);
        let ics = ics_content(&config.couple, event, now).unwrap();

        let lines: Vec<&str> = ics.split("\r\n").collect();
        assert_eq!(lines.first(), Some(&"BEGIN:VCALENDAR"));
        assert_eq!(lines.last(), Some(&"END:VCALENDAR"));
        assert!(lines.contains(&"DTSTAMP:20260830T120000Z"));
        assert!(lines.contains(&"DTSTART:20270129T173000"));
        assert!(lines.contains(&"DTEND:20270129T193000"));
        assert!(lines.contains(&"SUMMARY:Boda de Pablo y May (Celebración)"));
        assert!(lines.contains(&"DESCRIPTION:El Rodeo Estancia\\nBelén"));
        assert!(lines.contains(&"LOCATION:Belén"));
        assert!(lines.iter().any(|l| l.starts_with("UID:celebracion-")));
    }

    #[test]
    fn ics_filename_uses_the_event_id() {
        let config = config();
        assert_eq!(ics_filename(&config.events[0]), "boda-ceremonia.ics");
    }
}
