//! Time-of-day conversion between IANA zones.
//!
//! SYSTEM CONTEXT
//! ==============
//! The change table stores times as typed by the operator (`HH:mm` or a
//! `HH:mm-HH:mm` range) in the source zone. When conversion is on, the table
//! renders `convert(...)` of those source values; it never overwrites them.
//!
//! DST HANDLING
//! ============
//! A local time inside a spring-forward gap does not exist and yields
//! `INVALID_TIME`. A local time inside a fall-back fold resolves to the
//! earlier of the two instants.

#[cfg(test)]
#[path = "timezone_test.rs"]
mod timezone_test;

use chrono::{NaiveDateTime, TimeZone};
use chrono_tz::Tz;

pub const INVALID_TIME: &str = "Invalid time";
pub const UNKNOWN_DATE: &str = "Unknown date";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const ZONES: [ZoneOption; 10] = [
    ZoneOption { id: "Europe/Stockholm", label: "Stockholm (CET/CEST)" },
    ZoneOption { id: "Asia/Kolkata", label: "India (IST)" },
    ZoneOption { id: "UTC", label: "UTC" },
    ZoneOption { id: "America/New_York", label: "New York (EST/EDT)" },
    ZoneOption { id: "America/Los_Angeles", label: "Los Angeles (PST/PDT)" },
    ZoneOption { id: "Europe/London", label: "London (GMT/BST)" },
    ZoneOption { id: "Asia/Tokyo", label: "Tokyo (JST)" },
    ZoneOption { id: "Australia/Sydney", label: "Sydney (AEST/AEDT)" },
    ZoneOption { id: "Asia/Dubai", label: "Dubai (GST)" },
    ZoneOption { id: "Asia/Singapore", label: "Singapore (SGT)" },
];

/// Display label for a zone id, or the id itself when it is not in `ZONES`.
pub fn zone_label(id: &str) -> &str {
    ZONES.iter().find(|z| z.id == id).map_or(id, |z| z.label)
}

/// Convert a time or time range on `date` from zone `from` to zone `to`.
///
/// Returns `-` for blank or `-` input, `hh:mm AM|PM` per converted time, and
/// `INVALID_TIME` for anything that cannot be placed on the timeline.
pub fn convert(time: &str, date: &str, from: &str, to: &str) -> String {
    let time = time.trim();
    if time.is_empty() || time == "-" {
        return "-".to_owned();
    }

    if let Some((start, end)) = time.split_once('-') {
        let start = convert(start, date, from, to);
        let end = if end.trim().is_empty() { "-".to_owned() } else { convert(end, date, from, to) };
        return format!("{start}-{end}");
    }

    match convert_single(time, date, from, to) {
        Some(converted) => converted,
        None => {
            leptos::logging::warn!("timezone: cannot convert {time:?} on {date:?} from {from} to {to}");
            INVALID_TIME.to_owned()
        }
    }
}

fn convert_single(time: &str, date: &str, from: &str, to: &str) -> Option<String> {
    let from_tz = from.parse::<Tz>().ok()?;
    let to_tz = to.parse::<Tz>().ok()?;
    let naive = NaiveDateTime::parse_from_str(&format!("{} {time}", date.trim()), "%Y-%m-%d %H:%M").ok()?;
    let local = from_tz.from_local_datetime(&naive).earliest()?;
    Some(local.with_timezone(&to_tz).format("%I:%M %p").to_string())
}

/// Format a server `yyyy-MM-dd HH:mm:ss` UTC stamp in the viewer's zone as
/// `yyyy-MM-dd, hh:mm AM (Zone/Name)`.
pub fn format_utc_in_zone(utc: &str, zone: &str) -> String {
    let Ok(naive) = NaiveDateTime::parse_from_str(utc.trim(), "%Y-%m-%d %H:%M:%S") else {
        return UNKNOWN_DATE.to_owned();
    };
    let (tz, name) = match zone.parse::<Tz>() {
        Ok(tz) => (tz, zone),
        Err(_) => (Tz::UTC, "UTC"),
    };
    let local = chrono::Utc.from_utc_datetime(&naive).with_timezone(&tz);
    format!("{} ({name})", local.format("%Y-%m-%d, %I:%M %p"))
}
