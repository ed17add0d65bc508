use super::*;

fn looks_like_twelve_hour(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 8
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b':'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
        && bytes[5] == b' '
        && (s.ends_with("AM") || s.ends_with("PM"))
}

// =============================================================
// convert
// =============================================================

#[test]
fn dash_and_blank_pass_through() {
    assert_eq!(convert("-", "2025-02-15", "Europe/Stockholm", "Asia/Kolkata"), "-");
    assert_eq!(convert("-", "", "Nowhere/Else", "UTC"), "-");
    assert_eq!(convert("   ", "2025-02-15", "UTC", "UTC"), "-");
}

#[test]
fn single_time_converts_to_twelve_hour() {
    // Stockholm is UTC+1 in February, Kolkata UTC+5:30.
    assert_eq!(convert("09:00", "2025-02-15", "Europe/Stockholm", "Asia/Kolkata"), "01:30 PM");
    assert_eq!(convert("23:15", "2025-02-15", "UTC", "UTC"), "11:15 PM");
}

#[test]
fn range_converts_component_wise() {
    let out = convert("09:00-11:00", "2025-02-15", "Europe/Stockholm", "Asia/Kolkata");
    let parts: Vec<&str> = out.split('-').collect();
    assert_eq!(parts.len(), 2);
    assert!(parts.iter().all(|p| looks_like_twelve_hour(p)), "{out}");
    assert_eq!(out, "01:30 PM-03:30 PM");
}

#[test]
fn range_with_empty_end_yields_dash() {
    assert_eq!(convert("09:00-", "2025-02-15", "UTC", "Asia/Tokyo"), "06:00 PM--");
}

#[test]
fn range_with_spaces_is_trimmed() {
    assert_eq!(convert("09:00 - 10:00", "2025-02-15", "UTC", "UTC"), "09:00 AM-10:00 AM");
}

#[test]
fn invalid_inputs_yield_invalid_time() {
    assert_eq!(convert("25:99", "2025-02-15", "UTC", "UTC"), INVALID_TIME);
    assert_eq!(convert("09:00", "not-a-date", "UTC", "UTC"), INVALID_TIME);
    assert_eq!(convert("09:00", "2025-02-15", "Mars/Olympus", "UTC"), INVALID_TIME);
    assert_eq!(convert("09:00", "2025-02-15", "UTC", "Mars/Olympus"), INVALID_TIME);
}

#[test]
fn spring_forward_gap_is_invalid() {
    // Stockholm skips 02:00-03:00 on 2025-03-30.
    assert_eq!(convert("02:30", "2025-03-30", "Europe/Stockholm", "UTC"), INVALID_TIME);
}

#[test]
fn fall_back_fold_resolves_to_earlier_instant() {
    // 02:30 happens twice in Stockholm on 2025-10-26: first at 00:30 UTC (CEST).
    assert_eq!(convert("02:30", "2025-10-26", "Europe/Stockholm", "UTC"), "12:30 AM");
}

#[test]
fn converting_same_zone_is_identity_in_twelve_hour_form() {
    assert_eq!(convert("14:05", "2025-06-01", "Asia/Tokyo", "Asia/Tokyo"), "02:05 PM");
}

// =============================================================
// zones
// =============================================================

#[test]
fn zone_table_has_ten_parseable_zones() {
    assert_eq!(ZONES.len(), 10);
    for zone in ZONES {
        assert!(zone.id.parse::<Tz>().is_ok(), "{}", zone.id);
    }
}

#[test]
fn zone_label_falls_back_to_id() {
    assert_eq!(zone_label("Asia/Kolkata"), "India (IST)");
    assert_eq!(zone_label("Europe/Paris"), "Europe/Paris");
}

// =============================================================
// format_utc_in_zone
// =============================================================

#[test]
fn history_date_is_shown_in_viewer_zone() {
    assert_eq!(
        format_utc_in_zone("2025-02-15 12:00:00", "Asia/Kolkata"),
        "2025-02-15, 05:30 PM (Asia/Kolkata)"
    );
}

#[test]
fn history_date_unknown_zone_falls_back_to_utc() {
    assert_eq!(format_utc_in_zone("2025-02-15 12:00:00", "bogus"), "2025-02-15, 12:00 PM (UTC)");
}

#[test]
fn history_date_unparseable_is_unknown() {
    assert_eq!(format_utc_in_zone("yesterday", "UTC"), UNKNOWN_DATE);
}
