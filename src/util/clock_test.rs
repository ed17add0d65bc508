#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000);
}

#[test]
fn today_is_iso_date() {
    let day = today();
    assert_eq!(day.len(), 10);
    assert!(chrono::NaiveDate::parse_from_str(&day, "%Y-%m-%d").is_ok());
}

#[test]
fn local_zone_falls_back_to_utc() {
    assert_eq!(local_zone_name(), "UTC");
}
