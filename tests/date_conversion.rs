//! Date Conversion Integration Tests
//!
//! End-to-end checks of Hijri formatting, day deltas and localized Gregorian
//! formatting through the public API, including configuration loaded from
//! disk.

use chrono::{Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use isalah::app_core::{
    days_until, format_hijri_components, to_formatted_hijri, DateComponents, DateConfig,
    DateConverter, HijriDate, Observance, MONTH_NAMES,
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn noon(year: i32, month: u32, day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// Split "<DD> <MonthName> <Year>" into its parts
fn parse_hijri(text: &str) -> (String, String, String) {
    let (day, rest) = text.split_once(' ').unwrap();
    let (month, year) = rest.rsplit_once(' ').unwrap();
    (day.to_string(), month.to_string(), year.to_string())
}

/// Every day over several decades formats as "<DD> <MonthName> <Year>"
#[test]
fn test_hijri_format_shape_for_all_days() {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2040, 12, 31).unwrap();

    let mut date = start;
    while date <= end {
        let instant = Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap());
        let text = to_formatted_hijri(&instant);
        let (day, month, year) = parse_hijri(&text);

        assert_eq!(day.len(), 2, "{}", text);
        assert!(day.chars().all(|c| c.is_ascii_digit()), "{}", text);
        assert!(MONTH_NAMES.contains(&month.as_str()), "{}", text);
        assert!(year.parse::<i32>().is_ok(), "{}", text);

        date += Duration::days(1);
    }
}

#[test]
fn test_known_conversion() {
    assert!(to_formatted_hijri(&noon(2025, 3, 13)).starts_with("13 Ramadan 1446"));
    assert_eq!(HijriDate::from_gregorian(NaiveDate::from_ymd_opt(2025, 3, 13).unwrap()).to_string(), "13 Ramadan 1446");
}

#[test]
fn test_calendar_day_follows_time_zone() {
    // 03:00 UTC on the 13th is still the 12th in New York
    let utc = Utc.with_ymd_and_hms(2025, 3, 13, 3, 0, 0).unwrap();
    let new_york = utc.with_timezone(&FixedOffset::west_opt(5 * 3600).unwrap());

    assert_eq!(to_formatted_hijri(&utc), "13 Ramadan 1446");
    assert_eq!(to_formatted_hijri(&new_york), "12 Ramadan 1446");
}

#[test]
fn test_month_clamping_never_panics() {
    for month in [0, 13, 99, u32::MAX] {
        let text = format_hijri_components(&DateComponents {
            year: Some(1446),
            month: Some(month),
            day: Some(1),
        });
        let (_, name, _) = parse_hijri(&text);
        assert!(MONTH_NAMES.contains(&name.as_str()));
    }

    let low = format_hijri_components(&DateComponents::new(1446, 0, 1));
    let high = format_hijri_components(&DateComponents::new(1446, 13, 1));
    assert_eq!(low, "01 Muharram 1446");
    assert_eq!(high, "01 Dhu Al-Hijjah 1446");
}

#[test]
fn test_days_until_properties() {
    let dates = [
        noon(2024, 2, 28),
        noon(2024, 3, 1),
        noon(2025, 1, 1),
        noon(2025, 1, 10),
        noon(2026, 10, 16),
    ];

    assert_eq!(days_until(&noon(2025, 1, 1), &noon(2025, 1, 10)), 9);

    for a in &dates {
        assert_eq!(days_until(a, a), 0);
        for b in &dates {
            assert_eq!(days_until(a, b), -days_until(b, a));
            for c in &dates {
                assert_eq!(days_until(a, c), days_until(a, b) + days_until(b, c));
            }
        }
    }
}

#[test]
fn test_days_until_ignores_time_of_day() {
    let late = Utc.with_ymd_and_hms(2025, 1, 1, 23, 59, 59).unwrap();
    let early = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 1).unwrap();
    assert_eq!(days_until(&late, &early), 1);
    assert_eq!(days_until(&early, &late), -1);
}

#[test]
fn test_converter_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "locale": "fr_FR", "defaultPattern": "EEEE d MMMM yyyy", "hijriAdjustment": -1 }}"#
    )
    .unwrap();

    let config = DateConfig::load(file.path()).unwrap();
    let converter = DateConverter::new(config);

    assert_eq!(converter.to_formatted(&noon(2025, 3, 13), None), "jeudi 13 mars 2025");
    assert_eq!(converter.to_formatted_hijri(&noon(2025, 3, 13)), "12 Ramadan 1446");
    assert_eq!(
        converter.next_observance(Observance::RamadanStart, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
        NaiveDate::from_ymd_opt(2025, 3, 2)
    );
}

#[test]
fn test_config_round_trip_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dates.json");

    let config = DateConfig {
        hijri_adjustment: 2,
        ..DateConfig::default()
    };
    std::fs::write(&path, config.to_json().unwrap()).unwrap();

    assert_eq!(DateConfig::load(&path).unwrap(), config);
}

#[test]
fn test_invalid_config_is_rejected() {
    assert!(DateConfig::from_json(r#"{ "hijriAdjustment": 5 }"#).is_err());
    assert!(DateConfig::from_json("not json").is_err());

    let dir = TempDir::new().unwrap();
    assert!(DateConfig::load(dir.path().join("missing.json")).is_err());
}
