//! Date conversion and formatting
//!
//! The three operations screens call on a date:
//! - [`to_formatted_hijri`] - `"<DD> <MonthName> <Year>"` in the Islamic civil calendar
//! - [`days_until`] - signed whole days between two calendar days
//! - [`to_formatted`] - localized Gregorian formatting from a Unicode pattern
//!
//! None of them fail. Missing calendar components degrade to `0` and an
//! out-of-range month is clamped into the name table.
//!
//! [`DateConverter`] bundles the same operations with a [`DateConfig`]
//! (locale, default pattern and Hijri day adjustment).

use chrono::{DateTime, Datelike, Local, Locale, NaiveDate, TimeZone};
use std::fmt::Display;

use crate::calendar::{CalendarSystem, DateComponents, HijriDate, IslamicCivil, MONTH_NAMES};
use crate::config::DateConfig;
use crate::observances::Observance;
use crate::pattern::to_strftime;

/// Pattern used by [`DateConverter::to_formatted`] when none is given
pub const DEFAULT_PATTERN: &str = "dd MMMM yyyy, EE";

// =============================================================================
// Hijri Formatting
// =============================================================================

/// Format Hijri components as `"<DD> <MonthName> <Year>"`
///
/// Absent components count as `0`. The month name index is `month - 1`
/// clamped to `0..=11`, so `0` reads as Muharram and `13` as Dhu Al-Hijjah.
pub fn format_hijri_components(components: &DateComponents) -> String {
    let year = components.year.unwrap_or(0);
    let month = components.month.unwrap_or(0);
    let day = components.day.unwrap_or(0);

    // Clamping hides bad calendar data; log it so it can be noticed.
    if !(1..=12).contains(&month) {
        tracing::warn!("Hijri month component {} out of range, clamping", month);
    }
    let index = (i64::from(month) - 1).clamp(0, 11) as usize;

    format!("{:02} {} {}", day, MONTH_NAMES[index], year)
}

/// Format a date in the Islamic civil calendar
///
/// The calendar day is taken in the date's own time zone.
pub fn to_formatted_hijri<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format_hijri_components(&IslamicCivil.components(date.date_naive()))
}

// =============================================================================
// Day Deltas
// =============================================================================

/// Whole days from `reference` to `subject`
///
/// Both instants are reduced to their calendar day in the reference's time
/// zone. Positive when `subject` is later, zero on the same day.
pub fn days_until<Tz: TimeZone>(reference: &DateTime<Tz>, subject: &DateTime<Tz>) -> i64 {
    let start = reference.date_naive();
    let end = subject.with_timezone(&reference.timezone()).date_naive();
    end.signed_duration_since(start).num_days()
}

/// Whole days from today (local clock) to `subject`
pub fn days_until_now<Tz: TimeZone>(subject: &DateTime<Tz>) -> i64 {
    days_until(&Local::now(), &subject.with_timezone(&Local))
}

// =============================================================================
// Gregorian Formatting
// =============================================================================

/// Format a date with a Unicode pattern in the host locale
pub fn to_formatted<Tz>(date: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    to_formatted_with_locale(date, pattern, current_locale())
}

/// Format a date with a Unicode pattern in the given locale
pub fn to_formatted_with_locale<Tz>(date: &DateTime<Tz>, pattern: &str, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format_localized(&to_strftime(pattern), locale).to_string()
}

/// Locale of the host process, from `LC_ALL`, `LC_TIME` or `LANG`
///
/// Falls back to `en_US` when nothing usable is set.
pub fn current_locale() -> Locale {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.is_empty())
        .and_then(|value| parse_locale(&value))
        .unwrap_or(Locale::en_US)
}

/// Parse a locale name such as `"ar_SA.UTF-8"` or `"en-GB"`
pub fn parse_locale(name: &str) -> Option<Locale> {
    let base = name.split(['.', '@']).next().unwrap_or(name).replace('-', "_");
    Locale::try_from(base.as_str()).ok()
}

// =============================================================================
// Configured Converter
// =============================================================================

/// Date operations bound to a [`DateConfig`]
#[derive(Debug, Clone)]
pub struct DateConverter {
    config: DateConfig,
    locale: Locale,
}

impl Default for DateConverter {
    fn default() -> Self {
        Self::new(DateConfig::default())
    }
}

impl DateConverter {
    /// Create a converter, resolving the configured locale
    pub fn new(config: DateConfig) -> Self {
        let locale = parse_locale(&config.locale).unwrap_or_else(|| {
            tracing::warn!("Unknown locale {:?}, falling back to en_US", config.locale);
            Locale::en_US
        });
        Self { config, locale }
    }

    /// Active configuration
    pub fn config(&self) -> &DateConfig {
        &self.config
    }

    /// Resolved formatting locale
    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn adjustment(&self) -> i64 {
        i64::from(self.config.hijri_adjustment)
    }

    /// Hijri date for a Gregorian day, with the configured adjustment
    pub fn hijri_date(&self, date: NaiveDate) -> HijriDate {
        HijriDate::from_fixed(i64::from(date.num_days_from_ce()) + self.adjustment())
    }

    /// [`to_formatted_hijri`] with the configured adjustment
    pub fn to_formatted_hijri<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String {
        let hijri = self.hijri_date(date.date_naive());
        format_hijri_components(&DateComponents::new(hijri.year(), hijri.month(), hijri.day()))
    }

    /// Localized formatting, using the configured pattern when `pattern` is None
    pub fn to_formatted<Tz>(&self, date: &DateTime<Tz>, pattern: Option<&str>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let pattern = pattern.unwrap_or(self.config.default_pattern.as_str());
        to_formatted_with_locale(date, pattern, self.locale)
    }

    /// Same as [`days_until`]
    pub fn days_until<Tz: TimeZone>(&self, reference: &DateTime<Tz>, subject: &DateTime<Tz>) -> i64 {
        days_until(reference, subject)
    }

    /// Next Gregorian day on or after `from` that shows the observance
    pub fn next_observance(&self, observance: Observance, from: NaiveDate) -> Option<NaiveDate> {
        let adjustment = self.adjustment();
        let shifted =
            observance.next_occurrence_fixed(i64::from(from.num_days_from_ce()) + adjustment);
        let days = i32::try_from(shifted - adjustment).ok()?;
        NaiveDate::from_num_days_from_ce_opt(days)
    }

    /// Days from `from` until the observance (0 on the day itself)
    pub fn days_until_observance(&self, observance: Observance, from: NaiveDate) -> Option<i64> {
        let next = self.next_observance(observance, from)?;
        Some(next.signed_duration_since(from).num_days())
    }
}

// =============================================================================
// Tests
// =============================================================================
