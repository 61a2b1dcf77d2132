//! Calendar systems and the Hijri date type
//!
//! Dates are decomposed through the [`CalendarSystem`] trait, which mirrors a
//! platform calendar: a component can be missing, and callers decide how to
//! degrade. Two systems are provided:
//! - [`Gregorian`] - the proleptic Gregorian calendar
//! - [`IslamicCivil`] - the tabular Islamic calendar with the civil (Friday) epoch
//!
//! The Islamic civil calendar alternates 30 and 29 day months, with the last
//! month gaining a day in 11 leap years of every 30-year cycle.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, Result};

// =============================================================================
// Constants
// =============================================================================

/// Fixed day number (days since 0001-01-01 = 1) of 1 Muharram 1 AH,
/// 16 July 622 in the Julian calendar.
pub const ISLAMIC_CIVIL_EPOCH: i64 = 227_015;

/// Hijri month names, Muharram first
pub const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi Al-Awwal",
    "Rabi Al-Thani",
    "Jumada Al-Awwal",
    "Jumada Al-Thani",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhu Al-Qidah",
    "Dhu Al-Hijjah",
];

// =============================================================================
// Calendar Decomposition
// =============================================================================

/// Components of a date in some calendar system
///
/// Any component may be absent, matching what a platform calendar hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateComponents {
    /// Year
    pub year: Option<i32>,
    /// Month number (1-based)
    pub month: Option<u32>,
    /// Day of month (1-based)
    pub day: Option<u32>,
}

impl DateComponents {
    /// Create components with every field present
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        }
    }
}

/// A calendar system able to decompose a Gregorian day into its own components
pub trait CalendarSystem {
    /// Stable identifier (e.g. "gregorian", "islamic-civil")
    fn identifier(&self) -> &'static str;

    /// Decompose a day into year, month and day
    fn components(&self, date: NaiveDate) -> DateComponents;
}

/// Proleptic Gregorian calendar
#[derive(Debug, Clone, Copy, Default)]
pub struct Gregorian;

impl CalendarSystem for Gregorian {
    fn identifier(&self) -> &'static str {
        "gregorian"
    }

    fn components(&self, date: NaiveDate) -> DateComponents {
        DateComponents::new(date.year(), date.month(), date.day())
    }
}

/// Tabular Islamic calendar, civil epoch
#[derive(Debug, Clone, Copy, Default)]
pub struct IslamicCivil;

impl CalendarSystem for IslamicCivil {
    fn identifier(&self) -> &'static str {
        "islamic-civil"
    }

    fn components(&self, date: NaiveDate) -> DateComponents {
        let hijri = HijriDate::from_gregorian(date);
        DateComponents::new(hijri.year, hijri.month, hijri.day)
    }
}

// =============================================================================
// Hijri Months
// =============================================================================

/// The twelve Hijri months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HijriMonth {
    /// Month 1
    Muharram,
    /// Month 2
    Safar,
    /// Month 3
    RabiAlAwwal,
    /// Month 4
    RabiAlThani,
    /// Month 5
    JumadaAlAwwal,
    /// Month 6
    JumadaAlThani,
    /// Month 7
    Rajab,
    /// Month 8
    Shaban,
    /// Month 9
    Ramadan,
    /// Month 10
    Shawwal,
    /// Month 11
    DhuAlQidah,
    /// Month 12
    DhuAlHijjah,
}

impl HijriMonth {
    /// Get all months in order
    pub fn all() -> [HijriMonth; 12] {
        [
            HijriMonth::Muharram,
            HijriMonth::Safar,
            HijriMonth::RabiAlAwwal,
            HijriMonth::RabiAlThani,
            HijriMonth::JumadaAlAwwal,
            HijriMonth::JumadaAlThani,
            HijriMonth::Rajab,
            HijriMonth::Shaban,
            HijriMonth::Ramadan,
            HijriMonth::Shawwal,
            HijriMonth::DhuAlQidah,
            HijriMonth::DhuAlHijjah,
        ]
    }

    /// Look up a month by its 1-based number
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        Self::all().get(index).copied()
    }

    /// 1-based month number
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Display name from [`MONTH_NAMES`]
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[*self as usize]
    }
}

impl fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Hijri Date
// =============================================================================

/// A date in the Islamic civil calendar
///
/// Values built through [`HijriDate::new`] or the conversion functions always
/// hold a month in 1-12 and a day within that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawHijriDate")]
pub struct HijriDate {
    year: i32,
    month: u32,
    day: u32,
}

/// Unvalidated wire form of [`HijriDate`]
#[derive(Deserialize)]
struct RawHijriDate {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<RawHijriDate> for HijriDate {
    type Error = CoreError;

    fn try_from(raw: RawHijriDate) -> Result<Self> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl HijriDate {
    /// Create a validated Hijri date
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > Self::days_in_month(year, month) {
            return Err(CoreError::InvalidHijriDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Convert a Gregorian day
    pub fn from_gregorian(date: NaiveDate) -> Self {
        Self::from_fixed(i64::from(date.num_days_from_ce()))
    }

    /// Convert a fixed day number (0001-01-01 Gregorian = 1)
    pub fn from_fixed(fixed: i64) -> Self {
        let year = (30 * (fixed - ISLAMIC_CIVIL_EPOCH) + 10_646).div_euclid(10_631);
        let prior_days = fixed - fixed_from_islamic(year, 1, 1);
        let month = (11 * prior_days + 330).div_euclid(325);
        let day = fixed - fixed_from_islamic(year, month, 1) + 1;

        Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        }
    }

    /// Fixed day number of this date
    pub fn to_fixed(&self) -> i64 {
        fixed_from_islamic(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        )
    }

    /// Convert back to a Gregorian day (None outside chrono's range)
    pub fn to_gregorian(&self) -> Option<NaiveDate> {
        let days = i32::try_from(self.to_fixed()).ok()?;
        NaiveDate::from_num_days_from_ce_opt(days)
    }

    /// Shift by a number of days
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_fixed(self.to_fixed() + days)
    }

    /// Hijri year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Month as an enum value
    pub fn hijri_month(&self) -> HijriMonth {
        HijriMonth::from_number(self.month).unwrap_or(HijriMonth::Muharram)
    }

    /// Month display name
    pub fn month_name(&self) -> &'static str {
        self.hijri_month().name()
    }

    /// Check whether a Hijri year has 355 days
    pub fn is_leap_year(year: i32) -> bool {
        (14 + 11 * i64::from(year)).rem_euclid(30) < 11
    }

    /// Number of days in a month (0 for an invalid month)
    pub fn days_in_month(year: i32, month: u32) -> u32 {
        match month {
            12 if Self::is_leap_year(year) => 30,
            1..=12 if month % 2 == 1 => 30,
            1..=12 => 29,
            _ => 0,
        }
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} {} {}", self.day, self.month_name(), self.year)
    }
}

/// Fixed day number of a Hijri year/month/day
pub(crate) fn fixed_from_islamic(year: i64, month: i64, day: i64) -> i64 {
    day + 29 * (month - 1)
        + (6 * month - 1).div_euclid(11)
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(30)
        + ISLAMIC_CIVIL_EPOCH
        - 1
}

// =============================================================================
// Tests
// =============================================================================
