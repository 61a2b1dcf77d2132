//! Core date logic for iSalah
//!
//! This crate contains the calendar arithmetic shared by every screen:
//! Gregorian to Hijri conversion, date formatting, day deltas, Islamic
//! observances and the Surah catalogue used by Quran browsing.
//!
//! # Example
//!
//! ```rust
//! use app_core::dates::{days_until, to_formatted_hijri};
//! use chrono::{TimeZone, Utc};
//!
//! let date = Utc.with_ymd_and_hms(2025, 3, 13, 12, 0, 0).unwrap();
//! assert_eq!(to_formatted_hijri(&date), "13 Ramadan 1446");
//!
//! let new_year = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
//! let later = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();
//! assert_eq!(days_until(&new_year, &later), 9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calendar;
pub mod config;
pub mod dates;
pub mod error;
pub mod observances;
pub mod pattern;
pub mod quran;

pub use calendar::{
    CalendarSystem, DateComponents, Gregorian, HijriDate, HijriMonth, IslamicCivil, MONTH_NAMES,
};
pub use config::DateConfig;
pub use dates::{
    days_until, days_until_now, format_hijri_components, to_formatted, to_formatted_hijri,
    DateConverter, DEFAULT_PATTERN,
};
pub use error::{CoreError, Result};
pub use observances::Observance;
pub use quran::{Revelation, Surah};
