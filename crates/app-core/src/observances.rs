//! Islamic observances
//!
//! Observances fall on a fixed Hijri month and day, so the next occurrence is
//! either this Hijri year's date or next year's.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{fixed_from_islamic, HijriDate, HijriMonth};

/// Recurring dates in the Hijri calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Observance {
    /// 1 Muharram
    IslamicNewYear,
    /// 10 Muharram
    Ashura,
    /// 12 Rabi Al-Awwal
    Mawlid,
    /// 27 Rajab
    IsraMiraj,
    /// 15 Shaban
    MidShaban,
    /// 1 Ramadan
    RamadanStart,
    /// 27 Ramadan
    LaylatAlQadr,
    /// 1 Shawwal
    EidAlFitr,
    /// 9 Dhu Al-Hijjah
    DayOfArafah,
    /// 10 Dhu Al-Hijjah
    EidAlAdha,
}

impl Observance {
    /// Get all observances in Hijri year order
    pub fn all() -> [Observance; 10] {
        [
            Observance::IslamicNewYear,
            Observance::Ashura,
            Observance::Mawlid,
            Observance::IsraMiraj,
            Observance::MidShaban,
            Observance::RamadanStart,
            Observance::LaylatAlQadr,
            Observance::EidAlFitr,
            Observance::DayOfArafah,
            Observance::EidAlAdha,
        ]
    }

    /// Hijri month and day of the observance
    pub fn hijri_month_day(&self) -> (HijriMonth, u32) {
        match self {
            Observance::IslamicNewYear => (HijriMonth::Muharram, 1),
            Observance::Ashura => (HijriMonth::Muharram, 10),
            Observance::Mawlid => (HijriMonth::RabiAlAwwal, 12),
            Observance::IsraMiraj => (HijriMonth::Rajab, 27),
            Observance::MidShaban => (HijriMonth::Shaban, 15),
            Observance::RamadanStart => (HijriMonth::Ramadan, 1),
            Observance::LaylatAlQadr => (HijriMonth::Ramadan, 27),
            Observance::EidAlFitr => (HijriMonth::Shawwal, 1),
            Observance::DayOfArafah => (HijriMonth::DhuAlHijjah, 9),
            Observance::EidAlAdha => (HijriMonth::DhuAlHijjah, 10),
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Observance::IslamicNewYear => "Islamic New Year",
            Observance::Ashura => "Ashura",
            Observance::Mawlid => "Mawlid an-Nabi",
            Observance::IsraMiraj => "Isra and Mi'raj",
            Observance::MidShaban => "Mid-Shaban",
            Observance::RamadanStart => "Ramadan",
            Observance::LaylatAlQadr => "Laylat al-Qadr",
            Observance::EidAlFitr => "Eid al-Fitr",
            Observance::DayOfArafah => "Day of Arafah",
            Observance::EidAlAdha => "Eid al-Adha",
        }
    }

    /// Fixed day number of the next occurrence on or after `from`
    pub fn next_occurrence_fixed(&self, from: i64) -> i64 {
        let (month, day) = self.hijri_month_day();
        let (month, day) = (i64::from(month.number()), i64::from(day));
        let year = i64::from(HijriDate::from_fixed(from).year());

        let this_year = fixed_from_islamic(year, month, day);
        if this_year >= from {
            this_year
        } else {
            fixed_from_islamic(year + 1, month, day)
        }
    }

    /// Next Gregorian day on or after `from` (civil calendar, no adjustment)
    pub fn next_occurrence(&self, from: NaiveDate) -> Option<NaiveDate> {
        let fixed = self.next_occurrence_fixed(i64::from(from.num_days_from_ce()));
        NaiveDate::from_num_days_from_ce_opt(i32::try_from(fixed).ok()?)
    }

    /// Days from `from` until the next occurrence
    pub fn days_until(&self, from: NaiveDate) -> Option<i64> {
        let next = self.next_occurrence(from)?;
        Some(next.signed_duration_since(from).num_days())
    }
}

/// All observances with their next date, soonest first
pub fn upcoming(from: NaiveDate) -> Vec<(Observance, NaiveDate)> {
    let mut dates: Vec<_> = Observance::all()
        .into_iter()
        .filter_map(|o| o.next_occurrence(from).map(|date| (o, date)))
        .collect();
    dates.sort_by_key(|(_, date)| *date);
    dates
}
