//! Home screen

use app_core::calendar::HijriMonth;
use app_core::dates::DateConverter;
use app_core::observances::Observance;
use app_state::Observable;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::sync::Arc;

use crate::coordinator::{Presenter, SharedCoordinator};
use crate::navigation::{MainTarget, QuranTarget, SettingsTarget};

/// View-model for the home screen
#[derive(Debug)]
pub struct HomeViewModel {
    coordinator: SharedCoordinator<MainTarget>,
    converter: DateConverter,
    /// Today's Hijri date line, e.g. "13 Ramadan 1446"
    pub hijri_date: Observable<String>,
    /// Today's Gregorian date line in the configured pattern
    pub gregorian_date: Observable<String>,
    /// Days until Ramadan starts (None while it is Ramadan)
    pub ramadan_countdown: Observable<Option<i64>>,
}

impl HomeViewModel {
    /// Create the view-model for the main flow
    pub fn new(coordinator: SharedCoordinator<MainTarget>, converter: DateConverter) -> Self {
        Self {
            coordinator,
            converter,
            hijri_date: Observable::default(),
            gregorian_date: Observable::default(),
            ramadan_countdown: Observable::default(),
        }
    }

    /// Recompute the date lines for `now`
    pub fn refresh<Tz>(&self, now: &DateTime<Tz>)
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let today = now.date_naive();
        self.hijri_date.set(self.converter.to_formatted_hijri(now));
        self.gregorian_date.set(self.converter.to_formatted(now, None));

        let countdown = if self.converter.hijri_date(today).hijri_month() == HijriMonth::Ramadan {
            None
        } else {
            self.converter
                .days_until_observance(Observance::RamadanStart, today)
        };
        self.ramadan_countdown.set(countdown);
    }

    /// Show the prayer times tab
    pub fn open_prayer_times(&self) {
        self.coordinator.navigate(MainTarget::PrayerTimes);
    }

    /// Show the Tasbeeh tab
    pub fn open_tasbeeh(&self) {
        self.coordinator.navigate(MainTarget::Tasbeeh);
    }

    /// Show the settings tab and its flow
    pub fn open_settings(
        &self,
        presenter: Arc<dyn Presenter<SettingsTarget>>,
    ) -> SharedCoordinator<SettingsTarget> {
        self.coordinator.navigate(MainTarget::Settings);
        self.coordinator.present_child(presenter)
    }

    /// Show the Quran tab and its flow
    pub fn open_quran(&self, presenter: Arc<dyn Presenter<QuranTarget>>) -> SharedCoordinator<QuranTarget> {
        self.coordinator.navigate(MainTarget::Quran);
        self.coordinator.present_child(presenter)
    }
}
