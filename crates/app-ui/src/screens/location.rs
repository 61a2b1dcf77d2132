//! Location settings screen
//!
//! Saved locations are searched locally. The picker sheet opens over the
//! screen; choosing a location closes it.

use app_state::{LocationError, Observable, SavedLocation};

use crate::coordinator::SharedCoordinator;
use crate::navigation::SettingsTarget;

/// View-model for the location screen
#[derive(Debug)]
pub struct LocationViewModel {
    coordinator: SharedCoordinator<SettingsTarget>,
    /// Whether the picker sheet is shown
    pub is_location_sheet_active: Observable<bool>,
    /// Search text in the picker
    pub query: Observable<String>,
    /// Saved locations in insertion order
    pub saved: Observable<Vec<SavedLocation>>,
    /// Location used for prayer times
    pub selected: Observable<Option<SavedLocation>>,
}

impl LocationViewModel {
    /// Create with the user's saved locations
    pub fn new(coordinator: SharedCoordinator<SettingsTarget>, saved: Vec<SavedLocation>) -> Self {
        Self {
            coordinator,
            is_location_sheet_active: Observable::new(false),
            query: Observable::default(),
            selected: Observable::new(saved.first().cloned()),
            saved: Observable::new(saved),
        }
    }

    /// Open the picker sheet
    pub fn show_sheet(&self) {
        self.is_location_sheet_active.set(true);
    }

    /// Close the picker sheet and clear the search
    pub fn dismiss_sheet(&self) {
        self.is_location_sheet_active.set(false);
        self.query.set(String::new());
    }

    /// Update the search text
    pub fn set_query(&self, query: impl Into<String>) {
        self.query.set(query.into());
    }

    /// Saved locations matching the search text
    pub fn results(&self) -> Vec<SavedLocation> {
        let query = self.query.get();
        self.saved
            .with(|saved| saved.iter().filter(|l| l.matches(&query)).cloned().collect())
    }

    /// Save a new location
    ///
    /// A location with the same display name replaces the earlier one.
    pub fn add_location(
        &self,
        name: &str,
        country: &str,
        latitude: f64,
        longitude: f64,
        time_zone: &str,
    ) -> Result<SavedLocation, LocationError> {
        let location = SavedLocation::new(name, country, latitude, longitude, time_zone)?;
        self.saved.update(|saved| {
            saved.retain(|l| l.display_name() != location.display_name());
            saved.push(location.clone());
        });
        Ok(location)
    }

    /// Remove a saved location by display name (returns false if absent)
    pub fn remove_location(&self, display_name: &str) -> bool {
        let removed = self
            .saved
            .update(|saved| saved.retain(|l| l.display_name() != display_name));
        if removed {
            self.selected.update(|selected| {
                if selected.as_ref().is_some_and(|l| l.display_name() == display_name) {
                    *selected = None;
                }
            });
        }
        removed
    }

    /// Use a location and close the sheet
    pub fn select(&self, location: SavedLocation) {
        tracing::debug!("Selected location {}", location.display_name());
        self.selected.set(Some(location));
        self.dismiss_sheet();
    }

    /// Leave the screen
    pub fn done(&self) {
        self.dismiss_sheet();
        self.coordinator.back();
    }
}
