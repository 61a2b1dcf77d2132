//! Settings root screen

use serde::Serialize;

use crate::coordinator::SharedCoordinator;
use crate::navigation::{NavigationTarget, SettingsTarget};
use crate::theme::{image, ImageAsset};

/// A row on the settings screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsRow {
    /// Where the row leads
    pub target: SettingsTarget,
    /// Row title
    pub title: &'static str,
    /// Row icon
    pub icon: ImageAsset,
}

impl SettingsRow {
    /// Asset name of the row icon
    pub fn icon_name(&self) -> &'static str {
        image(self.icon)
    }
}

/// View-model for the settings root
#[derive(Debug, Clone)]
pub struct SettingsViewModel {
    coordinator: SharedCoordinator<SettingsTarget>,
}

impl SettingsViewModel {
    /// Create the view-model for the settings flow
    pub fn new(coordinator: SharedCoordinator<SettingsTarget>) -> Self {
        Self { coordinator }
    }

    /// Rows in display order
    pub fn rows(&self) -> Vec<SettingsRow> {
        SettingsTarget::rows()
            .into_iter()
            .map(|target| SettingsRow {
                title: target.title(),
                icon: target.icon(),
                target,
            })
            .collect()
    }

    /// Open a row's screen
    pub fn select(&self, target: SettingsTarget) {
        self.coordinator.navigate(target);
    }

    /// Open accessibility settings
    pub fn open_accessibility(&self) {
        self.select(SettingsTarget::Accessibility);
    }

    /// Open location settings
    pub fn open_location(&self) {
        self.select(SettingsTarget::Location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::{Coordinator, RecordingPresenter, Transition};
    use std::sync::Arc;

    #[test]
    fn test_rows() {
        let vm = SettingsViewModel::new(Coordinator::<SettingsTarget>::new(Arc::new(
            RecordingPresenter::<SettingsTarget>::new(),
        )));
        let rows = vm.rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].target, SettingsTarget::Location);
        assert_eq!(rows[0].title, "Location");
        assert_eq!(rows[0].icon_name(), "mappin.and.ellipse");
        assert_eq!(rows[1].target, SettingsTarget::Notifications);
        assert_eq!(rows[1].icon_name(), "bell.badge");
        assert_eq!(rows[4].target, SettingsTarget::About);
        assert!(rows.iter().all(|r| r.target != SettingsTarget::Root));
    }

    #[test]
    fn test_select_row() {
        let presenter = Arc::new(RecordingPresenter::<SettingsTarget>::new());
        let coordinator = Coordinator::<SettingsTarget>::new(presenter.clone());
        let vm = SettingsViewModel::new(coordinator.clone());

        vm.open_accessibility();
        assert_eq!(coordinator.current(), SettingsTarget::Accessibility);

        // Tapping the same row twice does not stack it
        vm.open_accessibility();
        assert_eq!(coordinator.depth(), 2);
        assert_eq!(presenter.last().unwrap().transition, Transition::Refresh);

        coordinator.back();
        vm.open_location();
        assert_eq!(
            coordinator.history(),
            vec![SettingsTarget::Root, SettingsTarget::Location]
        );
    }
}
