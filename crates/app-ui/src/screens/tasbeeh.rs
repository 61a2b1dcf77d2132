//! Tasbeeh counter screen

use app_state::{AccessibilityPreferences, Observable, TasbeehCounter};
use tokio::sync::watch;

use crate::coordinator::SharedCoordinator;
use crate::navigation::MainTarget;

/// View-model for the Tasbeeh tab
#[derive(Debug)]
pub struct TasbeehViewModel {
    coordinator: SharedCoordinator<MainTarget>,
    /// Counter state
    pub counter: Observable<TasbeehCounter>,
    preferences: watch::Receiver<AccessibilityPreferences>,
}

impl TasbeehViewModel {
    /// Create with a counter, following the shared accessibility preferences
    pub fn new(
        coordinator: SharedCoordinator<MainTarget>,
        counter: TasbeehCounter,
        preferences: &Observable<AccessibilityPreferences>,
    ) -> Self {
        Self {
            coordinator,
            counter: Observable::new(counter),
            preferences: preferences.subscribe(),
        }
    }

    /// Count one recitation
    ///
    /// Returns true when haptic feedback should fire for a completed round.
    pub fn tap(&self) -> bool {
        let mut completed = false;
        self.counter.update(|c| completed = c.increment());
        completed && self.preferences.borrow().haptics_enabled
    }

    /// Start over
    pub fn reset(&self) {
        self.counter.update(TasbeehCounter::reset);
    }

    /// Switch to another dhikr, starting from zero
    pub fn set_dhikr(&self, dhikr: impl Into<String>, target: u32) {
        self.counter.set(TasbeehCounter::new(dhikr, target));
    }

    /// Return to the home tab
    pub fn close(&self) {
        self.coordinator.pop_to_entry();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::{Coordinator, NullPresenter};
    use std::sync::Arc;

    fn preferences(haptics: bool) -> Observable<AccessibilityPreferences> {
        Observable::new(AccessibilityPreferences {
            haptics_enabled: haptics,
            ..AccessibilityPreferences::default()
        })
    }

    fn tasbeeh(preferences: &Observable<AccessibilityPreferences>) -> TasbeehViewModel {
        let coordinator = Coordinator::<MainTarget>::new(Arc::new(NullPresenter));
        coordinator.navigate(MainTarget::Tasbeeh);
        TasbeehViewModel::new(
            coordinator,
            TasbeehCounter::new("Alhamdulillah", 3),
            preferences,
        )
    }

    #[test]
    fn test_round_triggers_haptics() {
        let vm = tasbeeh(&preferences(true));
        assert!(!vm.tap());
        assert!(!vm.tap());
        assert!(vm.tap());
        assert_eq!(vm.counter.get().rounds, 1);
        assert_eq!(vm.counter.get().count, 0);
    }

    #[test]
    fn test_haptics_disabled() {
        let vm = tasbeeh(&preferences(false));
        assert!((0..3).all(|_| !vm.tap()));
        assert_eq!(vm.counter.get().total(), 3);
    }

    #[test]
    fn test_haptics_follow_preference_changes() {
        let prefs = preferences(true);
        let vm = tasbeeh(&prefs);

        prefs.update(|p| p.haptics_enabled = false);
        assert!((0..3).all(|_| !vm.tap()));

        prefs.update(|p| p.haptics_enabled = true);
        assert!(!vm.tap());
        assert!(!vm.tap());
        assert!(vm.tap());
    }

    #[test]
    fn test_reset_and_switch() {
        let vm = tasbeeh(&preferences(true));
        vm.tap();
        vm.reset();
        assert_eq!(vm.counter.get().total(), 0);

        vm.set_dhikr("Allahu Akbar", 34);
        assert_eq!(vm.counter.get().dhikr, "Allahu Akbar");
        assert_eq!(vm.counter.get().target, 34);
    }

    #[test]
    fn test_close_returns_home_without_growing_stack() {
        let vm = tasbeeh(&preferences(true));
        vm.close();
        assert_eq!(vm.coordinator.current(), MainTarget::Home);

        for _ in 0..3 {
            vm.coordinator.navigate(MainTarget::Tasbeeh);
            vm.close();
        }
        assert_eq!(vm.coordinator.history(), vec![MainTarget::Home]);
    }
}
