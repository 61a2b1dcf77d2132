//! First-run onboarding

use app_state::Observable;

use crate::coordinator::SharedCoordinator;
use crate::navigation::{NavigationTarget, OnboardingTarget};

/// View-model driving the onboarding pages
#[derive(Debug)]
pub struct OnboardingViewModel {
    coordinator: SharedCoordinator<OnboardingTarget>,
    /// Set once the user reaches the last page
    pub completed: Observable<bool>,
}

impl OnboardingViewModel {
    /// Create for an onboarding flow
    pub fn new(coordinator: SharedCoordinator<OnboardingTarget>) -> Self {
        let completed = coordinator.current() == OnboardingTarget::Completed;
        Self {
            coordinator,
            completed: Observable::new(completed),
        }
    }

    /// Current page
    pub fn current(&self) -> OnboardingTarget {
        self.coordinator.current()
    }

    /// Title of the current page
    pub fn title(&self) -> &'static str {
        self.current().title()
    }

    /// Advance one page
    pub fn next(&self) {
        self.go_to(self.current().next());
    }

    /// Jump straight to the end
    pub fn skip(&self) {
        self.go_to(OnboardingTarget::Completed);
    }

    fn go_to(&self, target: OnboardingTarget) {
        self.coordinator.navigate(target);
        if target == OnboardingTarget::Completed && self.completed.set(true) {
            tracing::debug!("Onboarding completed");
        }
    }

    /// Fraction of pages done (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        let last = OnboardingTarget::Completed.step() as f32;
        self.current().step() as f32 / last
    }
}
