//! Screen view-models
//!
//! Each view-model holds the coordinator of its flow and exposes screen
//! state as [`Observable`](app_state::Observable) fields. Actions that lead
//! somewhere call the coordinator with a target; building the destination
//! screen is left to the flow's presenter.

pub mod accessibility;
pub mod home;
pub mod location;
pub mod onboarding;
pub mod quran;
pub mod settings;
pub mod tasbeeh;

pub use accessibility::AccessibilityViewModel;
pub use home::HomeViewModel;
pub use location::LocationViewModel;
pub use onboarding::OnboardingViewModel;
pub use quran::QuranViewModel;
pub use settings::{SettingsRow, SettingsViewModel};
pub use tasbeeh::TasbeehViewModel;
