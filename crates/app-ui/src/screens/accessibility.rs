//! Accessibility and appearance settings

use app_state::{AccessibilityPreferences, ColorMode, Observable};

use crate::coordinator::SharedCoordinator;
use crate::navigation::SettingsTarget;
use crate::theme::{font_for, FontSpec, FontToken};

/// View-model for the accessibility screen
#[derive(Debug)]
pub struct AccessibilityViewModel {
    coordinator: SharedCoordinator<SettingsTarget>,
    /// Current preferences
    pub preferences: Observable<AccessibilityPreferences>,
    /// Appearance mode
    pub color_mode: Observable<ColorMode>,
}

impl AccessibilityViewModel {
    /// Create with saved preferences
    pub fn new(
        coordinator: SharedCoordinator<SettingsTarget>,
        preferences: AccessibilityPreferences,
        color_mode: ColorMode,
    ) -> Self {
        Self {
            coordinator,
            preferences: Observable::new(preferences),
            color_mode: Observable::new(color_mode),
        }
    }

    /// Toggle haptic feedback
    pub fn set_haptics_enabled(&self, enabled: bool) -> bool {
        self.preferences.update(|p| p.haptics_enabled = enabled)
    }

    /// Toggle reduced motion
    pub fn set_reduce_motion(&self, enabled: bool) -> bool {
        self.preferences.update(|p| p.reduce_motion = enabled)
    }

    /// Toggle bold text
    pub fn set_bold_text(&self, enabled: bool) -> bool {
        self.preferences.update(|p| p.bold_text = enabled)
    }

    /// Set the text scale (clamped)
    pub fn set_font_scale(&self, scale: f32) -> bool {
        self.preferences.update(|p| p.set_font_scale(scale))
    }

    /// Set the appearance mode
    pub fn set_color_mode(&self, mode: ColorMode) -> bool {
        self.color_mode.set(mode)
    }

    /// Restore defaults
    pub fn reset_to_defaults(&self) -> bool {
        self.preferences.set(AccessibilityPreferences::default())
    }

    /// Body font under the current preferences, for the preview row
    pub fn body_font(&self) -> FontSpec {
        self.preferences.with(|p| font_for(FontToken::Body, p))
    }

    /// Leave the screen
    pub fn done(&self) {
        tracing::debug!("Accessibility preferences: {:?}", self.preferences.get());
        self.coordinator.back();
    }
}
