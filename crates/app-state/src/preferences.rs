//! User preferences edited from the settings flow
//!
//! Only the data shape lives here; storing it is up to the host app.

use serde::{Deserialize, Serialize};

/// Smallest text scale offered
pub const MIN_FONT_SCALE: f32 = 0.8;

/// Largest text scale offered
pub const MAX_FONT_SCALE: f32 = 2.0;

/// Accessibility preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityPreferences {
    /// Haptic feedback on taps and counter increments
    #[serde(default = "default_true")]
    pub haptics_enabled: bool,

    /// Reduce motion in transitions
    #[serde(default)]
    pub reduce_motion: bool,

    /// Use bold text weights
    #[serde(default)]
    pub bold_text: bool,

    /// Text scale multiplier
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
}

fn default_true() -> bool {
    true
}

fn default_font_scale() -> f32 {
    1.0
}

impl Default for AccessibilityPreferences {
    fn default() -> Self {
        Self {
            haptics_enabled: true,
            reduce_motion: false,
            bold_text: false,
            font_scale: default_font_scale(),
        }
    }
}

impl AccessibilityPreferences {
    /// Set the text scale, clamped to the supported range
    pub fn set_font_scale(&mut self, scale: f32) {
        self.font_scale = if scale.is_finite() {
            scale.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE)
        } else {
            default_font_scale()
        };
    }
}

/// Appearance mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow the system setting
    #[default]
    System,
    /// Always light
    Light,
    /// Always dark
    Dark,
}

impl ColorMode {
    /// Whether the dark palette applies, given the system setting
    pub fn is_dark(&self, system_dark: bool) -> bool {
        match self {
            ColorMode::System => system_dark,
            ColorMode::Light => false,
            ColorMode::Dark => true,
        }
    }
}
