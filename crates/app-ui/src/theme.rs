//! Colors, fonts and image assets for iSalah
//!
//! Style lookups are plain functions over immutable tables. Callers pass the
//! color scheme and text scale explicitly; nothing here holds state.
//!
//! ```rust
//! use app_ui::theme::{color, font, ColorScheme, ColorToken, FontToken};
//!
//! assert_eq!(color(ColorToken::Primary, ColorScheme::Light), "#0E7C66");
//! assert_eq!(font(FontToken::Body, 1.5).size, 25.5);
//! ```

use app_state::preferences::{AccessibilityPreferences, ColorMode, MAX_FONT_SCALE, MIN_FONT_SCALE};
use serde::{Deserialize, Serialize};

/// A color as a hex string (e.g. "#FFFFFF")
pub type Color = &'static str;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

// =============================================================================
// Colors
// =============================================================================

/// Light or dark palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light palette
    #[default]
    Light,
    /// Dark palette
    Dark,
}

impl ColorScheme {
    /// Resolve the user's color mode against the system setting
    pub fn resolve(mode: ColorMode, system_dark: bool) -> Self {
        if mode.is_dark(system_dark) {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }
}

/// Named colors used by screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    /// Brand green
    Primary,
    /// Muted brand tone
    Secondary,
    /// Gold highlight
    Accent,
    /// Screen background
    Background,
    /// Cards and sheets
    Surface,
    /// Main text
    TextPrimary,
    /// Secondary text
    TextSecondary,
    /// Separators
    Divider,
}

impl ColorToken {
    /// Get all tokens
    pub fn all() -> [ColorToken; 8] {
        [
            ColorToken::Primary,
            ColorToken::Secondary,
            ColorToken::Accent,
            ColorToken::Background,
            ColorToken::Surface,
            ColorToken::TextPrimary,
            ColorToken::TextSecondary,
            ColorToken::Divider,
        ]
    }
}

/// Color for a token in a scheme
pub fn color(token: ColorToken, scheme: ColorScheme) -> Color {
    match (token, scheme) {
        (ColorToken::Primary, ColorScheme::Light) => "#0E7C66",
        (ColorToken::Primary, ColorScheme::Dark) => "#34C8A4",
        (ColorToken::Secondary, ColorScheme::Light) => "#5B8C7E",
        (ColorToken::Secondary, ColorScheme::Dark) => "#8FBFB1",
        (ColorToken::Accent, _) => "#D4A437",
        (ColorToken::Background, ColorScheme::Light) => "#FFFFFF",
        (ColorToken::Background, ColorScheme::Dark) => "#0B1412",
        (ColorToken::Surface, ColorScheme::Light) => "#F3F6F5",
        (ColorToken::Surface, ColorScheme::Dark) => "#16211E",
        (ColorToken::TextPrimary, ColorScheme::Light) => "#111827",
        (ColorToken::TextPrimary, ColorScheme::Dark) => "#F9FAFB",
        (ColorToken::TextSecondary, ColorScheme::Light) => "#6B7280",
        (ColorToken::TextSecondary, ColorScheme::Dark) => "#9CA3AF",
        (ColorToken::Divider, ColorScheme::Light) => "#E5E7EB",
        (ColorToken::Divider, ColorScheme::Dark) => "#27312E",
    }
}

// =============================================================================
// Fonts
// =============================================================================

/// Named text styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontToken {
    /// Screen headers
    LargeTitle,
    /// Section titles
    Title,
    /// Row titles
    Headline,
    /// Body text
    Body,
    /// Footnotes
    Caption,
    /// Quran text
    Arabic,
    /// Tasbeeh count
    Counter,
}

/// A resolved font
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font family name
    pub family: String,
    /// Size in points
    pub size: f32,
    /// Weight (100-900)
    pub weight: u16,
}

/// Base family, size and weight for a token
fn base_font(token: FontToken) -> (&'static str, f32, u16) {
    match token {
        FontToken::LargeTitle => ("Inter", 34.0, 700),
        FontToken::Title => ("Inter", 22.0, 600),
        FontToken::Headline => ("Inter", 17.0, 600),
        FontToken::Body => ("Inter", 17.0, 400),
        FontToken::Caption => ("Inter", 12.0, 400),
        FontToken::Arabic => ("Amiri Quran", 26.0, 400),
        FontToken::Counter => ("Inter", 64.0, 300),
    }
}

/// Font for a token at a text scale
///
/// The scale is clamped to the range offered in accessibility settings.
pub fn font(token: FontToken, scale: f32) -> FontSpec {
    let (family, size, weight) = base_font(token);
    let scale = if scale.is_finite() {
        scale.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE)
    } else {
        1.0
    };
    FontSpec {
        family: family.to_string(),
        size: size * scale,
        weight,
    }
}

/// Font for a token under the user's accessibility preferences
pub fn font_for(token: FontToken, preferences: &AccessibilityPreferences) -> FontSpec {
    let mut spec = font(token, preferences.font_scale);
    if preferences.bold_text {
        spec.weight = (spec.weight + 200).min(900);
    }
    spec
}

// =============================================================================
// Images
// =============================================================================

/// Image assets referenced by screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageAsset {
    /// Home tab
    TabHome,
    /// Prayer times tab
    TabPrayerTimes,
    /// Qibla tab
    TabQibla,
    /// Tasbeeh tab
    TabTasbeeh,
    /// Quran tab
    TabQuran,
    /// Settings tab
    TabSettings,
    /// Accessibility row
    Accessibility,
    /// Location row
    Location,
    /// Appearance row
    Appearance,
    /// Notifications row
    Notifications,
    /// About row
    About,
    /// Empty bookmark
    Bookmark,
    /// Filled bookmark
    BookmarkFilled,
    /// Onboarding illustration
    OnboardingWelcome,
}

/// Asset name for an image
pub fn image(asset: ImageAsset) -> &'static str {
    match asset {
        ImageAsset::TabHome => "house.fill",
        ImageAsset::TabPrayerTimes => "clock.fill",
        ImageAsset::TabQibla => "location.north.circle.fill",
        ImageAsset::TabTasbeeh => "circle.grid.3x3.fill",
        ImageAsset::TabQuran => "book.fill",
        ImageAsset::TabSettings => "gearshape.fill",
        ImageAsset::Accessibility => "accessibility",
        ImageAsset::Location => "mappin.and.ellipse",
        ImageAsset::Appearance => "circle.lefthalf.filled",
        ImageAsset::Notifications => "bell.badge",
        ImageAsset::About => "info.circle",
        ImageAsset::Bookmark => "bookmark",
        ImageAsset::BookmarkFilled => "bookmark.fill",
        ImageAsset::OnboardingWelcome => "onboarding-mosque",
    }
}
