//! Navigation targets for iSalah
//!
//! This module provides the type-safe vocabulary coordinators work with:
//! - Flows and their closed sets of navigation targets
//! - Navigation stacks
//! - Deep-link paths and the router that parses them

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use thiserror::Error;

use crate::theme::ImageAsset;

// =============================================================================
// Errors
// =============================================================================

/// Navigation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// No route matches the path
    #[error("No route matches path: {0}")]
    UnknownPath(String),

    /// A path or query parameter could not be parsed
    #[error("Invalid route parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Raw value
        value: String,
    },
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;

/// Parameters for a route
pub type RouteParams = HashMap<String, String>;

// =============================================================================
// Flows and Targets
// =============================================================================

/// A group of screens reachable from one entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    /// Tabbed main screens
    Main,
    /// Settings screens
    Settings,
    /// First-launch onboarding
    Onboarding,
    /// Quran browsing
    Quran,
}

impl Flow {
    /// Get all flows
    pub fn all() -> [Flow; 4] {
        [Flow::Main, Flow::Settings, Flow::Onboarding, Flow::Quran]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Flow::Main => "Main",
            Flow::Settings => "Settings",
            Flow::Onboarding => "Onboarding",
            Flow::Quran => "Quran",
        }
    }
}

/// A screen within a flow
///
/// Each flow has one implementing enum, so the set of targets is closed.
/// `is_valid` covers targets that carry data (e.g. a surah number).
pub trait NavigationTarget: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// The flow this target belongs to
    const FLOW: Flow;

    /// The flow's entry target
    fn entry() -> Self;

    /// Whether the target's data is in range
    fn is_valid(&self) -> bool {
        true
    }

    /// Screen title
    fn title(&self) -> &'static str;

    /// Deep-link path
    fn to_path(&self) -> String;
}

/// Main flow targets (the tab bar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MainTarget {
    /// Today's date and next prayer
    #[default]
    Home,
    /// Prayer times table
    PrayerTimes,
    /// Qibla compass
    Qibla,
    /// Tasbeeh counter
    Tasbeeh,
    /// Opens the Quran flow
    Quran,
    /// Opens the Settings flow
    Settings,
}

impl MainTarget {
    /// Get all tabs in order
    pub fn all() -> [MainTarget; 6] {
        [
            MainTarget::Home,
            MainTarget::PrayerTimes,
            MainTarget::Qibla,
            MainTarget::Tasbeeh,
            MainTarget::Quran,
            MainTarget::Settings,
        ]
    }

    /// The child flow this target presents, if any
    pub fn presents_flow(&self) -> Option<Flow> {
        match self {
            MainTarget::Quran => Some(Flow::Quran),
            MainTarget::Settings => Some(Flow::Settings),
            _ => None,
        }
    }

    /// Tab icon
    pub fn icon(&self) -> ImageAsset {
        match self {
            MainTarget::Home => ImageAsset::TabHome,
            MainTarget::PrayerTimes => ImageAsset::TabPrayerTimes,
            MainTarget::Qibla => ImageAsset::TabQibla,
            MainTarget::Tasbeeh => ImageAsset::TabTasbeeh,
            MainTarget::Quran => ImageAsset::TabQuran,
            MainTarget::Settings => ImageAsset::TabSettings,
        }
    }
}

impl NavigationTarget for MainTarget {
    const FLOW: Flow = Flow::Main;

    fn entry() -> Self {
        MainTarget::Home
    }

    fn title(&self) -> &'static str {
        match self {
            MainTarget::Home => "Home",
            MainTarget::PrayerTimes => "Prayer Times",
            MainTarget::Qibla => "Qibla",
            MainTarget::Tasbeeh => "Tasbeeh",
            MainTarget::Quran => "Quran",
            MainTarget::Settings => "Settings",
        }
    }

    fn to_path(&self) -> String {
        match self {
            MainTarget::Home => "/",
            MainTarget::PrayerTimes => "/prayer-times",
            MainTarget::Qibla => "/qibla",
            MainTarget::Tasbeeh => "/tasbeeh",
            MainTarget::Quran => "/quran",
            MainTarget::Settings => "/settings",
        }
        .to_string()
    }
}

/// Settings flow targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SettingsTarget {
    /// Settings list
    #[default]
    Root,
    /// Accessibility options
    Accessibility,
    /// Prayer location
    Location,
    /// Color mode
    Appearance,
    /// Prayer notifications
    Notifications,
    /// About the app
    About,
}

impl SettingsTarget {
    /// Rows shown on the settings list, in order
    pub fn rows() -> [SettingsTarget; 5] {
        [
            SettingsTarget::Location,
            SettingsTarget::Notifications,
            SettingsTarget::Appearance,
            SettingsTarget::Accessibility,
            SettingsTarget::About,
        ]
    }

    /// Row icon
    pub fn icon(&self) -> ImageAsset {
        match self {
            SettingsTarget::Root => ImageAsset::TabSettings,
            SettingsTarget::Accessibility => ImageAsset::Accessibility,
            SettingsTarget::Location => ImageAsset::Location,
            SettingsTarget::Appearance => ImageAsset::Appearance,
            SettingsTarget::Notifications => ImageAsset::Notifications,
            SettingsTarget::About => ImageAsset::About,
        }
    }
}

impl NavigationTarget for SettingsTarget {
    const FLOW: Flow = Flow::Settings;

    fn entry() -> Self {
        SettingsTarget::Root
    }

    fn title(&self) -> &'static str {
        match self {
            SettingsTarget::Root => "Settings",
            SettingsTarget::Accessibility => "Accessibility",
            SettingsTarget::Location => "Location",
            SettingsTarget::Appearance => "Appearance",
            SettingsTarget::Notifications => "Notifications",
            SettingsTarget::About => "About",
        }
    }

    fn to_path(&self) -> String {
        match self {
            SettingsTarget::Root => "/settings",
            SettingsTarget::Accessibility => "/settings/accessibility",
            SettingsTarget::Location => "/settings/location",
            SettingsTarget::Appearance => "/settings/appearance",
            SettingsTarget::Notifications => "/settings/notifications",
            SettingsTarget::About => "/settings/about",
        }
        .to_string()
    }
}

/// Onboarding flow targets, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingTarget {
    /// Welcome page
    #[default]
    Welcome,
    /// Location permission request
    Location,
    /// Notification permission request
    Notifications,
    /// Onboarding finished
    Completed,
}

impl OnboardingTarget {
    /// Get all steps in order
    pub fn all() -> [OnboardingTarget; 4] {
        [
            OnboardingTarget::Welcome,
            OnboardingTarget::Location,
            OnboardingTarget::Notifications,
            OnboardingTarget::Completed,
        ]
    }

    /// The following step (`Completed` stays `Completed`)
    pub fn next(&self) -> OnboardingTarget {
        match self {
            OnboardingTarget::Welcome => OnboardingTarget::Location,
            OnboardingTarget::Location => OnboardingTarget::Notifications,
            OnboardingTarget::Notifications | OnboardingTarget::Completed => {
                OnboardingTarget::Completed
            }
        }
    }

    /// Zero-based step index
    pub fn step(&self) -> usize {
        *self as usize
    }
}

impl NavigationTarget for OnboardingTarget {
    const FLOW: Flow = Flow::Onboarding;

    fn entry() -> Self {
        OnboardingTarget::Welcome
    }

    fn title(&self) -> &'static str {
        match self {
            OnboardingTarget::Welcome => "Welcome",
            OnboardingTarget::Location => "Your Location",
            OnboardingTarget::Notifications => "Prayer Alerts",
            OnboardingTarget::Completed => "All Set",
        }
    }

    fn to_path(&self) -> String {
        match self {
            OnboardingTarget::Welcome => "/onboarding",
            OnboardingTarget::Location => "/onboarding/location",
            OnboardingTarget::Notifications => "/onboarding/notifications",
            OnboardingTarget::Completed => "/onboarding/done",
        }
        .to_string()
    }
}

/// Quran flow targets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "target", rename_all = "kebab-case")]
pub enum QuranTarget {
    /// All surahs
    #[default]
    SurahList,
    /// One surah, optionally scrolled to an ayah
    Surah {
        /// Surah number (1-114)
        number: u16,
        /// Ayah to scroll to
        #[serde(skip_serializing_if = "Option::is_none")]
        ayah: Option<u16>,
    },
    /// Bookmarked surahs
    Bookmarks,
}

impl NavigationTarget for QuranTarget {
    const FLOW: Flow = Flow::Quran;

    fn entry() -> Self {
        QuranTarget::SurahList
    }

    fn is_valid(&self) -> bool {
        match self {
            QuranTarget::Surah { number, ayah } => match app_core::quran::surah(*number) {
                Some(surah) => ayah.map_or(true, |a| (1..=surah.ayah_count).contains(&a)),
                None => false,
            },
            _ => true,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            QuranTarget::SurahList => "Quran",
            QuranTarget::Surah { number, .. } => {
                app_core::quran::surah(*number).map_or("Surah", |s| s.name)
            }
            QuranTarget::Bookmarks => "Bookmarks",
        }
    }

    fn to_path(&self) -> String {
        match self {
            QuranTarget::SurahList => "/quran".to_string(),
            QuranTarget::Surah { number, ayah } => match ayah {
                Some(ayah) => format!("/quran/surah/{}?ayah={}", number, ayah),
                None => format!("/quran/surah/{}", number),
            },
            QuranTarget::Bookmarks => "/quran/bookmarks".to_string(),
        }
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry<T> {
    /// The target
    pub target: T,
    /// Unique key for this entry
    pub key: String,
}

impl<T> StackEntry<T> {
    /// Create a new stack entry
    pub fn new(target: T) -> Self {
        Self {
            target,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack for one flow
///
/// The bottom entry is the flow's entry target and is never popped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack<T> {
    /// Stack entries (bottom to top), never empty
    entries: Vec<StackEntry<T>>,
}

impl<T: Clone> NavigationStack<T> {
    /// Create a new navigation stack with a root target
    pub fn new(root: T) -> Self {
        Self {
            entries: vec![StackEntry::new(root)],
        }
    }

    /// Push a target onto the stack
    pub fn push(&mut self, target: T) {
        self.entries.push(StackEntry::new(target));
    }

    /// Pop the top target (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Pop to root (returns true if anything was popped)
    pub fn pop_to_root(&mut self) -> bool {
        let popped = self.entries.len() > 1;
        self.entries.truncate(1);
        popped
    }

    /// Replace the top target
    pub fn replace(&mut self, target: T) {
        if let Some(last) = self.entries.last_mut() {
            *last = StackEntry::new(target);
        }
    }

    /// Get the current (top) target
    pub fn current(&self) -> &T {
        &self.current_entry().target
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry<T> {
        // entries is never empty: `new` seeds it and `pop` keeps the root
        &self.entries[self.entries.len() - 1]
    }

    /// Get the root target
    pub fn root(&self) -> &T {
        &self.entries[0].target
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry<T>] {
        &self.entries
    }

    /// Targets from bottom to top
    pub fn targets(&self) -> Vec<T> {
        self.entries.iter().map(|e| e.target.clone()).collect()
    }
}

// =============================================================================
// Deep Links
// =============================================================================

/// A target in any flow, as produced by the router
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "flow", content = "target", rename_all = "lowercase")]
pub enum DeepLink {
    /// Main flow target
    Main(MainTarget),
    /// Settings flow target
    Settings(SettingsTarget),
    /// Onboarding flow target
    Onboarding(OnboardingTarget),
    /// Quran flow target
    Quran(QuranTarget),
}

impl DeepLink {
    /// Flow the link opens
    pub fn flow(&self) -> Flow {
        match self {
            DeepLink::Main(_) => Flow::Main,
            DeepLink::Settings(_) => Flow::Settings,
            DeepLink::Onboarding(_) => Flow::Onboarding,
            DeepLink::Quran(_) => Flow::Quran,
        }
    }

    /// Path of the linked target
    pub fn to_path(&self) -> String {
        match self {
            DeepLink::Main(t) => t.to_path(),
            DeepLink::Settings(t) => t.to_path(),
            DeepLink::Onboarding(t) => t.to_path(),
            DeepLink::Quran(t) => t.to_path(),
        }
    }
}

/// Route pattern for matching
struct RoutePattern {
    /// Pattern segments
    segments: Vec<PatternSegment>,
    /// Link builder
    builder: fn(&RouteParams) -> Result<DeepLink>,
}

/// Segment type in a pattern
#[derive(Debug, Clone)]
enum PatternSegment {
    /// Literal segment
    Literal(String),
    /// Parameter segment
    Param(String),
}

/// Router for parsing deep-link paths
///
/// Paths of main targets that open a child flow (`/quran`, `/settings`)
/// resolve to that flow's entry target.
pub struct Router {
    /// Route patterns
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a new router with all routes
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        // Main
        router.add_route("/", |_| Ok(DeepLink::Main(MainTarget::Home)));
        router.add_route("/prayer-times", |_| Ok(DeepLink::Main(MainTarget::PrayerTimes)));
        router.add_route("/qibla", |_| Ok(DeepLink::Main(MainTarget::Qibla)));
        router.add_route("/tasbeeh", |_| Ok(DeepLink::Main(MainTarget::Tasbeeh)));

        // Settings
        router.add_route("/settings", |_| Ok(DeepLink::Settings(SettingsTarget::Root)));
        router.add_route("/settings/accessibility", |_| {
            Ok(DeepLink::Settings(SettingsTarget::Accessibility))
        });
        router.add_route("/settings/location", |_| {
            Ok(DeepLink::Settings(SettingsTarget::Location))
        });
        router.add_route("/settings/appearance", |_| {
            Ok(DeepLink::Settings(SettingsTarget::Appearance))
        });
        router.add_route("/settings/notifications", |_| {
            Ok(DeepLink::Settings(SettingsTarget::Notifications))
        });
        router.add_route("/settings/about", |_| Ok(DeepLink::Settings(SettingsTarget::About)));

        // Onboarding
        router.add_route("/onboarding", |_| {
            Ok(DeepLink::Onboarding(OnboardingTarget::Welcome))
        });
        router.add_route("/onboarding/location", |_| {
            Ok(DeepLink::Onboarding(OnboardingTarget::Location))
        });
        router.add_route("/onboarding/notifications", |_| {
            Ok(DeepLink::Onboarding(OnboardingTarget::Notifications))
        });
        router.add_route("/onboarding/done", |_| {
            Ok(DeepLink::Onboarding(OnboardingTarget::Completed))
        });

        // Quran
        router.add_route("/quran", |_| Ok(DeepLink::Quran(QuranTarget::SurahList)));
        router.add_route("/quran/bookmarks", |_| Ok(DeepLink::Quran(QuranTarget::Bookmarks)));
        router.add_route("/quran/surah/:number", |params| {
            let target = QuranTarget::Surah {
                number: parse_param(params, "number")?,
                ayah: match params.get("ayah") {
                    Some(_) => Some(parse_param(params, "ayah")?),
                    None => None,
                },
            };
            if !target.is_valid() {
                return Err(NavigationError::InvalidParameter {
                    name: "number".to_string(),
                    value: params.get("number").cloned().unwrap_or_default(),
                });
            }
            Ok(DeepLink::Quran(target))
        });

        router
    }

    /// Add a route pattern
    fn add_route(&mut self, pattern: &str, builder: fn(&RouteParams) -> Result<DeepLink>) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(param) = s.strip_prefix(':') {
                    PatternSegment::Param(param.to_string())
                } else {
                    PatternSegment::Literal(s.to_string())
                }
            })
            .collect();

        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Match a path to a deep link
    pub fn match_path(&self, path: &str) -> Result<DeepLink> {
        let (pathname, query) = match path.split_once('?') {
            Some((pathname, query)) => (pathname, Some(query)),
            None => (path, None),
        };

        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        for pattern in &self.patterns {
            if let Some(params) = self.match_pattern(&pattern.segments, &path_segments, query) {
                let link = (pattern.builder)(&params)?;
                tracing::debug!("Deep link {} -> {:?}", path, link);
                return Ok(link);
            }
        }

        Err(NavigationError::UnknownPath(path.to_string()))
    }

    /// Match a pattern against path segments
    fn match_pattern(
        &self,
        pattern: &[PatternSegment],
        path: &[&str],
        query: Option<&str>,
    ) -> Option<RouteParams> {
        if pattern.len() != path.len() {
            return None;
        }

        let mut params = RouteParams::new();

        for (segment, actual) in pattern.iter().zip(path.iter()) {
            match segment {
                PatternSegment::Literal(expected) => {
                    if expected != *actual {
                        return None;
                    }
                }
                PatternSegment::Param(name) => {
                    params.insert(name.clone(), urlencoding::decode(actual).ok()?.into_owned());
                }
            }
        }

        self.parse_query(query, &mut params);

        Some(params)
    }

    /// Parse query string into params
    fn parse_query(&self, query: Option<&str>, params: &mut RouteParams) {
        if let Some(query) = query {
            for pair in query.split('&') {
                if let Some((key, value)) = pair.split_once('=') {
                    if let Ok(decoded) = urlencoding::decode(value) {
                        params.insert(key.to_string(), decoded.into_owned());
                    }
                }
            }
        }
    }
}

/// Parse a numeric route parameter
fn parse_param(params: &RouteParams, name: &str) -> Result<u16> {
    let value = params.get(name).cloned().unwrap_or_default();
    value
        .trim()
        .parse()
        .map_err(|_| NavigationError::InvalidParameter {
            name: name.to_string(),
            value,
        })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_targets() {
        assert_eq!(MainTarget::entry(), MainTarget::Home);
        assert_eq!(SettingsTarget::entry(), SettingsTarget::Root);
        assert_eq!(OnboardingTarget::entry(), OnboardingTarget::Welcome);
        assert_eq!(QuranTarget::entry(), QuranTarget::SurahList);
    }

    #[test]
    fn test_target_flows() {
        assert_eq!(MainTarget::FLOW, Flow::Main);
        assert_eq!(SettingsTarget::FLOW, Flow::Settings);
        assert_eq!(MainTarget::Settings.presents_flow(), Some(Flow::Settings));
        assert_eq!(MainTarget::Quran.presents_flow(), Some(Flow::Quran));
        assert_eq!(MainTarget::Tasbeeh.presents_flow(), None);
    }

    #[test]
    fn test_quran_target_validity() {
        assert!(QuranTarget::Surah { number: 1, ayah: None }.is_valid());
        assert!(QuranTarget::Surah { number: 114, ayah: Some(6) }.is_valid());
        assert!(!QuranTarget::Surah { number: 0, ayah: None }.is_valid());
        assert!(!QuranTarget::Surah { number: 115, ayah: None }.is_valid());
        assert!(!QuranTarget::Surah { number: 1, ayah: Some(8) }.is_valid());
        assert!(!QuranTarget::Surah { number: 1, ayah: Some(0) }.is_valid());
    }

    #[test]
    fn test_titles() {
        assert_eq!(SettingsTarget::Accessibility.title(), "Accessibility");
        assert_eq!(QuranTarget::Surah { number: 18, ayah: None }.title(), "Al-Kahf");
        assert_eq!(QuranTarget::Surah { number: 999, ayah: None }.title(), "Surah");
    }

    #[test]
    fn test_onboarding_progression() {
        let mut step = OnboardingTarget::entry();
        let mut seen = vec![step];
        while step != OnboardingTarget::Completed {
            step = step.next();
            seen.push(step);
        }
        assert_eq!(seen, OnboardingTarget::all().to_vec());
        assert_eq!(OnboardingTarget::Completed.next(), OnboardingTarget::Completed);
        assert_eq!(OnboardingTarget::Notifications.step(), 2);
    }

    #[test]
    fn test_navigation_stack_push_pop() {
        let mut stack = NavigationStack::new(SettingsTarget::Root);
        assert_eq!(stack.depth(), 1);
        assert!(!stack.can_go_back());

        stack.push(SettingsTarget::Accessibility);
        assert_eq!(stack.depth(), 2);
        assert!(stack.can_go_back());
        assert_eq!(*stack.current(), SettingsTarget::Accessibility);

        assert!(stack.pop());
        assert_eq!(*stack.current(), SettingsTarget::Root);

        // Can't pop past root
        assert!(!stack.pop());
    }

    #[test]
    fn test_navigation_stack_replace_and_pop_to_root() {
        let mut stack = NavigationStack::new(SettingsTarget::Root);
        stack.push(SettingsTarget::Location);
        stack.push(SettingsTarget::About);
        stack.replace(SettingsTarget::Appearance);
        assert_eq!(
            stack.targets(),
            vec![SettingsTarget::Root, SettingsTarget::Location, SettingsTarget::Appearance]
        );

        assert!(stack.pop_to_root());
        assert_eq!(*stack.root(), SettingsTarget::Root);
        assert!(!stack.pop_to_root());
    }

    #[test]
    fn test_stack_entries_have_unique_keys() {
        let mut stack = NavigationStack::new(MainTarget::Home);
        stack.push(MainTarget::Qibla);
        stack.push(MainTarget::Qibla);
        let keys: Vec<_> = stack.entries().iter().map(|e| e.key.clone()).collect();
        assert_ne!(keys[1], keys[2]);
    }

    #[test]
    fn test_router_match_main() {
        let router = Router::new();
        assert_eq!(router.match_path("/"), Ok(DeepLink::Main(MainTarget::Home)));
        assert_eq!(router.match_path("/qibla"), Ok(DeepLink::Main(MainTarget::Qibla)));
    }

    #[test]
    fn test_router_child_flow_paths_open_flow_entry() {
        let router = Router::new();
        assert_eq!(
            router.match_path(&MainTarget::Settings.to_path()),
            Ok(DeepLink::Settings(SettingsTarget::Root))
        );
        assert_eq!(
            router.match_path(&MainTarget::Quran.to_path()),
            Ok(DeepLink::Quran(QuranTarget::SurahList))
        );
    }

    #[test]
    fn test_router_match_surah_with_ayah() {
        let router = Router::new();
        assert_eq!(
            router.match_path("/quran/surah/18?ayah=10"),
            Ok(DeepLink::Quran(QuranTarget::Surah {
                number: 18,
                ayah: Some(10)
            }))
        );
    }

    #[test]
    fn test_router_rejects_bad_surah() {
        let router = Router::new();
        assert!(matches!(
            router.match_path("/quran/surah/abc"),
            Err(NavigationError::InvalidParameter { .. })
        ));
        assert!(matches!(
            router.match_path("/quran/surah/115"),
            Err(NavigationError::InvalidParameter { .. })
        ));
        assert!(matches!(
            router.match_path("/quran/surah/1?ayah=99"),
            Err(NavigationError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_router_not_found() {
        let router = Router::new();
        assert_eq!(
            router.match_path("/nonexistent/path"),
            Err(NavigationError::UnknownPath("/nonexistent/path".to_string()))
        );
    }

    #[test]
    fn test_paths_round_trip_through_router() {
        let router = Router::new();
        let mut links: Vec<DeepLink> = MainTarget::all()
            .into_iter()
            .filter(|t| t.presents_flow().is_none())
            .map(DeepLink::Main)
            .collect();
        links.extend(SettingsTarget::rows().into_iter().map(DeepLink::Settings));
        links.extend(OnboardingTarget::all().into_iter().map(DeepLink::Onboarding));
        links.push(DeepLink::Quran(QuranTarget::Bookmarks));
        links.push(DeepLink::Quran(QuranTarget::Surah {
            number: 2,
            ayah: Some(255),
        }));

        for link in links {
            assert_eq!(router.match_path(&link.to_path()), Ok(link.clone()));
        }
    }

    #[test]
    fn test_deep_link_serialization() {
        let link = DeepLink::Quran(QuranTarget::Surah {
            number: 36,
            ayah: None,
        });
        let json = serde_json::to_string(&link).unwrap();
        let parsed: DeepLink = serde_json::from_str(&json).unwrap();
        assert_eq!(link, parsed);
        assert_eq!(parsed.flow(), Flow::Quran);
    }
}
