//! User interface layer for iSalah
//!
//! This crate holds everything between the date logic and the screens the
//! platform shell draws:
//!
//! - [`navigation`] - Flows, typed navigation targets, stacks and deep links
//! - [`coordinator`] - Per-flow coordinators, presenters and the flow tree
//! - [`screens`] - View-models for each screen
//! - [`theme`] - Color, font and image lookups
//!
//! # Navigation
//!
//! View-models never construct screens. They ask their flow's coordinator to
//! navigate to a target, and the coordinator hands the target to a
//! [`coordinator::Presenter`] supplied by the shell.
//!
//! # Example
//!
//! ```rust
//! use app_ui::coordinator::{Coordinator, NullPresenter};
//! use app_ui::navigation::{Flow, MainTarget, SettingsTarget};
//! use app_ui::screens::SettingsViewModel;
//! use std::sync::Arc;
//!
//! let main = Coordinator::<MainTarget>::new(Arc::new(NullPresenter));
//! main.navigate(MainTarget::Settings);
//!
//! let settings = main.present_child::<SettingsTarget>(Arc::new(NullPresenter));
//! let vm = SettingsViewModel::new(settings.clone());
//! vm.open_location();
//! assert_eq!(settings.current(), SettingsTarget::Location);
//!
//! main.dismiss_child(Flow::Settings);
//! assert!(!settings.is_active());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coordinator;
pub mod navigation;
pub mod screens;
pub mod theme;

// Re-export commonly used types
pub use coordinator::{
    Coordinator, NullPresenter, Presentation, Presenter, RecordingPresenter, SharedCoordinator,
    Transition,
};

pub use navigation::{
    DeepLink, Flow, MainTarget, NavigationError, NavigationStack, NavigationTarget,
    OnboardingTarget, QuranTarget, RouteParams, Router, SettingsTarget, StackEntry,
};

pub use theme::{
    color, font, font_for, image, parse_hex_color, Color, ColorScheme, ColorToken, FontSpec,
    FontToken, ImageAsset,
};
