//! Application state for iSalah
//!
//! This crate provides the observable state container used by view-models
//! and the data shapes they hold: preferences, saved locations and Tasbeeh
//! counters.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod location;
pub mod observable;
pub mod preferences;
pub mod tasbeeh;

pub use location::{LocationError, SavedLocation};
pub use observable::Observable;
pub use preferences::{AccessibilityPreferences, ColorMode};
pub use tasbeeh::TasbeehCounter;
