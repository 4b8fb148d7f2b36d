//! # spark-navigator
//!
//! Screen navigation stack for reactive terminal UIs.
//!
//! Built next to [spark-signals](https://github.com/RLabs-Inc/spark-signals):
//! navigation state lives in observable stores that can be mirrored into
//! signals, so the render pipeline re-runs when the current screen changes.
//!
//! ## Architecture
//!
//! An application registers named screens once, then moves between them.
//! Every navigation produces a fresh screen and pushes it onto the history;
//! `back()` pops it again unless a guard vetoes.
//!
//! ```text
//! make_screen → Screens registry → Navigator { history, screen, on_back, on_navigate }
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Route, Props, ComponentHandle)
//! - [`state`] - Observable `Store` and the signal bridge
//! - [`screen`] - Screen templates, normalization, registry
//! - [`navigator`] - The navigation state machine
//! - [`error`] - Construction errors

pub mod error;
pub mod navigator;
pub mod screen;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{NavigatorError, Result};

pub use state::{Store, Unsubscribe};

pub use screen::{make_screen, screens, Screen, ScreenConfig, ScreenInput, Screens};

pub use navigator::{
    create_navigator, BackGuard, InitialScreen, NavigateHook, Navigator, NavigatorOptions,
};
