//! Navigator - Screen history stack
//!
//! Owns the navigation state:
//! - `history` store (visited screens, oldest first, current last)
//! - `screen` store (current screen, `None` before the first navigation)
//! - `on_back` store (guard that can veto `back()`)
//! - `on_navigate` store (hook fired after each successful `navigate()`)
//!
//! # Example
//!
//! ```ignore
//! use spark_navigator::{create_navigator, screens, NavigatorOptions, props};
//!
//! let nav = create_navigator(NavigatorOptions::new(registry))?;
//!
//! nav.navigate("profile", None);
//! nav.navigate("profile", props(json!({ "id": 2 })));
//!
//! // Keep the user here until the form is saved
//! nav.set_back_guard(move || form_saved.get());
//! nav.back();
//! ```

mod hooks;
mod options;

pub use hooks::*;
pub use options::*;

use std::rc::Rc;

use crate::error::{NavigatorError, Result};
use crate::screen::{Screen, Screens};
use crate::state::Store;
use crate::types::{merge_props, Props};

// =============================================================================
// NAVIGATOR
// =============================================================================

/// Screen navigation state machine.
///
/// Cloning yields another handle to the same navigation state.
#[derive(Clone)]
pub struct Navigator {
    /// Visited screens, oldest first. Read-only by convention.
    pub history: Store<Vec<Screen>>,
    /// Current screen. Always the last history entry once history is non-empty.
    pub screen: Store<Option<Screen>>,
    /// Guard consulted by `back()`. Set it to install a veto.
    pub on_back: Store<BackGuard>,
    /// Hook fired after each successful `navigate()`.
    pub on_navigate: Store<NavigateHook>,
    screens: Rc<Screens>,
}

/// Create a navigator. Fails if the registry is empty or the initial route is
/// not registered.
pub fn create_navigator(options: NavigatorOptions) -> Result<Navigator> {
    Navigator::new(options)
}

impl Navigator {
    pub fn new(options: NavigatorOptions) -> Result<Self> {
        let NavigatorOptions {
            screens,
            initial_screen,
        } = options;

        if screens.is_empty() {
            return Err(NavigatorError::NoScreens);
        }

        let initial = match initial_screen {
            Some(InitialScreen::Route(route)) if route.is_empty() => None,
            Some(InitialScreen::Route(route)) => match screens.get(&route) {
                Some(template) => Some(template.clone()),
                None => return Err(NavigatorError::UnknownInitialRoute(route)),
            },
            Some(InitialScreen::Screen(screen)) => Some(screen),
            None => None,
        };

        log::debug!(
            "navigator: created with {} screen(s), initial screen: {}",
            screens.len(),
            initial.is_some()
        );

        let history: Vec<Screen> = initial.iter().cloned().collect();

        Ok(Self {
            history: Store::new(history),
            screen: Store::new(initial),
            on_back: Store::new(BackGuard::always_permit()),
            on_navigate: Store::new(NavigateHook::noop()),
            screens: Rc::new(screens),
        })
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// Push the screen registered under `route`.
    ///
    /// `props` is shallow-merged over the template's props. An empty route is
    /// ignored; an unknown route logs a warning and changes nothing.
    pub fn navigate(&self, route: impl AsRef<str>, props: impl Into<Option<Props>>) {
        let route = route.as_ref();
        if route.is_empty() {
            return;
        }

        let Some(template) = self.screens.get(route) else {
            log::warn!("navigator: navigated to unknown screen `{}`", route);
            return;
        };

        let overrides = props.into();
        let next = Screen {
            component: template.component.clone(),
            props: merge_props(&template.props, overrides.as_ref()),
        };

        // A fresh screen starts without a veto
        self.on_back.set(BackGuard::always_permit());

        let history = self.history.with(|history| {
            let mut next_history = Vec::with_capacity(history.len() + 1);
            next_history.extend(history.iter().cloned());
            next_history.push(next.clone());
            next_history
        });
        log::debug!("navigator: -> `{}` (depth {})", route, history.len());
        self.publish(Some(next), history);

        self.on_navigate.get().fire();
    }

    /// Return to the previous screen.
    ///
    /// Does nothing at depth < 2. A guard returning `false` cancels the
    /// transition and stays installed; an approved transition resets it.
    pub fn back(&self) {
        if self.depth() < 2 {
            return;
        }

        let guard = self.on_back.get();
        if !guard.permits() {
            log::debug!("navigator: back vetoed by guard");
            return;
        }

        // The guard may have changed history; only pop what is still there
        if self.depth() < 2 {
            return;
        }

        self.on_back.set(BackGuard::always_permit());

        let history = self.history.with(|history| match history.split_last() {
            Some((_, rest)) => rest.to_vec(),
            None => Vec::new(),
        });
        // `on_back` subscribers run inside `set` and can shrink history too
        if history.is_empty() {
            return;
        }
        let current = history.last().cloned();
        log::debug!("navigator: <- back (depth {})", history.len());
        self.publish(current, history);
    }

    /// Write both stores, then notify `screen` and `history` subscribers, so
    /// no subscriber sees one updated without the other.
    fn publish(&self, current: Option<Screen>, history: Vec<Screen>) {
        self.screen.replace(current);
        self.history.replace(history);
        self.screen.notify();
        self.history.notify();
    }

    // =========================================================================
    // CALLBACKS
    // =========================================================================

    /// Install a back guard. Return `false` from `check` to veto.
    pub fn set_back_guard(&self, check: impl Fn() -> bool + 'static) {
        self.on_back.set(BackGuard::new(check));
    }

    /// Install the navigate hook.
    pub fn set_on_navigate(&self, callback: impl Fn() + 'static) {
        self.on_navigate.set(NavigateHook::new(callback));
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Current screen snapshot.
    pub fn current(&self) -> Option<Screen> {
        self.screen.get()
    }

    /// Number of screens in history.
    pub fn depth(&self) -> usize {
        self.history.with(Vec::len)
    }

    /// Whether `back()` has a screen to return to (ignores the guard).
    pub fn can_go_back(&self) -> bool {
        self.depth() >= 2
    }

    pub fn has_route(&self, route: &str) -> bool {
        self.screens.contains_key(route)
    }

    /// Registered routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.screens.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("depth", &self.depth())
            .field("current", &self.current())
            .field("routes", &self.screens.len())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
