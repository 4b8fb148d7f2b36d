//! Navigator configuration.

use crate::screen::{Screen, Screens};
use crate::types::Route;

/// Where a navigator starts.
#[derive(Debug, Clone, PartialEq)]
pub enum InitialScreen {
    /// Resolved through the registry at construction.
    Route(Route),
    /// Used as-is.
    Screen(Screen),
}

impl From<&str> for InitialScreen {
    fn from(route: &str) -> Self {
        InitialScreen::Route(route.to_string())
    }
}

impl From<Route> for InitialScreen {
    fn from(route: Route) -> Self {
        InitialScreen::Route(route)
    }
}

impl From<Screen> for InitialScreen {
    fn from(screen: Screen) -> Self {
        InitialScreen::Screen(screen)
    }
}

/// Options for [`crate::create_navigator`].
///
/// ```ignore
/// let nav = create_navigator(NavigatorOptions {
///     screens: registry,
///     initial_screen: Some("home".into()),
/// })?;
///
/// // Or with the builder methods
/// let nav = create_navigator(NavigatorOptions::new(registry).initial_route("home"))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct NavigatorOptions {
    /// Route registry. Must not be empty.
    pub screens: Screens,
    /// Starting screen. `None` starts with empty history.
    pub initial_screen: Option<InitialScreen>,
}

impl NavigatorOptions {
    pub fn new(screens: Screens) -> Self {
        Self {
            screens,
            initial_screen: None,
        }
    }

    /// Start on a registered route.
    pub fn initial_route(mut self, route: impl Into<Route>) -> Self {
        self.initial_screen = Some(InitialScreen::Route(route.into()));
        self
    }

    /// Start on a screen that is not necessarily registered.
    #[doc(alias = "default_screen")]
    pub fn initial_screen(mut self, screen: Screen) -> Self {
        self.initial_screen = Some(InitialScreen::Screen(screen));
        self
    }
}
