//! Screens - Templates, normalization, and the route registry.
//!
//! A [`Screen`] pairs an opaque renderable handle with its props.
//! [`make_screen`] fills in defaults for partial descriptions, and
//! [`screens`] runs it over a list of routes to build the [`Screens`]
//! registry a navigator is created from.
//!
//! # Example
//!
//! ```ignore
//! use spark_navigator::{screens, ComponentHandle, ScreenConfig, props};
//!
//! let registry = screens([
//!     ("home", ComponentHandle::new(HomeView).into()),
//!     ("profile", ScreenConfig {
//!         component: Some(ComponentHandle::new(ProfileView)),
//!         props: Some(props(json!({ "id": 1 }))),
//!     }.into()),
//! ]);
//! ```

use indexmap::IndexMap;

use crate::types::{ComponentHandle, Props, Route};

// =============================================================================
// Screen
// =============================================================================

/// A navigable UI surface: renderable handle plus props.
///
/// Navigation always produces a fresh `Screen`; entries already in history
/// are never modified.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Screen {
    /// Handle interpreted by the rendering layer. `None` renders nothing.
    pub component: Option<ComponentHandle>,
    /// Screen parameters.
    pub props: Props,
}

impl Screen {
    /// Screen for `component` with empty props.
    pub fn new(component: ComponentHandle) -> Self {
        Self {
            component: Some(component),
            props: Props::new(),
        }
    }

    /// Replace the props.
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Look up a single prop.
    pub fn prop(&self, key: &str) -> Option<&serde_json::Value> {
        self.props.get(key)
    }
}

// =============================================================================
// Normalization
// =============================================================================

/// Partial screen description. `None` fields take the default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenConfig {
    pub component: Option<ComponentHandle>,
    pub props: Option<Props>,
}

/// Anything [`make_screen`] accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenInput {
    /// Bare renderable handle.
    Handle(ComponentHandle),
    /// Partial screen record.
    Config(ScreenConfig),
}

impl Default for ScreenInput {
    fn default() -> Self {
        ScreenInput::Config(ScreenConfig::default())
    }
}

impl From<ComponentHandle> for ScreenInput {
    fn from(handle: ComponentHandle) -> Self {
        ScreenInput::Handle(handle)
    }
}

impl From<ScreenConfig> for ScreenInput {
    fn from(config: ScreenConfig) -> Self {
        ScreenInput::Config(config)
    }
}

impl From<Screen> for ScreenConfig {
    fn from(screen: Screen) -> Self {
        ScreenConfig {
            component: screen.component,
            props: Some(screen.props),
        }
    }
}

impl From<Screen> for ScreenInput {
    fn from(screen: Screen) -> Self {
        ScreenInput::Config(screen.into())
    }
}

impl<T: Into<ScreenInput>> From<Option<T>> for ScreenInput {
    fn from(input: Option<T>) -> Self {
        input.map(Into::into).unwrap_or_default()
    }
}

/// Turn a bare handle or partial description into a complete [`Screen`].
///
/// Starts from `{ component: None, props: {} }` and overlays whatever the
/// caller supplied.
pub fn make_screen(input: impl Into<ScreenInput>) -> Screen {
    let config = match input.into() {
        ScreenInput::Handle(handle) => ScreenConfig {
            component: Some(handle),
            props: None,
        },
        ScreenInput::Config(config) => config,
    };

    let defaults = Screen::default();
    Screen {
        component: config.component.or(defaults.component),
        props: config.props.unwrap_or(defaults.props),
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Route -> screen template mapping, in registration order.
pub type Screens = IndexMap<Route, Screen>;

/// Build a registry, normalizing every entry with [`make_screen`].
///
/// A route registered twice keeps its first position and the last template.
pub fn screens<I, R, S>(entries: I) -> Screens
where
    I: IntoIterator<Item = (R, S)>,
    R: Into<Route>,
    S: Into<ScreenInput>,
{
    entries
        .into_iter()
        .map(|(route, input)| (route.into(), make_screen(input)))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
