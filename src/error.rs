//! Navigator errors.
//!
//! Only construction can fail. Everything that happens after a navigator
//! exists (unknown routes, vetoed or impossible `back`) is absorbed and
//! leaves state unchanged.

use thiserror::Error;

use crate::types::Route;

/// Configuration errors raised by [`crate::create_navigator`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    /// The screen registry was empty.
    #[error("navigator was created without screens")]
    NoScreens,

    /// The initial route is not in the screen registry.
    #[error("initial route `{0}` is not a registered screen")]
    UnknownInitialRoute(Route),
}

pub type Result<T> = std::result::Result<T, NavigatorError>;
