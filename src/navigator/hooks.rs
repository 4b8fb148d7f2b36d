//! Navigator callbacks.
//!
//! - [`BackGuard`] - Predicate consulted before `back()`; `false` vetoes it
//! - [`NavigateHook`] - Fired after every successful `navigate()`
//!
//! Both are cheap to clone (shared `Rc`) so they can live in a `Store`.

use std::fmt;
use std::rc::Rc;

// =============================================================================
// BACK GUARD
// =============================================================================

/// Veto for the pending back-transition.
///
/// The default guard always permits.
#[derive(Clone)]
pub struct BackGuard {
    check: Option<Rc<dyn Fn() -> bool>>,
}

impl BackGuard {
    /// Guard backed by `check`. Return `false` to veto.
    pub fn new(check: impl Fn() -> bool + 'static) -> Self {
        Self {
            check: Some(Rc::new(check)),
        }
    }

    /// Guard that permits every back-transition.
    pub fn always_permit() -> Self {
        Self { check: None }
    }

    /// Consult the guard.
    pub fn permits(&self) -> bool {
        match &self.check {
            Some(check) => check(),
            None => true,
        }
    }

    /// True for the built-in "always permit" guard.
    pub fn is_default(&self) -> bool {
        self.check.is_none()
    }
}

impl Default for BackGuard {
    fn default() -> Self {
        Self::always_permit()
    }
}

impl fmt::Debug for BackGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default() {
            f.write_str("BackGuard(always_permit)")
        } else {
            f.write_str("BackGuard(custom)")
        }
    }
}

// =============================================================================
// NAVIGATE HOOK
// =============================================================================

/// Side effect run after each successful forward navigation.
///
/// The default hook does nothing.
#[derive(Clone, Default)]
pub struct NavigateHook {
    callback: Option<Rc<dyn Fn()>>,
}

impl NavigateHook {
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self {
            callback: Some(Rc::new(callback)),
        }
    }

    /// No-op hook.
    pub fn noop() -> Self {
        Self { callback: None }
    }

    pub(crate) fn fire(&self) {
        if let Some(callback) = &self.callback {
            callback();
        }
    }

    pub fn is_noop(&self) -> bool {
        self.callback.is_none()
    }
}

impl fmt::Debug for NavigateHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_noop() {
            f.write_str("NavigateHook(noop)")
        } else {
            f.write_str("NavigateHook(custom)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_default_guard_permits() {
        let guard = BackGuard::default();
        assert!(guard.is_default());
        assert!(guard.permits());
    }

    #[test]
    fn test_custom_guard_is_consulted_each_time() {
        let calls = Rc::new(Cell::new(0));
        let calls_clone = calls.clone();
        let guard = BackGuard::new(move || {
            calls_clone.set(calls_clone.get() + 1);
            false
        });

        assert!(!guard.is_default());
        assert!(!guard.permits());
        assert!(!guard.clone().permits());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_hook_fire() {
        let fired = Rc::new(Cell::new(0));
        let fired_clone = fired.clone();
        let hook = NavigateHook::new(move || fired_clone.set(fired_clone.get() + 1));

        hook.fire();
        hook.fire();
        assert_eq!(fired.get(), 2);

        // No-op hook is safe to fire
        NavigateHook::noop().fire();
        assert!(NavigateHook::default().is_noop());
    }
}
