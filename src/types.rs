//! Core types for spark-navigator.
//!
//! These types define the foundation that everything builds on.
//! Routes and props flow through every navigation; component handles are
//! carried along untouched for the rendering layer.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

// =============================================================================
// Route
// =============================================================================

/// Opaque identifier of a registered screen.
pub type Route = String;

// =============================================================================
// Props
// =============================================================================

/// Loosely-typed screen parameters.
///
/// Each screen defines its own expected shape; the navigator only merges keys.
pub type Props = serde_json::Map<String, serde_json::Value>;

/// Build [`Props`] from a JSON object literal.
///
/// Anything that is not an object yields empty props.
///
/// ```ignore
/// let p = props(json!({ "id": 2 }));
/// navigator.navigate("profile", p);
/// ```
pub fn props(value: serde_json::Value) -> Props {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Props::new(),
    }
}

/// Shallow overlay: keys in `overrides` win over keys in `base`.
pub fn merge_props(base: &Props, overrides: Option<&Props>) -> Props {
    let mut merged = base.clone();
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

// =============================================================================
// Component Handle
// =============================================================================

/// Opaque renderable handle.
///
/// The navigator stores and forwards handles but never inspects or invokes
/// them. The rendering layer gets its concrete type back with
/// [`ComponentHandle::downcast_ref`].
///
/// Two handles are equal when they share the same allocation, so cloning a
/// handle keeps it equal to the original.
#[derive(Clone)]
pub struct ComponentHandle {
    inner: Rc<dyn Any>,
    type_name: &'static str,
}

impl ComponentHandle {
    /// Wrap any value as a renderable handle.
    pub fn new<C: Any>(component: C) -> Self {
        Self {
            inner: Rc::new(component),
            type_name: std::any::type_name::<C>(),
        }
    }

    /// Borrow the wrapped component as `C`, if that is its type.
    pub fn downcast_ref<C: Any>(&self) -> Option<&C> {
        (*self.inner).downcast_ref::<C>()
    }

    /// Type name of the wrapped component (diagnostics only).
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for ComponentHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ComponentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentHandle").field(&self.type_name).finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Home;
    struct Profile {
        title: &'static str,
    }

    #[test]
    fn test_handle_identity() {
        let a = ComponentHandle::new(Home);
        let b = a.clone();
        let c = ComponentHandle::new(Home);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_handle_downcast() {
        let handle = ComponentHandle::new(Profile { title: "Profile" });

        assert_eq!(handle.downcast_ref::<Profile>().map(|p| p.title), Some("Profile"));
        assert!(handle.downcast_ref::<Home>().is_none());
        assert!(handle.type_name().ends_with("Profile"));
    }

    #[test]
    fn test_props_from_non_object() {
        assert!(props(json!(null)).is_empty());
        assert!(props(json!([1, 2])).is_empty());
        assert_eq!(props(json!({ "a": 1 })).get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_merge_props_override_wins() {
        let base = props(json!({ "id": 1, "tab": "posts" }));
        let overrides = props(json!({ "id": 2, "extra": true }));

        let merged = merge_props(&base, Some(&overrides));
        assert_eq!(merged, props(json!({ "id": 2, "tab": "posts", "extra": true })));

        // Base is untouched
        assert_eq!(base.get("id"), Some(&json!(1)));
        assert_eq!(merge_props(&base, None), base);
    }
}
