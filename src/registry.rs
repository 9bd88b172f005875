//! An explicit widget registry: kind tags mapped to constructors.
//!
//! Hosts that build screens from declarative descriptions look widgets up by
//! tag instead of naming concrete types. The registry is an owned value:
//! populate it at startup, pass it to whatever assembles views, and drop it
//! with the owning view. Nothing is registered globally.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_extras::registry::default_registry;
//!
//! let registry = default_registry();
//! let field = registry.create("plainfield").unwrap();
//! let _ = field.view();
//! ```

use crate::Renderable;
use std::collections::HashMap;
use std::fmt;

/// A boxed widget constructor.
pub type Constructor = Box<dyn Fn() -> Box<dyn Renderable> + Send + Sync>;

/// Maps component-kind tags to widget constructors.
#[derive(Default)]
pub struct Registry {
    constructors: HashMap<String, Constructor>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor under a tag, replacing any previous one.
    pub fn register<F>(&mut self, tag: impl Into<String>, constructor: F)
    where
        F: Fn() -> Box<dyn Renderable> + Send + Sync + 'static,
    {
        self.constructors.insert(tag.into(), Box::new(constructor));
    }

    /// Removes a tag. Returns true when something was registered under it.
    pub fn deregister(&mut self, tag: &str) -> bool {
        self.constructors.remove(tag).is_some()
    }

    /// Constructs a widget by tag, or `None` for an unknown tag.
    pub fn create(&self, tag: &str) -> Option<Box<dyn Renderable>> {
        self.constructors.get(tag).map(|constructor| constructor())
    }

    /// Returns true when the tag is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Returns the registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Returns true when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Removes every registration.
    pub fn clear(&mut self) {
        self.constructors.clear();
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("tags", &self.tags()).finish()
    }
}

/// Builds a registry pre-populated with the built-in widgets.
///
/// Registered tags: `plainfield`, `imagefield`, `buttonfield`,
/// `recipientfield`, `loadmore`.
pub fn default_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register("plainfield", || {
        Box::new(crate::plainfield::Model::new("")) as Box<dyn Renderable>
    });
    registry.register("imagefield", || {
        Box::new(crate::imagefield::Model::new("")) as Box<dyn Renderable>
    });
    registry.register("buttonfield", || {
        Box::new(crate::buttonfield::Model::new("")) as Box<dyn Renderable>
    });
    registry.register("recipientfield", || {
        Box::new(crate::recipientfield::Model::new("")) as Box<dyn Renderable>
    });
    registry.register("loadmore", || {
        Box::new(crate::loadmore::Model::new()) as Box<dyn Renderable>
    });
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plainfield;

    #[test]
    fn test_register_and_create() {
        let mut registry = Registry::new();
        registry.register("field", || {
            Box::new(plainfield::Model::new("Name")) as Box<dyn Renderable>
        });

        assert!(registry.contains("field"));
        assert!(registry.create("field").is_some());
        assert!(registry.create("missing").is_none());
    }

    #[test]
    fn test_deregister() {
        let mut registry = default_registry();
        assert!(registry.deregister("plainfield"));
        assert!(!registry.deregister("plainfield"));
        assert!(!registry.contains("plainfield"));
    }

    #[test]
    fn test_default_registry_tags() {
        let registry = default_registry();
        assert_eq!(
            registry.tags(),
            vec![
                "buttonfield",
                "imagefield",
                "loadmore",
                "plainfield",
                "recipientfield"
            ]
        );
    }

    #[test]
    fn test_clear() {
        let mut registry = default_registry();
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
