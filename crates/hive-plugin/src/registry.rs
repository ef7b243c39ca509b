// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of bee factories owned by the host.
//!
//! The host builds a `FactoryRegistry` once during startup, registering every
//! compiled-in factory explicitly, and afterwards uses it to look up
//! capabilities and construct bee instances.

use std::collections::HashMap;
use std::sync::Arc;

use hive_core::{Bee, BeeOptions, HiveError};
use tracing::{debug, warn};

use crate::descriptor::{ActionDescriptor, BeeIdentity, EventDescriptor, FieldDescriptor};

/// Describes one kind of bee and builds instances of it.
///
/// All accessors are pure: descriptor lists are built fresh on every call.
pub trait BeeFactory: Send + Sync {
    /// Unique id, used as the class of configured bees.
    fn id(&self) -> &str;

    /// Display name, also the namespace of the factory's events and actions.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Filename of an image for this factory.
    fn image(&self) -> String {
        format!("{}.png", self.id())
    }

    /// Preferred logo background color (used by the admin interface).
    fn logo_color(&self) -> &str;

    /// Options available to configure bees of this kind.
    fn options(&self) -> Vec<FieldDescriptor>;

    /// Events bees of this kind emit.
    fn events(&self) -> Vec<EventDescriptor>;

    /// Actions bees of this kind accept.
    fn actions(&self) -> Vec<ActionDescriptor>;

    /// Build a new bee configured with the supplied options.
    fn new_bee(
        &self,
        name: &str,
        description: &str,
        options: BeeOptions,
    ) -> Result<Box<dyn Bee>, HiveError>;

    /// Identity fields bundled together.
    fn identity(&self) -> BeeIdentity {
        BeeIdentity {
            id: self.id().to_string(),
            name: self.name().to_string(),
            description: self.description().to_string(),
            image: self.image(),
            logo_color: self.logo_color().to_string(),
        }
    }
}

/// Bee factories keyed by id.
pub struct FactoryRegistry {
    factories: HashMap<String, Arc<dyn BeeFactory>>,
}

impl FactoryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory under its id.
    ///
    /// A factory registered under an id that is already taken replaces the
    /// previous one.
    pub fn register(&mut self, factory: Arc<dyn BeeFactory>) {
        let id = factory.id().to_string();
        debug!(factory = %id, "registering bee factory");
        if self.factories.insert(id.clone(), factory).is_some() {
            warn!(factory = %id, "replaced previously registered bee factory");
        }
    }

    /// Get a factory by id.
    pub fn get(&self, id: &str) -> Option<&Arc<dyn BeeFactory>> {
        self.factories.get(id)
    }

    /// List all factories, sorted by id.
    pub fn list_all(&self) -> Vec<&Arc<dyn BeeFactory>> {
        let mut all: Vec<&Arc<dyn BeeFactory>> = self.factories.values().collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        all
    }

    /// Search factories by query string.
    ///
    /// Matches id, name or description case-insensitively. An empty query
    /// returns every factory.
    pub fn search(&self, query: &str) -> Vec<&Arc<dyn BeeFactory>> {
        if query.is_empty() {
            return self.list_all();
        }
        let query_lower = query.to_lowercase();
        self.list_all()
            .into_iter()
            .filter(|f| {
                f.id().to_lowercase().contains(&query_lower)
                    || f.name().to_lowercase().contains(&query_lower)
                    || f.description().to_lowercase().contains(&query_lower)
            })
            .collect()
    }

    /// Ids of all registered factories, sorted.
    pub fn ids(&self) -> Vec<&str> {
        self.list_all().into_iter().map(|f| f.id()).collect()
    }

    /// Construct a bee of the given class.
    pub fn create_bee(
        &self,
        class: &str,
        name: &str,
        description: &str,
        options: BeeOptions,
    ) -> Result<Box<dyn Bee>, HiveError> {
        let factory = self.lookup(class)?;
        debug!(class, bee = name, "constructing bee");
        factory.new_bee(name, description, options)
    }

    /// Names of mandatory options of `class` that are absent from `options`.
    pub fn missing_options(
        &self,
        class: &str,
        options: &BeeOptions,
    ) -> Result<Vec<String>, HiveError> {
        let factory = self.lookup(class)?;
        Ok(factory
            .options()
            .into_iter()
            .filter(|o| o.mandatory && !options.contains(&o.name))
            .map(|o| o.name)
            .collect())
    }

    /// Returns the number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if no factories are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    fn lookup(&self, class: &str) -> Result<&Arc<dyn BeeFactory>, HiveError> {
        self.factories
            .get(class)
            .ok_or_else(|| HiveError::FactoryNotFound {
                class: class.to_string(),
            })
    }
}

impl Default for FactoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("factories", &self.ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ValueType;
    use tracing_test::traced_test;

    struct EchoBee {
        name: String,
        description: String,
        options: BeeOptions,
    }

    impl Bee for EchoBee {
        fn name(&self) -> &str {
            &self.name
        }

        fn description(&self) -> &str {
            &self.description
        }

        fn namespace(&self) -> &str {
            "echobee"
        }

        fn options(&self) -> &BeeOptions {
            &self.options
        }

        fn reload_options(&mut self, options: BeeOptions) -> Result<(), HiveError> {
            self.options = options;
            Ok(())
        }
    }

    struct EchoFactory {
        id: &'static str,
        description: &'static str,
    }

    impl EchoFactory {
        fn new(id: &'static str) -> Self {
            Self {
                id,
                description: "Echoes events back",
            }
        }
    }

    impl BeeFactory for EchoFactory {
        fn id(&self) -> &str {
            self.id
        }

        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            self.description
        }

        fn logo_color(&self) -> &str {
            "#000000"
        }

        fn options(&self) -> Vec<FieldDescriptor> {
            vec![
                FieldDescriptor::mandatory("target", "where to echo", ValueType::String),
                FieldDescriptor::new("prefix", "optional prefix", ValueType::String),
            ]
        }

        fn events(&self) -> Vec<EventDescriptor> {
            vec![]
        }

        fn actions(&self) -> Vec<ActionDescriptor> {
            vec![]
        }

        fn new_bee(
            &self,
            name: &str,
            description: &str,
            options: BeeOptions,
        ) -> Result<Box<dyn Bee>, HiveError> {
            Ok(Box::new(EchoBee {
                name: name.to_string(),
                description: description.to_string(),
                options,
            }))
        }
    }

    #[test]
    fn register_and_get_roundtrip() {
        let mut registry = FactoryRegistry::new();
        registry.register(Arc::new(EchoFactory::new("echobee")));

        let factory = registry.get("echobee").unwrap();
        assert_eq!(factory.name(), "echo");
        assert!(registry.get("nobee").is_none());
    }

    #[test]
    fn default_image_derives_from_id() {
        let factory = EchoFactory::new("echobee");
        assert_eq!(factory.image(), "echobee.png");
        assert_eq!(factory.identity().image, "echobee.png");
        assert_eq!(factory.identity().logo_color, "#000000");
    }

    #[test]
    #[traced_test]
    fn register_same_id_replaces_and_warns() {
        let mut registry = FactoryRegistry::new();
        registry.register(Arc::new(EchoFactory::new("echobee")));
        registry.register(Arc::new(EchoFactory {
            id: "echobee",
            description: "Second echo",
        }));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("echobee").unwrap().description(), "Second echo");
        assert!(logs_contain("replaced previously registered bee factory"));
    }

    #[test]
    fn list_all_returns_sorted() {
        let mut registry = FactoryRegistry::new();
        registry.register(Arc::new(EchoFactory::new("zebrabee")));
        registry.register(Arc::new(EchoFactory::new("alphabee")));
        registry.register(Arc::new(EchoFactory::new("middlebee")));

        assert_eq!(registry.ids(), vec!["alphabee", "middlebee", "zebrabee"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut registry = FactoryRegistry::new();
        registry.register(Arc::new(EchoFactory::new("echobee")));
        registry.register(Arc::new(EchoFactory {
            id: "otherbee",
            description: "Something else",
        }));

        assert_eq!(registry.search("ECHOES").len(), 1);
        assert_eq!(registry.search("").len(), 2);
        assert!(registry.search("xyz_nonexistent").is_empty());
    }

    #[test]
    fn create_bee_uses_factory() {
        let mut registry = FactoryRegistry::new();
        registry.register(Arc::new(EchoFactory::new("echobee")));

        let bee = registry
            .create_bee("echobee", "n", "d", BeeOptions::new().with("target", "x"))
            .unwrap();
        assert_eq!(bee.name(), "n");
        assert_eq!(bee.description(), "d");
        assert_eq!(bee.config().class, "echobee");
    }

    #[test]
    fn create_bee_unknown_class_is_error() {
        let registry = FactoryRegistry::new();
        let result = registry.create_bee("nobee", "n", "d", BeeOptions::new());
        assert!(matches!(result, Err(HiveError::FactoryNotFound { .. })));
    }

    #[test]
    fn missing_options_reports_only_mandatory() {
        let mut registry = FactoryRegistry::new();
        registry.register(Arc::new(EchoFactory::new("echobee")));

        let missing = registry
            .missing_options("echobee", &BeeOptions::new())
            .unwrap();
        assert_eq!(missing, vec!["target"]);

        let missing = registry
            .missing_options("echobee", &BeeOptions::new().with("target", "x"))
            .unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn len_and_is_empty() {
        let mut registry = FactoryRegistry::new();
        assert!(registry.is_empty());
        registry.register(Arc::new(EchoFactory::new("echobee")));
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
    }
}
