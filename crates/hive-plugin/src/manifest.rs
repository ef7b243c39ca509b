// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serializable snapshot of everything a factory advertises.
//!
//! Admin interfaces and `hive describe` consume this instead of calling the
//! factory accessors one by one.

use hive_core::HiveError;
use serde::{Deserialize, Serialize};

use crate::descriptor::{ActionDescriptor, EventDescriptor, FieldDescriptor};
use crate::registry::BeeFactory;

/// Identity, options, events and actions of one bee factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryManifest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub logo_color: String,
    pub options: Vec<FieldDescriptor>,
    pub events: Vec<EventDescriptor>,
    pub actions: Vec<ActionDescriptor>,
}

impl FactoryManifest {
    /// Capture a factory's current descriptors.
    pub fn from_factory(factory: &dyn BeeFactory) -> Self {
        let identity = factory.identity();
        Self {
            id: identity.id,
            name: identity.name,
            description: identity.description,
            image: identity.image,
            logo_color: identity.logo_color,
            options: factory.options(),
            events: factory.events(),
            actions: factory.actions(),
        }
    }

    /// Pretty-printed JSON rendering.
    pub fn to_json_pretty(&self) -> Result<String, HiveError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HiveError::Internal(format!("failed to serialize manifest: {e}")))
    }

    /// Parse a manifest previously rendered with [`FactoryManifest::to_json_pretty`].
    ///
    /// Rejects manifests whose events or actions are not namespaced under the
    /// factory's display name.
    pub fn from_json(json: &str) -> Result<Self, HiveError> {
        let manifest: Self = serde_json::from_str(json)
            .map_err(|e| HiveError::Config(format!("invalid factory manifest: {e}")))?;

        if manifest.id.is_empty() {
            return Err(HiveError::Config(
                "factory manifest: id must not be empty".to_string(),
            ));
        }

        let foreign = manifest
            .events
            .iter()
            .map(|e| (&e.namespace, &e.name))
            .chain(manifest.actions.iter().map(|a| (&a.namespace, &a.name)))
            .find(|(ns, _)| **ns != manifest.name);
        if let Some((ns, name)) = foreign {
            return Err(HiveError::Config(format!(
                "factory manifest: `{name}` is namespaced `{ns}`, expected `{}`",
                manifest.name
            )));
        }

        Ok(manifest)
    }
}
