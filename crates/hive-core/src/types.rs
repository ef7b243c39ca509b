// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Option values and per-instance configuration shared by the host and its bees.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HiveError;

/// Named option values handed to a bee at construction and on reload.
///
/// Values are dynamically typed; bees extract them with [`BeeOptions::bind`]
/// into the concrete types their option descriptors declare.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeeOptions(BTreeMap<String, Value>);

impl BeeOptions {
    /// Create an empty option bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, convenient for tests and static setups.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an option, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Raw value of an option, if set.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns true if the option is set.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Deserialize the named option into `T`.
    ///
    /// Fails with [`HiveError::Option`] if the option is absent or its value
    /// cannot be converted.
    pub fn bind<T: DeserializeOwned>(&self, name: &str) -> Result<T, HiveError> {
        let value = self.0.get(name).ok_or_else(|| HiveError::Option {
            name: name.to_string(),
            message: "option is not set".to_string(),
        })?;

        serde_json::from_value(value.clone()).map_err(|e| HiveError::Option {
            name: name.to_string(),
            message: e.to_string(),
        })
    }

    /// Iterate over options in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for BeeOptions {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for BeeOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Stored configuration of one bee instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeeConfig {
    /// Unique instance name chosen by the user.
    pub name: String,
    /// Id of the factory that builds this bee (e.g. "mastodonbee").
    pub class: String,
    /// Free-form description of this instance.
    #[serde(default)]
    pub description: String,
    /// Option values passed to the factory.
    #[serde(default)]
    pub options: BeeOptions,
}
