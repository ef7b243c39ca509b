// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Hive host.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use hive_core::BeeConfig;
use serde::{Deserialize, Serialize};

/// Top-level Hive configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides for the `[hive]` section.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HiveConfig {
    /// Host identity and logging settings.
    #[serde(default)]
    pub hive: HiveSection,

    /// Configured bee instances.
    #[serde(default)]
    pub bees: Vec<BeeConfig>,
}

impl HiveConfig {
    /// Look up a configured bee by instance name.
    pub fn bee(&self, name: &str) -> Option<&BeeConfig> {
        self.bees.iter().find(|b| b.name == name)
    }
}

/// The `[hive]` section.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HiveSection {
    /// Display name of this host.
    #[serde(default = "default_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for HiveSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_name() -> String {
    "hive".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
