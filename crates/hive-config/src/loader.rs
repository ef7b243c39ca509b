// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./hive.toml` > `~/.config/hive/hive.toml` > `/etc/hive/hive.toml`
//! with environment variable overrides via the `HIVE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::HiveConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/hive/hive.toml` (system-wide)
/// 3. `~/.config/hive/hive.toml` (user XDG config)
/// 4. `./hive.toml` (local directory)
/// 5. `HIVE_*` environment variables
pub fn load_config() -> Result<HiveConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<HiveConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HiveConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<HiveConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HiveConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(HiveConfig::default()))
        .merge(Toml::file("/etc/hive/hive.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("hive/hive.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("hive.toml"))
        .merge(env_provider())
}

/// Environment provider mapping `HIVE_HIVE_LOG_LEVEL` to `hive.log_level`.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscores inside key
/// names survive. Only the `[hive]` section can be overridden; bees are
/// configured in TOML.
fn env_provider() -> Env {
    Env::prefixed("HIVE_")
        .filter(|key| key.as_str().to_ascii_lowercase().starts_with("hive_"))
        .map(|key| {
            key.as_str()
                .to_ascii_lowercase()
                .replacen("hive_", "hive.", 1)
                .into()
        })
}
