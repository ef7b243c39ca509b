// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes. All errors are collected; validation does not fail fast.

use std::collections::HashSet;

use crate::diagnostic::{suggest_key, ConfigError};
use crate::model::HiveConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
pub fn validate_config(config: &HiveConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.hive.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "hive.name must not be empty".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.hive.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "hive.log_level `{}` is not one of: {}",
                config.hive.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    let mut seen_names = HashSet::new();
    for (i, bee) in config.bees.iter().enumerate() {
        if bee.name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("bees[{i}].name must not be empty"),
            });
        } else if !seen_names.insert(bee.name.as_str()) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate bee name `{}` in [[bees]] array", bee.name),
            });
        }

        if bee.class.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("bees[{i}].class must not be empty"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check every configured bee's class against the registered factory ids.
pub fn check_bee_classes(config: &HiveConfig, known: &[&str]) -> Result<(), Vec<ConfigError>> {
    let errors: Vec<ConfigError> = config
        .bees
        .iter()
        .filter(|bee| !known.contains(&bee.class.as_str()))
        .map(|bee| ConfigError::UnknownBeeClass {
            bee: bee.name.clone(),
            class: bee.class.clone(),
            suggestion: suggest_key(&bee.class, known),
            known: known.join(", "),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
