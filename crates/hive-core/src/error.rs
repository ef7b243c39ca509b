// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Hive automation framework.

use thiserror::Error;

/// The primary error type used across bee factories, bee instances and the registry.
#[derive(Debug, Error)]
pub enum HiveError {
    /// Configuration errors (invalid TOML, missing sections, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// No factory is registered under the requested class id.
    #[error("no bee factory registered for class `{class}`")]
    FactoryNotFound { class: String },

    /// A bee option is missing or holds a value of the wrong type.
    #[error("invalid option `{name}`: {message}")]
    Option { name: String, message: String },

    /// An action request does not match the bee's action descriptors.
    #[error("invalid action `{action}`: {message}")]
    Action { action: String, message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
