// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Hive automation framework.
//!
//! This crate provides the foundational trait definitions, error types, and
//! option value types used throughout the Hive workspace. Every bee (an
//! integration with one external service) implements the [`Bee`] trait
//! defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::HiveError;
pub use traits::Bee;
pub use types::{BeeConfig, BeeOptions};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hive_error_has_all_variants() {
        let _config = HiveError::Config("test".into());
        let _not_found = HiveError::FactoryNotFound {
            class: "nobee".into(),
        };
        let _option = HiveError::Option {
            name: "server".into(),
            message: "missing".into(),
        };
        let _action = HiveError::Action {
            action: "toot".into(),
            message: "too long".into(),
        };
        let _internal = HiveError::Internal("test".into());
    }

    #[test]
    fn bee_trait_is_object_safe() {
        fn _assert_send_sync<T: Send + Sync>() {}
        _assert_send_sync::<Box<dyn Bee>>();
    }
}
