// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait that every bee instance implements.

use crate::error::HiveError;
use crate::types::{BeeConfig, BeeOptions};

/// A running (or runnable) integration with one external service.
///
/// Instances are built by a bee factory and handed to the host, which owns
/// their lifecycle from then on.
pub trait Bee: Send + Sync + 'static {
    /// Returns the instance name chosen by the user.
    fn name(&self) -> &str;

    /// Returns the instance description.
    fn description(&self) -> &str;

    /// Returns the id of the factory that built this bee.
    fn namespace(&self) -> &str;

    /// Returns the currently applied options.
    fn options(&self) -> &BeeOptions;

    /// Replaces the instance's options, re-binding any typed settings.
    ///
    /// On error the previous options stay in effect.
    fn reload_options(&mut self, options: BeeOptions) -> Result<(), HiveError>;

    /// Snapshot of this instance as a storable config record.
    fn config(&self) -> BeeConfig {
        BeeConfig {
            name: self.name().to_string(),
            class: self.namespace().to_string(),
            description: self.description().to_string(),
            options: self.options().clone(),
        }
    }
}
