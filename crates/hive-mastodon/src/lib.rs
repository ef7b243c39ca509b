// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mastodon bee for the Hive automation framework.
//!
//! Declares the options a Mastodon bee needs, the events it reports
//! (toots, follows, favourites, reblogs, mentions, deletions) and the
//! `toot` action it accepts, and builds [`MastodonBee`] instances.

pub mod bee;
pub mod factory;

use std::sync::Arc;

use hive_plugin::FactoryRegistry;

pub use bee::{MastodonBee, MastodonOptions, MAX_TOOT_CHARS};
pub use factory::MastodonBeeFactory;

/// Register the Mastodon factory with the host's registry.
///
/// Called once from the host's startup sequence.
pub fn register(registry: &mut FactoryRegistry) {
    registry.register(Arc::new(MastodonBeeFactory));
}
