// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mastodon bee instance.
//!
//! Holds the bound account settings. Talking to the server is done by the
//! host's runtime, not by this type.

use hive_core::{Bee, BeeOptions, HiveError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Longest status the `toot` action accepts, in characters.
pub const MAX_TOOT_CHARS: usize = 500;

/// Typed view of a Mastodon bee's options.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MastodonOptions {
    pub server: String,
    pub client_id: String,
    pub client_secret: String,
    pub email: String,
    pub password: String,
}

impl MastodonOptions {
    /// Bind every option from the bag; the first missing or mistyped one fails.
    pub fn from_options(options: &BeeOptions) -> Result<Self, HiveError> {
        Ok(Self {
            server: options.bind("server")?,
            client_id: options.bind("client_id")?,
            client_secret: options.bind("client_secret")?,
            email: options.bind("email")?,
            password: options.bind("password")?,
        })
    }
}

impl std::fmt::Debug for MastodonOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MastodonOptions")
            .field("server", &self.server)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A configured connection to one Mastodon account.
#[derive(Clone)]
pub struct MastodonBee {
    name: String,
    namespace: String,
    description: String,
    options: BeeOptions,
    settings: MastodonOptions,
}

impl MastodonBee {
    pub(crate) fn new(name: &str, namespace: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            description: description.to_string(),
            options: BeeOptions::new(),
            settings: MastodonOptions::default(),
        }
    }

    /// Bound account settings.
    pub fn settings(&self) -> &MastodonOptions {
        &self.settings
    }

    /// Check an action request against the `toot` action's inputs.
    ///
    /// Returns the status text to post.
    pub fn validate_action(&self, action: &str, params: &BeeOptions) -> Result<String, HiveError> {
        if action != "toot" {
            return Err(HiveError::Action {
                action: action.to_string(),
                message: "unknown action for mastodon bees".to_string(),
            });
        }

        let text: String = params.bind("text").map_err(|e| HiveError::Action {
            action: action.to_string(),
            message: e.to_string(),
        })?;

        if text.trim().is_empty() {
            return Err(HiveError::Action {
                action: action.to_string(),
                message: "text must not be empty".to_string(),
            });
        }

        let len = text.chars().count();
        if len > MAX_TOOT_CHARS {
            return Err(HiveError::Action {
                action: action.to_string(),
                message: format!("text is {len} characters, limit is {MAX_TOOT_CHARS}"),
            });
        }

        Ok(text)
    }
}

impl std::fmt::Debug for MastodonBee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Raw options hold the password; only the redacted settings are shown.
        f.debug_struct("MastodonBee")
            .field("name", &self.name)
            .field("namespace", &self.namespace)
            .field("description", &self.description)
            .field("settings", &self.settings)
            .finish()
    }
}

impl Bee for MastodonBee {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn options(&self) -> &BeeOptions {
        &self.options
    }

    fn reload_options(&mut self, options: BeeOptions) -> Result<(), HiveError> {
        let settings = MastodonOptions::from_options(&options)?;
        debug!(bee = %self.name, server = %settings.server, "mastodon options reloaded");
        self.settings = settings;
        self.options = options;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> BeeOptions {
        BeeOptions::new()
            .with("server", "https://mastodon.social")
            .with("client_id", "id")
            .with("client_secret", "secret")
            .with("email", "me@example.com")
            .with("password", "hunter2")
    }

    fn bee() -> MastodonBee {
        let mut bee = MastodonBee::new("m", "mastodonbee", "test");
        bee.reload_options(options()).unwrap();
        bee
    }

    #[test]
    fn reload_binds_settings() {
        let bee = bee();
        assert_eq!(bee.settings().server, "https://mastodon.social");
        assert_eq!(bee.settings().email, "me@example.com");
        assert_eq!(bee.options(), &options());
    }

    #[test]
    fn failed_reload_keeps_previous_options() {
        let mut bee = bee();
        let err = bee
            .reload_options(BeeOptions::new().with("server", "https://other.example"))
            .unwrap_err();
        assert!(matches!(err, HiveError::Option { ref name, .. } if name == "client_id"));
        assert_eq!(bee.settings().server, "https://mastodon.social");
        assert_eq!(bee.options(), &options());
    }

    #[test]
    fn debug_redacts_secrets() {
        let rendered = format!("{:?}", bee().settings());
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("\"secret\""));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn toot_within_limit_is_accepted() {
        let params = BeeOptions::new().with("text", "hello fediverse");
        assert_eq!(bee().validate_action("toot", &params).unwrap(), "hello fediverse");
    }

    #[test]
    fn toot_limit_counts_characters_not_bytes() {
        let text = "é".repeat(MAX_TOOT_CHARS);
        let params = BeeOptions::new().with("text", text.clone());
        assert_eq!(bee().validate_action("toot", &params).unwrap(), text);

        let params = BeeOptions::new().with("text", "é".repeat(MAX_TOOT_CHARS + 1));
        let err = bee().validate_action("toot", &params).unwrap_err();
        assert!(err.to_string().contains("limit is 500"));
    }

    #[test]
    fn toot_requires_text() {
        let err = bee().validate_action("toot", &BeeOptions::new()).unwrap_err();
        assert!(matches!(err, HiveError::Action { .. }));

        let params = BeeOptions::new().with("text", "   ");
        let err = bee().validate_action("toot", &params).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn unknown_action_is_rejected() {
        let params = BeeOptions::new().with("text", "hi");
        let err = bee().validate_action("boost", &params).unwrap_err();
        assert!(matches!(err, HiveError::Action { ref action, .. } if action == "boost"));
    }
}
