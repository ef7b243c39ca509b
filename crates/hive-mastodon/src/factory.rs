// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability descriptors and constructor for Mastodon bees.
//!
//! Field names and types below are the wire contract with the host's event
//! bus. `reblog.reblogs` is declared as `string` while `toot_fetched.reblogs`
//! is `int64`; hosts already depend on both, so neither is changed here.

use hive_core::{Bee, BeeOptions, HiveError};
use hive_plugin::{ActionDescriptor, BeeFactory, EventDescriptor, FieldDescriptor, ValueType};
use tracing::debug;

use crate::bee::MastodonBee;

/// Factory for [`MastodonBee`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct MastodonBeeFactory;

impl MastodonBeeFactory {
    fn event(&self, name: &str, description: &str, fields: Vec<FieldDescriptor>) -> EventDescriptor {
        EventDescriptor {
            namespace: self.name().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            fields,
        }
    }

    fn action(
        &self,
        name: &str,
        description: &str,
        fields: Vec<FieldDescriptor>,
    ) -> ActionDescriptor {
        ActionDescriptor {
            namespace: self.name().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            fields,
        }
    }
}

fn string(name: &str, description: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, description, ValueType::String)
}

fn int64(name: &str, description: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, description, ValueType::Int64)
}

fn boolean(name: &str, description: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, description, ValueType::Bool)
}

impl BeeFactory for MastodonBeeFactory {
    fn id(&self) -> &str {
        "mastodonbee"
    }

    fn name(&self) -> &str {
        "mastodon"
    }

    fn description(&self) -> &str {
        "Interact with mastodon"
    }

    fn logo_color(&self) -> &str {
        "#003b66"
    }

    fn options(&self) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::mandatory(
                "server",
                "URL for the desired mastodon server",
                ValueType::String,
            ),
            FieldDescriptor::mandatory(
                "client_id",
                "Client id for the mastodon client",
                ValueType::String,
            ),
            FieldDescriptor::mandatory(
                "client_secret",
                "Client secret for the mastodon client",
                ValueType::String,
            ),
            FieldDescriptor::mandatory("email", "User account email", ValueType::String),
            FieldDescriptor::mandatory("password", "User account password", ValueType::String),
        ]
    }

    fn events(&self) -> Vec<EventDescriptor> {
        vec![
            self.event(
                "deleted",
                "is triggered when a toot has been deleted",
                vec![string("id", "The ID of the deleted toot")],
            ),
            self.event(
                "toot_fetched",
                "is triggered when a toot has been fetched",
                vec![
                    string("id", "The ID of the toot"),
                    string("text", "Text of the toot that has been sent"),
                    string("user_id", "Mastodon ID of the toot's author"),
                    string("username", "Mastodon handle of the toot's author"),
                    int64("reblogs", "reblogs count"),
                    int64("favourites", "favourites count"),
                    string("url", "The url for the toot"),
                ],
            ),
            self.event(
                "follow",
                "is triggered when someone wants to follow you",
                vec![
                    string(
                        "user_id",
                        "Mastodon ID of the user which triggered the follow event",
                    ),
                    string(
                        "username",
                        "Mastodon handle of the user which triggered the follow event",
                    ),
                    boolean("following", "Indicates if you're following the user"),
                    boolean("followed_by", "Indicates if you're followed by the user"),
                    int64(
                        "followers",
                        "Number of followers for the user which triggered the follow request",
                    ),
                    int64(
                        "follows",
                        "Number of follows for the user which triggered the follow request",
                    ),
                ],
            ),
            self.event(
                "favourite",
                "is triggered when someone favourites one of your toots.",
                vec![
                    string("id", "The ID of toot"),
                    string("user_id", "Mastodon ID of the user that favourited your toot"),
                    string(
                        "username",
                        "The Mastodon handle of the user that favourited your toot",
                    ),
                    string("text", "text content of the favourited toot"),
                    string("url", "URL of the favourited toot"),
                    int64("favourites", "The count of favourites for this toot"),
                ],
            ),
            self.event(
                "reblog",
                "is triggered when someone reblogs one of your toots",
                vec![
                    string("user_id", "Mastodon ID of the user that reblogged your toot"),
                    string("username", "Mastodon handle of the user that reblogged your toot"),
                    string("text", "text content of the mention"),
                    string("url", "URL of the mention"),
                    string("reblogs", "Number of reblogs for the post"),
                ],
            ),
            self.event(
                "mention",
                "is triggered whenever someone mentions you on Mastodon",
                vec![
                    string("id", "The ID of toot"),
                    string("user_id", "Mastodon ID of the mention's author"),
                    string("username", "The Mastodon handle of the mention's author"),
                    string("text", "text content of the mention"),
                    string("url", "URL of the mention"),
                ],
            ),
        ]
    }

    fn actions(&self) -> Vec<ActionDescriptor> {
        vec![self.action(
            "toot",
            "Post a new status toot",
            vec![FieldDescriptor::mandatory(
                "text",
                "Text of the status to toot, may not be longer than 500 characters",
                ValueType::String,
            )],
        )]
    }

    fn new_bee(
        &self,
        name: &str,
        description: &str,
        options: BeeOptions,
    ) -> Result<Box<dyn Bee>, HiveError> {
        debug!(bee = name, class = self.id(), "creating mastodon bee");
        let mut bee = MastodonBee::new(name, self.id(), description);
        bee.reload_options(options)?;
        Ok(Box::new(bee))
    }
}
