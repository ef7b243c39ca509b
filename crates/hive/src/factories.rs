// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compiled-in factory registration and the `factories` / `describe` commands.

use std::fmt::Write;

use hive_core::HiveError;
use hive_plugin::{BeeFactory, FactoryManifest, FactoryRegistry, FieldDescriptor};

/// Build the registry with every factory compiled into this binary.
///
/// Each bee crate exposes a `register` function; this is the only place
/// they are called.
pub fn builtin_registry() -> FactoryRegistry {
    #[allow(unused_mut)]
    let mut registry = FactoryRegistry::new();

    #[cfg(feature = "mastodon")]
    hive_mastodon::register(&mut registry);

    registry
}

/// One line per factory: id, display name, description.
pub fn render_list(registry: &FactoryRegistry, query: &str) -> String {
    let matches = registry.search(query);
    if matches.is_empty() {
        return "no bee factories found\n".to_string();
    }

    let width = matches.iter().map(|f| f.id().len()).max().unwrap_or(0);
    let mut out = String::new();
    for factory in matches {
        let _ = writeln!(
            out,
            "{:<width$}  {:<12}  {}",
            factory.id(),
            factory.name(),
            factory.description()
        );
    }
    out
}

/// Human-readable (or JSON) rendering of a factory's manifest.
pub fn render_describe(registry: &FactoryRegistry, id: &str, json: bool) -> Result<String, HiveError> {
    let factory = registry
        .get(id)
        .ok_or_else(|| HiveError::FactoryNotFound {
            class: id.to_string(),
        })?;

    if json {
        let mut out = FactoryManifest::from_factory(factory.as_ref()).to_json_pretty()?;
        out.push('\n');
        return Ok(out);
    }

    Ok(render_text(factory.as_ref()))
}

fn render_text(factory: &dyn BeeFactory) -> String {
    let identity = factory.identity();
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", identity.name, identity.id);
    let _ = writeln!(out, "  {}", identity.description);
    let _ = writeln!(out, "  image: {}  color: {}", identity.image, identity.logo_color);

    let _ = writeln!(out, "\nOptions:");
    write_fields(&mut out, &factory.options());

    let _ = writeln!(out, "\nEvents:");
    for event in factory.events() {
        let _ = writeln!(out, "  {}.{}: {}", event.namespace, event.name, event.description);
        write_fields(&mut out, &event.fields);
    }

    let _ = writeln!(out, "\nActions:");
    for action in factory.actions() {
        let _ = writeln!(out, "  {}.{}: {}", action.namespace, action.name, action.description);
        write_fields(&mut out, &action.fields);
    }

    out
}

fn write_fields(out: &mut String, fields: &[FieldDescriptor]) {
    for field in fields {
        let marker = if field.mandatory { " (required)" } else { "" };
        let _ = writeln!(
            out,
            "    {} <{}>{}: {}",
            field.name, field.value_type, marker, field.description
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_contains_mastodon() {
        let registry = builtin_registry();
        assert!(registry.get("mastodonbee").is_some());
    }

    #[test]
    fn list_shows_id_and_description() {
        let out = render_list(&builtin_registry(), "");
        assert!(out.contains("mastodonbee"));
        assert!(out.contains("Interact with mastodon"));
    }

    #[test]
    fn list_with_unmatched_query() {
        let out = render_list(&builtin_registry(), "no-such-thing");
        assert_eq!(out, "no bee factories found\n");
    }

    #[test]
    fn describe_text_lists_events_and_actions() {
        let out = render_describe(&builtin_registry(), "mastodonbee", false).unwrap();
        assert!(out.starts_with("mastodon (mastodonbee)\n"));
        assert!(out.contains("    server <string> (required): URL for the desired mastodon server"));
        assert!(out.contains("  mastodon.toot_fetched:"));
        assert!(out.contains("    followed_by <bool>:"));
        assert!(out.contains("  mastodon.toot: Post a new status toot"));
    }

    #[test]
    fn describe_json_is_manifest() {
        let out = render_describe(&builtin_registry(), "mastodonbee", true).unwrap();
        let manifest = FactoryManifest::from_json(&out).unwrap();
        assert_eq!(manifest.actions.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["logo_color"], "#003b66");
    }

    #[test]
    fn describe_unknown_factory() {
        let err = render_describe(&builtin_registry(), "nobee", false).unwrap_err();
        assert!(matches!(err, HiveError::FactoryNotFound { .. }));
    }
}
