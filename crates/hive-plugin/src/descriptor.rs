// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value types describing a bee factory's identity, options, events and actions.
//!
//! These form the contract between a bee and the host's event bus: field
//! names and type names must match exactly on both sides.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Wire type name of an option, event payload field or action input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Int,
    Int64,
    Float64,
    Bool,
    #[strum(serialize = "[]string")]
    #[serde(rename = "[]string")]
    StringList,
    Url,
    Map,
}

/// A single named, typed field.
///
/// Used for factory options, event payloads and action inputs alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(default)]
    pub mandatory: bool,
}

impl FieldDescriptor {
    /// An optional field.
    pub fn new(name: &str, description: &str, value_type: ValueType) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            value_type,
            mandatory: false,
        }
    }

    /// A field the host must always supply.
    pub fn mandatory(name: &str, description: &str, value_type: ValueType) -> Self {
        Self {
            mandatory: true,
            ..Self::new(name, description, value_type)
        }
    }
}

/// One kind of inbound occurrence a bee reports to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDescriptor {
    /// Grouping of the event, equal to the factory's display name.
    pub namespace: String,
    pub name: String,
    pub description: String,
    /// Payload fields, in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl EventDescriptor {
    /// Look up a payload field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One kind of outbound operation the host can ask a bee to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Grouping of the action, equal to the factory's display name.
    pub namespace: String,
    pub name: String,
    pub description: String,
    /// Input fields, in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl ActionDescriptor {
    /// Look up an input field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the inputs the host must supply.
    pub fn mandatory_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.mandatory)
            .map(|f| f.name.as_str())
    }
}

/// Identity of a bee factory as shown by the admin interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeeIdentity {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Filename of the factory's logo.
    pub image: String,
    /// Preferred logo background color.
    pub logo_color: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn value_type_wire_names() {
        assert_eq!(ValueType::String.to_string(), "string");
        assert_eq!(ValueType::Int64.to_string(), "int64");
        assert_eq!(ValueType::Float64.to_string(), "float64");
        assert_eq!(ValueType::Bool.to_string(), "bool");
        assert_eq!(ValueType::StringList.to_string(), "[]string");
    }

    #[test]
    fn value_type_parses_wire_names() {
        assert_eq!(ValueType::from_str("int64").unwrap(), ValueType::Int64);
        assert_eq!(ValueType::from_str("[]string").unwrap(), ValueType::StringList);
        assert!(ValueType::from_str("uint128").is_err());
    }

    #[test]
    fn value_type_serde_matches_display() {
        for vt in [
            ValueType::String,
            ValueType::Int,
            ValueType::Int64,
            ValueType::Float64,
            ValueType::Bool,
            ValueType::StringList,
            ValueType::Url,
            ValueType::Map,
        ] {
            let json = serde_json::to_string(&vt).unwrap();
            assert_eq!(json, format!("\"{vt}\""));
        }
    }

    #[test]
    fn field_serializes_type_key() {
        let field = FieldDescriptor::mandatory("text", "status text", ValueType::String);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "string");
        assert_eq!(json["mandatory"], true);
    }

    #[test]
    fn action_mandatory_fields_skips_optional() {
        let action = ActionDescriptor {
            namespace: "test".into(),
            name: "post".into(),
            description: "post something".into(),
            fields: vec![
                FieldDescriptor::mandatory("text", "body", ValueType::String),
                FieldDescriptor::new("visibility", "who sees it", ValueType::String),
            ],
        };
        let mandatory: Vec<&str> = action.mandatory_fields().collect();
        assert_eq!(mandatory, vec!["text"]);
        assert!(action.field("visibility").is_some());
        assert!(action.field("missing").is_none());
    }
}
