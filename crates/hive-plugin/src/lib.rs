// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bee factories, capability descriptors, and the factory registry.
//!
//! A bee factory describes one kind of integration to the host: its identity,
//! the options it needs, the events it emits and the actions it accepts. The
//! host keeps factories in a [`FactoryRegistry`] built once at startup and
//! constructs bee instances through it.

pub mod descriptor;
pub mod manifest;
pub mod registry;

pub use descriptor::{ActionDescriptor, BeeIdentity, EventDescriptor, FieldDescriptor, ValueType};
pub use manifest::FactoryManifest;
pub use registry::{BeeFactory, FactoryRegistry};
