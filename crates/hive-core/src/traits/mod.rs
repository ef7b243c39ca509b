// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for bee instances.

pub mod bee;

pub use bee::Bee;
