// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hive check` command implementation.
//!
//! Builds every configured bee through the registry without starting it,
//! so configuration problems surface before the hive runs.

use hive_config::{check_bee_classes, render_errors, HiveConfig};
use hive_core::HiveError;
use hive_plugin::FactoryRegistry;
use tracing::{info, warn};

/// Outcome of building one configured bee.
#[derive(Debug, PartialEq, Eq)]
pub enum BeeReport {
    Ok { name: String, class: String },
    MissingOptions { name: String, missing: Vec<String> },
    Failed { name: String, error: String },
}

/// Try to construct each bee whose class is registered.
///
/// Bees with unknown classes are skipped here; `check_bee_classes` reports them.
pub fn check_bees(config: &HiveConfig, registry: &FactoryRegistry) -> Vec<BeeReport> {
    let mut reports = Vec::new();

    for bee in &config.bees {
        if registry.get(&bee.class).is_none() {
            continue;
        }

        let missing = match registry.missing_options(&bee.class, &bee.options) {
            Ok(missing) => missing,
            Err(e) => {
                reports.push(BeeReport::Failed {
                    name: bee.name.clone(),
                    error: e.to_string(),
                });
                continue;
            }
        };
        if !missing.is_empty() {
            warn!(bee = %bee.name, ?missing, "bee is missing mandatory options");
            reports.push(BeeReport::MissingOptions {
                name: bee.name.clone(),
                missing,
            });
            continue;
        }

        match registry.create_bee(&bee.class, &bee.name, &bee.description, bee.options.clone()) {
            Ok(instance) => {
                info!(bee = %instance.name(), class = %instance.namespace(), "bee constructed");
                reports.push(BeeReport::Ok {
                    name: bee.name.clone(),
                    class: bee.class.clone(),
                });
            }
            Err(e) => {
                warn!(bee = %bee.name, error = %e, "bee failed to construct");
                reports.push(BeeReport::Failed {
                    name: bee.name.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    reports
}

/// Run the `hive check` command.
pub fn run_check(config: &HiveConfig, registry: &FactoryRegistry) -> Result<(), HiveError> {
    let mut failures = 0;

    if let Err(errors) = check_bee_classes(config, &registry.ids()) {
        failures += errors.len();
        render_errors(&errors);
    }

    for report in check_bees(config, registry) {
        match report {
            BeeReport::Ok { name, class } => println!("ok      {name} ({class})"),
            BeeReport::MissingOptions { name, missing } => {
                failures += 1;
                println!("missing {name}: {}", missing.join(", "));
            }
            BeeReport::Failed { name, error } => {
                failures += 1;
                println!("failed  {name}: {error}");
            }
        }
    }

    if failures > 0 {
        return Err(HiveError::Config(format!(
            "{failures} configured bee(s) have problems"
        )));
    }
    Ok(())
}
