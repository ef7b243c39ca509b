// SPDX-FileCopyrightText: 2026 Hive Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hive - a plugin-based automation host.
//!
//! This is the binary entry point: it builds the factory registry, loads
//! configuration and dispatches subcommands.

mod check;
mod factories;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hive_config::HiveConfig;
use tracing::debug;

/// Hive - a plugin-based automation host.
#[derive(Parser, Debug)]
#[command(name = "hive", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List registered bee factories.
    Factories {
        /// Only show factories whose id, name or description contains this.
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Show everything a bee factory advertises.
    Describe {
        /// Factory id, e.g. `mastodonbee`.
        id: String,
        /// Print the manifest as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Instantiate every configured bee and report problems.
    Check,
}

fn main() {
    let cli = Cli::parse();

    let config = if needs_config(cli.command.as_ref()) {
        let loaded = match &cli.config {
            Some(path) => hive_config::load_and_validate_path(path),
            None => hive_config::load_and_validate(),
        };
        match loaded {
            Ok(config) => config,
            Err(errors) => {
                hive_config::render_errors(&errors);
                std::process::exit(1);
            }
        }
    } else {
        HiveConfig::default()
    };

    init_tracing(&config.hive.log_level);

    let registry = factories::builtin_registry();
    debug!(factories = registry.len(), "bee factories registered");

    if let Err(e) = run(cli.command, &config, &registry) {
        eprintln!("hive: {e}");
        std::process::exit(1);
    }
}

/// Only `check` reads configured bees; the other commands describe
/// compiled-in factories and run with defaults.
fn needs_config(command: Option<&Commands>) -> bool {
    matches!(command, Some(Commands::Check))
}

fn run(
    command: Option<Commands>,
    config: &HiveConfig,
    registry: &hive_plugin::FactoryRegistry,
) -> Result<(), hive_core::HiveError> {
    match command {
        Some(Commands::Factories { query }) => {
            print!("{}", factories::render_list(registry, query.as_deref().unwrap_or("")));
            Ok(())
        }
        Some(Commands::Describe { id, json }) => {
            print!("{}", factories::render_describe(registry, &id, json)?);
            Ok(())
        }
        Some(Commands::Check) => check::run_check(config, registry),
        None => {
            println!("hive: use --help for available commands");
            Ok(())
        }
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hive={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_describe_with_json() {
        let cli = Cli::parse_from(["hive", "describe", "mastodonbee", "--json"]);
        match cli.command {
            Some(Commands::Describe { id, json }) => {
                assert_eq!(id, "mastodonbee");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_global_config_flag() {
        let cli = Cli::parse_from(["hive", "check", "--config", "/tmp/hive.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/hive.toml")));
        assert!(matches!(cli.command, Some(Commands::Check)));
    }

    #[test]
    fn only_check_loads_config() {
        let check = Cli::parse_from(["hive", "check"]);
        let factories = Cli::parse_from(["hive", "factories"]);
        let describe = Cli::parse_from(["hive", "describe", "mastodonbee"]);

        assert!(needs_config(check.command.as_ref()));
        assert!(!needs_config(factories.command.as_ref()));
        assert!(!needs_config(describe.command.as_ref()));
        assert!(!needs_config(None));
    }

    #[test]
    fn read_only_commands_run_with_default_config() {
        let registry = factories::builtin_registry();
        let config = HiveConfig::default();

        let describe = Cli::parse_from(["hive", "describe", "mastodonbee"]);
        assert!(run(describe.command, &config, &registry).is_ok());

        let list = Cli::parse_from(["hive", "factories", "--query", "mastodon"]);
        assert!(run(list.command, &config, &registry).is_ok());
    }
}
