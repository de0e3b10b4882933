// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use hostsel::inventory::{resolve_inventory_path, INVENTORY_ENV};
use hostsel::{matches, parse, Host, InventoryLoader, Labeled};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the aliases of inventory hosts matching a selector
    Select {
        /// Selector expression, e.g. "env=prod&role!=db, bastion"
        expression: String,

        /// Path to the inventory YAML file (defaults to $HOSTSEL_INVENTORY)
        #[arg(short, long)]
        inventory: Option<PathBuf>,
    },
    /// Print the parsed form of a selector as JSON
    Explain {
        /// Selector expression
        expression: String,
    },
    /// Evaluate a selector against a single ad hoc host
    Check {
        /// Selector expression
        expression: String,

        /// Host alias
        #[arg(short, long)]
        name: String,

        /// Host label as key=value; may be repeated
        #[arg(short, long = "label", value_parser = parse_label)]
        labels: Vec<(String, String)>,
    },
}

fn parse_label(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Select {
            expression,
            inventory,
        } => {
            let path = resolve_inventory_path(inventory, std::env::var(INVENTORY_ENV).ok())?;
            log::info!("Using inventory: {}", path.display());

            let inventory = InventoryLoader::new()
                .load_inventory(&path)
                .with_context(|| format!("failed to load inventory {}", path.display()))?;

            for host in inventory.select(&expression) {
                println!("{}", host.name());
            }
        }
        Commands::Explain { expression } => {
            println!("{}", parse(&expression).to_json_pretty()?);
        }
        Commands::Check {
            expression,
            name,
            labels,
        } => {
            let host = labels
                .into_iter()
                .fold(Host::new(name), |host, (k, v)| host.with_label(k, v));
            let selected = matches(&parse(&expression), host.labels(), host.name());
            log::info!("Selector '{}' on host '{}': {}", expression, host.alias, selected);
            println!("{}", selected);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(parse_label("env=prod"), Ok(label("env", "prod")));
    }

    #[test]
    fn test_parse_label_splits_at_first_equals() {
        assert_eq!(parse_label("a=b=c"), Ok(label("a", "b=c")));
    }

    #[test]
    fn test_parse_label_trims() {
        assert_eq!(parse_label(" env = prod "), Ok(label("env", "prod")));
    }

    #[test]
    fn test_parse_label_allows_empty_value() {
        assert_eq!(parse_label("role="), Ok(label("role", "")));
    }

    #[test]
    fn test_parse_label_rejects_missing_key() {
        assert!(parse_label("=prod").is_err());
        assert!(parse_label("  =prod").is_err());
    }

    #[test]
    fn test_parse_label_rejects_missing_equals() {
        let err = parse_label("prod").unwrap_err();
        assert_eq!(err, "expected key=value, got 'prod'");
    }

    #[test]
    fn test_check_args() {
        let args = Args::try_parse_from([
            "hostsel", "check", "env=prod", "--name", "web1", "-l", "env=prod", "-l", "tag=a=b",
        ])
        .unwrap();
        match args.command {
            Commands::Check { name, labels, .. } => {
                assert_eq!(name, "web1");
                assert_eq!(labels, vec![label("env", "prod"), label("tag", "a=b")]);
            }
            other => panic!("Expected check command, got {:?}", other),
        }
    }

    #[test]
    fn test_check_args_reject_bad_label() {
        let result =
            Args::try_parse_from(["hostsel", "check", "all", "--name", "web1", "-l", "oops"]);
        assert!(result.is_err());
    }
}
