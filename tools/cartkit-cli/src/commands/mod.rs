//! CLI command implementations.

pub mod checkout;
pub mod config;
pub mod products;

use std::str::FromStr;

use clap::{Args, Subcommand};

use cartkit_commerce::cart::CartAction;
use cartkit_commerce::ProductId;

use crate::config::SimulatedOutcome;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Catalog file (overrides `[catalog] path`).
    #[arg(short, long)]
    pub file: Option<String>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Cart intents applied in order: `add:ID`, `remove:ID`, `set:ID=QTY`.
    #[arg(value_name = "INTENT")]
    pub intents: Vec<Intent>,

    /// Catalog file (overrides `[catalog] path`).
    #[arg(short, long)]
    pub file: Option<String>,

    /// Force the simulated backend's answer.
    #[arg(long, value_enum)]
    pub outcome: Option<SimulatedOutcome>,

    /// Backend latency in milliseconds.
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Apply the intents and print totals without checking out.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// A cart intent given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Intent(pub CartAction);

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = s
            .split_once(':')
            .ok_or_else(|| format!("expected VERB:ARG, got '{}'", s))?;
        if rest.is_empty() {
            return Err(format!("missing product id in '{}'", s));
        }

        let action = match verb {
            "add" => CartAction::AddToCart(ProductId::new(rest)),
            "remove" | "rm" => CartAction::RemoveFromCart(ProductId::new(rest)),
            "set" => {
                let (id, quantity) = rest
                    .split_once('=')
                    .ok_or_else(|| format!("expected set:ID=QTY, got '{}'", s))?;
                let quantity = quantity
                    .parse::<i64>()
                    .map_err(|e| format!("bad quantity in '{}': {}", s, e))?;
                CartAction::UpdateQuantity {
                    id: ProductId::new(id),
                    quantity,
                }
            }
            other => return Err(format!("unknown intent '{}'", other)),
        };

        Ok(Intent(action))
    }
}
