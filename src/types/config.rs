//! Configuration for the booking engine
//!
//! Booking policy values (duration bounds, cancellation lead time, opening
//! balance) with JSON file loading, CLI overrides and validation.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration values are inconsistent or out of range
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Command line arguments
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gameclub-booking",
    version,
    about = "Game club booking engine - rooms, slots, tiered prices, prepaid balances",
    long_about = "Runs a scripted walkthrough of the booking engine: seeds the room and game \
catalog, opens a member account and drives the reserve / cancel / top-up flow while logging \
every ledger mutation.

CONFIGURATION:
    1. Command line arguments (highest priority)
    2. Configuration file (--config, JSON)
    3. Built-in defaults

    Use --print-config to emit a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(short, long, help = "Configuration file path (JSON format)")]
    pub config: Option<String>,

    /// Opening balance for newly opened accounts, in rubles
    #[arg(long, help = "Opening balance for new accounts, in rubles")]
    pub starting_balance: Option<i64>,

    /// Cancellation lead time in hours
    #[arg(
        long,
        help = "Minimum hours before the session start at which a member may still cancel"
    )]
    pub cancellation_lead_hours: Option<i64>,

    /// Seed for the arcade games' random source
    #[arg(long, help = "Random seed for deterministic arcade game outcomes")]
    pub seed: Option<u64>,

    /// Print the default configuration as JSON and exit
    #[arg(long, help = "Print default configuration as JSON and exit")]
    pub print_config: bool,

    /// Validate configuration without running the demo
    #[arg(long, help = "Validate configuration and exit")]
    pub dry_run: bool,

    /// Enable verbose logging (INFO level)
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging (DEBUG level)
    #[arg(long, help = "Enable debug logging")]
    pub debug: bool,
}

/// Booking policy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Minimum bookable session length in hours
    pub min_duration_hours: u8,
    /// Maximum bookable session length in hours
    pub max_duration_hours: u8,
    /// Minimum hours before session start at which a member may still cancel
    pub cancellation_lead_hours: i64,
    /// Opening balance credited to new accounts, in rubles
    pub starting_balance: i64,
    /// Optional seed for the arcade games' random source
    pub seed: Option<u64>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            min_duration_hours: 1,
            max_duration_hours: 6,
            cancellation_lead_hours: 2,
            starting_balance: 2500,
            seed: None,
        }
    }
}

impl BookingConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Build the effective configuration from CLI arguments
    ///
    /// File settings (if `--config` is given) override defaults; explicit CLI
    /// flags override both.
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(balance) = args.starting_balance {
            config.starting_balance = balance;
        }
        if let Some(lead) = args.cancellation_lead_hours {
            config.cancellation_lead_hours = lead;
        }
        if let Some(seed) = args.seed {
            config.seed = Some(seed);
        }

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_duration_hours == 0 {
            return Err(ConfigError::Invalid(
                "min_duration_hours must be at least 1".to_string(),
            ));
        }
        if self.max_duration_hours < self.min_duration_hours {
            return Err(ConfigError::Invalid(format!(
                "max_duration_hours ({}) must not be below min_duration_hours ({})",
                self.max_duration_hours, self.min_duration_hours
            )));
        }
        if self.cancellation_lead_hours < 0 {
            return Err(ConfigError::Invalid(
                "cancellation_lead_hours must not be negative".to_string(),
            ));
        }
        if self.starting_balance < 0 {
            return Err(ConfigError::Invalid(
                "starting_balance must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Serialize the configuration as pretty JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
