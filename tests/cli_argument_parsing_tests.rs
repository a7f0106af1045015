//! CLI argument parsing tests
//!
//! Verify the flag surface of the binary and how CLI values layer over the
//! configuration file and defaults.

use clap::Parser;
use gameclub_booking::types::config::CliArgs;
use gameclub_booking::BookingConfig;
use std::io::Write;

/// No flags at all falls back to defaults
#[test]
fn test_no_arguments() {
    let args = CliArgs::try_parse_from(["gameclub-booking"]).unwrap();
    assert!(args.config.is_none());
    assert!(args.starting_balance.is_none());
    assert!(args.cancellation_lead_hours.is_none());
    assert!(args.seed.is_none());
    assert!(!args.print_config);
    assert!(!args.dry_run);
    assert!(!args.verbose);
    assert!(!args.debug);

    let config = BookingConfig::from_cli_args(args).unwrap();
    assert_eq!(config, BookingConfig::default());
}

/// Every long flag parses into its field
#[test]
fn test_all_flags() {
    let args = CliArgs::try_parse_from([
        "gameclub-booking",
        "--config",
        "club.json",
        "--starting-balance",
        "5000",
        "--cancellation-lead-hours",
        "4",
        "--seed",
        "42",
        "--dry-run",
        "--verbose",
        "--debug",
    ])
    .unwrap();

    assert_eq!(args.config.as_deref(), Some("club.json"));
    assert_eq!(args.starting_balance, Some(5000));
    assert_eq!(args.cancellation_lead_hours, Some(4));
    assert_eq!(args.seed, Some(42));
    assert!(args.dry_run);
    assert!(args.verbose);
    assert!(args.debug);
}

/// Short flags work where defined
#[test]
fn test_short_flags() {
    let args = CliArgs::try_parse_from(["gameclub-booking", "-c", "club.json", "-v"]).unwrap();
    assert_eq!(args.config.as_deref(), Some("club.json"));
    assert!(args.verbose);
}

/// Unknown flags and malformed values are rejected
#[test]
fn test_invalid_arguments() {
    assert!(CliArgs::try_parse_from(["gameclub-booking", "--frobnicate"]).is_err());
    assert!(CliArgs::try_parse_from(["gameclub-booking", "--starting-balance", "lots"]).is_err());
    assert!(CliArgs::try_parse_from(["gameclub-booking", "--seed", "-1"]).is_err());
}

/// CLI flags override a configuration file, which overrides defaults
#[test]
fn test_layered_configuration() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let on_disk = BookingConfig {
        starting_balance: 1000,
        cancellation_lead_hours: 6,
        ..Default::default()
    };
    write!(file, "{}", serde_json::to_string(&on_disk).unwrap()).unwrap();

    let path = file.path().to_string_lossy().to_string();
    let args = CliArgs::try_parse_from([
        "gameclub-booking",
        "--config",
        &path,
        "--starting-balance",
        "9000",
    ])
    .unwrap();

    let config = BookingConfig::from_cli_args(args).unwrap();
    assert_eq!(config.starting_balance, 9000); // CLI wins
    assert_eq!(config.cancellation_lead_hours, 6); // file wins over default
    assert_eq!(config.max_duration_hours, 6); // default
}

/// A config flag pointing nowhere is a load error
#[test]
fn test_missing_config_file() {
    let args =
        CliArgs::try_parse_from(["gameclub-booking", "--config", "/no/such/club.json"]).unwrap();
    assert!(BookingConfig::from_cli_args(args).is_err());
}
