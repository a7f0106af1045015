// Game Club Booking Engine - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/gameclub-booking
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/gameclub-booking --starting-balance 5000 --verbose
// ```

use anyhow::{bail, Context};
use chrono::{Duration, Utc};
use clap::Parser;
use gameclub_booking::arcade::{self, GuessGame, Hint, SessionStats};
use gameclub_booking::types::config::CliArgs;
use gameclub_booking::{
    BookingConfig, BookingOrchestrator, BookingRequest, LoggingConfig, RoomCategory,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        let default_config = BookingConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        LoggingConfig::init_quiet()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("starting game club booking engine");

    let config = match BookingConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("configuration validation failed: {}", e);
        process::exit(1);
    }

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - the front-desk demo will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    if let Err(e) = run_front_desk_demo(config) {
        error!("demo failed: {}", e);
        process::exit(1);
    }

    info!("game club booking engine finished");
}

/// Walk through a typical front-desk session: browse, book, cancel, audit
fn run_front_desk_demo(config: BookingConfig) -> anyhow::Result<()> {
    let seed = config.seed;
    let orchestrator =
        BookingOrchestrator::new(config).context("failed to initialize the club")?;

    eprintln!("Room catalog:");
    for view in orchestrator.list_rooms() {
        eprintln!(
            "  {:<6} {:<12} {:<8} {:>4}₽/h  [{}]  {}",
            view.room.id,
            view.room.name,
            view.room.category,
            view.room.hourly_rate,
            view.status,
            view.room.specs.join(", ")
        );
    }
    eprintln!();

    eprintln!("Game library:");
    for category in RoomCategory::ALL {
        let titles: Vec<String> = orchestrator
            .games_for(category)
            .iter()
            .map(|g| g.display_name.clone())
            .collect();
        eprintln!("  {:<8} {}", category, titles.join(", "));
    }
    eprintln!();

    // A new member walks in
    let account_id = orchestrator
        .open_account()
        .context("failed to open account")?;
    let balance = orchestrator.get_balance(account_id)?;
    eprintln!("Opened account {} with {}₽", account_id, balance);

    // Book three hours of VIP starting in three hours
    let start = Utc::now() + Duration::hours(3);
    let vip_request = BookingRequest {
        room_id: "vip-1".into(),
        game_id: "ml".into(),
        account_id,
        start_time: start,
        duration_hours: 3,
    };
    let quote = orchestrator.quote(&vip_request.room_id, vip_request.duration_hours)?;
    eprintln!("Quote for 3h in vip-1: {}₽", quote);

    let reservation = orchestrator
        .create_reservation(&vip_request)
        .context("booking failed")?;
    eprintln!(
        "Booked {} for {} ({}₽), balance now {}₽",
        reservation.room_id,
        reservation.slot.start.format("%Y-%m-%d %H:%M"),
        reservation.price,
        orchestrator.get_balance(account_id)?
    );

    // The same slot cannot be double-booked
    let conflict = orchestrator.create_reservation(&BookingRequest {
        game_id: "csgo".into(),
        ..vip_request.clone()
    });
    match conflict {
        Err(e) => eprintln!("Second booking of the same slot refused: {}", e),
        Ok(_) => bail!("conflicting booking was accepted"),
    }

    // Change of plans: cancel and get the money back
    let cancelled = orchestrator
        .cancel_reservation(reservation.id)
        .context("cancellation failed")?;
    eprintln!(
        "Cancelled {}, refunded {}₽, balance back to {}₽",
        cancelled.id,
        cancelled.price,
        orchestrator.get_balance(account_id)?
    );
    eprintln!();

    // Pass the time at the lounge desk
    play_lounge_games(seed);

    // The audit trail for the session
    eprintln!("Transaction log:");
    for entry in orchestrator.transactions(account_id) {
        eprintln!(
            "  #{:<3} {:>6}₽  balance {:>6}₽  {}",
            entry.seq, entry.delta, entry.resulting_balance, entry.cause
        );
    }

    Ok(())
}

/// A short scripted lounge session: a few rounds of rock-paper-scissors and
/// one guessing game
fn play_lounge_games(seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    eprintln!("Lounge games while waiting:");
    let mut stats = SessionStats::new();
    for mv in [arcade::Move::Rock, arcade::Move::Paper, arcade::Move::Scissors] {
        let round = arcade::play(mv, &mut rng);
        stats.record(round.outcome);
        eprintln!(
            "  {} vs {} -> {:?}",
            round.player, round.house, round.outcome
        );
    }
    eprintln!(
        "  {} played, win rate {:.0}%",
        stats.games_played(),
        stats.win_rate()
    );

    let mut game = GuessGame::new(&mut rng);
    let mut low = arcade::MIN_TARGET;
    let mut high = arcade::MAX_TARGET;
    // Binary search always finds the target within seven attempts
    while !game.is_finished() {
        let probe = low + (high - low) / 2;
        match game.guess(probe) {
            Hint::Exact => {
                eprintln!("  Guessed the number {} with attempts to spare", probe);
            }
            Hint::Higher(distance) => {
                eprintln!("  {} is too low ({})", probe, distance);
                low = probe + 1;
            }
            Hint::Lower(distance) => {
                eprintln!("  {} is too high ({})", probe, distance);
                high = probe - 1;
            }
            Hint::GameOver { target } => {
                eprintln!("  Out of attempts, the number was {}", target);
            }
        }
    }
    eprintln!();
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &BookingConfig) {
    eprintln!("Game Club Booking Engine");
    eprintln!("========================");
    eprintln!("Rooms, games, pricing, and an audited member ledger");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &BookingConfig) {
    eprintln!("Configuration:");
    eprintln!(
        "  Session Duration: {} - {} hours",
        config.min_duration_hours, config.max_duration_hours
    );
    eprintln!("  Cancellation Lead Time: {} hours", config.cancellation_lead_hours);
    eprintln!("  Starting Balance: {}₽", config.starting_balance);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
