// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow Poker round simulator.
//!
//! Plays rounds with fixed bets, the player hand is set by house way.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::{error, info};

use paigow_core::{BetKind, Chips, Config, GameError, RoundReport, Session};

mod summary;

use summary::Summary;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of rounds to play.
    #[clap(long, short, default_value_t = 10)]
    rounds: u32,
    /// The starting bankroll.
    #[clap(long, short, default_value_t = 1_000)]
    bankroll: u32,
    /// The main bet for each round.
    #[clap(long, short, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    main_bet: u32,
    /// The Fortune bet for each round.
    #[clap(long, short, default_value_t = 0)]
    fortune_bet: u32,
    /// The shuffle seed, rounds are reproducible with the same seed.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Print cards and hands for each round.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{e}");
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config {
        bankroll: Chips::new(cli.bankroll),
        seed: cli.seed,
    };

    let mut session = Session::new(&config);
    let mut summary = Summary::default();

    for round in 1..=cli.rounds {
        match place_bets(&mut session, cli) {
            Ok(()) => {}
            Err(GameError::InsufficientChips { bankroll, bets }) => {
                info!("Bankroll {bankroll} cannot cover bets {bets}, stopping");
                break;
            }
            Err(e) => return Err(e.into()),
        }

        session.deal_round()?;
        let player = session.suggest_split()?;
        let report = session.finish_round(&player)?;

        print_round(round, &report, cli.verbose);
        summary.add(
            report.showdown.outcome,
            &report.settlement.fortune,
            report.settlement.net(),
        );
    }

    if summary.rounds() < cli.rounds {
        info!("Played {} of {} rounds", summary.rounds(), cli.rounds);
    }

    println!("\n{summary}");
    println!("Bankroll:     {}", session.bankroll());

    Ok(())
}

fn place_bets(session: &mut Session, cli: &Cli) -> Result<(), GameError> {
    session.place_bet(BetKind::Main, Chips::new(cli.main_bet))?;
    if cli.fortune_bet > 0 {
        session.place_bet(BetKind::Fortune, Chips::new(cli.fortune_bet))?;
    }

    Ok(())
}

fn print_round(round: u32, report: &RoundReport, verbose: bool) {
    let showdown = &report.showdown;

    if verbose {
        let cards = report
            .player_cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        println!("\nRound {round}");
        println!("  Player cards  {cards}");
        println!(
            "  Player        {} {} / {}",
            report.player,
            showdown.player_low.describe_low(),
            showdown.player_high.describe_high()
        );
        println!(
            "  Dealer        {} {} / {}",
            report.dealer,
            showdown.dealer_low.describe_low(),
            showdown.dealer_high.describe_high()
        );

        if report.bets.fortune > Chips::ZERO {
            println!(
                "  Fortune       {} {:+}",
                report.settlement.fortune.note, report.settlement.fortune.net
            );
        }
    }

    println!(
        "Round {round:>4}: {:<12} net {:+6} bankroll {}",
        showdown.outcome.to_string(),
        report.settlement.net(),
        report.bankroll
    );
}
