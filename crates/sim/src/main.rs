// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Result, anyhow};
use clap::Parser;
use log::error;

use showdown_sim::{Config, Holding, run};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players at the table.
    #[clap(long, short, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,
    /// Sampling error margin used to compute the number of hands.
    #[clap(long, short, default_value_t = 0.01)]
    margin: f64,
    /// Number of hands to simulate, overrides the error margin.
    #[clap(long)]
    samples: Option<u64>,
    /// Seat holding as SEAT=CARDS or SEAT=RANGE, i.e. 0=ahkd or 1=QQ.
    #[clap(long = "hand", value_parser = parse_holding)]
    hands: Vec<(usize, Holding)>,
    /// Folded seat.
    #[clap(long = "fold")]
    folds: Vec<usize>,
    /// Random seed for reproducible runs.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Number of simulation threads.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=256))]
    tasks: u16,
}

fn parse_holding(s: &str) -> Result<(usize, Holding)> {
    let (seat, holding) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected SEAT=HOLDING, found {s}"))?;
    Ok((seat.trim().parse()?, holding.trim().parse()?))
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = Config {
        players: cli.players as usize,
        margin: cli.margin,
        samples: cli.samples,
        holdings: cli.hands,
        folds: cli.folds,
        seed: cli.seed,
        tasks: cli.tasks as usize,
    };

    match run(config) {
        Ok(report) => print!("{report}"),
        Err(e) => error!("{e}"),
    }
}
