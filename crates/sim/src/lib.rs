// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker table simulator.
//!
//! Deals random Texas Hold'em hands at a table where some seats may have fixed
//! hole cards or starting hand ranges, and counts how often each seat wins at
//! showdown. The number of hands to simulate is derived from the number of
//! possible deals using Slovin's formula.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use log::info;
use rand::Rng;
use std::fmt;

pub mod parallel;
pub use parallel::{Tally, par_simulate};

pub mod stats;
pub use stats::{nck, possible_hand_count, slovin};

pub mod table;
pub use table::{Deal, Holding, Table};

/// The simulation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The number of players at the table.
    pub players: usize,
    /// The sampling error margin.
    pub margin: f64,
    /// The number of hands to simulate, computed from the margin if not set.
    pub samples: Option<u64>,
    /// Seats holdings.
    pub holdings: Vec<(usize, Holding)>,
    /// Folded seats.
    pub folds: Vec<usize>,
    /// The random seed, random if not set.
    pub seed: Option<u64>,
    /// The number of simulation threads.
    pub tasks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 6,
            margin: 0.01,
            samples: None,
            holdings: Vec::new(),
            folds: Vec::new(),
            seed: None,
            tasks: 1,
        }
    }
}

/// The simulation results.
#[derive(Debug, Clone)]
pub struct Report {
    /// The number of possible deals.
    pub possible_hands: u64,
    /// The number of simulated hands.
    pub samples: u64,
    /// The seed used for the simulation.
    pub seed: u64,
    /// Seats holdings.
    pub holdings: Vec<(usize, Holding)>,
    /// Folded seats.
    pub folds: Vec<usize>,
    /// Per seat results.
    pub tally: Tally,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Possible hands: {}", self.possible_hands)?;
        writeln!(f, "Sample size:    {}", self.samples)?;
        writeln!(f, "Seed:           {}", self.seed)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:>4}  {:<8}  {:>10}  {:>10}  {:>8}",
            "Seat", "Holding", "Wins", "Ties", "Win %"
        )?;

        for seat in 0..self.tally.wins.len() {
            let holding = if self.folds.contains(&seat) {
                "folded".to_string()
            } else {
                self.holdings
                    .iter()
                    .find(|(s, _)| *s == seat)
                    .map(|(_, h)| h.to_string())
                    .unwrap_or_else(|| "random".to_string())
            };

            writeln!(
                f,
                "{:>4}  {:<8}  {:>10}  {:>10}  {:>7.2}%",
                seat,
                holding,
                self.tally.wins[seat],
                self.tally.ties[seat],
                self.tally.win_rate(seat) * 100.0
            )?;
        }

        Ok(())
    }
}

/// Runs a simulation.
pub fn run(config: Config) -> Result<Report> {
    if !(config.margin > 0.0 && config.margin < 1.0) {
        bail!("Invalid error margin {}, must be in (0, 1)", config.margin);
    }

    let table = Table::new(
        config.players,
        config.holdings.iter().copied(),
        config.folds.iter().copied(),
    )?;

    let possible_hands = possible_hand_count(config.players)?;
    let samples = config
        .samples
        .unwrap_or_else(|| slovin(possible_hands, config.margin));
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());

    info!(
        "Simulating {samples} hands for {} players on {} tasks with seed {seed}",
        config.players, config.tasks
    );

    let tally = par_simulate(&table, config.tasks, samples, seed)?;
    info!("Simulated {} hands", tally.hands);

    Ok(Report {
        possible_hands,
        samples,
        seed,
        holdings: config.holdings,
        folds: config.folds,
        tally,
    })
}
