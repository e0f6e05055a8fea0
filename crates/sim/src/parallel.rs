// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hands simulation.
use anyhow::{Result, anyhow, bail};
use log::debug;
use rand::{SeedableRng, rngs::StdRng};
use std::thread;

use crate::table::Table;

/// Per seat simulation results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    /// The number of simulated hands.
    pub hands: u64,
    /// Hands won by a single seat, indexed by seat.
    pub wins: Vec<u64>,
    /// Hands split with other seats, indexed by seat.
    pub ties: Vec<u64>,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new(seats: usize) -> Self {
        Self {
            hands: 0,
            wins: vec![0; seats],
            ties: vec![0; seats],
        }
    }

    /// Records the winners of a hand.
    pub fn record(&mut self, winners: &[usize]) {
        self.hands += 1;

        match winners {
            [] => {}
            [seat] => self.wins[*seat] += 1,
            seats => seats.iter().for_each(|s| self.ties[*s] += 1),
        }
    }

    /// Adds another tally to this tally.
    pub fn merge(&mut self, other: &Tally) {
        self.hands += other.hands;
        self.wins
            .iter_mut()
            .zip(&other.wins)
            .for_each(|(w, o)| *w += o);
        self.ties
            .iter_mut()
            .zip(&other.ties)
            .for_each(|(t, o)| *t += o);
    }

    /// The fraction of hands a seat won outright.
    pub fn win_rate(&self, seat: usize) -> f64 {
        if self.hands == 0 {
            0.0
        } else {
            self.wins[seat] as f64 / self.hands as f64
        }
    }
}

/// Simulates a number of hands splitting the work across `num_tasks` threads.
///
/// Hand `n` is dealt with randomness seeded from `seed + n`, so the tally only
/// depends on the seed and the number of samples, not on the number of tasks.
pub fn par_simulate(table: &Table, num_tasks: usize, samples: u64, seed: u64) -> Result<Tally> {
    if num_tasks == 0 {
        bail!("The number of tasks must be greater than zero");
    }

    let tasks = num_tasks as u64;
    let per_task = samples / tasks;
    let extra = samples % tasks;

    thread::scope(|s| {
        let handles = (0..tasks)
            .map(|task_id| {
                let start = task_id * per_task + task_id.min(extra);
                let count = per_task + u64::from(task_id < extra);

                s.spawn(move || -> Result<Tally> {
                    let mut tally = Tally::new(table.seats());
                    for n in start..start + count {
                        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(n));
                        let deal = table.simulate(&mut rng)?;
                        tally.record(&deal.winners);
                    }

                    debug!("Task {task_id} simulated {count} hands");
                    Ok(tally)
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .try_fold(Tally::new(table.seats()), |mut total, handle| {
                let tally = handle
                    .join()
                    .map_err(|_| anyhow!("Simulation task panicked"))??;
                total.merge(&tally);
                Ok(total)
            })
    })
}
