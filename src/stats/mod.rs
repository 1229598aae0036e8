//! Decorative usage simulator.
//!
//! Produces a fresh [`Stats`] tuple on every tick, each field drawn
//! independently and uniformly from its own half-open range. The random
//! source is a seedable [`SmallRng`] so a fixed seed replays the same
//! sequence. [`spawn`] runs the simulator on a tokio interval and ships
//! each sample over a channel; the task ends once the receiver is gone.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::constants::*;
use crate::models::Stats;

/// Half-open percentage range `[lo, hi)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatRange {
    pub lo: u8,
    pub hi: u8,
}

impl StatRange {
    pub const fn new(lo: u8, hi: u8) -> Self {
        Self { lo, hi }
    }

    /// Non-empty and never able to yield more than 100.
    pub fn is_valid(&self) -> bool {
        self.lo < self.hi && self.hi <= MAX_RANGE_UPPER
    }

    #[cfg(test)]
    pub fn contains(&self, value: u8) -> bool {
        value >= self.lo && value < self.hi
    }
}

impl From<(u8, u8)> for StatRange {
    fn from((lo, hi): (u8, u8)) -> Self {
        Self::new(lo, hi)
    }
}

/// Per-gauge ranges used by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatRanges {
    pub cpu: StatRange,
    pub ram: StatRange,
    pub disk: StatRange,
    pub network: StatRange,
}

impl Default for StatRanges {
    fn default() -> Self {
        Self {
            cpu: DEFAULT_CPU_RANGE.into(),
            ram: DEFAULT_RAM_RANGE.into(),
            disk: DEFAULT_DISK_RANGE.into(),
            network: DEFAULT_NETWORK_RANGE.into(),
        }
    }
}

pub struct StatsSimulator {
    rng: SmallRng,
    ranges: StatRanges,
}

impl StatsSimulator {
    /// Seeded simulators are reproducible; `None` seeds from the OS.
    pub fn new(ranges: StatRanges, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self { rng, ranges }
    }

    pub fn ranges(&self) -> &StatRanges {
        &self.ranges
    }

    /// Draw the next sample, replacing all four values at once.
    pub fn tick(&mut self) -> Stats {
        let ranges = self.ranges;
        Stats {
            cpu: self.sample(ranges.cpu),
            ram: self.sample(ranges.ram),
            disk: self.sample(ranges.disk),
            network: self.sample(ranges.network),
        }
    }

    fn sample(&mut self, range: StatRange) -> u8 {
        // Config validation rejects empty ranges; this keeps `tick` total anyway.
        if range.lo >= range.hi {
            return range.lo;
        }
        self.rng.random_range(range.lo..range.hi)
    }
}

/// Run `simulator` every `period`, sending each sample on `tx`.
///
/// The first sample arrives one full period after spawning so the initial
/// values stay visible until then.
pub fn spawn(
    mut simulator: StatsSimulator,
    period: Duration,
    tx: mpsc::UnboundedSender<Stats>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await;
        loop {
            interval.tick().await;
            let stats = simulator.tick();
            log::trace!(
                "stats tick cpu={} ram={} disk={} net={}",
                stats.cpu,
                stats.ram,
                stats.disk,
                stats.network
            );
            if tx.send(stats).is_err() {
                log::debug!("stats receiver dropped, stopping simulator");
                break;
            }
        }
    })
}
