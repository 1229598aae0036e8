use std::collections::VecDeque;

use crate::constants::*;

/// Snapshot of the four simulated usage gauges, in whole percent.
///
/// Replaced wholesale on every simulator tick; never updated per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub cpu: u8,
    pub ram: u8,
    pub disk: u8,
    pub network: u8,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            cpu: INITIAL_CPU_PCT,
            ram: INITIAL_RAM_PCT,
            disk: INITIAL_DISK_PCT,
            network: INITIAL_NETWORK_PCT,
        }
    }
}

impl Stats {
    pub fn get(&self, gauge: Gauge) -> u8 {
        match gauge {
            Gauge::Cpu => self.cpu,
            Gauge::Ram => self.ram,
            Gauge::Disk => self.disk,
            Gauge::Network => self.network,
        }
    }
}

/// The four gauges, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gauge {
    Cpu,
    Ram,
    Disk,
    Network,
}

impl Gauge {
    pub fn all() -> &'static [Gauge] {
        &[Gauge::Cpu, Gauge::Ram, Gauge::Disk, Gauge::Network]
    }

    /// Label used by the `status` command.
    pub fn status_label(&self) -> &'static str {
        match self {
            Gauge::Cpu => "CPU Usage:",
            Gauge::Ram => "RAM Usage:",
            Gauge::Disk => "Disk Usage:",
            Gauge::Network => "Network Load:",
        }
    }

    /// Localized card title.
    pub fn card_label(&self) -> String {
        match self {
            Gauge::Cpu => t!("gauge.cpu").to_string(),
            Gauge::Ram => t!("gauge.ram").to_string(),
            Gauge::Disk => t!("gauge.disk").to_string(),
            Gauge::Network => t!("gauge.net").to_string(),
        }
    }
}

/// Text bar for `status`: one block per `STATUS_BAR_STEP` percent, rounded down.
pub fn usage_bar(value: u8) -> String {
    "█".repeat((value / STATUS_BAR_STEP) as usize)
}

/// Rolling window of recent samples feeding the gauge trend strips.
#[derive(Debug)]
pub struct StatsTrend {
    samples: VecDeque<Stats>,
    capacity: usize,
}

impl StatsTrend {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, stats: Stats) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(stats);
    }

    /// Oldest-first series for one gauge.
    pub fn series(&self, gauge: Gauge) -> Vec<u8> {
        self.samples.iter().map(|s| s.get(gauge)).collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── usage_bar ─────────────────────────────────────────────────

    #[test]
    fn usage_bar_rounds_down() {
        assert_eq!(usage_bar(0), "");
        assert_eq!(usage_bar(4), "");
        assert_eq!(usage_bar(5), "█");
        assert_eq!(usage_bar(49), "█████████");
        assert_eq!(usage_bar(100).chars().count(), 20);
    }

    // ── Stats / Gauge ─────────────────────────────────────────────

    #[test]
    fn default_stats_match_initial_values() {
        let s = Stats::default();
        assert_eq!((s.cpu, s.ram, s.disk, s.network), (45, 62, 78, 23));
    }

    #[test]
    fn get_reads_each_field() {
        let s = Stats { cpu: 1, ram: 2, disk: 3, network: 4 };
        let values: Vec<u8> = Gauge::all().iter().map(|g| s.get(*g)).collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn status_labels_fit_padding() {
        for g in Gauge::all() {
            assert!(g.status_label().len() < STATUS_LABEL_WIDTH);
        }
    }

    #[test]
    fn card_labels_english() {
        let _locale = crate::utils::lock_locale("en");
        let labels: Vec<String> = Gauge::all().iter().map(|g| g.card_label()).collect();
        assert_eq!(labels, vec!["CPU", "RAM", "DISK", "NET"]);
    }

    // ── StatsTrend ────────────────────────────────────────────────

    #[test]
    fn trend_drops_oldest_at_capacity() {
        let mut trend = StatsTrend::new(3);
        for cpu in 10..15 {
            trend.push(Stats { cpu, ..Stats::default() });
        }
        assert_eq!(trend.len(), 3);
        assert_eq!(trend.series(Gauge::Cpu), vec![12, 13, 14]);
    }

    #[test]
    fn trend_zero_capacity_stays_empty() {
        let mut trend = StatsTrend::new(0);
        trend.push(Stats::default());
        assert_eq!(trend.len(), 0);
    }
}
