// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solve-run statistics.
//!
//! Counters are accumulated privately per trial and merged at the fan-in
//! point, so the parallel trials never share mutable state.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// Counters tracked across a solve run.
#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counter {
    /// Partition trials completed.
    TrialsRun,
    /// Groups created across all trials (including discarded ones).
    GroupsCreated,
    /// Dead ends hit by the material assigner's backtracking search.
    ColoringBacktracks,
}

/// Fixed-size counter array indexed by [`Counter`].
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    counts: [u64; Counter::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    pub fn increment(&mut self, counter: Counter) {
        self.add(counter, 1);
    }

    pub fn add(&mut self, counter: Counter, amount: u64) {
        self.counts[counter as usize] += amount;
    }

    pub fn get(&self, counter: Counter) -> u64 {
        self.counts[counter as usize]
    }

    /// Fold another trial's counters into this one.
    pub fn merge(&mut self, other: &Statistics) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_get() {
        let mut stats = Statistics::new();
        assert_eq!(stats.get(Counter::TrialsRun), 0);
        stats.increment(Counter::TrialsRun);
        stats.add(Counter::GroupsCreated, 7);
        assert_eq!(stats.get(Counter::TrialsRun), 1);
        assert_eq!(stats.get(Counter::GroupsCreated), 7);
        assert_eq!(stats.get(Counter::ColoringBacktracks), 0);
    }

    #[test]
    fn test_merge_sums_counters() {
        let mut a = Statistics::new();
        let mut b = Statistics::new();
        a.increment(Counter::TrialsRun);
        b.increment(Counter::TrialsRun);
        b.add(Counter::ColoringBacktracks, 3);
        a.merge(&b);
        assert_eq!(a.get(Counter::TrialsRun), 2);
        assert_eq!(a.get(Counter::ColoringBacktracks), 3);
    }
}
