//! Simulation statistics tracking.

use std::fmt;

/// Counters gathered over one simulation run.
///
/// A run is single-threaded and owns its counters, so these are plain
/// integers rather than atomics. The value is `Copy` and can be printed,
/// compared, etc.
///
/// # Example
/// ```
/// use pagesim::SimulationStats;
///
/// let mut stats = SimulationStats::new();
/// stats.record_fault(false);
/// stats.record_hit();
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Number of references consumed.
    pub references: u64,

    /// Number of references that found their page resident.
    pub hits: u64,

    /// Number of references that faulted.
    pub faults: u64,

    /// Number of faults that replaced a resident page.
    pub evictions: u64,
}

impl SimulationStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reference that found its page resident.
    #[inline]
    pub fn record_hit(&mut self) {
        self.references += 1;
        self.hits += 1;
    }

    /// Record a faulting reference; `evicted` is true past the fill phase.
    #[inline]
    pub fn record_fault(&mut self, evicted: bool) {
        self.references += 1;
        self.faults += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Calculate fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = SimulationStats::new();
        assert_eq!(stats.references, 0);
        assert_eq!(stats.faults, 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.fault_rate(), 0.0);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = SimulationStats::new();

        stats.record_fault(false);
        stats.record_fault(true);
        stats.record_hit();
        stats.record_hit();

        assert_eq!(stats.references, 4);
        assert_eq!(stats.faults, 2);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.hit_rate(), 0.5);
        assert_eq!(stats.fault_rate(), 0.5);
    }

    #[test]
    fn test_stats_display() {
        let mut stats = SimulationStats::new();
        for _ in 0..3 {
            stats.record_hit();
        }
        stats.record_fault(true);

        let display = format!("{}", stats);

        assert!(display.contains("hits: 3"));
        assert!(display.contains("faults: 1"));
        assert!(display.contains("evictions: 1"));
        assert!(display.contains("75.00%"));
    }
}
