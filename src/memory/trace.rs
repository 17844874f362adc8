//! Simulation trace - the record of fault events.
//!
//! Only faulting references produce a [`TraceRow`]. The frame contents after
//! a hit are the same as after the previous fault, so they are reconstructed
//! on demand by [`SimulationTrace::frames_at`].

use crate::common::PageId;
use crate::memory::replacer::Algorithm;
use crate::memory::{SimulationStats, Slot};

/// One faulting reference and the frames right after it was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRow {
    /// Position in the reference string.
    pub index: usize,

    /// The page that faulted.
    pub page: PageId,

    /// Page that lost its slot, or `None` while frames were still filling.
    pub evicted: Option<PageId>,

    /// Slot contents after the fault, in frame order.
    pub frames: Vec<Slot>,
}

/// Complete result of one simulation run.
///
/// Built left to right by the [`Simulator`](crate::memory::Simulator) and
/// immutable once returned.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationTrace {
    algorithm: Algorithm,
    capacity: usize,
    reference_count: usize,
    rows: Vec<TraceRow>,
    stats: SimulationStats,
}

impl SimulationTrace {
    pub(crate) fn new(algorithm: Algorithm, capacity: usize, reference_count: usize) -> Self {
        Self {
            algorithm,
            capacity,
            reference_count,
            rows: Vec::new(),
            stats: SimulationStats::new(),
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.stats.record_hit();
    }

    pub(crate) fn record_fault(&mut self, row: TraceRow) {
        debug_assert!(self.rows.last().map_or(true, |last| last.index < row.index));
        self.stats.record_fault(row.evicted.is_some());
        self.rows.push(row);
    }

    /// Algorithm that produced this trace.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of frames simulated.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Length of the reference string consumed.
    pub fn reference_count(&self) -> usize {
        self.reference_count
    }

    /// Fault rows in reference order.
    pub fn rows(&self) -> &[TraceRow] {
        &self.rows
    }

    /// Total number of page faults.
    pub fn total_faults(&self) -> usize {
        self.rows.len()
    }

    /// Counters for the run.
    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    /// Row for the reference at `index`, if it faulted.
    pub fn row_at(&self, index: usize) -> Option<&TraceRow> {
        self.rows
            .binary_search_by_key(&index, |row| row.index)
            .ok()
            .map(|pos| &self.rows[pos])
    }

    /// Frame contents resident after the reference at `index`.
    ///
    /// Before the first fault every slot is empty.
    pub fn frames_at(&self, index: usize) -> Vec<Slot> {
        let pos = self.rows.partition_point(|row| row.index <= index);
        match pos.checked_sub(1) {
            Some(last) => self.rows[last].frames.clone(),
            None => vec![Slot::Empty; self.capacity],
        }
    }

    /// Slot contents at the end of the run.
    pub fn final_frames(&self) -> Vec<Slot> {
        self.rows
            .last()
            .map_or_else(|| vec![Slot::Empty; self.capacity], |row| row.frames.clone())
    }
}
