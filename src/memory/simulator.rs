//! Simulator - drives one replacement policy over a reference string.
//!
//! The [`Simulator`] provides:
//! - Configuration validation before any reference is consumed
//! - Hit/fault detection against a [`FrameSet`]
//! - Fill-phase placement into the lowest empty slot
//! - Pluggable eviction through a [`Replacer`]

use log::{debug, trace};

use crate::common::config::{MAX_FRAMES, MAX_REFERENCES};
use crate::common::{Error, PageId, Result};
use crate::memory::replacer::{Algorithm, Replacer};
use crate::memory::{FrameSet, SimulationTrace, TraceRow};

/// Runs a single simulation.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │                      Simulator                       │
/// │  ┌──────────────┐  ┌────────────────────────────┐    │
/// │  │  references  │  │     frames: FrameSet       │    │
/// │  │  &[PageId]   │─▶│  [Slot0] [Slot1] [Slot2]   │    │
/// │  └──────────────┘  └────────────────────────────┘    │
/// │  ┌──────────────┐  ┌──────────────────┐              │
/// │  │   replacer   │  │      trace       │              │
/// │  │  R: Replacer │  │ SimulationTrace  │              │
/// │  └──────────────┘  └──────────────────┘              │
/// └──────────────────────────────────────────────────────┘
/// ```
///
/// The simulator exclusively owns its frames, replacer, and trace. The
/// reference string is borrowed, so independent runs over the same input
/// share nothing mutable.
///
/// # Usage
/// ```
/// use pagesim::memory::{replacer::{Algorithm, FifoReplacer}, Simulator};
/// use pagesim::common::pages;
///
/// let refs = pages(&[1, 2, 1, 3]);
/// let sim = Simulator::new(&refs, 2, Algorithm::Fifo, FifoReplacer::new())?;
/// let trace = sim.run()?;
/// assert_eq!(trace.total_faults(), 3);
/// # Ok::<(), pagesim::Error>(())
/// ```
pub struct Simulator<'a, R: Replacer> {
    /// The reference string being replayed.
    references: &'a [PageId],

    /// Physical frames.
    frames: FrameSet,

    /// Eviction policy consulted once `frames` is full.
    replacer: R,

    /// Trace built as references are consumed.
    trace: SimulationTrace,
}

impl<'a, R: Replacer> Simulator<'a, R> {
    /// Create a simulator for `references` over `capacity` frames.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCount` if `capacity` is 0 or above `MAX_FRAMES`
    /// - `Error::TooManyReferences` if the string is longer than `MAX_REFERENCES`
    pub fn new(
        references: &'a [PageId],
        capacity: usize,
        algorithm: Algorithm,
        replacer: R,
    ) -> Result<Self> {
        validate(references, capacity)?;

        Ok(Self {
            references,
            frames: FrameSet::new(capacity),
            replacer,
            trace: SimulationTrace::new(algorithm, capacity, references.len()),
        })
    }

    /// Consume the whole reference string and return the trace.
    ///
    /// # Errors
    /// - `Error::InvariantViolation` if the replacer cannot pick a victim
    pub fn run(mut self) -> Result<SimulationTrace> {
        for index in 0..self.references.len() {
            self.step(index)?;
        }

        debug!(
            "{} with {} frames over {} references: {}",
            self.trace.algorithm(),
            self.frames.capacity(),
            self.references.len(),
            self.trace.stats()
        );

        Ok(self.trace)
    }

    /// Handle the reference at `index`.
    fn step(&mut self, index: usize) -> Result<()> {
        let page = self.references[index];

        if self.frames.contains(page) {
            trace!("ref {}: page {} hit", index, page);
            self.trace.record_hit();
            return Ok(());
        }

        let (frame_id, evicted) = if self.frames.is_full() {
            let victim = self
                .replacer
                .select_victim(&self.frames, index, self.references)?;
            let evicted = self.frames.replace(victim, page);
            (victim, Some(evicted))
        } else {
            (self.frames.insert_into_empty(page)?, None)
        };

        match evicted {
            Some(old) => debug!(
                "ref {}: page {} fault, evicted {} from {}",
                index, page, old, frame_id
            ),
            None => debug!("ref {}: page {} fault, loaded into {}", index, page, frame_id),
        }

        self.trace.record_fault(TraceRow {
            index,
            page,
            evicted,
            frames: self.frames.snapshot(),
        });

        Ok(())
    }
}

/// Check run parameters against the configured limits.
pub fn validate(references: &[PageId], capacity: usize) -> Result<()> {
    if capacity == 0 || capacity > MAX_FRAMES {
        return Err(Error::InvalidFrameCount {
            frames: capacity,
            max: MAX_FRAMES,
        });
    }
    if references.len() > MAX_REFERENCES {
        return Err(Error::TooManyReferences {
            count: references.len(),
            max: MAX_REFERENCES,
        });
    }
    Ok(())
}
