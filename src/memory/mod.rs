//! Page replacement simulation.
//!
//! Each run owns a fixed set of frames and replays a reference string
//! against it, recording every page fault.
//!
//! # Components
//! - [`Simulator`] - Drives one policy over a reference string
//! - [`FrameSet`] / [`Slot`] - The physical frames
//! - [`SimulationTrace`] / [`TraceRow`] - The recorded faults
//! - [`SimulationStats`] - Per-run counters
//! - [`replacer`] - Eviction policy implementations

mod frame_set;
pub mod replacer;
mod simulator;
mod stats;
mod trace;

pub use frame_set::{FrameSet, Slot};
pub use simulator::{validate, Simulator};
pub use stats::SimulationStats;
pub use trace::{SimulationTrace, TraceRow};

use crate::common::{PageId, Result};
use replacer::{Algorithm, FifoReplacer, OptReplacer};

/// Simulate FIFO replacement over `references` with `frames` slots.
///
/// # Errors
/// - `Error::InvalidFrameCount` / `Error::TooManyReferences` for bad input
/// - `Error::InvariantViolation` if eviction finds no candidate
pub fn run_fifo(references: &[PageId], frames: usize) -> Result<SimulationTrace> {
    Simulator::new(references, frames, Algorithm::Fifo, FifoReplacer::new())?.run()
}

/// Simulate optimal replacement over `references` with `frames` slots.
///
/// # Errors
/// - `Error::InvalidFrameCount` / `Error::TooManyReferences` for bad input
/// - `Error::InvariantViolation` if eviction finds no candidate
pub fn run_opt(references: &[PageId], frames: usize) -> Result<SimulationTrace> {
    Simulator::new(references, frames, Algorithm::Opt, OptReplacer::new())?.run()
}
