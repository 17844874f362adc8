//! pagesim - a page replacement simulator for FIFO and optimal eviction.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Input (input)  →  Report (report)              │   │
//! │  │   "F,3,1,2,3,..."  →  SimulationInput  →  frame table    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Simulation (memory/)                     │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │         Eviction Policies: FIFO | OPT           │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      Simulator + FrameSet + SimulationTrace + Stats      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`memory`] - Frames, eviction policies, and the simulator
//! - [`input`] - Parsing the `Algorithm,Frames,refs...` input line
//! - [`report`] - Rendering a trace as a frame table
//!
//! # Quick Start
//! ```
//! use pagesim::{run_fifo, run_opt, pages};
//!
//! let refs = pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
//!
//! assert_eq!(run_fifo(&refs, 3).unwrap().total_faults(), 9);
//! assert_eq!(run_opt(&refs, 3).unwrap().total_faults(), 7);
//! ```

pub mod common;
pub mod input;
pub mod memory;
pub mod report;

// Re-export commonly used items at crate root for convenience
pub use common::config::{MAX_FRAMES, MAX_REFERENCES};
pub use common::{pages, Error, FrameId, PageId, Result};

pub use input::{parse_line, read_input, SimulationInput};
pub use memory::replacer::Algorithm;
pub use memory::{
    run_fifo, run_opt, FrameSet, SimulationStats, SimulationTrace, Slot, TraceRow,
};
pub use report::{render_table, TableStyle};
