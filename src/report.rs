//! Table rendering for simulation traces.
//!
//! The table has one column per reference and one row per frame:
//!
//! ```text
//!     1    2    3    1
//! --------------------
//!     1    1    1
//!          2    2
//!               3
//!
//! Total Page Faults = 3
//! ```

use std::fmt::Write;

use crate::common::config::CELL_WIDTH;
use crate::common::PageId;
use crate::memory::{SimulationTrace, Slot};

/// How columns for non-faulting references are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Only faulting columns show frame contents.
    #[default]
    Sparse,
    /// Every column shows the resident pages.
    Held,
}

/// Render `trace` as a frame table followed by the fault total.
pub fn render_table(references: &[PageId], trace: &SimulationTrace, style: TableStyle) -> String {
    let mut out = String::new();

    for page in references {
        let _ = write!(out, "{:>width$}", page, width = CELL_WIDTH);
    }
    out.push('\n');
    out.push_str(&"-".repeat(references.len() * CELL_WIDTH));
    out.push('\n');

    let columns: Vec<Vec<Slot>> = (0..references.len())
        .map(|index| match (style, trace.row_at(index)) {
            (_, Some(row)) => row.frames.clone(),
            (TableStyle::Held, None) => trace.frames_at(index),
            (TableStyle::Sparse, None) => vec![Slot::Empty; trace.capacity()],
        })
        .collect();

    for slot in 0..trace.capacity() {
        for column in &columns {
            let _ = write!(out, "{:>width$}", column[slot], width = CELL_WIDTH);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "\nTotal Page Faults = {}", trace.total_faults());
    out
}
