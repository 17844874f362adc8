//! Eviction policy implementations (replacers).
//!
//! Currently implements:
//! - [`FifoReplacer`] - First-in-first-out over a circular cursor
//! - [`OptReplacer`] - Belady's optimal policy using lookahead
//!
//! A replacer is only consulted once the [`FrameSet`] is full. It picks the
//! slot to overwrite and never touches the frames itself.

mod fifo;
mod opt;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, FrameId, PageId, Result};
use crate::memory::{FrameSet, SimulationTrace};

pub use fifo::FifoReplacer;
pub use opt::{next_use, NextUse, OptReplacer};

/// Chooses which resident page to evict on a fault.
pub trait Replacer {
    /// Select the slot to overwrite for the fault at `index`.
    ///
    /// `frames` is full when this is called. `references` is the whole
    /// reference string, so policies may look ahead past `index`.
    ///
    /// # Errors
    /// - `Error::InvariantViolation` if no slot qualifies
    fn select_victim(
        &mut self,
        frames: &FrameSet,
        index: usize,
        references: &[PageId],
    ) -> Result<FrameId>;
}

/// A resolved algorithm choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-in-first-out.
    Fifo,
    /// Optimal (farthest next use).
    Opt,
}

impl Algorithm {
    /// Short name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Fifo => "FIFO",
            Algorithm::Opt => "OPT",
        }
    }

    /// Run this algorithm over `references` with `frames` slots.
    pub fn run(&self, references: &[PageId], frames: usize) -> Result<SimulationTrace> {
        match self {
            Algorithm::Fifo => crate::memory::run_fifo(references, frames),
            Algorithm::Opt => crate::memory::run_opt(references, frames),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Resolve a selector token by its first character: `F` or `O`.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        match token.chars().next() {
            Some('F') => Ok(Algorithm::Fifo),
            Some('O') => Ok(Algorithm::Opt),
            _ => Err(Error::UnsupportedAlgorithm(token.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_letter() {
        assert_eq!("F".parse::<Algorithm>().unwrap(), Algorithm::Fifo);
        assert_eq!("O".parse::<Algorithm>().unwrap(), Algorithm::Opt);
        assert_eq!(" FIFO ".parse::<Algorithm>().unwrap(), Algorithm::Fifo);
        assert_eq!("OPT".parse::<Algorithm>().unwrap(), Algorithm::Opt);
    }

    #[test]
    fn test_algorithm_rejects_others() {
        for token in ["L", "f", "", "LRU"] {
            match token.parse::<Algorithm>() {
                Err(Error::UnsupportedAlgorithm(t)) => assert_eq!(t, token),
                other => panic!("Expected UnsupportedAlgorithm, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_algorithm_label() {
        assert_eq!(Algorithm::Fifo.to_string(), "FIFO");
        assert_eq!(Algorithm::Opt.to_string(), "OPT");
    }
}
