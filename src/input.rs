//! Input parsing.
//!
//! An input file holds a single line:
//!
//! ```text
//! Algorithm,Frames,ref1,ref2,ref3,...
//! ```
//!
//! For example `F,3,1,2,3,4,1,2,5` runs FIFO with three frames.

use std::fs;
use std::path::Path;

use crate::common::{Error, PageId, Result};
use crate::memory::replacer::Algorithm;
use crate::memory::SimulationTrace;

/// A parsed simulation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationInput {
    /// Policy to simulate.
    pub algorithm: Algorithm,

    /// Number of frames.
    pub frames: usize,

    /// Reference string.
    pub references: Vec<PageId>,
}

impl SimulationInput {
    /// Run the requested algorithm.
    pub fn run(&self) -> Result<SimulationTrace> {
        self.algorithm.run(&self.references, self.frames)
    }
}

/// Parse one `Algorithm,Frames,refs...` line.
///
/// Tokens are trimmed and trailing commas ignored. Limits are not checked
/// here; the simulator validates them before running.
///
/// # Errors
/// - `Error::EmptyInput` for a blank line
/// - `Error::UnsupportedAlgorithm` for an unknown selector
/// - `Error::Parse` for a missing or malformed number
pub fn parse_line(line: &str) -> Result<SimulationInput> {
    let line = line.trim().trim_end_matches(',');
    if line.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut tokens = line.split(',').map(str::trim);

    let algorithm = tokens.next().unwrap_or_default().parse::<Algorithm>()?;

    let frames_token = tokens.next().ok_or_else(|| Error::Parse {
        field: "frame count",
        token: String::new(),
    })?;
    let frames = frames_token.parse::<usize>().map_err(|_| Error::Parse {
        field: "frame count",
        token: frames_token.to_string(),
    })?;

    let references = tokens
        .map(|token| {
            token.parse::<PageId>().map_err(|_| Error::Parse {
                field: "page reference",
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<PageId>>>()?;

    Ok(SimulationInput {
        algorithm,
        frames,
        references,
    })
}

/// Read and parse the first line of the file at `path`.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - any error from [`parse_line`]
pub fn read_input(path: impl AsRef<Path>) -> Result<SimulationInput> {
    let contents = fs::read_to_string(path)?;
    let line = contents.lines().next().ok_or(Error::EmptyInput)?;
    parse_line(line)
}
