//! Error types for the simulator.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the simulator.
///
/// Configuration errors are raised before a run starts, so a run either
/// completes with a full trace or produces no trace at all.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading an input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame count is zero or above the configured maximum.
    #[error("Invalid frame count {frames} (expected 1..={max})")]
    InvalidFrameCount { frames: usize, max: usize },

    /// Reference string is longer than the configured maximum.
    #[error("Reference string has {count} entries (maximum is {max})")]
    TooManyReferences { count: usize, max: usize },

    /// Algorithm selector is neither FIFO nor OPT.
    #[error("Unsupported algorithm '{0}': only F and O are supported")]
    UnsupportedAlgorithm(String),

    /// A token in the input line could not be parsed.
    #[error("Invalid {field}: '{token}'")]
    Parse { field: &'static str, token: String },

    /// Input contained no line to parse.
    #[error("Input is empty")]
    EmptyInput,

    /// Insert was attempted on a frame set with no empty slot.
    ///
    /// This indicates a bug - callers must check capacity first.
    #[error("No free frames available")]
    NoFreeFrames,

    /// A replacement policy could not pick a victim in a full frame set.
    ///
    /// This indicates a bug - the run is aborted instead of guessing a slot.
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),
}
