//! Configuration constants for the simulator.

/// Maximum number of physical frames a simulation may use.
///
/// Frame counts outside `1..=MAX_FRAMES` are rejected before a run starts.
pub const MAX_FRAMES: usize = 20;

/// Maximum length of a reference string.
pub const MAX_REFERENCES: usize = 1000;

/// Width of one rendered table column, in characters.
pub const CELL_WIDTH: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits() {
        assert_eq!(MAX_FRAMES, 20);
        assert_eq!(MAX_REFERENCES, 1000);
    }

    #[test]
    fn test_rule_width_fits_full_reference_string() {
        // A full-length rule must not overflow on 32-bit targets.
        assert!(MAX_REFERENCES.checked_mul(CELL_WIDTH).is_some());
    }
}
