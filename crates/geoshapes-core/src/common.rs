//! Simple aggregate statistics for one transform run.
//!
//! Returned by [`crate::transform::transform_with_stats`]. The CLI logs
//! them; they never appear in the emitted document.
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransformStats {
    /// Entries in the source `features` array.
    pub source_features: usize,
    /// Distinct codes in the index after last-write-wins deduplication.
    pub indexed_codes: usize,
    pub requested: usize,
    pub matched: usize,
}

impl TransformStats {
    /// Requested codes that had no source feature.
    pub fn missing(&self) -> usize {
        self.requested.saturating_sub(self.matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_counts_unmatched_codes() {
        let stats = TransformStats {
            requested: 234,
            matched: 170,
            ..TransformStats::default()
        };
        assert_eq!(stats.missing(), 64);
    }

    #[test]
    fn missing_never_underflows() {
        let stats = TransformStats {
            requested: 1,
            matched: 3,
            ..TransformStats::default()
        };
        assert_eq!(stats.missing(), 0);
    }
}
