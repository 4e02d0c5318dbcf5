//! Generator trait.
//!
//! RULE: Every descriptive dataset generator implements DatasetGenerator.
//! The dashboard calls generate() on each registered generator in
//! registration order, all against the same request-owned stream.
//! Registration order is fixed and documented in dashboard.rs.

use crate::{dataset::Dataset, error::SynthResult, rng::SeededStream};

/// The contract every descriptive generator must fulfill.
pub trait DatasetGenerator: Send {
    /// Unique stable panel name for this generator.
    fn name(&self) -> &'static str;

    /// Produce one dataset, consuming draws from `stream`.
    ///
    /// Implementations must be pure apart from the stream: the same
    /// stream state and configuration always yield the same dataset.
    fn generate(&self, stream: &mut SeededStream) -> SynthResult<Dataset>;
}
