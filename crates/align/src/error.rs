use thiserror::Error;

/// Errors returned by the aligner.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum AlignError {
    /// The inputs are too large to align within the configured bound.
    #[error("inputs total {len} bytes, exceeding the alignment limit of {limit} bytes")]
    ResourceExhausted {
        /// Combined length of base and target.
        len: usize,
        /// Configured bound.
        limit: usize,
    },
}
