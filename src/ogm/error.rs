use thiserror::Error;

/// Errors that can occur when generating an OGM reference.
///
/// Validation never errors — [`validate`](super::validate) returns `false`
/// for malformed input. Only the generator rejects caller input, so that a
/// typo in a prefix or an exhausted sequence can never silently produce a
/// wrong-but-well-formed reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OgmError {
    /// Prefix was not exactly 3 ASCII decimal digits.
    #[error("invalid OGM prefix '{0}': expected exactly 3 decimal digits")]
    InvalidPrefix(String),

    /// Sequence does not fit in the 7-digit slot of the 10-digit base.
    #[error("OGM sequence {0} out of range: must be below 10000000")]
    SequenceOutOfRange(u64),
}
