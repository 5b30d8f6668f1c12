//! Error types for test selection.
//!
//! Both variants are contract violations in the data handed over by the
//! registration phase, not recoverable runtime conditions: the runner is
//! expected to surface them as programming errors. Every operation fails
//! atomically; no partial result accompanies an error.

use thiserror::Error;

/// Error type for filter construction and filter passes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The inclusion tag set was present but empty.
    ///
    /// An inclusion gate with no tags would select nothing; callers that want
    /// "no gate" pass `None` instead.
    #[error("tags to include, when present, must contain at least one tag")]
    EmptyIncludeSet,

    /// A test name in the tags map was associated with an empty tag set.
    ///
    /// Names without tags must be absent from the map entirely; an explicit
    /// empty entry indicates malformed registration data.
    #[error("{test_name} was associated with an empty set in the map passed as tags")]
    EmptyTagSet {
        /// The offending test name.
        test_name: String,
    },
}

/// Result alias for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;
