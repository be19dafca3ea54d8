//! Errors for query validation and parameter marshalling.

use thiserror::Error;

/// The raw query's region specification is malformed or ambiguous.
///
/// All of these are detected before any engine invocation and are terminal
/// for the call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("query supplies both 'fov' and an RA/Dec box; exactly one region is required")]
    AmbiguousRegion,
    #[error("query supplies neither 'fov' nor an RA/Dec box; exactly one region is required")]
    MissingRegion,
    #[error("RA/Dec box mode requires both ranges; '{missing}' is missing")]
    IncompleteBox { missing: &'static str },
    #[error("'fov' must have at least two entries and start with an [RA, Dec] vertex")]
    MalformedFov,
    #[error("'{field}' must have exactly 2 elements, got {len}")]
    WrongRangeLength { field: &'static str, len: usize },
    #[error("Dec range must be ordered low to high, got [{declo}, {dechi}]")]
    DecRangeOrder { declo: f64, dechi: f64 },
}

/// A present value cannot be rendered into the invocation contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MarshalError {
    #[error("'{parameter}' is not a finite number and cannot be rendered")]
    NonFiniteValue { parameter: &'static str },
    #[error("fov entry {index} has no components")]
    EmptyVertex { index: usize },
}
