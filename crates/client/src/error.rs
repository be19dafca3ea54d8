//! The top-level error type for one query call.

use thiserror::Error;

use gaiafov_engine::{DecodeError, InvocationError};
use gaiafov_request::{MarshalError, ValidationError};

/// Everything that can terminate a query call, by stage.
///
/// All four kinds are terminal for the current call and are surfaced as-is;
/// none are downgraded to an empty result. Retry policy, if any, belongs to
/// the caller.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid query: {0}")]
    Validation(#[from] ValidationError),
    #[error("could not marshal query: {0}")]
    Marshal(#[from] MarshalError),
    #[error("engine invocation failed: {0}")]
    Invocation(#[from] InvocationError),
    #[error("could not decode engine response: {0}")]
    Decode(#[from] DecodeError),
}
