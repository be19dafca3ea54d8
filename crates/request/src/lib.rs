//! Translate a raw query description into the engine's invocation contract.
//!
//! Two phases, both pure:
//!
//! - [`validation`] — check that the region specification is well-formed and
//!   unambiguous, producing a [`gaiafov_types::FovQuery`].
//! - [`marshal`] — render the validated region plus all present options into
//!   the ordered, deterministic parameter list the engine expects.

pub mod error;
pub mod marshal;
pub mod validation;

pub use error::{MarshalError, ValidationError};
pub use marshal::marshal;
pub use validation::validate;
