//! Client for querying Gaia stars in a field of view through the external
//! query engine.
//!
//! One query call runs a fixed pipeline: validate the raw description,
//! marshal it into the engine's parameter list, invoke the engine subprocess,
//! decode its JSON response. Any stage failure terminates the call with a
//! distinct error kind; there are no retries.

pub mod error;
pub mod query;

pub use error::QueryError;
pub use query::Client;

pub use gaiafov_configuration as configuration;
pub use gaiafov_types::{RawQuery, StarRecord};
