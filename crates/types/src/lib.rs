//! Passive data definitions for Gaia FOV queries.
//!
//! [`request`] holds the query side: the raw description a caller hands us,
//! the validated region type, and the optional modifiers. [`star`] holds the
//! output side: one decoded record per catalog star. Nothing in this crate
//! computes anything; validation and marshalling live in `gaiafov-request`.

pub mod request;
pub mod star;

pub use request::{Epoch, FovEntry, FovQuery, MagType, QueryOptions, RawQuery};
pub use star::StarRecord;
