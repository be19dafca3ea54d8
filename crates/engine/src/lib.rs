//! Invocation of the external query engine and decoding of its response.
//!
//! The engine is an opaque collaborator: it owns all FOV geometry and
//! astrometric correction logic, and we only know its command-line contract.
//! [`invoke`] runs it as a subprocess behind the narrow [`QueryEngine`]
//! trait; [`decode`] parses the JSON it writes to stdout. [`metrics`] counts
//! queries and failures for a caller-supplied Prometheus registry.

pub mod decode;
pub mod error;
pub mod invoke;
pub mod metrics;

pub use decode::decode;
pub use error::{DecodeError, InvocationError};
pub use invoke::{EngineOutput, QueryEngine, SubprocessEngine};
