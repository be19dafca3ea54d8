//! Configuration for the Gaia FOV query client.
//!
//! The external query engine is a subprocess; the only configuration it needs
//! from us is where its executable lives, which catalog file it should open
//! when the query does not name one, and how long we are prepared to wait for
//! it. All of that is collected in [`EngineSettings`], parsed once at startup
//! and treated as immutable for the lifetime of any in-flight query.

pub mod environment;
pub mod error;
pub mod settings;
pub mod values;

pub use environment::{Environment, FixedEnvironment, ProcessEnvironment};
pub use error::ParseConfigurationError;
pub use settings::{parse_configuration, EngineSettings, CONFIGURATION_FILENAME};
pub use values::{CatalogPath, CatalogPathError};
