//! Engine settings: where the external query engine lives and which catalog
//! it opens by default.

use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::error::ParseConfigurationError;
use crate::values::CatalogPath;

pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const DEFAULT_ENGINE_VARIABLE: &str = "GAIAFOV_ENGINE";
pub const DEFAULT_CATALOG_VARIABLE: &str = "GAIAFOV_GAIA_SQLITE3";

/// Program name used when neither the configuration file nor the environment
/// names the engine executable.
const DEFAULT_ENGINE_PROGRAM: &str = "fov_cmd";

/// Settings for invoking the external query engine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EngineSettings {
    /// Path to the query engine executable.
    #[serde(default = "default_engine_program")]
    pub engine_program: PathBuf,
    /// Catalog file passed to the engine when a query does not name one.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gaia_sqlite3: Option<CatalogPath>,
    /// Maximum number of seconds to wait for the engine before killing it.
    /// Absent means wait forever.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_engine_program() -> PathBuf {
    PathBuf::from(DEFAULT_ENGINE_PROGRAM)
}

impl EngineSettings {
    pub fn empty() -> Self {
        EngineSettings {
            engine_program: default_engine_program(),
            gaia_sqlite3: None,
            timeout_secs: None,
        }
    }

    /// Fill unset fields from the environment.
    pub fn with_environment(
        mut self,
        environment: &impl Environment,
    ) -> Result<Self, ParseConfigurationError> {
        if self.engine_program == default_engine_program() {
            if let Some(program) = environment.read(DEFAULT_ENGINE_VARIABLE) {
                self.engine_program = PathBuf::from(program);
            }
        }
        if self.gaia_sqlite3.is_none() {
            if let Some(catalog) = environment.read(DEFAULT_CATALOG_VARIABLE) {
                self.gaia_sqlite3 = Some(CatalogPath::new(catalog)?);
            }
        }
        Ok(self)
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings::empty()
    }
}

/// Read `configuration.json` from a directory and elaborate it against the
/// environment.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
    environment: &impl Environment,
) -> Result<EngineSettings, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let contents = tokio::fs::read_to_string(&configuration_file)
        .await
        .map_err(|error| ParseConfigurationError::Io {
            path: configuration_file.clone(),
            error,
        })?;

    let settings: EngineSettings =
        serde_json::from_str(&contents).map_err(|error| ParseConfigurationError::Parse {
            path: configuration_file.clone(),
            error,
        })?;

    tracing::debug!(
        path = %configuration_file.display(),
        "parsed engine configuration"
    );

    settings.with_environment(environment)
}
