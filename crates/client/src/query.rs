//! The query pipeline: validate, marshal, invoke, decode.

use tracing::{info_span, Instrument};

use gaiafov_configuration::EngineSettings;
use gaiafov_engine::metrics::Metrics;
use gaiafov_engine::{decode, InvocationError, QueryEngine, SubprocessEngine};
use gaiafov_request::{marshal, validate};
use gaiafov_types::{QueryOptions, RawQuery, StarRecord};

use crate::error::QueryError;

/// A handle for issuing FOV queries against one engine configuration.
///
/// Settings are read once at construction and never change while a call is
/// in flight. Calls are independent; a `Client` may be shared and queried
/// concurrently, each call running its own engine subprocess.
pub struct Client {
    engine: Box<dyn QueryEngine>,
    settings: EngineSettings,
    metrics: Option<Metrics>,
}

impl Client {
    /// A client that runs the engine executable named by `settings`.
    pub fn new(settings: EngineSettings) -> Self {
        let engine = Box::new(SubprocessEngine::from(&settings));
        Client::with_engine(settings, engine)
    }

    /// A client with a caller-supplied engine, e.g. a test double.
    pub fn with_engine(settings: EngineSettings, engine: Box<dyn QueryEngine>) -> Self {
        Client {
            engine,
            settings,
            metrics: None,
        }
    }

    /// Count queries and failures on the given metrics handle.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Run one query call to completion.
    ///
    /// The stages run strictly in order and any failure is terminal: a
    /// validation or marshalling error never reaches the engine, and a
    /// non-zero engine exit surfaces as [`InvocationError::EngineFailure`]
    /// without the decoder ever running.
    pub async fn query(&self, raw: &RawQuery) -> Result<Vec<StarRecord>, QueryError> {
        let result = self
            .run(raw)
            .instrument(info_span!("Run FOV query"))
            .await;

        if let Some(metrics) = &self.metrics {
            metrics.record_query();
            if result.is_err() {
                metrics.record_failure();
            }
        }

        result
    }

    async fn run(&self, raw: &RawQuery) -> Result<Vec<StarRecord>, QueryError> {
        let fov_query = validate(raw)?;
        let options = self.effective_options(&raw.options);
        let params = marshal(&fov_query, &options)?;

        let output = self.engine.invoke(&params).await?;
        if !output.success() {
            return Err(QueryError::Invocation(InvocationError::EngineFailure {
                status: output.status,
                stderr: output.stderr,
                stdout: output.stdout,
            }));
        }

        Ok(decode(&output.stdout)?)
    }

    /// The query's options, with the configured default catalog filled in
    /// when the query does not name one. A query-level path always wins.
    fn effective_options(&self, options: &QueryOptions) -> QueryOptions {
        let mut options = options.clone();
        if options.gaia_sqlite3.is_none() {
            options.gaia_sqlite3 = self.settings.gaia_sqlite3.clone();
        }
        options
    }
}
