//! Metrics setup and update for the query client.

use prometheus::core::{AtomicU64, GenericCounter};

/// Counters covering the query pipeline.
#[derive(Debug, Clone)]
pub struct Metrics {
    query_total: GenericCounter<AtomicU64>,
    query_failure_total: GenericCounter<AtomicU64>,
}

impl Metrics {
    /// Create the counters and register them with the provided registry.
    pub fn initialize(
        metrics_registry: &mut prometheus::Registry,
    ) -> Result<Self, prometheus::Error> {
        let query_total = add_int_counter_metric(
            metrics_registry,
            "gaiafov_query_total",
            "Total queries issued to the engine.",
        )?;

        let query_failure_total = add_int_counter_metric(
            metrics_registry,
            "gaiafov_query_failure_total",
            "Total queries that failed at any stage.",
        )?;

        Ok(Metrics {
            query_total,
            query_failure_total,
        })
    }

    pub fn record_query(&self) {
        self.query_total.inc();
    }

    pub fn record_failure(&self) {
        self.query_failure_total.inc();
    }
}

/// Create a new int counter metric and register it with the provided
/// Prometheus registry.
fn add_int_counter_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<GenericCounter<AtomicU64>, prometheus::Error> {
    let int_counter =
        prometheus::IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}
