//! End-to-end tests of the query pipeline against engine doubles.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use gaiafov::configuration::{CatalogPath, EngineSettings};
use gaiafov::{Client, QueryError, RawQuery};
use gaiafov_engine::{EngineOutput, InvocationError, QueryEngine};

const TWO_STARS: &str = r#"[
  { "mean_mag": 7.9053, "ra": 1.1257, "dec": 2.2674, "offset": 116655034 },
  { "mean_mag": 9.9577, "ra": 1.0022, "dec": 2.2425, "offset": 116655047 }
]"#;

/// Records every parameter list it is invoked with and replies with a fixed
/// output. Clones share the call log.
#[derive(Clone)]
struct StubEngine {
    output: EngineOutput,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl StubEngine {
    fn returning(stdout: &str) -> Self {
        StubEngine {
            output: EngineOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
                status: Some(0),
            },
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(status: i32, stderr: &str) -> Self {
        StubEngine {
            output: EngineOutput {
                stdout: "this is not json".to_string(),
                stderr: stderr.to_string(),
                status: Some(status),
            },
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    fn client(&self, settings: EngineSettings) -> Client {
        Client::with_engine(settings, Box::new(self.clone()))
    }
}

#[async_trait]
impl QueryEngine for StubEngine {
    async fn invoke(&self, params: &[String]) -> Result<EngineOutput, InvocationError> {
        self.calls.lock().unwrap().push(params.to_vec());
        Ok(self.output.clone())
    }
}

fn raw(json: &str) -> RawQuery {
    serde_json::from_str(json).unwrap()
}

fn params(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(ToString::to_string).collect()
}

#[tokio::test]
async fn circle_query_with_limit_marshals_and_decodes() {
    let engine = StubEngine::returning(TWO_STARS);
    let client = engine.client(EngineSettings::empty());

    let stars = client
        .query(&raw(r#"{ "fov": [[1, 2], 0.3], "limit": 2 }"#))
        .await
        .unwrap();

    assert_eq!(engine.calls(), vec![params(&["1,2", "0.3", "--limit=2"])]);
    assert_eq!(stars.len(), 2);
    assert_eq!(stars[0].mean_mag, 7.9053);
    assert_eq!(stars[0].offset, 116655034);
    assert_eq!(stars[1].mean_mag, 9.9577);
    assert_eq!(stars[1].offset, 116655047);
}

#[tokio::test]
async fn box_query_with_heavy_emits_no_vertex_tokens() {
    let engine = StubEngine::returning("[]");
    let client = engine.client(EngineSettings::empty());

    let stars = client
        .query(&raw(
            r#"{ "ralohi": [10, 20], "declohi": [-5, 5], "heavy": true }"#,
        ))
        .await
        .unwrap();

    assert!(stars.is_empty());
    assert_eq!(
        engine.calls(),
        vec![params(&["--ralohi=10,20", "--declohi=-5,5", "--heavy"])]
    );
}

#[tokio::test]
async fn configured_catalog_fills_in_when_query_names_none() {
    let engine = StubEngine::returning("[]");
    let settings = EngineSettings {
        gaia_sqlite3: Some(CatalogPath::new("configured.sqlite3").unwrap()),
        ..EngineSettings::empty()
    };
    let client = engine.client(settings);

    client
        .query(&raw(r#"{ "ralohi": [10, 20], "declohi": [-5, 5] }"#))
        .await
        .unwrap();
    client
        .query(&raw(
            r#"{ "ralohi": [10, 20], "declohi": [-5, 5], "gaiasqlite3": "override.db" }"#,
        ))
        .await
        .unwrap();

    let calls = engine.calls();
    assert!(calls[0].contains(&"--gaia-sqlite3=configured.sqlite3".to_string()));
    // The query-level path wins over the configured default.
    assert!(calls[1].contains(&"--gaia-sqlite3=override.db".to_string()));
    assert!(!calls[1].contains(&"--gaia-sqlite3=configured.sqlite3".to_string()));
}

#[tokio::test]
async fn ambiguous_region_fails_before_any_invocation() {
    let engine = StubEngine::returning(TWO_STARS);
    let client = engine.client(EngineSettings::empty());

    let result = client
        .query(&raw(
            r#"{ "fov": [[1, 2], 0.3], "ralohi": [10, 20], "declohi": [-5, 5] }"#,
        ))
        .await;

    assert!(matches!(result, Err(QueryError::Validation(_))));
    assert!(engine.calls().is_empty());
}

#[tokio::test]
async fn non_zero_exit_surfaces_without_decoding() {
    let engine = StubEngine::failing(1, "no such catalog");
    let client = engine.client(EngineSettings::empty());

    let result = client
        .query(&raw(r#"{ "ralohi": [10, 20], "declohi": [-5, 5] }"#))
        .await;

    // The stub's stdout is not valid JSON; reaching the decoder would have
    // produced a DecodeError instead.
    match result {
        Err(QueryError::Invocation(InvocationError::EngineFailure {
            status, stderr, ..
        })) => {
            assert_eq!(status, Some(1));
            assert_eq!(stderr, "no such catalog");
        }
        other => panic!("expected EngineFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn garbage_output_from_a_successful_engine_is_a_decode_error() {
    let engine = StubEngine::returning("not json at all");
    let client = engine.client(EngineSettings::empty());

    let result = client
        .query(&raw(r#"{ "ralohi": [10, 20], "declohi": [-5, 5] }"#))
        .await;

    assert!(matches!(result, Err(QueryError::Decode(_))));
}

#[tokio::test]
async fn metrics_count_queries_and_failures() {
    let engine = StubEngine::returning("[]");
    let mut registry = prometheus::Registry::new();
    let metrics = gaiafov_engine::metrics::Metrics::initialize(&mut registry).unwrap();
    let client = engine.client(EngineSettings::empty()).with_metrics(metrics);

    client
        .query(&raw(r#"{ "ralohi": [10, 20], "declohi": [-5, 5] }"#))
        .await
        .unwrap();
    client.query(&raw("{}")).await.unwrap_err();

    let value = |name: &str| {
        registry
            .gather()
            .iter()
            .find(|family| family.get_name() == name)
            .map(|family| family.get_metric()[0].get_counter().get_value())
    };
    assert_eq!(value("gaiafov_query_total"), Some(2.0));
    assert_eq!(value("gaiafov_query_failure_total"), Some(1.0));
}

/// Full-stack run against a real subprocess standing in for the engine.
#[cfg(unix)]
#[tokio::test]
async fn real_subprocess_round_trip() {
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let script_path = dir.path().join("fake_fov_cmd");
    {
        let mut script = std::fs::File::create(&script_path).unwrap();
        writeln!(script, "#!/bin/sh").unwrap();
        writeln!(script, "cat <<'EOF'").unwrap();
        writeln!(script, "{TWO_STARS}").unwrap();
        writeln!(script, "EOF").unwrap();
    }
    std::fs::set_permissions(&script_path, std::fs::Permissions::from_mode(0o755)).unwrap();

    let settings = EngineSettings {
        engine_program: script_path,
        gaia_sqlite3: None,
        timeout_secs: Some(10),
    };
    let client = Client::new(settings);

    let stars = client
        .query(&raw(r#"{ "fov": [[1, 2], 0.3], "limit": 2 }"#))
        .await
        .unwrap();

    assert_eq!(stars.len(), 2);
    assert_eq!(stars[0].offset, 116655034);
}
