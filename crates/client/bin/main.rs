//! Command-line front end: read a JSON query description, run it through the
//! engine, print the decoded records as JSON.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use gaiafov::configuration::{
    parse_configuration, CatalogPath, EngineSettings, ProcessEnvironment,
};
use gaiafov::{Client, RawQuery};

#[derive(Parser)]
#[command(name = "gaiafov", about = "Query Gaia stars in a field of view")]
struct Cli {
    /// JSON query description; '-' or absent reads stdin.
    query_file: Option<PathBuf>,

    /// Directory holding configuration.json.
    #[arg(long)]
    configuration_dir: Option<PathBuf>,

    /// Path to the query engine executable.
    #[arg(long)]
    engine: Option<PathBuf>,

    /// Default catalog file, when the query does not name one.
    #[arg(long)]
    gaia_sqlite3: Option<CatalogPath>,

    /// Kill the engine after this many seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut settings = match &cli.configuration_dir {
        Some(dir) => parse_configuration(dir, &ProcessEnvironment).await?,
        None => EngineSettings::empty().with_environment(&ProcessEnvironment)?,
    };
    if let Some(engine) = cli.engine {
        settings.engine_program = engine;
    }
    if let Some(catalog) = cli.gaia_sqlite3 {
        settings.gaia_sqlite3 = Some(catalog);
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        settings.timeout_secs = Some(timeout_secs);
    }

    let raw: RawQuery = match &cli.query_file {
        Some(path) if path != &PathBuf::from("-") => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("could not read query file '{}'", path.display()))?;
            serde_json::from_str(&contents).context("could not parse query description")?
        }
        _ => {
            let mut contents = String::new();
            std::io::stdin()
                .read_to_string(&mut contents)
                .context("could not read query from stdin")?;
            serde_json::from_str(&contents).context("could not parse query description")?
        }
    };

    let client = Client::new(settings);
    let stars = client.query(&raw).await?;

    println!("{}", serde_json::to_string_pretty(&stars)?);
    Ok(())
}
