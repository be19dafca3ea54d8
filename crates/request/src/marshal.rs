//! Render a validated query into the engine's ordered parameter list.

use gaiafov_types::{Epoch, FovQuery, QueryOptions};

use crate::error::MarshalError;

/// Marshal a validated query plus its options into engine parameters.
///
/// The result is deterministic: region parameters come first (positional
/// vertex tokens in FOV mode, `--ralohi`/`--declohi` in box mode), followed
/// by the optional parameters in a fixed order. A parameter is emitted if and
/// only if the corresponding field is present — the boolean-like flags emit
/// on presence alone, never on truthiness.
///
/// Flag spellings are the canonical ones the engine's argument parser
/// accepts: `--magmin`, `--magmax`, `--magtype`, `--gaia-sqlite3`, and a
/// single `--obsy`.
pub fn marshal(query: &FovQuery, options: &QueryOptions) -> Result<Vec<String>, MarshalError> {
    let mut params = Vec::new();

    match query {
        FovQuery::Fov(entries) => {
            for (index, entry) in entries.iter().enumerate() {
                let components = entry.components();
                if components.is_empty() {
                    return Err(MarshalError::EmptyVertex { index });
                }
                params.push(join_numbers(components, "fov")?);
            }
        }
        FovQuery::RaDecBox { ralohi, declohi } => {
            params.push(format!("--ralohi={}", join_numbers(ralohi, "ralohi")?));
            params.push(format!("--declohi={}", join_numbers(declohi, "declohi")?));
        }
    }

    if let Some(limit) = options.limit {
        params.push(format!("--limit={limit}"));
    }
    if let Some(magmin) = options.magmin {
        params.push(format!("--magmin={}", number(magmin, "magmin")?));
    }
    if let Some(magmax) = options.magmax {
        params.push(format!("--magmax={}", number(magmax, "magmax")?));
    }
    if let Some(magtype) = options.magtype {
        params.push(format!("--magtype={magtype}"));
    }
    if options.j2000.is_some() {
        params.push("--j2000".to_string());
    }
    if options.ppm.is_some() {
        params.push("--ppm".to_string());
    }
    if options.mags.is_some() {
        params.push("--mags".to_string());
    }
    if options.heavy.is_some() {
        params.push("--heavy".to_string());
    }
    if let Some(buffer) = options.buffer {
        params.push(format!("--buffer={}", number(buffer, "buffer")?));
    }
    if let Some(catalog) = &options.gaia_sqlite3 {
        params.push(format!("--gaia-sqlite3={catalog}"));
    }
    if let Some(obsy) = &options.obsy {
        let epoch = match obsy {
            Epoch::Year(year) => number(*year, "obsy")?,
            Epoch::Timestamp(timestamp) => timestamp.clone(),
        };
        params.push(format!("--obsy={epoch}"));
    }
    if let Some(obspos) = &options.obspos {
        params.push(format!("--obspos={}", join_numbers(obspos, "obspos")?));
    }
    if let Some(obsvel) = &options.obsvel {
        params.push(format!("--obsvel={}", join_numbers(obsvel, "obsvel")?));
    }

    tracing::debug!(?params, "marshalled engine parameters");

    Ok(params)
}

/// Render one numeric token. `f64`'s `Display` prints the shortest string
/// that round-trips, so no precision is lost.
fn number(value: f64, parameter: &'static str) -> Result<String, MarshalError> {
    if !value.is_finite() {
        return Err(MarshalError::NonFiniteValue { parameter });
    }
    Ok(value.to_string())
}

fn join_numbers(values: &[f64], parameter: &'static str) -> Result<String, MarshalError> {
    let tokens = values
        .iter()
        .map(|value| number(*value, parameter))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tokens.join(","))
}
