//! Query-side data definitions.
//!
//! A [`RawQuery`] is what arrives from the caller, usually deserialized from
//! JSON. It is deliberately loose: the region may be given either as `fov`
//! vertices or as an RA/Dec box, and every modifier is optional. The
//! validator in `gaiafov-request` turns the loose shape into a [`FovQuery`],
//! which has exactly two constructors and cannot represent an ambiguous
//! region.
//!
//! Every optional field has presence semantics: an absent field means "do not
//! emit the corresponding engine parameter at all", never "emit a default".
//! That includes the boolean-like flags — `Some(false)` is present and still
//! emits the flag, which is why they are `Option<bool>` rather than `bool`.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use gaiafov_configuration::CatalogPath;

/// A query description as supplied by the caller, before validation.
///
/// Exactly one of `fov` / (`ralohi` and `declohi`) must be given; the
/// validator rejects everything else.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize, JsonSchema)]
pub struct RawQuery {
    /// FOV vertices: `[[ra, dec], radius]` for a cone, `[[ra, dec], [ra, dec]]`
    /// for a two-corner box, three or more pairs for a spherical polygon.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fov: Option<Vec<FovEntry>>,
    /// RA range of an RA/Dec box, degrees. `[lo, hi]`; `lo >= hi` wraps
    /// through the prime meridian.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ralohi: Option<Vec<f64>>,
    /// Dec range of an RA/Dec box, degrees. `[lo, hi]` with `lo < hi`.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declohi: Option<Vec<f64>>,
    #[serde(flatten)]
    pub options: QueryOptions,
}

/// One positional entry of an `fov` specification.
///
/// Entries are positional, not tagged: a bare scalar following a coordinate
/// pair is that vertex's radius (making the FOV a cone). The marshaller
/// unrolls each entry into comma-joined numeric tokens and leaves the
/// geometric interpretation to the engine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum FovEntry {
    Scalar(f64),
    Vertex(Vec<f64>),
}

impl FovEntry {
    /// The scalar components of this entry, in order.
    pub fn components(&self) -> &[f64] {
        match self {
            FovEntry::Scalar(value) => std::slice::from_ref(value),
            FovEntry::Vertex(components) => components,
        }
    }
}

/// A validated region of sky. Produced only by the validator.
#[derive(Debug, Clone, PartialEq)]
pub enum FovQuery {
    /// FOV mode: cone, two-corner box or polygon, encoded positionally.
    Fov(Vec<FovEntry>),
    /// Dedicated rectangle mode with independent RA and Dec ranges.
    RaDecBox { ralohi: [f64; 2], declohi: [f64; 2] },
}

/// Which photometric band drives magnitude filtering and sorting.
///
/// The engine defaults to `g` when the parameter is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MagType {
    G,
    Bp,
    Rp,
}

impl MagType {
    pub fn as_str(self) -> &'static str {
        match self {
            MagType::G => "g",
            MagType::Bp => "bp",
            MagType::Rp => "rp",
        }
    }
}

impl fmt::Display for MagType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observer epoch: a fractional year, or an ISO-like timestamp the engine
/// parses itself.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Epoch {
    Year(f64),
    Timestamp(String),
}

/// Orthogonal, independently optional query modifiers.
///
/// Field names follow the engine's flag names (see the marshaller for the
/// exact mapping).
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize, JsonSchema)]
pub struct QueryOptions {
    /// Maximum number of result rows.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Magnitude column for filtering and sorting.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magtype: Option<MagType>,
    /// Inclusive lower magnitude bound.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magmin: Option<f64>,
    /// Inclusive upper magnitude bound.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magmax: Option<f64>,
    /// Interpret vertices in the J2000 frame instead of the default ICRS.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub j2000: Option<bool>,
    /// Include parallax and proper-motion columns in the output.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ppm: Option<bool>,
    /// Include all photometric mean-magnitude columns.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mags: Option<bool>,
    /// Include per-field standard errors and correlation coefficients;
    /// requires the heavy companion catalog.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heavy: Option<bool>,
    /// Angular padding around the FOV, degrees.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer: Option<f64>,
    /// Barycentric observer position, km; triggers parallax correction.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obspos: Option<[f64; 3]>,
    /// Barycentric observer velocity, km/s; triggers aberration correction.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obsvel: Option<[f64; 3]>,
    /// Observer epoch; triggers proper-motion propagation.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obsy: Option<Epoch>,
    /// Override path to the catalog file.
    #[serde(default)]
    #[serde(rename = "gaiasqlite3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gaia_sqlite3: Option<CatalogPath>,
}
