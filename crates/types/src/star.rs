//! Output-side data definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One star decoded from the engine's response.
///
/// `mean_mag`, `ra`, `dec` and `offset` are always present. Everything else
/// is governed by the options that produced the batch: `--ppm` adds parallax
/// and proper motions, `--mags` adds the per-band mean magnitudes, `--heavy`
/// adds the source id plus error and correlation columns, and the correction
/// options add the corrected-position fields. Absent fields stay `None`; the
/// decoder never fabricates values.
///
/// Positions are at epoch 2015.5 unless a correction was requested.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct StarRecord {
    /// Mean magnitude in the requested band; the engine's sort key.
    pub mean_mag: f64,
    /// Right ascension, degrees.
    pub ra: f64,
    /// Declination, degrees.
    pub dec: f64,
    /// Integer catalog offset of the record.
    pub offset: i64,

    // --ppm
    /// Absolute stellar parallax, mas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallax: Option<f64>,
    /// Proper motion in RA, mas/y.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmra: Option<f64>,
    /// Proper motion in Dec, mas/y.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmdec: Option<f64>,

    // --mags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phot_g_mean_mag: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phot_bp_mean_mag: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phot_rp_mean_mag: Option<f64>,

    // --heavy
    /// Gaia source id. The engine renders it as a string to survive JSON
    /// number precision limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ra_error: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dec_error: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallax_error: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmra_error: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmdec_error: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ra_dec_corr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ra_parallax_corr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ra_pmra_corr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ra_pmdec_corr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dec_parallax_corr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dec_pmra_corr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dec_pmdec_corr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallax_pmra_corr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallax_pmdec_corr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmra_pmdec_corr: Option<f64>,

    // Corrected positions, present when parallax, aberration or
    // proper-motion corrections ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rastar_corrected: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decstar_corrected: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rastar_delta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decstar_delta: Option<f64>,
}
