//! Check a raw query description for well-formedness and mode exclusivity.

use gaiafov_types::{FovQuery, RawQuery};

use crate::error::ValidationError;

/// Validate the region specification of a raw query.
///
/// A query carries exactly one of `fov` / (`ralohi` and `declohi`). Anything
/// else — both, neither, half a box, a malformed `fov`, a wrong-length range
/// — fails here, before the engine is ever invoked. No geometric validation
/// happens at this stage; polygon self-intersection, radius signs and the
/// like are the engine's concern.
pub fn validate(raw: &RawQuery) -> Result<FovQuery, ValidationError> {
    match (&raw.fov, &raw.ralohi, &raw.declohi) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(ValidationError::AmbiguousRegion),
        (Some(fov), None, None) => {
            // At least one vertex beyond the first, and the first must be a
            // full [RA, Dec] pair. Later entries may be bare scalars (radii).
            if fov.len() < 2 || fov[0].components().len() < 2 {
                return Err(ValidationError::MalformedFov);
            }
            Ok(FovQuery::Fov(fov.clone()))
        }
        (None, None, None) => Err(ValidationError::MissingRegion),
        (None, Some(_), None) => Err(ValidationError::IncompleteBox { missing: "declohi" }),
        (None, None, Some(_)) => Err(ValidationError::IncompleteBox { missing: "ralohi" }),
        (None, Some(ralohi), Some(declohi)) => {
            let ralohi = pair("ralohi", ralohi)?;
            let declohi = pair("declohi", declohi)?;
            // RA may wrap through the prime meridian (lo >= hi is a wrapped
            // range); Dec must be ordered.
            if declohi[0] >= declohi[1] {
                return Err(ValidationError::DecRangeOrder {
                    declo: declohi[0],
                    dechi: declohi[1],
                });
            }
            Ok(FovQuery::RaDecBox { ralohi, declohi })
        }
    }
}

fn pair(field: &'static str, range: &[f64]) -> Result<[f64; 2], ValidationError> {
    match range {
        [lo, hi] => Ok([*lo, *hi]),
        _ => Err(ValidationError::WrongRangeLength {
            field,
            len: range.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gaiafov_types::FovEntry;

    fn raw(json: &str) -> RawQuery {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn circle_fov_validates() {
        let query = validate(&raw(r#"{ "fov": [[1, 2], 0.3] }"#)).unwrap();
        assert_eq!(
            query,
            FovQuery::Fov(vec![
                FovEntry::Vertex(vec![1.0, 2.0]),
                FovEntry::Scalar(0.3),
            ])
        );
    }

    #[test]
    fn polygon_fov_validates() {
        let query = validate(&raw(r#"{ "fov": [[30, 89], [0, 88.5], [315, 88.5], [270, 89]] }"#));
        assert!(matches!(query, Ok(FovQuery::Fov(vertices)) if vertices.len() == 4));
    }

    #[test]
    fn radec_box_validates_and_allows_ra_wrap() {
        let query = validate(&raw(r#"{ "ralohi": [350, 10], "declohi": [-5, 5] }"#)).unwrap();
        assert_eq!(
            query,
            FovQuery::RaDecBox {
                ralohi: [350.0, 10.0],
                declohi: [-5.0, 5.0],
            }
        );
    }

    #[test]
    fn both_modes_at_once_is_ambiguous() {
        let result = validate(&raw(
            r#"{ "fov": [[1, 2], 0.3], "ralohi": [10, 20], "declohi": [-5, 5] }"#,
        ));
        assert_eq!(result, Err(ValidationError::AmbiguousRegion));

        // Even half a box alongside an fov is ambiguous.
        let result = validate(&raw(r#"{ "fov": [[1, 2], 0.3], "declohi": [-5, 5] }"#));
        assert_eq!(result, Err(ValidationError::AmbiguousRegion));
    }

    #[test]
    fn neither_mode_is_missing() {
        assert_eq!(validate(&raw("{}")), Err(ValidationError::MissingRegion));
    }

    #[test]
    fn half_a_box_is_incomplete() {
        assert_eq!(
            validate(&raw(r#"{ "ralohi": [10, 20] }"#)),
            Err(ValidationError::IncompleteBox { missing: "declohi" })
        );
        assert_eq!(
            validate(&raw(r#"{ "declohi": [-5, 5] }"#)),
            Err(ValidationError::IncompleteBox { missing: "ralohi" })
        );
    }

    #[test]
    fn wrong_length_ranges_are_rejected() {
        assert_eq!(
            validate(&raw(r#"{ "ralohi": [10, 20, 30], "declohi": [-5, 5] }"#)),
            Err(ValidationError::WrongRangeLength {
                field: "ralohi",
                len: 3,
            })
        );
        assert_eq!(
            validate(&raw(r#"{ "ralohi": [10, 20], "declohi": [-5] }"#)),
            Err(ValidationError::WrongRangeLength {
                field: "declohi",
                len: 1,
            })
        );
    }

    #[test]
    fn dec_range_must_be_ordered() {
        assert_eq!(
            validate(&raw(r#"{ "ralohi": [10, 20], "declohi": [5, -5] }"#)),
            Err(ValidationError::DecRangeOrder {
                declo: 5.0,
                dechi: -5.0,
            })
        );
    }

    #[test]
    fn malformed_fov_is_rejected() {
        // First entry is a bare scalar.
        assert_eq!(
            validate(&raw(r#"{ "fov": [0.3, [1, 2]] }"#)),
            Err(ValidationError::MalformedFov)
        );
        // Single entry.
        assert_eq!(
            validate(&raw(r#"{ "fov": [[1, 2]] }"#)),
            Err(ValidationError::MalformedFov)
        );
        // Empty.
        assert_eq!(
            validate(&raw(r#"{ "fov": [] }"#)),
            Err(ValidationError::MalformedFov)
        );
    }
}
