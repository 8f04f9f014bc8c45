//! Transforms over untyped nested coordinate arrays.
//!
//! Points arrive as `&[Vec<f64>]` whose dimension is only known at runtime.
//! The elementary transforms take the dimension from the first point and
//! never fail; the rotate-zoom entry points validate the shape before
//! delegating to the typed operations in [`crate::operations::transform`].

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::math::{Point2, Point3};
use crate::operations::transform::{rotate_zoom, rotate_zoom_3d};

/// Coordinate `k` of `values`, or NaN when it is missing.
fn component(values: &[f64], k: usize) -> f64 {
    values.get(k).copied().unwrap_or(f64::NAN)
}

/// Dimension of the first point, if there is one with any coordinates.
fn leading_dimension(coords: &[Vec<f64>]) -> Option<usize> {
    coords.first().map(Vec::len).filter(|&d| d > 0)
}

/// Translates every point by `offset`, coordinate by coordinate.
///
/// Returns `coords` unchanged when it is empty or its first point has no
/// coordinates.
#[must_use]
pub fn translate_nested(offset: &[f64], coords: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let Some(dim) = leading_dimension(coords) else {
        return coords.to_vec();
    };
    coords
        .iter()
        .map(|point| {
            (0..dim)
                .map(|k| component(point, k) + component(offset, k))
                .collect()
        })
        .collect()
}

/// Multiplies every coordinate by `factor`.
///
/// Same passthrough rule as [`translate_nested`].
#[must_use]
pub fn scale_nested(factor: f64, coords: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let Some(dim) = leading_dimension(coords) else {
        return coords.to_vec();
    };
    coords
        .iter()
        .map(|point| (0..dim).map(|k| factor * component(point, k)).collect())
        .collect()
}

/// Checks that `coords` is present, non-empty, and starts with a point of
/// exactly `dim` coordinates.
fn validated(coords: Option<&[Vec<f64>]>, dim: usize) -> Option<&[Vec<f64>]> {
    coords.filter(|c| c.first().is_some_and(|first| first.len() == dim))
}

/// Rotates 2D nested coordinates about `center` and scales them.
///
/// An absent angle means no rotation. A `center` that is absent or not a
/// pair falls back to the origin; an absent `factor` means 1.
///
/// # Errors
///
/// Returns [`OperationError::InvalidInput`] if `coords` is missing, empty,
/// or its first point is not a pair.
pub fn rotate_zoom_nested(
    angle: Option<f64>,
    center: Option<&[f64]>,
    factor: Option<f64>,
    coords: Option<&[Vec<f64>]>,
) -> Result<Vec<Vec<f64>>> {
    let Some(coords) = validated(coords, 2) else {
        debug!("rotate_zoom_nested expected coordinate pairs");
        return Err(OperationError::expected_coords_2d().into());
    };
    let center = match center {
        Some(&[x, y]) => Some(Point2::new(x, y)),
        _ => None,
    };
    let points: Vec<Point2> = coords
        .iter()
        .map(|c| Point2::new(component(c, 0), component(c, 1)))
        .collect();

    let out = rotate_zoom(angle.unwrap_or(0.0), center, factor, &points)?;
    Ok(out.iter().map(|p| vec![p.x, p.y]).collect())
}

/// Rotates 3D nested coordinates by roll, pitch and yaw about `center` and
/// scales them.
///
/// Absent angles mean no rotation about that axis. A `center` that is
/// absent or not a triple falls back to the origin; an absent `factor`
/// means 1.
///
/// # Errors
///
/// Returns [`OperationError::InvalidInput`] if `coords` is missing, empty,
/// or its first point is not a triple.
pub fn rotate_zoom_3d_nested(
    roll: Option<f64>,
    pitch: Option<f64>,
    yaw: Option<f64>,
    center: Option<&[f64]>,
    factor: Option<f64>,
    coords: Option<&[Vec<f64>]>,
) -> Result<Vec<Vec<f64>>> {
    let Some(coords) = validated(coords, 3) else {
        debug!("rotate_zoom_3d_nested expected coordinate triples");
        return Err(OperationError::expected_coords_3d().into());
    };
    let center = match center {
        Some(&[x, y, z]) => Some(Point3::new(x, y, z)),
        _ => None,
    };
    let points: Vec<Point3> = coords
        .iter()
        .map(|c| Point3::new(component(c, 0), component(c, 1), component(c, 2)))
        .collect();

    let out = rotate_zoom_3d(
        roll.unwrap_or(0.0),
        pitch.unwrap_or(0.0),
        yaw.unwrap_or(0.0),
        center,
        factor,
        &points,
    )?;
    Ok(out.iter().map(|p| vec![p.x, p.y, p.z]).collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{EXPECTED_COORDS_2D, EXPECTED_COORDS_3D};

    const TOL: f64 = 1e-12;

    fn assert_nested_near(actual: &[Vec<f64>], expected: &[Vec<f64>]) {
        assert_eq!(actual.len(), expected.len());
        for (a, b) in actual.iter().zip(expected) {
            assert_eq!(a.len(), b.len());
            for (x, y) in a.iter().zip(b) {
                assert!((x - y).abs() < TOL, "expected {b:?}, got {a:?}");
            }
        }
    }

    #[test]
    fn translate_uses_first_point_dimension() {
        let coords = vec![vec![4.0, 2.0], vec![8.0, 5.0]];
        assert_eq!(
            translate_nested(&[-2.0, 3.0], &coords),
            vec![vec![2.0, 5.0], vec![6.0, 8.0]]
        );

        let coords = vec![vec![1.0, 2.0, 3.0]];
        assert_eq!(translate_nested(&[1.0, 1.0, 1.0], &coords), vec![vec![2.0, 3.0, 4.0]]);
    }

    #[test]
    fn degenerate_input_passes_through() {
        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(translate_nested(&[1.0, 1.0], &empty).is_empty());
        assert!(scale_nested(2.0, &empty).is_empty());

        let hollow = vec![vec![], vec![1.0]];
        assert_eq!(translate_nested(&[1.0, 1.0], &hollow), hollow);
        assert_eq!(scale_nested(2.0, &hollow), hollow);
    }

    #[test]
    fn short_points_read_missing_coordinates_as_nan() {
        let out = translate_nested(&[1.0], &[vec![1.0, 2.0]]);
        assert_eq!(out[0][0], 2.0);
        assert!(out[0][1].is_nan());

        let out = scale_nested(2.0, &[vec![1.0, 2.0], vec![3.0]]);
        assert_eq!(out[0], vec![2.0, 4.0]);
        assert_eq!(out[1][0], 6.0);
        assert!(out[1][1].is_nan());
    }

    #[test]
    fn scale_multiplies_all_coordinates() {
        let coords = vec![vec![4.0, 2.0], vec![1.0, 2.0]];
        assert_eq!(scale_nested(1.0, &coords), coords);
        assert_eq!(scale_nested(2.0, &coords), vec![vec![8.0, 4.0], vec![2.0, 4.0]]);
    }

    #[test]
    fn rotate_zoom_rejects_bad_shapes() {
        let hollow = vec![vec![], vec![]];
        let triple = vec![vec![1.0, 2.0, 3.0]];
        let cases: [Option<&[Vec<f64>]>; 4] =
            [None, Some(&[]), Some(hollow.as_slice()), Some(triple.as_slice())];
        for coords in cases {
            let err = rotate_zoom_nested(None, None, Some(1.0), coords).unwrap_err();
            assert_eq!(err.to_string(), EXPECTED_COORDS_2D);
        }

        let err = rotate_zoom_3d_nested(None, None, None, None, Some(1.0), Some(&[])).unwrap_err();
        assert_eq!(err.to_string(), EXPECTED_COORDS_3D);

        let err = rotate_zoom_3d_nested(None, None, None, None, None, Some(&[vec![1.0, 2.0]]))
            .unwrap_err();
        assert_eq!(err.to_string(), EXPECTED_COORDS_3D);
    }

    #[test]
    fn rotate_zoom_about_center() {
        let coords = vec![vec![3.0, 1.0], vec![1.0, 0.0]];
        let out = rotate_zoom_nested(Some(90.0), Some(&[1.0, 1.0]), None, Some(coords.as_slice())).unwrap();
        assert_nested_near(&out, &[vec![1.0, 3.0], vec![2.0, 1.0]]);
    }

    #[test]
    fn null_angle_scales_only() {
        let coords = vec![vec![4.0, 2.0]];
        let out = rotate_zoom_nested(None, None, Some(2.0), Some(coords.as_slice())).unwrap();
        assert_eq!(out, vec![vec![8.0, 4.0]]);
    }

    #[test]
    fn malformed_center_defaults_to_origin() {
        let coords = vec![vec![4.0, 2.0]];
        let with_bad_center =
            rotate_zoom_nested(Some(30.0), Some(&[8.0]), Some(2.0), Some(coords.as_slice())).unwrap();
        let about_origin = rotate_zoom_nested(Some(30.0), None, Some(2.0), Some(coords.as_slice())).unwrap();
        assert_eq!(with_bad_center, about_origin);
        assert_nested_near(&about_origin, &[vec![4.928_203_230_275_51, 7.464_101_615_137_754]]);
    }

    #[test]
    fn rotate_zoom_3d_about_center() {
        let coords = vec![vec![1.0, 1.0, 0.0]];
        let out = rotate_zoom_3d_nested(
            Some(90.0),
            Some(0.0),
            None,
            Some(&[1.0, 1.0, 1.0]),
            None,
            Some(coords.as_slice()),
        )
        .unwrap();
        assert_nested_near(&out, &[vec![1.0, 2.0, 1.0]]);
    }
}
