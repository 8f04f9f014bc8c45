use nalgebra::{Point, SVector};

/// Translates every point by `offset`.
///
/// Works for points of any fixed dimension. An empty point set is returned
/// unchanged.
#[must_use]
pub fn translate<const D: usize>(
    offset: &SVector<f64, D>,
    points: &[Point<f64, D>],
) -> Vec<Point<f64, D>> {
    points.iter().map(|p| Point::from(p.coords + offset)).collect()
}
