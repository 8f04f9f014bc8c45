use nalgebra::Point;

/// Multiplies every coordinate of every point by `factor`.
///
/// Scaling is about the origin. An empty point set is returned unchanged.
#[must_use]
pub fn scale<const D: usize>(factor: f64, points: &[Point<f64, D>]) -> Vec<Point<f64, D>> {
    points.iter().map(|p| Point::from(p.coords * factor)).collect()
}
