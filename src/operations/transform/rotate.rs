use crate::math::{degrees_to_radians, is_null_angle, Point2, Point3};

/// Rotates 2D points counter-clockwise about the origin.
///
/// * `angle` - Rotation angle in degrees.
#[must_use]
pub fn rotate(angle: f64, points: &[Point2]) -> Vec<Point2> {
    let (sin, cos) = degrees_to_radians(angle).sin_cos();
    points
        .iter()
        .map(|p| Point2::new(cos * p.x - sin * p.y, sin * p.x + cos * p.y))
        .collect()
}

/// Rotates 3D points about the x-axis.
///
/// * `angle` - Rotation angle in degrees.
#[must_use]
pub fn roll(angle: f64, points: &[Point3]) -> Vec<Point3> {
    let (sin, cos) = degrees_to_radians(angle).sin_cos();
    points
        .iter()
        .map(|p| Point3::new(p.x, cos * p.y - sin * p.z, sin * p.y + cos * p.z))
        .collect()
}

/// Rotates 3D points about the y-axis.
///
/// * `angle` - Rotation angle in degrees.
#[must_use]
pub fn pitch(angle: f64, points: &[Point3]) -> Vec<Point3> {
    let (sin, cos) = degrees_to_radians(angle).sin_cos();
    points
        .iter()
        .map(|p| Point3::new(cos * p.x + sin * p.z, p.y, -sin * p.x + cos * p.z))
        .collect()
}

/// Rotates 3D points about the z-axis.
///
/// * `angle` - Rotation angle in degrees.
#[must_use]
pub fn yaw(angle: f64, points: &[Point3]) -> Vec<Point3> {
    let (sin, cos) = degrees_to_radians(angle).sin_cos();
    points
        .iter()
        .map(|p| Point3::new(cos * p.x - sin * p.y, sin * p.x + cos * p.y, p.z))
        .collect()
}

/// Rotates 3D points by roll, pitch and yaw angles (degrees).
///
/// Stages run in the fixed order yaw, pitch, roll (intrinsic z-y'-x'').
/// A stage whose angle is zero or NaN is skipped.
#[must_use]
pub fn rotate_3d(
    roll_angle: f64,
    pitch_angle: f64,
    yaw_angle: f64,
    points: &[Point3],
) -> Vec<Point3> {
    let mut rotated = points.to_vec();
    if rotated.is_empty() {
        return rotated;
    }
    if !is_null_angle(yaw_angle) {
        rotated = yaw(yaw_angle, &rotated);
    }
    if !is_null_angle(pitch_angle) {
        rotated = pitch(pitch_angle, &rotated);
    }
    if !is_null_angle(roll_angle) {
        rotated = roll(roll_angle, &rotated);
    }
    rotated
}
