use std::f64::consts::PI;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-12;

/// Converts degrees to radians.
///
/// Multiplies by π before dividing by 180; [`f64::to_radians`] rounds
/// differently in the last bit.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Returns `true` when an angle requests no rotation at all.
///
/// Zero, negative zero and NaN all count as "no angle".
#[must_use]
pub fn is_null_angle(degrees: f64) -> bool {
    degrees == 0.0 || degrees.is_nan()
}
