use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::math::{is_null_angle, Point2, Point3};

use super::{rotate, rotate_3d, scale, translate};

/// Rotates 2D points about a center, then scales them.
///
/// The pipeline is fixed: translate the center to the origin, rotate,
/// scale, translate back. When the angle is zero or NaN only the scaling
/// runs, about the origin, and the center is ignored.
#[derive(Debug, Clone, Copy)]
pub struct RotateZoom {
    angle: f64,
    center: Point2,
    factor: f64,
}

impl RotateZoom {
    /// Creates a new `RotateZoom` operation about the origin with unit scale.
    ///
    /// * `angle` - Rotation angle in degrees, counter-clockwise.
    #[must_use]
    pub fn new(angle: f64) -> Self {
        Self {
            angle,
            center: Point2::origin(),
            factor: 1.0,
        }
    }

    /// Sets the rotation center.
    #[must_use]
    pub fn with_center(mut self, center: Point2) -> Self {
        self.center = center;
        self
    }

    /// Sets the scaling factor.
    #[must_use]
    pub fn with_scale(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// Executes the operation, returning the transformed points.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if `points` is empty.
    pub fn execute(&self, points: &[Point2]) -> Result<Vec<Point2>> {
        if points.is_empty() {
            debug!("rotate_zoom rejected an empty point set");
            return Err(OperationError::expected_coords_2d().into());
        }
        if is_null_angle(self.angle) {
            trace!(factor = self.factor, "rotate_zoom: no angle, scaling only");
            return Ok(scale(self.factor, points));
        }

        let to_origin = translate(&-self.center.coords, points);
        let rotated = rotate(self.angle, &to_origin);
        let rescaled = scale(self.factor, &rotated);
        Ok(translate(&self.center.coords, &rescaled))
    }
}

/// Rotates 3D points by roll, pitch and yaw about a center, then scales them.
///
/// Same pipeline as [`RotateZoom`], with [`rotate_3d`] as the rotation
/// stage. Rotation is skipped only when all three angles are zero or NaN.
#[derive(Debug, Clone, Copy)]
pub struct RotateZoom3D {
    roll: f64,
    pitch: f64,
    yaw: f64,
    center: Point3,
    factor: f64,
}

impl RotateZoom3D {
    /// Creates a new `RotateZoom3D` operation about the origin with unit scale.
    ///
    /// Angles are in degrees about the x, y and z axes respectively.
    #[must_use]
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            roll,
            pitch,
            yaw,
            center: Point3::origin(),
            factor: 1.0,
        }
    }

    /// Sets the rotation center.
    #[must_use]
    pub fn with_center(mut self, center: Point3) -> Self {
        self.center = center;
        self
    }

    /// Sets the scaling factor.
    #[must_use]
    pub fn with_scale(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// Executes the operation, returning the transformed points.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if `points` is empty.
    pub fn execute(&self, points: &[Point3]) -> Result<Vec<Point3>> {
        if points.is_empty() {
            debug!("rotate_zoom_3d rejected an empty point set");
            return Err(OperationError::expected_coords_3d().into());
        }
        if [self.roll, self.pitch, self.yaw].into_iter().all(is_null_angle) {
            trace!(factor = self.factor, "rotate_zoom_3d: no angles, scaling only");
            return Ok(scale(self.factor, points));
        }

        let to_origin = translate(&-self.center.coords, points);
        let rotated = rotate_3d(self.roll, self.pitch, self.yaw, &to_origin);
        let rescaled = scale(self.factor, &rotated);
        Ok(translate(&self.center.coords, &rescaled))
    }
}

/// Rotates 2D points about `center` and scales them.
///
/// `center` defaults to the origin and `factor` to 1.
///
/// # Errors
///
/// Returns [`OperationError::InvalidInput`] if `points` is empty.
pub fn rotate_zoom(
    angle: f64,
    center: Option<Point2>,
    factor: Option<f64>,
    points: &[Point2],
) -> Result<Vec<Point2>> {
    RotateZoom::new(angle)
        .with_center(center.unwrap_or_else(Point2::origin))
        .with_scale(factor.unwrap_or(1.0))
        .execute(points)
}

/// Rotates 3D points about `center` and scales them.
///
/// `center` defaults to the origin and `factor` to 1.
///
/// # Errors
///
/// Returns [`OperationError::InvalidInput`] if `points` is empty.
pub fn rotate_zoom_3d(
    roll: f64,
    pitch: f64,
    yaw: f64,
    center: Option<Point3>,
    factor: Option<f64>,
    points: &[Point3],
) -> Result<Vec<Point3>> {
    RotateZoom3D::new(roll, pitch, yaw)
        .with_center(center.unwrap_or_else(Point3::origin))
        .with_scale(factor.unwrap_or(1.0))
        .execute(points)
}
