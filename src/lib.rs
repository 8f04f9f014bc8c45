//! Move, rotate, and scale point sets in 2-D and 3-D.
//!
//! Every operation borrows its input points and returns a new `Vec`.
//! Angles are in degrees, counter-clockwise positive.

pub mod error;
pub mod math;
pub mod operations;

pub use error::{OperationError, Result, TwirlError};
pub use operations::nested::{
    rotate_zoom_3d_nested, rotate_zoom_nested, scale_nested, translate_nested,
};
pub use operations::transform::{
    pitch, roll, rotate, rotate_3d, rotate_zoom, rotate_zoom_3d, scale, translate, yaw, RotateZoom,
    RotateZoom3D,
};
