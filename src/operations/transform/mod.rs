mod rotate;
mod rotate_zoom;
mod scale;
mod translate;

pub use rotate::{pitch, roll, rotate, rotate_3d, yaw};
pub use rotate_zoom::{rotate_zoom, rotate_zoom_3d, RotateZoom, RotateZoom3D};
pub use scale::scale;
pub use translate::translate;
