//! 2-D geometry helpers: camera-space rectangles and the ribbon/camera
//! transform.

pub mod bounds;
pub mod transform;

pub use bounds::Aabb2;
pub use transform::{shift_offset, RibbonTransform};
