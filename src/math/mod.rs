mod aabb;
pub use aabb::*;

mod axis;
pub use axis::*;
