//! Turns the elements of a block model into Java code declaring a `VoxelShape` that approximates the
//! model's collision geometry.
//!
//! Pipeline: [`shape::load_model`] reads the element boxes, a [`shape::Variant`] reduces them
//! (merging neighbours or expanding one bounding box to the block bounds) and [`codegen`] prints the
//! union of the resulting boxes.

pub mod log;
pub mod error;
pub mod math;
pub mod shape;
pub mod codegen;
pub mod application;

pub use error::{Result, ShapeError};
