use std::cmp::Ordering;

use super::Axis;

/// Lower bound of block space along every axis.
pub const BLOCK_MIN: f64 = 0.0;
/// Upper bound of block space along every axis, one block is 16 model units.
pub const BLOCK_MAX: f64 = 16.0;

/// An axis aligned box in model units, `min` is the `from` corner and `max` the `to` corner of a model element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: glam::DVec3,
    pub max: glam::DVec3,
}

impl AABB {

    pub fn new(min: glam::DVec3, max: glam::DVec3) -> Self {
        Self { min, max }
    }

    pub fn from_corners(from: [f64; 3], to: [f64; 3]) -> Self {
        Self::new(glam::DVec3::from_array(from), glam::DVec3::from_array(to))
    }

    /// Smallest box containing every box of the slice, `None` for an empty slice.
    pub fn bounding(boxes: &[AABB]) -> Option<Self> {
        let (first, rest) = boxes.split_first()?;
        Some(rest.iter().fold(*first, |acc, b| acc.add(b)))
    }

    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[inline]
    pub fn range(&self, axis: Axis) -> (f64, f64) {
        (axis.component(self.min), axis.component(self.max))
    }

    #[inline]
    pub fn span(&self, axis: Axis) -> f64 {
        axis.component(self.max) - axis.component(self.min)
    }

    #[inline]
    pub fn with_range(&self, axis: Axis, min: f64, max: f64) -> Self {
        Self {
            min: axis.with_component(self.min, min),
            max: axis.with_component(self.max, max),
        }
    }

    /// Stretches the box over the whole block along `axis`.
    #[inline]
    pub fn fill_block(&self, axis: Axis) -> Self {
        self.with_range(axis, BLOCK_MIN, BLOCK_MAX)
    }

    /// True when `from` exceeds `to` on some axis.
    pub fn is_inverted(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Both boxes cover the same range on every axis except `axis`.
    pub fn same_extent_except(&self, other: &Self, axis: Axis) -> bool {
        axis.others()
            .iter()
            .all(|a| self.range(*a) == other.range(*a))
    }

    /// The ranges along `axis` share an end point, so the boxes are face to face.
    pub fn touches_along(&self, other: &Self, axis: Axis) -> bool {
        let (min, max) = self.range(axis);
        let (other_min, other_max) = other.range(axis);
        min == other_max || max == other_min
    }

    /// Lexicographic order on `min` (x, y, z) followed by `max` (x, y, z).
    pub fn corner_cmp(&self, other: &Self) -> Ordering {
        self.min.to_array().iter()
            .chain(self.max.to_array().iter())
            .zip(other.min.to_array().iter().chain(other.max.to_array().iter()))
            .map(|(a, b)| a.total_cmp(b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}
