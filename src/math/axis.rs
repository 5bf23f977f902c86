use enum_utils::ToIndex;

/// A coordinate axis of block space, `Y` is the vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ToIndex)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; Axis::COUNT] = [Axis::X, Axis::Y, Axis::Z];

    /// The two axes perpendicular to this one, in index order.
    pub fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    #[inline]
    pub fn component(self, v: glam::DVec3) -> f64 {
        v[self.to_index()]
    }

    #[inline]
    pub fn with_component(self, mut v: glam::DVec3, value: f64) -> glam::DVec3 {
        v[self.to_index()] = value;
        v
    }
}
