use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::{
    codegen::{emit_shape, GeneratedShape, ShapeSyntax},
    error::Result,
    math::AABB,
};

use super::{expand_horizontal, expand_vertical, merge_adjacent, MergeMode};

/// Options shared by every variant.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateParams {
    pub declaration_name: String,
    pub syntax: ShapeSyntax,
    pub merge_mode: MergeMode,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            declaration_name: "SHAPE".to_string(),
            syntax: ShapeSyntax::default(),
            merge_mode: MergeMode::default(),
        }
    }
}

/// How the model geometry is turned into a collision shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Variant {
    /// One box per cluster of adjacent elements.
    Merge,
    /// A single box covering the full horizontal plane.
    ExpandHorizontal,
    /// A single full height box spanning the wider horizontal axis.
    ExpandVertical,
}

impl Variant {
    pub fn header(&self) -> &'static str {
        match self {
            Variant::Merge => "Generated Minecraft VoxelShape Code",
            Variant::ExpandHorizontal | Variant::ExpandVertical => "Generated Minecraft VoxelShape Code for Bounding Box",
        }
    }

    pub fn transform(&self, boxes: &[AABB], params: &GenerateParams) -> Result<Vec<AABB>> {
        match self {
            Variant::Merge            => Ok(merge_adjacent(boxes, params.merge_mode)),
            Variant::ExpandHorizontal => Ok(vec![expand_horizontal(boxes)?]),
            Variant::ExpandVertical   => Ok(vec![expand_vertical(boxes)?]),
        }
    }

    pub fn generate(&self, boxes: &[AABB], params: &GenerateParams) -> Result<GeneratedShape> {
        let shape = self.transform(boxes, params)?;
        emit_shape(&shape, self.header(), &params.declaration_name, params.syntax)
    }
}
