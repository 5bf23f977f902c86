use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Name mapping of the generated Java code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ShapeSyntax {
    /// `Shapes.or(box(..), ..)`
    #[default]
    Mojang,
    /// `VoxelShapes.union(Block.createCuboidShape(..), ..)`
    Yarn,
}

impl ShapeSyntax {
    pub fn union_call(&self) -> &'static str {
        match self {
            ShapeSyntax::Mojang => "Shapes.or",
            ShapeSyntax::Yarn   => "VoxelShapes.union",
        }
    }

    pub fn box_call(&self) -> &'static str {
        match self {
            ShapeSyntax::Mojang => "box",
            ShapeSyntax::Yarn   => "Block.createCuboidShape",
        }
    }
}
