use std::fmt;

use crate::{
    error::{Result, ShapeError},
    math::AABB,
};

use super::ShapeSyntax;

const INDENT: &str = "    ";

/// Generated code ready to be printed: a comment line followed by the shape declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedShape {
    pub header: String,
    pub code: String,
}

impl fmt::Display for GeneratedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.header, self.code)
    }
}

/// Formats a single box primitive call, e.g. `box(0, 0, 0, 16, 8, 16)`.
pub fn box_call(aabb: &AABB, syntax: ShapeSyntax) -> String {
    format!(
        "{}({}, {}, {}, {}, {}, {})",
        syntax.box_call(),
        aabb.min.x, aabb.min.y, aabb.min.z,
        aabb.max.x, aabb.max.y, aabb.max.z,
    )
}

/// Declares `name` as the union of `boxes`, in the given order.
pub fn emit_union(boxes: &[AABB], name: &str, syntax: ShapeSyntax) -> Result<String> {
    if boxes.is_empty() {
        return Err(ShapeError::NoGeometry);
    }
    let separator = format!(",\n{INDENT}");
    let primitives = boxes
        .iter()
        .map(|aabb| box_call(aabb, syntax))
        .collect::<Vec<_>>()
        .join(&separator);

    Ok(format!(
        "VoxelShape {name} = {union}(\n{INDENT}{primitives}\n);",
        union = syntax.union_call(),
    ))
}

pub fn emit_shape(boxes: &[AABB], header: &str, name: &str, syntax: ShapeSyntax) -> Result<GeneratedShape> {
    Ok(GeneratedShape {
        header: format!("// {header}"),
        code: emit_union(boxes, name, syntax)?,
    })
}
