use std::path::Path;

use serde::Deserialize;

use crate::{
    error::{Result, ShapeError},
    math::AABB,
    debug, warn,
};

/// The part of a block model document that carries geometry, every other field is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ModelFile {
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// One cuboid of a block model.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Element {
    pub from: glam::DVec3,
    pub to: glam::DVec3,
}

impl Element {
    pub fn aabb(&self) -> AABB {
        AABB::new(self.from, self.to)
    }
}

impl ModelFile {
    pub fn boxes(&self) -> Vec<AABB> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, element)| {
                let aabb = element.aabb();
                if aabb.is_inverted() {
                    warn!("element {} has `from` {:?} beyond `to` {:?}", i, aabb.min, aabb.max);
                }
                aabb
            })
            .collect()
    }
}

/// Parses model JSON held in memory. A document without `elements` yields no boxes.
pub fn parse_model(json: &str) -> Result<Vec<AABB>> {
    let model: ModelFile = serde_json::from_str(json)?;
    Ok(model.boxes())
}

/// Reads and parses a model file.
pub fn load_model(path: impl AsRef<Path>) -> Result<Vec<AABB>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ShapeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let boxes = parse_model(&json)?;
    debug!("loaded {} elements from '{}'", boxes.len(), path.display());
    Ok(boxes)
}
