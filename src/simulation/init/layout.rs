use glam::Vec3;

use crate::core::random::{uniform_disk, Rng};
use crate::domain::config::SceneConfig;
use crate::domain::constants::{MATERIAL_TYPES, MAX_SHAPE_COUNT};

/// Spawn description for one shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeSpec {
    pub position: Vec3,
    pub material_index: usize,
    pub color_index: usize,
}

impl ShapeSpec {
    /// (roughness, metalness)
    pub fn material(&self) -> (f32, f32) {
        MATERIAL_TYPES[self.material_index % MATERIAL_TYPES.len()]
    }
}

/// Lay out the field: an equal share per material, colors cycling inside each
/// share, positions uniform over the spawn disk on z = 0.
///
/// The count rounds up to a multiple of `material_count` so every material
/// gets the same number of shapes. Unvalidated counts are capped at
/// `MAX_SHAPE_COUNT`.
pub fn spawn_layout(config: &SceneConfig, rng: &mut Rng) -> Vec<ShapeSpec> {
    let materials = config.material_count.clamp(1, MATERIAL_TYPES.len());
    let colors = config.color_count.max(1);
    let per_material = config.shape_count.min(MAX_SHAPE_COUNT).div_ceil(materials);
    let capacity = per_material.checked_mul(materials).unwrap_or(MAX_SHAPE_COUNT);

    let mut shapes = Vec::with_capacity(capacity);
    for material_index in 0..materials {
        for i in 0..per_material {
            let p = uniform_disk(rng, config.spawn_radius);
            shapes.push(ShapeSpec {
                position: Vec3::new(p.x, p.y, 0.0),
                material_index,
                color_index: i % colors,
            });
        }
    }
    shapes
}
