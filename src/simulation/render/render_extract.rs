use serde::Serialize;

use crate::domain::palette::hex;

use super::SceneCore;

/// Floats per shape in the render buffer: `[x, y, z, rx, ry, rz]`
pub const RENDER_STRIDE: usize = 6;

/// Static per-shape data the host needs to build meshes
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShapeManifestEntry {
    pub index: usize,
    pub material_index: usize,
    pub color_index: usize,
    pub roughness: f32,
    pub metalness: f32,
    /// Resolved through the current color scheme
    pub color: String,
    pub position: [f32; 3],
}

pub(super) fn write_render_buffer(scene: &mut SceneCore) {
    scene.render.resize(scene.shapes.len() * RENDER_STRIDE, 0.0);
    for (shape, out) in scene.shapes.iter().zip(scene.render.chunks_exact_mut(RENDER_STRIDE)) {
        out[..3].copy_from_slice(&shape.position.to_array());
        out[3..].copy_from_slice(&shape.orientation.to_array());
    }
}

pub(super) fn manifest(scene: &SceneCore) -> Vec<ShapeManifestEntry> {
    let colors = scene.broadcaster.colors();
    scene
        .shapes
        .iter()
        .enumerate()
        .map(|(index, shape)| {
            let (roughness, metalness) = shape.spec.material();
            ShapeManifestEntry {
                index,
                material_index: shape.spec.material_index,
                color_index: shape.spec.color_index,
                roughness,
                metalness,
                color: hex(colors.shape_color(shape.spec.color_index)),
                position: shape.position.to_array(),
            }
        })
        .collect()
}

pub(super) fn manifest_json(scene: &SceneCore) -> String {
    serde_json::to_string(&manifest(scene)).unwrap_or_else(|_| "[]".to_string())
}
