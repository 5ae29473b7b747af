use glam::Vec3;

use crate::core::camera::Ray;

/// Ray intersection against one shape's visual mesh.
///
/// Only the shape itself is tested; occlusion by other shapes is the host's call.
pub trait HoverProbe {
    fn hit(&self, shape: usize, ray: &Ray, position: Vec3) -> bool;
}

/// Bounding-sphere approximation of the mesh, for headless runs
#[derive(Clone, Copy, Debug)]
pub struct SphereProbe {
    pub radius: f32,
}

impl SphereProbe {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl HoverProbe for SphereProbe {
    fn hit(&self, _shape: usize, ray: &Ray, position: Vec3) -> bool {
        ray.hits_sphere(position, self.radius)
    }
}

/// Hit results computed by the host's raycaster, one flag per shape
#[derive(Clone, Debug, Default)]
pub struct HostHoverFlags {
    flags: Vec<bool>,
}

impl HostHoverFlags {
    pub fn new(count: usize) -> Self {
        Self { flags: vec![false; count] }
    }

    /// Replace all flags; non-zero means hit. Missing entries read as not hit.
    pub fn set_all(&mut self, flags: &[u8]) {
        for (i, slot) in self.flags.iter_mut().enumerate() {
            *slot = flags.get(i).is_some_and(|&f| f != 0);
        }
    }

    pub fn set(&mut self, shape: usize, hit: bool) -> bool {
        match self.flags.get_mut(shape) {
            Some(slot) => {
                *slot = hit;
                true
            }
            None => false,
        }
    }
}

impl HoverProbe for HostHoverFlags {
    fn hit(&self, shape: usize, _ray: &Ray, _position: Vec3) -> bool {
        self.flags.get(shape).copied().unwrap_or(false)
    }
}
