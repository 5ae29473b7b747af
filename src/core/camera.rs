use glam::{Vec2, Vec3};

use crate::domain::constants::{CAMERA_FOV_DEG, CAMERA_POSITION};

/// Ray in world space. `direction` is unit length (or zero for a degenerate ray).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction: direction.normalize_or_zero() }
    }

    /// Intersect with the plane `dot(normal, p) + constant = 0`.
    ///
    /// Returns `None` when the ray is (nearly) parallel to the plane:
    /// `|dot(normal, direction)| <= epsilon`.
    pub fn intersect_plane(&self, normal: Vec3, constant: f32, epsilon: f32) -> Option<Vec3> {
        let denominator = normal.dot(self.direction);
        if denominator.abs() <= epsilon {
            return None;
        }
        let t = -(self.origin.dot(normal) + constant) / denominator;
        Some(self.origin + self.direction * t)
    }

    /// Intersect with the z = 0 plane all shapes live on
    #[inline]
    pub fn intersect_ground(&self, epsilon: f32) -> Option<Vec3> {
        self.intersect_plane(Vec3::Z, 0.0, epsilon)
    }

    /// Does the ray pass through a sphere in front of its origin?
    pub fn hits_sphere(&self, center: Vec3, radius: f32) -> bool {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return false;
        }
        // Far root must be ahead of the origin
        -b + disc.sqrt() >= 0.0
    }
}

/// Perspective camera used to turn pointer positions into world rays
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub fovy: f32,
    pub aspect: f32,
}

impl Camera {
    pub fn look_at(eye: Vec3, target: Vec3, fov_deg: f32, aspect: f32) -> Self {
        let forward = (target - eye).normalize_or_zero();
        // Looking straight along Y would zero the cross product; fall back to Z as up
        let world_up = if forward.cross(Vec3::Y).length_squared() < 1e-8 { Vec3::Z } else { Vec3::Y };
        let right = forward.cross(world_up).normalize_or_zero();
        let up = right.cross(forward);
        Self {
            eye,
            forward,
            right,
            up,
            fovy: fov_deg.to_radians(),
            aspect: sanitize_aspect(aspect),
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = sanitize_aspect(aspect);
    }

    /// Ray from the eye through a point in normalized device coordinates.
    ///
    /// Equivalent to unprojecting `(ndc.x, ndc.y, 0)` and taking the direction
    /// from the eye to that point.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let half_h = (0.5 * self.fovy).tan();
        let half_w = half_h * self.aspect;
        let dir = self.forward + self.right * (ndc.x * half_w) + self.up * (ndc.y * half_h);
        Ray::new(self.eye, dir)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::look_at(Vec3::from_array(CAMERA_POSITION), Vec3::ZERO, CAMERA_FOV_DEG, 1.0)
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 }
}
