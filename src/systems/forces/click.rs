use glam::Vec3;

use crate::core::camera::Ray;
use crate::domain::config::ControllerConfig;

use super::{lift, planar};

/// Push a shape away from the world-space click point (x/y only).
///
/// No-op within `click_dead_zone` of the click, where the direction is unreliable.
pub fn click_impulse_from_point(shape_position: Vec3, click_point: Vec3, cfg: &ControllerConfig) -> Vec3 {
    let away = planar(shape_position) - planar(click_point);
    if away.length() <= cfg.click_dead_zone {
        return Vec3::ZERO;
    }
    lift(away.normalize_or_zero() * cfg.click_force)
}

/// Outward impulse from a click ray. Skipped when the ray runs parallel to z = 0.
pub fn click_impulse(shape_position: Vec3, click_ray: &Ray, cfg: &ControllerConfig) -> Vec3 {
    match click_ray.intersect_ground(cfg.parallel_epsilon) {
        Some(hit) => click_impulse_from_point(shape_position, hit, cfg),
        None => Vec3::ZERO,
    }
}
