use glam::Vec3;

use crate::domain::config::ControllerConfig;

use super::{lift, planar};

/// Small constant nudge toward center while a shape is crowded.
///
/// Only inside the (min, max) ring: right at the center it would clump,
/// and at the boundary it would pile shapes up against each other.
pub fn separation_impulse(position: Vec3, crowded: bool, cfg: &ControllerConfig) -> Vec3 {
    if !crowded {
        return Vec3::ZERO;
    }
    let to_center = -planar(position);
    let distance = to_center.length();
    if distance <= cfg.separation_min_radius || distance >= cfg.separation_max_radius {
        return Vec3::ZERO;
    }
    lift(to_center.normalize_or_zero() * cfg.separation_force)
}
