use glam::Vec3;

use crate::domain::config::ControllerConfig;

use super::{lift, planar};

/// Strength of the centering pull at `distance` from the origin.
///
/// Zero inside the dead zone, otherwise grows quadratically so far-flung
/// shapes come back faster.
#[inline]
pub fn centering_magnitude(distance: f32, cfg: &ControllerConfig) -> f32 {
    if distance <= cfg.centering_dead_zone {
        return 0.0;
    }
    cfg.attractor_strength * (1.0 + distance * distance * cfg.centering_growth)
}

/// Pull toward the center of the field (x/y only)
pub fn centering_impulse(position: Vec3, cfg: &ControllerConfig) -> Vec3 {
    let to_center = -planar(position);
    let distance = to_center.length();
    let magnitude = centering_magnitude(distance, cfg);
    if magnitude == 0.0 {
        return Vec3::ZERO;
    }
    lift(to_center.normalize_or_zero() * magnitude)
}
