use glam::{Vec2, Vec3};

use crate::domain::config::{ControllerConfig, InputProfile, TouchTuning};

use super::{lift, planar};

/// Pointer state for one tick, in normalized device coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    /// Position delta since the previous tick
    pub velocity: Vec2,
}

/// Is the pointer moving fast enough to push a hovered shape?
#[inline]
pub fn is_pointer_moving(velocity: Vec2, profile: InputProfile, cfg: &ControllerConfig) -> bool {
    velocity.length() > cfg.movement_threshold(profile)
}

/// Touch: stronger near the middle of the field, weaker at the edge
pub fn touch_position_factor(distance: f32, tuning: &TouchTuning) -> f32 {
    if distance < tuning.near_radius {
        tuning.near_factor
    } else if distance < tuning.far_radius {
        let t = (distance - tuning.near_radius) / (tuning.far_radius - tuning.near_radius);
        tuning.near_factor - (tuning.near_factor - tuning.mid_floor) * t
    } else {
        tuning.far_factor
    }
}

/// Touch: boost swipes heading toward screen center
pub fn touch_direction_factor(direction: Vec2, pointer: Vec2, tuning: &TouchTuning) -> f32 {
    let to_center = (-pointer).normalize_or_zero();
    let dot = direction.dot(to_center);
    (1.0 + dot * tuning.direction_gain).max(tuning.direction_floor)
}

/// Touch: three bands, increasingly aggressive for faster swipes
pub fn touch_movement_factor(speed: f32, tuning: &TouchTuning) -> f32 {
    let (base, gain) = if speed < tuning.slow_breakpoint {
        tuning.slow_band
    } else if speed < tuning.swipe_breakpoint {
        tuning.medium_band
    } else {
        tuning.swipe_band
    };
    base + speed * gain
}

/// Scaled repulsion strength for a hovered shape
pub fn repulsion_magnitude(
    shape_position: Vec3,
    pointer: &PointerSample,
    profile: InputProfile,
    cfg: &ControllerConfig,
) -> f32 {
    let speed = pointer.velocity.length();
    match profile {
        InputProfile::Pointer => cfg.repulsion_strength * (1.0 + speed * cfg.pointer_speed_gain),
        InputProfile::Touch => {
            let tuning = &cfg.touch;
            let distance = planar(shape_position).length();
            let direction = pointer.velocity.normalize_or_zero();
            let combined = touch_position_factor(distance, tuning)
                * touch_direction_factor(direction, pointer.position, tuning);
            cfg.repulsion_strength * combined * touch_movement_factor(speed, tuning)
        }
    }
}

/// Push a hovered shape along the pointer's direction of travel.
///
/// Callers gate this on hover + `is_pointer_moving`; a still pointer yields zero.
pub fn pointer_repulsion_impulse(
    shape_position: Vec3,
    pointer: &PointerSample,
    profile: InputProfile,
    cfg: &ControllerConfig,
) -> Vec3 {
    let direction = pointer.velocity.normalize_or_zero();
    if direction == Vec2::ZERO {
        return Vec3::ZERO;
    }
    lift(direction * repulsion_magnitude(shape_position, pointer, profile, cfg))
}
