//! Force Model - pure impulse computations
//!
//! Every function here is side-effect free: position/pointer state in,
//! additive impulse out. Impulses stay on the z = 0 plane except the
//! drift correction.
//!
//! Degenerate directions (zero-length vectors) produce no force for that
//! tick; nothing here normalizes a zero vector.

mod centering;
mod click;
mod drift;
mod repulsion;
mod separation;

pub use centering::{centering_impulse, centering_magnitude};
pub use click::{click_impulse, click_impulse_from_point};
pub use drift::{drift_correction, DriftCorrection};
pub use repulsion::{
    is_pointer_moving, pointer_repulsion_impulse, repulsion_magnitude, touch_direction_factor,
    touch_movement_factor, touch_position_factor, PointerSample,
};
pub use separation::separation_impulse;

use glam::{Vec2, Vec3};

/// Planar (x, y) part of a position
#[inline(always)]
pub(crate) fn planar(p: Vec3) -> Vec2 {
    Vec2::new(p.x, p.y)
}

/// Lift a planar vector back to 3D with z = 0
#[inline(always)]
pub(crate) fn lift(v: Vec2) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0)
}
