//! Throttled neighbor scan
//!
//! O(N) per shape, so it runs at most once per `neighbor_check_interval`
//! of simulated time. Between scans the crowded flag is sticky.

use glam::Vec3;

use crate::domain::config::ControllerConfig;

use super::forces::planar;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NeighborScan {
    pub active: bool,
    pub last_check: f64,
}

impl NeighborScan {
    /// Is a rescan due at clock time `now`?
    #[inline]
    pub fn is_due(&self, now: f64, cfg: &ControllerConfig) -> bool {
        now - self.last_check > f64::from(cfg.neighbor_check_interval)
    }

    /// Rescan if due and return the (possibly unchanged) crowded flag.
    ///
    /// `bodies` is a snapshot of every body translation; `None` entries are
    /// bodies not registered yet. `self_index` is skipped.
    pub fn refresh(
        &mut self,
        now: f64,
        self_index: usize,
        position: Vec3,
        bodies: &[Option<Vec3>],
        cfg: &ControllerConfig,
    ) -> bool {
        if !self.is_due(now, cfg) {
            return self.active;
        }
        self.last_check = now;
        self.active = any_within(self_index, position, bodies, cfg.neighbor_distance);
        self.active
    }
}

/// Any other body closer than `threshold` on the plane?
pub fn any_within(self_index: usize, position: Vec3, bodies: &[Option<Vec3>], threshold: f32) -> bool {
    let here = planar(position);
    let limit_sq = threshold * threshold;
    bodies.iter().enumerate().any(|(i, other)| {
        i != self_index
            && other.is_some_and(|p| planar(p).distance_squared(here) < limit_sq)
    })
}
