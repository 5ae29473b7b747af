//! Rotation State Machine
//!
//! `Idle`:     current == target, nothing animates
//! `Rotating`: current chases target with a first-order lag until the
//!             animation window (`rotation_duration`) runs out
//!
//! Leaving `Rotating` freezes the shape wherever it got to: the target snaps
//! to the current angles. There is no rest pose to return to.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use crate::core::random::Rng;
use crate::domain::config::ControllerConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationPhase {
    Idle,
    Rotating,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RotationState {
    /// Euler angles (x, y, z) currently shown
    pub current: Vec3,
    pub target: Vec3,
    pub is_rotating: bool,
    pub elapsed: f32,
    /// Clock time of the last hover-triggered rotation
    pub last_hover_start: f64,
    /// Signal timestamp of the last click-triggered rotation
    pub last_click_time: f64,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            current: Vec3::ZERO,
            target: Vec3::ZERO,
            is_rotating: false,
            elapsed: 0.0,
            last_hover_start: 0.0,
            last_click_time: 0.0,
        }
    }
}

/// Hover target: gentle tilt on X/Z, full spin on Y
pub fn hover_target(rng: &mut Rng) -> Vec3 {
    Vec3::new(rng.range(FRAC_PI_2), rng.range(TAU), rng.range(FRAC_PI_2))
}

/// Click target: anything goes
pub fn click_target(rng: &mut Rng) -> Vec3 {
    Vec3::new(rng.range(TAU), rng.range(TAU), rng.range(TAU))
}

impl RotationState {
    pub fn phase(&self) -> RotationPhase {
        if self.is_rotating {
            RotationPhase::Rotating
        } else {
            RotationPhase::Idle
        }
    }

    /// Hover started on this shape at clock time `now`.
    ///
    /// Ignored while an animation is running, unless the last hover rotation is
    /// older than `hover_retrigger_factor * rotation_duration`. Returns whether
    /// a rotation was started.
    pub fn trigger_hover(&mut self, now: f64, rng: &mut Rng, cfg: &ControllerConfig) -> bool {
        let cooldown = f64::from(cfg.rotation_duration * cfg.hover_retrigger_factor);
        if self.is_rotating && now - self.last_hover_start <= cooldown {
            return false;
        }
        self.target = hover_target(rng);
        self.is_rotating = true;
        self.elapsed = 0.0;
        self.last_hover_start = now;
        true
    }

    /// Global click signal. Always overrides whatever is running.
    pub fn trigger_click(&mut self, timestamp: f64, rng: &mut Rng) {
        self.target = click_target(rng);
        self.is_rotating = true;
        self.elapsed = 0.0;
        self.last_click_time = timestamp;
    }

    /// Advance the animation by `dt` seconds and return the angles to render
    pub fn advance(&mut self, dt: f32, cfg: &ControllerConfig) -> Vec3 {
        if self.is_rotating {
            self.elapsed += dt;
            if self.elapsed >= cfg.rotation_duration {
                self.is_rotating = false;
            }
        }

        if self.is_rotating {
            self.current += (self.target - self.current) * (dt * cfg.rotation_speed);
        } else {
            self.target = self.current;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Power of two so `duration / DT` ticks sum to exactly `duration`
    const DT: f32 = 1.0 / 64.0;

    fn run(state: &mut RotationState, seconds: f32, cfg: &ControllerConfig) {
        let ticks = (seconds / DT).round() as usize;
        for _ in 0..ticks {
            state.advance(DT, cfg);
        }
    }

    #[test]
    fn hover_starts_rotation_from_idle() {
        let cfg = ControllerConfig::default();
        let mut rng = Rng::new(1);
        let mut state = RotationState::default();
        assert_eq!(state.phase(), RotationPhase::Idle);

        assert!(state.trigger_hover(1.0, &mut rng, &cfg));
        assert_eq!(state.phase(), RotationPhase::Rotating);
        assert_eq!(state.elapsed, 0.0);
        assert!(state.target.x >= 0.0 && state.target.x < FRAC_PI_2);
        assert!(state.target.y >= 0.0 && state.target.y < TAU);
        assert!(state.target.z >= 0.0 && state.target.z < FRAC_PI_2);
    }

    #[test]
    fn returns_to_idle_after_duration_and_stays_frozen() {
        let cfg = ControllerConfig::default();
        let mut rng = Rng::new(2);
        let mut state = RotationState::default();
        state.trigger_hover(1.0, &mut rng, &cfg);

        run(&mut state, cfg.rotation_duration, &cfg);
        assert_eq!(state.phase(), RotationPhase::Idle);
        assert_eq!(state.target, state.current);
        assert_ne!(state.current, Vec3::ZERO);

        let frozen = state.current;
        for _ in 0..100 {
            state.advance(DT, &cfg);
        }
        assert_eq!(state.current, frozen);
        assert_eq!(state.target, frozen);
    }

    #[test]
    fn still_rotating_just_before_duration() {
        let cfg = ControllerConfig::default();
        let mut rng = Rng::new(3);
        let mut state = RotationState::default();
        state.trigger_hover(0.0, &mut rng, &cfg);
        state.advance(cfg.rotation_duration * 0.9, &cfg);
        assert_eq!(state.phase(), RotationPhase::Rotating);
    }

    #[test]
    fn interpolation_is_first_order_lag() {
        let cfg = ControllerConfig::default();
        let mut state = RotationState {
            target: Vec3::new(1.0, 2.0, 0.5),
            is_rotating: true,
            ..Default::default()
        };
        let dt = 0.1;
        let out = state.advance(dt, &cfg);
        let k = dt * cfg.rotation_speed;
        assert!((out.x - 1.0 * k).abs() < 1e-6);
        assert!((out.y - 2.0 * k).abs() < 1e-6);
        assert!((out.z - 0.5 * k).abs() < 1e-6);
    }

    #[test]
    fn hover_does_not_restart_running_animation() {
        let cfg = ControllerConfig::default();
        let mut rng = Rng::new(4);
        let mut state = RotationState::default();
        assert!(state.trigger_hover(5.0, &mut rng, &cfg));
        let target = state.target;
        state.advance(0.1, &cfg);

        assert!(!state.trigger_hover(5.2, &mut rng, &cfg));
        assert_eq!(state.target, target);
        assert!((state.elapsed - 0.1).abs() < 1e-6);
    }

    #[test]
    fn stale_hover_may_override_running_click_rotation() {
        let cfg = ControllerConfig::default();
        let mut rng = Rng::new(5);
        let mut state = RotationState::default();
        state.trigger_hover(1.0, &mut rng, &cfg);
        state.trigger_click(1_000.0, &mut rng);
        // Last hover was 1.5s ago, more than 2 * 0.5s
        assert!(state.trigger_hover(2.5, &mut rng, &cfg));
        assert_eq!(state.last_hover_start, 2.5);
    }

    #[test]
    fn hover_cooldown_expires_after_days_of_uptime() {
        let cfg = ControllerConfig::default();
        let mut rng = Rng::new(8);
        let mut state = RotationState::default();
        let day_six = 524_288.0;
        assert!(state.trigger_hover(day_six, &mut rng, &cfg));
        assert!(!state.trigger_hover(day_six + 0.5, &mut rng, &cfg));
        assert!(state.trigger_hover(day_six + 1.5, &mut rng, &cfg));
    }

    #[test]
    fn click_always_overrides() {
        let cfg = ControllerConfig::default();
        let mut rng = Rng::new(6);
        let mut state = RotationState::default();
        state.trigger_hover(1.0, &mut rng, &cfg);
        state.advance(0.3, &cfg);

        state.trigger_click(42.0, &mut rng);
        assert_eq!(state.phase(), RotationPhase::Rotating);
        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.last_click_time, 42.0);
        for axis in state.target.to_array() {
            assert!((0.0..TAU).contains(&axis));
        }
    }
}
