//! Per-Shape Frame Controller
//!
//! One call to [`step`] per shape per rendered frame. Order matters:
//!
//! 1. React to a new click signal (rotation + outward impulse)
//! 2. Sample pointer velocity
//! 3. Hover edge -> maybe start a hover rotation
//! 4. Advance the rotation animation
//! 5. Throttled neighbor scan + anti-jitter separation
//! 6. Hover repulsion while the pointer moves, centering otherwise
//! 7. Z drift correction
//!
//! `step` never touches the physics engine. It returns the summed impulse and
//! an optional position snap; the scene submits those to the body.

use glam::{Vec2, Vec3};

use crate::core::camera::Camera;
use crate::core::random::Rng;
use crate::domain::config::{ControllerConfig, InputProfile};

use super::broadcast::{RotationSignal, SignalReceiver};
use super::forces::{
    centering_impulse, click_impulse, drift_correction, is_pointer_moving,
    pointer_repulsion_impulse, separation_impulse, PointerSample,
};
use super::interaction::{update_hover, HoverEdge, PointerTracker};
use super::neighbors::NeighborScan;
use super::rotation::RotationState;

/// Everything one shape remembers between ticks
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControllerState {
    pub rotation: RotationState,
    pub pointer: PointerTracker,
    pub hovered: bool,
    pub neighbors: NeighborScan,
    pub signal: SignalReceiver,
}

impl ControllerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_rotation(&self) -> Vec3 {
        self.rotation.current
    }

    pub fn target_rotation(&self) -> Vec3 {
        self.rotation.target
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation.is_rotating
    }

    pub fn neighbor_repulsion_active(&self) -> bool {
        self.neighbors.active
    }

    pub fn pointer_velocity(&self) -> Vec2 {
        self.pointer.velocity
    }

    /// Idle shapes must not drift: target == current whenever not rotating
    pub fn is_settled(&self) -> bool {
        self.rotation.is_rotating || self.rotation.target == self.rotation.current
    }
}

/// Per-tick inputs for one shape
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    /// Arena index of this shape (also its slot in `bodies`)
    pub index: usize,
    /// Simulation clock, seconds
    pub now: f64,
    pub dt: f32,
    /// Body translation at the start of the tick
    pub position: Vec3,
    /// Pointer in NDC
    pub pointer: Vec2,
    /// Did this tick's pointer ray hit this shape's mesh?
    pub ray_hit: bool,
    pub signal: RotationSignal,
    pub camera: &'a Camera,
    /// Translation snapshot of every body, indexed like the shapes
    pub bodies: &'a [Option<Vec3>],
    pub profile: InputProfile,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameEvents {
    pub click_rotation: bool,
    pub hover_rotation: bool,
    pub neighbor_scan: bool,
    pub repelled: bool,
    pub drift_snap: bool,
}

/// What the scene should do to this shape's body and mesh
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameOutput {
    /// Sum of all impulses this tick (they are additive)
    pub impulse: Vec3,
    /// Hard position reset, applied after the impulse
    pub snap_to: Option<Vec3>,
    /// Euler angles for the renderer
    pub orientation: Vec3,
    pub events: FrameEvents,
}

/// Advance one shape by one tick
pub fn step(
    state: &mut ControllerState,
    input: &FrameInput<'_>,
    cfg: &ControllerConfig,
    rng: &mut Rng,
) -> FrameOutput {
    let mut out = FrameOutput::default();
    let position = input.position;

    // 1. Global click
    if let Some(signal) = state.signal.poll(input.signal) {
        state.rotation.trigger_click(signal.timestamp, rng);
        let ray = input.camera.ray_from_ndc(signal.click_ndc);
        out.impulse += click_impulse(position, &ray, cfg);
        out.events.click_rotation = true;
    }

    // 2. Pointer velocity, every tick
    let velocity = state.pointer.sample(input.pointer);
    let pointer = PointerSample { position: input.pointer, velocity };

    // 3. Hover edge
    if update_hover(&mut state.hovered, input.ray_hit) == HoverEdge::Entered {
        out.events.hover_rotation = state.rotation.trigger_hover(input.now, rng, cfg);
    }

    // 4. Rotation
    out.orientation = state.rotation.advance(input.dt, cfg);

    // 5. Crowding
    out.events.neighbor_scan = state.neighbors.is_due(input.now, cfg);
    let crowded = state
        .neighbors
        .refresh(input.now, input.index, position, input.bodies, cfg);
    out.impulse += separation_impulse(position, crowded, cfg);

    // 6. Repulsion or centering
    if input.ray_hit && is_pointer_moving(velocity, input.profile, cfg) {
        out.impulse += pointer_repulsion_impulse(position, &pointer, input.profile, cfg);
        out.events.repelled = true;
    } else {
        out.impulse += centering_impulse(position, cfg);
    }

    // 7. Stay on the plane
    let drift = drift_correction(position.z, cfg);
    out.impulse += drift.impulse;
    if drift.snap {
        out.snap_to = Some(Vec3::new(position.x, position.y, 0.0));
        out.events.drift_snap = true;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Harness {
        camera: Camera,
        cfg: ControllerConfig,
        rng: Rng,
        state: ControllerState,
        bodies: Vec<Option<Vec3>>,
    }

    impl Harness {
        fn new(position: Vec3) -> Self {
            Self {
                camera: Camera::default(),
                cfg: ControllerConfig::default(),
                rng: Rng::new(77),
                state: ControllerState::new(),
                bodies: vec![Some(position)],
            }
        }

        fn tick(&mut self, now: f64, pointer: Vec2, ray_hit: bool, signal: RotationSignal) -> FrameOutput {
            let input = FrameInput {
                index: 0,
                now,
                dt: 1.0 / 64.0,
                position: self.bodies[0].unwrap(),
                pointer,
                ray_hit,
                signal,
                camera: &self.camera,
                bodies: &self.bodies,
                profile: InputProfile::Pointer,
            };
            step(&mut self.state, &input, &self.cfg, &mut self.rng)
        }
    }

    #[test]
    fn idle_shape_far_out_is_pulled_in() {
        let mut h = Harness::new(Vec3::new(2.0, 0.0, 0.0));
        let out = h.tick(0.0, Vec2::ZERO, false, RotationSignal::default());
        assert!(out.impulse.x < 0.0);
        assert_eq!(out.impulse.y, 0.0);
        assert_eq!(out.events, FrameEvents::default());
    }

    #[test]
    fn hover_enter_starts_rotation_once() {
        let mut h = Harness::new(Vec3::new(2.0, 0.0, 0.0));
        let out = h.tick(1.0, Vec2::ZERO, true, RotationSignal::default());
        assert!(out.events.hover_rotation);
        assert!(h.state.is_rotating());

        let out = h.tick(1.1, Vec2::ZERO, true, RotationSignal::default());
        assert!(!out.events.hover_rotation);
    }

    #[test]
    fn moving_pointer_over_shape_repels_instead_of_centering() {
        let mut h = Harness::new(Vec3::new(2.0, 0.0, 0.0));
        h.tick(0.0, Vec2::ZERO, true, RotationSignal::default());
        let out = h.tick(0.016, Vec2::new(0.0, 0.05), true, RotationSignal::default());
        assert!(out.events.repelled);
        // Pushed along +Y (pointer direction), no centering pull on X
        assert!(out.impulse.y > 0.0);
        assert_eq!(out.impulse.x, 0.0);
    }

    #[test]
    fn click_signal_rotates_and_pushes_once() {
        let mut h = Harness::new(Vec3::new(2.0, 0.0, 0.0));
        let signal = RotationSignal { timestamp: 1_000.0, click_ndc: Vec2::ZERO };

        let out = h.tick(0.0, Vec2::ZERO, false, signal);
        assert!(out.events.click_rotation);
        assert!(h.state.is_rotating());
        assert_eq!(h.state.rotation.last_click_time, 1_000.0);
        // Click push (+40) dominates the centering pull
        assert!(out.impulse.x > 30.0);

        let out = h.tick(0.016, Vec2::ZERO, false, signal);
        assert!(!out.events.click_rotation);
        assert!(out.impulse.x < 0.0);
    }

    #[test]
    fn drifted_body_is_corrected_and_snapped() {
        let mut h = Harness::new(Vec3::new(0.0, 0.0, 0.3));
        let out = h.tick(0.0, Vec2::ZERO, false, RotationSignal::default());
        assert!(out.impulse.z < 0.0);
        assert_eq!(out.snap_to, Some(Vec3::ZERO));
        assert!(out.events.drift_snap);
    }

    #[test]
    fn crowded_shape_gets_separation_nudge() {
        let mut h = Harness::new(Vec3::new(0.3, 0.0, 0.0));
        h.bodies.push(Some(Vec3::new(1.0, 0.0, 0.0)));
        let out = h.tick(0.2, Vec2::ZERO, false, RotationSignal::default());
        assert!(out.events.neighbor_scan);
        assert!(h.state.neighbor_repulsion_active());
        // Inside the centering dead zone, so only the 0.3 nudge remains
        assert!((out.impulse.x + 0.3).abs() < 1e-6);
    }

    #[test]
    fn settled_invariant_holds_through_a_session() {
        let mut h = Harness::new(Vec3::new(1.0, 1.0, 0.0));
        let mut signal = RotationSignal::default();
        let mut now = 0.0;
        for i in 0..400 {
            if i == 123 {
                signal = RotationSignal { timestamp: 5.0, click_ndc: Vec2::new(0.2, 0.1) };
            }
            let hit = (i / 40) % 2 == 0;
            h.tick(now, Vec2::new((i as f32 * 0.01).sin(), 0.0), hit, signal);
            assert!(h.state.is_settled());
            now += 1.0 / 64.0;
        }
    }
}
