//! Scene - a field of floating shapes
//!
//! SceneCore only orchestrates:
//! - per-shape behavior lives in systems/controller
//! - forces live in systems/forces
//! - bodies belong to whatever `BodySet` the caller hands in
//!
//! One `tick` per rendered frame. Shapes update one after another; no shape
//! writes another shape's body.

use glam::{Vec2, Vec3};

use crate::core::camera::Camera;
use crate::core::random::Rng;
use crate::domain::config::{InputProfile, SceneConfig};
use crate::domain::palette::ColorCycle;
use crate::systems::broadcast::{RotationBroadcaster, RotationSignal};
use crate::systems::controller::ControllerState;

#[path = "bodies/body_set.rs"]
mod body_set;
#[path = "bodies/damped.rs"]
mod damped;
#[path = "bodies/host.rs"]
mod host;
#[path = "hover/hover.rs"]
mod hover;
#[path = "perf/tick_timer.rs"]
mod tick_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/layout.rs"]
mod layout;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use body_set::{BodyId, BodySet};
pub use damped::{DampedBodies, PointBody};
pub use facade::ShapeField;
pub use host::{HostBodies, COMMAND_STRIDE};
pub use hover::{HostHoverFlags, HoverProbe, SphereProbe};
pub use layout::{spawn_layout, ShapeSpec};
pub use perf_stats::TickStats;
pub use render_extract::{ShapeManifestEntry, RENDER_STRIDE};

use tick_timer::TickTimer;

/// One shape: spawn data, its body handle once attached, and controller state
#[derive(Clone, Debug)]
pub struct Shape {
    pub spec: ShapeSpec,
    pub body: Option<BodyId>,
    pub controller: ControllerState,
    /// Euler angles from the last tick
    pub orientation: Vec3,
    /// Last known translation (spawn position until the first tick)
    pub position: Vec3,
}

/// The scene
pub struct SceneCore {
    config: SceneConfig,
    camera: Camera,
    shapes: Vec<Shape>,
    broadcaster: RotationBroadcaster,
    rng: Rng,

    // Input
    pointer: Vec2,
    viewport: (f32, f32),

    // Clock
    clock: f64,
    frame: u64,

    // Scratch: body translations at the start of the tick
    snapshot: Vec<Option<Vec3>>,
    // Render transfer buffer, RENDER_STRIDE floats per shape
    render: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: TickStats,
}

impl SceneCore {
    /// Build the shape layout. Bodies are created separately by `attach`.
    pub fn new(config: SceneConfig) -> Self {
        init::create_scene_core(config)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config = SceneConfig::from_json(json)?;
        Ok(Self::new(config))
    }

    /// Create one body per shape in `bodies`
    pub fn attach<B: BodySet + ?Sized>(&mut self, bodies: &mut B) {
        init::attach_bodies(self, bodies);
    }

    pub fn config(&self) -> &SceneConfig { &self.config }

    pub fn camera(&self) -> &Camera { &self.camera }

    pub fn shapes(&self) -> &[Shape] { &self.shapes }

    pub fn shape_count(&self) -> usize { self.shapes.len() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Simulated seconds since the scene started
    pub fn clock(&self) -> f64 { self.clock }

    pub fn pointer(&self) -> Vec2 { self.pointer }

    pub fn signal(&self) -> RotationSignal { self.broadcaster.signal() }

    pub fn colors(&self) -> &ColorCycle { self.broadcaster.colors() }

    pub fn profile(&self) -> InputProfile { self.config.profile }

    pub fn set_profile(&mut self, profile: InputProfile) {
        settings::set_profile(self, profile);
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        settings::set_viewport(self, width, height);
    }

    /// Enable or disable per-tick metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick's counters (zeros when metrics are disabled)
    pub fn tick_stats(&self) -> TickStats {
        settings::get_tick_stats(self)
    }

    /// Pointer moved, in client pixels
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        commands::pointer_move(self, client_x, client_y);
    }

    /// Pointer position directly in NDC
    pub fn set_pointer_ndc(&mut self, ndc: Vec2) {
        commands::set_pointer_ndc(self, ndc);
    }

    /// Global click: publishes a rotation signal and advances the color scheme
    pub fn click(&mut self, client_x: f32, client_y: f32, now_ms: f64) -> RotationSignal {
        commands::click(self, client_x, client_y, now_ms)
    }

    pub fn click_ndc(&mut self, ndc: Vec2, now_ms: f64) -> RotationSignal {
        commands::click_ndc(self, ndc, now_ms)
    }

    /// Advance every shape by `dt` seconds, then step the bodies
    pub fn tick<B, P>(&mut self, dt: f32, bodies: &mut B, probe: &P)
    where
        B: BodySet + ?Sized,
        P: HoverProbe + ?Sized,
    {
        step::tick(self, dt, bodies, probe);
    }

    /// `[x, y, z, rx, ry, rz]` per shape, refreshed every tick
    pub fn render_buffer(&self) -> &[f32] { &self.render }

    pub fn manifest(&self) -> Vec<ShapeManifestEntry> {
        render_extract::manifest(self)
    }

    pub fn manifest_json(&self) -> String {
        render_extract::manifest_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
