use glam::Vec3;
use wasm_bindgen::prelude::*;

use crate::core::camera::Ray;
use crate::domain::config::{InputProfile, SceneConfig};
use crate::domain::palette::hex;

use super::body_set::{BodyId, BodySet};
use super::damped::DampedBodies;
use super::host::{HostBodies, COMMAND_STRIDE};
use super::hover::{HostHoverFlags, HoverProbe, SphereProbe};
use super::perf_stats::TickStats;
use super::render_extract::RENDER_STRIDE;
use super::SceneCore;

/// Pointers into wasm memory for the host's typed-array views.
/// Re-read after every call that can grow a buffer.
#[wasm_bindgen]
pub struct BufferLayout {
    render_ptr: u32,
    render_len_elements: u32,
    render_stride: u32,
    commands_ptr: u32,
    commands_len_elements: u32,
    commands_stride: u32,
}

#[wasm_bindgen]
impl BufferLayout {
    #[wasm_bindgen(getter)]
    pub fn render_ptr(&self) -> u32 { self.render_ptr }
    #[wasm_bindgen(getter)]
    pub fn render_len_elements(&self) -> u32 { self.render_len_elements }
    #[wasm_bindgen(getter)]
    pub fn render_stride(&self) -> u32 { self.render_stride }

    #[wasm_bindgen(getter)]
    pub fn commands_ptr(&self) -> u32 { self.commands_ptr }
    #[wasm_bindgen(getter)]
    pub fn commands_len_elements(&self) -> u32 { self.commands_len_elements }
    #[wasm_bindgen(getter)]
    pub fn commands_stride(&self) -> u32 { self.commands_stride }
}

/// Where the bodies live: our own integrator, or the host's engine
enum BodyBackend {
    Headless(DampedBodies),
    Hosted(HostBodies),
}

impl BodySet for BodyBackend {
    fn spawn(&mut self, position: Vec3) -> BodyId {
        match self {
            BodyBackend::Headless(b) => b.spawn(position),
            BodyBackend::Hosted(b) => b.spawn(position),
        }
    }

    fn len(&self) -> usize {
        match self {
            BodyBackend::Headless(b) => b.len(),
            BodyBackend::Hosted(b) => b.len(),
        }
    }

    fn translation(&self, id: BodyId) -> Option<Vec3> {
        match self {
            BodyBackend::Headless(b) => b.translation(id),
            BodyBackend::Hosted(b) => b.translation(id),
        }
    }

    fn apply_impulse(&mut self, id: BodyId, impulse: Vec3, wake: bool) -> bool {
        match self {
            BodyBackend::Headless(b) => b.apply_impulse(id, impulse, wake),
            BodyBackend::Hosted(b) => b.apply_impulse(id, impulse, wake),
        }
    }

    fn set_translation(&mut self, id: BodyId, position: Vec3) -> bool {
        match self {
            BodyBackend::Headless(b) => b.set_translation(id, position),
            BodyBackend::Hosted(b) => b.set_translation(id, position),
        }
    }

    fn step(&mut self, dt: f32) {
        match self {
            BodyBackend::Headless(b) => b.step(dt),
            BodyBackend::Hosted(b) => b.step(dt),
        }
    }
}

enum HoverBackend {
    Sphere(SphereProbe),
    Host(HostHoverFlags),
}

impl HoverProbe for HoverBackend {
    fn hit(&self, shape: usize, ray: &Ray, position: Vec3) -> bool {
        match self {
            HoverBackend::Sphere(p) => p.hit(shape, ray, position),
            HoverBackend::Host(p) => p.hit(shape, ray, position),
        }
    }
}

#[wasm_bindgen]
pub struct ShapeField {
    core: SceneCore,
    bodies: BodyBackend,
    hover: HoverBackend,
}

impl ShapeField {
    fn build(config: SceneConfig, hosted: bool) -> Self {
        let mut core = SceneCore::new(config);
        let (mut bodies, hover) = if hosted {
            (
                BodyBackend::Hosted(HostBodies::new()),
                HoverBackend::Host(HostHoverFlags::new(core.shape_count())),
            )
        } else {
            (
                BodyBackend::Headless(DampedBodies::new(&core.config().body)),
                HoverBackend::Sphere(SphereProbe::new(core.config().shape_size)),
            )
        };
        core.attach(&mut bodies);
        Self { core, bodies, hover }
    }

    pub fn core(&self) -> &SceneCore {
        &self.core
    }
}

#[wasm_bindgen]
impl ShapeField {
    /// Default scene, simulated headless
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::build(SceneConfig::default(), false)
    }

    /// Scene from a (partial) JSON config. `hosted` hands the bodies to the
    /// host's physics engine and hover tests to the host's raycaster.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str, hosted: bool) -> Result<ShapeField, JsValue> {
        let config = SceneConfig::from_json(json).map_err(|e| {
            console_warn!("shapefield: rejected config: {}", e);
            JsValue::from_str(&e)
        })?;
        Ok(Self::build(config, hosted))
    }

    #[wasm_bindgen(getter)]
    pub fn hosted(&self) -> bool {
        matches!(self.bodies, BodyBackend::Hosted(_))
    }

    #[wasm_bindgen(getter)]
    pub fn shape_count(&self) -> u32 { self.core.shape_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.core.set_viewport(width, height);
    }

    /// Pick pointer or touch tuning from a user-agent string
    pub fn set_user_agent(&mut self, user_agent: &str) {
        self.core.set_profile(InputProfile::from_user_agent(user_agent));
    }

    pub fn set_touch(&mut self, touch: bool) {
        let profile = if touch { InputProfile::Touch } else { InputProfile::Pointer };
        self.core.set_profile(profile);
    }

    #[wasm_bindgen(getter)]
    pub fn is_touch(&self) -> bool { self.core.profile().is_touch() }

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.core.pointer_move(client_x, client_y);
    }

    /// Returns the new signal timestamp
    pub fn click(&mut self, client_x: f32, client_y: f32, now_ms: f64) -> f64 {
        self.core.click(client_x, client_y, now_ms).timestamp
    }

    /// Host raycaster results, one byte per shape. False in headless mode.
    pub fn set_hover_flags(&mut self, flags: &[u8]) -> bool {
        match &mut self.hover {
            HoverBackend::Host(h) => {
                h.set_all(flags);
                true
            }
            HoverBackend::Sphere(_) => false,
        }
    }

    pub fn set_hover(&mut self, shape: u32, hit: bool) -> bool {
        match &mut self.hover {
            HoverBackend::Host(h) => h.set(shape as usize, hit),
            HoverBackend::Sphere(_) => false,
        }
    }

    /// Body translations from the host, 3 floats per shape (NaN = not registered).
    /// Returns how many were updated; 0 in headless mode.
    pub fn sync_translations(&mut self, flat: &[f32]) -> u32 {
        match &mut self.bodies {
            BodyBackend::Hosted(b) => b.sync(flat) as u32,
            BodyBackend::Headless(_) => 0,
        }
    }

    /// Advance one frame. In hosted mode the command buffer holds this
    /// frame's impulses and snaps afterwards.
    pub fn tick(&mut self, dt: f32) {
        if let BodyBackend::Hosted(b) = &mut self.bodies {
            b.clear_commands();
        }
        self.core.tick(dt, &mut self.bodies, &self.hover);
    }

    pub fn render_ptr(&self) -> *const f32 {
        self.core.render_buffer().as_ptr()
    }

    pub fn render_len(&self) -> usize {
        self.core.render_buffer().len()
    }

    pub fn commands_ptr(&self) -> *const f32 {
        match &self.bodies {
            BodyBackend::Hosted(b) => b.commands().as_ptr(),
            BodyBackend::Headless(_) => std::ptr::null(),
        }
    }

    pub fn commands_len(&self) -> usize {
        match &self.bodies {
            BodyBackend::Hosted(b) => b.commands().len(),
            BodyBackend::Headless(_) => 0,
        }
    }

    pub fn buffer_layout(&self) -> BufferLayout {
        BufferLayout {
            render_ptr: self.render_ptr() as u32,
            render_len_elements: self.render_len() as u32,
            render_stride: RENDER_STRIDE as u32,
            commands_ptr: self.commands_ptr() as u32,
            commands_len_elements: self.commands_len() as u32,
            commands_stride: COMMAND_STRIDE as u32,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn color_scheme_index(&self) -> u32 { self.core.colors().index() as u32 }

    pub fn background_color(&self) -> String {
        hex(self.core.colors().background())
    }

    /// Color of `color_index` under the current scheme
    pub fn shape_color(&self, color_index: u32) -> String {
        hex(self.core.colors().shape_color(color_index as usize))
    }

    pub fn manifest_json(&self) -> String {
        self.core.manifest_json()
    }

    /// Rigid-body parameters for hosts creating the bodies
    pub fn body_desc_json(&self) -> String {
        serde_json::to_string(&self.core.config().body).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-tick metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last tick's counters (zeros when metrics are disabled)
    pub fn get_tick_stats(&self) -> TickStats {
        self.core.tick_stats()
    }
}

impl Default for ShapeField {
    fn default() -> Self {
        Self::new()
    }
}
