//! Shapefield Engine - interactive field of floating shapes in WASM
//!
//! Architecture:
//! - core/        - RNG, camera rays, logging
//! - domain/      - constants, config, color schemes
//! - systems/     - forces, rotation, hover, neighbors, per-shape controller
//! - simulation/  - orchestration (SceneCore) and the JS facade
//!
//! Physics and rendering belong to the host. The engine reads body
//! translations and hover hits, and answers with impulses, snaps and
//! render transforms.

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

#[doc(hidden)]
pub use web_sys as __web_sys;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Shapefield WASM engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Number of color schemes a click cycles through
#[wasm_bindgen]
pub fn color_scheme_count() -> u32 {
    domain::palette::COLOR_SCHEMES.len() as u32
}

// Re-export main types
pub use domain::config::{BodyDesc, ControllerConfig, InputProfile, SceneConfig};
pub use simulation::{BodySet, DampedBodies, HostBodies, HoverProbe, SceneCore, ShapeField, TickStats};
