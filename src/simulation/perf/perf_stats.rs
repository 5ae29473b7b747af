use wasm_bindgen::prelude::*;

use crate::systems::controller::FrameEvents;

/// Counters for the last tick. Zeros when metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickStats {
    pub(super) tick_ms: f64,
    pub(super) frame: u64,
    pub(super) shapes_updated: u32,
    pub(super) skipped_bodies: u32,
    pub(super) impulses_applied: u32,
    pub(super) drift_snaps: u32,
    pub(super) hover_rotations: u32,
    pub(super) click_rotations: u32,
    pub(super) neighbor_scans: u32,
    pub(super) repelled: u32,
    pub(super) crowded: u32,
}

impl TickStats {
    pub(crate) fn reset(&mut self) {
        *self = TickStats::default();
    }

    pub(crate) fn record(&mut self, events: &FrameEvents) {
        self.shapes_updated += 1;
        self.hover_rotations += events.hover_rotation as u32;
        self.click_rotations += events.click_rotation as u32;
        self.neighbor_scans += events.neighbor_scan as u32;
        self.repelled += events.repelled as u32;
        self.drift_snaps += events.drift_snap as u32;
    }
}

#[wasm_bindgen]
impl TickStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn shapes_updated(&self) -> u32 { self.shapes_updated }
    #[wasm_bindgen(getter)]
    pub fn skipped_bodies(&self) -> u32 { self.skipped_bodies }
    #[wasm_bindgen(getter)]
    pub fn impulses_applied(&self) -> u32 { self.impulses_applied }
    #[wasm_bindgen(getter)]
    pub fn drift_snaps(&self) -> u32 { self.drift_snaps }
    #[wasm_bindgen(getter)]
    pub fn hover_rotations(&self) -> u32 { self.hover_rotations }
    #[wasm_bindgen(getter)]
    pub fn click_rotations(&self) -> u32 { self.click_rotations }
    #[wasm_bindgen(getter)]
    pub fn neighbor_scans(&self) -> u32 { self.neighbor_scans }
    #[wasm_bindgen(getter)]
    pub fn repelled(&self) -> u32 { self.repelled }
    /// Shapes whose crowded flag was set after this tick
    #[wasm_bindgen(getter)]
    pub fn crowded(&self) -> u32 { self.crowded }
}
