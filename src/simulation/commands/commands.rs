use glam::Vec2;

use crate::systems::broadcast::RotationSignal;
use crate::systems::interaction::ndc_from_client;

use super::SceneCore;

pub(super) fn pointer_move(scene: &mut SceneCore, client_x: f32, client_y: f32) {
    let (w, h) = scene.viewport;
    set_pointer_ndc(scene, ndc_from_client(client_x, client_y, w, h));
}

pub(super) fn set_pointer_ndc(scene: &mut SceneCore, ndc: Vec2) {
    if ndc.is_finite() {
        scene.pointer = ndc;
    }
}

pub(super) fn click(scene: &mut SceneCore, client_x: f32, client_y: f32, now_ms: f64) -> RotationSignal {
    let (w, h) = scene.viewport;
    click_ndc(scene, ndc_from_client(client_x, client_y, w, h), now_ms)
}

/// The only writer of the rotation signal
pub(super) fn click_ndc(scene: &mut SceneCore, ndc: Vec2, now_ms: f64) -> RotationSignal {
    let ndc = if ndc.is_finite() { ndc } else { Vec2::ZERO };
    let signal = scene.broadcaster.trigger(now_ms, ndc);
    console_log!(
        "shapefield: click at ({:.2}, {:.2}), color scheme {}",
        ndc.x,
        ndc.y,
        scene.broadcaster.colors().index()
    );
    signal
}
