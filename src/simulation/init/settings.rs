use crate::domain::config::InputProfile;

use super::perf_stats::TickStats;
use super::SceneCore;

pub(super) fn set_profile(scene: &mut SceneCore, profile: InputProfile) {
    scene.config.profile = profile;
}

pub(super) fn set_viewport(scene: &mut SceneCore, width: f32, height: f32) {
    scene.viewport = (width, height);
    if width > 0.0 && height > 0.0 {
        scene.camera.set_aspect(width / height);
    }
}

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
    if !enabled {
        scene.perf_stats.reset();
    }
}

pub(super) fn get_tick_stats(scene: &SceneCore) -> TickStats {
    scene.perf_stats.clone()
}
