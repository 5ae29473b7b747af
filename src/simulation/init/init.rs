use glam::{Vec2, Vec3};

use crate::core::camera::Camera;
use crate::core::random::Rng;
use crate::domain::config::SceneConfig;
use crate::systems::broadcast::RotationBroadcaster;
use crate::systems::controller::ControllerState;

use super::body_set::BodySet;
use super::layout::spawn_layout;
use super::perf_stats::TickStats;
use super::render_extract::RENDER_STRIDE;
use super::{SceneCore, Shape};

pub(super) fn create_scene_core(config: SceneConfig) -> SceneCore {
    let mut rng = Rng::new(config.seed);
    let shapes: Vec<Shape> = spawn_layout(&config, &mut rng)
        .into_iter()
        .map(|spec| Shape {
            spec,
            body: None,
            controller: ControllerState::new(),
            orientation: Vec3::ZERO,
            position: spec.position,
        })
        .collect();

    let count = shapes.len();
    console_log!(
        "shapefield: {} shapes, radius {}, {:?} input",
        count,
        config.spawn_radius,
        config.profile
    );

    SceneCore {
        camera: Camera::default(),
        shapes,
        broadcaster: RotationBroadcaster::new(),
        rng,
        pointer: Vec2::ZERO,
        viewport: (0.0, 0.0),
        clock: 0.0,
        frame: 0,
        snapshot: Vec::with_capacity(count),
        render: vec![0.0; count * RENDER_STRIDE],
        perf_enabled: false,
        perf_stats: TickStats::default(),
        config,
    }
}

pub(super) fn attach_bodies<B: BodySet + ?Sized>(scene: &mut SceneCore, bodies: &mut B) {
    for shape in scene.shapes.iter_mut() {
        shape.body = Some(bodies.spawn(shape.spec.position));
    }
}
