use glam::Vec3;

use crate::systems::controller::{self, FrameInput};

use super::body_set::BodySet;
use super::hover::HoverProbe;
use super::render_extract::write_render_buffer;
use super::{SceneCore, TickTimer};

pub(super) fn tick<B, P>(scene: &mut SceneCore, dt: f32, bodies: &mut B, probe: &P)
where
    B: BodySet + ?Sized,
    P: HoverProbe + ?Sized,
{
    let perf_on = scene.perf_enabled;
    let timer = TickTimer::start(perf_on);

    // NaN or negative frame deltas advance nothing
    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
    scene.clock += f64::from(dt);
    scene.frame += 1;

    if perf_on {
        scene.perf_stats.reset();
        scene.perf_stats.frame = scene.frame;
    }

    // === SNAPSHOT ===
    // Neighbor scans read positions from the start of the tick, indexed by shape
    scene.snapshot.clear();
    scene
        .snapshot
        .extend(scene.shapes.iter().map(|s| s.body.and_then(|id| bodies.translation(id))));

    let ray = scene.camera.ray_from_ndc(scene.pointer);
    let signal = scene.broadcaster.signal();
    let cfg = &scene.config.controller;

    // === CONTROLLERS ===
    for (index, shape) in scene.shapes.iter_mut().enumerate() {
        let (Some(id), Some(position)) = (shape.body, scene.snapshot[index]) else {
            if perf_on {
                scene.perf_stats.skipped_bodies += 1;
            }
            continue;
        };

        let input = FrameInput {
            index,
            now: scene.clock,
            dt,
            position,
            pointer: scene.pointer,
            ray_hit: probe.hit(index, &ray, position),
            signal,
            camera: &scene.camera,
            bodies: &scene.snapshot,
            profile: scene.config.profile,
        };
        let out = controller::step(&mut shape.controller, &input, cfg, &mut scene.rng);

        if out.impulse != Vec3::ZERO && bodies.apply_impulse(id, out.impulse, true) && perf_on {
            scene.perf_stats.impulses_applied += 1;
        }
        if let Some(snap) = out.snap_to {
            bodies.set_translation(id, snap);
        }
        shape.orientation = out.orientation;

        if perf_on {
            scene.perf_stats.record(&out.events);
            if shape.controller.neighbor_repulsion_active() {
                scene.perf_stats.crowded += 1;
            }
        }
    }

    // === PHYSICS ===
    bodies.step(dt);

    // === RENDER ===
    for shape in scene.shapes.iter_mut() {
        if let Some(position) = shape.body.and_then(|id| bodies.translation(id)) {
            shape.position = position;
        }
    }
    write_render_buffer(scene);

    if let Some(timer) = timer {
        timer.finish(&mut scene.perf_stats);
    }
}
