//! Tuning defaults
//!
//! These seed `ControllerConfig` / `SceneConfig`. Code should read the config,
//! not these constants, so hosts can override them from JSON.

// === Scene ===
pub const SHAPE_COUNT: usize = 15;
/// Upper bound accepted from config; every shape is scanned by every other
pub const MAX_SHAPE_COUNT: usize = 4096;
pub const SPAWN_RADIUS: f32 = 3.0;
/// Uniform scale applied to the shape model; also the hover-probe radius
pub const SHAPE_SIZE: f32 = 1.0;
pub const DEFAULT_SEED: u32 = 12345;

// === Camera ===
pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 10.0];
pub const CAMERA_FOV_DEG: f32 = 75.0;

// === Forces ===
/// Very weak pull toward center
pub const ATTRACTOR_STRENGTH: f32 = 0.5;
pub const CENTERING_DEAD_ZONE: f32 = 0.5;
pub const CENTERING_GROWTH: f32 = 0.05;
pub const REPULSION_STRENGTH: f32 = 7.0;
pub const POINTER_SPEED_GAIN: f32 = 10.0;
pub const MOVEMENT_THRESHOLD_POINTER: f32 = 0.002;
pub const MOVEMENT_THRESHOLD_TOUCH: f32 = 0.0005;
pub const CLICK_FORCE: f32 = 40.0;
pub const CLICK_DEAD_ZONE: f32 = 0.1;
pub const PARALLEL_EPSILON: f32 = 1e-4;

// === Neighbor separation ===
pub const NEIGHBOR_CHECK_INTERVAL: f32 = 0.1;
pub const NEIGHBOR_DISTANCE: f32 = 1.9;
pub const SEPARATION_FORCE: f32 = 0.3;
pub const SEPARATION_MIN_RADIUS: f32 = 0.2;
pub const SEPARATION_MAX_RADIUS: f32 = 3.0;

// === Z drift ===
pub const Z_DRIFT_THRESHOLD: f32 = 0.01;
pub const Z_SNAP_THRESHOLD: f32 = 0.05;
pub const Z_CORRECTION_GAIN: f32 = 0.8;

// === Rotation ===
pub const ROTATION_SPEED: f32 = 3.0;
pub const ROTATION_DURATION: f32 = 0.5;
pub const HOVER_RETRIGGER_FACTOR: f32 = 2.0;

// === Rigid body description (handed to the host engine) ===
pub const BODY_MASS: f32 = 3.0;
pub const DAMPING: f32 = 2.0;
pub const RESTITUTION: f32 = 0.4;
pub const FRICTION: f32 = 0.1;
pub const CONTAINMENT_SIZE: f32 = 40.0;

/// Material properties - (roughness, metalness)
pub const MATERIAL_TYPES: [(f32, f32); 3] = [
    (1.0, 0.0),
    (0.0, 0.5),
    (0.0, 0.0),
];
