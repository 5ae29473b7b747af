use serde::{Deserialize, Serialize};

use super::constants::*;
use super::palette::COLORS_PER_SCHEME;

/// Input device class, resolved once at startup and passed down.
///
/// Best-effort heuristic, not authoritative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputProfile {
    #[default]
    Pointer,
    Touch,
}

const TOUCH_AGENT_TOKENS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

impl InputProfile {
    /// Classify from a browser user-agent string
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if TOUCH_AGENT_TOKENS.iter().any(|token| ua.contains(token)) {
            InputProfile::Touch
        } else {
            InputProfile::Pointer
        }
    }

    pub fn is_touch(self) -> bool {
        self == InputProfile::Touch
    }
}

/// Touch-only repulsion scaling. Empirically tuned, so exposed as config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchTuning {
    /// Shapes closer than this to center get `near_factor`
    pub near_radius: f32,
    /// Beyond this they get `far_factor`; in between, lerp `near_factor -> mid_floor`
    pub far_radius: f32,
    pub near_factor: f32,
    pub mid_floor: f32,
    pub far_factor: f32,
    /// Boost when the pointer moves toward screen center: `1 + dot * gain`
    pub direction_gain: f32,
    pub direction_floor: f32,
    /// Speed breakpoints separating nudge / intentional / swipe bands
    pub slow_breakpoint: f32,
    pub swipe_breakpoint: f32,
    /// (base, gain) per band: factor = base + |v| * gain
    pub slow_band: (f32, f32),
    pub medium_band: (f32, f32),
    pub swipe_band: (f32, f32),
}

impl Default for TouchTuning {
    fn default() -> Self {
        Self {
            near_radius: 1.5,
            far_radius: 4.0,
            near_factor: 2.5,
            mid_floor: 1.0,
            far_factor: 0.7,
            direction_gain: 0.5,
            direction_floor: 0.8,
            slow_breakpoint: 0.002,
            swipe_breakpoint: 0.005,
            slow_band: (0.5, 20.0),
            medium_band: (1.0, 40.0),
            swipe_band: (2.0, 60.0),
        }
    }
}

/// Per-shape controller tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub attractor_strength: f32,
    pub centering_dead_zone: f32,
    pub centering_growth: f32,

    pub repulsion_strength: f32,
    pub pointer_speed_gain: f32,
    pub movement_threshold_pointer: f32,
    pub movement_threshold_touch: f32,
    pub touch: TouchTuning,

    pub neighbor_check_interval: f32,
    pub neighbor_distance: f32,
    pub separation_force: f32,
    pub separation_min_radius: f32,
    pub separation_max_radius: f32,

    pub click_force: f32,
    pub click_dead_zone: f32,
    pub parallel_epsilon: f32,

    pub z_drift_threshold: f32,
    pub z_snap_threshold: f32,
    pub z_correction_gain: f32,

    pub rotation_speed: f32,
    pub rotation_duration: f32,
    pub hover_retrigger_factor: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            attractor_strength: ATTRACTOR_STRENGTH,
            centering_dead_zone: CENTERING_DEAD_ZONE,
            centering_growth: CENTERING_GROWTH,
            repulsion_strength: REPULSION_STRENGTH,
            pointer_speed_gain: POINTER_SPEED_GAIN,
            movement_threshold_pointer: MOVEMENT_THRESHOLD_POINTER,
            movement_threshold_touch: MOVEMENT_THRESHOLD_TOUCH,
            touch: TouchTuning::default(),
            neighbor_check_interval: NEIGHBOR_CHECK_INTERVAL,
            neighbor_distance: NEIGHBOR_DISTANCE,
            separation_force: SEPARATION_FORCE,
            separation_min_radius: SEPARATION_MIN_RADIUS,
            separation_max_radius: SEPARATION_MAX_RADIUS,
            click_force: CLICK_FORCE,
            click_dead_zone: CLICK_DEAD_ZONE,
            parallel_epsilon: PARALLEL_EPSILON,
            z_drift_threshold: Z_DRIFT_THRESHOLD,
            z_snap_threshold: Z_SNAP_THRESHOLD,
            z_correction_gain: Z_CORRECTION_GAIN,
            rotation_speed: ROTATION_SPEED,
            rotation_duration: ROTATION_DURATION,
            hover_retrigger_factor: HOVER_RETRIGGER_FACTOR,
        }
    }
}

impl ControllerConfig {
    /// Pointer speed (NDC per tick) above which a hovered shape gets pushed
    #[inline]
    pub fn movement_threshold(&self, profile: InputProfile) -> f32 {
        match profile {
            InputProfile::Pointer => self.movement_threshold_pointer,
            InputProfile::Touch => self.movement_threshold_touch,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.rotation_duration > 0.0) {
            return Err(format!("rotation_duration must be > 0, got {}", self.rotation_duration));
        }
        if !(self.neighbor_check_interval >= 0.0) {
            return Err(format!(
                "neighbor_check_interval must be >= 0, got {}",
                self.neighbor_check_interval
            ));
        }
        if self.separation_min_radius >= self.separation_max_radius {
            return Err("separation_min_radius must be below separation_max_radius".to_string());
        }
        if self.touch.near_radius >= self.touch.far_radius {
            return Err("touch.near_radius must be below touch.far_radius".to_string());
        }
        if self.touch.slow_breakpoint > self.touch.swipe_breakpoint {
            return Err("touch.slow_breakpoint must not exceed touch.swipe_breakpoint".to_string());
        }
        Ok(())
    }
}

/// Rigid-body parameters the host engine should create each shape with
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyDesc {
    pub mass: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub restitution: f32,
    pub friction: f32,
    pub collider: String,
    pub ccd: bool,
    pub gravity: [f32; 3],
    /// Edge length of the invisible fixed box that contains the field
    pub containment_size: f32,
}

impl Default for BodyDesc {
    fn default() -> Self {
        Self {
            mass: BODY_MASS,
            linear_damping: DAMPING,
            angular_damping: DAMPING,
            restitution: RESTITUTION,
            friction: FRICTION,
            collider: "ball".to_string(),
            ccd: true,
            gravity: [0.0, 0.0, 0.0],
            containment_size: CONTAINMENT_SIZE,
        }
    }
}

/// Everything needed to build a scene
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub shape_count: usize,
    pub material_count: usize,
    pub color_count: usize,
    pub spawn_radius: f32,
    pub shape_size: f32,
    pub seed: u32,
    pub profile: InputProfile,
    pub controller: ControllerConfig,
    pub body: BodyDesc,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape_count: SHAPE_COUNT,
            material_count: MATERIAL_TYPES.len(),
            color_count: COLORS_PER_SCHEME,
            spawn_radius: SPAWN_RADIUS,
            shape_size: SHAPE_SIZE,
            seed: DEFAULT_SEED,
            profile: InputProfile::Pointer,
            controller: ControllerConfig::default(),
            body: BodyDesc::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a (possibly partial) JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SceneConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.shape_count == 0 || self.shape_count > MAX_SHAPE_COUNT {
            return Err(format!(
                "shape_count must be in 1..={}, got {}",
                MAX_SHAPE_COUNT, self.shape_count
            ));
        }
        if self.material_count == 0 || self.material_count > MATERIAL_TYPES.len() {
            return Err(format!(
                "material_count must be in 1..={}, got {}",
                MATERIAL_TYPES.len(),
                self.material_count
            ));
        }
        if self.color_count == 0 || self.color_count > COLORS_PER_SCHEME {
            return Err(format!(
                "color_count must be in 1..={}, got {}",
                COLORS_PER_SCHEME, self.color_count
            ));
        }
        if !(self.spawn_radius >= 0.0) || !self.spawn_radius.is_finite() {
            return Err(format!("spawn_radius must be finite and >= 0, got {}", self.spawn_radius));
        }
        if !(self.shape_size > 0.0) {
            return Err(format!("shape_size must be > 0, got {}", self.shape_size));
        }
        self.controller.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_agents_are_touch() {
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
        let android = "Mozilla/5.0 (Linux; Android 14; Pixel 8) Chrome/120.0 Mobile";
        assert_eq!(InputProfile::from_user_agent(iphone), InputProfile::Touch);
        assert_eq!(InputProfile::from_user_agent(android), InputProfile::Touch);
        assert_eq!(InputProfile::from_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"), InputProfile::Touch);
    }

    #[test]
    fn desktop_agents_are_pointer() {
        let firefox = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
        assert_eq!(InputProfile::from_user_agent(firefox), InputProfile::Pointer);
        assert_eq!(InputProfile::from_user_agent(""), InputProfile::Pointer);
    }

    #[test]
    fn thresholds_depend_on_profile() {
        let cfg = ControllerConfig::default();
        assert_eq!(cfg.movement_threshold(InputProfile::Pointer), 0.002);
        assert_eq!(cfg.movement_threshold(InputProfile::Touch), 0.0005);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SceneConfig::from_json(r#"{"shape_count": 9, "controller": {"click_force": 10.0}}"#).unwrap();
        assert_eq!(cfg.shape_count, 9);
        assert_eq!(cfg.controller.click_force, 10.0);
        assert_eq!(cfg.controller.repulsion_strength, REPULSION_STRENGTH);
        assert_eq!(cfg.spawn_radius, SPAWN_RADIUS);
        assert_eq!(cfg.profile, InputProfile::Pointer);
    }

    #[test]
    fn profile_parses_lowercase() {
        let cfg = SceneConfig::from_json(r#"{"profile": "touch"}"#).unwrap();
        assert!(cfg.profile.is_touch());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(SceneConfig::from_json(r#"{"shape_count": 0}"#).is_err());
        assert!(SceneConfig::from_json(r#"{"material_count": 4}"#).is_err());
        assert!(SceneConfig::from_json(r#"{"controller": {"rotation_duration": 0.0}}"#).is_err());
        assert!(SceneConfig::from_json("not json").is_err());
    }

    #[test]
    fn oversized_shape_count_is_rejected() {
        assert!(SceneConfig::from_json(r#"{"shape_count": 18446744073709551615}"#).is_err());
        let too_many = format!(r#"{{"shape_count": {}}}"#, MAX_SHAPE_COUNT + 1);
        assert!(SceneConfig::from_json(&too_many).is_err());
        let at_limit = format!(r#"{{"shape_count": {}}}"#, MAX_SHAPE_COUNT);
        assert!(SceneConfig::from_json(&at_limit).is_ok());
    }

    #[test]
    fn body_desc_round_trips_through_scene_json() {
        let cfg = SceneConfig::default();
        let parsed = SceneConfig::from_json(&cfg.to_json()).unwrap();
        assert_eq!(parsed.body, cfg.body);
        assert_eq!(parsed.body.collider, "ball");
    }
}
