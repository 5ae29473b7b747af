use glam::Vec3;

use crate::domain::config::ControllerConfig;

/// Correction for a body that has wandered off the z = 0 plane
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriftCorrection {
    pub impulse: Vec3,
    /// Also hard-set z to 0. The impulse alone does not stop accumulated drift.
    pub snap: bool,
}

pub fn drift_correction(z: f32, cfg: &ControllerConfig) -> DriftCorrection {
    if z.abs() <= cfg.z_drift_threshold {
        return DriftCorrection::default();
    }
    DriftCorrection {
        impulse: Vec3::new(0.0, 0.0, -z * cfg.z_correction_gain),
        snap: z.abs() > cfg.z_snap_threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_drift_is_tolerated() {
        let cfg = ControllerConfig::default();
        assert_eq!(drift_correction(0.0, &cfg), DriftCorrection::default());
        assert_eq!(drift_correction(-0.01, &cfg), DriftCorrection::default());
    }

    #[test]
    fn moderate_drift_gets_impulse_only() {
        let cfg = ControllerConfig::default();
        let c = drift_correction(0.03, &cfg);
        assert!((c.impulse.z + 0.024).abs() < 1e-6);
        assert!(!c.snap);
    }

    #[test]
    fn large_drift_also_snaps() {
        let cfg = ControllerConfig::default();
        let c = drift_correction(-0.2, &cfg);
        assert!(c.impulse.z > 0.0);
        assert!(c.snap);
    }
}
