//! DampedBodies - headless point-mass integrator
//!
//! Stands in for the host engine when there is none (native runs, tests,
//! headless facade). Impulse in, damped velocity, explicit Euler out.
//! No collisions between bodies; only the containment box is enforced.

use glam::Vec3;

use crate::domain::config::BodyDesc;

use super::body_set::{BodyId, BodySet};

/// Speed below which a body is put to sleep
const SLEEP_SPEED: f32 = 1e-3;

#[derive(Clone, Copy, Debug)]
pub struct PointBody {
    pub pos: Vec3,
    pub velocity: Vec3,
    pub mass: f32,
    pub sleeping: bool,
}

impl PointBody {
    pub fn new(pos: Vec3, mass: f32) -> Self {
        Self {
            pos,
            velocity: Vec3::ZERO,
            mass: mass.max(1e-3),
            sleeping: false,
        }
    }

    /// Apply impulse at center of mass
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse * (1.0 / self.mass);
    }
}

pub struct DampedBodies {
    bodies: Vec<PointBody>,
    mass: f32,
    linear_damping: f32,
    half_extent: f32,
}

impl DampedBodies {
    pub fn new(desc: &BodyDesc) -> Self {
        Self {
            bodies: Vec::new(),
            mass: desc.mass,
            linear_damping: desc.linear_damping.max(0.0),
            half_extent: desc.containment_size * 0.5,
        }
    }

    pub fn body(&self, id: BodyId) -> Option<&PointBody> {
        self.bodies.get(id)
    }

    pub fn velocity(&self, id: BodyId) -> Option<Vec3> {
        self.bodies.get(id).map(|b| b.velocity)
    }
}

impl BodySet for DampedBodies {
    fn spawn(&mut self, position: Vec3) -> BodyId {
        self.bodies.push(PointBody::new(position, self.mass));
        self.bodies.len() - 1
    }

    fn len(&self) -> usize {
        self.bodies.len()
    }

    fn translation(&self, id: BodyId) -> Option<Vec3> {
        self.bodies.get(id).map(|b| b.pos)
    }

    fn apply_impulse(&mut self, id: BodyId, impulse: Vec3, wake: bool) -> bool {
        let Some(body) = self.bodies.get_mut(id) else {
            return false;
        };
        body.apply_impulse(impulse);
        if wake {
            body.sleeping = false;
        }
        true
    }

    fn set_translation(&mut self, id: BodyId, position: Vec3) -> bool {
        let Some(body) = self.bodies.get_mut(id) else {
            return false;
        };
        body.pos = position;
        true
    }

    fn step(&mut self, dt: f32) {
        if !(dt > 0.0) {
            return;
        }
        // Same damping law as rapier: v *= 1 / (1 + dt * damping)
        let damp = 1.0 / (1.0 + dt * self.linear_damping);
        let limit = Vec3::splat(self.half_extent);
        for body in self.bodies.iter_mut() {
            if body.sleeping {
                continue;
            }
            body.velocity *= damp;
            body.pos += body.velocity * dt;

            // Containment box: stop at the wall
            let clamped = body.pos.clamp(-limit, limit);
            if clamped != body.pos {
                body.pos = clamped;
                body.velocity = Vec3::ZERO;
            }

            if body.velocity.length() < SLEEP_SPEED {
                body.velocity = Vec3::ZERO;
                body.sleeping = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bodies() -> DampedBodies {
        DampedBodies::new(&BodyDesc::default())
    }

    #[test]
    fn impulse_is_divided_by_mass() {
        let mut set = bodies();
        let id = set.spawn(Vec3::ZERO);
        assert!(set.apply_impulse(id, Vec3::new(3.0, 0.0, 0.0), true));
        assert_eq!(set.velocity(id), Some(Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn damping_slows_bodies_down() {
        let mut set = bodies();
        let id = set.spawn(Vec3::ZERO);
        set.apply_impulse(id, Vec3::new(3.0, 0.0, 0.0), true);
        set.step(0.1);
        let v = set.velocity(id).unwrap().x;
        assert!(v < 1.0 && v > 0.0);
        assert!(set.translation(id).unwrap().x > 0.0);
    }

    #[test]
    fn unknown_body_is_ignored() {
        let mut set = bodies();
        assert!(!set.apply_impulse(4, Vec3::X, true));
        assert!(!set.set_translation(4, Vec3::X));
        assert_eq!(set.translation(4), None);
    }

    #[test]
    fn containment_box_holds() {
        let mut set = bodies();
        let id = set.spawn(Vec3::new(19.9, 0.0, 0.0));
        set.apply_impulse(id, Vec3::new(3000.0, 0.0, 0.0), true);
        set.step(0.1);
        assert_eq!(set.translation(id).unwrap().x, 20.0);
    }

    #[test]
    fn resting_body_sleeps_until_woken() {
        let mut set = bodies();
        let id = set.spawn(Vec3::ZERO);
        set.step(0.016);
        assert!(set.body(id).unwrap().sleeping);

        set.apply_impulse(id, Vec3::new(0.0, 3.0, 0.0), true);
        set.step(0.016);
        assert!(set.translation(id).unwrap().y > 0.0);
    }
}
