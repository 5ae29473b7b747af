//! HostBodies - bodies owned by the host's physics engine
//!
//! Translations arrive once per frame through `sync`. Commands leave through a
//! flat f32 buffer the host reads after each tick, `COMMAND_STRIDE` floats per
//! body:
//!
//! `[impulse_x, impulse_y, impulse_z, wake, snap, snap_x, snap_y, snap_z]`
//!
//! `wake` and `snap` are 0.0 / 1.0 flags. The host applies the impulse first,
//! then the snap if set.

use glam::Vec3;

use super::body_set::{BodyId, BodySet};

pub const COMMAND_STRIDE: usize = 8;

#[derive(Default)]
pub struct HostBodies {
    translations: Vec<Option<Vec3>>,
    commands: Vec<f32>,
}

impl HostBodies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy translations from the host, 3 floats per body.
    ///
    /// A NaN component marks a body the host has not registered yet.
    /// Returns the number of bodies updated.
    pub fn sync(&mut self, flat: &[f32]) -> usize {
        let mut updated = 0;
        for (slot, xyz) in self.translations.iter_mut().zip(flat.chunks_exact(3)) {
            *slot = if xyz.iter().all(|c| c.is_finite()) {
                Some(Vec3::new(xyz[0], xyz[1], xyz[2]))
            } else {
                None
            };
            updated += 1;
        }
        updated
    }

    /// Mark a body as gone (the host destroyed or has not created it)
    pub fn unregister(&mut self, id: BodyId) {
        if let Some(slot) = self.translations.get_mut(id) {
            *slot = None;
        }
    }

    pub fn clear_commands(&mut self) {
        self.commands.iter_mut().for_each(|c| *c = 0.0);
    }

    pub fn commands(&self) -> &[f32] {
        &self.commands
    }

    #[inline]
    fn command_mut(&mut self, id: BodyId) -> &mut [f32] {
        let start = id * COMMAND_STRIDE;
        &mut self.commands[start..start + COMMAND_STRIDE]
    }
}

impl BodySet for HostBodies {
    fn spawn(&mut self, position: Vec3) -> BodyId {
        self.translations.push(Some(position));
        self.commands.extend_from_slice(&[0.0; COMMAND_STRIDE]);
        self.translations.len() - 1
    }

    fn len(&self) -> usize {
        self.translations.len()
    }

    fn translation(&self, id: BodyId) -> Option<Vec3> {
        self.translations.get(id).copied().flatten()
    }

    fn apply_impulse(&mut self, id: BodyId, impulse: Vec3, wake: bool) -> bool {
        if self.translation(id).is_none() {
            return false;
        }
        let cmd = self.command_mut(id);
        cmd[0] += impulse.x;
        cmd[1] += impulse.y;
        cmd[2] += impulse.z;
        if wake {
            cmd[3] = 1.0;
        }
        true
    }

    fn set_translation(&mut self, id: BodyId, position: Vec3) -> bool {
        if self.translation(id).is_none() {
            return false;
        }
        self.translations[id] = Some(position);
        let cmd = self.command_mut(id);
        cmd[4] = 1.0;
        cmd[5] = position.x;
        cmd[6] = position.y;
        cmd[7] = position.z;
        true
    }
}
