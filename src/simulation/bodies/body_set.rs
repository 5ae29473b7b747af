use glam::Vec3;

/// Index of a body inside a `BodySet`
pub type BodyId = usize;

/// The slice of a rigid-body engine the controllers rely on.
///
/// Impulses are additive and take effect on the next physics step.
/// A body that is not registered (yet) reports `None` from `translation`
/// and ignores commands; callers skip it for the tick.
pub trait BodySet {
    /// Create a body at `position` and return its handle
    fn spawn(&mut self, position: Vec3) -> BodyId;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn translation(&self, id: BodyId) -> Option<Vec3>;

    /// Every body's translation, indexed by `BodyId`
    fn translations(&self) -> Vec<Option<Vec3>> {
        (0..self.len()).map(|id| self.translation(id)).collect()
    }

    /// Returns false when `id` is unknown
    fn apply_impulse(&mut self, id: BodyId, impulse: Vec3, wake: bool) -> bool;

    /// Returns false when `id` is unknown
    fn set_translation(&mut self, id: BodyId, position: Vec3) -> bool;

    /// Advance integration. Engines driven by the host do this themselves.
    fn step(&mut self, _dt: f32) {}
}
