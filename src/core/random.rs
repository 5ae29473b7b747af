use std::f32::consts::TAU;

use glam::Vec2;

/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Small seeded RNG. Deterministic for a given seed so scenes can be replayed in tests.
#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        // xorshift never leaves the all-zero state
        Self { state: if seed == 0 { 0x9E37_79B9 } else { seed } }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    /// Uniform in [0, 1)
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        // 24 high bits fit exactly in an f32 mantissa
        (self.next_u32() >> 8) as f32 * (1.0 / 16_777_216.0)
    }

    /// Uniform in [0, max)
    #[inline]
    pub fn range(&mut self, max: f32) -> f32 {
        self.next_f32() * max
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Sample a point uniformly over a disk of `radius` centered at the origin.
///
/// Inverse-transform sampling: `r = R * sqrt(u)` keeps areal density flat,
/// a plain `r = R * u` would crowd the center.
pub fn uniform_disk(rng: &mut Rng, radius: f32) -> Vec2 {
    let theta = rng.range(TAU);
    let r = radius * rng.next_f32().sqrt();
    let (sin, cos) = theta.sin_cos();
    Vec2::new(r * cos, r * sin)
}
