//! Core building blocks shared by every system
//!
//! - utils/   - logging macros (must be first for macro export!)
//! - random   - deterministic RNG and spawn sampling
//! - camera   - view rays and plane/sphere intersection

#[macro_use]
pub mod utils;
pub mod camera;
pub mod random;
