//! Systems - per-shape behavior
//!
//! forces/      - pure impulse math
//! rotation     - rotation animation state machine
//! interaction  - pointer velocity, hover edges, NDC mapping
//! neighbors    - throttled crowding scan
//! broadcast    - click signal channel
//! controller   - per-shape, per-tick orchestration

pub mod broadcast;
pub mod controller;
pub mod forces;
pub mod interaction;
pub mod neighbors;
pub mod rotation;
