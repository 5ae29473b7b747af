//! Domain data: tuning constants, configuration, color palettes

pub mod config;
pub mod constants;
pub mod palette;
