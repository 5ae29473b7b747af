//! Interaction Detector
//!
//! Pointer velocity, edge-triggered hover and client -> NDC mapping.
//! Ray casting itself belongs to the host (see `simulation::hover`).

use glam::Vec2;

/// Tracks pointer movement between ticks (NDC units per tick)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    pub prev: Vec2,
    pub velocity: Vec2,
}

impl PointerTracker {
    /// Record this tick's pointer position. Runs every tick, hovered or not.
    pub fn sample(&mut self, pointer: Vec2) -> Vec2 {
        self.velocity = pointer - self.prev;
        self.prev = pointer;
        self.velocity
    }
}

/// Change in hover state since the previous tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEdge {
    Entered,
    Left,
    Unchanged,
}

/// Update the sticky `hovered` flag from this tick's ray test and report the edge
pub fn update_hover(hovered: &mut bool, hit: bool) -> HoverEdge {
    if *hovered == hit {
        return HoverEdge::Unchanged;
    }
    *hovered = hit;
    if hit {
        HoverEdge::Entered
    } else {
        HoverEdge::Left
    }
}

/// Client (pixel) coordinates to normalized device coordinates in [-1, 1]²,
/// y pointing up. A zero-sized viewport maps everything to the origin.
pub fn ndc_from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if !(width > 0.0) || !(height > 0.0) {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width) * 2.0 - 1.0,
        -(client_y / height) * 2.0 + 1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_is_delta_from_previous_tick() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.sample(Vec2::new(0.1, 0.0)), Vec2::new(0.1, 0.0));
        let v = tracker.sample(Vec2::new(0.15, -0.05));
        assert!((v - Vec2::new(0.05, -0.05)).length() < 1e-6);
        assert_eq!(tracker.sample(Vec2::new(0.15, -0.05)), Vec2::ZERO);
    }

    #[test]
    fn hover_reports_edges_not_levels() {
        let mut hovered = false;
        assert_eq!(update_hover(&mut hovered, false), HoverEdge::Unchanged);
        assert_eq!(update_hover(&mut hovered, true), HoverEdge::Entered);
        assert!(hovered);
        assert_eq!(update_hover(&mut hovered, true), HoverEdge::Unchanged);
        assert_eq!(update_hover(&mut hovered, false), HoverEdge::Left);
        assert!(!hovered);
    }

    #[test]
    fn client_corners_map_to_ndc_corners() {
        assert_eq!(ndc_from_client(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
        assert_eq!(ndc_from_client(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(ndc_from_client(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    }

    #[test]
    fn empty_viewport_maps_to_origin() {
        assert_eq!(ndc_from_client(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    }
}
