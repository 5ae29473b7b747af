//! Global Rotation Broadcaster
//!
//! Single writer (the click handler) / many readers (every shape).
//! Readers keep a `SignalReceiver` cursor and react once per new timestamp.

use glam::Vec2;

use crate::domain::palette::ColorCycle;

/// Latest click, as seen by every shape
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationSignal {
    /// Strictly increasing per trigger. 0 = never triggered.
    pub timestamp: f64,
    pub click_ndc: Vec2,
}

#[derive(Clone, Debug, Default)]
pub struct RotationBroadcaster {
    signal: RotationSignal,
    colors: ColorCycle,
    triggers: u32,
}

impl RotationBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) -> RotationSignal {
        self.signal
    }

    pub fn colors(&self) -> &ColorCycle {
        &self.colors
    }

    pub fn trigger_count(&self) -> u32 {
        self.triggers
    }

    /// Publish a click at clock time `now`.
    ///
    /// The timestamp is bumped past the previous one when the clock has not
    /// advanced (two clicks in the same millisecond), so every trigger is seen.
    /// Also advances the color scheme.
    pub fn trigger(&mut self, now: f64, click_ndc: Vec2) -> RotationSignal {
        let prev = self.signal.timestamp;
        let timestamp = if now > prev { now } else { prev + 1.0 };
        self.signal = RotationSignal { timestamp, click_ndc };
        self.colors.advance();
        self.triggers = self.triggers.saturating_add(1);
        self.signal
    }
}

/// Per-shape cursor over the broadcaster
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SignalReceiver {
    last_seen: f64,
}

impl SignalReceiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_seen(&self) -> f64 {
        self.last_seen
    }

    /// Return the signal if it changed since the last poll. The initial value is ignored.
    pub fn poll(&mut self, signal: RotationSignal) -> Option<RotationSignal> {
        if signal.timestamp <= 0.0 || signal.timestamp == self.last_seen {
            return None;
        }
        self.last_seen = signal.timestamp;
        Some(signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_signal_is_ignored() {
        let broadcaster = RotationBroadcaster::new();
        let mut rx = SignalReceiver::new();
        assert_eq!(rx.poll(broadcaster.signal()), None);
    }

    #[test]
    fn each_trigger_is_observed_once() {
        let mut broadcaster = RotationBroadcaster::new();
        let mut rx = SignalReceiver::new();

        broadcaster.trigger(1_000.0, Vec2::new(0.5, -0.5));
        let seen = rx.poll(broadcaster.signal()).expect("first trigger");
        assert_eq!(seen.click_ndc, Vec2::new(0.5, -0.5));
        assert_eq!(rx.poll(broadcaster.signal()), None);

        broadcaster.trigger(2_000.0, Vec2::ZERO);
        assert!(rx.poll(broadcaster.signal()).is_some());
    }

    #[test]
    fn receivers_are_independent() {
        let mut broadcaster = RotationBroadcaster::new();
        let mut a = SignalReceiver::new();
        let mut b = SignalReceiver::new();
        broadcaster.trigger(10.0, Vec2::ZERO);
        assert!(a.poll(broadcaster.signal()).is_some());
        assert!(b.poll(broadcaster.signal()).is_some());
    }

    #[test]
    fn stalled_clock_still_produces_new_timestamp() {
        let mut broadcaster = RotationBroadcaster::new();
        let first = broadcaster.trigger(500.0, Vec2::ZERO).timestamp;
        let second = broadcaster.trigger(500.0, Vec2::ZERO).timestamp;
        let third = broadcaster.trigger(100.0, Vec2::ZERO).timestamp;
        assert!(second > first);
        assert!(third > second);
    }

    #[test]
    fn zero_clock_still_counts_as_triggered() {
        let mut broadcaster = RotationBroadcaster::new();
        let mut rx = SignalReceiver::new();
        broadcaster.trigger(0.0, Vec2::ZERO);
        assert!(broadcaster.signal().timestamp > 0.0);
        assert!(rx.poll(broadcaster.signal()).is_some());
    }

    #[test]
    fn trigger_advances_color_scheme() {
        let mut broadcaster = RotationBroadcaster::new();
        assert_eq!(broadcaster.colors().index(), 0);
        broadcaster.trigger(1.0, Vec2::ZERO);
        broadcaster.trigger(2.0, Vec2::ZERO);
        assert_eq!(broadcaster.colors().index(), 2);
        assert_eq!(broadcaster.trigger_count(), 2);
    }
}
