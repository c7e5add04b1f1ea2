use glam::Vec2;
use crate::api::types::TouchId;

/// Lifecycle phase of a touch within the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// The finger touched the screen this frame.
    Began,
    /// The finger moved since the last frame.
    Moved,
    /// The finger is down but did not move.
    Stationary,
    /// The finger was lifted this frame.
    Ended,
    /// The platform stopped tracking the touch (e.g. too many contacts).
    Canceled,
}

impl TouchPhase {
    /// Decode a phase from the numeric code used by the web bridge.
    /// 0 = Began, 1 = Moved, 2 = Stationary, 3 = Ended, 4 = Canceled.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Began),
            1 => Some(Self::Moved),
            2 => Some(Self::Stationary),
            3 => Some(Self::Ended),
            4 => Some(Self::Canceled),
            _ => None,
        }
    }

    /// Whether the touch is leaving the screen this frame.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Ended | Self::Canceled)
    }
}

/// Snapshot of one active touch for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: TouchId,
    /// Position in screen pixels.
    pub position: Vec2,
    pub phase: TouchPhase,
    /// Number of quick successive taps (1 = simple tap).
    pub tap_count: u32,
}

impl TouchPoint {
    pub fn new(id: u32, position: Vec2, phase: TouchPhase) -> Self {
        Self {
            id: TouchId(id),
            position,
            phase,
            tap_count: 0,
        }
    }

    pub fn with_tap_count(mut self, tap_count: u32) -> Self {
        self.tap_count = tap_count;
        self
    }

    /// Ended with a single tap.
    pub fn is_tap(&self) -> bool {
        self.phase == TouchPhase::Ended && self.tap_count == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_codes_decode() {
        assert_eq!(TouchPhase::from_code(0), Some(TouchPhase::Began));
        assert_eq!(TouchPhase::from_code(4), Some(TouchPhase::Canceled));
        assert_eq!(TouchPhase::from_code(9), None);
    }

    #[test]
    fn canceled_is_never_a_tap() {
        let t = TouchPoint::new(1, Vec2::ZERO, TouchPhase::Canceled).with_tap_count(1);
        assert!(t.phase.is_final());
        assert!(!t.is_tap());
    }

    #[test]
    fn double_tap_is_not_a_simple_tap() {
        let t = TouchPoint::new(1, Vec2::ZERO, TouchPhase::Ended).with_tap_count(2);
        assert!(!t.is_tap());
    }
}
