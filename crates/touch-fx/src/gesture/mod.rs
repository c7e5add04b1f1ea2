//! Gesture recognition: taps, drag trails and two-finger pinches.

pub mod events;
pub mod pinch;
pub mod recognizer;
pub mod trail;

#[cfg(test)]
pub(crate) mod testing;

pub use events::GestureEvent;
pub use pinch::{Anchors, PinchState, PinchTracker};
pub use recognizer::GestureRecognizer;
pub use trail::TrailMap;
