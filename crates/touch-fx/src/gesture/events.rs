use glam::Vec2;
use crate::api::types::{EffectHandle, EventRecord, TouchId};

/// Something the recognizer observed this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A touch ended with a tap count of 1.
    Tap { id: TouchId, screen: Vec2, world: Vec2 },
    /// A dragged touch moved its trail.
    DragUpdate { id: TouchId, trail: EffectHandle, world: Vec2 },
    /// A dragged touch lifted. The trail is no longer tracked and should fade out.
    DragEnd { id: TouchId, trail: EffectHandle },
    /// The pinch vortex was rescaled.
    PinchUpdate { vortex: EffectHandle, ratio: f32, scale: f32 },
    /// The pinch was released. `position`/`scale` are the vortex's final state.
    PinchEnd { vortex: EffectHandle, position: Vec2, scale: f32 },
    /// The pinch was abandoned (a third finger joined, or the finger pair changed).
    PinchCancel { vortex: EffectHandle },
}

impl GestureEvent {
    pub const TAP: f32 = 0.0;
    pub const DRAG_UPDATE: f32 = 1.0;
    pub const DRAG_END: f32 = 2.0;
    pub const PINCH_UPDATE: f32 = 3.0;
    pub const PINCH_END: f32 = 4.0;
    pub const PINCH_CANCEL: f32 = 5.0;

    /// Flatten into the four-float record shared with JavaScript.
    pub fn to_record(&self) -> EventRecord {
        match *self {
            Self::Tap { id, world, .. } => EventRecord {
                kind: Self::TAP,
                a: world.x,
                b: world.y,
                c: id.0 as f32,
            },
            Self::DragUpdate { id, world, .. } => EventRecord {
                kind: Self::DRAG_UPDATE,
                a: world.x,
                b: world.y,
                c: id.0 as f32,
            },
            Self::DragEnd { id, trail } => EventRecord {
                kind: Self::DRAG_END,
                a: trail.0 as f32,
                b: 0.0,
                c: id.0 as f32,
            },
            Self::PinchUpdate { vortex, ratio, scale } => EventRecord {
                kind: Self::PINCH_UPDATE,
                a: ratio,
                b: scale,
                c: vortex.0 as f32,
            },
            Self::PinchEnd { position, scale, .. } => EventRecord {
                kind: Self::PINCH_END,
                a: position.x,
                b: position.y,
                c: scale,
            },
            Self::PinchCancel { vortex } => EventRecord {
                kind: Self::PINCH_CANCEL,
                a: vortex.0 as f32,
                b: 0.0,
                c: 0.0,
            },
        }
    }
}
