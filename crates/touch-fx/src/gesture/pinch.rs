//! Two-finger pinch tracking.
//!
//! A pinch is armed when exactly two touches begin in the same tick. The first
//! moving tick spawns a vortex between the anchor fingers; every moving tick
//! after that rescales it by the ratio of current to anchor separation.

use glam::Vec2;
use crate::api::host::EffectHost;
use crate::api::types::{EffectHandle, TouchId};
use crate::config::PinchConfig;
use crate::gesture::events::GestureEvent;
use crate::input::touch::{TouchPhase, TouchPoint};
use crate::renderer::camera::ScreenToWorld;

/// The two touches captured when a pinch begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub first: TouchPoint,
    pub second: TouchPoint,
}

impl Anchors {
    pub fn new(first: TouchPoint, second: TouchPoint) -> Self {
        Self { first, second }
    }

    /// Baseline separation in screen pixels.
    pub fn distance(&self) -> f32 {
        self.first.position.distance(self.second.position)
    }

    /// Whether `a` and `b` are the anchor fingers, in either order.
    pub fn matches(&self, a: &TouchPoint, b: &TouchPoint) -> bool {
        let (x, y) = (self.first.id, self.second.id);
        (a.id == x && b.id == y) || (a.id == y && b.id == x)
    }

    pub fn ids(&self) -> [TouchId; 2] {
        [self.first.id, self.second.id]
    }

    /// Midpoint of the projected anchor positions.
    pub fn world_midpoint<P: ScreenToWorld + ?Sized>(&self, projection: &P) -> Vec2 {
        let a = projection.screen_to_world(self.first.position);
        let b = projection.screen_to_world(self.second.position);
        a.lerp(b, 0.5)
    }
}

/// Pinch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PinchState {
    /// No pinch in progress.
    #[default]
    Idle,
    /// Two fingers went down together; no vortex yet.
    Armed { anchors: Anchors },
    /// The vortex exists and follows the finger separation.
    Active {
        anchors: Anchors,
        vortex: EffectHandle,
        position: Vec2,
        scale: f32,
    },
}

impl PinchState {
    pub fn anchors(&self) -> Option<&Anchors> {
        match self {
            Self::Idle => None,
            Self::Armed { anchors } | Self::Active { anchors, .. } => Some(anchors),
        }
    }

    pub fn vortex(&self) -> Option<EffectHandle> {
        match self {
            Self::Active { vortex, .. } => Some(*vortex),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Owns the pinch state and advances it once per tick.
#[derive(Debug, Default)]
pub struct PinchTracker {
    config: PinchConfig,
    state: PinchState,
}

impl PinchTracker {
    pub fn new(config: PinchConfig) -> Self {
        Self {
            config,
            state: PinchState::Idle,
        }
    }

    pub fn state(&self) -> &PinchState {
        &self.state
    }

    pub fn config(&self) -> &PinchConfig {
        &self.config
    }

    /// Advance the pinch for this tick's touches.
    pub fn update<H, P>(
        &mut self,
        touches: &[TouchPoint],
        host: &mut H,
        projection: &P,
        events: &mut Vec<GestureEvent>,
    ) where
        H: EffectHost + ?Sized,
        P: ScreenToWorld + ?Sized,
    {
        let state = std::mem::take(&mut self.state);

        let [a, b] = match touches {
            [a, b] => [a, b],
            _ => {
                self.leave_two_finger_mode(state, touches.len(), events);
                return;
            }
        };

        let state = match state {
            PinchState::Armed { anchors } | PinchState::Active { anchors, .. }
                if !anchors.matches(a, b) =>
            {
                log::warn!("pinch finger pair changed, cancelling");
                Self::cancel(state, events);
                PinchState::Idle
            }
            other => other,
        };

        self.state = match state {
            PinchState::Idle => {
                if a.phase == TouchPhase::Began && b.phase == TouchPhase::Began {
                    log::info!("pinch armed by touches {:?} and {:?}", a.id, b.id);
                    PinchState::Armed { anchors: Anchors::new(*a, *b) }
                } else {
                    PinchState::Idle
                }
            }
            _ if a.phase.is_final() || b.phase.is_final() => {
                Self::release(state, events);
                PinchState::Idle
            }
            PinchState::Armed { anchors } => {
                if Self::moving(a, b) {
                    self.activate(anchors, a, b, host, projection, events)
                } else {
                    state
                }
            }
            PinchState::Active { anchors, vortex, position, .. } if Self::moving(a, b) => {
                let ratio = a.position.distance(b.position) / anchors.distance();
                let scale = ratio * self.config.scale_factor;
                host.set_scale(vortex, scale);
                events.push(GestureEvent::PinchUpdate { vortex, ratio, scale });
                PinchState::Active { anchors, vortex, position, scale }
            }
            PinchState::Active { .. } => state,
        };
    }

    /// Drop any pinch without emitting events, returning the vortex if one was live.
    pub fn reset(&mut self) -> Option<EffectHandle> {
        std::mem::take(&mut self.state).vortex()
    }

    /// First moving tick of an armed pinch: spawn the vortex, or re-anchor if
    /// the fingers started on top of each other.
    fn activate<H, P>(
        &self,
        anchors: Anchors,
        a: &TouchPoint,
        b: &TouchPoint,
        host: &mut H,
        projection: &P,
        events: &mut Vec<GestureEvent>,
    ) -> PinchState
    where
        H: EffectHost + ?Sized,
        P: ScreenToWorld + ?Sized,
    {
        let eps = self.config.min_anchor_distance.max(f32::EPSILON);
        if anchors.distance() < eps {
            let current = a.position.distance(b.position);
            return if current >= eps {
                log::debug!("degenerate pinch anchors, re-anchoring at separation {}", current);
                PinchState::Armed { anchors: Anchors::new(*a, *b) }
            } else {
                log::debug!("degenerate pinch anchors, skipping update");
                PinchState::Armed { anchors }
            };
        }

        let position = anchors.world_midpoint(projection);
        let Some(vortex) = host.spawn_vortex(position) else {
            log::warn!("host declined vortex, pinch stays armed");
            return PinchState::Armed { anchors };
        };

        let ratio = a.position.distance(b.position) / anchors.distance();
        let scale = ratio * self.config.scale_factor;
        host.set_scale(vortex, scale);
        events.push(GestureEvent::PinchUpdate { vortex, ratio, scale });
        log::info!("pinch active, vortex {:?} at {:?}", vortex, position);
        PinchState::Active { anchors, vortex, position, scale }
    }

    fn leave_two_finger_mode(
        &self,
        state: PinchState,
        count: usize,
        events: &mut Vec<GestureEvent>,
    ) {
        if state.is_idle() {
            return;
        }
        if count > 2 {
            log::warn!("{} touches during pinch, cancelling", count);
            Self::cancel(state, events);
        } else {
            Self::release(state, events);
        }
    }

    fn release(state: PinchState, events: &mut Vec<GestureEvent>) {
        if let PinchState::Active { vortex, position, scale, .. } = state {
            log::info!("pinch released, vortex {:?} scale {}", vortex, scale);
            events.push(GestureEvent::PinchEnd { vortex, position, scale });
        }
    }

    fn cancel(state: PinchState, events: &mut Vec<GestureEvent>) {
        if let Some(vortex) = state.vortex() {
            events.push(GestureEvent::PinchCancel { vortex });
        }
    }

    fn moving(a: &TouchPoint, b: &TouchPoint) -> bool {
        a.phase == TouchPhase::Moved || b.phase == TouchPhase::Moved
    }
}
