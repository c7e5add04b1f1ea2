use crate::api::host::EffectHost;
use crate::api::types::{EffectHandle, TouchId};
use crate::config::{FxConfig, PinchConfig};
use crate::error::ConfigError;
use crate::gesture::events::GestureEvent;
use crate::gesture::pinch::{PinchState, PinchTracker};
use crate::gesture::trail::TrailMap;
use crate::input::touch::TouchPoint;
use crate::renderer::camera::ScreenToWorld;

/// Turns per-frame touch snapshots into gesture events.
///
/// The recognizer owns the trail map and the pinch state; nothing else
/// persists between ticks. Effects are spawned and moved through the
/// `EffectHost` passed to `tick`.
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    trails: TrailMap,
    pinch: PinchTracker,
}

impl GestureRecognizer {
    pub fn new(pinch: PinchConfig) -> Self {
        Self {
            trails: TrailMap::new(),
            pinch: PinchTracker::new(pinch),
        }
    }

    /// Build a recognizer from a startup config, refusing incomplete ones.
    pub fn from_config(config: &FxConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.pinch))
    }

    /// Process one frame of touches. Pinch events come first, then per-touch
    /// taps and drags in touch order.
    pub fn tick<H, P>(
        &mut self,
        touches: &[TouchPoint],
        host: &mut H,
        projection: &P,
    ) -> Vec<GestureEvent>
    where
        H: EffectHost + ?Sized,
        P: ScreenToWorld + ?Sized,
    {
        let mut events = Vec::new();

        // Fingers of a two-finger pinch never count as taps
        let pinch_fingers = match (touches.len(), self.pinch.state().anchors()) {
            (2, Some(anchors)) => Some(anchors.ids()),
            _ => None,
        };

        self.pinch.update(touches, host, projection, &mut events);

        for touch in touches {
            let pinching = pinch_fingers.is_some_and(|ids| ids.contains(&touch.id));
            if touch.is_tap() && !pinching {
                events.push(GestureEvent::Tap {
                    id: touch.id,
                    screen: touch.position,
                    world: projection.screen_to_world(touch.position),
                });
            }
            self.trails.update(touch, host, projection, &mut events);
        }

        events
    }

    /// Forget all gesture state (e.g. the surface lost focus). Tracked effects
    /// are released immediately.
    pub fn reset<H: EffectHost + ?Sized>(&mut self, host: &mut H) {
        for (_, trail) in self.trails.take_all() {
            host.release(trail, 0.0);
        }
        if let Some(vortex) = self.pinch.reset() {
            host.release(vortex, 0.0);
        }
    }

    pub fn trail(&self, id: TouchId) -> Option<EffectHandle> {
        self.trails.get(id)
    }

    pub fn active_trails(&self) -> usize {
        self.trails.len()
    }

    pub fn pinch(&self) -> &PinchState {
        self.pinch.state()
    }
}
