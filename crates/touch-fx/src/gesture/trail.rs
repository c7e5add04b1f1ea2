use std::collections::HashMap;
use crate::api::host::EffectHost;
use crate::api::types::{EffectHandle, TouchId};
use crate::gesture::events::GestureEvent;
use crate::input::touch::{TouchPhase, TouchPoint};
use crate::renderer::camera::ScreenToWorld;

/// Drag trails keyed by touch id. At most one trail per id.
#[derive(Debug, Default)]
pub struct TrailMap {
    trails: HashMap<TouchId, EffectHandle>,
}

impl TrailMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the trail for one touch.
    pub fn update<H, P>(
        &mut self,
        touch: &TouchPoint,
        host: &mut H,
        projection: &P,
        events: &mut Vec<GestureEvent>,
    ) where
        H: EffectHost + ?Sized,
        P: ScreenToWorld + ?Sized,
    {
        match touch.phase {
            TouchPhase::Began => {
                if self.trails.contains_key(&touch.id) {
                    return;
                }
                let world = projection.screen_to_world(touch.position);
                match host.spawn_trail(world) {
                    Some(trail) => {
                        log::debug!("trail {:?} created for touch {:?}", trail, touch.id);
                        self.trails.insert(touch.id, trail);
                    }
                    None => log::warn!("host declined trail for touch {:?}", touch.id),
                }
            }
            TouchPhase::Moved => {
                if let Some(&trail) = self.trails.get(&touch.id) {
                    let world = projection.screen_to_world(touch.position);
                    host.set_position(trail, world);
                    events.push(GestureEvent::DragUpdate { id: touch.id, trail, world });
                }
            }
            TouchPhase::Ended | TouchPhase::Canceled => {
                if let Some(trail) = self.trails.remove(&touch.id) {
                    log::debug!("trail {:?} released for touch {:?}", trail, touch.id);
                    events.push(GestureEvent::DragEnd { id: touch.id, trail });
                }
            }
            TouchPhase::Stationary => {}
        }
    }

    pub fn get(&self, id: TouchId) -> Option<EffectHandle> {
        self.trails.get(&id).copied()
    }

    /// Forget every trail, returning them so the caller can release them.
    pub fn take_all(&mut self) -> Vec<(TouchId, EffectHandle)> {
        self.trails.drain().collect()
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }
}
