//! Test double for `EffectHost`.

use glam::Vec2;
use crate::api::host::EffectHost;
use crate::api::types::{EffectHandle, EffectKind};
use crate::systems::pool::EffectPool;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Spawn(EffectKind, Vec2),
    SetPosition(EffectHandle, Vec2),
    SetScale(EffectHandle, f32),
    Release(EffectHandle, f32),
}

/// Records every host call and keeps real effect state in an `EffectPool`.
pub struct RecordingHost {
    pub pool: EffectPool,
    pub calls: Vec<Call>,
    declined: Vec<EffectKind>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            pool: EffectPool::default(),
            calls: Vec::new(),
            declined: Vec::new(),
        }
    }

    /// Refuse every spawn of `kind`.
    pub fn declining(mut self, kind: EffectKind) -> Self {
        self.declined.push(kind);
        self
    }

    pub fn spawned(&self, kind: EffectKind) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Spawn(k, _) if *k == kind))
            .count()
    }

    pub fn released(&self) -> Vec<(EffectHandle, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Release(h, d) => Some((*h, *d)),
                _ => None,
            })
            .collect()
    }
}

impl EffectHost for RecordingHost {
    fn spawn(&mut self, kind: EffectKind, position: Vec2) -> Option<EffectHandle> {
        if self.declined.contains(&kind) {
            return None;
        }
        self.calls.push(Call::Spawn(kind, position));
        self.pool.spawn(kind, position)
    }

    fn set_position(&mut self, handle: EffectHandle, position: Vec2) {
        self.calls.push(Call::SetPosition(handle, position));
        self.pool.set_position(handle, position);
    }

    fn set_scale(&mut self, handle: EffectHandle, scale: f32) {
        self.calls.push(Call::SetScale(handle, scale));
        self.pool.set_scale(handle, scale);
    }

    fn position(&self, handle: EffectHandle) -> Option<Vec2> {
        self.pool.position(handle)
    }

    fn scale(&self, handle: EffectHandle) -> Option<f32> {
        self.pool.scale(handle)
    }

    fn release(&mut self, handle: EffectHandle, delay: f32) {
        self.calls.push(Call::Release(handle, delay));
        self.pool.release(handle, delay);
    }
}
