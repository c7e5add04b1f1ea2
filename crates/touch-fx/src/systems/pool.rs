use glam::Vec2;
use crate::api::host::EffectHost;
use crate::api::types::{EffectHandle, EffectKind};
use crate::config::FxConfig;
use crate::renderer::instance::{EffectBuffer, EffectInstance};

/// A live effect tracked by the pool.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveEffect {
    pub handle: EffectHandle,
    pub kind: EffectKind,
    pub position: Vec2,
    pub scale: f32,
    /// Seconds left before the effect is destroyed. `None` = until released.
    pub remaining: Option<f32>,
}

/// Reference `EffectHost`: flat storage for effects the renderer draws.
/// Designed for small counts (tens of effects), like the touches driving it.
pub struct EffectPool {
    effects: Vec<LiveEffect>,
    lifetimes: [Option<f32>; 3],
    capacity: usize,
    next_handle: u32,
    buffer: EffectBuffer,
}

impl EffectPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            effects: Vec::with_capacity(capacity),
            lifetimes: [None; 3],
            capacity,
            next_handle: 1,
            buffer: EffectBuffer::with_capacity(capacity),
        }
    }

    /// Pool whose one-shot lifetimes come from the effect descriptors.
    pub fn from_config(config: &FxConfig, capacity: usize) -> Self {
        let mut pool = Self::new(capacity);
        for kind in EffectKind::ALL {
            pool.lifetimes[kind as usize] = config.effect(kind).and_then(|d| d.lifetime);
        }
        pool
    }

    /// Advance timers and destroy expired effects.
    pub fn tick(&mut self, dt: f32) {
        self.effects.retain_mut(|e| match e.remaining.as_mut() {
            Some(t) => {
                *t -= dt;
                *t > 0.0
            }
            None => true,
        });
    }

    /// Rebuild the instance buffer from live effects.
    pub fn rebuild_buffer(&mut self) {
        self.buffer.clear();
        for e in &self.effects {
            self.buffer.push(EffectInstance {
                kind: e.kind as u8 as f32,
                x: e.position.x,
                y: e.position.y,
                scale: e.scale,
            });
        }
    }

    pub fn buffer(&self) -> &EffectBuffer {
        &self.buffer
    }

    pub fn get(&self, handle: EffectHandle) -> Option<&LiveEffect> {
        self.effects.iter().find(|e| e.handle == handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LiveEffect> {
        self.effects.iter()
    }

    /// Number of live effects of a given kind.
    pub fn count(&self, kind: EffectKind) -> usize {
        self.effects.iter().filter(|e| e.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
        self.buffer.clear();
    }

    fn get_mut(&mut self, handle: EffectHandle) -> Option<&mut LiveEffect> {
        self.effects.iter_mut().find(|e| e.handle == handle)
    }
}

impl Default for EffectPool {
    fn default() -> Self {
        Self::from_config(&FxConfig::with_default_effects(), 256)
    }
}

impl EffectHost for EffectPool {
    fn spawn(&mut self, kind: EffectKind, position: Vec2) -> Option<EffectHandle> {
        if self.effects.len() >= self.capacity {
            log::warn!("effect pool full ({}), dropping {}", self.capacity, kind.slot());
            return None;
        }
        let handle = EffectHandle(self.next_handle);
        // Handle 0 is never issued
        self.next_handle = self.next_handle.wrapping_add(1).max(1);
        self.effects.push(LiveEffect {
            handle,
            kind,
            position,
            scale: 1.0,
            remaining: self.lifetimes[kind as usize],
        });
        Some(handle)
    }

    fn set_position(&mut self, handle: EffectHandle, position: Vec2) {
        if let Some(e) = self.get_mut(handle) {
            e.position = position;
        }
    }

    fn set_scale(&mut self, handle: EffectHandle, scale: f32) {
        if let Some(e) = self.get_mut(handle) {
            e.scale = scale;
        }
    }

    fn position(&self, handle: EffectHandle) -> Option<Vec2> {
        self.get(handle).map(|e| e.position)
    }

    fn scale(&self, handle: EffectHandle) -> Option<f32> {
        self.get(handle).map(|e| e.scale)
    }

    fn release(&mut self, handle: EffectHandle, delay: f32) {
        if delay <= 0.0 {
            if let Some(idx) = self.effects.iter().position(|e| e.handle == handle) {
                self.effects.swap_remove(idx);
            }
        } else if let Some(e) = self.get_mut(handle) {
            // An earlier deadline wins
            e.remaining = Some(e.remaining.map_or(delay, |t| t.min(delay)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_assigns_unique_handles() {
        let mut pool = EffectPool::default();
        let a = pool.spawn_trail(Vec2::ZERO).unwrap();
        let b = pool.spawn_trail(Vec2::ZERO).unwrap();
        assert_ne!(a, b);
        assert_eq!(pool.count(EffectKind::Trail), 2);
    }

    #[test]
    fn handle_counter_wraps_past_zero() {
        let mut pool = EffectPool::default();
        pool.next_handle = u32::MAX;
        assert_eq!(pool.spawn_trail(Vec2::ZERO), Some(EffectHandle(u32::MAX)));
        assert_eq!(pool.spawn_trail(Vec2::ZERO), Some(EffectHandle(1)));
    }

    #[test]
    fn explosions_retire_after_lifetime() {
        let mut pool = EffectPool::default();
        pool.spawn_explosion(Vec2::new(1.0, 2.0));
        pool.tick(0.5);
        assert_eq!(pool.len(), 1);
        pool.tick(0.6);
        assert!(pool.is_empty());
    }

    #[test]
    fn vortex_lives_until_released() {
        let mut pool = EffectPool::default();
        let v = pool.spawn_vortex(Vec2::ZERO).unwrap();
        pool.tick(100.0);
        assert!(pool.get(v).is_some());
        pool.release(v, 0.0);
        assert!(pool.get(v).is_none());
    }

    #[test]
    fn delayed_release_lets_trail_fade() {
        let mut pool = EffectPool::default();
        let t = pool.spawn_trail(Vec2::ZERO).unwrap();
        pool.release(t, 0.5);
        pool.tick(0.25);
        assert!(pool.get(t).is_some());
        pool.tick(0.3);
        assert!(pool.get(t).is_none());
    }

    #[test]
    fn full_pool_declines_spawn() {
        let mut pool = EffectPool::from_config(&FxConfig::with_default_effects(), 1);
        assert!(pool.spawn_trail(Vec2::ZERO).is_some());
        assert!(pool.spawn_trail(Vec2::ZERO).is_none());
    }

    #[test]
    fn rebuild_buffer_packs_live_effects() {
        let mut pool = EffectPool::default();
        let v = pool.spawn_vortex(Vec2::new(3.0, 4.0)).unwrap();
        pool.set_scale(v, 2.5);
        pool.rebuild_buffer();
        assert_eq!(
            pool.buffer().instances[0],
            EffectInstance { kind: 1.0, x: 3.0, y: 4.0, scale: 2.5 }
        );
    }

    #[test]
    fn unknown_handles_are_ignored() {
        let mut pool = EffectPool::default();
        pool.set_position(EffectHandle(99), Vec2::ONE);
        pool.release(EffectHandle(99), 0.0);
        assert!(pool.position(EffectHandle(99)).is_none());
    }
}
