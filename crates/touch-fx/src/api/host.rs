use glam::Vec2;
use crate::api::types::{EffectHandle, EffectKind};

/// The contract a visual-effect backend must fulfill.
///
/// The recognizer asks the host to spawn effects and keeps the returned
/// handles; it later repositions, rescales and releases them. Hosts are free
/// to decline a spawn by returning `None` (e.g. a pool at capacity).
pub trait EffectHost {
    /// Instantiate an effect of the given kind at a world position.
    fn spawn(&mut self, kind: EffectKind, position: Vec2) -> Option<EffectHandle>;

    /// Move a live effect. Unknown handles are ignored.
    fn set_position(&mut self, handle: EffectHandle, position: Vec2);

    /// Set the uniform scale of a live effect. Unknown handles are ignored.
    fn set_scale(&mut self, handle: EffectHandle, scale: f32);

    /// Current world position of a live effect.
    fn position(&self, handle: EffectHandle) -> Option<Vec2>;

    /// Current uniform scale of a live effect.
    fn scale(&self, handle: EffectHandle) -> Option<f32>;

    /// Destroy the effect after `delay` seconds (0 = immediately).
    fn release(&mut self, handle: EffectHandle, delay: f32);

    fn spawn_explosion(&mut self, position: Vec2) -> Option<EffectHandle> {
        self.spawn(EffectKind::Explosion, position)
    }

    fn spawn_vortex(&mut self, position: Vec2) -> Option<EffectHandle> {
        self.spawn(EffectKind::Vortex, position)
    }

    fn spawn_trail(&mut self, position: Vec2) -> Option<EffectHandle> {
        self.spawn(EffectKind::Trail, position)
    }
}
