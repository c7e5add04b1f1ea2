use crate::api::host::EffectHost;
use crate::config::FxConfig;
use crate::gesture::events::GestureEvent;

/// Turns gesture events into visual feedback on an `EffectHost`.
#[derive(Debug, Clone, Copy)]
pub struct Feedback {
    /// Explosions spawned when a pinch is released.
    pub burst_count: u32,
    /// Seconds a released trail keeps fading before it is destroyed.
    pub trail_fade: f32,
}

impl Feedback {
    pub fn new(config: &FxConfig) -> Self {
        Self {
            burst_count: config.pinch.burst_count,
            trail_fade: config.trail.fade_time,
        }
    }

    pub fn apply<H: EffectHost + ?Sized>(&self, events: &[GestureEvent], host: &mut H) {
        for event in events {
            match *event {
                GestureEvent::Tap { world, .. } => {
                    host.spawn_explosion(world);
                }
                GestureEvent::DragEnd { trail, .. } => {
                    host.release(trail, self.trail_fade);
                }
                GestureEvent::PinchEnd { vortex, position, scale } => {
                    for _ in 0..self.burst_count {
                        if let Some(explosion) = host.spawn_explosion(position) {
                            host.set_scale(explosion, scale);
                        }
                    }
                    host.release(vortex, 0.0);
                }
                GestureEvent::PinchCancel { vortex } => {
                    host.release(vortex, 0.0);
                }
                GestureEvent::DragUpdate { .. } | GestureEvent::PinchUpdate { .. } => {}
            }
        }
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new(&FxConfig::with_default_effects())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{EffectKind, TouchId};
    use crate::gesture::testing::RecordingHost;
    use glam::Vec2;

    #[test]
    fn tap_spawns_one_explosion_at_world_position() {
        let mut host = RecordingHost::new();
        Feedback::default().apply(
            &[GestureEvent::Tap { id: TouchId(1), screen: Vec2::ZERO, world: Vec2::new(3.0, 4.0) }],
            &mut host,
        );
        assert_eq!(host.spawned(EffectKind::Explosion), 1);
        let e = host.pool.iter().next().unwrap();
        assert_eq!(e.position, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn pinch_end_bursts_at_vortex_scale() {
        let mut host = RecordingHost::new();
        let vortex = host.spawn_vortex(Vec2::new(50.0, 0.0)).unwrap();
        host.set_scale(vortex, 3.0);

        Feedback::default().apply(
            &[GestureEvent::PinchEnd { vortex, position: Vec2::new(50.0, 0.0), scale: 3.0 }],
            &mut host,
        );

        assert_eq!(host.spawned(EffectKind::Explosion), 10);
        assert!(host
            .pool
            .iter()
            .filter(|e| e.kind == EffectKind::Explosion)
            .all(|e| e.scale == 3.0 && e.position == Vec2::new(50.0, 0.0)));
        assert!(host.pool.get(vortex).is_none());
    }

    #[test]
    fn pinch_cancel_releases_without_burst() {
        let mut host = RecordingHost::new();
        let vortex = host.spawn_vortex(Vec2::ZERO).unwrap();
        Feedback::default().apply(&[GestureEvent::PinchCancel { vortex }], &mut host);
        assert_eq!(host.spawned(EffectKind::Explosion), 0);
        assert_eq!(host.released(), vec![(vortex, 0.0)]);
    }

    #[test]
    fn drag_end_fades_trail() {
        let mut host = RecordingHost::new();
        let trail = host.spawn_trail(Vec2::ZERO).unwrap();
        let feedback = Feedback { burst_count: 10, trail_fade: 0.75 };
        feedback.apply(&[GestureEvent::DragEnd { id: TouchId(1), trail }], &mut host);
        assert_eq!(host.released(), vec![(trail, 0.75)]);
        assert!(host.pool.get(trail).is_some());
    }
}
