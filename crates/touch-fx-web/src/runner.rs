use glam::Vec2;
use touch_fx::{
    Camera2D, ConfigError, EffectPool, EventRecord, Feedback, FxConfig,
    GestureEvent, GestureRecognizer, TouchFrame, TouchPoint,
};

/// Maximum number of live effects the pool will hold.
pub const MAX_EFFECTS: usize = 512;

/// Wires the gesture recognizer, feedback and effect pool into a frame loop.
///
/// JavaScript reports touch changes as they happen; `tick` runs once per
/// animation frame over every touch that is still down.
pub struct GestureRunner {
    recognizer: GestureRecognizer,
    feedback: Feedback,
    pool: EffectPool,
    camera: Camera2D,
    frame: TouchFrame,
    /// World size the camera fits into the viewport.
    world: Vec2,
    /// Events from the most recent tick, flattened for JavaScript.
    event_buffer: Vec<EventRecord>,
}

impl GestureRunner {
    /// Build a runner. Fails if the effect configuration is incomplete or the
    /// world has no area.
    pub fn new(config: &FxConfig, world_width: f32, world_height: f32) -> Result<Self, ConfigError> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !(usable(world_width) && usable(world_height)) {
            return Err(ConfigError::InvalidValue {
                field: "world",
                reason: format!("must be positive and finite, got {}x{}", world_width, world_height),
            });
        }
        let recognizer = GestureRecognizer::from_config(config)?;
        Ok(Self {
            recognizer,
            feedback: Feedback::new(config),
            pool: EffectPool::from_config(config, MAX_EFFECTS),
            camera: Camera2D::new(world_width, world_height),
            frame: TouchFrame::new(),
            world: Vec2::new(world_width, world_height),
            event_buffer: Vec::with_capacity(32),
        })
    }

    /// Parse the JSON config and build a runner.
    pub fn from_json(json: &str, world_width: f32, world_height: f32) -> Result<Self, ConfigError> {
        let config = FxConfig::from_json(json)?;
        Self::new(&config, world_width, world_height)
    }

    /// Record a touch change reported by the browser.
    pub fn push_touch(&mut self, touch: TouchPoint) {
        self.frame.push(touch);
    }

    /// Canvas resized (pixels).
    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height, self.world.x, self.world.y);
    }

    /// Drop every touch and tracked effect (e.g. the page lost focus).
    pub fn reset(&mut self) {
        self.frame.clear();
        self.recognizer.reset(&mut self.pool);
    }

    /// Run one frame: recognize gestures, apply feedback, age effects.
    pub fn tick(&mut self, dt: f32) -> Vec<GestureEvent> {
        let events = self.recognizer.tick(self.frame.as_slice(), &mut self.pool, &self.camera);
        self.feedback.apply(&events, &mut self.pool);
        self.frame.advance();

        self.pool.tick(dt);
        self.pool.rebuild_buffer();

        self.event_buffer.clear();
        self.event_buffer.extend(events.iter().map(GestureEvent::to_record));
        events
    }

    pub fn pool(&self) -> &EffectPool {
        &self.pool
    }

    pub fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn effects_ptr(&self) -> *const f32 {
        self.pool.buffer().instances_ptr()
    }

    pub fn effect_count(&self) -> u32 {
        self.pool.buffer().instance_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.event_buffer.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.event_buffer.len() as u32
    }
}
