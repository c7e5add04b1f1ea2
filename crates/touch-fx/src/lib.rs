pub mod api;
pub mod config;
pub mod error;
pub mod gesture;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::host::EffectHost;
pub use api::types::{EffectHandle, EffectKind, EventRecord, TouchId};
pub use config::{EffectDescriptor, EffectSlots, FxConfig, PinchConfig, TrailConfig};
pub use error::ConfigError;
pub use gesture::{Anchors, GestureEvent, GestureRecognizer, PinchState};
pub use input::frame::TouchFrame;
pub use input::touch::{TouchPhase, TouchPoint};
pub use renderer::camera::{Camera2D, Identity, ScreenToWorld};
pub use renderer::instance::{EffectBuffer, EffectInstance};
pub use systems::feedback::Feedback;
pub use systems::pool::{EffectPool, LiveEffect};
