use serde::{Deserialize, Serialize};
use crate::api::types::EffectKind;
use crate::error::ConfigError;

/// Effect and gesture configuration, loaded once at startup from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FxConfig {
    /// The three effect slots. Every slot must be filled.
    pub effects: EffectSlots,
    #[serde(default)]
    pub pinch: PinchConfig,
    #[serde(default)]
    pub trail: TrailConfig,
}

/// Effect descriptors keyed by slot. Slots are optional in the document so a
/// missing one is reported by name instead of as a generic parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectSlots {
    #[serde(default)]
    pub explosion: Option<EffectDescriptor>,
    #[serde(default)]
    pub vortex: Option<EffectDescriptor>,
    #[serde(default)]
    pub trail: Option<EffectDescriptor>,
}

/// Describes one effect the host can instantiate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectDescriptor {
    /// Name the host resolves to a prefab / emitter preset.
    pub name: String,
    /// Seconds until a one-shot effect retires itself. `None` = lives until released.
    #[serde(default)]
    pub lifetime: Option<f32>,
}

impl EffectDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lifetime: None,
        }
    }

    pub fn with_lifetime(mut self, lifetime: f32) -> Self {
        self.lifetime = Some(lifetime);
        self
    }
}

/// Pinch tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinchConfig {
    /// Vortex scale when the fingers are at their anchor distance.
    pub scale_factor: f32,
    /// Explosions spawned when a pinch is released.
    pub burst_count: u32,
    /// Anchor separations below this (screen px) are degenerate.
    pub min_anchor_distance: f32,
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self {
            scale_factor: 1.5,
            burst_count: 10,
            min_anchor_distance: 1.0,
        }
    }
}

/// Drag trail tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Seconds a released trail lingers so it can fade out.
    pub fade_time: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self { fade_time: 0.5 }
    }
}

impl FxConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FxConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// A fully populated config with default names, handy for hosts that
    /// resolve effects by kind rather than by name.
    pub fn with_default_effects() -> Self {
        Self {
            effects: EffectSlots {
                explosion: Some(EffectDescriptor::new("explosion").with_lifetime(1.0)),
                vortex: Some(EffectDescriptor::new("vortex")),
                trail: Some(EffectDescriptor::new("trail")),
            },
            pinch: PinchConfig::default(),
            trail: TrailConfig::default(),
        }
    }

    /// Check that every effect slot is filled and tuning values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in EffectKind::ALL {
            match self.effect(kind) {
                Some(desc) if !desc.name.trim().is_empty() => {
                    if let Some(lifetime) = desc.lifetime {
                        if !(lifetime > 0.0) {
                            return Err(ConfigError::InvalidValue {
                                field: "effects.*.lifetime",
                                reason: format!("{} lifetime must be positive, got {}", kind.slot(), lifetime),
                            });
                        }
                    }
                }
                _ => return Err(ConfigError::MissingEffect { slot: kind.slot() }),
            }
        }

        if !(self.pinch.scale_factor.is_finite() && self.pinch.scale_factor > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "pinch.scale_factor",
                reason: format!("must be a positive number, got {}", self.pinch.scale_factor),
            });
        }
        if !(self.pinch.min_anchor_distance >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "pinch.min_anchor_distance",
                reason: format!("must be >= 0, got {}", self.pinch.min_anchor_distance),
            });
        }
        if !(self.trail.fade_time >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "trail.fade_time",
                reason: format!("must be >= 0, got {}", self.trail.fade_time),
            });
        }
        Ok(())
    }

    /// Descriptor for an effect slot.
    pub fn effect(&self, kind: EffectKind) -> Option<&EffectDescriptor> {
        match kind {
            EffectKind::Explosion => self.effects.explosion.as_ref(),
            EffectKind::Vortex => self.effects.vortex.as_ref(),
            EffectKind::Trail => self.effects.trail.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "effects": {
                "explosion": { "name": "boom", "lifetime": 0.8 },
                "vortex": { "name": "swirl" },
                "trail": { "name": "streak" }
            },
            "pinch": { "scale_factor": 2.0, "burst_count": 4, "min_anchor_distance": 3.0 },
            "trail": { "fade_time": 0.25 }
        }"#;
        let config = FxConfig::from_json(json).unwrap();
        assert_eq!(config.effect(EffectKind::Explosion).unwrap().name, "boom");
        assert_eq!(config.effect(EffectKind::Explosion).unwrap().lifetime, Some(0.8));
        assert_eq!(config.effect(EffectKind::Vortex).unwrap().lifetime, None);
        assert_eq!(config.pinch.scale_factor, 2.0);
        assert_eq!(config.pinch.burst_count, 4);
        assert_eq!(config.trail.fade_time, 0.25);
    }

    #[test]
    fn tuning_sections_default() {
        let json = r#"{
            "effects": {
                "explosion": { "name": "boom" },
                "vortex": { "name": "swirl" },
                "trail": { "name": "streak" }
            },
            "pinch": { "burst_count": 3 }
        }"#;
        let config = FxConfig::from_json(json).unwrap();
        assert_eq!(config.pinch.scale_factor, 1.5);
        assert_eq!(config.pinch.burst_count, 3);
        assert_eq!(config.trail, TrailConfig::default());
    }

    #[test]
    fn missing_slot_is_fatal() {
        let json = r#"{
            "effects": {
                "explosion": { "name": "boom" },
                "trail": { "name": "streak" }
            }
        }"#;
        match FxConfig::from_json(json) {
            Err(ConfigError::MissingEffect { slot }) => assert_eq!(slot, "vortex"),
            other => panic!("Expected MissingEffect, got {:?}", other),
        }
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let mut config = FxConfig::with_default_effects();
        config.effects.trail = Some(EffectDescriptor::new("  "));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingEffect { slot: "trail" })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = FxConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn rejects_non_positive_scale_factor() {
        let mut config = FxConfig::with_default_effects();
        config.pinch.scale_factor = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "pinch.scale_factor", .. })
        ));
    }

    #[test]
    fn defaults_validate() {
        assert!(FxConfig::with_default_effects().validate().is_ok());
    }
}
