use bytemuck::{Pod, Zeroable};

/// Identifier of a physical contact, stable from touch-down until release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchId(pub u32);

/// Opaque handle to a visual effect spawned by an `EffectHost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectHandle(pub u32);

/// The three effect slots the recognizer knows how to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EffectKind {
    Explosion = 0,
    Vortex = 1,
    Trail = 2,
}

impl EffectKind {
    pub const ALL: [EffectKind; 3] = [Self::Explosion, Self::Vortex, Self::Trail];

    /// Config slot name, used in error messages and logs.
    pub fn slot(&self) -> &'static str {
        match self {
            Self::Explosion => "explosion",
            Self::Vortex => "vortex",
            Self::Trail => "trail",
        }
    }
}

/// A gesture event flattened for JavaScript via a shared buffer.
/// `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EventRecord {
    pub const FLOATS: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_record_is_4_floats() {
        assert_eq!(std::mem::size_of::<EventRecord>(), EventRecord::FLOATS * 4);
    }

    #[test]
    fn effect_slots_are_distinct() {
        let slots: Vec<&str> = EffectKind::ALL.iter().map(|k| k.slot()).collect();
        assert_eq!(slots, vec!["explosion", "vortex", "trail"]);
    }
}
