use bytemuck::{Pod, Zeroable};

/// Per-effect render data written to a shared buffer for the JavaScript renderer.
/// 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EffectInstance {
    /// `EffectKind` discriminant.
    pub kind: f32,
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl EffectInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Packed instances for every live effect, rebuilt once per frame.
pub struct EffectBuffer {
    pub instances: Vec<EffectInstance>,
}

impl EffectBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: EffectInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for shared-memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for EffectBuffer {
    fn default() -> Self {
        Self::with_capacity(256)
    }
}
