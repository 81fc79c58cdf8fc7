use bytemuck::{Pod, Zeroable};

/// Per-view render data read by the TypeScript renderer.
/// Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ViewInstance {
    /// Center X in world space.
    pub x: f32,
    /// Center Y in world space.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub texture: f32,
    /// Packed 0xRRGGBB tint.
    pub tint: f32,
    pub alpha: f32,
    _pad: f32,
}

impl ViewInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(x: f32, y: f32, width: f32, height: f32, texture: f32, tint: f32, alpha: f32) -> Self {
        Self { x, y, width, height, texture, tint, alpha, _pad: 0.0 }
    }
}

/// Visible views for the current frame, in draw order.
pub struct ViewBuffer {
    pub instances: Vec<ViewInstance>,
}

impl ViewBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: ViewInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for host reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for ViewBuffer {
    fn default() -> Self {
        Self::with_capacity(128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<ViewInstance>(), ViewInstance::STRIDE_BYTES);
    }
}
