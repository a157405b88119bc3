use bytemuck::{Pod, Zeroable};

/// Per-body render data in viewport pixels (Y-down), 8 floats = 32 bytes stride.
///
/// Hosts upload the whole buffer as-is; the layout is part of the contract.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Body centre X in pixels.
    pub x: f32,
    /// Body centre Y in pixels.
    pub y: f32,
    /// Rotation in radians, counter-clockwise in world space.
    pub rotation: f32,
    /// Body width in pixels.
    pub width: f32,
    /// Body height in pixels.
    pub height: f32,
    /// Bounding envelope width in pixels.
    pub hitbox_width: f32,
    /// Bounding envelope height in pixels.
    pub hitbox_height: f32,
    /// Pointer state: 0 idle, 1 hovered, 2 dragged.
    pub grab: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer holding one instance per body, in roster order.
#[derive(Debug, Clone)]
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(16),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as raw bytes for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
