use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use crate::api::types::TextureId;
use crate::components::color::Rgb;

/// A single brush stamp in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stamp {
    pub texture: TextureId,
    pub pos: Vec2,
    pub scale: f32,
    pub tint: Rgb,
    pub alpha: f32,
}

/// Anything paint can be laid onto.
pub trait DrawingSurface {
    /// Stamp a texture's pixels at a canvas-local position.
    fn draw(&mut self, stamp: Stamp);
    /// Clear the whole surface to a solid color.
    fn fill(&mut self, color: Rgb);
}

/// Canvas command replayed by the TypeScript render texture.
/// Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CanvasCommand {
    /// `KIND_FILL` or `KIND_DRAW`.
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    pub texture: f32,
    pub scale: f32,
    /// Packed 0xRRGGBB.
    pub color: f32,
    pub alpha: f32,
    _pad: f32,
}

impl CanvasCommand {
    pub const FLOATS: usize = 8;
    pub const KIND_FILL: f32 = 1.0;
    pub const KIND_DRAW: f32 = 2.0;
}

/// Per-frame list of canvas commands, drained by the host after each tick.
pub struct CanvasCommands {
    commands: Vec<CanvasCommand>,
}

impl CanvasCommands {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn as_slice(&self) -> &[CanvasCommand] {
        &self.commands
    }

    /// Raw pointer to command data for host reads.
    pub fn as_ptr(&self) -> *const f32 {
        self.commands.as_ptr() as *const f32
    }
}

impl Default for CanvasCommands {
    fn default() -> Self {
        Self::with_capacity(4096)
    }
}

impl DrawingSurface for CanvasCommands {
    fn draw(&mut self, stamp: Stamp) {
        self.commands.push(CanvasCommand {
            kind: CanvasCommand::KIND_DRAW,
            x: stamp.pos.x,
            y: stamp.pos.y,
            texture: stamp.texture.0 as f32,
            scale: stamp.scale,
            color: stamp.tint.to_f32(),
            alpha: stamp.alpha,
            _pad: 0.0,
        });
    }

    fn fill(&mut self, color: Rgb) {
        // A fill hides everything queued before it this frame.
        self.commands.clear();
        self.commands.push(CanvasCommand {
            kind: CanvasCommand::KIND_FILL,
            color: color.to_f32(),
            alpha: 1.0,
            ..CanvasCommand::default()
        });
    }
}

/// Placement of the paintable area in world space. The canvas is anchored at its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub center: Vec2,
    pub size: Vec2,
}

impl CanvasRect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// World-space top-left corner.
    pub fn origin(&self) -> Vec2 {
        self.center - self.size * 0.5
    }

    /// Translate a device/world point into canvas-local coordinates.
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        point - self.origin()
    }

    /// Whether a canvas-local point falls on the canvas.
    pub fn contains_local(&self, local: Vec2) -> bool {
        local.x >= 0.0 && local.y >= 0.0 && local.x <= self.size.x && local.y <= self.size.y
    }
}
