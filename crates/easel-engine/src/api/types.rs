use bytemuck::{Pod, Zeroable};

/// Identifies a texture known to the host renderer.
///
/// `TextureId::SOLID` is reserved for a plain tinted quad and
/// `TextureId::CANVAS` for the render texture canvas commands are replayed
/// onto. Manifest textures are numbered from 1 in manifest order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

impl TextureId {
    pub const SOLID: TextureId = TextureId(0);
    pub const CANVAS: TextureId = TextureId(u32::MAX);
}

/// A sound event emitted by the game logic.
/// The numeric value maps to a game-defined audio command in the TypeScript AudioManager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

/// A game event communicated from Rust to TypeScript.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32) -> Self {
        Self { kind, a, b: 0.0, c: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_event_is_4_floats() {
        assert_eq!(std::mem::size_of::<GameEvent>(), GameEvent::FLOATS * 4);
    }
}
