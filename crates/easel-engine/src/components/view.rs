use glam::Vec2;
use crate::api::types::TextureId;
use crate::components::color::Rgb;

/// A lightweight handle-owned sprite: the host draws it, the game moves and tints it.
/// Views are anchored at their center.
#[derive(Debug, Clone)]
pub struct View {
    /// Free-form label, used for logs and lookups in tests.
    pub tag: String,
    pub texture: TextureId,
    /// Center position in world space.
    pub pos: Vec2,
    /// Rendered size in world units.
    pub size: Vec2,
    pub tint: Rgb,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Hidden views are neither drawn nor hit-tested.
    pub visible: bool,
    /// Whether pointer presses can land on this view.
    pub interactive: bool,
}

impl Default for View {
    fn default() -> Self {
        Self {
            tag: String::new(),
            texture: TextureId::SOLID,
            pos: Vec2::ZERO,
            size: Vec2::ONE,
            tint: Rgb::WHITE,
            alpha: 1.0,
            visible: true,
            interactive: false,
        }
    }
}

impl View {
    pub fn new(texture: TextureId) -> Self {
        Self {
            texture,
            ..Self::default()
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_tint(mut self, tint: Rgb) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Whether a world-space point lies inside this view's bounds.
    pub fn contains(&self, point: Vec2) -> bool {
        let d = (point - self.pos).abs();
        let half = self.size * 0.5;
        d.x <= half.x && d.y <= half.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_uses_center_anchor() {
        let v = View::default()
            .with_pos(Vec2::new(100.0, 100.0))
            .with_size(Vec2::new(40.0, 20.0));
        assert!(v.contains(Vec2::new(120.0, 110.0)));
        assert!(v.contains(Vec2::new(80.0, 90.0)));
        assert!(!v.contains(Vec2::new(121.0, 100.0)));
        assert!(!v.contains(Vec2::new(100.0, 89.0)));
    }
}
