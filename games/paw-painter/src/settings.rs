use easel_engine::{CanvasRect, EngineError, Rgb};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Largest accepted `unlock_cap`; one finishing marker is laid out per unlock.
pub const MAX_UNLOCK_CAP: u32 = 16;
/// Smallest stamp spacing, in canvas pixels, at the smallest brush scale.
pub const MIN_STAMP_SPACING: f32 = 0.5;

/// Tunables for a painting session. Every field has a default, so the host
/// page only sends what it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintSettings {
    pub num_brushes: usize,
    pub brush_scale_min: f32,
    pub brush_scale_max: f32,
    /// Change per `[` / `]` press.
    pub brush_scale_step: f32,
    /// Stamp spacing at brush scale 1.0, in canvas pixels.
    pub stamp_radius: f32,

    pub opacity_min: f32,
    /// Change per `-` / `=` press.
    pub opacity_step: f32,
    /// Seconds between opacity decay ticks.
    pub decay_period: f32,
    /// Opacity lost on a decay tick that follows painting.
    pub decay_step: f32,
    /// Opacity lost per dip in the water.
    pub water_opacity_step: f32,
    /// Water fill gained per dip.
    pub water_fill_step: f32,

    /// Seconds between palette unlocks.
    pub unlock_period: f32,
    pub unlock_cap: u32,
    /// Seconds between reaching the cap and showing the finish controls.
    pub grace_delay: f32,

    pub canvas_center: [f32; 2],
    pub canvas_size: [f32; 2],
    pub canvas_fill: Rgb,
    /// Palette color offered before the first unlock.
    pub seed_color: Rgb,
    /// Color on the brush before it first touches paint.
    pub brush_color: Rgb,
    /// Color of clean water.
    pub water_color: Rgb,

    pub track_count: usize,
    pub rng_seed: u64,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            num_brushes: 6,
            brush_scale_min: 0.1,
            brush_scale_max: 10.0,
            brush_scale_step: 0.1,
            stamp_radius: 25.0,
            opacity_min: 0.1,
            opacity_step: 0.05,
            decay_period: 0.01,
            decay_step: 0.001,
            water_opacity_step: 0.05,
            water_fill_step: 0.1,
            unlock_period: 10.0,
            unlock_cap: 5,
            grace_delay: 1.5,
            canvas_center: [960.0, 540.0],
            canvas_size: [800.0, 600.0],
            canvas_fill: Rgb::WHITE,
            seed_color: Rgb(0x3366cc),
            brush_color: Rgb::WHITE,
            water_color: Rgb::WHITE,
            track_count: 4,
            rng_seed: 42,
        }
    }
}

impl PaintSettings {
    /// Parse and validate settings JSON.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let settings: Self = serde_json::from_str(json).map_err(EngineError::Settings)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.num_brushes == 0 {
            return Err(EngineError::invalid("num_brushes", "must be at least 1"));
        }
        if self.track_count == 0 {
            return Err(EngineError::invalid("track_count", "must be at least 1"));
        }
        if !(1..=MAX_UNLOCK_CAP).contains(&self.unlock_cap) {
            return Err(EngineError::invalid(
                "unlock_cap",
                format!("must be in 1..={}, got {}", MAX_UNLOCK_CAP, self.unlock_cap),
            ));
        }
        if !(self.brush_scale_min > 0.0 && self.brush_scale_min <= self.brush_scale_max) {
            return Err(EngineError::invalid(
                "brush_scale_min",
                format!("need 0 < min <= max, got {}..{}", self.brush_scale_min, self.brush_scale_max),
            ));
        }
        if !(self.opacity_min > 0.0 && self.opacity_min <= 1.0) {
            return Err(EngineError::invalid("opacity_min", "must be in (0, 1]"));
        }
        for (field, value) in [
            ("decay_period", self.decay_period),
            ("unlock_period", self.unlock_period),
            ("stamp_radius", self.stamp_radius),
        ] {
            if !(value > 0.0) {
                return Err(EngineError::invalid(field, format!("must be positive, got {}", value)));
            }
        }
        for (field, value) in [
            ("brush_scale_step", self.brush_scale_step),
            ("opacity_step", self.opacity_step),
            ("decay_step", self.decay_step),
            ("water_opacity_step", self.water_opacity_step),
            ("water_fill_step", self.water_fill_step),
            ("grace_delay", self.grace_delay),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(EngineError::invalid(field, format!("must be non-negative, got {}", value)));
            }
        }
        let spacing = self.stamp_radius * self.brush_scale_min;
        if spacing < MIN_STAMP_SPACING {
            return Err(EngineError::invalid(
                "stamp_radius",
                format!(
                    "stamp spacing at the smallest brush is {}, need at least {}",
                    spacing, MIN_STAMP_SPACING
                ),
            ));
        }
        if self.canvas_size.iter().any(|d| !(*d > 0.0)) {
            return Err(EngineError::invalid("canvas_size", "both dimensions must be positive"));
        }
        Ok(())
    }

    pub fn canvas_rect(&self) -> CanvasRect {
        CanvasRect::new(Vec2::from(self.canvas_center), Vec2::from(self.canvas_size))
    }
}
