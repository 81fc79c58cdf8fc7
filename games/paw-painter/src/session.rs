//! Paint/session state for one drawing session.
//!
//! Everything here is plain data plus clamped mutations; timers, views and
//! the canvas are driven from the outside (see `dispatch` and `draw`).

use easel_engine::Rgb;
use glam::Vec2;

use crate::paint;
use crate::settings::PaintSettings;

/// Session lifecycle. Moves forward only; restart builds a fresh session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Nothing picked up yet; only the palette splat is live.
    Idle = 0,
    /// Palette touched for the first time, tools appearing.
    Priming = 1,
    Drawing = 2,
    /// Inside an unlock tick.
    Unlocking = 3,
    /// Unlock cap reached; finish controls appear after a grace delay.
    Finishing = 4,
    Exported = 5,
}

/// Result of an unlock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unlock {
    /// A new palette color was offered; payload is the new unlock count.
    Unlocked(u32),
    /// The cap is reached and the session moved to `Finishing`.
    Finished,
    /// Not drawing; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub selected_brush: usize,
    pub brush_scale: f32,
    pub loaded_color: Rgb,
    pub palette_color: Rgb,
    /// Seed color first, then one entry per unlock.
    pub palette_history: Vec<Rgb>,
    pub unlock_count: u32,
    pub opacity: f32,
    pub phase: Phase,
    /// Stroke input enabled.
    pub drawing: bool,
    /// A stamp landed since the last decay tick.
    pub dirty: bool,
    /// "Draw more" and "export" are showing.
    pub controls_revealed: bool,
    pub last_pointer: Vec2,
    pub water_color: Rgb,
    pub water_fill: f32,
}

impl SessionState {
    pub fn new(settings: &PaintSettings) -> Self {
        Self {
            selected_brush: 0,
            brush_scale: 1.0f32.clamp(settings.brush_scale_min, settings.brush_scale_max),
            loaded_color: settings.brush_color,
            palette_color: settings.seed_color,
            palette_history: vec![settings.seed_color],
            unlock_count: 0,
            opacity: 1.0,
            phase: Phase::Idle,
            drawing: false,
            dirty: false,
            controls_revealed: false,
            last_pointer: Vec2::ZERO,
            water_color: settings.water_color,
            water_fill: 0.0,
        }
    }

    /// Touch the palette splat: load its color and restore full opacity.
    /// From `Idle` this primes the session. Returns true when it did.
    pub fn activate_palette(&mut self) -> bool {
        self.loaded_color = self.palette_color;
        self.opacity = 1.0;
        if self.phase == Phase::Idle {
            self.phase = Phase::Priming;
            return true;
        }
        false
    }

    /// `Priming → Drawing`.
    pub fn begin_drawing(&mut self) {
        debug_assert_eq!(self.phase, Phase::Priming);
        self.phase = Phase::Drawing;
        self.drawing = true;
    }

    /// One firing of the unlock timer. `next_color` is only drawn from when
    /// a color is actually unlocked.
    pub fn unlock_tick(&mut self, cap: u32, next_color: impl FnOnce() -> Rgb) -> Unlock {
        if self.phase != Phase::Drawing {
            return Unlock::Ignored;
        }
        self.phase = Phase::Unlocking;
        if self.unlock_count < cap {
            self.unlock_count += 1;
            self.palette_color = next_color();
            self.palette_history.push(self.palette_color);
        }
        if self.unlock_count >= cap {
            self.phase = Phase::Finishing;
            return Unlock::Finished;
        }
        self.phase = Phase::Drawing;
        Unlock::Unlocked(self.unlock_count)
    }

    /// The grace delay after finishing ran out: stop drawing, show the controls.
    pub fn grace_elapsed(&mut self) {
        self.drawing = false;
        self.controls_revealed = true;
    }

    pub fn mark_exported(&mut self) {
        self.phase = Phase::Exported;
    }

    /// Step the brush selection, wrapping in both directions.
    pub fn change_brush(&mut self, delta: i32, num_brushes: usize) {
        let n = num_brushes.max(1) as i64;
        let next = ((self.selected_brush as i64 + delta as i64) % n + n) % n;
        self.selected_brush = next as usize;
    }

    pub fn select_brush(&mut self, index: usize, num_brushes: usize) {
        self.selected_brush = index % num_brushes.max(1);
    }

    pub fn set_brush_scale(&mut self, scale: f32, settings: &PaintSettings) {
        self.brush_scale = scale.clamp(settings.brush_scale_min, settings.brush_scale_max);
    }

    pub fn set_opacity(&mut self, opacity: f32, settings: &PaintSettings) {
        self.opacity = opacity.clamp(settings.opacity_min, 1.0);
    }

    /// Decay tick: fade only if paint went down since the last tick.
    pub fn decay_tick(&mut self, settings: &PaintSettings) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;
        self.set_opacity(self.opacity - settings.decay_step, settings);
        true
    }

    /// Dip the brush in the water.
    pub fn dip_water(&mut self, settings: &PaintSettings) {
        self.water_color = paint::mix_water(self.water_color, self.loaded_color);
        self.set_opacity(self.opacity - settings.water_opacity_step, settings);
        self.water_fill = (self.water_fill + settings.water_fill_step).clamp(0.0, 1.0);
    }

    /// Stamp spacing at the current brush scale.
    pub fn stamp_radius(&self, settings: &PaintSettings) -> f32 {
        settings.stamp_radius * self.brush_scale
    }

    pub fn visual_alpha(&self) -> f32 {
        paint::visual_alpha(self.opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> (SessionState, PaintSettings) {
        let settings = PaintSettings::default();
        (SessionState::new(&settings), settings)
    }

    fn drawing() -> (SessionState, PaintSettings) {
        let (mut s, settings) = fresh();
        s.activate_palette();
        s.begin_drawing();
        (s, settings)
    }

    #[test]
    fn history_matches_unlock_count() {
        let (s, _) = fresh();
        assert_eq!(s.palette_history.len() as u32, s.unlock_count + 1);
    }

    #[test]
    fn priming_loads_palette_color() {
        let (mut s, settings) = fresh();
        s.opacity = 0.3;
        assert!(s.activate_palette());
        assert_eq!(s.phase, Phase::Priming);
        assert_eq!(s.loaded_color, settings.seed_color);
        assert_eq!(s.opacity, 1.0);
        s.begin_drawing();
        assert!(s.drawing);
        assert!(!s.activate_palette());
    }

    #[test]
    fn brush_wraps_both_ways() {
        let (mut s, _) = fresh();
        s.change_brush(-1, 6);
        assert_eq!(s.selected_brush, 5);
        s.change_brush(1, 6);
        assert_eq!(s.selected_brush, 0);
        s.change_brush(-13, 6);
        assert_eq!(s.selected_brush, 5);
    }

    #[test]
    fn brush_full_cycle_returns_home() {
        for n in 1..8usize {
            for start in 0..n {
                for delta in [-3, -1, 1, 2] {
                    let (mut s, _) = fresh();
                    s.selected_brush = start;
                    for _ in 0..n {
                        s.change_brush(delta, n);
                    }
                    assert_eq!(s.selected_brush, start);
                }
            }
        }
    }

    #[test]
    fn opacity_clamp_is_idempotent() {
        let (mut s, settings) = fresh();
        s.set_opacity(-4.0, &settings);
        let once = s.opacity;
        s.set_opacity(-4.0, &settings);
        assert_eq!(s.opacity, once);
        assert_eq!(once, settings.opacity_min);
        s.set_opacity(7.0, &settings);
        assert_eq!(s.opacity, 1.0);
    }

    #[test]
    fn brush_scale_is_clamped() {
        let (mut s, settings) = fresh();
        s.set_brush_scale(0.0, &settings);
        assert_eq!(s.brush_scale, settings.brush_scale_min);
        s.set_brush_scale(1e6, &settings);
        assert_eq!(s.brush_scale, settings.brush_scale_max);
    }

    #[test]
    fn decay_only_when_dirty() {
        let (mut s, settings) = drawing();
        assert!(!s.decay_tick(&settings));
        assert_eq!(s.opacity, 1.0);
        s.dirty = true;
        assert!(s.decay_tick(&settings));
        assert!((s.opacity - (1.0 - settings.decay_step)).abs() < 1e-6);
        assert!(!s.dirty);
    }

    #[test]
    fn decay_never_goes_below_floor() {
        let (mut s, settings) = drawing();
        for _ in 0..10_000 {
            s.dirty = true;
            s.decay_tick(&settings);
        }
        assert_eq!(s.opacity, settings.opacity_min);
    }

    #[test]
    fn unlocks_until_cap_then_finishes() {
        let (mut s, _) = drawing();
        let mut next = 0x100u32;
        for i in 1..5 {
            let outcome = s.unlock_tick(5, || {
                next += 1;
                Rgb(next)
            });
            assert_eq!(outcome, Unlock::Unlocked(i));
            assert_eq!(s.phase, Phase::Drawing);
        }
        assert_eq!(s.unlock_tick(5, || Rgb(0xabcdef)), Unlock::Finished);
        assert_eq!(s.phase, Phase::Finishing);
        assert_eq!(s.unlock_count, 5);
        assert_eq!(s.palette_history.len(), 6);
        assert_eq!(s.palette_color, Rgb(0xabcdef));

        // Further ticks change nothing.
        assert_eq!(s.unlock_tick(5, || Rgb(0)), Unlock::Ignored);
        assert_eq!(s.palette_history.len(), 6);
    }

    #[test]
    fn unlock_ignored_while_idle() {
        let (mut s, _) = fresh();
        assert_eq!(s.unlock_tick(5, || Rgb(1)), Unlock::Ignored);
        assert_eq!(s.unlock_count, 0);
    }

    #[test]
    fn water_dip_mixes_and_fades() {
        let (mut s, settings) = drawing();
        s.loaded_color = Rgb(0xff0000);
        s.dip_water(&settings);
        assert_eq!(s.water_color, Rgb(0xff8080));
        assert!((s.opacity - (1.0 - settings.water_opacity_step)).abs() < 1e-6);
        assert!((s.water_fill - settings.water_fill_step).abs() < 1e-6);
        for _ in 0..50 {
            s.dip_water(&settings);
        }
        assert_eq!(s.water_fill, 1.0);
        assert_eq!(s.opacity, settings.opacity_min);
    }
}
