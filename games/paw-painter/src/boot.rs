use easel_engine::{EngineContext, Rgb, View, ViewId};
use glam::Vec2;

use crate::events;

const BOX_SIZE: Vec2 = Vec2::new(400.0, 50.0);
const BAR_INSET: f32 = 30.0;
const BAR_HEIGHT: f32 = 30.0;
const BOX_COLOR: Rgb = Rgb(0x222222);
const BAR_COLOR: Rgb = Rgb(0xffffff);

/// Loading screen: a progress box with a bar that grows as the host reports assets.
pub struct BootScene {
    bar: ViewId,
    bar_left: f32,
    reported: Option<usize>,
}

impl BootScene {
    pub fn enter(ctx: &mut EngineContext, world: Vec2) -> Self {
        let center = world * 0.5;
        ctx.views.spawn(
            View::default()
                .with_tag("progress-box")
                .with_pos(center)
                .with_size(BOX_SIZE)
                .with_tint(BOX_COLOR)
                .with_alpha(0.8),
        );
        let bar_left = center.x - (BOX_SIZE.x - BAR_INSET) * 0.5;
        let bar = ctx.views.spawn(
            View::default()
                .with_tag("progress-bar")
                .with_pos(Vec2::new(bar_left, center.y))
                .with_size(Vec2::new(0.0, BAR_HEIGHT))
                .with_tint(BAR_COLOR),
        );
        log::info!("boot: waiting for {} assets", ctx.assets.progress.total());
        Self {
            bar,
            bar_left,
            reported: None,
        }
    }

    /// Width of the bar for a load fraction in `[0, 1]`.
    pub fn bar_width(fraction: f32) -> f32 {
        (BOX_SIZE.x - BAR_INSET) * fraction.clamp(0.0, 1.0)
    }

    /// Refresh the bar. Returns true once every manifest asset is loaded.
    /// Until the host installs a manifest there is nothing to wait on yet.
    pub fn update(&mut self, ctx: &mut EngineContext) -> bool {
        if ctx.assets.manifest.is_none() {
            return false;
        }
        let progress = &ctx.assets.progress;
        let loaded = progress.loaded();
        if self.reported != Some(loaded) {
            self.reported = Some(loaded);
            let fraction = progress.fraction();
            let width = Self::bar_width(fraction);
            if !progress.last_key().is_empty() {
                log::debug!("boot: {:.0}% ({})", fraction * 100.0, progress.last_key());
            }
            let event = events::load_progress(fraction, loaded, progress.total());
            if let Some(bar) = ctx.views.get_mut(self.bar) {
                // Left edge stays put while the bar grows.
                bar.size.x = width;
                bar.pos.x = self.bar_left + width * 0.5;
            }
            ctx.emit_event(event);
        }
        ctx.assets.progress.is_complete()
    }
}
