//! The drawing scene: owns the session, its timers and its views, and turns
//! host input into [`DrawEvent`]s for [`dispatch`].

use easel_engine::{
    CancelToken, CanvasRect, DrawingSurface, EngineContext, InputEvent, InputQueue, Rgb, Rng,
    Scheduler, Stamp, TextureId, TimerId, View, ViewId,
};
use glam::Vec2;

use crate::dispatch::{dispatch, Control, DrawEvent, Effect};
use crate::events;
use crate::music::MusicDeck;
use crate::session::{Phase, SessionState};
use crate::settings::PaintSettings;

const SPLAT_POS: Vec2 = Vec2::new(240.0, 380.0);
const SPLAT_SIZE: Vec2 = Vec2::new(220.0, 220.0);
const WATER_POS: Vec2 = Vec2::new(240.0, 720.0);
const WATER_SIZE: Vec2 = Vec2::new(180.0, 180.0);
const BRUSH_COLUMN_X: f32 = 1620.0;
const BRUSH_BUTTON: Vec2 = Vec2::new(90.0, 90.0);
const BRUSH_SPACING: f32 = 110.0;
const MUSIC_ROW_Y: f32 = 70.0;
const MUSIC_BUTTON: Vec2 = Vec2::new(64.0, 64.0);
const MUSIC_SPACING: f32 = 90.0;
const MARKER_SIZE: Vec2 = Vec2::new(56.0, 56.0);
const MARKER_SPACING: f32 = 72.0;
const FINISH_BUTTON: Vec2 = Vec2::new(260.0, 90.0);
const EASEL_MARGIN: f32 = 80.0;
const CURSOR_OUTLINE: f32 = 1.15;

const SELECTED_TINT: Rgb = Rgb::WHITE;
const UNSELECTED_TINT: Rgb = Rgb(0x7f7f7f);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Unlock,
    Decay,
    Grace,
}

/// View ids and textures for one session's scene graph.
struct Layout {
    splat: ViewId,
    water: ViewId,
    water_fill: ViewId,
    cursor_outline: ViewId,
    cursor: ViewId,
    draw_more: ViewId,
    export: ViewId,
    brushes: Vec<ViewId>,
    music: Vec<ViewId>,
    markers: Vec<ViewId>,
    brush_textures: Vec<TextureId>,
}

impl Layout {
    fn build(ctx: &mut EngineContext, settings: &PaintSettings, rect: CanvasRect) -> Self {
        let textures = &ctx.assets.textures;
        let brush_textures: Vec<TextureId> = (0..settings.num_brushes)
            .map(|i| textures.resolve(&format!("brush{i}")))
            .collect();
        let easel = textures.resolve("easel");
        let splat_tex = textures.resolve("splat");
        let water_tex = textures.resolve("water");
        let music_tex = textures.resolve("musicIcon");
        let draw_more_tex = textures.resolve("drawMore");
        let export_tex = textures.resolve("download");

        let views = &mut ctx.views;
        views.spawn(
            View::new(easel)
                .with_tag("easel")
                .with_pos(rect.center)
                .with_size(rect.size + Vec2::splat(EASEL_MARGIN)),
        );
        views.spawn(
            View::new(TextureId::CANVAS)
                .with_tag("canvas")
                .with_pos(rect.center)
                .with_size(rect.size),
        );

        let splat = views.spawn(
            View::new(splat_tex)
                .with_tag("splat")
                .with_pos(SPLAT_POS)
                .with_size(SPLAT_SIZE)
                .with_tint(settings.seed_color)
                .interactive(),
        );
        let water = views.spawn(
            View::new(water_tex)
                .with_tag("water")
                .with_pos(WATER_POS)
                .with_size(WATER_SIZE)
                .interactive()
                .hidden(),
        );
        let water_fill = views.spawn(
            View::default()
                .with_tag("water-fill")
                .with_pos(WATER_POS)
                .with_size(Vec2::new(WATER_SIZE.x * 0.6, 0.0))
                .with_tint(settings.water_color)
                .hidden(),
        );

        let brush_top = rect.center.y - (settings.num_brushes as f32 - 1.0) * BRUSH_SPACING * 0.5;
        let brushes = brush_textures
            .iter()
            .enumerate()
            .map(|(i, &tex)| {
                views.spawn(
                    View::new(tex)
                        .with_tag(format!("brush-button{i}"))
                        .with_pos(Vec2::new(BRUSH_COLUMN_X, brush_top + i as f32 * BRUSH_SPACING))
                        .with_size(BRUSH_BUTTON)
                        .with_tint(UNSELECTED_TINT)
                        .interactive()
                        .hidden(),
                )
            })
            .collect();

        let music_left = rect.center.x - (settings.track_count as f32 - 1.0) * MUSIC_SPACING * 0.5;
        let music = (0..settings.track_count)
            .map(|i| {
                views.spawn(
                    View::new(music_tex)
                        .with_tag(format!("music{i}"))
                        .with_pos(Vec2::new(music_left + i as f32 * MUSIC_SPACING, MUSIC_ROW_Y))
                        .with_size(MUSIC_BUTTON)
                        .interactive(),
                )
            })
            .collect();

        let marker_count = settings.unlock_cap as usize + 1;
        let marker_left = rect.center.x - (marker_count as f32 - 1.0) * MARKER_SPACING * 0.5;
        let marker_y = rect.center.y + rect.size.y * 0.5 + EASEL_MARGIN;
        let markers = (0..marker_count)
            .map(|i| {
                views.spawn(
                    View::new(splat_tex)
                        .with_tag(format!("marker{i}"))
                        .with_pos(Vec2::new(marker_left + i as f32 * MARKER_SPACING, marker_y))
                        .with_size(MARKER_SIZE)
                        .hidden(),
                )
            })
            .collect();

        let finish_y = marker_y + MARKER_SIZE.y + FINISH_BUTTON.y * 0.5;
        let draw_more = views.spawn(
            View::new(draw_more_tex)
                .with_tag("draw-more")
                .with_pos(Vec2::new(rect.center.x - FINISH_BUTTON.x * 0.75, finish_y))
                .with_size(FINISH_BUTTON)
                .interactive()
                .hidden(),
        );
        let export = views.spawn(
            View::new(export_tex)
                .with_tag("export")
                .with_pos(Vec2::new(rect.center.x + FINISH_BUTTON.x * 0.75, finish_y))
                .with_size(FINISH_BUTTON)
                .interactive()
                .hidden(),
        );

        // Cursor last so it draws over everything.
        let cursor_outline = views.spawn(View::default().with_tag("cursor-outline").hidden());
        let cursor = views.spawn(View::default().with_tag("cursor").hidden());

        Self {
            splat,
            water,
            water_fill,
            cursor_outline,
            cursor,
            draw_more,
            export,
            brushes,
            music,
            markers,
            brush_textures,
        }
    }

    fn control_at(&self, id: ViewId) -> Option<Control> {
        if id == self.splat {
            return Some(Control::Palette);
        }
        if id == self.water {
            return Some(Control::Water);
        }
        if id == self.draw_more {
            return Some(Control::DrawMore);
        }
        if id == self.export {
            return Some(Control::Export);
        }
        if let Some(i) = self.brushes.iter().position(|&b| b == id) {
            return Some(Control::Brush(i));
        }
        self.music.iter().position(|&m| m == id).map(Control::Music)
    }
}

/// Interactive drawing scene.
pub struct DrawScene {
    settings: PaintSettings,
    /// Applied at the next restart.
    queued_settings: Option<PaintSettings>,
    rect: CanvasRect,
    session: SessionState,
    clock: Scheduler<TimerKind>,
    token: CancelToken,
    unlock_timer: Option<TimerId>,
    music: MusicDeck,
    rng: Rng,
    layout: Layout,
    /// Last pointer position in world space, for the cursor.
    pointer: Vec2,
    reported_phase: Phase,
}

impl DrawScene {
    pub fn enter(ctx: &mut EngineContext, settings: PaintSettings) -> Self {
        let rect = settings.canvas_rect();
        let mut clock = Scheduler::new();
        let token = clock.issue_token();
        clock.every(token, settings.decay_period as f64, TimerKind::Decay);
        ctx.views.clear();
        let layout = Layout::build(ctx, &settings, rect);
        ctx.canvas.fill(settings.canvas_fill);
        log::info!("draw scene ready: {} brushes, {} tracks", settings.num_brushes, settings.track_count);
        Self {
            session: SessionState::new(&settings),
            music: MusicDeck::new(settings.track_count),
            rng: Rng::new(settings.rng_seed),
            queued_settings: None,
            rect,
            clock,
            token,
            unlock_timer: None,
            layout,
            pointer: rect.center,
            reported_phase: Phase::Idle,
            settings,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn queue_settings(&mut self, settings: PaintSettings) {
        self.queued_settings = Some(settings);
    }

    pub fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            if let Some(draw_event) = self.translate(ctx, *event) {
                self.send(ctx, draw_event);
            }
        }

        for fired in self.clock.advance(ctx.dt as f64) {
            assert_eq!(
                fired.token, self.token,
                "{:?} timer fired for a torn-down session",
                fired.kind
            );
            let event = match fired.kind {
                TimerKind::Unlock => DrawEvent::UnlockTick,
                TimerKind::Decay => DrawEvent::DecayTick,
                TimerKind::Grace => DrawEvent::GraceElapsed,
            };
            self.send(ctx, event);
        }

        self.sync_views(ctx);
    }

    fn translate(&mut self, ctx: &mut EngineContext, event: InputEvent) -> Option<DrawEvent> {
        match event {
            InputEvent::PointerDown { x, y } => {
                let point = Vec2::new(x, y);
                self.pointer = point;
                if let Some(control) = ctx.views.hit_test(point).and_then(|id| self.layout.control_at(id)) {
                    return Some(DrawEvent::Press(control));
                }
                let local = self.rect.to_local(point);
                if !self.rect.contains_local(local) {
                    return None;
                }
                Some(DrawEvent::CanvasPress { local })
            }
            InputEvent::PointerMove { x, y, pressed } => {
                let point = Vec2::new(x, y);
                self.pointer = point;
                Some(DrawEvent::PointerMove {
                    local: self.rect.to_local(point),
                    pressed,
                })
            }
            InputEvent::PointerUp { x, y } => {
                self.pointer = Vec2::new(x, y);
                None
            }
            InputEvent::KeyDown { key } => Some(DrawEvent::Key(key)),
            InputEvent::Custom { kind: events::CUSTOM_RESTART, .. } => Some(DrawEvent::Restart),
            InputEvent::Custom { kind, .. } => {
                log::warn!("unknown custom event {}", kind);
                None
            }
        }
    }

    fn send(&mut self, ctx: &mut EngineContext, event: DrawEvent) {
        let effects = dispatch(&mut self.session, event, &self.settings, &mut self.rng);
        for effect in effects {
            self.apply(ctx, effect);
        }
        if self.session.phase != self.reported_phase {
            log::info!("phase {:?} -> {:?}", self.reported_phase, self.session.phase);
            self.reported_phase = self.session.phase;
            ctx.emit_event(events::phase(self.session.phase));
        }
    }

    fn apply(&mut self, ctx: &mut EngineContext, effect: Effect) {
        let layout = &self.layout;
        match effect {
            Effect::Stamp(pos) => {
                let texture = self.brush_texture();
                ctx.canvas.draw(Stamp {
                    texture,
                    pos,
                    scale: self.session.brush_scale,
                    tint: self.session.loaded_color,
                    alpha: self.session.visual_alpha(),
                });
            }
            Effect::ClearCanvas => ctx.canvas.fill(self.settings.canvas_fill),
            Effect::NewSession => self.new_session(ctx),
            Effect::ShowTools => {
                ctx.views.set_group_visible(&layout.brushes, true);
                ctx.views.set_visible(layout.water, true);
                ctx.views.set_visible(layout.water_fill, true);
                ctx.views.set_visible(layout.cursor_outline, true);
                ctx.views.set_visible(layout.cursor, true);
            }
            Effect::ArmUnlockTimer => {
                let id = self.clock.every(self.token, self.settings.unlock_period as f64, TimerKind::Unlock);
                self.unlock_timer = Some(id);
            }
            Effect::CancelUnlockTimer => {
                if let Some(id) = self.unlock_timer.take() {
                    self.clock.cancel(id);
                }
            }
            Effect::ArmGraceDelay => {
                self.clock.after(self.token, self.settings.grace_delay as f64, TimerKind::Grace);
            }
            Effect::Unlocked(count) => {
                ctx.emit_event(events::unlock(count, self.session.palette_color));
            }
            Effect::RevealMarkers => {
                for (&marker, &color) in layout.markers.iter().zip(&self.session.palette_history) {
                    ctx.views.set_tint(marker, color);
                    ctx.views.set_visible(marker, true);
                }
            }
            Effect::HidePalette => ctx.views.set_visible(layout.splat, false),
            Effect::RevealFinishControls => {
                ctx.views.set_visible(layout.draw_more, true);
                ctx.views.set_visible(layout.export, true);
            }
            Effect::RequestSnapshot => {
                log::info!("export requested");
                ctx.emit_event(events::export());
            }
            Effect::PlayTrack(index) => {
                let change = self.music.change(index as i64);
                for sound in change.sounds() {
                    ctx.emit_sound(sound);
                }
                if let Some(&button) = layout.music.get(change.play) {
                    ctx.views.set_tint(button, change.tint);
                }
                ctx.emit_event(events::music(change.play));
            }
        }
    }

    /// Tear down the current session and start a clean one with the same tracks playing.
    fn new_session(&mut self, ctx: &mut EngineContext) {
        let cancelled = self.clock.cancel_scope(self.token);
        log::debug!("cancelled {} timers", cancelled);
        if let Some(settings) = self.queued_settings.take() {
            log::info!("applying new settings");
            self.music = MusicDeck::new(settings.track_count);
            self.rng = Rng::new(settings.rng_seed);
            self.rect = settings.canvas_rect();
            self.session = SessionState::new(&settings);
            self.settings = settings;
        }
        self.token = self.clock.issue_token();
        self.unlock_timer = None;
        self.clock.every(self.token, self.settings.decay_period as f64, TimerKind::Decay);

        ctx.views.clear();
        self.layout = Layout::build(ctx, &self.settings, self.rect);
        if let Some(track) = self.music.current() {
            let tint = Rgb::from_hsv(track as f32 / self.music.track_count() as f32, 1.0, 1.0);
            if let Some(&button) = self.layout.music.get(track) {
                ctx.views.set_tint(button, tint);
            }
        }
    }

    fn brush_texture(&self) -> TextureId {
        self.layout
            .brush_textures
            .get(self.session.selected_brush)
            .copied()
            .unwrap_or(TextureId::SOLID)
    }

    /// Mirror session state onto the views once per frame.
    fn sync_views(&self, ctx: &mut EngineContext) {
        let session = &self.session;
        let layout = &self.layout;
        let views = &mut ctx.views;

        views.set_tint(layout.splat, session.palette_color);
        views.set_tint(layout.water_fill, session.water_color);
        if let Some(fill) = views.get_mut(layout.water_fill) {
            // Fill rises from the bottom of the bowl.
            let height = WATER_SIZE.y * 0.6 * session.water_fill;
            fill.size.y = height;
            fill.pos.y = WATER_POS.y + WATER_SIZE.y * 0.3 - height * 0.5;
        }

        for (i, &button) in layout.brushes.iter().enumerate() {
            let tint = if i == session.selected_brush { SELECTED_TINT } else { UNSELECTED_TINT };
            views.set_tint(button, tint);
        }

        let size = Vec2::splat(self.settings.stamp_radius * 2.0 * session.brush_scale);
        let texture = self.brush_texture();
        if let Some(outline) = views.get_mut(layout.cursor_outline) {
            outline.texture = texture;
            outline.pos = self.pointer;
            outline.size = size * CURSOR_OUTLINE;
            outline.tint = session.loaded_color.outline();
        }
        if let Some(cursor) = views.get_mut(layout.cursor) {
            cursor.texture = texture;
            cursor.pos = self.pointer;
            cursor.size = size;
            cursor.tint = session.loaded_color;
            cursor.alpha = session.visual_alpha();
        }
        // The cursor only shows while strokes are accepted.
        views.set_visible(layout.cursor, session.drawing);
        views.set_visible(layout.cursor_outline, session.drawing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_engine::{AssetManifest, CanvasCommand};

    const SPLAT: Vec2 = SPLAT_POS;

    fn setup() -> (EngineContext, DrawScene) {
        let mut ctx = EngineContext::new();
        let manifest = AssetManifest::from_json(
            r#"{ "textures": [
                { "key": "splat", "path": "splat.png" },
                { "key": "brush0", "path": "b0.png" },
                { "key": "brush1", "path": "b1.png" }
            ] }"#,
        )
        .unwrap();
        ctx.assets.install(manifest);
        let scene = DrawScene::enter(&mut ctx, PaintSettings::default());
        (ctx, scene)
    }

    fn frame(ctx: &mut EngineContext, scene: &mut DrawScene, events: &[InputEvent]) {
        ctx.clear_frame_data();
        let mut input = InputQueue::new();
        for &e in events {
            input.push(e);
        }
        scene.update(ctx, &input);
    }

    fn run_for(ctx: &mut EngineContext, scene: &mut DrawScene, seconds: f32) {
        let steps = (seconds / ctx.dt).ceil() as usize;
        for _ in 0..steps {
            frame(ctx, scene, &[]);
        }
    }

    fn press(point: Vec2) -> InputEvent {
        InputEvent::PointerDown { x: point.x, y: point.y }
    }

    fn draws(ctx: &EngineContext) -> Vec<&CanvasCommand> {
        ctx.canvas
            .as_slice()
            .iter()
            .filter(|c| c.kind == CanvasCommand::KIND_DRAW)
            .collect()
    }

    #[test]
    fn enter_clears_canvas_and_shows_palette() {
        let (ctx, scene) = setup();
        assert_eq!(ctx.canvas.len(), 1);
        assert_eq!(ctx.canvas.as_slice()[0].kind, CanvasCommand::KIND_FILL);
        assert!(ctx.views.is_visible(scene.layout.splat));
        assert!(!ctx.views.is_visible(scene.layout.water));
        assert_eq!(scene.session().phase, Phase::Idle);
    }

    #[test]
    fn palette_press_primes_and_starts_drawing() {
        let (mut ctx, mut scene) = setup();
        frame(&mut ctx, &mut scene, &[press(SPLAT)]);
        assert_eq!(scene.session().phase, Phase::Drawing);
        assert!(ctx.views.is_visible(scene.layout.water));
        assert!(ctx.views.is_visible(scene.layout.cursor));
        let phases: Vec<f32> = ctx
            .events
            .iter()
            .filter(|e| e.kind == events::PHASE)
            .map(|e| e.a)
            .collect();
        assert_eq!(phases, vec![Phase::Drawing as u8 as f32]);
    }

    #[test]
    fn stroke_reaches_the_canvas() {
        let (mut ctx, mut scene) = setup();
        frame(&mut ctx, &mut scene, &[press(SPLAT)]);
        let origin = scene.rect.origin();
        frame(
            &mut ctx,
            &mut scene,
            &[
                InputEvent::PointerMove { x: origin.x, y: origin.y + 10.0, pressed: false },
                InputEvent::PointerMove { x: origin.x + 100.0, y: origin.y + 10.0, pressed: true },
            ],
        );
        let stamps = draws(&ctx);
        assert_eq!(stamps.len(), 5);
        assert!(stamps.iter().all(|c| c.y == 10.0));
        assert_eq!(stamps[0].texture, 2.0);
        assert_eq!(scene.session().last_pointer, Vec2::new(100.0, 10.0));
    }

    #[test]
    fn canvas_press_stamps_a_dot() {
        let (mut ctx, mut scene) = setup();
        frame(&mut ctx, &mut scene, &[press(SPLAT)]);
        let center = scene.rect.center;
        frame(&mut ctx, &mut scene, &[press(center)]);
        assert_eq!(draws(&ctx).len(), 1);
    }

    #[test]
    fn full_session_to_export() {
        let (mut ctx, mut scene) = setup();
        frame(&mut ctx, &mut scene, &[press(SPLAT)]);
        let unlock = scene.settings.unlock_period * scene.settings.unlock_cap as f32;
        run_for(&mut ctx, &mut scene, unlock + 0.1);
        assert_eq!(scene.session().phase, Phase::Finishing);
        assert_eq!(scene.session().palette_history.len(), 6);
        assert!(!ctx.views.is_visible(scene.layout.splat));
        assert!(scene.layout.markers.iter().all(|&m| ctx.views.is_visible(m)));
        assert!(!ctx.views.is_visible(scene.layout.export));

        let grace = scene.settings.grace_delay;
        run_for(&mut ctx, &mut scene, grace);
        assert!(!scene.session().drawing);
        assert!(ctx.views.is_visible(scene.layout.export));

        let export_at = ctx.views.get(scene.layout.export).unwrap().pos;
        frame(&mut ctx, &mut scene, &[press(export_at)]);
        assert_eq!(scene.session().phase, Phase::Exported);
        assert!(ctx.events.iter().any(|e| e.kind == events::EXPORT));
    }

    #[test]
    fn restart_cancels_session_timers() {
        let (mut ctx, mut scene) = setup();
        frame(&mut ctx, &mut scene, &[press(SPLAT)]);
        let period = scene.settings.unlock_period;
        run_for(&mut ctx, &mut scene, period * 2.5);
        let old_token = scene.token;

        frame(&mut ctx, &mut scene, &[InputEvent::Custom { kind: events::CUSTOM_RESTART, a: 0.0 }]);
        assert_ne!(scene.token, old_token);
        assert_eq!(scene.session(), &SessionState::new(&scene.settings));
        assert_eq!(scene.clock.pending(), 1);
        assert_eq!(ctx.canvas.as_slice().last().unwrap().kind, CanvasCommand::KIND_FILL);

        // Long past the old unlock period: nothing from the old session fires.
        run_for(&mut ctx, &mut scene, period * 2.0);
        assert_eq!(scene.session().phase, Phase::Idle);
        assert_eq!(scene.session().unlock_count, 0);
    }

    #[test]
    fn restart_fills_with_queued_settings() {
        let (mut ctx, mut scene) = setup();
        frame(&mut ctx, &mut scene, &[press(SPLAT)]);
        scene.queue_settings(PaintSettings {
            canvas_fill: Rgb::BLACK,
            ..PaintSettings::default()
        });
        frame(&mut ctx, &mut scene, &[InputEvent::Custom { kind: events::CUSTOM_RESTART, a: 0.0 }]);
        let fills: Vec<f32> = ctx
            .canvas
            .as_slice()
            .iter()
            .filter(|c| c.kind == CanvasCommand::KIND_FILL)
            .map(|c| c.color)
            .collect();
        assert_eq!(fills, vec![Rgb::BLACK.to_f32()]);
    }

    #[test]
    fn painting_decays_opacity() {
        let (mut ctx, mut scene) = setup();
        frame(&mut ctx, &mut scene, &[press(SPLAT)]);
        let c = scene.rect.center;
        frame(&mut ctx, &mut scene, &[InputEvent::PointerMove { x: c.x, y: c.y, pressed: true }]);
        run_for(&mut ctx, &mut scene, 0.1);
        assert!(scene.session().opacity < 1.0);
        assert!(!scene.session().dirty);
    }

    #[test]
    fn music_button_plays_and_tints() {
        let (mut ctx, mut scene) = setup();
        let button = scene.layout.music[1];
        let at = ctx.views.get(button).unwrap().pos;
        frame(&mut ctx, &mut scene, &[press(at)]);
        assert_eq!(ctx.sounds, vec![easel_engine::SoundEvent(crate::music::SOUND_PLAY_BASE + 1)]);
        assert_eq!(ctx.views.get(button).unwrap().tint, Rgb(0x80ff00));
    }

    #[test]
    fn brush_buttons_select_after_priming() {
        let (mut ctx, mut scene) = setup();
        frame(&mut ctx, &mut scene, &[press(SPLAT)]);
        let at = ctx.views.get(scene.layout.brushes[1]).unwrap().pos;
        frame(&mut ctx, &mut scene, &[press(at)]);
        assert_eq!(scene.session().selected_brush, 1);
        assert_eq!(ctx.views.get(scene.layout.brushes[1]).unwrap().tint, SELECTED_TINT);
        assert_eq!(ctx.views.get(scene.layout.cursor).unwrap().texture, TextureId(3));
    }
}
