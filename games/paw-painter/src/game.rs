use easel_engine::{EngineContext, EngineError, Game, GameConfig, InputQueue};
use glam::Vec2;

use crate::boot::BootScene;
use crate::draw::DrawScene;
use crate::settings::PaintSettings;

enum Stage {
    Boot(BootScene),
    Draw(Box<DrawScene>),
}

pub struct PawPainter {
    config: GameConfig,
    settings: PaintSettings,
    stage: Option<Stage>,
}

impl PawPainter {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            settings: PaintSettings::default(),
            stage: None,
        }
    }

    fn world(&self) -> Vec2 {
        Vec2::new(self.config.world_width, self.config.world_height)
    }
}

impl Default for PawPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for PawPainter {
    fn config(&self) -> GameConfig {
        self.config.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.stage = Some(Stage::Boot(BootScene::enter(ctx, self.world())));
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        match &mut self.stage {
            Some(Stage::Boot(boot)) => {
                if boot.update(ctx) {
                    log::info!("assets loaded, starting the easel");
                    let scene = DrawScene::enter(ctx, self.settings.clone());
                    self.stage = Some(Stage::Draw(Box::new(scene)));
                }
            }
            Some(Stage::Draw(scene)) => scene.update(ctx, input),
            None => {}
        }
    }

    fn load_settings(&mut self, json: &str) -> Result<(), EngineError> {
        let settings = PaintSettings::from_json(json)?;
        if let Some(Stage::Draw(scene)) = &mut self.stage {
            log::info!("settings take effect on the next session");
            scene.queue_settings(settings.clone());
        }
        self.settings = settings;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Phase;
    use easel_engine::{AssetManifest, InputEvent};

    fn booted() -> (PawPainter, EngineContext) {
        let mut game = PawPainter::new();
        let mut ctx = EngineContext::from_config(&game.config());
        ctx.assets.install(AssetManifest::default());
        game.init(&mut ctx);
        (game, ctx)
    }

    fn draw_scene(game: &PawPainter) -> &DrawScene {
        match &game.stage {
            Some(Stage::Draw(scene)) => &**scene,
            _ => panic!("not drawing yet"),
        }
    }

    #[test]
    fn boot_waits_for_assets() {
        let mut game = PawPainter::new();
        let mut ctx = EngineContext::new();
        ctx.assets.install(
            AssetManifest::from_json(r#"{ "textures": [ { "key": "splat", "path": "s.png" } ] }"#).unwrap(),
        );
        game.init(&mut ctx);
        let input = InputQueue::new();
        game.update(&mut ctx, &input);
        assert!(matches!(game.stage, Some(Stage::Boot(_))));

        ctx.assets.mark_loaded(0);
        game.update(&mut ctx, &input);
        assert!(matches!(game.stage, Some(Stage::Draw(_))));
        assert!(ctx.views.find_by_tag("progress-bar").is_none());
        assert!(ctx.views.find_by_tag("splat").is_some());
    }

    #[test]
    fn late_manifest_still_resolves_textures() {
        let mut game = PawPainter::new();
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        let input = InputQueue::new();
        game.update(&mut ctx, &input);
        game.update(&mut ctx, &input);
        assert!(matches!(game.stage, Some(Stage::Boot(_))));

        ctx.assets.install(
            AssetManifest::from_json(r#"{ "textures": [ { "key": "splat", "path": "s.png" } ] }"#).unwrap(),
        );
        ctx.assets.mark_loaded(0);
        game.update(&mut ctx, &input);
        let splat = ctx.views.find_by_tag("splat").unwrap();
        assert_eq!(ctx.views.get(splat).unwrap().texture, easel_engine::TextureId(1));
    }

    #[test]
    fn settings_before_start_shape_the_session() {
        let (mut game, mut ctx) = booted();
        game.load_settings(r#"{ "num_brushes": 3, "unlock_cap": 2 }"#).unwrap();
        game.update(&mut ctx, &InputQueue::new());
        assert!(ctx.views.find_by_tag("brush-button2").is_some());
        assert!(ctx.views.find_by_tag("brush-button3").is_none());
        assert!(ctx.views.find_by_tag("marker2").is_some());
    }

    #[test]
    fn bad_settings_keep_the_old_ones() {
        let (mut game, _ctx) = booted();
        assert!(game.load_settings(r#"{ "num_brushes": 0 }"#).is_err());
        assert!(game.load_settings("not json").is_err());
        assert_eq!(game.settings, PaintSettings::default());
    }

    #[test]
    fn settings_mid_session_wait_for_restart() {
        let (mut game, mut ctx) = booted();
        game.update(&mut ctx, &InputQueue::new());
        game.load_settings(r#"{ "num_brushes": 2 }"#).unwrap();
        assert!(ctx.views.find_by_tag("brush-button5").is_some());

        let mut input = InputQueue::new();
        input.push(InputEvent::Custom { kind: crate::events::CUSTOM_RESTART, a: 0.0 });
        game.update(&mut ctx, &input);
        assert!(ctx.views.find_by_tag("brush-button5").is_none());
        assert_eq!(draw_scene(&game).session().phase, Phase::Idle);
    }
}
