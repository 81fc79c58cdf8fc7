use crate::api::types::{GameEvent, SoundEvent};
use crate::assets::AssetState;
use crate::core::canvas::CanvasCommands;
use crate::core::views::ViewTable;
use crate::error::EngineError;
use crate::input::queue::InputQueue;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Initial capacity of the view instance buffer (default: 128).
    pub max_views: usize,
    /// Initial capacity of the per-frame canvas command buffer (default: 4096).
    pub max_canvas_commands: usize,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// File name offered when the canvas snapshot is downloaded.
    pub export_file_name: String,
    /// Console log level installed by the web bridge.
    pub log_level: log::Level,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 1920.0,
            world_height: 1080.0,
            max_views: 128,
            max_canvas_commands: 4096,
            max_sounds: 32,
            max_events: 32,
            export_file_name: "masterpiece.png".to_owned(),
            log_level: log::Level::Info,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state and spawn the first views.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick. Runs once per fixed step.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Apply game-specific settings supplied by the host page as JSON.
    fn load_settings(&mut self, _json: &str) -> Result<(), EngineError> {
        Ok(())
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub views: ViewTable,
    pub canvas: CanvasCommands,
    pub assets: AssetState,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    /// Seconds covered by the current update call.
    pub dt: f32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create a context sized for the given configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            views: ViewTable::with_capacity(config.max_views),
            canvas: CanvasCommands::with_capacity(config.max_canvas_commands),
            assets: AssetState::default(),
            sounds: Vec::with_capacity(config.max_sounds),
            events: Vec::with_capacity(config.max_events),
            dt: config.fixed_dt,
        }
    }

    /// Emit a sound event to be forwarded to TypeScript.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events, canvas commands).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
        self.canvas.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::color::Rgb;
    use crate::core::canvas::DrawingSurface;

    #[test]
    fn clear_frame_data_drops_transients_only() {
        let mut ctx = EngineContext::new();
        ctx.emit_sound(SoundEvent(3));
        ctx.emit_event(GameEvent::new(1.0, 2.0));
        ctx.canvas.fill(Rgb::WHITE);
        ctx.views.spawn(crate::components::view::View::default());

        ctx.clear_frame_data();

        assert!(ctx.sounds.is_empty());
        assert!(ctx.events.is_empty());
        assert_eq!(ctx.canvas.len(), 0);
        assert_eq!(ctx.views.len(), 1);
    }

    #[test]
    fn context_uses_config_timestep() {
        let config = GameConfig {
            fixed_dt: 0.02,
            ..GameConfig::default()
        };
        let ctx = EngineContext::from_config(&config);
        assert_eq!(ctx.dt, 0.02);
    }
}
