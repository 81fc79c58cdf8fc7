use easel_engine::{
    build_view_buffer, AssetManifest, EngineContext, FixedTimestep, Game, GameConfig,
    InputEvent, InputQueue, ViewBuffer,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    /// Stand-in queue for the extra fixed steps of a frame, so input is handled once.
    no_input: InputQueue,
    view_buffer: ViewBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
    /// Flat buffer of sound event IDs for host reads.
    sound_buffer: Vec<u8>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::from_config(&config),
            input: InputQueue::new(),
            no_input: InputQueue::new(),
            view_buffer: ViewBuffer::with_capacity(config.max_views),
            timestep: FixedTimestep::new(config.fixed_dt),
            sound_buffer: Vec::with_capacity(config.max_sounds),
            config,
            initialized: false,
            game,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        build_view_buffer(&self.ctx.views, &mut self.view_buffer);
        self.initialized = true;
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Parse and install the asset manifest. A bad manifest is logged and ignored.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                log::info!("asset manifest: {} files", manifest.asset_count());
                self.ctx.assets.install(manifest);
            }
            Err(err) => log::error!("{}", err),
        }
    }

    /// Hand game-specific settings to the game. Errors are logged; old settings stay.
    pub fn load_settings(&mut self, json: &str) {
        if let Err(err) = self.game.load_settings(json) {
            log::error!("{}", err);
        }
    }

    /// The host finished loading manifest entry `index`.
    pub fn asset_loaded(&mut self, index: u32) {
        match self.ctx.assets.mark_loaded(index as usize) {
            Some(key) => log::debug!("loaded asset {} ({})", index, key),
            None => log::warn!("asset index {} is not in the manifest", index),
        }
    }

    /// Run one frame: fixed-step updates, then rebuild the view buffer.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();
        self.ctx.dt = self.timestep.dt();

        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            let input = if step == 0 { &self.input } else { &self.no_input };
            self.game.update(&mut self.ctx, input);
        }
        // Input that arrived during a zero-step frame waits for the next step.
        if steps > 0 {
            self.input.drain();
        }

        build_view_buffer(&self.ctx.views, &mut self.view_buffer);

        self.sound_buffer.clear();
        for sound in self.ctx.sounds.iter().take(self.config.max_sounds) {
            self.sound_buffer.push(sound.0 as u8);
        }
    }

    /// Download a canvas snapshot the host produced after an export event.
    pub fn download_snapshot(&self, data_url: &str) {
        if let Err(err) = crate::export::download_data_url(data_url, &self.config.export_file_name) {
            log::warn!("export abandoned: {:?}", err);
        }
    }

    // ---- Pointer accessors for host reads ----

    pub fn views_ptr(&self) -> *const f32 {
        self.view_buffer.instances_ptr()
    }

    pub fn view_count(&self) -> u32 {
        self.view_buffer.instance_count()
    }

    pub fn canvas_ptr(&self) -> *const f32 {
        self.ctx.canvas.as_ptr()
    }

    pub fn canvas_command_count(&self) -> u32 {
        self.ctx.canvas.len() as u32
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.config.max_events) as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn log_level(&self) -> log::Level {
        self.config.log_level
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }
}
