pub mod export;
pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, input handlers, asset
///   loading, snapshot download, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use easel_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// easel_web::export_game!(MyGame, "my-game");
/// ```
///
/// The game type must provide `fn new() -> Self` and implement `easel_engine::Game`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);
            let _ = console_log::init_with_level(runner.log_level());

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32, pressed: bool) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y, pressed }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key: &str) {
            let key = Key::from_dom(key);
            with_runner(|r| r.push_input(InputEvent::KeyDown { key }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a }));
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        #[wasm_bindgen]
        pub fn game_load_settings(json: &str) {
            with_runner(|r| r.load_settings(json));
        }

        #[wasm_bindgen]
        pub fn game_asset_loaded(index: u32) {
            with_runner(|r| r.asset_loaded(index));
        }

        #[wasm_bindgen]
        pub fn game_download_snapshot(data_url: &str) {
            with_runner(|r| r.download_snapshot(data_url));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_views_ptr() -> *const f32 {
            with_runner(|r| r.views_ptr())
        }

        #[wasm_bindgen]
        pub fn get_view_count() -> u32 {
            with_runner(|r| r.view_count())
        }

        #[wasm_bindgen]
        pub fn get_canvas_ptr() -> *const f32 {
            with_runner(|r| r.canvas_ptr())
        }

        #[wasm_bindgen]
        pub fn get_canvas_command_count() -> u32 {
            with_runner(|r| r.canvas_command_count())
        }

        #[wasm_bindgen]
        pub fn get_sound_events_ptr() -> *const u8 {
            with_runner(|r| r.sound_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sound_events_len() -> u32 {
            with_runner(|r| r.sound_events_len())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }
    };
}
