pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{SoundEvent, GameEvent, TextureId};
pub use error::EngineError;
pub use components::color::Rgb;
pub use components::view::View;
pub use core::views::{ViewId, ViewTable};
pub use core::canvas::{CanvasCommand, CanvasCommands, CanvasRect, DrawingSurface, Stamp};
pub use core::clock::{CancelToken, Fired, FixedTimestep, Scheduler, TimerId};
pub use renderer::instance::{ViewBuffer, ViewInstance};
pub use input::queue::{InputEvent, InputQueue, Key};
pub use assets::manifest::{AssetManifest, AudioDescriptor, TextureDescriptor};
pub use assets::registry::TextureRegistry;
pub use assets::progress::LoadProgress;
pub use assets::AssetState;
pub use systems::rng::Rng;
pub use systems::render::build_view_buffer;
