use wasm_bindgen::prelude::*;
use easel_engine::*;

mod boot;
mod dispatch;
mod draw;
mod events;
mod game;
mod music;
mod paint;
mod session;
mod settings;
mod stroke;

use game::PawPainter;

easel_web::export_game!(PawPainter, "paw-painter");
