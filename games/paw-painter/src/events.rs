//! Event kinds shared with the TypeScript host.

use easel_engine::{GameEvent, Rgb};

use crate::session::Phase;

/// `a` = new phase index.
pub const PHASE: f32 = 1.0;
/// `a` = unlock count, `b` = unlocked color.
pub const UNLOCK: f32 = 2.0;
/// Host should snapshot the canvas and call `game_download_snapshot`.
pub const EXPORT: f32 = 3.0;
/// `a` = percent loaded, `b` = assets loaded, `c` = total assets.
pub const LOAD_PROGRESS: f32 = 4.0;
/// `a` = track now playing.
pub const MUSIC: f32 = 5.0;

/// Custom input kind (host → game) requesting a fresh drawing session.
pub const CUSTOM_RESTART: u32 = 1;

pub fn phase(phase: Phase) -> GameEvent {
    GameEvent::new(PHASE, phase as u8 as f32)
}

pub fn unlock(count: u32, color: Rgb) -> GameEvent {
    GameEvent {
        kind: UNLOCK,
        a: count as f32,
        b: color.to_f32(),
        c: 0.0,
    }
}

pub fn export() -> GameEvent {
    GameEvent::new(EXPORT, 0.0)
}

pub fn load_progress(fraction: f32, loaded: usize, total: usize) -> GameEvent {
    GameEvent {
        kind: LOAD_PROGRESS,
        a: (fraction * 100.0).round(),
        b: loaded as f32,
        c: total as f32,
    }
}

pub fn music(track: usize) -> GameEvent {
    GameEvent::new(MUSIC, track as f32)
}
