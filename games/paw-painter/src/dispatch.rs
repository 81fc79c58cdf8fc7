//! Input/timer dispatch for the drawing scene.
//!
//! `dispatch` is the whole state machine: it matches on the session phase and
//! the incoming event, mutates the session, and returns the side effects the
//! scene must carry out on the host (timers, views, canvas, audio).

use easel_engine::{Key, Rng};
use glam::Vec2;

use crate::session::{Phase, SessionState, Unlock};
use crate::settings::PaintSettings;
use crate::stroke;

/// On-screen controls a press can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Palette,
    Water,
    Brush(usize),
    Music(usize),
    DrawMore,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawEvent {
    /// Pointer position in canvas-local coordinates.
    PointerMove { local: Vec2, pressed: bool },
    /// Press on bare canvas, in canvas-local coordinates.
    CanvasPress { local: Vec2 },
    Press(Control),
    Key(Key),
    UnlockTick,
    DecayTick,
    GraceElapsed,
    /// Explicit scene restart, valid from any phase.
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Stamp the current brush at a canvas-local point.
    Stamp(Vec2),
    /// Fill the canvas with the current session's fill color.
    ClearCanvas,
    /// Tear down the old session's timers and views, start the new one.
    NewSession,
    ShowTools,
    ArmUnlockTimer,
    CancelUnlockTimer,
    ArmGraceDelay,
    Unlocked(u32),
    RevealMarkers,
    HidePalette,
    RevealFinishControls,
    RequestSnapshot,
    PlayTrack(usize),
}

/// Apply one event to the session.
pub fn dispatch(
    session: &mut SessionState,
    event: DrawEvent,
    settings: &PaintSettings,
    rng: &mut Rng,
) -> Vec<Effect> {
    use DrawEvent::*;
    use Phase::*;

    match (session.phase, event) {
        (_, Restart) => restart(session, settings),

        (_, PointerMove { local, pressed }) => stroke_to(session, local, pressed, settings),
        (_, CanvasPress { local }) => {
            // Zero-length segment: a single dot.
            session.last_pointer = local;
            stroke_to(session, local, true, settings)
        }

        (Idle, Press(Control::Palette)) => {
            session.activate_palette();
            session.begin_drawing();
            log::info!("session primed with {:06x}", session.loaded_color.0);
            vec![Effect::ShowTools, Effect::ArmUnlockTimer]
        }
        (Drawing, Press(Control::Palette)) => {
            session.activate_palette();
            Vec::new()
        }
        (Drawing | Finishing, Press(Control::Water)) if session.drawing => {
            session.dip_water(settings);
            Vec::new()
        }
        (Idle, Press(Control::Brush(_))) => Vec::new(),
        (_, Press(Control::Brush(i))) => {
            session.select_brush(i, settings.num_brushes);
            Vec::new()
        }
        (_, Press(Control::Music(i))) => vec![Effect::PlayTrack(i)],
        (Finishing | Exported, Press(Control::DrawMore)) if session.controls_revealed => {
            restart(session, settings)
        }
        (Finishing | Exported, Press(Control::Export)) if session.controls_revealed => {
            session.mark_exported();
            vec![Effect::RequestSnapshot]
        }
        (_, Press(control)) => {
            log::debug!("{:?} ignored in {:?}", control, session.phase);
            Vec::new()
        }

        (_, Key(key)) => {
            apply_key(session, key, settings);
            Vec::new()
        }

        (Drawing, UnlockTick) => match session.unlock_tick(settings.unlock_cap, || rng.next_color()) {
            Unlock::Unlocked(n) => {
                log::info!("unlock {}/{}: {:06x}", n, settings.unlock_cap, session.palette_color.0);
                vec![Effect::Unlocked(n)]
            }
            Unlock::Finished => {
                log::info!("all {} colors unlocked, finishing", settings.unlock_cap);
                vec![
                    Effect::Unlocked(session.unlock_count),
                    Effect::CancelUnlockTimer,
                    Effect::RevealMarkers,
                    Effect::HidePalette,
                    Effect::ArmGraceDelay,
                ]
            }
            Unlock::Ignored => Vec::new(),
        },
        (Idle | Priming | Unlocking | Finishing | Exported, UnlockTick) => Vec::new(),

        (_, DecayTick) => {
            session.decay_tick(settings);
            Vec::new()
        }

        (Finishing, GraceElapsed) => {
            session.grace_elapsed();
            vec![Effect::RevealFinishControls]
        }
        (Idle | Priming | Drawing | Unlocking | Exported, GraceElapsed) => Vec::new(),
    }
}

fn stroke_to(session: &mut SessionState, local: Vec2, pressed: bool, settings: &PaintSettings) -> Vec<Effect> {
    let mut effects = Vec::new();
    if session.drawing && pressed {
        let points = stroke::stamp_points(session.last_pointer, local, session.stamp_radius(settings));
        effects.extend(points.into_iter().map(Effect::Stamp));
        session.dirty = true;
    }
    session.last_pointer = local;
    effects
}

fn restart(session: &mut SessionState, settings: &PaintSettings) -> Vec<Effect> {
    log::info!("restarting session from {:?}", session.phase);
    *session = SessionState::new(settings);
    vec![Effect::NewSession, Effect::ClearCanvas]
}

fn apply_key(session: &mut SessionState, key: Key, settings: &PaintSettings) {
    match key {
        Key::BracketLeft => session.set_brush_scale(session.brush_scale - settings.brush_scale_step, settings),
        Key::BracketRight => session.set_brush_scale(session.brush_scale + settings.brush_scale_step, settings),
        Key::Minus => session.set_opacity(session.opacity - settings.opacity_step, settings),
        Key::Equal => session.set_opacity(session.opacity + settings.opacity_step, settings),
        Key::ArrowUp => session.change_brush(1, settings.num_brushes),
        Key::ArrowDown => session.change_brush(-1, settings.num_brushes),
        Key::Other => {}
    }
}
