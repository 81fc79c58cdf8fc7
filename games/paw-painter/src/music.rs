use easel_engine::{Rgb, SoundEvent};

/// Sound id telling the host to stop track `n` is `SOUND_STOP_BASE + n`.
pub const SOUND_STOP_BASE: u32 = 64;
/// Sound id telling the host to start looping track `n` is `SOUND_PLAY_BASE + n`.
pub const SOUND_PLAY_BASE: u32 = 128;

/// Which background track is playing.
#[derive(Debug, Clone)]
pub struct MusicDeck {
    track_count: usize,
    current: Option<usize>,
}

/// What the host must do to switch tracks, and how to tint the track's button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackChange {
    pub stop: Option<usize>,
    pub play: usize,
    pub tint: Rgb,
}

impl TrackChange {
    pub fn sounds(&self) -> Vec<SoundEvent> {
        self.stop
            .map(|n| SoundEvent(SOUND_STOP_BASE + n as u32))
            .into_iter()
            .chain(std::iter::once(SoundEvent(SOUND_PLAY_BASE + self.play as u32)))
            .collect()
    }
}

impl MusicDeck {
    pub fn new(track_count: usize) -> Self {
        Self {
            track_count: track_count.max(1),
            current: None,
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn track_count(&self) -> usize {
        self.track_count
    }

    /// Switch to track `index`, wrapping out-of-range values in both directions.
    pub fn change(&mut self, index: i64) -> TrackChange {
        let n = self.track_count as i64;
        let play = ((index % n + n) % n) as usize;
        let stop = self.current.replace(play);
        TrackChange {
            stop,
            play,
            tint: Rgb::from_hsv(play as f32 / self.track_count as f32, 1.0, 1.0),
        }
    }
}
