//! Frame-time accumulation and logical timers.
//!
//! Game logic never reads wall-clock time. The runner feeds variable frame
//! deltas into a [`FixedTimestep`]; each fixed step advances a [`Scheduler`],
//! which hands back the timers that came due, in due order.

/// Fixed timestep accumulator.
/// Ensures game logic runs at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: 10,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    /// Backlog beyond `max_steps` is dropped (a hidden tab should not replay minutes).
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator = (self.accumulator + frame_dt.max(0.0)).min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u32);

/// Lifetime scope for timers. Cancelling a token cancels every timer armed under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CancelToken(pub u32);

/// A timer that came due during [`Scheduler::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fired<K> {
    pub id: TimerId,
    pub token: CancelToken,
    pub kind: K,
    /// Logical time (seconds) the timer was due.
    pub at: f64,
}

#[derive(Debug, Clone)]
struct Timer<K> {
    id: TimerId,
    token: CancelToken,
    kind: K,
    due: f64,
    period: Option<f64>,
}

/// Single-threaded logical timer queue.
/// `K` is a game-defined tag saying what the timer means.
pub struct Scheduler<K> {
    now: f64,
    timers: Vec<Timer<K>>,
    next_id: u32,
    next_token: u32,
}

/// Shortest accepted period; keeps a zero period from firing forever in one advance.
const MIN_PERIOD: f64 = 1e-3;

impl<K: Copy> Scheduler<K> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            timers: Vec::new(),
            next_id: 1,
            next_token: 1,
        }
    }

    /// Current logical time in seconds.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Issue a fresh cancellation scope.
    pub fn issue_token(&mut self) -> CancelToken {
        let token = CancelToken(self.next_token);
        self.next_token += 1;
        token
    }

    /// Fire `kind` once, `delay` seconds from now.
    pub fn after(&mut self, token: CancelToken, delay: f64, kind: K) -> TimerId {
        self.insert(token, delay.max(0.0), None, kind)
    }

    /// Fire `kind` every `period` seconds, first firing one period from now.
    pub fn every(&mut self, token: CancelToken, period: f64, kind: K) -> TimerId {
        let period = period.max(MIN_PERIOD);
        self.insert(token, period, Some(period), kind)
    }

    fn insert(&mut self, token: CancelToken, delay: f64, period: Option<f64>, kind: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            token,
            kind,
            due: self.now + delay,
            period,
        });
        id
    }

    /// Cancel one timer. Returns whether it was still armed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Cancel every timer armed under `token`. Returns how many were dropped.
    pub fn cancel_scope(&mut self, token: CancelToken) -> usize {
        let before = self.timers.len();
        self.timers.retain(|t| t.token != token);
        before - self.timers.len()
    }

    pub fn is_armed(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Move logical time forward by `dt` and collect every firing in due order.
    /// Ties fire in arming order. Periodic timers may fire several times.
    pub fn advance(&mut self, dt: f64) -> Vec<Fired<K>> {
        let target = self.now + dt.max(0.0);
        let mut fired = Vec::new();

        while let Some(idx) = self.next_due(target) {
            let timer = &self.timers[idx];
            let period = timer.period;
            self.now = self.now.max(timer.due);
            fired.push(Fired {
                id: timer.id,
                token: timer.token,
                kind: timer.kind,
                at: timer.due,
            });
            match period {
                Some(period) => self.timers[idx].due += period,
                None => {
                    self.timers.swap_remove(idx);
                }
            }
        }

        self.now = target;
        fired
    }

    fn next_due(&self, target: f64) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= target)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.id.0.cmp(&b.id.0)))
            .map(|(i, _)| i)
    }
}

impl<K: Copy> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}
