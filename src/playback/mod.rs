//! Playback of a recorded step sequence
//!
//! [`PlaybackController`] owns one [`StepSequence`] and a position in it, and
//! moves through it under user control or on a timer.
//!
//! # States
//!
//! ```text
//!            load                play               tick at last index
//!  Idle ─────────────▶ Paused ─────────▶ Playing ──────────────────────▶ Complete
//!                        ▲   ◀─────────                                     │
//!                        │     pause                                        │
//!                        └──────────────────── reset / step back ───────────┘
//! ```
//!
//! # Timer
//!
//! The timer is a single optional deadline stored on the controller. Nothing
//! runs in the background: the owner calls [`PlaybackController::poll`] from
//! its event loop and every tick whose deadline has passed fires there.
//! Leaving `Playing` clears the deadline before the call returns, so a tick
//! can never fire afterwards.

pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use crate::algorithms::constants::{DEFAULT_INTERVAL_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use crate::snapshot::{Step, StepSequence};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Where the controller is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No sequence loaded
    Idle,
    /// Sequence loaded, not advancing
    Paused,
    /// Advancing on the timer
    Playing,
    /// Reached the final step while playing or stepping
    Complete,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "IDLE",
            PlaybackState::Paused => "PAUSED",
            PlaybackState::Playing => "PLAYING",
            PlaybackState::Complete => "COMPLETE",
        }
    }
}

/// Playback operation refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("cannot {operation}: no step sequence is loaded")]
    NotReady { operation: &'static str },
}

/// Callback receiving `(index, step)` on every visible change
pub type Renderer = Box<dyn FnMut(usize, &Step)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTick {
    due: Instant,
}

/// State machine replaying a step sequence
pub struct PlaybackController<C: Clock = SystemClock> {
    sequence: Option<StepSequence>,
    current_index: usize,
    state: PlaybackState,
    interval: Duration,
    pending: Option<PendingTick>,
    renderer: Option<Renderer>,
    clock: C,
}

impl PlaybackController<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for PlaybackController<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PlaybackController<C> {
    pub fn with_clock(clock: C) -> Self {
        PlaybackController {
            sequence: None,
            current_index: 0,
            state: PlaybackState::Idle,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            pending: None,
            renderer: None,
            clock,
        }
    }

    /// Register the callback that receives each displayed step
    pub fn set_renderer(&mut self, renderer: impl FnMut(usize, &Step) + 'static) {
        self.renderer = Some(Box::new(renderer));
    }

    // ========== Accessors ==========

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// `(currentIndex, state)` in one read
    pub fn position(&self) -> (usize, PlaybackState) {
        (self.current_index, self.state)
    }

    pub fn sequence(&self) -> Option<&StepSequence> {
        self.sequence.as_ref()
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.sequence.as_ref()?.get(self.current_index)
    }

    /// Number of loaded steps, zero when idle
    pub fn len(&self) -> usize {
        self.sequence.as_ref().map_or(0, StepSequence::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval.as_millis() as u64
    }

    /// When the pending tick is due, if one is scheduled
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|t| t.due)
    }

    // ========== Controls ==========

    /// Replace the loaded sequence and rewind to its first step
    pub fn load(&mut self, sequence: StepSequence) {
        self.cancel_tick();
        debug!(
            algorithm = sequence.algorithm().as_str(),
            steps = sequence.len(),
            "loading step sequence"
        );
        self.sequence = Some(sequence);
        self.current_index = 0;
        self.transition(PlaybackState::Paused);
        self.emit();
    }

    pub fn play(&mut self) -> Result<(), PlaybackError> {
        match self.state {
            PlaybackState::Idle => Err(self.not_ready("play")),
            PlaybackState::Paused => {
                self.transition(PlaybackState::Playing);
                self.schedule_from(self.clock.now());
                Ok(())
            }
            PlaybackState::Playing | PlaybackState::Complete => Ok(()),
        }
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.cancel_tick();
            self.transition(PlaybackState::Paused);
        }
    }

    /// Play when paused, pause when playing
    pub fn toggle(&mut self) -> Result<(), PlaybackError> {
        if self.is_playing() {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Advance one step. Returns whether the position moved.
    pub fn step_forward(&mut self) -> Result<bool, PlaybackError> {
        let last = match self.state {
            PlaybackState::Idle => return Err(self.not_ready("step forward")),
            PlaybackState::Playing => return Ok(false),
            PlaybackState::Paused | PlaybackState::Complete => self.last_index(),
        };
        if self.current_index >= last {
            return Ok(false);
        }

        self.current_index += 1;
        if self.current_index == last {
            self.transition(PlaybackState::Complete);
        }
        self.emit();
        Ok(true)
    }

    /// Go back one step. Returns whether the position moved.
    pub fn step_backward(&mut self) -> Result<bool, PlaybackError> {
        match self.state {
            PlaybackState::Idle => return Err(self.not_ready("step backward")),
            PlaybackState::Playing => return Ok(false),
            PlaybackState::Paused | PlaybackState::Complete => {}
        }
        if self.current_index == 0 {
            return Ok(false);
        }

        self.current_index -= 1;
        self.transition(PlaybackState::Paused);
        self.emit();
        Ok(true)
    }

    /// Jump straight to the final step
    pub fn jump_to_end(&mut self) -> Result<bool, PlaybackError> {
        let last = match self.state {
            PlaybackState::Idle => return Err(self.not_ready("jump to end")),
            PlaybackState::Playing => return Ok(false),
            PlaybackState::Paused | PlaybackState::Complete => self.last_index(),
        };
        if self.current_index == last {
            return Ok(false);
        }

        self.current_index = last;
        self.transition(PlaybackState::Complete);
        self.emit();
        Ok(true)
    }

    /// Rewind to the first step and stop
    pub fn reset(&mut self) -> Result<(), PlaybackError> {
        if self.state == PlaybackState::Idle {
            return Err(self.not_ready("reset"));
        }
        self.cancel_tick();
        self.current_index = 0;
        self.transition(PlaybackState::Paused);
        self.emit();
        Ok(())
    }

    /// Change the tick interval; returns the value actually applied.
    ///
    /// A tick that is already pending keeps its deadline.
    pub fn set_speed(&mut self, interval_ms: u64) -> u64 {
        let clamped = interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
        if clamped != interval_ms {
            debug!(requested = interval_ms, applied = clamped, "interval clamped");
        }
        self.interval = Duration::from_millis(clamped);
        clamped
    }

    /// Fire every tick that is due. Returns how many fired.
    pub fn poll(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some(tick) = self.pending {
            if tick.due > now {
                break;
            }
            self.pending = None;
            self.tick(tick.due);
            fired += 1;
        }
        fired
    }

    // ========== Internals ==========

    fn tick(&mut self, due: Instant) {
        if self.state != PlaybackState::Playing {
            return;
        }
        if self.current_index < self.last_index() {
            self.current_index += 1;
            trace!(index = self.current_index, "tick");
            self.emit();
            // next deadline counts from this one so cadence does not drift
            self.schedule_from(due);
        } else {
            self.transition(PlaybackState::Complete);
        }
    }

    fn schedule_from(&mut self, from: Instant) {
        self.pending = Some(PendingTick {
            due: from + self.interval,
        });
    }

    fn cancel_tick(&mut self) {
        if self.pending.take().is_some() {
            trace!("pending tick cancelled");
        }
    }

    fn last_index(&self) -> usize {
        self.sequence.as_ref().map_or(0, StepSequence::last_index)
    }

    fn transition(&mut self, to: PlaybackState) {
        if self.state != to {
            debug!(from = self.state.label(), to = to.label(), index = self.current_index, "playback state");
            self.state = to;
        }
    }

    fn not_ready(&self, operation: &'static str) -> PlaybackError {
        warn!(operation, "playback operation with no sequence loaded");
        PlaybackError::NotReady { operation }
    }

    fn emit(&mut self) {
        let index = self.current_index;
        if let (Some(sequence), Some(renderer)) = (self.sequence.as_ref(), self.renderer.as_mut()) {
            if let Some(step) = sequence.get(index) {
                renderer(index, step);
            }
        }
    }
}
