//! Timed, cancellable replay of recorded [`Trace`]s.
//!
//! [`Replay`] drives the emission of a precomputed trace to a rendering
//! collaborator: one element at a time, with a user-adjustable delay
//! between emissions and a small floor so rendering never saturates.
//! Playback is the sole suspension point in the engine — computation is
//! run-to-completion, only replay can be interrupted.
//!
//! A `Replay` is a cheaply clonable handle over shared state, so one clone
//! can drive [`Replay::start`] while another calls [`Replay::cancel`] from
//! a different thread. At most one playback is active per controller;
//! starting while playing is rejected rather than interleaved.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use algoviz_core::{Coord, SortStep, Trace, TraversalResult};
use thiserror::Error;

/// Delay floor between visited-order emissions.
pub const MIN_VISIT_DELAY: Duration = Duration::from_millis(5);
/// Delay floor between path emissions (the path phase renders slower).
pub const MIN_PATH_DELAY: Duration = Duration::from_millis(10);

/// Playback conflicts. Cancellation is never an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayError {
    #[error("a playback is already in progress")]
    AlreadyPlaying,
}

/// One element delivered to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayEvent {
    /// A cell settled during traversal (first playback phase).
    Visited(Coord),
    /// A cell on the reconstructed path (second playback phase).
    Path(Coord),
    /// One sorting step.
    Step(SortStep),
}

/// How a playback ended. Both outcomes return the controller to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// The trace was emitted to exhaustion.
    Completed,
    /// [`Replay::cancel`] stopped the emission early; elements already
    /// emitted stand.
    Cancelled,
}

/// The replay controller: idle until [`start`](Replay::start), playing
/// until exhaustion or [`cancel`](Replay::cancel).
#[derive(Debug, Clone, Default)]
pub struct Replay {
    playing: Arc<AtomicBool>,
    cancelled: Arc<AtomicBool>,
}

impl Replay {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a playback is currently in progress.
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    /// Request cancellation of the in-flight playback.
    ///
    /// A no-op when idle or when the final element has already been
    /// emitted; it never fails.
    pub fn cancel(&self) {
        if self.is_playing() {
            self.cancelled.store(true, Ordering::SeqCst);
        }
    }

    /// Play `trace` to exhaustion, delivering each element to `on_emit`
    /// and sleeping at least `max(floor, delay)` between emissions.
    ///
    /// Blocks the calling thread for the duration of the playback; use a
    /// clone of this controller to observe or cancel it from elsewhere.
    /// Returns [`ReplayError::AlreadyPlaying`] if a playback is active.
    pub fn start(
        &self,
        trace: &Trace,
        delay: Duration,
        mut on_emit: impl FnMut(ReplayEvent),
    ) -> Result<Playback, ReplayError> {
        if self
            .playing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ReplayError::AlreadyPlaying);
        }
        // A cancel aimed at an earlier, already-finished playback must not
        // leak into this one.
        self.cancelled.store(false, Ordering::SeqCst);

        log::debug!("replay started: {} elements, {:?} delay", trace.len(), delay);
        let outcome = self.play(trace, delay, &mut on_emit);
        self.playing.store(false, Ordering::SeqCst);
        log::debug!("replay {outcome:?}");
        Ok(outcome)
    }

    fn play(
        &self,
        trace: &Trace,
        delay: Duration,
        on_emit: &mut impl FnMut(ReplayEvent),
    ) -> Playback {
        match trace {
            Trace::Traversal(result) => self.play_traversal(result, delay, on_emit),
            Trace::Sort(steps) => self.emit_phase(
                steps.iter().cloned().map(ReplayEvent::Step),
                delay.max(MIN_VISIT_DELAY),
                on_emit,
            ),
        }
    }

    /// Two sequential phases sharing one cancellation flag: the full
    /// settlement order, then the full path.
    fn play_traversal(
        &self,
        result: &TraversalResult,
        delay: Duration,
        on_emit: &mut impl FnMut(ReplayEvent),
    ) -> Playback {
        let visited = result.visit_order.iter().copied().map(ReplayEvent::Visited);
        if self.emit_phase(visited, delay.max(MIN_VISIT_DELAY), on_emit) == Playback::Cancelled {
            return Playback::Cancelled;
        }
        let path = result.path.iter().copied().map(ReplayEvent::Path);
        self.emit_phase(path, delay.max(MIN_PATH_DELAY), on_emit)
    }

    fn emit_phase(
        &self,
        events: impl Iterator<Item = ReplayEvent>,
        delay: Duration,
        on_emit: &mut impl FnMut(ReplayEvent),
    ) -> Playback {
        // Cancellation is checked before each emission, never after: an
        // element already handed to the collaborator is not retracted.
        for event in events {
            if self.cancelled.load(Ordering::SeqCst) {
                return Playback::Cancelled;
            }
            on_emit(event);
            thread::sleep(delay);
        }
        Playback::Completed
    }
}
