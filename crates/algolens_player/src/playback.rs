// SPDX-License-Identifier: MIT OR Apache-2.0
//! Cursor-based playback over a recorded state log.

use crate::log::StateLog;
use crate::render::Renderer;
use std::time::Duration;

/// Default delay between auto-played frames
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(750);

/// Playback state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No playback in progress
    #[default]
    Idle,
    /// Auto-advancing under the caller's clock
    Playing,
    /// Auto-advance suspended; cursor holds its position
    Paused,
    /// The last frame has been rendered
    Finished,
}

impl PlaybackState {
    /// Check if auto-advance is active
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }
}

/// Cursor over a recorded state log.
///
/// The controller exclusively owns the current log and cursor. It has no
/// clock of its own: the caller feeds elapsed time into
/// [`update`](PlaybackController::update) (a real timer, a test clock, or
/// manual stepping), and every elapsed interval renders the cursor frame
/// and advances by one. All transport controls render immediately through
/// the supplied [`Renderer`].
pub struct PlaybackController<S> {
    log: StateLog<S>,
    cursor: usize,
    state: PlaybackState,
    interval: Duration,
    accumulated: Duration,
    on_finished: Option<Box<dyn FnMut() + Send>>,
}

impl<S: Clone> PlaybackController<S> {
    /// Create a controller with an empty log
    pub fn new() -> Self {
        Self {
            log: StateLog::new(),
            cursor: 0,
            state: PlaybackState::Idle,
            interval: DEFAULT_INTERVAL,
            accumulated: Duration::ZERO,
            on_finished: None,
        }
    }

    /// Replace the current log and reset the cursor.
    ///
    /// Implicitly stops any playback in progress, so a rebuild while
    /// Playing can never leave two advancement sources driving one
    /// cursor. The playback speed is kept (only [`stop`] restores the
    /// default interval).
    ///
    /// [`stop`]: PlaybackController::stop
    pub fn load(&mut self, log: StateLog<S>) {
        self.log = log;
        self.cursor = 0;
        self.state = PlaybackState::Idle;
        self.accumulated = Duration::ZERO;
    }

    /// Begin (or resume) auto-play from the current cursor.
    ///
    /// Renders the cursor frame immediately; subsequent frames are driven
    /// by [`update`](PlaybackController::update). Entering play from
    /// Finished leaves the cursor on the last frame, so the next tick
    /// finishes again - use [`replay`](PlaybackController::replay) to
    /// restart from the top.
    pub fn play<R: Renderer<S>>(&mut self, renderer: &mut R) {
        if self.log.is_empty() || self.state.is_playing() {
            return;
        }
        self.state = PlaybackState::Playing;
        self.accumulated = Duration::ZERO;
        self.render_current(renderer);
    }

    /// Feed elapsed time into the controller.
    ///
    /// Does nothing unless Playing. Each full interval renders the cursor
    /// frame and advances by one; when the cursor is already on the last
    /// frame it is rendered once more, the controller transitions to
    /// Finished and the completion callback (if any) fires.
    pub fn update<R: Renderer<S>>(&mut self, delta: Duration, renderer: &mut R) {
        if !self.state.is_playing() {
            return;
        }
        self.accumulated += delta;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            self.render_current(renderer);
            if self.cursor + 1 < self.log.len() {
                self.cursor += 1;
            } else {
                self.state = PlaybackState::Finished;
                self.accumulated = Duration::ZERO;
                tracing::debug!(frames = self.log.len(), "playback finished");
                if let Some(callback) = self.on_finished.as_mut() {
                    callback();
                }
                break;
            }
        }
    }

    /// Suspend auto-play, keeping the cursor where it is
    pub fn pause(&mut self) {
        if self.state.is_playing() {
            self.state = PlaybackState::Paused;
            self.accumulated = Duration::ZERO;
        }
    }

    /// Restart auto-play from the first frame
    pub fn replay<R: Renderer<S>>(&mut self, renderer: &mut R) {
        if self.log.is_empty() {
            return;
        }
        self.cursor = 0;
        self.state = PlaybackState::Playing;
        self.accumulated = Duration::ZERO;
        self.render_current(renderer);
    }

    /// Destructive reset: collapse the log to its first frame.
    ///
    /// The cursor returns to 0, the first frame is re-rendered, the
    /// interval is restored to [`DEFAULT_INTERVAL`] and the controller
    /// goes Idle. Unlike [`pause`](PlaybackController::pause), the
    /// recorded run is gone afterwards.
    pub fn stop<R: Renderer<S>>(&mut self, renderer: &mut R) {
        self.state = PlaybackState::Idle;
        self.log.truncate_to_first();
        self.cursor = 0;
        self.accumulated = Duration::ZERO;
        self.interval = DEFAULT_INTERVAL;
        self.render_current(renderer);
    }

    /// Move the cursor one frame forward (clamped) and render.
    ///
    /// Deliberately allowed in every playback state, not just
    /// Paused/Finished; the timer is untouched either way.
    pub fn step_forward<R: Renderer<S>>(&mut self, renderer: &mut R) {
        if self.cursor + 1 < self.log.len() {
            self.cursor += 1;
        }
        self.render_current(renderer);
    }

    /// Move the cursor one frame backward (clamped) and render.
    ///
    /// Same relaxation as [`step_forward`](PlaybackController::step_forward).
    pub fn step_backward<R: Renderer<S>>(&mut self, renderer: &mut R) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.render_current(renderer);
    }

    /// Jump to an arbitrary frame and render it immediately.
    ///
    /// Out-of-range indices are clamped to the last frame.
    pub fn jump_to<R: Renderer<S>>(&mut self, index: usize, renderer: &mut R) {
        if self.log.is_empty() {
            return;
        }
        self.cursor = index.min(self.log.len() - 1);
        self.render_current(renderer);
    }

    /// Set the delay between auto-played frames
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Install a callback invoked when auto-play reaches the last frame
    pub fn set_on_finished(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_finished = Some(Box::new(callback));
    }

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of frames in the current log
    pub fn total_frames(&self) -> usize {
        self.log.len()
    }

    /// Borrow the current log
    pub fn log(&self) -> &StateLog<S> {
        &self.log
    }

    fn render_current<R: Renderer<S>>(&self, renderer: &mut R) {
        if let Some(frame) = self.log.get(self.cursor) {
            let secondary = self.log.secondary(self.cursor).unwrap_or(false);
            renderer.render(frame, secondary);
        }
    }
}

impl<S: Clone> Default for PlaybackController<S> {
    fn default() -> Self {
        Self::new()
    }
}
