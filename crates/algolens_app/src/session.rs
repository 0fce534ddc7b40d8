// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sorting session: the context object owning selection and playback.
//!
//! The session replaces the ambient globals of a typical visualizer
//! page: it owns the selected algorithm, the current input list, the
//! pseudocode panel and the playback controller, and every mutation goes
//! through it. Rebuilding or reloading while playback is running always
//! forces a stop first, so exactly one advancement source ever drives
//! the cursor.

use algolens_player::{
    PlaybackController, PlaybackState, Pseudocode, Renderer, StateLog,
};
use algolens_sort::algorithms::{SortKind, SortOptions};
use algolens_sort::{input, InputError, SortState};
use std::time::Duration;

/// One interactive sorting session
pub struct Session {
    kind: SortKind,
    options: SortOptions,
    values: Vec<i64>,
    pseudocode: Pseudocode,
    controller: PlaybackController<SortState>,
}

#[allow(dead_code)] // Intentionally kept for API completeness
impl Session {
    /// Create a session with an algorithm selected and no list yet
    pub fn new(kind: SortKind) -> Self {
        let options = SortOptions::default();
        Self {
            kind,
            options,
            values: Vec::new(),
            pseudocode: kind.pseudocode(&options),
            controller: PlaybackController::new(),
        }
    }

    /// Switch algorithms; stops any running playback and swaps the
    /// pseudocode panel
    pub fn select<R: Renderer<SortState>>(&mut self, kind: SortKind, renderer: &mut R) {
        if self.controller.state().is_playing() {
            self.controller.stop(renderer);
        }
        self.kind = kind;
        self.pseudocode = kind.pseudocode(&self.options);
        tracing::info!(algorithm = kind.name(), "algorithm selected");
    }

    /// Change the option toggles; the pseudocode panel follows
    pub fn set_options(&mut self, options: SortOptions) {
        self.options = options;
        self.pseudocode = self.kind.pseudocode(&options);
    }

    /// Load a fresh random list and show it at rest
    pub fn create_random_list<R: Renderer<SortState>>(&mut self, renderer: &mut R) {
        let values = input::random_list(self.kind);
        self.load_values(values, renderer);
    }

    /// Parse and load a user-supplied list.
    ///
    /// On a validation error nothing changes: the previous list, log and
    /// cursor all stay as they were.
    pub fn create_custom_list<R: Renderer<SortState>>(
        &mut self,
        text: &str,
        renderer: &mut R,
    ) -> Result<(), InputError> {
        let values = input::parse_custom(text)?;
        self.load_values(values, renderer);
        Ok(())
    }

    fn load_values<R: Renderer<SortState>>(&mut self, values: Vec<i64>, renderer: &mut R) {
        if self.controller.state().is_playing() {
            self.controller.stop(renderer);
        }
        let mut log = StateLog::new();
        log.push(SortState::from_values(&values));
        self.values = values;
        self.controller.load(log);
        self.controller.jump_to(0, renderer);
    }

    /// Build the state log for the current list and start playback.
    ///
    /// A run already in progress is stopped first. Does nothing until a
    /// list has been loaded.
    pub fn run<R: Renderer<SortState>>(&mut self, renderer: &mut R) {
        if self.values.is_empty() {
            tracing::warn!("run requested before any list was created");
            return;
        }
        if self.controller.state().is_playing() {
            self.controller.stop(renderer);
        }
        let log = self.kind.build(&self.values, &self.options);
        self.controller.load(log);
        self.controller.play(renderer);
    }

    /// Feed elapsed time to the playback controller
    pub fn update<R: Renderer<SortState>>(&mut self, delta: Duration, renderer: &mut R) {
        self.controller.update(delta, renderer);
    }

    /// Resume auto-play from the cursor
    pub fn play<R: Renderer<SortState>>(&mut self, renderer: &mut R) {
        self.controller.play(renderer);
    }

    /// Suspend auto-play
    pub fn pause(&mut self) {
        self.controller.pause();
    }

    /// Restart auto-play from the first frame
    pub fn replay<R: Renderer<SortState>>(&mut self, renderer: &mut R) {
        self.controller.replay(renderer);
    }

    /// Destructive reset back to the original list
    pub fn stop<R: Renderer<SortState>>(&mut self, renderer: &mut R) {
        self.controller.stop(renderer);
    }

    /// Step one frame forward
    pub fn step_forward<R: Renderer<SortState>>(&mut self, renderer: &mut R) {
        self.controller.step_forward(renderer);
    }

    /// Step one frame backward
    pub fn step_backward<R: Renderer<SortState>>(&mut self, renderer: &mut R) {
        self.controller.step_backward(renderer);
    }

    /// Jump to a frame (clamped) and render it
    pub fn jump_to<R: Renderer<SortState>>(&mut self, index: usize, renderer: &mut R) {
        self.controller.jump_to(index, renderer);
    }

    /// Change the auto-play interval
    pub fn set_interval(&mut self, interval: Duration) {
        self.controller.set_interval(interval);
    }

    /// Selected algorithm
    pub fn kind(&self) -> SortKind {
        self.kind
    }

    /// Current input list
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Pseudocode panel for the selected algorithm
    pub fn pseudocode(&self) -> &Pseudocode {
        &self.pseudocode
    }

    /// Current playback state
    pub fn playback_state(&self) -> PlaybackState {
        self.controller.state()
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.controller.cursor()
    }

    /// Frames in the current log
    pub fn total_frames(&self) -> usize {
        self.controller.total_frames()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullRenderer;

    impl Renderer<SortState> for NullRenderer {
        fn render(&mut self, _frame: &SortState, _secondary_row: bool) {}
    }

    #[test]
    fn test_custom_list_loads_single_pristine_frame() {
        let mut session = Session::new(SortKind::Bubble);
        let mut r = NullRenderer;
        session.create_custom_list("3, 1, 2", &mut r).unwrap();
        assert_eq!(session.values(), &[3, 1, 2]);
        assert_eq!(session.total_frames(), 1);
        assert_eq!(session.playback_state(), PlaybackState::Idle);
    }

    #[test]
    fn test_invalid_custom_list_changes_nothing() {
        let mut session = Session::new(SortKind::Bubble);
        let mut r = NullRenderer;
        session.create_custom_list("5, 4, 6", &mut r).unwrap();
        session.run(&mut r);
        let frames = session.total_frames();
        let cursor = session.cursor();

        let err = session.create_custom_list("5, x, 6", &mut r).unwrap_err();
        assert_eq!(err, InputError::NotANumber("x".into()));
        assert_eq!(session.values(), &[5, 4, 6]);
        assert_eq!(session.total_frames(), frames);
        assert_eq!(session.cursor(), cursor);
    }

    #[test]
    fn test_run_builds_log_and_plays() {
        let mut session = Session::new(SortKind::Bubble);
        let mut r = NullRenderer;
        session.create_custom_list("2, 1, 3", &mut r).unwrap();
        session.run(&mut r);
        assert!(session.total_frames() > 1);
        assert_eq!(session.playback_state(), PlaybackState::Playing);
    }

    #[test]
    fn test_stop_collapses_to_original_list() {
        let mut session = Session::new(SortKind::Selection);
        let mut r = NullRenderer;
        session.create_custom_list("9, 8, 7", &mut r).unwrap();
        session.run(&mut r);
        session.update(Duration::from_millis(1500), &mut r);

        session.stop(&mut r);
        assert_eq!(session.total_frames(), 1);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.playback_state(), PlaybackState::Idle);
    }

    #[test]
    fn test_rerun_while_playing_restarts_cleanly() {
        let mut session = Session::new(SortKind::Insertion);
        let mut r = NullRenderer;
        session.create_custom_list("3, 2, 1", &mut r).unwrap();
        session.run(&mut r);
        session.update(Duration::from_millis(750), &mut r);
        assert!(session.cursor() > 0);

        session.run(&mut r);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.playback_state(), PlaybackState::Playing);
    }

    #[test]
    fn test_select_swaps_pseudocode() {
        let mut session = Session::new(SortKind::Bubble);
        let mut r = NullRenderer;
        assert_eq!(session.pseudocode().line(1), Some("do"));
        session.select(SortKind::Radix, &mut r);
        assert!(session.pseudocode().is_empty());
        assert_eq!(session.kind(), SortKind::Radix);
    }
}
