// SPDX-License-Identifier: MIT OR Apache-2.0
//! Renderer contract consumed by the playback controller.

/// External drawing collaborator.
///
/// The playback controller hands every rendered frame (plus its
/// secondary-row flag) to a renderer; the renderer reads status, log text
/// and line references through the frame type and draws the domain payload
/// however it likes. Implementations must be idempotent: rendering the
/// same frame twice produces identical visual output, and the renderer
/// never mutates frame data (it only ever receives a shared reference).
pub trait Renderer<S> {
    /// Draw one frame. `secondary_row` is true when the bucket row of
    /// radix sort should be visible.
    fn render(&mut self, frame: &S, secondary_row: bool);
}
