//! Per-gesture bookkeeping.

use slipsheet_core::Point;
use slipsheet_input::{LastDeltaVelocityTracker, PointerId};

/// Who owns the current pointer gesture.
///
/// A gesture only ever classifies once: `Idle` moves to `Scrolling` or
/// `Dragging`, and the scroll-to-drag handoff may later turn `Scrolling` into
/// `Dragging`. Nothing moves a drag back to a scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// No contact, or movement still inside the dead zone.
    Idle,
    /// The content owns the gesture; native scrolling proceeds.
    Scrolling,
    /// The sheet owns the gesture and tracks the finger.
    Dragging,
}

/// State for one pointer interaction, created on pointer-down and consumed on
/// release. `start_position`/`start_value` form the drag origin; the handoff
/// rebases both mid-gesture.
pub(crate) struct GestureSession {
    pub pointer_id: PointerId,
    pub phase: GesturePhase,
    pub start_position: Point,
    pub start_value: f32,
    /// Content scroll offset at contact time; classification reads this, not
    /// a live sample, so momentum scrolling under the finger cannot flip the
    /// decision.
    pub initial_scroll_top: f32,
    /// Screen y of the previous sample, for per-sample direction checks.
    pub previous_y: f32,
    pub velocity: LastDeltaVelocityTracker,
}

impl GestureSession {
    pub fn new(
        pointer_id: PointerId,
        position: Point,
        value: f32,
        timestamp_ms: f64,
        initial_scroll_top: f32,
    ) -> Self {
        let mut velocity = LastDeltaVelocityTracker::new();
        velocity.add_sample(timestamp_ms, position.y);
        Self {
            pointer_id,
            phase: GesturePhase::Idle,
            start_position: position,
            start_value: value,
            initial_scroll_top,
            previous_y: position.y,
            velocity,
        }
    }

    /// Re-anchors the drag origin at the current sample so that sample
    /// contributes zero delta.
    pub fn rebase(&mut self, position: Point, value: f32) {
        self.start_position = position;
        self.start_value = value;
    }

    /// Total upward finger travel since the drag origin, in px.
    pub fn total_dy_up(&self, position: Point) -> f32 {
        self.start_position.y - position.y
    }
}
