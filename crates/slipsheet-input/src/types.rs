use slipsheet_core::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking for gesture disambiguation.
///
/// Events can be consumed by the sheet controller once it owns the gesture,
/// so the host knows to suppress its native handling (content scrolling,
/// clicks) for that event.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Event timestamp in milliseconds. Fractional values are preserved so
    /// high-rate input does not collapse into duplicate timestamps.
    pub timestamp_ms: f64,
    /// Tracks whether this event has been consumed by a handler.
    /// Shared via Rc<Cell> so consumption can be tracked across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, timestamp_ms: f64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            timestamp_ms,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Tag this event with a non-default pointer id (second touch, stylus).
    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Mark this event as consumed, preventing other handlers from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    /// Check if this event has been consumed by another handler.
    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
