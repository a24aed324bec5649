#![doc = r"Pointer input model for the slipsheet gesture engine."]

pub mod constants;
pub mod event_clock;
pub mod types;
pub mod velocity;

pub use event_clock::MonotonicClock;
pub use types::{PointerEvent, PointerEventKind, PointerId};
pub use velocity::LastDeltaVelocityTracker;
