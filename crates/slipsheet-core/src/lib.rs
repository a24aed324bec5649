#![doc = r"Runtime services shared by the slipsheet gesture crates."]

pub mod collections;
pub mod frame_clock;
pub mod geometry;
pub mod platform;
pub mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use geometry::Point;
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};

/// Identifier handed out for a registered one-shot frame callback.
pub type FrameCallbackId = u64;
