//! Platform abstraction traits for the gesture runtime.
//!
//! These traits let the engine delegate frame scheduling and clock
//! responsibilities to the host (a winit shell, a canvas loop, a test
//! harness) without depending directly on platform APIs.

/// Schedules frame work on behalf of the gesture runtime.
///
/// Implementations are responsible for waking the host's render loop when
/// the engine has frame callbacks pending. They must be safe to use from
/// multiple threads.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Self::Instant) -> u64;
}
