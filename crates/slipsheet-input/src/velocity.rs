//! Velocity tracking for release-time momentum decisions.
//!
//! Tracks only the most recent sample pair. The instantaneous quotient keeps
//! the tracker maximally responsive to direction changes right before
//! release, at the cost of smoothing; momentum decisions downstream depend on
//! this exact behavior.

/// 1D velocity tracker over the last two pointer samples.
///
/// Velocities are in logical pixels per millisecond, upward-positive: a
/// finger moving up the screen (decreasing y) produces a positive velocity.
#[derive(Clone, Debug, Default)]
pub struct LastDeltaVelocityTracker {
    last: Option<Sample>,
    velocity: f32,
}

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: f64,
    y: f32,
}

impl LastDeltaVelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pointer sample at the given timestamp (milliseconds).
    ///
    /// Samples with a non-positive time delta leave the previous velocity in
    /// place so duplicate event timestamps cannot zero out a fling.
    pub fn add_sample(&mut self, time_ms: f64, y: f32) {
        if let Some(last) = self.last {
            let dt = (time_ms - last.time_ms) as f32;
            if dt > 0.0 {
                let velocity = (last.y - y) / dt;
                if velocity.is_finite() {
                    self.velocity = velocity;
                }
            }
        }
        self.last = Some(Sample { time_ms, y });
    }

    /// Current velocity in px/ms, upward-positive.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Clears all tracked data for a new gesture.
    pub fn reset(&mut self) {
        self.last = None;
        self.velocity = 0.0;
    }
}
