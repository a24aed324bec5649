//! Tween specifications for settle animations.

use crate::easing::Easing;

/// Fixed-duration eased animation specification.
///
/// Doubles as the declarative transition hint surfaced to hosts that animate
/// the panel themselves instead of consuming per-frame values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl TweenSpec {
    pub const fn new(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    /// Spring-like deceleration advertised to hosts that run the settle
    /// transition themselves.
    pub const fn host_transition() -> Self {
        Self::new(320, Easing::CubicBezier(0.32, 0.72, 0.0, 1.0))
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::new(350, Easing::EaseOutOvershoot)
    }
}
