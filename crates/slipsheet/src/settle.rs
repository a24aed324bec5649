//! Release-time target selection.

use smallvec::SmallVec;

use crate::bounds::SheetBounds;

/// Where a released sheet comes to rest.
///
/// Thresholds compare against the pointer-space speed (px/ms); the direction
/// and projection use the value-space velocity, so one policy serves both
/// progress-mapped and offset-mapped sheets.
#[derive(Clone, Debug, PartialEq)]
pub enum SettlePolicy {
    /// Discrete rest anchors in value space. A fast release moves to the next
    /// anchor in the motion's direction, a slow one to the nearest anchor.
    Anchored {
        /// Ascending anchor values.
        anchors: SmallVec<[f32; 4]>,
        /// Pointer speed (px/ms) above which a release counts as a fling.
        velocity_threshold: f32,
    },
    /// Continuous range. A fast release projects the motion forward by the
    /// window and rests wherever that lands; a slow one stays put. Neither
    /// snaps to an edge.
    Free {
        /// Pointer speed (px/ms) above which a release counts as a fling.
        velocity_threshold: f32,
        /// How far ahead (ms) a fling is projected.
        projection_window_ms: f32,
    },
}

impl SettlePolicy {
    /// Picks the rest value for a release at `value`. The result is always
    /// inside `bounds`, even when the release happened rubber-banded outside.
    pub fn decide_target(
        &self,
        value: f32,
        pointer_velocity: f32,
        value_velocity: f32,
        bounds: SheetBounds,
    ) -> f32 {
        match self {
            SettlePolicy::Anchored {
                anchors,
                velocity_threshold,
            } => {
                let target = if pointer_velocity.abs() > *velocity_threshold
                    && value_velocity != 0.0
                {
                    next_anchor_in_direction(anchors, value, value_velocity)
                        .unwrap_or_else(|| nearest_anchor(anchors, value))
                } else {
                    nearest_anchor(anchors, value)
                };
                bounds.clamp(target)
            }
            SettlePolicy::Free {
                velocity_threshold,
                projection_window_ms,
            } => {
                if pointer_velocity.abs() > *velocity_threshold {
                    bounds.clamp(value + value_velocity * projection_window_ms)
                } else {
                    bounds.clamp(value)
                }
            }
        }
    }
}

/// First anchor strictly past `value` in the direction of motion, if any.
fn next_anchor_in_direction(anchors: &[f32], value: f32, value_velocity: f32) -> Option<f32> {
    let candidate = if value_velocity > 0.0 {
        anchors
            .iter()
            .copied()
            .filter(|anchor| *anchor > value)
            .fold(f32::INFINITY, f32::min)
    } else {
        anchors
            .iter()
            .copied()
            .filter(|anchor| *anchor < value)
            .fold(f32::NEG_INFINITY, f32::max)
    };
    candidate.is_finite().then_some(candidate)
}

/// Anchor with the smallest distance to `value`; ties go to the earlier
/// (lower) anchor. Returns `value` itself when no anchors exist.
fn nearest_anchor(anchors: &[f32], value: f32) -> f32 {
    let mut best = value;
    let mut best_distance = f32::INFINITY;
    for &anchor in anchors {
        let distance = (anchor - value).abs();
        if distance < best_distance {
            best = anchor;
            best_distance = distance;
        }
    }
    best
}
