//! Sheet tuning and the two stock presets.

use slipsheet_animation::TweenSpec;
use slipsheet_input::constants::TOUCH_SLOP;
use smallvec::smallvec;

use crate::metrics::SheetGeometry;
use crate::settle::SettlePolicy;

/// How a settle animates once its target is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleMechanism {
    /// The engine drives the value itself, one frame callback per frame.
    FrameDriven,
    /// The value jumps to the target immediately and the emitted frame
    /// advertises a transition spec for the host to animate.
    HostTransition,
}

/// Static tuning for one sheet instance.
#[derive(Clone, Debug)]
pub struct SheetConfig {
    pub geometry: SheetGeometry,
    pub policy: SettlePolicy,
    /// Fraction of overflow travel that survives the rubber band.
    pub resistance_factor: f32,
    pub settle_mechanism: SettleMechanism,
    /// Curve for engine-driven settles.
    pub settle_tween: TweenSpec,
    /// Curve advertised to the host by [`SettleMechanism::HostTransition`].
    pub host_transition: TweenSpec,
    /// Vertical travel (px) required before a gesture classifies.
    pub dead_zone_px: f32,
}

impl SheetConfig {
    /// Detail sheet: progress between 57% and 92% of the viewport height,
    /// expand-or-collapse on release, host-animated transitions.
    pub fn detail_sheet() -> Self {
        Self {
            geometry: SheetGeometry::FractionalHeights {
                collapsed_fraction: 0.57,
                expanded_fraction: 0.92,
            },
            policy: SettlePolicy::Anchored {
                anchors: smallvec![0.0, 1.0],
                velocity_threshold: 0.3,
            },
            resistance_factor: 0.3,
            settle_mechanism: SettleMechanism::HostTransition,
            settle_tween: TweenSpec::default(),
            host_transition: TweenSpec::host_transition(),
            dead_zone_px: TOUCH_SLOP,
        }
    }

    /// Free-range card: offset-mapped, rests anywhere, engine-driven settle
    /// frames. `peek_fraction` is the sliver of viewport visible when
    /// collapsed.
    pub fn free_sheet(peek_fraction: f32) -> Self {
        Self {
            geometry: SheetGeometry::OffsetRange {
                min_y: 0.0,
                peek_fraction,
            },
            policy: SettlePolicy::Free {
                velocity_threshold: 0.5,
                projection_window_ms: 150.0,
            },
            resistance_factor: 0.3,
            settle_mechanism: SettleMechanism::FrameDriven,
            settle_tween: TweenSpec::default(),
            host_transition: TweenSpec::host_transition(),
            dead_zone_px: TOUCH_SLOP,
        }
    }

    pub fn with_settle_mechanism(mut self, mechanism: SettleMechanism) -> Self {
        self.settle_mechanism = mechanism;
        self
    }

    pub fn with_policy(mut self, policy: SettlePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_settle_tween(mut self, tween: TweenSpec) -> Self {
        self.settle_tween = tween;
        self
    }
}
