//! Shared gesture constants for consistent touch/pointer handling.
//!
//! These values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor.

/// Dead zone in logical pixels.
///
/// Vertical movement within this distance of the initial press position never
/// classifies the gesture: the sheet stays put and taps still land on child
/// controls. 5.0 is deliberately tighter than typical platform touch slop so
/// the sheet starts tracking the finger early.
pub const TOUCH_SLOP: f32 = 5.0;

/// Scroll offset (px) at or below which content counts as scrolled to its top.
///
/// Sub-pixel scroll positions and momentum remainders keep real content from
/// reporting exactly zero, so the scroll-to-drag handoff triggers within this
/// epsilon instead.
pub const SCROLL_HANDOFF_EPSILON: f32 = 1.0;

/// Normalized progress at or above which a sheet counts as fully expanded.
pub const EXPANDED_PROGRESS_TOLERANCE: f32 = 0.99;

/// Distance (px) from the expanded offset within which a free-range sheet
/// counts as fully expanded.
pub const EXPANDED_OFFSET_TOLERANCE_PX: f32 = 5.0;
