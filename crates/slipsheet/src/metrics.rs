//! Pixel geometry derived from the viewport.

use slipsheet_input::constants::{EXPANDED_OFFSET_TOLERANCE_PX, EXPANDED_PROGRESS_TOLERANCE};

use crate::bounds::SheetBounds;

/// How a sheet's tracked value maps onto pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SheetGeometry {
    /// Normalized progress in `[0, 1]` between two visible-height fractions
    /// of the viewport. Detail sheets use this.
    FractionalHeights {
        collapsed_fraction: f32,
        expanded_fraction: f32,
    },
    /// Translate-y offset of the sheet's top edge in pixels: `min_y` when
    /// fully expanded, `(1 - peek_fraction) * viewport` when collapsed.
    /// Free-range cards use this.
    OffsetRange { min_y: f32, peek_fraction: f32 },
}

/// Concrete pixel facts for one geometry at one viewport height.
///
/// Rebuilt whenever the viewport changes; everything downstream (bounds,
/// velocity conversion, frame output) reads from here so a resize is a single
/// swap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetMetrics {
    pub bounds: SheetBounds,
    pub collapsed_value: f32,
    pub expanded_value: f32,
    /// Value change per pixel of upward finger travel.
    pub value_per_px: f32,
    pub collapsed_height_px: f32,
    pub expanded_height_px: f32,
    pub viewport_height: f32,
    /// Value-space distance from `expanded_value` within which the sheet
    /// counts as fully expanded.
    expanded_tolerance: f32,
}

impl SheetMetrics {
    pub fn new(geometry: SheetGeometry, viewport_height: f32) -> Self {
        let viewport = if viewport_height.is_finite() {
            viewport_height.max(0.0)
        } else {
            0.0
        };
        let (collapsed_value, expanded_value, collapsed_height_px, expanded_height_px, tolerance) =
            match geometry {
                SheetGeometry::FractionalHeights {
                    collapsed_fraction,
                    expanded_fraction,
                } => (
                    0.0,
                    1.0,
                    collapsed_fraction * viewport,
                    expanded_fraction * viewport,
                    1.0 - EXPANDED_PROGRESS_TOLERANCE,
                ),
                SheetGeometry::OffsetRange {
                    min_y,
                    peek_fraction,
                } => {
                    let max_y = ((1.0 - peek_fraction) * viewport).max(min_y);
                    (
                        max_y,
                        min_y,
                        viewport - max_y,
                        viewport - min_y,
                        EXPANDED_OFFSET_TOLERANCE_PX,
                    )
                }
            };
        let span_px = expanded_height_px - collapsed_height_px;
        let value_per_px = if span_px.abs() > f32::EPSILON {
            (expanded_value - collapsed_value) / span_px
        } else {
            0.0
        };
        Self {
            bounds: SheetBounds::new(collapsed_value, expanded_value),
            collapsed_value,
            expanded_value,
            value_per_px,
            collapsed_height_px,
            expanded_height_px,
            viewport_height: viewport,
            expanded_tolerance: tolerance,
        }
    }

    /// Normalized collapsed(0) to expanded(1) fraction, clamped.
    pub fn progress(&self, value: f32) -> f32 {
        self.raw_progress(value).clamp(0.0, 1.0)
    }

    /// Unclamped fraction; exceeds `[0, 1]` while a drag rubber-bands.
    pub(crate) fn raw_progress(&self, value: f32) -> f32 {
        let span = self.expanded_value - self.collapsed_value;
        if span.abs() <= f32::EPSILON {
            return 1.0;
        }
        (value - self.collapsed_value) / span
    }

    /// Converts a pointer-space velocity (px/ms, upward positive) into value
    /// space.
    pub fn value_velocity(&self, pointer_velocity: f32) -> f32 {
        pointer_velocity * self.value_per_px
    }

    /// Whether a value sits at the expanded rest position, within tolerance.
    /// Rubber-band overshoot past expanded still counts.
    pub fn is_expanded(&self, value: f32) -> bool {
        let toward_collapsed = if self.collapsed_value >= self.expanded_value {
            1.0
        } else {
            -1.0
        };
        (value - self.expanded_value) * toward_collapsed <= self.expanded_tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_metrics() -> SheetMetrics {
        SheetMetrics::new(
            SheetGeometry::FractionalHeights {
                collapsed_fraction: 0.57,
                expanded_fraction: 0.92,
            },
            800.0,
        )
    }

    fn card_metrics() -> SheetMetrics {
        SheetMetrics::new(
            SheetGeometry::OffsetRange {
                min_y: 0.0,
                peek_fraction: 0.6,
            },
            800.0,
        )
    }

    #[test]
    fn fractional_heights_derive_progress_bounds() {
        let metrics = detail_metrics();
        assert_eq!(metrics.bounds.min, 0.0);
        assert_eq!(metrics.bounds.max, 1.0);
        assert!((metrics.collapsed_height_px - 456.0).abs() < 1e-3);
        assert!((metrics.expanded_height_px - 736.0).abs() < 1e-3);
        assert!((metrics.value_per_px - 1.0 / 280.0).abs() < 1e-7);
    }

    #[test]
    fn offset_range_maps_one_value_per_pixel() {
        let metrics = card_metrics();
        assert!((metrics.bounds.max - 320.0).abs() < 1e-3);
        assert_eq!(metrics.bounds.min, 0.0);
        assert_eq!(metrics.value_per_px, -1.0);
        assert_eq!(metrics.expanded_value, 0.0);
    }

    #[test]
    fn progress_runs_collapsed_to_expanded_for_both_geometries() {
        let detail = detail_metrics();
        assert_eq!(detail.progress(0.0), 0.0);
        assert_eq!(detail.progress(1.0), 1.0);
        assert!((detail.progress(0.25) - 0.25).abs() < 1e-6);

        let card = card_metrics();
        assert_eq!(card.progress(card.bounds.max), 0.0);
        assert_eq!(card.progress(0.0), 1.0);
        let midway = card.bounds.max / 2.0;
        assert!((card.progress(midway) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn progress_clamps_rubber_band_overflow() {
        let detail = detail_metrics();
        assert_eq!(detail.progress(1.2), 1.0);
        assert_eq!(detail.progress(-0.1), 0.0);
        assert!(detail.raw_progress(1.2) > 1.0);
    }

    #[test]
    fn upward_velocity_expands_the_detail_sheet_and_raises_the_card() {
        let detail = detail_metrics();
        assert!(detail.value_velocity(0.8) > 0.0);

        let card = card_metrics();
        assert_eq!(card.value_velocity(0.8), -0.8);
    }

    #[test]
    fn expanded_tolerance_matches_geometry() {
        let detail = detail_metrics();
        assert!(detail.is_expanded(1.0));
        assert!(detail.is_expanded(0.99));
        assert!(detail.is_expanded(1.02));
        assert!(!detail.is_expanded(0.985));

        let card = card_metrics();
        assert!(card.is_expanded(0.0));
        assert!(card.is_expanded(5.0));
        assert!(card.is_expanded(-2.0));
        assert!(!card.is_expanded(6.0));
    }

    #[test]
    fn degenerate_viewport_produces_zero_velocity_mapping() {
        let metrics = SheetMetrics::new(
            SheetGeometry::FractionalHeights {
                collapsed_fraction: 0.5,
                expanded_fraction: 0.5,
            },
            800.0,
        );
        assert_eq!(metrics.value_per_px, 0.0);
        assert_eq!(metrics.value_velocity(10.0), 0.0);
    }

    #[test]
    fn non_finite_viewport_collapses_to_zero() {
        let metrics = SheetMetrics::new(
            SheetGeometry::OffsetRange {
                min_y: 0.0,
                peek_fraction: 0.6,
            },
            f32::NAN,
        );
        assert_eq!(metrics.viewport_height, 0.0);
        assert_eq!(metrics.bounds.span(), 0.0);
    }
}
