//! Rendered-panel integration.

use slipsheet_animation::TweenSpec;

use crate::metrics::SheetMetrics;

/// Backdrop dim at full expansion.
const OVERLAY_MAX_ALPHA: f32 = 0.85;

/// Visual parameters for one rendered frame of the panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetFrame {
    /// Normalized collapsed(0) to expanded(1) fraction, clamped.
    pub progress: f32,
    /// Visible sheet height in px. Exceeds the rest heights slightly while a
    /// drag rubber-bands.
    pub sheet_height_px: f32,
    /// Offset of the sheet's top edge from the viewport top, in px.
    pub translate_y_px: f32,
    /// Backdrop dim behind the sheet.
    pub overlay_alpha: f32,
    /// Header media fade, fully out once the sheet expands.
    pub media_alpha: f32,
    /// Transition the host should animate this frame with. `None` while a
    /// finger is tracking or the engine drives per-frame values itself.
    pub transition: Option<TweenSpec>,
}

/// Owner of the rendered panel.
///
/// Exactly one writer of the panel's transform exists at any moment; the
/// controller produces frames and this surface applies them.
pub trait SheetSurface {
    fn apply(&self, frame: &SheetFrame);

    /// Value the panel is visually presenting while a host-driven transition
    /// is still in flight, so a new gesture can re-anchor mid-animation.
    /// Hosts that apply frames synchronously keep the default.
    fn presented_value(&self) -> Option<f32> {
        None
    }
}

/// Surface for headless hosts; frames vanish.
#[derive(Default)]
pub struct NullSheetSurface;

impl SheetSurface for NullSheetSurface {
    fn apply(&self, _frame: &SheetFrame) {}
}

pub(crate) fn compose_frame(
    metrics: &SheetMetrics,
    value: f32,
    transition: Option<TweenSpec>,
) -> SheetFrame {
    let raw = metrics.raw_progress(value);
    let progress = raw.clamp(0.0, 1.0);
    // Height interpolates on the raw fraction so rubber-band overflow stays
    // visible; the alphas saturate at the rest poses.
    let sheet_height_px = metrics.collapsed_height_px
        + (metrics.expanded_height_px - metrics.collapsed_height_px) * raw;
    SheetFrame {
        progress,
        sheet_height_px,
        translate_y_px: metrics.viewport_height - sheet_height_px,
        overlay_alpha: progress * OVERLAY_MAX_ALPHA,
        media_alpha: (1.0 - progress).max(0.0),
        transition,
    }
}
