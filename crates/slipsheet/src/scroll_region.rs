//! Content scroll collaborator.

/// The scrollable content hosted inside a sheet.
///
/// The engine never scrolls content itself. It reads the offset to classify
/// gestures, forces it to the top during the scroll-to-drag handoff, and
/// locks or unlocks native scrolling around drags. Hosts without scrollable
/// content can leave the default [`NullScrollRegion`] in place.
pub trait ScrollRegion {
    /// Current scroll offset from the top of the content, in px.
    fn scroll_top(&self) -> f32;

    /// Forces the scroll offset.
    fn set_scroll_top(&self, offset: f32);

    /// Enables or disables native content scrolling.
    fn set_scroll_enabled(&self, enabled: bool);
}

/// Region with no content: always at the top, ignores writes.
#[derive(Default)]
pub struct NullScrollRegion;

impl ScrollRegion for NullScrollRegion {
    fn scroll_top(&self) -> f32 {
        0.0
    }

    fn set_scroll_top(&self, _offset: f32) {}

    fn set_scroll_enabled(&self, _enabled: bool) {}
}
