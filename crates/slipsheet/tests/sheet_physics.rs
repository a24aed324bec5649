//! Behavioral checks on the sheet physics: value mapping, rubber band,
//! velocity thresholds, and the rest poses both presets reach.

use slipsheet::{
    Point, PointerEvent, PointerEventKind, SettleMechanism, SheetConfig, SheetController,
    SheetFrame, SheetSurface,
};
use slipsheet_core::{DefaultScheduler, Runtime, RuntimeHandle};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

#[derive(Default)]
struct RecordingSurface {
    frames: RefCell<Vec<SheetFrame>>,
}

impl SheetSurface for RecordingSurface {
    fn apply(&self, frame: &SheetFrame) {
        self.frames.borrow_mut().push(*frame);
    }
}

fn down(y: f32, t: f64) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Down, Point::new(40.0, y), t)
}

fn move_to(y: f32, t: f64) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Move, Point::new(40.0, y), t)
}

fn up(y: f32, t: f64) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Up, Point::new(40.0, y), t)
}

fn drive_to_completion(handle: &RuntimeHandle) {
    let mut now = 0u64;
    while handle.has_frame_callbacks() {
        handle.drain_frame_callbacks(now);
        now += 16_000_000;
        assert!(now < 2_000_000_000, "settle never finished");
    }
}

#[test]
fn detail_sheet_slow_release_past_midpoint_expands() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let surface = Rc::new(RecordingSurface::default());
    let controller =
        SheetController::new(runtime.handle(), SheetConfig::detail_sheet(), 800.0)
            .with_surface(surface.clone());

    // 200 px of upward travel on an 800 px viewport: progress 200/280.
    controller.on_pointer_event(&down(500.0, 0.0));
    controller.on_pointer_event(&move_to(320.0, 100.0));
    controller.on_pointer_event(&move_to(301.0, 180.0));
    controller.on_pointer_event(&move_to(300.0, 200.0));
    assert!((controller.value() - 0.714_285_7).abs() < 1e-4);

    // Final samples crawl at 0.05 px/ms: below the fling threshold.
    controller.on_pointer_event(&up(300.0, 210.0));

    assert_eq!(controller.value(), 1.0);
    let last = surface.frames.borrow().last().copied().unwrap();
    assert!((last.sheet_height_px - 736.0).abs() < 1e-3);
    assert!((last.translate_y_px - 64.0).abs() < 1e-3);
    assert!((last.overlay_alpha - 0.85).abs() < 1e-6);
    assert_eq!(last.media_alpha, 0.0);
}

#[test]
fn card_fling_projects_the_motion_forward() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let controller =
        SheetController::new(runtime.handle(), SheetConfig::free_sheet(0.6), 800.0);

    // Drag the card 170 px up, with the finger still moving 0.8 px/ms at
    // release.
    controller.on_pointer_event(&down(600.0, 0.0));
    controller.on_pointer_event(&move_to(500.0, 20.0));
    controller.on_pointer_event(&move_to(438.0, 50.0));
    controller.on_pointer_event(&move_to(430.0, 60.0));
    assert!((controller.value() - 150.0).abs() < 1e-3);
    controller.on_pointer_event(&up(430.0, 60.0));

    drive_to_completion(&runtime.handle());
    // 150 ms of projection at 0.8 px/ms of upward motion: 120 px closer to
    // expanded, no snapping to either edge.
    assert!((controller.value() - 30.0).abs() < 1e-2);
}

#[test]
fn card_slow_release_rests_exactly_where_it_was() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let controller =
        SheetController::new(runtime.handle(), SheetConfig::free_sheet(0.6), 800.0);

    controller.on_pointer_event(&down(600.0, 0.0));
    controller.on_pointer_event(&move_to(460.0, 100.0));
    controller.on_pointer_event(&move_to(459.0, 200.0));
    let held = controller.value();
    controller.on_pointer_event(&up(459.0, 220.0));

    drive_to_completion(&runtime.handle());
    assert_eq!(controller.value(), held);
}

#[test]
fn upward_motion_raises_both_sheet_flavors() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let detail =
        SheetController::new(runtime.handle(), SheetConfig::detail_sheet(), 800.0);
    detail.on_pointer_event(&down(500.0, 0.0));
    detail.on_pointer_event(&move_to(450.0, 16.0));
    assert!(detail.value() > 0.0, "upward travel grows progress");

    let card = SheetController::new(runtime.handle(), SheetConfig::free_sheet(0.6), 800.0);
    let start_frame = card.current_frame();
    card.on_pointer_event(&down(600.0, 0.0));
    card.on_pointer_event(&move_to(550.0, 16.0));
    let dragged_frame = card.current_frame();
    assert!(
        dragged_frame.translate_y_px < start_frame.translate_y_px,
        "upward travel shrinks the offset"
    );
    assert!(dragged_frame.progress > start_frame.progress);
}

#[test]
fn rubber_band_yields_on_release() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let controller =
        SheetController::new(runtime.handle(), SheetConfig::free_sheet(0.6), 800.0);
    let max = controller.metrics().bounds.max;

    // Pull 50 px past the collapsed boundary: only 30% of it shows.
    controller.on_pointer_event(&down(600.0, 0.0));
    controller.on_pointer_event(&move_to(649.0, 100.0));
    controller.on_pointer_event(&move_to(650.0, 200.0));
    assert!((controller.value() - (max + 15.0)).abs() < 1e-3);
    let frame = controller.current_frame();
    assert!(frame.translate_y_px > max);
    assert_eq!(frame.progress, 0.0);

    controller.on_pointer_event(&up(650.0, 220.0));
    drive_to_completion(&runtime.handle());
    assert_eq!(controller.value(), max);
}

#[test]
fn threshold_speed_is_not_a_fling() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let controller = SheetController::new(
        runtime.handle(),
        SheetConfig::detail_sheet().with_settle_mechanism(SettleMechanism::FrameDriven),
        800.0,
    );

    // Exactly 0.3 px/ms at release: the comparison is strict, so the nearest
    // anchor wins and the sheet falls back despite the upward motion.
    controller.on_pointer_event(&down(500.0, 0.0));
    controller.on_pointer_event(&move_to(450.0, 40.0));
    controller.on_pointer_event(&move_to(444.0, 60.0));
    assert!((controller.value() - 0.2).abs() < 1e-4);
    controller.on_pointer_event(&up(444.0, 60.0));

    drive_to_completion(&runtime.handle());
    assert_eq!(controller.value(), 0.0);
}

#[test]
fn fast_downward_release_near_expansion_still_collapses() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let controller = SheetController::new(
        runtime.handle(),
        SheetConfig::detail_sheet().with_settle_mechanism(SettleMechanism::FrameDriven),
        800.0,
    );
    controller.expand();
    drive_to_completion(&runtime.handle());
    assert_eq!(controller.value(), 1.0);

    // A sharp downward flick from the expanded pose.
    controller.on_pointer_event(&down(100.0, 0.0));
    controller.on_pointer_event(&move_to(108.0, 10.0));
    controller.on_pointer_event(&move_to(116.0, 20.0));
    assert!(controller.value() > 0.9);
    controller.on_pointer_event(&up(116.0, 20.0));

    drive_to_completion(&runtime.handle());
    assert_eq!(controller.value(), 0.0);
}
