//! Pointer-driven sheet controller.
//!
//! Owns gesture classification, the scroll-to-drag handoff, release
//! settling, and the frame output. Single-threaded by construction:
//! every entry point asserts the runtime's UI thread.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slipsheet_animation::SettleAnimation;
use slipsheet_core::RuntimeHandle;
use slipsheet_input::constants::SCROLL_HANDOFF_EPSILON;
use slipsheet_input::{PointerEvent, PointerEventKind};

use crate::config::{SettleMechanism, SheetConfig};
use crate::metrics::SheetMetrics;
use crate::scroll_region::{NullScrollRegion, ScrollRegion};
use crate::session::{GesturePhase, GestureSession};
use crate::state::SheetState;
use crate::surface::{compose_frame, NullSheetSurface, SheetFrame, SheetSurface};

/// One sheet instance: a value, its gesture session, and the settle driver.
///
/// Feed it raw pointer events through [`SheetController::on_pointer_event`];
/// it consumes moves once the sheet owns the gesture and leaves everything
/// else untouched for the host's native handling.
pub struct SheetController {
    config: SheetConfig,
    metrics: Rc<Cell<SheetMetrics>>,
    pending_viewport: Cell<Option<f32>>,
    state: SheetState,
    scroll_region: Rc<dyn ScrollRegion>,
    surface: Rc<dyn SheetSurface>,
    settle: SettleAnimation,
    session: RefCell<Option<GestureSession>>,
    runtime: RuntimeHandle,
}

impl SheetController {
    /// Builds a controller resting at the collapsed pose.
    pub fn new(runtime: RuntimeHandle, config: SheetConfig, viewport_height: f32) -> Self {
        let metrics = SheetMetrics::new(config.geometry, viewport_height);
        Self {
            state: SheetState::new(metrics.collapsed_value, metrics.bounds),
            metrics: Rc::new(Cell::new(metrics)),
            pending_viewport: Cell::new(None),
            scroll_region: Rc::new(NullScrollRegion),
            surface: Rc::new(NullSheetSurface),
            settle: SettleAnimation::new(runtime.clone()),
            session: RefCell::new(None),
            config,
            runtime,
        }
    }

    /// Attaches the scrollable content hosted inside the sheet.
    pub fn with_scroll_region(mut self, region: Rc<dyn ScrollRegion>) -> Self {
        self.scroll_region = region;
        self
    }

    /// Attaches the rendered panel that frames are applied to.
    pub fn with_surface(mut self, surface: Rc<dyn SheetSurface>) -> Self {
        self.surface = surface;
        self
    }

    pub fn state(&self) -> SheetState {
        self.state.clone()
    }

    pub fn value(&self) -> f32 {
        self.state.value()
    }

    pub fn progress(&self) -> f32 {
        self.metrics.get().progress(self.state.value())
    }

    pub fn metrics(&self) -> SheetMetrics {
        self.metrics.get()
    }

    pub fn phase(&self) -> GesturePhase {
        self.session
            .borrow()
            .as_ref()
            .map(|session| session.phase)
            .unwrap_or(GesturePhase::Idle)
    }

    pub fn is_expanded(&self) -> bool {
        self.metrics.get().is_expanded(self.state.value())
    }

    pub fn is_interacting(&self) -> bool {
        self.state.is_interacting()
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_running()
    }

    /// True when the hosted content sits at its very top (`scroll_top <= 0`).
    /// Stricter than the handoff check, which tolerates a sub-pixel remnant.
    pub fn is_content_at_top(&self) -> bool {
        self.scroll_region.scroll_top() <= 0.0
    }

    /// Frame for the current value, without applying it anywhere.
    pub fn current_frame(&self) -> SheetFrame {
        compose_frame(&self.metrics.get(), self.state.value(), None)
    }

    pub fn on_pointer_event(&self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => self.on_pointer_down(event),
            PointerEventKind::Move => self.on_pointer_move(event),
            PointerEventKind::Up => self.on_pointer_up(event),
            PointerEventKind::Cancel => self.on_pointer_cancel(event),
        }
    }

    fn on_pointer_down(&self, event: &PointerEvent) {
        self.runtime.assert_ui_thread();
        // Single-pointer engine: later contacts are ignored wholesale.
        if self.session.borrow().is_some() {
            return;
        }

        self.settle.cancel();
        // When a host transition is still in flight the model already holds
        // the settle target; re-anchor on what the panel actually shows.
        if let Some(presented) = self.surface.presented_value() {
            self.state.set_value_clamped(presented);
        }

        self.state.set_interacting(true);
        *self.session.borrow_mut() = Some(GestureSession::new(
            event.id,
            event.position,
            self.state.value(),
            event.timestamp_ms,
            self.scroll_region.scroll_top(),
        ));
        log::trace!(
            "pointer {} down at value {:.3}",
            event.id,
            self.state.value()
        );
        // Cuts any advertised transition short immediately on touch.
        self.emit_frame(None);
    }

    fn on_pointer_move(&self, event: &PointerEvent) {
        self.runtime.assert_ui_thread();
        let drag_raw = {
            let mut guard = self.session.borrow_mut();
            let Some(session) = guard.as_mut() else {
                return;
            };
            if event.id != session.pointer_id {
                return;
            }

            session.velocity.add_sample(event.timestamp_ms, event.position.y);

            if session.phase == GesturePhase::Idle
                && session.total_dy_up(event.position).abs() > self.config.dead_zone_px
            {
                session.phase = self.classify(session, event.position);
                match session.phase {
                    GesturePhase::Dragging => {
                        self.scroll_region.set_scroll_enabled(false);
                        log::debug!("gesture classified as drag");
                    }
                    GesturePhase::Scrolling => log::debug!("gesture classified as scroll"),
                    GesturePhase::Idle => {}
                }
            }

            if session.phase == GesturePhase::Scrolling {
                self.maybe_hand_off(session, event.position);
            }

            let raw = (session.phase == GesturePhase::Dragging).then(|| {
                session.start_value
                    + session.total_dy_up(event.position) * self.metrics.get().value_per_px
            });
            session.previous_y = event.position.y;
            raw
        };

        if let Some(raw) = drag_raw {
            self.state
                .set_value_resisted(raw, self.config.resistance_factor);
            event.consume();
            self.emit_frame(None);
        }
    }

    fn on_pointer_up(&self, event: &PointerEvent) {
        self.runtime.assert_ui_thread();
        let Some(session) = self.take_session(event) else {
            return;
        };
        // The release position duplicates the final move sample; feeding it
        // to the tracker would zero real fling velocities.
        let velocity = session.velocity.velocity();
        self.finish_gesture(session, velocity);
    }

    /// A cancelled pointer releases wherever it was, with no fling.
    fn on_pointer_cancel(&self, event: &PointerEvent) {
        self.runtime.assert_ui_thread();
        let Some(session) = self.take_session(event) else {
            return;
        };
        self.finish_gesture(session, 0.0);
    }

    fn take_session(&self, event: &PointerEvent) -> Option<GestureSession> {
        let mut guard = self.session.borrow_mut();
        if guard
            .as_ref()
            .is_some_and(|session| session.pointer_id == event.id)
        {
            guard.take()
        } else {
            None
        }
    }

    /// One-shot classification once the dead zone is exceeded.
    fn classify(&self, session: &GestureSession, position: slipsheet_core::Point) -> GesturePhase {
        let expanded = self.metrics.get().is_expanded(self.state.value());
        if !expanded {
            return GesturePhase::Dragging;
        }
        if session.initial_scroll_top > 0.0 {
            return GesturePhase::Scrolling;
        }
        // Expanded with content at the top: a downward pull starts
        // collapsing, an upward push belongs to the content.
        if session.total_dy_up(position) < 0.0 {
            GesturePhase::Dragging
        } else {
            GesturePhase::Scrolling
        }
    }

    /// Scroll-to-drag handoff: once the content reaches its top while the
    /// finger keeps moving down, the sheet takes over mid-gesture. One-way;
    /// the drag keeps ownership until release.
    fn maybe_hand_off(&self, session: &mut GestureSession, position: slipsheet_core::Point) {
        let at_top = self.scroll_region.scroll_top() <= SCROLL_HANDOFF_EPSILON;
        let moving_down = position.y > session.previous_y;
        if at_top && moving_down {
            session.phase = GesturePhase::Dragging;
            session.rebase(position, self.state.value());
            self.scroll_region.set_scroll_top(0.0);
            self.scroll_region.set_scroll_enabled(false);
            log::debug!("scroll handed off to drag at y {:.1}", position.y);
        }
    }

    fn finish_gesture(&self, session: GestureSession, pointer_velocity: f32) {
        // A viewport change that arrived mid-gesture lands now, before the
        // settle decision reads the bounds.
        if let Some(viewport) = self.pending_viewport.take() {
            self.apply_viewport(viewport);
        }
        self.state.set_interacting(false);

        match session.phase {
            // Tap or native scroll: the sheet never moved.
            GesturePhase::Idle | GesturePhase::Scrolling => {}
            GesturePhase::Dragging => {
                let metrics = self.metrics.get();
                let value = self.state.value();
                let value_velocity = metrics.value_velocity(pointer_velocity);
                let target = self.config.policy.decide_target(
                    value,
                    pointer_velocity,
                    value_velocity,
                    metrics.bounds,
                );
                log::debug!(
                    "release at {value:.3} velocity {pointer_velocity:.3} px/ms, settling to {target:.3}"
                );
                self.settle_to_target(target);
            }
        }
    }

    /// Expands the sheet programmatically, preempting any gesture.
    pub fn expand(&self) {
        self.runtime.assert_ui_thread();
        self.preempt();
        self.settle_to_target(self.metrics.get().expanded_value);
    }

    /// Collapses the sheet programmatically, preempting any gesture.
    pub fn collapse(&self) {
        self.runtime.assert_ui_thread();
        self.preempt();
        self.settle_to_target(self.metrics.get().collapsed_value);
    }

    /// Settles to an arbitrary in-bounds value programmatically.
    pub fn settle_to(&self, value: f32) {
        self.runtime.assert_ui_thread();
        self.preempt();
        self.settle_to_target(value);
    }

    fn preempt(&self) {
        self.settle.cancel();
        *self.session.borrow_mut() = None;
        self.state.set_interacting(false);
    }

    /// Applies a viewport change, or defers it while a pointer is down so
    /// bounds never shift under a live gesture.
    pub fn set_viewport_height(&self, viewport_height: f32) {
        self.runtime.assert_ui_thread();
        if self.session.borrow().is_some() {
            self.pending_viewport.set(Some(viewport_height));
            log::debug!("viewport change to {viewport_height:.0} deferred until gesture end");
            return;
        }
        self.apply_viewport(viewport_height);
    }

    fn apply_viewport(&self, viewport_height: f32) {
        let metrics = SheetMetrics::new(self.config.geometry, viewport_height);
        self.metrics.set(metrics);
        self.state.set_bounds(metrics.bounds);
        self.emit_frame(None);
    }

    fn settle_to_target(&self, target: f32) {
        debug_assert!(
            self.session.borrow().is_none(),
            "settle started while a pointer still owns the sheet"
        );
        let metrics = self.metrics.get();
        let target = metrics.bounds.clamp(target);
        match self.config.settle_mechanism {
            SettleMechanism::HostTransition => {
                self.state.set_value_clamped(target);
                self.emit_frame(Some(self.config.host_transition));
                apply_rest_scroll_policy(&metrics, self.state.value(), &*self.scroll_region);
            }
            SettleMechanism::FrameDriven => {
                let state = self.state.clone();
                let surface = Rc::clone(&self.surface);
                let metrics_cell = Rc::clone(&self.metrics);
                let on_frame = move |value: f32| {
                    let written = state.set_value_clamped(value);
                    let frame = compose_frame(&metrics_cell.get(), written, None);
                    surface.apply(&frame);
                };

                let end_state = self.state.clone();
                let end_region = Rc::clone(&self.scroll_region);
                let end_metrics = Rc::clone(&self.metrics);
                let on_end = move || {
                    apply_rest_scroll_policy(&end_metrics.get(), end_state.value(), &*end_region);
                };

                self.settle.start(
                    self.state.value(),
                    target,
                    self.config.settle_tween,
                    on_frame,
                    on_end,
                );
            }
        }
    }

    fn emit_frame(&self, transition: Option<slipsheet_animation::TweenSpec>) {
        let frame = compose_frame(&self.metrics.get(), self.state.value(), transition);
        self.surface.apply(&frame);
    }
}

/// Scroll rules once a sheet comes to rest: content scrolls only when fully
/// expanded, and a non-expanded sheet parks its content back at the top.
fn apply_rest_scroll_policy(metrics: &SheetMetrics, value: f32, scroll_region: &dyn ScrollRegion) {
    if metrics.is_expanded(value) {
        scroll_region.set_scroll_enabled(true);
    } else {
        scroll_region.set_scroll_top(0.0);
        scroll_region.set_scroll_enabled(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slipsheet_core::{DefaultScheduler, Point, Runtime};
    use std::sync::Arc;

    fn test_controller(config: SheetConfig) -> (Runtime, SheetController) {
        let runtime = Runtime::new(Arc::new(DefaultScheduler));
        let controller = SheetController::new(runtime.handle(), config, 800.0);
        (runtime, controller)
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

    #[test]
    fn movement_inside_the_dead_zone_does_nothing() {
        let (_runtime, controller) = test_controller(SheetConfig::detail_sheet());
        controller.on_pointer_event(&down(500.0, 0.0));

        let wiggle = move_to(496.0, 16.0);
        controller.on_pointer_event(&wiggle);
        assert_eq!(controller.value(), 0.0);
        assert_eq!(controller.phase(), GesturePhase::Idle);
        assert!(!wiggle.is_consumed());

        controller.on_pointer_event(&up(496.0, 32.0));
        assert_eq!(controller.value(), 0.0);
        assert!(!controller.is_settling());
    }

    #[test]
    fn collapsed_sheet_claims_vertical_movement() {
        let (_runtime, controller) = test_controller(
            SheetConfig::detail_sheet().with_settle_mechanism(SettleMechanism::FrameDriven),
        );
        controller.on_pointer_event(&down(500.0, 0.0));

        let drag = move_to(440.0, 16.0);
        controller.on_pointer_event(&drag);
        assert_eq!(controller.phase(), GesturePhase::Dragging);
        assert!(drag.is_consumed());
        assert!((controller.value() - 60.0 / 280.0).abs() < 1e-5);
    }

    #[test]
    fn drag_never_hands_back_to_scrolling() {
        let (_runtime, controller) = test_controller(SheetConfig::detail_sheet());
        controller.expand();

        // Downward pull from the expanded pose claims the gesture.
        controller.on_pointer_event(&down(300.0, 0.0));
        controller.on_pointer_event(&move_to(330.0, 16.0));
        assert_eq!(controller.phase(), GesturePhase::Dragging);
        assert!(controller.value() < 1.0);

        // Reversing above the contact point would classify as a scroll, but
        // the drag keeps the sheet: it rubber-bands past the expanded anchor.
        let reverse = move_to(280.0, 32.0);
        controller.on_pointer_event(&reverse);
        assert_eq!(controller.phase(), GesturePhase::Dragging);
        assert!(reverse.is_consumed());
        assert!(controller.value() > 1.0);

        controller.on_pointer_event(&up(280.0, 48.0));
        assert_eq!(controller.value(), 1.0);
    }

    #[test]
    fn second_pointer_is_ignored_entirely() {
        let (_runtime, controller) = test_controller(SheetConfig::detail_sheet());
        controller.on_pointer_event(&down(500.0, 0.0));
        controller.on_pointer_event(&move_to(420.0, 16.0));
        let before = controller.value();

        controller.on_pointer_event(&down(700.0, 20.0).with_id(2));
        let second_move = move_to(600.0, 36.0).with_id(2);
        controller.on_pointer_event(&second_move);
        assert_eq!(controller.value(), before);
        assert!(!second_move.is_consumed());

        // Releasing the second pointer must not end the first gesture.
        controller.on_pointer_event(&up(600.0, 48.0).with_id(2));
        assert_eq!(controller.phase(), GesturePhase::Dragging);
    }

    #[test]
    fn events_without_a_session_are_ignored() {
        let (_runtime, controller) = test_controller(SheetConfig::detail_sheet());
        controller.on_pointer_event(&move_to(300.0, 5.0));
        controller.on_pointer_event(&up(300.0, 10.0));
        assert_eq!(controller.value(), 0.0);
        assert_eq!(controller.phase(), GesturePhase::Idle);
    }

    #[test]
    fn drag_tracks_the_finger_against_the_value_map() {
        let (_runtime, controller) = test_controller(
            SheetConfig::detail_sheet().with_settle_mechanism(SettleMechanism::FrameDriven),
        );
        controller.on_pointer_event(&down(500.0, 0.0));
        controller.on_pointer_event(&move_to(300.0, 100.0));
        // 200 px of upward travel over a 280 px range.
        assert!((controller.value() - 0.714_285_7).abs() < 1e-4);
        assert!(controller.is_interacting());
    }

    #[test]
    fn tap_release_settles_nothing() {
        let (_runtime, controller) = test_controller(SheetConfig::detail_sheet());
        controller.on_pointer_event(&down(500.0, 0.0));
        controller.on_pointer_event(&up(500.0, 80.0));
        assert_eq!(controller.value(), 0.0);
        assert!(!controller.is_interacting());
        assert!(!controller.is_settling());
    }

    #[test]
    fn programmatic_expand_reaches_the_expanded_pose() {
        let (_runtime, controller) = test_controller(SheetConfig::detail_sheet());
        controller.expand();
        assert_eq!(controller.value(), 1.0);
        assert!(controller.is_expanded());

        controller.collapse();
        assert_eq!(controller.value(), 0.0);
    }

    #[test]
    fn viewport_resize_outside_a_gesture_applies_immediately() {
        let (_runtime, controller) = test_controller(SheetConfig::free_sheet(0.6));
        let before = controller.metrics().bounds.max;
        controller.set_viewport_height(600.0);
        let after = controller.metrics().bounds.max;
        assert!(after < before);
        assert!((after - 240.0).abs() < 1e-3);
    }
}
