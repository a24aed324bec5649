//! Settle animation driver for the sheet value.
//!
//! Drives a fixed-duration eased tween using the runtime's frame callback
//! system.

use crate::tween::TweenSpec;
use slipsheet_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Distance (in value units) below which start and target count as equal and
/// the animation completes immediately instead of scheduling frames.
pub const MIN_SETTLE_DISTANCE: f32 = 0.001;

/// Schedules the next settle animation frame. Called recursively to drive
/// the tween forward one frame at a time.
fn schedule_next_frame<F, G>(
    state: Rc<RefCell<Option<SettleAnimationState>>>,
    frame_clock: FrameClock,
    on_frame: F,
    on_end: G,
) where
    F: Fn(f32) + 'static,
    G: FnOnce() + 'static,
{
    let state_for_closure = state.clone();
    let frame_clock_for_closure = frame_clock.clone();
    let on_end = RefCell::new(Some(on_end));

    let registration = frame_clock.with_frame_nanos(move |frame_time_nanos| {
        // The frame value is computed under the borrow, then applied after it
        // is released so `on_frame` may cancel or inspect the animation.
        let frame = {
            let state_guard = state_for_closure.borrow();
            let Some(anim_state) = state_guard.as_ref() else {
                return;
            };

            if !anim_state.is_running.get() {
                return;
            }

            let start_time = match anim_state.start_frame_time_nanos.get() {
                Some(value) => value,
                None => {
                    anim_state
                        .start_frame_time_nanos
                        .set(Some(frame_time_nanos));
                    frame_time_nanos
                }
            };

            let play_time_nanos = frame_time_nanos.saturating_sub(start_time);
            let duration_nanos = anim_state.spec.duration_millis.max(1) * 1_000_000;
            let is_finished = play_time_nanos >= duration_nanos;

            let value = if is_finished {
                anim_state.is_running.set(false);
                // Land exactly on the target, the eased value can be epsilon off.
                anim_state.target_value
            } else {
                let fraction = (play_time_nanos as f64 / duration_nanos as f64) as f32;
                let eased = anim_state.spec.easing.transform(fraction);
                anim_state.start_value
                    + (anim_state.target_value - anim_state.start_value) * eased
            };

            (value, is_finished)
        };

        let (value, is_finished) = frame;
        on_frame(value);

        if is_finished {
            if let Some(end_fn) = on_end.borrow_mut().take() {
                end_fn();
            }
        } else {
            let still_running = state_for_closure
                .borrow()
                .as_ref()
                .is_some_and(|s| s.is_running.get());
            if still_running {
                if let Some(on_end_fn) = on_end.borrow_mut().take() {
                    schedule_next_frame(
                        state_for_closure.clone(),
                        frame_clock_for_closure.clone(),
                        on_frame,
                        on_end_fn,
                    );
                }
            }
        }
    });

    // Store the registration to keep the callback alive
    if let Some(anim_state) = state.borrow_mut().as_mut() {
        anim_state.registration = Some(registration);
    }
}

/// State for an active settle animation.
struct SettleAnimationState {
    start_value: f32,
    target_value: f32,
    /// Frame time when the animation started (used for deterministic timing).
    start_frame_time_nanos: Cell<Option<u64>>,
    spec: TweenSpec,
    /// Current frame callback registration (kept alive to continue animation).
    registration: Option<FrameCallbackRegistration>,
    is_running: Cell<bool>,
}

/// Drives a release animation toward a settle target.
///
/// Each frame, the eased value is computed from the tween spec and handed to
/// the caller, which owns writing it into the sheet state.
pub struct SettleAnimation {
    state: Rc<RefCell<Option<SettleAnimationState>>>,
    frame_clock: FrameClock,
}

impl SettleAnimation {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            state: Rc::new(RefCell::new(None)),
            frame_clock: runtime.frame_clock(),
        }
    }

    /// Starts animating from `start_value` to `target_value`.
    ///
    /// `on_frame` receives the eased value every frame and exactly
    /// `target_value` on the final one; `on_end` runs after that final frame.
    /// A start over a negligible distance completes synchronously.
    pub fn start<F, G>(
        &self,
        start_value: f32,
        target_value: f32,
        spec: TweenSpec,
        on_frame: F,
        on_end: G,
    ) where
        F: Fn(f32) + 'static,
        G: FnOnce() + 'static,
    {
        // Cancel any existing animation
        self.cancel();

        if (target_value - start_value).abs() < MIN_SETTLE_DISTANCE {
            on_frame(target_value);
            on_end();
            return;
        }

        let anim_state = SettleAnimationState {
            start_value,
            target_value,
            start_frame_time_nanos: Cell::new(None),
            spec,
            registration: None,
            is_running: Cell::new(true),
        };

        *self.state.borrow_mut() = Some(anim_state);

        schedule_next_frame(
            self.state.clone(),
            self.frame_clock.clone(),
            on_frame,
            on_end,
        );
    }

    pub fn cancel(&self) {
        if let Some(state) = self.state.borrow_mut().take() {
            // Mark as not running to prevent the in-flight callback from acting
            state.is_running.set(false);
            if let Some(registration) = state.registration {
                registration.cancel();
            }
        }
    }

    /// Returns true if a settle animation is currently running.
    pub fn is_running(&self) -> bool {
        self.state
            .borrow()
            .as_ref()
            .is_some_and(|s| s.is_running.get())
    }

    /// Target of the running animation, if any.
    pub fn target(&self) -> Option<f32> {
        self.state.borrow().as_ref().map(|s| s.target_value)
    }
}

impl Clone for SettleAnimation {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            frame_clock: self.frame_clock.clone(),
        }
    }
}
