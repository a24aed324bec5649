//! Observable sheet value.

use indexmap::IndexMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::bounds::SheetBounds;

static NEXT_SHEET_STATE_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

pub type ListenerId = u64;

struct SheetStateInner {
    id: u64,
    value: Cell<f32>,
    bounds: Cell<SheetBounds>,
    is_interacting: Cell<bool>,
    change_listeners: RefCell<IndexMap<ListenerId, Box<dyn Fn(f32)>>>,
}

/// The single source of truth for one sheet's value.
///
/// Cheap to clone and share; all clones observe the same value. Values only
/// enter through the clamped or resisted write paths, so a stored value is
/// never NaN and only leaves the bounds by the rubber-band amount.
#[derive(Clone)]
pub struct SheetState {
    inner: Rc<SheetStateInner>,
}

impl SheetState {
    pub fn new(initial: f32, bounds: SheetBounds) -> Self {
        Self {
            inner: Rc::new(SheetStateInner {
                id: NEXT_SHEET_STATE_ID.fetch_add(1, Ordering::Relaxed),
                value: Cell::new(bounds.clamp(initial)),
                bounds: Cell::new(bounds),
                is_interacting: Cell::new(false),
                change_listeners: RefCell::new(IndexMap::new()),
            }),
        }
    }

    pub fn id(&self) -> u64 {
        self.inner.id
    }

    pub fn value(&self) -> f32 {
        self.inner.value.get()
    }

    pub fn bounds(&self) -> SheetBounds {
        self.inner.bounds.get()
    }

    /// True while a pointer owns the sheet.
    pub fn is_interacting(&self) -> bool {
        self.inner.is_interacting.get()
    }

    pub(crate) fn set_interacting(&self, interacting: bool) {
        self.inner.is_interacting.set(interacting);
    }

    /// Swaps the bounds and pulls the current value back inside them.
    pub(crate) fn set_bounds(&self, bounds: SheetBounds) {
        self.inner.bounds.set(bounds);
        let clamped = bounds.clamp(self.inner.value.get());
        self.write(clamped);
    }

    /// Release-path write: hard clamp. Returns the stored value.
    pub(crate) fn set_value_clamped(&self, value: f32) -> f32 {
        let clamped = self.inner.bounds.get().clamp(value);
        self.write(clamped);
        clamped
    }

    /// Live-drag write: overflow survives at the rubber-band fraction.
    /// Returns the stored value.
    pub(crate) fn set_value_resisted(&self, raw: f32, resistance_factor: f32) -> f32 {
        let resisted = self.inner.bounds.get().resist(raw, resistance_factor);
        self.write(resisted);
        resisted
    }

    fn write(&self, value: f32) {
        let previous = self.inner.value.get();
        if value == previous {
            return;
        }
        self.inner.value.set(value);
        for listener in self.inner.change_listeners.borrow().values() {
            listener(value);
        }
    }

    /// Registers a change listener, called after every stored-value change
    /// with the new value. Listeners run in registration order.
    pub fn on_change(&self, listener: impl Fn(f32) + 'static) -> ListenerId {
        let id = NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed);
        self.inner
            .change_listeners
            .borrow_mut()
            .insert(id, Box::new(listener));
        id
    }

    pub fn remove_listener(&self, id: ListenerId) {
        self.inner.change_listeners.borrow_mut().shift_remove(&id);
    }
}

impl std::fmt::Debug for SheetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetState")
            .field("id", &self.inner.id)
            .field("value", &self.inner.value.get())
            .field("bounds", &self.inner.bounds.get())
            .field("is_interacting", &self.inner.is_interacting.get())
            .finish()
    }
}
