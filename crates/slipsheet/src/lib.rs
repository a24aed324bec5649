#![doc = r"Pointer-driven bottom sheet gesture engine.

A sheet tracks one value (normalized progress or a pixel offset), owns the
tug-of-war between dragging the sheet and scrolling its content, and settles
to a rest pose on release. Hosts feed raw pointer events in and receive
visual frames out; nothing here renders.

The moving parts:

- [`SheetController`]: event entry point, classification, settling.
- [`SheetState`]: the observable value, shared by clones.
- [`SheetConfig`]: tuning, with [`SheetConfig::detail_sheet`] and
  [`SheetConfig::free_sheet`] presets.
- [`ScrollRegion`] / [`SheetSurface`]: the host seams for content scrolling
  and the rendered panel."]

pub mod bounds;
pub mod config;
pub mod controller;
pub mod metrics;
pub mod scroll_region;
pub mod scroll_store;
pub mod session;
pub mod settle;
pub mod state;
pub mod surface;

pub use bounds::SheetBounds;
pub use config::{SettleMechanism, SheetConfig};
pub use controller::SheetController;
pub use metrics::{SheetGeometry, SheetMetrics};
pub use scroll_region::{NullScrollRegion, ScrollRegion};
pub use scroll_store::{RegionId, ScrollPositionStore};
pub use session::GesturePhase;
pub use settle::SettlePolicy;
pub use state::{ListenerId, SheetState};
pub use surface::{NullSheetSurface, SheetFrame, SheetSurface};

pub use slipsheet_animation::{Easing, TweenSpec};
pub use slipsheet_core::{Point, Runtime, RuntimeHandle};
pub use slipsheet_input::{MonotonicClock, PointerEvent, PointerEventKind, PointerId};
