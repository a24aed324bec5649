//! Scripted gesture runs against both sheet presets, printing the frames a
//! renderer would receive. No windowing; the frame loop is stepped by hand.

use slipsheet::{
    Point, PointerEvent, PointerEventKind, RegionId, ScrollPositionStore, ScrollRegion,
    SheetConfig, SheetController, SheetFrame, SheetSurface,
};
use slipsheet_core::{DefaultScheduler, Runtime};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

const VIEWPORT: f32 = 800.0;
const FRAME_STEP_NANOS: u64 = 16_000_000;

struct SimScrollRegion {
    name: &'static str,
    scroll_top: Cell<f32>,
    enabled: Cell<bool>,
}

impl SimScrollRegion {
    fn new(name: &'static str) -> Rc<Self> {
        Rc::new(Self {
            name,
            scroll_top: Cell::new(0.0),
            enabled: Cell::new(false),
        })
    }
}

impl ScrollRegion for SimScrollRegion {
    fn scroll_top(&self) -> f32 {
        self.scroll_top.get()
    }

    fn set_scroll_top(&self, offset: f32) {
        self.scroll_top.set(offset);
        log::info!("[{}] scroll_top forced to {offset:.1}", self.name);
    }

    fn set_scroll_enabled(&self, enabled: bool) {
        if self.enabled.replace(enabled) != enabled {
            log::info!("[{}] scrolling {}", self.name, if enabled { "unlocked" } else { "locked" });
        }
    }
}

struct PrintSurface {
    label: &'static str,
    frame_count: Cell<u32>,
}

impl PrintSurface {
    fn new(label: &'static str) -> Rc<Self> {
        Rc::new(Self {
            label,
            frame_count: Cell::new(0),
        })
    }
}

impl SheetSurface for PrintSurface {
    fn apply(&self, frame: &SheetFrame) {
        let count = self.frame_count.get() + 1;
        self.frame_count.set(count);
        // Print every fourth frame so settles stay readable.
        if count % 4 == 1 || frame.transition.is_some() {
            println!(
                "  [{}] frame {count:>3}: progress {:.3}  height {:6.1}px  y {:6.1}px  overlay {:.2}{}",
                self.label,
                frame.progress,
                frame.sheet_height_px,
                frame.translate_y_px,
                frame.overlay_alpha,
                match frame.transition {
                    Some(tween) => format!("  (host tween {}ms)", tween.duration_millis),
                    None => String::new(),
                }
            );
        }
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

/// Steps the frame loop the way a host pump would: while the runtime wants a
/// frame, clear the flag and drain; callbacks re-arm it for follow-up work.
fn run_frames(runtime: &Runtime) {
    let handle = runtime.handle();
    let mut now = 0u64;
    let mut frames = 0u32;
    while runtime.needs_frame() {
        runtime.set_needs_frame(false);
        handle.drain_frame_callbacks(now);
        now += FRAME_STEP_NANOS;
        frames += 1;
        if frames > 500 {
            log::error!("frame loop runaway, aborting drive");
            break;
        }
    }
    if frames > 0 {
        println!("  ({frames} engine frames)");
    }
}

fn detail_sheet_run() {
    println!("--- detail sheet: slow drag past the midpoint, host-animated settle ---");
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let surface = PrintSurface::new("detail");
    let region = SimScrollRegion::new("detail");
    let controller = SheetController::new(runtime.handle(), SheetConfig::detail_sheet(), VIEWPORT)
        .with_scroll_region(region.clone())
        .with_surface(surface);

    controller.on_pointer_event(&down(500.0, 0.0));
    for step in 1..=10 {
        // 20 px per 70 ms stays under the fling threshold.
        let y = 500.0 - 20.0 * step as f32;
        controller.on_pointer_event(&move_to(y, step as f64 * 70.0));
    }
    let release_progress = controller.progress();
    controller.on_pointer_event(&up(300.0, 720.0));
    println!(
        "  released slow at progress {release_progress:.3}; sheet settled {}",
        if controller.is_expanded() { "expanded" } else { "collapsed" }
    );
    println!("  content scrolling unlocked: {}", region.enabled.get());
}

fn free_card_run() {
    println!("--- free card: upward fling, engine-driven settle frames ---");
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let surface = PrintSurface::new("card");
    let controller = SheetController::new(runtime.handle(), SheetConfig::free_sheet(0.6), VIEWPORT)
        .with_surface(surface);

    controller.on_pointer_event(&down(600.0, 0.0));
    controller.on_pointer_event(&move_to(500.0, 20.0));
    controller.on_pointer_event(&move_to(438.0, 50.0));
    controller.on_pointer_event(&move_to(430.0, 60.0));
    controller.on_pointer_event(&up(430.0, 60.0));
    println!("  released at y offset {:.1} with 0.8 px/ms of upward motion", controller.value());

    run_frames(&runtime);
    println!("  card rests at y offset {:.1}px", controller.value());
}

fn scroll_handoff_run() {
    println!("--- expanded detail sheet: content scroll hands off to a drag ---");
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let region = SimScrollRegion::new("list");
    let store = ScrollPositionStore::new();
    let list_region = RegionId::from_name("sim/list");

    let controller = SheetController::new(runtime.handle(), SheetConfig::detail_sheet(), VIEWPORT)
        .with_scroll_region(region.clone())
        .with_surface(PrintSurface::new("list"));
    controller.expand();
    region.scroll_top.set(140.0);
    store.save(list_region, region.scroll_top.get());
    println!("  sheet expanded, list scrolled to {:.0}px", region.scroll_top.get());

    // Finger drags down; the list scrolls back toward its top first.
    controller.on_pointer_event(&down(300.0, 0.0));
    let mut y = 300.0;
    let mut t = 0.0;
    while region.scroll_top.get() > 0.0 && controller.value() >= 1.0 {
        y += 24.0;
        t += 16.0;
        // Native scrolling consumes the travel until the list tops out.
        let remaining = (region.scroll_top.get() - 24.0).max(0.0);
        region.scroll_top.set(remaining);
        controller.on_pointer_event(&move_to(y, t));
    }

    // Keep pulling: the sheet follows the finger now.
    for _ in 0..6 {
        y += 24.0;
        t += 16.0;
        controller.on_pointer_event(&move_to(y, t));
    }
    println!("  drag owns the sheet at progress {:.3}", controller.progress());
    controller.on_pointer_event(&up(y, t + 160.0));
    println!(
        "  released; sheet {}, reading position {:?}px kept for the next expand",
        if controller.is_expanded() { "stayed expanded" } else { "collapsed" },
        store.restore(list_region)
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== slipsheet gesture simulator ===");
    println!("Three scripted runs over a {VIEWPORT:.0}px viewport:");
    println!();

    detail_sheet_run();
    println!();
    free_card_run();
    println!();
    scroll_handoff_run();
}
