use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result};
use vellum_engine::coords::{Vec2, Viewport};
use vellum_engine::logging::{init_logging, LoggingConfig};
use vellum_engine::paint::Color;
use vellum_engine::render::{RecordingSurface, Style};
use vellum_engine::scene::{MarqueePatch, SceneGraph, Shape, ShapeHandle};
use vellum_engine::select::{SelectedShapes, SelectionProvider};
use vellum_engine::time::RefreshTicker;

const STYLE_ENV_PREFIX: &str = "VELLUM_STYLE_";
const SURFACE_SIZE: (f64, f64) = (820.0, 560.0);

/// Style overrides from `VELLUM_STYLE_<KEY>` variables, e.g.
/// `VELLUM_STYLE_BACKGROUND=#202020`.
fn load_style() -> Result<Style> {
    let overrides: Vec<(String, String)> = std::env::vars()
        .filter_map(|(k, v)| {
            k.strip_prefix(STYLE_ENV_PREFIX)
                .map(|key| (key.to_ascii_lowercase(), v))
        })
        .collect();

    let mut style = Style::default();
    style
        .apply_overrides(overrides)
        .with_context(|| format!("reading {STYLE_ENV_PREFIX}* environment"))?;
    Ok(style)
}

/// One scripted editing step, applied between refreshes.
type Step = fn(&mut Session);

struct Session {
    scene: SceneGraph<RecordingSurface>,
    viewport: Rc<RefCell<Viewport>>,
    selection: Rc<RefCell<SelectedShapes>>,
    shapes: Vec<ShapeHandle>,
}

impl Session {
    fn new(style: Style) -> Self {
        let (w, h) = SURFACE_SIZE;
        let viewport = Rc::new(RefCell::new(Viewport::new(w, h)));
        let selection = Rc::new(RefCell::new(SelectedShapes::new()));
        let scene = SceneGraph::new(
            RecordingSurface::new(w, h),
            viewport.clone(),
            selection.clone(),
        )
        .with_style(style);

        Self {
            scene,
            viewport,
            selection,
            shapes: Vec::new(),
        }
    }

    fn add(&mut self, shape: Shape) -> ShapeHandle {
        let handle = ShapeHandle::new(shape);
        self.scene.append_child(handle.clone(), None);
        self.shapes.push(handle.clone());
        handle
    }
}

fn populate(s: &mut Session) {
    s.add(Shape::rect(40.0, 40.0, 160.0, 100.0).with_fill(Color::from_srgb_u8(0xe8, 0x5d, 0x4a, 0xff)));
    s.add(Shape::ellipse(260.0, 60.0, 120.0, 80.0).with_fill(Color::from_srgb_u8(0x4a, 0x9d, 0xe8, 0xff)));
    s.add(Shape::rect(120.0, 220.0, 90.0, 90.0).with_rotation(0.4));
    s.scene.render();
}

fn click_rotated(s: &mut Session) {
    let hit = s.scene.top_hit_element(Vec2::new(165.0, 265.0));
    log::info!("hit: {:?}", hit.as_ref().map(|h| h.borrow().kind));
    if let Some(hit) = &hit {
        s.selection.borrow_mut().set_items([hit]);
    }
    log::info!("rotation handle at {:?}", s.scene.rotation_handle());
    s.scene.render();
}

fn rotate_selection(s: &mut Session) {
    let selected = s.selection.selected();
    for shape in &selected {
        shape.borrow_mut().rotation += 0.3;
    }
    // Both requests land in the same frame.
    s.scene.render();
    s.scene.render();
}

fn marquee_drag(s: &mut Session) {
    s.scene.set_selection(MarqueePatch {
        x: Some(20.0),
        y: Some(20.0),
        ..MarqueePatch::default()
    });
    s.scene.set_selection(MarqueePatch {
        width: Some(400.0),
        height: Some(160.0),
        ..MarqueePatch::default()
    });
    let inside = s.scene.elements_in_selection();
    log::info!("marquee covers {} shape(s)", inside.len());
    s.selection.borrow_mut().set_items(inside.iter());
    s.scene.render();
}

fn release_marquee(s: &mut Session) {
    s.scene.clear_selection();
    log::info!("selection outline: {:?}", s.scene.selection_outline());
    s.scene.render();
}

fn zoom_in(s: &mut Session) {
    s.viewport.borrow_mut().zoom_at(2.0, Vec2::new(410.0, 280.0));
    s.scene.render();
}

fn delete_first(s: &mut Session) {
    if s.shapes.is_empty() {
        return;
    }
    let first = s.shapes.remove(0);
    s.selection.borrow_mut().remove(&first);
    log::info!("removed from index {:?}", s.scene.remove_child(&first));
    s.scene.render();
}

const SCRIPT: &[(&str, Step)] = &[
    ("populate", populate),
    ("click rotated square", click_rotated),
    ("rotate selection", rotate_selection),
    ("marquee drag", marquee_drag),
    ("release marquee", release_marquee),
    ("zoom in", zoom_in),
    ("delete first", delete_first),
];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let style = load_style()?;

    let mut session = Session::new(style);
    let mut ticker = RefreshTicker::new();

    log::info!("vellum studio: {} scripted steps", SCRIPT.len());

    for &(name, step) in SCRIPT {
        log::debug!("step: {name}");
        step(&mut session);

        // Wait for the next refresh boundary, then let the scene paint.
        loop {
            let now = Instant::now();
            if let Some(tick) = ticker.poll(now) {
                if let Some(stats) = session.scene.on_refresh() {
                    log::info!(
                        "frame {} (tick {}, dt {:.3}s): {}/{} visible, {} selected, handle: {}, {} draw calls",
                        stats.frame_index,
                        tick.frame_index,
                        tick.dt,
                        stats.visible,
                        stats.total,
                        stats.selected,
                        stats.handle,
                        session.scene.surface().draws().count(),
                    );
                }
                session.scene.surface_mut().clear_log();
                break;
            }
            std::thread::sleep(ticker.until_next(now));
        }
    }

    Ok(())
}
