use crate::coords::{Affine, Rect, Vec2, ViewportProvider};
use crate::render::RenderSurface;

use super::{SceneGraph, Shape, ShapeHandle, ShapeKind};

/// Summary of one executed frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    /// Monotonic count of executed frames, starting at 0.
    pub frame_index: u64,
    /// Shapes in the graph.
    pub total: usize,
    /// Shapes that survived viewport culling and were painted.
    pub visible: usize,
    /// Shapes reported selected by the selection provider.
    pub selected: usize,
    /// Whether a rotation handle was drawn.
    pub handle: bool,
}

impl<S: RenderSurface> SceneGraph<S> {
    /// Requests a frame. Any number of requests before the next refresh run the
    /// pipeline once, against the state at that time.
    #[inline]
    pub fn render(&mut self) {
        self.throttle.request();
    }

    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.throttle.is_pending()
    }

    /// Refresh-boundary driver hook. Runs the pipeline if a frame was requested.
    pub fn on_refresh(&mut self) -> Option<FrameStats> {
        if self.throttle.take() {
            Some(self.paint_frame())
        } else {
            None
        }
    }

    /// Runs the full pipeline immediately, bypassing the throttle.
    pub fn paint_frame(&mut self) -> FrameStats {
        let viewport = self.viewport.clone();
        let zoom = viewport.zoom();
        let region = viewport.visible_region();

        let visible: Vec<ShapeHandle> = self
            .children
            .iter()
            .filter(|c| c.borrow().bbox().intersects(region))
            .cloned()
            .collect();

        let size = self.surface.size();
        let full = Rect::new(0.0, 0.0, size.x, size.y);
        self.surface.reset_transform();
        self.surface.clear(full);
        self.surface.fill_rect(full, self.style.background);

        self.surface.transform(Affine::scene_to_viewport(viewport.origin(), zoom));
        for shape in &visible {
            paint_shape(&mut self.surface, &shape.borrow());
        }

        self.surface.save();
        self.surface.reset_transform();

        let selected = self.highlight_selected(&*viewport);
        self.draw_marquee(&*viewport);
        let handle = self.draw_rotation_handle(&*viewport);
        self.ruler.draw(&mut self.surface);

        self.surface.restore();

        let stats = FrameStats {
            frame_index: self.frame_index,
            total: self.children.len(),
            visible: visible.len(),
            selected,
            handle,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        log::trace!("frame: {stats:?}");
        stats
    }

    /// Outlines each selected shape, plus the combined box for multi-selections.
    fn highlight_selected(&mut self, viewport: &dyn ViewportProvider) -> usize {
        let selected = self.selection.selected();
        if selected.is_empty() {
            return 0;
        }

        let zoom = viewport.zoom();
        let stroke = self.style.guide_bbox_stroke;
        let width = self.style.guide_bbox_stroke_width;

        for handle in &selected {
            let shape = handle.borrow();
            let bbox = shape.bbox_unrotated();

            self.surface.save();
            if shape.is_rotated() {
                let pivot = viewport.scene_to_viewport(bbox.center());
                self.surface.rotate_about(shape.rotation, pivot);
            }
            self.surface.stroke_rect(to_viewport(viewport, bbox, zoom), stroke, width);
            self.surface.restore();
        }

        if selected.len() > 1 {
            if let Some(outline) = Rect::union_all(selected.iter().map(|s| s.borrow().bbox())) {
                self.surface.stroke_rect(to_viewport(viewport, outline, zoom), stroke, width);
            }
        }

        selected.len()
    }

    fn draw_marquee(&mut self, viewport: &dyn ViewportProvider) {
        let Some(marquee) = self.marquee else { return };

        let rect = to_viewport(viewport, marquee.normalized(), viewport.zoom());
        self.surface.fill_rect(rect, self.style.selection_fill);
        self.surface.stroke_rect(rect, self.style.selection_stroke, 1.0);
    }

    fn draw_rotation_handle(&mut self, viewport: &dyn ViewportProvider) -> bool {
        let Some(handle) = self.rotation_handle() else {
            return false;
        };

        let center = viewport.scene_to_viewport(handle);
        let r = self.style.handle_rotation_radius;
        let radii = Vec2::new(r, r);
        self.surface.fill_ellipse(center, radii, self.style.handle_rotation_fill);
        self.surface.stroke_ellipse(
            center,
            radii,
            self.style.handle_rotation_stroke,
            self.style.handle_rotation_stroke_width,
        );
        true
    }
}

/// Paints one shape in scene space, inside its own rotation scope.
fn paint_shape<S: RenderSurface>(surface: &mut S, shape: &Shape) {
    let bbox = shape.bbox_unrotated();
    let center = bbox.center();

    surface.save();
    if shape.is_rotated() {
        surface.rotate_about(shape.rotation, center);
    }
    match shape.kind {
        ShapeKind::Rectangle => surface.fill_rect(bbox, shape.fill),
        ShapeKind::Ellipse => surface.fill_ellipse(
            center,
            Vec2::new(bbox.width() / 2.0, bbox.height() / 2.0),
            shape.fill,
        ),
    }
    surface.restore();
}

/// Maps a scene rect to viewport pixels.
fn to_viewport(viewport: &dyn ViewportProvider, r: Rect, zoom: f64) -> Rect {
    Rect::from_origin_size(viewport.scene_to_viewport(r.origin), r.size * zoom)
}
