use std::rc::Rc;

use crate::coords::{Circle, Rect, Vec2, ViewportProvider};
use crate::render::{NoRuler, RenderSurface, Ruler, Style};
use crate::select::SelectionProvider;
use crate::time::FrameThrottle;

use super::{rotation_handle, MarqueePatch, ShapeHandle};

/// Ordered shape collection plus everything needed to paint and query it.
///
/// The graph owns the shape list and the render surface. Viewport and selection are
/// shared with the host and read fresh on every frame and every query.
pub struct SceneGraph<S: RenderSurface> {
    pub(super) children: Vec<ShapeHandle>,
    pub(super) marquee: Option<Rect>,
    pub(super) throttle: FrameThrottle,
    pub(super) surface: S,
    pub(super) viewport: Rc<dyn ViewportProvider>,
    pub(super) selection: Rc<dyn SelectionProvider>,
    pub(super) ruler: Box<dyn Ruler>,
    pub(super) style: Style,
    pub(super) frame_index: u64,
}

impl<S: RenderSurface> SceneGraph<S> {
    pub fn new(
        surface: S,
        viewport: Rc<dyn ViewportProvider>,
        selection: Rc<dyn SelectionProvider>,
    ) -> Self {
        Self {
            children: Vec::new(),
            marquee: None,
            throttle: FrameThrottle::new(),
            surface,
            viewport,
            selection,
            ruler: Box::new(NoRuler),
            style: Style::default(),
            frame_index: 0,
        }
    }

    pub fn with_ruler(mut self, ruler: impl Ruler + 'static) -> Self {
        self.ruler = Box::new(ruler);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[inline]
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // ── container ─────────────────────────────────────────────────────────

    /// Shapes in paint order (back to front).
    #[inline]
    pub fn children(&self) -> &[ShapeHandle] {
        &self.children
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Inserts `shape` at `index` (shifting later shapes up), or on top when `None`.
    ///
    /// Out-of-range indices append. The same shape may be added more than once.
    /// Does not request a render.
    pub fn append_child(&mut self, shape: ShapeHandle, index: Option<usize>) {
        match index {
            Some(i) if i <= self.children.len() => self.children.insert(i, shape),
            Some(i) => {
                log::debug!(
                    "append_child: index {i} past end ({}), appending",
                    self.children.len()
                );
                self.children.push(shape);
            }
            None => self.children.push(shape),
        }
    }

    /// Removes the first entry that is `shape` (by identity) and returns its old index.
    ///
    /// `None` means the shape was not in the graph; nothing changes in that case.
    /// Does not request a render.
    pub fn remove_child(&mut self, shape: &ShapeHandle) -> Option<usize> {
        let idx = self.children.iter().position(|c| c.ptr_eq(shape))?;
        self.children.remove(idx);
        Some(idx)
    }

    // ── marquee ───────────────────────────────────────────────────────────

    /// Merges `patch` into the marquee rectangle, creating it if absent.
    pub fn set_selection(&mut self, patch: MarqueePatch) {
        self.marquee = Some(patch.apply(self.marquee));
    }

    /// Removes the marquee.
    #[inline]
    pub fn clear_selection(&mut self) {
        self.marquee = None;
    }

    #[inline]
    pub fn marquee(&self) -> Option<Rect> {
        self.marquee
    }

    /// Shapes whose rotated box lies fully inside the marquee, in paint order.
    ///
    /// Calling this with no marquee is a usage error; it is logged and answered with an
    /// empty list.
    pub fn elements_in_selection(&self) -> Vec<ShapeHandle> {
        let Some(marquee) = self.marquee else {
            log::warn!("elements_in_selection called with no active marquee; returning nothing");
            return Vec::new();
        };

        self.children
            .iter()
            .filter(|c| marquee.contains_rect(c.borrow().bbox()))
            .cloned()
            .collect()
    }

    // ── hit testing ───────────────────────────────────────────────────────

    /// Topmost shape under `point` (scene units).
    ///
    /// The point is turned into each shape's unrotated frame, so rotated shapes are
    /// tested exactly with an axis-aligned containment check.
    pub fn top_hit_element(&self, point: Vec2) -> Option<ShapeHandle> {
        self.children
            .iter()
            .rev()
            .find(|c| {
                let shape = c.borrow();
                shape.bbox_unrotated().contains_point(shape.to_local(point))
            })
            .cloned()
    }

    // ── selection geometry ────────────────────────────────────────────────

    /// Whether `point` lies inside the current selection box.
    ///
    /// A single selection honors the shape's rotation. A multi-selection tests the union
    /// of rotated boxes against the raw point, matching the outline the overlay draws.
    pub fn is_point_in_selected_box(&self, point: Vec2) -> bool {
        let selected = self.selection.selected();
        match selected.as_slice() {
            [] => false,
            [only] => {
                let shape = only.borrow();
                shape.bbox_unrotated().contains_point(shape.to_local(point))
            }
            many => Rect::union_all(many.iter().map(|s| s.borrow().bbox()))
                .is_some_and(|bbox| bbox.contains_point(point)),
        }
    }

    /// Union of the selected shapes' rotated boxes when more than one is selected.
    pub fn selection_outline(&self) -> Option<Rect> {
        let selected = self.selection.selected();
        if selected.len() < 2 {
            return None;
        }
        Rect::union_all(selected.iter().map(|s| s.borrow().bbox()))
    }

    // ── rotation handle ───────────────────────────────────────────────────

    /// Current rotation handle position (scene units), derived from selection and zoom.
    pub fn rotation_handle(&self) -> Option<Vec2> {
        rotation_handle(
            &*self.selection,
            self.viewport.zoom(),
            self.style.handle_rotation_offset,
        )
    }

    /// Whether `point` (scene units) is on the rotation handle.
    pub fn is_in_rotation_handle(&self, point: Vec2) -> bool {
        let Some(center) = self.rotation_handle() else {
            return false;
        };
        let radius = self.style.handle_rotation_radius / self.viewport.zoom();
        Circle::new(center, radius).contains_point(point)
    }
}
