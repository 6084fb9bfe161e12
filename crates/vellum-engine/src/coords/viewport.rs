use std::cell::RefCell;

use super::{Affine, Rect, Vec2};

/// Read-only view of the current pan/zoom state.
///
/// The scene graph queries this fresh on every frame and every geometric query.
pub trait ViewportProvider {
    /// Visible scene region (scene units).
    fn visible_region(&self) -> Rect;

    /// Scene units → viewport pixels scale factor.
    fn zoom(&self) -> f64;

    /// Scene-space origin of the visible region (top-left).
    fn origin(&self) -> Vec2 {
        self.visible_region().origin
    }

    /// Converts a scene point to render-surface pixels.
    fn scene_to_viewport(&self, p: Vec2) -> Vec2 {
        (p - self.origin()) * self.zoom()
    }
}

impl<T: ViewportProvider> ViewportProvider for RefCell<T> {
    fn visible_region(&self) -> Rect {
        self.borrow().visible_region()
    }

    fn zoom(&self) -> f64 {
        self.borrow().zoom()
    }

    fn origin(&self) -> Vec2 {
        self.borrow().origin()
    }

    fn scene_to_viewport(&self, p: Vec2) -> Vec2 {
        self.borrow().scene_to_viewport(p)
    }
}

/// Pan/zoom state for one render surface.
///
/// - `origin`: scene point shown at the surface's top-left corner
/// - `width`/`height`: surface size in pixels
/// - `zoom`: pixels per scene unit, clamped to `[MIN_ZOOM, MAX_ZOOM]`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub origin: Vec2,
    pub width: f64,
    pub height: f64,
    zoom: f64,
}

impl Viewport {
    pub const MIN_ZOOM: f64 = 0.01;
    pub const MAX_ZOOM: f64 = 256.0;

    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            origin: Vec2::zero(),
            width,
            height,
            zoom: 1.0,
        }
    }

    #[inline]
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    #[inline]
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.set_zoom(zoom);
        self
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn zoom(self) -> f64 {
        self.zoom
    }

    /// Sets the zoom; non-finite or non-positive values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
        } else {
            log::debug!("Viewport::set_zoom: ignoring invalid zoom {zoom}");
        }
    }

    /// Zooms keeping the scene point under `anchor` (viewport pixels) fixed.
    pub fn zoom_at(&mut self, zoom: f64, anchor: Vec2) {
        let scene_anchor = self.viewport_to_scene(anchor);
        self.set_zoom(zoom);
        self.origin = scene_anchor - anchor / self.zoom;
    }

    #[inline]
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Pans by a delta given in viewport pixels.
    #[inline]
    pub fn pan_by(&mut self, delta: Vec2) {
        self.origin = self.origin - delta / self.zoom;
    }

    /// Inverse of [`ViewportProvider::scene_to_viewport`].
    #[inline]
    pub fn viewport_to_scene(self, p: Vec2) -> Vec2 {
        p / self.zoom + self.origin
    }

    /// Scene → viewport transform for render surfaces.
    #[inline]
    pub fn transform(self) -> Affine {
        Affine::scene_to_viewport(self.origin, self.zoom)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl ViewportProvider for Viewport {
    fn visible_region(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.width / self.zoom,
            self.height / self.zoom,
        )
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn origin(&self) -> Vec2 {
        self.origin
    }
}
