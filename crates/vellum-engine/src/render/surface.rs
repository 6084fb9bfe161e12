use crate::coords::{Affine, Rect, Vec2};
use crate::paint::Color;

/// Canvas-style drawing target owned by the scene graph.
///
/// Transform state is a current matrix plus a save/restore stack. Calls to `save` and
/// `restore` must be balanced within a frame.
pub trait RenderSurface {
    /// Surface size in pixels.
    fn size(&self) -> Vec2;

    /// Replaces the current transform with the identity.
    fn reset_transform(&mut self);

    /// Post-multiplies `t` onto the current transform.
    fn transform(&mut self, t: Affine);

    /// Rotates subsequent drawing by `angle` about `pivot` (in current coordinates).
    fn rotate_about(&mut self, angle: f64, pivot: Vec2) {
        self.transform(Affine::rotate_about(angle, pivot));
    }

    /// Pushes the current transform.
    fn save(&mut self);

    /// Pops the transform pushed by the matching `save`.
    fn restore(&mut self);

    /// Clears `rect` to transparent.
    fn clear(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Fills the ellipse inscribed in `center ± radii`.
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);

    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color, width: f64);
}
