use super::RenderSurface;

/// Ruler overlay hook.
///
/// Invoked once per frame after every other overlay, with the surface in viewport space.
pub trait Ruler {
    fn draw(&mut self, surface: &mut dyn RenderSurface);
}

/// Ruler that draws nothing.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoRuler;

impl Ruler for NoRuler {
    fn draw(&mut self, _surface: &mut dyn RenderSurface) {}
}
