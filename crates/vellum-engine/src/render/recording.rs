use crate::coords::{Affine, Rect, Vec2};
use crate::paint::Color;

use super::RenderSurface;

/// One surface call, in the coordinates it was issued with.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCmd {
    ResetTransform,
    Transform(Affine),
    Save,
    Restore,
    Clear(Rect),
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, width: f64 },
    FillEllipse { center: Vec2, radii: Vec2, color: Color },
    StrokeEllipse { center: Vec2, radii: Vec2, color: Color, width: f64 },
}

impl SurfaceCmd {
    /// True for calls that put pixels on the surface.
    #[inline]
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            SurfaceCmd::Clear(_)
                | SurfaceCmd::FillRect { .. }
                | SurfaceCmd::StrokeRect { .. }
                | SurfaceCmd::FillEllipse { .. }
                | SurfaceCmd::StrokeEllipse { .. }
        )
    }
}

/// A recorded call plus the transform that was current when it was issued.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCmd {
    pub cmd: SurfaceCmd,
    /// Effective transform *after* the call was applied.
    pub transform: Affine,
    /// Save-stack depth after the call.
    pub depth: usize,
}

/// Surface that paints nothing and records every call.
///
/// Performance characteristics:
/// - each call is an O(1) push
/// - [`clear_log`](Self::clear_log) keeps allocated capacity for reuse across frames
///
/// Used by tests to assert on the exact draw stream, and by headless tooling.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    size: Vec2,
    current: Affine,
    stack: Vec<Affine>,
    log: Vec<RecordedCmd>,
    unbalanced_restores: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Vec2::new(width, height),
            ..Self::default()
        }
    }

    #[inline]
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = Vec2::new(width, height);
    }

    /// Drops recorded calls. Transform state is kept.
    #[inline]
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    #[inline]
    pub fn log(&self) -> &[RecordedCmd] {
        &self.log
    }

    /// Recorded calls that put pixels on the surface, in issue order.
    pub fn draws(&self) -> impl Iterator<Item = &RecordedCmd> {
        self.log.iter().filter(|r| r.cmd.is_draw())
    }

    #[inline]
    pub fn current_transform(&self) -> Affine {
        self.current
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of `restore` calls issued with an empty save stack.
    #[inline]
    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    fn record(&mut self, cmd: SurfaceCmd) {
        self.log.push(RecordedCmd {
            cmd,
            transform: self.current,
            depth: self.stack.len(),
        });
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn reset_transform(&mut self) {
        self.current = Affine::IDENTITY;
        self.record(SurfaceCmd::ResetTransform);
    }

    fn transform(&mut self, t: Affine) {
        self.current = self.current * t;
        self.record(SurfaceCmd::Transform(t));
    }

    fn save(&mut self) {
        self.stack.push(self.current);
        self.record(SurfaceCmd::Save);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(t) => self.current = t,
            None => {
                log::debug!("RecordingSurface: restore without matching save");
                self.unbalanced_restores += 1;
            }
        }
        self.record(SurfaceCmd::Restore);
    }

    fn clear(&mut self, rect: Rect) {
        self.record(SurfaceCmd::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.record(SurfaceCmd::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.record(SurfaceCmd::StrokeRect { rect, color, width });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.record(SurfaceCmd::FillEllipse { center, radii, color });
    }

    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color, width: f64) {
        self.record(SurfaceCmd::StrokeEllipse { center, radii, color, width });
    }
}
