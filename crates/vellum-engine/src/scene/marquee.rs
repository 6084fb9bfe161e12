use crate::coords::{Rect, Vec2};

/// Partial marquee update; `None` fields keep their previous value.
///
/// Merging into an absent marquee treats missing fields as `0.0`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct MarqueePatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl MarqueePatch {
    /// Patch that moves the anchor corner only.
    #[inline]
    pub fn origin(p: Vec2) -> Self {
        Self { x: Some(p.x), y: Some(p.y), ..Self::default() }
    }

    /// Patch that resizes only. Negative sizes are allowed while dragging up or left.
    #[inline]
    pub fn size(width: f64, height: f64) -> Self {
        Self { width: Some(width), height: Some(height), ..Self::default() }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.width.is_none() && self.height.is_none()
    }

    /// Shallow merge onto `base`.
    pub fn apply(self, base: Option<Rect>) -> Rect {
        let base = base.unwrap_or_default();
        Rect::new(
            self.x.unwrap_or(base.origin.x),
            self.y.unwrap_or(base.origin.y),
            self.width.unwrap_or(base.size.x),
            self.height.unwrap_or(base.size.y),
        )
    }
}

impl From<Rect> for MarqueePatch {
    fn from(r: Rect) -> Self {
        Self {
            x: Some(r.origin.x),
            y: Some(r.origin.y),
            width: Some(r.size.x),
            height: Some(r.size.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_onto_none_defaults_missing_fields() {
        let r = MarqueePatch::origin(Vec2::new(5.0, 6.0)).apply(None);
        assert_eq!(r, Rect::new(5.0, 6.0, 0.0, 0.0));
    }

    #[test]
    fn merge_keeps_unspecified_fields() {
        let base = Some(Rect::new(1.0, 2.0, 3.0, 4.0));
        let r = MarqueePatch { width: Some(30.0), ..Default::default() }.apply(base);
        assert_eq!(r, Rect::new(1.0, 2.0, 30.0, 4.0));
    }

    #[test]
    fn full_rect_patch_replaces_everything() {
        let r = MarqueePatch::from(Rect::new(9.0, 8.0, 7.0, 6.0)).apply(Some(Rect::new(0.0, 0.0, 1.0, 1.0)));
        assert_eq!(r, Rect::new(9.0, 8.0, 7.0, 6.0));
        assert!(MarqueePatch::default().is_empty());
    }
}
