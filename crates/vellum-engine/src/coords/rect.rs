use super::Vec2;

/// Slack applied to inclusive edge tests.
///
/// Points that went through a rotate/unrotate pair can land a few ulps outside an edge
/// they started on.
pub const EDGE_EPSILON: f64 = 1e-9;

/// Axis-aligned rectangle (top-left origin, +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Smallest rect spanning two corner points, in any order.
    #[inline]
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        let x0 = a.x.min(b.x);
        let y0 = a.y.min(b.y);
        Rect::new(x0, y0, a.x.max(b.x) - x0, a.y.max(b.y) - y0)
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.size.y
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x / 2.0,
            self.origin.y + self.size.y / 2.0,
        )
    }

    /// Corners clockwise from top-left.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        let min = self.min();
        let max = self.max();
        [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ]
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Inclusive containment: [min, max], with [`EDGE_EPSILON`] slack.
    ///
    /// A rect with zero width or height contains nothing.
    #[inline]
    pub fn contains_point(self, p: Vec2) -> bool {
        let r = self.normalized();
        if r.is_empty() {
            return false;
        }
        let max = r.max();
        p.x >= r.origin.x - EDGE_EPSILON
            && p.y >= r.origin.y - EDGE_EPSILON
            && p.x <= max.x + EDGE_EPSILON
            && p.y <= max.y + EDGE_EPSILON
    }

    /// True unless one rect lies entirely to one side of the other.
    ///
    /// Touching edges count as intersecting, so the test is symmetric and every rect
    /// intersects itself, including zero-size ones.
    #[inline]
    pub fn intersects(self, other: Rect) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        let (a_max, b_max) = (a.max(), b.max());

        a.origin.x <= b_max.x
            && a_max.x >= b.origin.x
            && a.origin.y <= b_max.y
            && a_max.y >= b.origin.y
    }

    /// True when `other` lies fully inside `self` (edges inclusive).
    #[inline]
    pub fn contains_rect(self, other: Rect) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        let (a_max, b_max) = (a.max(), b.max());

        a.origin.x <= b.origin.x
            && a.origin.y <= b.origin.y
            && a_max.x >= b_max.x
            && a_max.y >= b_max.y
    }

    /// Bounding box of both rects.
    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        let a = self.normalized();
        let b = other.normalized();
        let (a_max, b_max) = (a.max(), b.max());

        Rect::from_points(
            Vec2::new(a.origin.x.min(b.origin.x), a.origin.y.min(b.origin.y)),
            Vec2::new(a_max.x.max(b_max.x), a_max.y.max(b_max.y)),
        )
    }

    /// Bounding box of every rect in `rects`, or `None` when there are none.
    pub fn union_all<I>(rects: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Rect>,
    {
        rects.into_iter().map(Rect::normalized).reduce(Rect::union)
    }

    /// Axis-aligned envelope of this rect after rotating it by `angle` about `pivot`.
    pub fn rotated_envelope(self, angle: f64, pivot: Vec2) -> Rect {
        let r = self.normalized();
        if angle == 0.0 {
            return r;
        }

        let mut min = Vec2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for corner in r.corners() {
            let p = corner.rotated_about(angle, pivot);
            min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
            max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
        }
        Rect::from_points(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};
    use proptest::prelude::*;

    fn r(x: f64, y: f64, w: f64, h: f64) -> Rect { Rect::new(x, y, w, h) }

    fn approx(a: Rect, b: Rect) -> bool {
        (a.origin.x - b.origin.x).abs() < 1e-9
            && (a.origin.y - b.origin.y).abs() < 1e-9
            && (a.size.x - b.size.x).abs() < 1e-9
            && (a.size.y - b.size.y).abs() < 1e-9
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    #[test]
    fn normalized_negative_height() {
        let n = r(0.0, 10.0, 5.0, -3.0).normalized();
        assert_eq!(n.origin.y, 7.0);
        assert_eq!(n.size.y, 3.0);
    }

    // ── contains_point ────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains_point(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn contains_edges_inclusive() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_point(Vec2::new(0.0, 0.0)));
        assert!(rect.contains_point(Vec2::new(10.0, 10.0)));
        assert!(rect.contains_point(Vec2::new(-1e-12, 10.0 + 1e-12)));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains_point(Vec2::new(-1.0, 5.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains_point(Vec2::new(5.0, 10.5)));
    }

    #[test]
    fn zero_area_contains_nothing() {
        assert!(!r(5.0, 5.0, 0.0, 10.0).contains_point(Vec2::new(5.0, 6.0)));
        assert!(!r(5.0, 5.0, 0.0, 0.0).contains_point(Vec2::new(5.0, 5.0)));
    }

    // ── intersects ────────────────────────────────────────────────────────

    #[test]
    fn intersects_overlapping_and_touching() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(r(5.0, 5.0, 10.0, 10.0)));
        assert!(a.intersects(r(10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn intersects_disjoint() {
        assert!(!r(0.0, 0.0, 5.0, 5.0).intersects(r(20.0, 20.0, 5.0, 5.0)));
        assert!(!r(0.0, 0.0, 5.0, 5.0).intersects(r(0.0, 6.0, 5.0, 5.0)));
    }

    #[test]
    fn zero_area_rect_separated_does_not_intersect() {
        assert!(!r(0.0, 0.0, 0.0, 0.0).intersects(r(1.0, 1.0, 5.0, 5.0)));
    }

    // ── contains_rect / union ─────────────────────────────────────────────

    #[test]
    fn contains_rect_inner_and_partial() {
        let outer = r(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(r(10.0, 10.0, 20.0, 20.0)));
        assert!(outer.contains_rect(outer));
        assert!(!outer.contains_rect(r(90.0, 90.0, 20.0, 20.0)));
    }

    #[test]
    fn contains_rect_with_reversed_marquee() {
        // Marquee dragged up-left has negative size.
        let marquee = r(100.0, 100.0, -100.0, -100.0);
        assert!(marquee.contains_rect(r(10.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn union_spans_both() {
        let u = r(0.0, 0.0, 10.0, 10.0).union(r(20.0, -5.0, 5.0, 5.0));
        assert_eq!(u, r(0.0, -5.0, 25.0, 15.0));
    }

    #[test]
    fn union_all_empty_is_none() {
        assert_eq!(Rect::union_all(Vec::new()), None);
        assert_eq!(
            Rect::union_all([r(1.0, 1.0, 1.0, 1.0)]),
            Some(r(1.0, 1.0, 1.0, 1.0))
        );
    }

    // ── rotated_envelope ──────────────────────────────────────────────────

    #[test]
    fn quarter_turn_swaps_extents() {
        let rect = r(0.0, 0.0, 100.0, 50.0);
        let env = rect.rotated_envelope(FRAC_PI_2, rect.center());
        assert!(approx(env, r(25.0, -25.0, 50.0, 100.0)));
    }

    #[test]
    fn eighth_turn_square_grows_by_sqrt2() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        let env = rect.rotated_envelope(FRAC_PI_4, rect.center());
        let side = 10.0 * 2f64.sqrt();
        assert!(approx(env, r(5.0 - side / 2.0, 5.0 - side / 2.0, side, side)));
    }

    proptest! {
        #[test]
        fn intersects_is_symmetric_and_reflexive(
            ax in -500.0f64..500.0, ay in -500.0f64..500.0,
            aw in 0.0f64..300.0, ah in 0.0f64..300.0,
            bx in -500.0f64..500.0, by in -500.0f64..500.0,
            bw in 0.0f64..300.0, bh in 0.0f64..300.0,
        ) {
            let a = r(ax, ay, aw, ah);
            let b = r(bx, by, bw, bh);
            prop_assert_eq!(a.intersects(b), b.intersects(a));
            prop_assert!(a.intersects(a));
        }
    }
}
