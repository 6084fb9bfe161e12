use super::Vec2;

/// Circle in the same space as the point it is tested against.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub const fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Boundary inclusive.
    #[inline]
    pub fn contains_point(self, p: Vec2) -> bool {
        p.distance(self.center) <= self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_center_and_boundary() {
        let c = Circle::new(Vec2::new(10.0, 10.0), 4.0);
        assert!(c.contains_point(Vec2::new(10.0, 10.0)));
        assert!(c.contains_point(Vec2::new(14.0, 10.0)));
    }

    #[test]
    fn excludes_outside_and_diagonal_corner() {
        let c = Circle::new(Vec2::new(0.0, 0.0), 4.0);
        assert!(!c.contains_point(Vec2::new(4.1, 0.0)));
        // Inside the bounding square, outside the disc.
        assert!(!c.contains_point(Vec2::new(3.5, 3.5)));
    }
}
