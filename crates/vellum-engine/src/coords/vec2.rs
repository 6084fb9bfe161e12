use core::ops::{Add, Div, Mul, Neg, Sub};

/// 2D point/vector in scene or viewport units.
///
/// Which space a value lives in is decided by the caller; the type does not track it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (self - other).length()
    }

    /// Rotates this point by `angle` radians about `pivot`.
    ///
    /// Positive angles turn clockwise on a y-down surface.
    #[inline]
    pub fn rotated_about(self, angle: f64, pivot: Vec2) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        let d = self - pivot;
        Vec2::new(
            pivot.x + d.x * cos - d.y * sin,
            pivot.y + d.x * sin + d.y * cos,
        )
    }
}

/// Free-function form of [`Vec2::rotated_about`].
#[inline]
pub fn rotate_point(p: Vec2, angle: f64, pivot: Vec2) -> Vec2 {
    p.rotated_about(angle, pivot)
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};
    use proptest::prelude::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn quarter_turn_is_clockwise_on_y_down() {
        // (1, 0) → (0, 1): right turns into down.
        let p = Vec2::new(1.0, 0.0).rotated_about(FRAC_PI_2, Vec2::zero());
        assert!(close(p, Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn half_turn_about_pivot() {
        let p = rotate_point(Vec2::new(0.0, 0.0), PI, Vec2::new(50.0, 50.0));
        assert!(close(p, Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn pivot_is_fixed_point() {
        let c = Vec2::new(3.0, -7.0);
        assert!(close(c.rotated_about(1.234, c), c));
    }

    proptest! {
        #[test]
        fn rotate_then_unrotate_round_trips(
            x in -1.0e4f64..1.0e4,
            y in -1.0e4f64..1.0e4,
            cx in -1.0e4f64..1.0e4,
            cy in -1.0e4f64..1.0e4,
            theta in -20.0f64..20.0,
        ) {
            let p = Vec2::new(x, y);
            let c = Vec2::new(cx, cy);
            let back = p.rotated_about(theta, c).rotated_about(-theta, c);
            prop_assert!((back.x - p.x).abs() < 1e-6);
            prop_assert!((back.y - p.y).abs() < 1e-6);
        }
    }
}
