use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Default fill for new shapes (light grey).
pub const DEFAULT_FILL: Color = Color::new(0.851, 0.851, 0.851, 1.0);

/// Primitive variants the scene knows how to measure and paint.
///
/// Extending the scene:
/// - add a variant here
/// - extend [`Shape::bbox`] and the paint match in `scene::pipeline`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

/// A drawable primitive: an axis-aligned box turned by `rotation` about its own center.
///
/// `rotation` is in radians, clockwise on screen, and is never normalized; values outside
/// `±2π` are legal.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub fill: Color,
}

impl Shape {
    pub fn new(kind: ShapeKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(
            x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite(),
            "Shape::new: non-finite geometry"
        );
        Self { kind, x, y, width, height, rotation: 0.0, fill: DEFAULT_FILL }
    }

    #[inline]
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ShapeKind::Rectangle, x, y, width, height)
    }

    #[inline]
    pub fn ellipse(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ShapeKind::Ellipse, x, y, width, height)
    }

    #[inline]
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        debug_assert!(rotation.is_finite(), "Shape::with_rotation: non-finite angle");
        self.rotation = rotation;
        self
    }

    #[inline]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    #[inline]
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Raw box from position and size, ignoring rotation. Size is never negative.
    #[inline]
    pub fn bbox_unrotated(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height).normalized()
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bbox_unrotated().center()
    }

    #[inline]
    pub fn is_rotated(&self) -> bool {
        self.rotation != 0.0
    }

    /// Axis-aligned envelope of the shape after rotation.
    pub fn bbox(&self) -> Rect {
        let raw = self.bbox_unrotated();
        if !self.is_rotated() {
            return raw;
        }

        match self.kind {
            ShapeKind::Rectangle => raw.rotated_envelope(self.rotation, raw.center()),
            ShapeKind::Ellipse => {
                let c = raw.center();
                let (a, b) = (raw.width() / 2.0, raw.height() / 2.0);
                let (sin, cos) = self.rotation.sin_cos();
                let hx = ((a * cos).powi(2) + (b * sin).powi(2)).sqrt();
                let hy = ((a * sin).powi(2) + (b * cos).powi(2)).sqrt();
                Rect::new(c.x - hx, c.y - hy, hx * 2.0, hy * 2.0)
            }
        }
    }

    /// Maps a scene point into the shape's unrotated frame.
    #[inline]
    pub fn to_local(&self, p: Vec2) -> Vec2 {
        if self.is_rotated() {
            p.rotated_about(-self.rotation, self.center())
        } else {
            p
        }
    }
}

/// Shared, identity-compared reference to a [`Shape`].
///
/// Two handles are equal only when they point at the same shape; equal geometry is not
/// enough. Editing commands keep clones and mutate through [`ShapeHandle::borrow_mut`].
#[derive(Debug, Clone)]
pub struct ShapeHandle(Rc<RefCell<Shape>>);

impl ShapeHandle {
    pub fn new(shape: Shape) -> Self {
        Self(Rc::new(RefCell::new(shape)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, Shape> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, Shape> {
        self.0.borrow_mut()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &ShapeHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Non-owning reference for collaborators that must not keep shapes alive.
    #[inline]
    pub fn downgrade(&self) -> WeakShape {
        WeakShape(Rc::downgrade(&self.0))
    }
}

impl From<Shape> for ShapeHandle {
    fn from(shape: Shape) -> Self {
        Self::new(shape)
    }
}

impl PartialEq for ShapeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ShapeHandle {}

/// Weak counterpart of [`ShapeHandle`].
#[derive(Debug, Clone)]
pub struct WeakShape(Weak<RefCell<Shape>>);

impl WeakShape {
    #[inline]
    pub fn upgrade(&self) -> Option<ShapeHandle> {
        self.0.upgrade().map(ShapeHandle)
    }

    #[inline]
    pub fn points_to(&self, shape: &ShapeHandle) -> bool {
        Weak::ptr_eq(&self.0, &Rc::downgrade(&shape.0))
    }
}
