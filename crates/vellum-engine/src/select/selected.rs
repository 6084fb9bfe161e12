use crate::coords::{Rect, Vec2};
use crate::scene::{ShapeHandle, WeakShape};

use super::SelectionProvider;

/// Ordered set of selected shapes held by weak reference.
///
/// Shapes dropped elsewhere silently fall out of the selection.
#[derive(Debug, Clone, Default)]
pub struct SelectedShapes {
    items: Vec<WeakShape>,
}

impl SelectedShapes {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection.
    pub fn set_items<'a, I>(&mut self, shapes: I)
    where
        I: IntoIterator<Item = &'a ShapeHandle>,
    {
        self.items.clear();
        for shape in shapes {
            self.push(shape);
        }
    }

    /// Adds `shape` unless it is already selected.
    pub fn push(&mut self, shape: &ShapeHandle) {
        if !self.contains(shape) {
            self.items.push(shape.downgrade());
        }
    }

    /// Removes `shape`; returns whether it was selected.
    pub fn remove(&mut self, shape: &ShapeHandle) -> bool {
        let before = self.items.len();
        self.items.retain(|w| !w.points_to(shape));
        self.items.len() != before
    }

    /// Adds `shape` if absent, removes it otherwise (shift-click behavior).
    pub fn toggle(&mut self, shape: &ShapeHandle) {
        if !self.remove(shape) {
            self.items.push(shape.downgrade());
        }
    }

    #[inline]
    pub fn contains(&self, shape: &ShapeHandle) -> bool {
        self.items.iter().any(|w| w.points_to(shape))
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Union of the selected shapes' rotated boxes.
    pub fn bbox(&self) -> Option<Rect> {
        Rect::union_all(self.selected().iter().map(|s| s.borrow().bbox()))
    }
}

impl SelectionProvider for SelectedShapes {
    fn selected(&self) -> Vec<ShapeHandle> {
        self.items.iter().filter_map(WeakShape::upgrade).collect()
    }

    fn center(&self) -> Option<Vec2> {
        self.bbox().map(Rect::center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Shape;

    fn handle(x: f64, y: f64, w: f64, h: f64) -> ShapeHandle {
        ShapeHandle::new(Shape::rect(x, y, w, h))
    }

    #[test]
    fn push_ignores_duplicates() {
        let a = handle(0.0, 0.0, 10.0, 10.0);
        let mut sel = SelectedShapes::new();
        sel.push(&a);
        sel.push(&a);
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let a = handle(0.0, 0.0, 10.0, 10.0);
        let mut sel = SelectedShapes::new();
        sel.toggle(&a);
        assert!(sel.contains(&a));
        sel.toggle(&a);
        assert!(sel.is_empty());
    }

    #[test]
    fn center_of_union_of_rotated_boxes() {
        let a = handle(0.0, 0.0, 10.0, 10.0);
        let b = handle(90.0, 40.0, 10.0, 10.0);
        let mut sel = SelectedShapes::new();
        sel.set_items([&a, &b]);
        assert_eq!(sel.center(), Some(Vec2::new(50.0, 25.0)));
    }

    #[test]
    fn single_selection_center_is_shape_center() {
        let a = ShapeHandle::new(Shape::rect(0.0, 0.0, 100.0, 40.0).with_rotation(0.3));
        let mut sel = SelectedShapes::new();
        sel.push(&a);
        let c = sel.center().unwrap();
        let sc = a.borrow().center();
        assert!((c.x - sc.x).abs() < 1e-9 && (c.y - sc.y).abs() < 1e-9);
    }

    #[test]
    fn dropped_shapes_leave_selection() {
        let keep = handle(0.0, 0.0, 1.0, 1.0);
        let mut sel = SelectedShapes::new();
        {
            let gone = handle(5.0, 5.0, 1.0, 1.0);
            sel.set_items([&keep, &gone]);
            assert_eq!(sel.len(), 2);
        }
        assert_eq!(sel.selected(), vec![keep]);
    }

    #[test]
    fn empty_selection_has_no_center() {
        assert_eq!(SelectedShapes::new().center(), None);
    }
}
