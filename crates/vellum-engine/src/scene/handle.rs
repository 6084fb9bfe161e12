use crate::coords::Vec2;
use crate::select::SelectionProvider;

/// Position of the rotation handle in scene units, if there is one.
///
/// Defined only for a single selection: `offset` viewport pixels above the midpoint of the
/// shape's unrotated top edge, then turned by the shape's rotation about the selection
/// center. The offset is divided by `zoom` so the handle keeps its on-screen distance.
pub fn rotation_handle(
    selection: &dyn SelectionProvider,
    zoom: f64,
    offset: f64,
) -> Option<Vec2> {
    let selected = selection.selected();
    let [only] = selected.as_slice() else {
        return None;
    };

    let shape = only.borrow();
    let bbox = shape.bbox_unrotated();
    let anchor = Vec2::new(bbox.x() + bbox.width() / 2.0, bbox.y() - offset / zoom);
    if !shape.is_rotated() {
        return Some(anchor);
    }

    let pivot = selection.center().unwrap_or_else(|| shape.center());
    Some(anchor.rotated_about(shape.rotation, pivot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Shape, ShapeHandle};
    use crate::select::SelectedShapes;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    fn selection_of(shapes: &[&ShapeHandle]) -> SelectedShapes {
        let mut sel = SelectedShapes::new();
        sel.set_items(shapes.iter().copied());
        sel
    }

    #[test]
    fn none_without_selection() {
        assert_eq!(rotation_handle(&SelectedShapes::new(), 1.0, 14.0), None);
    }

    #[test]
    fn above_top_edge_midpoint() {
        let a = ShapeHandle::new(Shape::rect(0.0, 0.0, 100.0, 50.0));
        let h = rotation_handle(&selection_of(&[&a]), 1.0, 14.0).unwrap();
        assert!(close(h, Vec2::new(50.0, -14.0)));
    }

    #[test]
    fn offset_shrinks_with_zoom() {
        let a = ShapeHandle::new(Shape::rect(0.0, 0.0, 100.0, 50.0));
        let h = rotation_handle(&selection_of(&[&a]), 2.0, 14.0).unwrap();
        assert!(close(h, Vec2::new(50.0, -7.0)));
    }

    #[test]
    fn follows_shape_rotation() {
        // Quarter turn clockwise: the top edge now faces right.
        let a = ShapeHandle::new(Shape::rect(0.0, 0.0, 100.0, 100.0).with_rotation(FRAC_PI_2));
        let h = rotation_handle(&selection_of(&[&a]), 1.0, 14.0).unwrap();
        assert!(close(h, Vec2::new(114.0, 50.0)));

        a.borrow_mut().rotation = PI;
        let h = rotation_handle(&selection_of(&[&a]), 1.0, 14.0).unwrap();
        assert!(close(h, Vec2::new(50.0, 114.0)));
    }

    #[test]
    fn none_for_multi_selection() {
        let a = ShapeHandle::new(Shape::rect(0.0, 0.0, 10.0, 10.0));
        let b = ShapeHandle::new(Shape::rect(20.0, 0.0, 10.0, 10.0));
        assert_eq!(rotation_handle(&selection_of(&[&a, &b]), 1.0, 14.0), None);
    }
}
