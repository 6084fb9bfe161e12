//! Selection collaborators.
//!
//! The scene graph never owns the selection. It asks a [`SelectionProvider`] which shapes
//! are selected each time it needs to know, and holds no state derived from the answer.

mod selected;

pub use selected::SelectedShapes;

use std::cell::RefCell;

use crate::coords::Vec2;
use crate::scene::ShapeHandle;

/// Read-only view of the current selection.
pub trait SelectionProvider {
    /// Selected shapes in selection order.
    fn selected(&self) -> Vec<ShapeHandle>;

    /// Combined center point of the selection, `None` when nothing is selected.
    fn center(&self) -> Option<Vec2>;

    fn len(&self) -> usize {
        self.selected().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: SelectionProvider> SelectionProvider for RefCell<T> {
    fn selected(&self) -> Vec<ShapeHandle> {
        self.borrow().selected()
    }

    fn center(&self) -> Option<Vec2> {
        self.borrow().center()
    }

    fn len(&self) -> usize {
        self.borrow().len()
    }
}
