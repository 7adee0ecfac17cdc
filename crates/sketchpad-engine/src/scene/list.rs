use super::Shape;

/// Placed shapes in insertion order.
///
/// Insertion order is paint order: later shapes draw on top. The list only grows,
/// one shape per stamp, until [`ShapeList::clear`].
#[derive(Debug, Default, Clone)]
pub struct ShapeList {
    shapes: Vec<Shape>,
}

impl ShapeList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape. No capacity limit and no deduplication.
    #[inline]
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Removes every shape. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in paint order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::Point;

    fn point(x: f32) -> Shape {
        Point::new(Vec2::new(x, 0.0), Color::black(), 5.0).unwrap().into()
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut list = ShapeList::new();
        for i in 0..5 {
            list.push(point(i as f32 * 0.1));
        }
        let xs: Vec<f32> = list.iter().map(|s| s.position().x).collect();
        assert_eq!(xs, vec![0.0, 0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut list = ShapeList::new();
        list.push(point(0.0));
        list.push(point(0.0));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn clear_empties() {
        let mut list = ShapeList::new();
        list.push(point(0.0));
        list.clear();
        assert!(list.is_empty());
    }
}
