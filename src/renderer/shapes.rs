//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering `rect` (screen pixels)
pub fn rect(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
    ]
}

/// Vertices for a list of colored rectangles, in draw order
pub fn rects<'a>(items: impl IntoIterator<Item = &'a (Rect, [f32; 4])>) -> Vec<Vertex> {
    let items = items.into_iter();
    let mut vertices = Vec::with_capacity(items.size_hint().0 * 6);
    for (r, color) in items {
        vertices.extend_from_slice(&rect(r, *color));
    }
    vertices
}
