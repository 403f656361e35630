//! Shape generation for 2D primitives
//!
//! Everything in the game is drawn as axis-aligned quads (two triangles).

use glam::Vec2;

use super::vertex::Vertex;

/// Generate vertices for a solid rectangle (center + full size)
pub fn rect(center: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    gradient_rect(center, size, color, color)
}

/// Rectangle blending from `bottom` to `top` color
pub fn gradient_rect(center: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) -> [Vertex; 6] {
    let h = size * 0.5;
    let (l, r) = (center.x - h.x, center.x + h.x);
    let (b, t) = (center.y - h.y, center.y + h.y);
    [
        Vertex::new(r, t, top),
        Vertex::new(r, b, bottom),
        Vertex::new(l, b, bottom),
        Vertex::new(r, t, top),
        Vertex::new(l, b, bottom),
        Vertex::new(l, t, top),
    ]
}

/// Shift every vertex by `offset` (camera shake)
pub fn translate(vertices: &mut [Vertex], offset: Vec2) {
    if offset == Vec2::ZERO {
        return;
    }
    for v in vertices {
        v.position[0] += offset.x;
        v.position[1] += offset.y;
    }
}
