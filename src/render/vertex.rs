//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// View a vertex list as raw bytes for a GPU upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Scale rgb by a glow factor, keeping alpha
pub fn glow(color: [f32; 4], factor: f32) -> [f32; 4] {
    [color[0] * factor, color[1] * factor, color[2] * factor, color[3]]
}

pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha]
}

/// Colors for game elements
pub mod colors {
    pub const BG_TOP: [f32; 4] = [0.12, 0.0, 0.20, 1.0];
    pub const BG_BOTTOM: [f32; 4] = [0.02, 0.02, 0.08, 1.0];
    pub const PLAYER: [f32; 4] = [0.10, 0.90, 0.90, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 0.95, 0.30, 1.0];
    pub const GHOST: [f32; 4] = [0.90, 0.10, 0.95, 1.0];
    pub const EYES: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const DIVIDER: [f32; 4] = [0.28, 0.28, 0.32, 1.0];
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SPARK: [f32; 4] = [1.0, 0.85, 0.25, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(Vertex::STRIDE, 24);
        let v = [Vertex::new(1.0, 2.0, colors::EYES); 3];
        assert_eq!(as_bytes(&v).len(), 72);
    }

    #[test]
    fn test_glow_keeps_alpha() {
        let c = glow([0.5, 0.25, 1.0, 0.4], 2.0);
        assert_eq!(c, [1.0, 0.5, 2.0, 0.4]);
    }
}
