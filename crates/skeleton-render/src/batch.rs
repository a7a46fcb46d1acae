use anyhow::Result;
use skeleton_model::{BlendFactor, TextureId};

/// Vertex layout a polygon batch expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VertexFormat {
    /// `x, y, color, u, v`
    #[default]
    SingleColor,
    /// `x, y, light, dark, u, v`
    TwoColor,
}

impl VertexFormat {
    /// Floats per vertex.
    pub const fn stride(self) -> usize {
        match self {
            VertexFormat::SingleColor => 5,
            VertexFormat::TwoColor => 6,
        }
    }
}

/// Blend state shared by every batch kind.
pub trait Batch {
    fn set_blend_function(&mut self, src: BlendFactor, dst: BlendFactor);
}

/// A batch that only accepts textured quads.
pub trait QuadBatch: Batch {
    /// Draw quads of 4 vertices each, `x, y, color, u, v` per vertex.
    fn draw_quads(&mut self, texture: TextureId, vertices: &[f32]) -> Result<()>;
}

/// A batch that accepts indexed triangles.
/// Implementations: a GPU batch (production), CommandRecorder (testing).
pub trait PolygonBatch: Batch {
    fn vertex_format(&self) -> VertexFormat;

    /// `vertices` is laid out per [`PolygonBatch::vertex_format`];
    /// `triangles` index into it, three per triangle.
    fn draw_triangles(&mut self, texture: TextureId, vertices: &[f32], triangles: &[u16]) -> Result<()>;
}
