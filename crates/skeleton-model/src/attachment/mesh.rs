use crate::attachment::VertexAttachment;
use crate::color::Color;
use crate::skeleton::Skeleton;
use crate::slot::Slot;
use crate::texture::TextureRegion;

/// A textured, triangulated mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshAttachment {
    pub name: String,
    pub color: Color,
    /// Number of floats making up the hull, for outline rendering.
    pub hull_length: usize,
    vertices: VertexAttachment,
    region: TextureRegion,
    /// UVs normalized to the region, before atlas placement.
    region_uvs: Vec<f32>,
    uvs: Vec<f32>,
    triangles: Vec<u16>,
}

impl MeshAttachment {
    pub fn new(
        name: impl Into<String>,
        region: TextureRegion,
        vertices: VertexAttachment,
        region_uvs: Vec<f32>,
        triangles: Vec<u16>,
    ) -> Self {
        let mut mesh = Self {
            name: name.into(),
            color: Color::WHITE,
            hull_length: 0,
            vertices,
            region,
            uvs: vec![0.0; region_uvs.len()],
            region_uvs,
            triangles,
        };
        mesh.update_uvs();
        mesh
    }

    pub fn region(&self) -> &TextureRegion {
        &self.region
    }

    pub fn set_region(&mut self, region: TextureRegion) {
        self.region = region;
        self.update_uvs();
    }

    /// Map region UVs into the atlas page.
    pub fn update_uvs(&mut self) {
        let region = &self.region;
        let (u, v) = (region.u, region.v);
        let width = region.u2 - u;
        let height = region.v2 - v;
        for (uv, local) in self
            .uvs
            .chunks_exact_mut(2)
            .zip(self.region_uvs.chunks_exact(2))
        {
            if region.rotate {
                uv[0] = u + local[1] * width;
                uv[1] = v + height - local[0] * height;
            } else {
                uv[0] = u + local[0] * width;
                uv[1] = v + local[1] * height;
            }
        }
    }

    pub fn vertices(&self) -> &VertexAttachment {
        &self.vertices
    }

    /// Two floats per vertex.
    pub fn world_vertices_length(&self) -> usize {
        self.vertices.world_vertices_length
    }

    pub fn uvs(&self) -> &[f32] {
        &self.uvs
    }

    pub fn region_uvs(&self) -> &[f32] {
        &self.region_uvs
    }

    /// Vertex index triples.
    pub fn triangles(&self) -> &[u16] {
        &self.triangles
    }

    /// See [`VertexAttachment::compute_world_vertices`].
    #[allow(clippy::too_many_arguments)]
    pub fn compute_world_vertices(
        &self,
        skeleton: &Skeleton,
        slot: &Slot,
        start: usize,
        count: usize,
        world_vertices: &mut [f32],
        offset: usize,
        stride: usize,
    ) {
        self.vertices
            .compute_world_vertices(skeleton, slot, start, count, world_vertices, offset, stride);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::TextureId;

    fn region(rotate: bool) -> TextureRegion {
        TextureRegion {
            u: 0.5,
            v: 0.0,
            u2: 1.0,
            v2: 0.5,
            rotate,
            ..TextureRegion::whole(TextureId(7), 32.0, 32.0)
        }
    }

    fn triangle(rotate: bool) -> MeshAttachment {
        MeshAttachment::new(
            "tri",
            region(rotate),
            VertexAttachment::unweighted(vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0]),
            vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn test_update_uvs() {
        let mesh = triangle(false);
        assert_eq!(mesh.uvs(), &[0.5, 0.0, 1.0, 0.0, 0.5, 0.5]);
        assert_eq!(mesh.world_vertices_length(), 6);
        assert_eq!(mesh.triangles(), &[0, 1, 2]);
    }

    #[test]
    fn test_update_uvs_rotated() {
        let mesh = triangle(true);
        assert_eq!(mesh.uvs(), &[0.5, 0.5, 0.5, 0.0, 1.0, 0.5]);
    }

    #[test]
    fn test_set_region_recomputes_uvs() {
        let mut mesh = triangle(false);
        mesh.set_region(TextureRegion::whole(TextureId(8), 16.0, 16.0));
        assert_eq!(mesh.uvs(), &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(mesh.region().texture, TextureId(8));
    }
}
