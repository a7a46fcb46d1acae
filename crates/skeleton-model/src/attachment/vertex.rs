use crate::skeleton::Skeleton;
use crate::slot::Slot;

/// Vertices shared by meshes and bounding boxes.
///
/// Unweighted (`bones == None`): `vertices` holds `x, y` pairs local to the
/// slot's bone. Weighted: `bones` holds, per vertex, the influence count `n`
/// followed by `n` bone indices, and `vertices` holds `x, y, weight` per
/// influence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexAttachment {
    pub bones: Option<Vec<usize>>,
    pub vertices: Vec<f32>,
    /// Two floats per world vertex.
    pub world_vertices_length: usize,
}

impl VertexAttachment {
    pub fn unweighted(vertices: Vec<f32>) -> Self {
        Self {
            world_vertices_length: vertices.len(),
            bones: None,
            vertices,
        }
    }

    pub fn weighted(bones: Vec<usize>, vertices: Vec<f32>, world_vertices_length: usize) -> Self {
        Self {
            bones: Some(bones),
            vertices,
            world_vertices_length,
        }
    }

    /// Transform `count` floats of local vertices, starting at float `start`,
    /// to world space. Writes one `x, y` pair per vertex at
    /// `offset + i * stride` and leaves the rest of each stride untouched.
    ///
    /// The slot's deform vertices replace (unweighted) or offset (weighted)
    /// the setup vertices when present.
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
        let end = offset + (count >> 1) * stride;
        let deform = &slot.deform;

        let Some(bones) = &self.bones else {
            let vertices = if deform.is_empty() {
                &self.vertices
            } else {
                deform
            };
            let bone = &skeleton.bones()[slot.bone()];
            let mut v = start;
            let mut w = offset;
            while w < end {
                let (x, y) = bone.local_to_world(vertices[v], vertices[v + 1]);
                world_vertices[w] = x;
                world_vertices[w + 1] = y;
                v += 2;
                w += stride;
            }
            return;
        };

        // Skip the influences of vertices before `start`.
        let mut v = 0;
        let mut skip = 0;
        let mut i = 0;
        while i < start {
            let n = bones[v];
            v += n + 1;
            skip += n;
            i += 2;
        }

        let skeleton_bones = skeleton.bones();
        let mut b = skip * 3;
        let mut f = skip << 1;
        let mut w = offset;
        while w < end {
            let (mut wx, mut wy) = (0.0, 0.0);
            let n = v + 1 + bones[v];
            v += 1;
            while v < n {
                let bone = &skeleton_bones[bones[v]];
                let (mut vx, mut vy) = (self.vertices[b], self.vertices[b + 1]);
                if !deform.is_empty() {
                    vx += deform[f];
                    vy += deform[f + 1];
                }
                let weight = self.vertices[b + 2];
                let (x, y) = bone.local_to_world(vx, vy);
                wx += x * weight;
                wy += y * weight;
                v += 1;
                b += 3;
                f += 2;
            }
            world_vertices[w] = wx;
            world_vertices[w + 1] = wy;
            w += stride;
        }
    }
}
