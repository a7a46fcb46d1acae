use crate::bone::Bone;
use crate::color::Color;
use crate::texture::TextureRegion;

// Corner order of `offset` and `uvs`: bottom-left, upper-left, upper-right,
// bottom-right. Both arrays must agree so vertex `i` gets `uvs[2i..2i + 2]`.
const BLX: usize = 0;
const BLY: usize = 1;
const ULX: usize = 2;
const ULY: usize = 3;
const URX: usize = 4;
const URY: usize = 5;
const BRX: usize = 6;
const BRY: usize = 7;

/// A textured quad.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionAttachment {
    pub name: String,
    pub x: f32,
    pub y: f32,
    /// Degrees.
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    region: TextureRegion,
    offset: [f32; 8],
    uvs: [f32; 8],
}

impl RegionAttachment {
    /// Creates a region sized to the texture region's original size.
    pub fn new(name: impl Into<String>, region: TextureRegion) -> Self {
        let mut attachment = Self {
            name: name.into(),
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            width: region.original_width,
            height: region.original_height,
            color: Color::WHITE,
            region: region.clone(),
            offset: [0.0; 8],
            uvs: [0.0; 8],
        };
        attachment.set_region(region);
        attachment
    }

    pub fn region(&self) -> &TextureRegion {
        &self.region
    }

    /// Replace the texture region, recomputing UVs and local corners.
    pub fn set_region(&mut self, region: TextureRegion) {
        let uvs = &mut self.uvs;
        if region.rotate {
            uvs[URX] = region.u;
            uvs[URY] = region.v2;
            uvs[BRX] = region.u;
            uvs[BRY] = region.v;
            uvs[BLX] = region.u2;
            uvs[BLY] = region.v;
            uvs[ULX] = region.u2;
            uvs[ULY] = region.v2;
        } else {
            uvs[BLX] = region.u;
            uvs[BLY] = region.v2;
            uvs[ULX] = region.u;
            uvs[ULY] = region.v;
            uvs[URX] = region.u2;
            uvs[URY] = region.v;
            uvs[BRX] = region.u2;
            uvs[BRY] = region.v2;
        }
        self.region = region;
        self.update_offset();
    }

    /// Recompute the local corner positions. Call after changing the
    /// position, rotation, scale or size.
    pub fn update_offset(&mut self) {
        let (width, height) = (self.width, self.height);
        let mut local_x2 = width / 2.0;
        let mut local_y2 = height / 2.0;
        let mut local_x = -local_x2;
        let mut local_y = -local_y2;

        // Trim whitespace stripped by the packer.
        let region = &self.region;
        if region.original_width > 0.0 && region.original_height > 0.0 {
            let (packed_w, packed_h) = if region.rotate {
                (region.height, region.width)
            } else {
                (region.width, region.height)
            };
            local_x += region.offset_x / region.original_width * width;
            local_y += region.offset_y / region.original_height * height;
            local_x2 -= (region.original_width - region.offset_x - packed_w) / region.original_width * width;
            local_y2 -= (region.original_height - region.offset_y - packed_h) / region.original_height * height;
        }

        local_x *= self.scale_x;
        local_y *= self.scale_y;
        local_x2 *= self.scale_x;
        local_y2 *= self.scale_y;

        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let local_x_cos = local_x * cos + self.x;
        let local_x_sin = local_x * sin;
        let local_y_cos = local_y * cos + self.y;
        let local_y_sin = local_y * sin;
        let local_x2_cos = local_x2 * cos + self.x;
        let local_x2_sin = local_x2 * sin;
        let local_y2_cos = local_y2 * cos + self.y;
        let local_y2_sin = local_y2 * sin;

        let offset = &mut self.offset;
        offset[BLX] = local_x_cos - local_y_sin;
        offset[BLY] = local_y_cos + local_x_sin;
        offset[ULX] = local_x_cos - local_y2_sin;
        offset[ULY] = local_y2_cos + local_x_sin;
        offset[URX] = local_x2_cos - local_y2_sin;
        offset[URY] = local_y2_cos + local_x2_sin;
        offset[BRX] = local_x2_cos - local_y_sin;
        offset[BRY] = local_y_cos + local_x2_sin;
    }

    /// Local corner positions, relative to the bone.
    pub fn offset(&self) -> &[f32; 8] {
        &self.offset
    }

    /// Texture coordinates, one `u, v` pair per corner.
    pub fn uvs(&self) -> &[f32; 8] {
        &self.uvs
    }

    /// Writes the 4 corners in world space as `x, y` pairs at
    /// `offset + i * stride`.
    pub fn compute_world_vertices(&self, bone: &Bone, world_vertices: &mut [f32], offset: usize, stride: usize) {
        let mut w = offset;
        for corner in self.offset.chunks_exact(2) {
            let (x, y) = bone.local_to_world(corner[0], corner[1]);
            world_vertices[w] = x;
            world_vertices[w + 1] = y;
            w += stride;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bone::BoneData;
    use crate::texture::TextureId;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn region(rotate: bool) -> TextureRegion {
        TextureRegion {
            u: 0.25,
            v: 0.5,
            u2: 0.75,
            v2: 1.0,
            rotate,
            ..TextureRegion::whole(TextureId(1), 20.0, 10.0)
        }
    }

    #[test]
    fn test_uvs_unrotated() {
        let attachment = RegionAttachment::new("body", region(false));
        assert_eq!(
            attachment.uvs(),
            &[0.25, 1.0, 0.25, 0.5, 0.75, 0.5, 0.75, 1.0]
        );
    }

    #[test]
    fn test_uvs_rotated() {
        let attachment = RegionAttachment::new("body", region(true));
        assert_eq!(
            attachment.uvs(),
            &[0.75, 0.5, 0.75, 1.0, 0.25, 1.0, 0.25, 0.5]
        );
    }

    #[test]
    fn test_offset_centered_on_origin() {
        let attachment = RegionAttachment::new("body", region(false));
        assert_eq!(
            attachment.offset(),
            &[-10.0, -5.0, -10.0, 5.0, 10.0, 5.0, 10.0, -5.0]
        );
    }

    #[test]
    fn test_offset_trims_whitespace() {
        let trimmed = TextureRegion {
            offset_x: 2.0,
            offset_y: 1.0,
            width: 16.0,
            height: 8.0,
            original_width: 20.0,
            original_height: 10.0,
            ..TextureRegion::whole(TextureId(1), 20.0, 10.0)
        };
        let attachment = RegionAttachment::new("body", trimmed);
        let offset = attachment.offset();
        assert!(approx(offset[BLX], -8.0));
        assert!(approx(offset[BLY], -4.0));
        assert!(approx(offset[URX], 8.0));
        assert!(approx(offset[URY], 4.0));
    }

    #[test]
    fn test_compute_world_vertices_with_stride() {
        let mut attachment = RegionAttachment::new("body", region(false));
        attachment.x = 1.0;
        attachment.update_offset();

        let mut bone = Bone::new(BoneData::new("root", None));
        bone.update_world_transform(None, 100.0, 200.0);

        let mut out = [0.0f32; 20];
        attachment.compute_world_vertices(&bone, &mut out, 0, 5);
        let expected = [(91.0, 195.0), (91.0, 205.0), (111.0, 205.0), (111.0, 195.0)];
        for (i, (x, y)) in expected.iter().enumerate() {
            assert!(approx(out[i * 5], *x), "x of corner {i}");
            assert!(approx(out[i * 5 + 1], *y), "y of corner {i}");
            assert_eq!(out[i * 5 + 2], 0.0);
        }
    }

    #[test]
    fn test_rotation_and_scale() {
        let mut attachment = RegionAttachment::new("body", region(false));
        attachment.rotation = 90.0;
        attachment.scale_x = 2.0;
        attachment.update_offset();
        let offset = attachment.offset();
        // Bottom-left (-20, -5) rotated 90 degrees is (5, -20).
        assert!(approx(offset[BLX], 5.0));
        assert!(approx(offset[BLY], -20.0));
    }
}
