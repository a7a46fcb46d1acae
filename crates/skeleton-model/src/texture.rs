/// Texture handle for referencing loaded textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// A packed region of a texture atlas page.
///
/// `u, v, u2, v2` are normalized texture coordinates of the packed rectangle.
/// `offset_x/offset_y` and `original_width/original_height` describe the
/// whitespace stripped by the packer, in pixels. `width/height` are the
/// packed size as stored on the atlas page; when `rotate` is set the region
/// was stored rotated 90 degrees, so they are swapped relative to the image.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRegion {
    pub texture: TextureId,
    pub u: f32,
    pub v: f32,
    pub u2: f32,
    pub v2: f32,
    pub rotate: bool,
    pub offset_x: f32,
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
    pub original_width: f32,
    pub original_height: f32,
}

impl TextureRegion {
    /// A region covering a whole texture of the given pixel size.
    pub fn whole(texture: TextureId, width: f32, height: f32) -> Self {
        Self {
            texture,
            u: 0.0,
            v: 0.0,
            u2: 1.0,
            v2: 1.0,
            rotate: false,
            offset_x: 0.0,
            offset_y: 0.0,
            width,
            height,
            original_width: width,
            original_height: height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_region() {
        let region = TextureRegion::whole(TextureId(3), 64.0, 32.0);
        assert_eq!(region.texture, TextureId(3));
        assert_eq!((region.u, region.v, region.u2, region.v2), (0.0, 0.0, 1.0, 1.0));
        assert_eq!(region.original_width, 64.0);
        assert_eq!(region.original_height, 32.0);
        assert!(!region.rotate);
    }
}
