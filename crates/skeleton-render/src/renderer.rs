use log::{debug, trace};
use skeleton_model::{Attachment, BlendMode, Color, Skeleton, SkeletonAttachment, Slot, TextureId};

use crate::batch::{Batch, PolygonBatch, QuadBatch, VertexFormat};
use crate::color::{dark_color, light_color};
use crate::config::RendererConfig;
use crate::error::RenderError;
use crate::nested::RootBoneOverride;

/// Index list of a region quad, corners bottom-left, upper-left,
/// upper-right, bottom-right.
pub const QUAD_TRIANGLES: [u16; 6] = [0, 1, 2, 2, 3, 0];

/// Floats per vertex on the quad-only path.
const QUAD_STRIDE: usize = 5;

/// Turns posed skeletons into vertex data and submits it to a batch.
///
/// Slots are drawn in the skeleton's draw order. The blend function is only
/// changed when a slot's blend mode differs from the previous drawn slot.
/// The scratch vertex buffer is reused between calls and only ever grows;
/// use one renderer per thread.
pub struct SkeletonRenderer {
    premultiplied_alpha: bool,
    vertices: Vec<f32>,
}

impl SkeletonRenderer {
    pub fn new() -> Self {
        Self {
            premultiplied_alpha: false,
            vertices: vec![0.0; 32],
        }
    }

    pub fn with_config(config: &RendererConfig) -> Self {
        Self {
            premultiplied_alpha: config.premultiplied_alpha,
            ..Self::new()
        }
    }

    pub fn premultiplied_alpha(&self) -> bool {
        self.premultiplied_alpha
    }

    pub fn set_premultiplied_alpha(&mut self, premultiplied_alpha: bool) {
        self.premultiplied_alpha = premultiplied_alpha;
    }

    /// Current length of the scratch vertex buffer, in floats.
    pub fn scratch_len(&self) -> usize {
        self.vertices.len()
    }

    /// Draw a skeleton with a quad-only batch.
    ///
    /// Fails with [`RenderError::MeshRequiresPolygonBatch`] on the first
    /// mesh attachment; slots before it have already been submitted.
    pub fn draw<B: QuadBatch + ?Sized>(&mut self, batch: &mut B, skeleton: &Skeleton) -> Result<(), RenderError> {
        let mut blend_mode = None;
        self.render_quads(batch, skeleton, &mut blend_mode)
    }

    /// Draw a skeleton with a triangle batch, in the batch's vertex format.
    pub fn draw_polygons<B: PolygonBatch + ?Sized>(
        &mut self,
        batch: &mut B,
        skeleton: &Skeleton,
    ) -> Result<(), RenderError> {
        let mut blend_mode = None;
        self.render_triangles(batch, skeleton, &mut blend_mode)
    }

    fn render_quads<B: QuadBatch + ?Sized>(
        &mut self,
        batch: &mut B,
        skeleton: &Skeleton,
        blend_mode: &mut Option<BlendMode>,
    ) -> Result<(), RenderError> {
        for slot in skeleton.draw_order_slots() {
            let Some(attachment) = slot.attachment() else {
                continue;
            };
            match attachment {
                Attachment::Region(region) => {
                    let length = 4 * QUAD_STRIDE;
                    let bone = &skeleton.bones()[slot.bone()];
                    region.compute_world_vertices(bone, &mut self.vertices, 0, QUAD_STRIDE);
                    let light = light_color(skeleton.color, slot.color, region.color);
                    fill_vertices(&mut self.vertices[..length], QUAD_STRIDE, light, None, region.uvs());

                    self.apply_blend_mode(batch, slot.blend_mode(), blend_mode);
                    batch.draw_quads(region.region().texture, &self.vertices[..length])?;
                }
                Attachment::Mesh(_) => {
                    return Err(RenderError::MeshRequiresPolygonBatch {
                        slot: slot.name().to_string(),
                    });
                }
                Attachment::Skeleton(attachment) => {
                    self.draw_nested(skeleton, slot, attachment, |renderer, nested| {
                        renderer.render_quads(batch, nested, blend_mode)
                    })?;
                }
                Attachment::BoundingBox(_) | Attachment::Point(_) => {
                    trace!("skipping non-drawable attachment in slot {}", slot.name());
                }
            }
        }
        Ok(())
    }

    fn render_triangles<B: PolygonBatch + ?Sized>(
        &mut self,
        batch: &mut B,
        skeleton: &Skeleton,
        blend_mode: &mut Option<BlendMode>,
    ) -> Result<(), RenderError> {
        let format = batch.vertex_format();
        let stride = format.stride();

        for slot in skeleton.draw_order_slots() {
            let Some(attachment) = slot.attachment() else {
                continue;
            };
            let draw: Draw<'_> = match attachment {
                Attachment::Region(region) => {
                    self.ensure_scratch(4 * stride);
                    let bone = &skeleton.bones()[slot.bone()];
                    region.compute_world_vertices(bone, &mut self.vertices, 0, stride);
                    Draw {
                        vertex_count: 4,
                        triangles: &QUAD_TRIANGLES,
                        texture: region.region().texture,
                        uvs: region.uvs(),
                        color: region.color,
                    }
                }
                Attachment::Mesh(mesh) => {
                    let count = mesh.world_vertices_length();
                    let vertex_count = count >> 1;
                    self.ensure_scratch(vertex_count * stride);
                    mesh.compute_world_vertices(skeleton, slot, 0, count, &mut self.vertices, 0, stride);
                    Draw {
                        vertex_count,
                        triangles: mesh.triangles(),
                        texture: mesh.region().texture,
                        uvs: mesh.uvs(),
                        color: mesh.color,
                    }
                }
                Attachment::Skeleton(attachment) => {
                    self.draw_nested(skeleton, slot, attachment, |renderer, nested| {
                        renderer.render_triangles(batch, nested, blend_mode)
                    })?;
                    continue;
                }
                Attachment::BoundingBox(_) | Attachment::Point(_) => {
                    trace!("skipping non-drawable attachment in slot {}", slot.name());
                    continue;
                }
            };

            let length = draw.vertex_count * stride;
            let light = light_color(skeleton.color, slot.color, draw.color);
            let dark = match format {
                VertexFormat::SingleColor => None,
                VertexFormat::TwoColor => Some(dark_color(skeleton.color, slot.dark_color, draw.color)),
            };
            fill_vertices(&mut self.vertices[..length], stride, light, dark, draw.uvs);

            self.apply_blend_mode(batch, slot.blend_mode(), blend_mode);
            batch.draw_triangles(draw.texture, &self.vertices[..length], draw.triangles)?;
        }
        Ok(())
    }

    /// Render a nested skeleton positioned at the slot's bone. Skipped when
    /// the attachment has no skeleton.
    fn draw_nested<F>(
        &mut self,
        skeleton: &Skeleton,
        slot: &Slot,
        attachment: &SkeletonAttachment,
        draw: F,
    ) -> Result<(), RenderError>
    where
        F: FnOnce(&mut Self, &Skeleton) -> Result<(), RenderError>,
    {
        let Some(nested) = &attachment.skeleton else {
            trace!("slot {} has an empty skeleton attachment", slot.name());
            return Ok(());
        };
        let nested = nested
            .try_borrow_mut()
            .map_err(|_| RenderError::NestedSkeletonBusy {
                slot: slot.name().to_string(),
            })?;
        let host = &skeleton.bones()[slot.bone()];
        let Some(posed) = RootBoneOverride::apply(nested, host) else {
            trace!("nested skeleton in slot {} has no bones", slot.name());
            return Ok(());
        };
        draw(self, &posed)
    }

    fn apply_blend_mode<B: Batch + ?Sized>(&self, batch: &mut B, mode: BlendMode, current: &mut Option<BlendMode>) {
        if *current == Some(mode) {
            return;
        }
        let (src, dst) = mode.factors(self.premultiplied_alpha);
        batch.set_blend_function(src, dst);
        *current = Some(mode);
    }

    fn ensure_scratch(&mut self, length: usize) {
        if self.vertices.len() < length {
            debug!("growing scratch vertex buffer from {} to {} floats", self.vertices.len(), length);
            self.vertices.resize(length, 0.0);
        }
    }
}

impl Default for SkeletonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// What to submit for one slot once its positions are in the scratch buffer.
struct Draw<'a> {
    vertex_count: usize,
    triangles: &'a [u16],
    texture: TextureId,
    uvs: &'a [f32],
    color: Color,
}

/// Fill everything after each vertex's `x, y`: the packed color(s), then the
/// UV pair.
fn fill_vertices(vertices: &mut [f32], stride: usize, light: f32, dark: Option<f32>, uvs: &[f32]) {
    for (vertex, uv) in vertices.chunks_exact_mut(stride).zip(uvs.chunks_exact(2)) {
        vertex[2] = light;
        let mut v = 3;
        if let Some(dark) = dark {
            vertex[3] = dark;
            v = 4;
        }
        vertex[v] = uv[0];
        vertex[v + 1] = uv[1];
    }
}
