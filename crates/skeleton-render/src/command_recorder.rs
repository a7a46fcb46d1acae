use std::collections::HashSet;

use anyhow::{Result, anyhow};
use skeleton_model::{BlendFactor, TextureId};

use crate::batch::{Batch, PolygonBatch, QuadBatch, VertexFormat};

/// Recorded batch command for testing.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchCommand {
    SetBlendFunction {
        src: BlendFactor,
        dst: BlendFactor,
    },
    Draw {
        texture: TextureId,
        vertices: Vec<f32>,
        /// `None` for quad draws.
        triangles: Option<Vec<u16>>,
    },
}

/// A mock batch that records commands for snapshot testing.
/// Does not require a GPU.
pub struct CommandRecorder {
    format: VertexFormat,
    commands: Vec<BatchCommand>,
    textures: HashSet<TextureId>,
    next_texture_id: u64,
}

impl CommandRecorder {
    /// A recorder accepting quads and single color triangles.
    pub fn new() -> Self {
        Self::with_format(VertexFormat::SingleColor)
    }

    /// A recorder accepting two color triangles.
    pub fn two_color() -> Self {
        Self::with_format(VertexFormat::TwoColor)
    }

    pub fn with_format(format: VertexFormat) -> Self {
        Self {
            format,
            commands: Vec::new(),
            textures: HashSet::new(),
            next_texture_id: 1,
        }
    }

    /// Get all recorded commands.
    pub fn commands(&self) -> &[BatchCommand] {
        &self.commands
    }

    /// Clear recorded commands.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Register a mock texture. Draws with unregistered textures fail.
    pub fn register_texture(&mut self) -> TextureId {
        let id = TextureId(self.next_texture_id);
        self.next_texture_id += 1;
        self.textures.insert(id);
        id
    }

    /// Recorded blend function calls, in order.
    pub fn blend_functions(&self) -> Vec<(BlendFactor, BlendFactor)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                BatchCommand::SetBlendFunction { src, dst } => Some((*src, *dst)),
                BatchCommand::Draw { .. } => None,
            })
            .collect()
    }

    /// Number of recorded draws.
    pub fn draw_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, BatchCommand::Draw { .. }))
            .count()
    }

    fn record_draw(&mut self, texture: TextureId, vertices: &[f32], triangles: Option<&[u16]>) -> Result<()> {
        if !self.textures.contains(&texture) {
            return Err(anyhow!("unknown texture: {:?}", texture));
        }
        self.commands.push(BatchCommand::Draw {
            texture,
            vertices: vertices.to_vec(),
            triangles: triangles.map(<[u16]>::to_vec),
        });
        Ok(())
    }
}

impl Default for CommandRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Batch for CommandRecorder {
    fn set_blend_function(&mut self, src: BlendFactor, dst: BlendFactor) {
        self.commands.push(BatchCommand::SetBlendFunction { src, dst });
    }
}

impl QuadBatch for CommandRecorder {
    fn draw_quads(&mut self, texture: TextureId, vertices: &[f32]) -> Result<()> {
        self.record_draw(texture, vertices, None)
    }
}

impl PolygonBatch for CommandRecorder {
    fn vertex_format(&self) -> VertexFormat {
        self.format
    }

    fn draw_triangles(&mut self, texture: TextureId, vertices: &[f32], triangles: &[u16]) -> Result<()> {
        self.record_draw(texture, vertices, Some(triangles))
    }
}
