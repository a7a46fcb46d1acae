//! Typed views of the renderer's float vertex buffers.

/// Single color vertex, as submitted with [`crate::VertexFormat::SingleColor`].
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    pub x: f32,
    pub y: f32,
    /// Packed ABGR color, see [`crate::color`].
    pub color: f32,
    pub u: f32,
    pub v: f32,
}

/// Two color vertex, as submitted with [`crate::VertexFormat::TwoColor`].
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TwoColorVertex {
    pub x: f32,
    pub y: f32,
    pub light: f32,
    pub dark: f32,
    pub u: f32,
    pub v: f32,
}

/// Panics if `vertices` is not a whole number of vertices.
pub fn as_color_vertices(vertices: &[f32]) -> &[ColorVertex] {
    bytemuck::cast_slice(vertices)
}

/// Panics if `vertices` is not a whole number of vertices.
pub fn as_two_color_vertices(vertices: &[f32]) -> &[TwoColorVertex] {
    bytemuck::cast_slice(vertices)
}

#[cfg(feature = "wgpu")]
impl ColorVertex {
    /// Vertex buffer layout for wgpu pipeline. The packed color is read as
    /// normalized bytes.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // color
                wgpu::VertexAttribute {
                    offset: 8,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Unorm8x4,
                },
                // uv
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

#[cfg(feature = "wgpu")]
impl TwoColorVertex {
    /// Vertex buffer layout for wgpu pipeline. Both packed colors are read
    /// as normalized bytes.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TwoColorVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // light
                wgpu::VertexAttribute {
                    offset: 8,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Unorm8x4,
                },
                // dark
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Unorm8x4,
                },
                // uv
                wgpu::VertexAttribute {
                    offset: 16,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}
