//! Turns posed skeletons into batched vertex data.
//!
//! [`SkeletonRenderer`] walks a skeleton's draw order and submits one draw
//! per visible attachment to a [`QuadBatch`] or [`PolygonBatch`], changing
//! the blend function only between runs of different blend modes.

pub mod batch;
pub mod color;
pub mod command_recorder;
pub mod config;
pub mod error;
mod nested;
pub mod renderer;
pub mod vertex;

pub use batch::{Batch, PolygonBatch, QuadBatch, VertexFormat};
pub use command_recorder::{BatchCommand, CommandRecorder};
pub use config::RendererConfig;
pub use error::RenderError;
pub use renderer::{QUAD_TRIANGLES, SkeletonRenderer};
pub use vertex::{ColorVertex, TwoColorVertex};
