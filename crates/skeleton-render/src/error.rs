use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The quad-only path was given content that needs triangles.
    #[error("slot {slot} holds a mesh; meshes require a polygon batch")]
    MeshRequiresPolygonBatch { slot: String },

    /// The nested skeleton is already borrowed, usually because skeletons
    /// attach each other in a cycle.
    #[error("nested skeleton in slot {slot} is already being rendered")]
    NestedSkeletonBusy { slot: String },

    #[error("batch submission failed: {0}")]
    Batch(#[from] anyhow::Error),
}
