//! Data model of a posed 2D skeleton: bones, slots, attachments and the
//! draw order they are rendered in.

pub mod attachment;
pub mod blend;
pub mod bone;
pub mod color;
pub mod skeleton;
pub mod slot;
pub mod texture;

pub use attachment::{
    Attachment, BoundingBoxAttachment, MeshAttachment, PointAttachment, RegionAttachment,
    SkeletonAttachment, VertexAttachment,
};
pub use blend::{BlendFactor, BlendMode};
pub use bone::{Bone, BoneData};
pub use color::Color;
pub use skeleton::Skeleton;
pub use slot::{Slot, SlotData};
pub use texture::{TextureId, TextureRegion};
