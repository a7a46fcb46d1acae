//! Attachments: the drawable and non-drawable content bound to slots.

mod mesh;
mod region;
mod vertex;

use std::cell::RefCell;
use std::rc::Rc;

use crate::bone::Bone;
use crate::skeleton::Skeleton;

pub use mesh::MeshAttachment;
pub use region::RegionAttachment;
pub use vertex::VertexAttachment;

/// Content a slot can hold.
#[derive(Debug, Clone)]
pub enum Attachment {
    Region(Rc<RegionAttachment>),
    Mesh(Rc<MeshAttachment>),
    Skeleton(SkeletonAttachment),
    BoundingBox(Rc<BoundingBoxAttachment>),
    Point(PointAttachment),
}

impl Attachment {
    pub fn name(&self) -> &str {
        match self {
            Attachment::Region(region) => &region.name,
            Attachment::Mesh(mesh) => &mesh.name,
            Attachment::Skeleton(attachment) => &attachment.name,
            Attachment::BoundingBox(bounds) => &bounds.name,
            Attachment::Point(point) => &point.name,
        }
    }
}

impl From<RegionAttachment> for Attachment {
    fn from(region: RegionAttachment) -> Self {
        Attachment::Region(Rc::new(region))
    }
}

impl From<MeshAttachment> for Attachment {
    fn from(mesh: MeshAttachment) -> Self {
        Attachment::Mesh(Rc::new(mesh))
    }
}

impl From<SkeletonAttachment> for Attachment {
    fn from(attachment: SkeletonAttachment) -> Self {
        Attachment::Skeleton(attachment)
    }
}

/// Embeds another skeleton, drawn relative to the hosting slot's bone.
#[derive(Debug, Clone)]
pub struct SkeletonAttachment {
    pub name: String,
    /// `None` is a placeholder: nothing is drawn.
    pub skeleton: Option<Rc<RefCell<Skeleton>>>,
}

impl SkeletonAttachment {
    pub fn new(name: impl Into<String>, skeleton: Option<Rc<RefCell<Skeleton>>>) -> Self {
        Self {
            name: name.into(),
            skeleton,
        }
    }
}

/// Polygon used for hit detection. Never drawn.
#[derive(Debug, Clone)]
pub struct BoundingBoxAttachment {
    pub name: String,
    pub vertices: VertexAttachment,
}

/// A single point with a rotation. Never drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct PointAttachment {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

impl PointAttachment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
        }
    }

    pub fn compute_world_position(&self, bone: &Bone) -> (f32, f32) {
        bone.local_to_world(self.x, self.y)
    }

    /// World rotation in degrees.
    pub fn compute_world_rotation(&self, bone: &Bone) -> f32 {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let x = cos * bone.a() + sin * bone.b();
        let y = cos * bone.c() + sin * bone.d();
        y.atan2(x).to_degrees()
    }
}
