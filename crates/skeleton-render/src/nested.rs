// Re-parenting of nested skeletons onto a host bone for the duration of a
// render pass.
//
// Only position and rotation follow the host bone. Host scale and shear are
// not composed into the nested root bone.

use std::cell::RefMut;
use std::ops::Deref;

use skeleton_model::{Bone, Skeleton};

/// Holds a nested skeleton posed at a host bone. Dropping it restores the
/// skeleton position and the root bone's rotation and scale, on every exit
/// path.
pub(crate) struct RootBoneOverride<'a> {
    skeleton: RefMut<'a, Skeleton>,
    x: f32,
    y: f32,
    scale_x: f32,
    scale_y: f32,
    rotation: f32,
}

impl<'a> RootBoneOverride<'a> {
    /// Returns `None` if the skeleton has no bones.
    pub(crate) fn apply(mut skeleton: RefMut<'a, Skeleton>, host: &Bone) -> Option<Self> {
        let root = skeleton.root_bone()?;
        let (scale_x, scale_y, rotation) = (root.scale_x, root.scale_y, root.rotation);
        let (x, y) = (skeleton.x, skeleton.y);

        skeleton.set_position(host.world_x(), host.world_y());
        if let Some(root) = skeleton.root_bone_mut() {
            root.rotation = rotation + host.world_rotation_x();
        }
        skeleton.update_world_transform();

        Some(Self {
            skeleton,
            x,
            y,
            scale_x,
            scale_y,
            rotation,
        })
    }
}

impl Deref for RootBoneOverride<'_> {
    type Target = Skeleton;

    fn deref(&self) -> &Skeleton {
        &self.skeleton
    }
}

impl Drop for RootBoneOverride<'_> {
    fn drop(&mut self) {
        let (x, y) = (self.x, self.y);
        self.skeleton.set_position(x, y);
        if let Some(root) = self.skeleton.root_bone_mut() {
            root.scale_x = self.scale_x;
            root.scale_y = self.scale_y;
            root.rotation = self.rotation;
        }
    }
}
