/// Setup pose of a bone.
#[derive(Debug, Clone, PartialEq)]
pub struct BoneData {
    pub name: String,
    /// Index of the parent bone. Parents always precede their children.
    pub parent: Option<usize>,
    pub x: f32,
    pub y: f32,
    /// Degrees.
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub shear_x: f32,
    pub shear_y: f32,
}

impl BoneData {
    pub fn new(name: impl Into<String>, parent: Option<usize>) -> Self {
        Self {
            name: name.into(),
            parent,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            shear_x: 0.0,
            shear_y: 0.0,
        }
    }
}

/// A posed bone: local transform plus the world transform derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    data: BoneData,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub shear_x: f32,
    pub shear_y: f32,
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    world_x: f32,
    world_y: f32,
}

impl Bone {
    pub fn new(data: BoneData) -> Self {
        let mut bone = Self {
            data,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            shear_x: 0.0,
            shear_y: 0.0,
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            world_x: 0.0,
            world_y: 0.0,
        };
        bone.set_to_setup_pose();
        bone
    }

    pub fn data(&self) -> &BoneData {
        &self.data
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn parent(&self) -> Option<usize> {
        self.data.parent
    }

    pub fn set_to_setup_pose(&mut self) {
        self.x = self.data.x;
        self.y = self.data.y;
        self.rotation = self.data.rotation;
        self.scale_x = self.data.scale_x;
        self.scale_y = self.data.scale_y;
        self.shear_x = self.data.shear_x;
        self.shear_y = self.data.shear_y;
    }

    /// Recompute the world transform from the local transform.
    ///
    /// `parent` must already be up to date. Root bones are placed at
    /// `(x + skeleton_x, y + skeleton_y)`.
    pub fn update_world_transform(&mut self, parent: Option<&Bone>, skeleton_x: f32, skeleton_y: f32) {
        let rotation_y = self.rotation + 90.0 + self.shear_y;
        let (sin_x, cos_x) = (self.rotation + self.shear_x).to_radians().sin_cos();
        let (sin_y, cos_y) = rotation_y.to_radians().sin_cos();
        let la = cos_x * self.scale_x;
        let lb = cos_y * self.scale_y;
        let lc = sin_x * self.scale_x;
        let ld = sin_y * self.scale_y;

        let Some(parent) = parent else {
            self.a = la;
            self.b = lb;
            self.c = lc;
            self.d = ld;
            self.world_x = self.x + skeleton_x;
            self.world_y = self.y + skeleton_y;
            return;
        };

        let (pa, pb, pc, pd) = (parent.a, parent.b, parent.c, parent.d);
        self.world_x = pa * self.x + pb * self.y + parent.world_x;
        self.world_y = pc * self.x + pd * self.y + parent.world_y;
        self.a = pa * la + pb * lc;
        self.b = pa * lb + pb * ld;
        self.c = pc * la + pd * lc;
        self.d = pc * lb + pd * ld;
    }

    pub fn a(&self) -> f32 {
        self.a
    }

    pub fn b(&self) -> f32 {
        self.b
    }

    pub fn c(&self) -> f32 {
        self.c
    }

    pub fn d(&self) -> f32 {
        self.d
    }

    pub fn world_x(&self) -> f32 {
        self.world_x
    }

    pub fn world_y(&self) -> f32 {
        self.world_y
    }

    /// World rotation of the X axis, in degrees.
    pub fn world_rotation_x(&self) -> f32 {
        self.c.atan2(self.a).to_degrees()
    }

    /// World rotation of the Y axis, in degrees.
    pub fn world_rotation_y(&self) -> f32 {
        self.d.atan2(self.b).to_degrees()
    }

    pub fn world_scale_x(&self) -> f32 {
        (self.a * self.a + self.c * self.c).sqrt()
    }

    pub fn world_scale_y(&self) -> f32 {
        (self.b * self.b + self.d * self.d).sqrt()
    }

    /// Transform a point from bone-local to world space.
    pub fn local_to_world(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x * self.a + y * self.b + self.world_x,
            x * self.c + y * self.d + self.world_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_root_bone_identity() {
        let mut bone = Bone::new(BoneData::new("root", None));
        bone.update_world_transform(None, 10.0, 20.0);
        assert!(approx(bone.a(), 1.0));
        assert!(approx(bone.b(), 0.0));
        assert!(approx(bone.c(), 0.0));
        assert!(approx(bone.d(), 1.0));
        assert_eq!(bone.world_x(), 10.0);
        assert_eq!(bone.world_y(), 20.0);
    }

    #[test]
    fn test_child_inherits_rotation() {
        let mut root = Bone::new(BoneData {
            rotation: 90.0,
            ..BoneData::new("root", None)
        });
        root.update_world_transform(None, 0.0, 0.0);

        let mut child = Bone::new(BoneData {
            x: 10.0,
            ..BoneData::new("child", Some(0))
        });
        child.update_world_transform(Some(&root), 0.0, 0.0);

        // Parent rotated 90 degrees: local +X maps to world +Y.
        assert!(approx(child.world_x(), 0.0));
        assert!(approx(child.world_y(), 10.0));
        assert!(approx(child.world_rotation_x(), 90.0));
    }

    #[test]
    fn test_world_scale() {
        let mut bone = Bone::new(BoneData {
            scale_x: 2.0,
            scale_y: 3.0,
            rotation: 30.0,
            ..BoneData::new("root", None)
        });
        bone.update_world_transform(None, 0.0, 0.0);
        assert!(approx(bone.world_scale_x(), 2.0));
        assert!(approx(bone.world_scale_y(), 3.0));
        assert!(approx(bone.world_rotation_x(), 30.0));
    }

    #[test]
    fn test_local_to_world() {
        let mut bone = Bone::new(BoneData {
            x: 5.0,
            scale_x: 2.0,
            ..BoneData::new("root", None)
        });
        bone.update_world_transform(None, 1.0, 1.0);
        let (x, y) = bone.local_to_world(1.0, 1.0);
        assert!(approx(x, 8.0));
        assert!(approx(y, 2.0));
    }

    #[test]
    fn test_set_to_setup_pose() {
        let mut bone = Bone::new(BoneData {
            rotation: 45.0,
            ..BoneData::new("root", None)
        });
        bone.rotation = 10.0;
        bone.scale_x = 4.0;
        bone.set_to_setup_pose();
        assert_eq!(bone.rotation, 45.0);
        assert_eq!(bone.scale_x, 1.0);
    }
}
