use crate::attachment::Attachment;
use crate::bone::{Bone, BoneData};
use crate::color::Color;
use crate::slot::{Slot, SlotData};

/// A posed skeleton: bones, slots, and the order slots are drawn in.
#[derive(Debug, Clone)]
pub struct Skeleton {
    bones: Vec<Bone>,
    slots: Vec<Slot>,
    /// Slot indices, back to front.
    draw_order: Vec<usize>,
    pub color: Color,
    pub x: f32,
    pub y: f32,
}

impl Skeleton {
    /// Bones must be ordered so parents precede their children. The draw
    /// order starts out as slot order.
    pub fn new(bones: Vec<BoneData>, slots: Vec<SlotData>) -> Self {
        Self {
            bones: bones.into_iter().map(Bone::new).collect(),
            draw_order: (0..slots.len()).collect(),
            slots: slots.into_iter().map(Slot::new).collect(),
            color: Color::WHITE,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn bones_mut(&mut self) -> &mut [Bone] {
        &mut self.bones
    }

    pub fn root_bone(&self) -> Option<&Bone> {
        self.bones.first()
    }

    pub fn root_bone_mut(&mut self) -> Option<&mut Bone> {
        self.bones.first_mut()
    }

    pub fn find_bone(&self, name: &str) -> Option<usize> {
        self.bones.iter().position(|bone| bone.name() == name)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Slot] {
        &mut self.slots
    }

    pub fn find_slot(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.name() == name)
    }

    pub fn draw_order(&self) -> &[usize] {
        &self.draw_order
    }

    /// Mutable draw order. Must remain a permutation of the slot indices.
    pub fn draw_order_mut(&mut self) -> &mut Vec<usize> {
        &mut self.draw_order
    }

    /// Slots in draw order.
    pub fn draw_order_slots(&self) -> impl Iterator<Item = &Slot> {
        self.draw_order.iter().map(|&index| &self.slots[index])
    }

    pub fn set_attachment(&mut self, slot: usize, attachment: Option<Attachment>) {
        self.slots[slot].set_attachment(attachment);
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Recompute all bone world transforms, parents first.
    pub fn update_world_transform(&mut self) {
        for i in 0..self.bones.len() {
            let (done, rest) = self.bones.split_at_mut(i);
            let bone = &mut rest[0];
            let parent = bone.parent().map(|p| &done[p]);
            bone.update_world_transform(parent, self.x, self.y);
        }
    }

    pub fn set_bones_to_setup_pose(&mut self) {
        self.bones.iter_mut().for_each(Bone::set_to_setup_pose);
    }

    pub fn set_slots_to_setup_pose(&mut self) {
        self.draw_order = (0..self.slots.len()).collect();
        self.slots.iter_mut().for_each(Slot::set_to_setup_pose);
    }

    pub fn set_to_setup_pose(&mut self) {
        self.set_bones_to_setup_pose();
        self.set_slots_to_setup_pose();
    }
}
