use crate::attachment::Attachment;
use crate::blend::BlendMode;
use crate::color::Color;

/// Setup pose of a slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotData {
    pub name: String,
    /// Index of the bone the slot is attached to.
    pub bone: usize,
    pub color: Color,
    /// Dark color for two color tinting. `None` disables it.
    pub dark_color: Option<Color>,
    pub blend_mode: BlendMode,
}

impl SlotData {
    pub fn new(name: impl Into<String>, bone: usize) -> Self {
        Self {
            name: name.into(),
            bone,
            color: Color::WHITE,
            dark_color: None,
            blend_mode: BlendMode::Normal,
        }
    }
}

/// A slot in a posed skeleton.
#[derive(Debug, Clone)]
pub struct Slot {
    data: SlotData,
    pub color: Color,
    pub dark_color: Option<Color>,
    attachment: Option<Attachment>,
    /// Local vertex overrides for the current mesh attachment. Empty if unused.
    pub deform: Vec<f32>,
}

impl Slot {
    pub fn new(data: SlotData) -> Self {
        Self {
            color: data.color,
            dark_color: data.dark_color,
            data,
            attachment: None,
            deform: Vec::new(),
        }
    }

    pub fn data(&self) -> &SlotData {
        &self.data
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn bone(&self) -> usize {
        self.data.bone
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.data.blend_mode
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Replace the attachment. Deform vertices belong to the old attachment
    /// and are cleared.
    pub fn set_attachment(&mut self, attachment: Option<Attachment>) {
        self.attachment = attachment;
        self.deform.clear();
    }

    pub fn set_to_setup_pose(&mut self) {
        self.color = self.data.color;
        self.dark_color = self.data.dark_color;
    }
}
