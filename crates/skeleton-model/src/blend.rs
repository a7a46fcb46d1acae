// Slot blend modes and the GPU blend factors they select.
//
//   Normal:   SrcAlpha (One when premultiplied), OneMinusSrcAlpha
//   Additive: SrcAlpha (One when premultiplied), One
//   Multiply: DstColor, OneMinusSrcAlpha
//   Screen:   One, OneMinusSrcColor

/// A GPU blend factor, as passed to a batch's blend function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstColor,
    OneMinusDstColor,
}

/// Blend mode of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    #[default]
    Normal,
    Additive,
    Multiply,
    Screen,
}

impl BlendMode {
    /// Source factor. Only Normal and Additive depend on premultiplication.
    pub fn source(self, premultiplied_alpha: bool) -> BlendFactor {
        match self {
            BlendMode::Normal | BlendMode::Additive => {
                if premultiplied_alpha {
                    BlendFactor::One
                } else {
                    BlendFactor::SrcAlpha
                }
            }
            BlendMode::Multiply => BlendFactor::DstColor,
            BlendMode::Screen => BlendFactor::One,
        }
    }

    pub fn dest(self) -> BlendFactor {
        match self {
            BlendMode::Normal | BlendMode::Multiply => BlendFactor::OneMinusSrcAlpha,
            BlendMode::Additive => BlendFactor::One,
            BlendMode::Screen => BlendFactor::OneMinusSrcColor,
        }
    }

    /// `(source, dest)` pair for a blend function call.
    pub fn factors(self, premultiplied_alpha: bool) -> (BlendFactor, BlendFactor) {
        (self.source(premultiplied_alpha), self.dest())
    }
}
