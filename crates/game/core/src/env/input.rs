use glam::Vec2;

/// Per-frame input polling.
///
/// `horizontal` is the movement stick: `x` is right, `y` is forward (or up
/// while clinging to a wall). Implementations normalize to unit length or
/// less.
pub trait InputSource {
    fn horizontal(&self) -> Vec2;

    fn climb_held(&self) -> bool;

    /// True only on the frame the jump button went down.
    fn jump_pressed(&self) -> bool;

    fn jump_held(&self) -> bool;

    fn glide_held(&self) -> bool;
}

/// Plain-data snapshot of one frame of input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputFrame {
    pub horizontal: Vec2,
    pub climb: bool,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub glide: bool,
}

impl InputFrame {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(horizontal: Vec2) -> Self {
        Self {
            horizontal: horizontal.clamp_length_max(1.0),
            ..Self::default()
        }
    }

    pub fn with_climb(mut self) -> Self {
        self.climb = true;
        self
    }

    /// Presses and holds jump.
    pub fn with_jump(mut self) -> Self {
        self.jump_pressed = true;
        self.jump_held = true;
        self
    }

    pub fn with_glide(mut self) -> Self {
        self.glide = true;
        self
    }
}

impl InputSource for InputFrame {
    fn horizontal(&self) -> Vec2 {
        self.horizontal
    }

    fn climb_held(&self) -> bool {
        self.climb
    }

    fn jump_pressed(&self) -> bool {
        self.jump_pressed
    }

    fn jump_held(&self) -> bool {
        self.jump_held
    }

    fn glide_held(&self) -> bool {
        self.glide
    }
}
