//! Horizontal pointer activity between frames.

/// Accumulates horizontal cursor motion and the left button state.
///
/// Cursor samples may arrive any number of times per frame. The frame then
/// drains the accumulated delta once with [`PointerDrag::take_delta`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerDrag {
    /// Left button currently held.
    pub left_pressed: bool,
    prev_x: Option<f32>,
    delta_x: f32,
}

impl PointerDrag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a new cursor x position.
    ///
    /// The first sample only establishes the reference point, so a cursor
    /// that enters the window far from x = 0 does not produce a jump.
    pub fn update(&mut self, x: f32) {
        if let Some(prev) = self.prev_x {
            self.delta_x += x - prev;
        }
        self.prev_x = Some(x);
    }

    /// Record whether the left button is held this frame.
    pub fn set_button(&mut self, down: bool) {
        self.left_pressed = down;
    }

    /// Delta accumulated since the last drain, without clearing it.
    #[cfg(test)]
    pub(crate) fn pending(&self) -> f32 {
        self.delta_x
    }

    /// Read all accumulated motion and clear it in one step.
    pub fn take_delta(&mut self) -> f32 {
        std::mem::take(&mut self.delta_x)
    }
}
