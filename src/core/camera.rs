//! Camera yaw tracking, independent of any view matrix.
use std::f32::consts::TAU;

use crate::core::direction::Direction;
use crate::core::input::PointerDrag;

/// Default drag sensitivity in degrees of yaw per pixel.
pub const DEFAULT_ROTATE_SPEED_DEG: f32 = 0.6;

/// Cumulative anticlockwise yaw of the orbit camera.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraOrientationTracker {
    cumulative: f32,
    rad_per_px: f32,
}

impl Default for CameraOrientationTracker {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATE_SPEED_DEG)
    }
}

impl CameraOrientationTracker {
    /// `rotate_speed_deg` is degrees of yaw per pixel of horizontal drag.
    pub fn new(rotate_speed_deg: f32) -> Self {
        Self {
            cumulative: 0.0,
            rad_per_px: rotate_speed_deg.to_radians(),
        }
    }

    /// Add a pixel delta to the yaw if the drag is active.
    pub fn apply_drag(&mut self, raw_delta_x: f32, is_active: bool) {
        if is_active {
            self.cumulative += raw_delta_x * self.rad_per_px;
        }
    }

    /// Once per frame: drain the pointer delta and apply it.
    ///
    /// The delta is consumed even when the button is up so motion from a
    /// finished drag is never applied later.
    pub fn update(&mut self, pointer: &mut PointerDrag) {
        let dx = pointer.take_delta();
        self.apply_drag(dx, pointer.left_pressed);
    }

    /// Unbounded yaw in radians.
    #[cfg(test)]
    pub(crate) fn cumulative_rotation(&self) -> f32 {
        self.cumulative
    }

    /// Yaw reduced into `[0, 2π)`.
    pub fn normalized_rotation(&self) -> f32 {
        normalize_rotation(self.cumulative)
    }

    /// Facing sector of the current yaw.
    pub fn facing(&self) -> Direction {
        Direction::facing(self.normalized_rotation())
    }

    pub fn reset(&mut self) {
        self.cumulative = 0.0;
    }
}

/// Reduce an angle into `[0, 2π)`.
pub fn normalize_rotation(a: f32) -> f32 {
    let mut r = a % TAU;
    if r < 0.0 {
        r += TAU;
    }
    // tiny negative remainders round up to exactly 2π
    if r >= TAU { 0.0 } else { r }
}
