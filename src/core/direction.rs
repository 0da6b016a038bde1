//! Compass directions on the grid and the camera-relative key remapping.
use std::f32::consts::PI;

use raylib::prelude::KeyboardKey;

use crate::core::camera::normalize_rotation;

// Facing sector edges, in radians of yaw.
const ROTATION_NORTH_WEST: f32 = PI / 4.0;
const ROTATION_SOUTH_WEST: f32 = 3.0 * PI / 4.0;
const ROTATION_SOUTH_EAST: f32 = 5.0 * PI / 4.0;
const ROTATION_NORTH_EAST: f32 = 7.0 * PI / 4.0;

/// One of the four grid directions, in clockwise order.
///
/// Row 0 is the northern edge of the grid and column 0 the western edge, so
/// the ball starts in the north-west corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    #[inline]
    fn index(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    #[inline]
    fn from_index(i: u8) -> Self {
        Self::ALL[(i % 4) as usize]
    }

    /// Steps clockwise through N -> E -> S -> W, wrapping around.
    pub fn rotated(self, quarter_turns: u8) -> Self {
        Self::from_index(self.index() + quarter_turns % 4)
    }

    /// (row, col) step for one cell of movement.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Facing sector for a yaw in radians. Any yaw is accepted and folded
    /// into `[0, 2π)` first, so -π/2 is the same sector as 3π/2.
    ///
    /// The sector names are the ones [`Direction::remap`] is keyed on. The
    /// orbit camera is placed so that the remapped "up" always rolls the
    /// ball away from the viewer, e.g. the `West` sector looks east.
    ///
    /// Intervals are half-open on their upper edge: exactly π/4 is west,
    /// 3π/4 south, 5π/4 east and 7π/4 north. Anything outside the three
    /// explicit sectors (including NaN) is north.
    pub fn facing(rotation: f32) -> Self {
        let rotation = normalize_rotation(rotation);
        if (ROTATION_NORTH_WEST..ROTATION_SOUTH_WEST).contains(&rotation) {
            Direction::West
        } else if (ROTATION_SOUTH_WEST..ROTATION_SOUTH_EAST).contains(&rotation) {
            Direction::South
        } else if (ROTATION_SOUTH_EAST..ROTATION_NORTH_EAST).contains(&rotation) {
            Direction::East
        } else {
            Direction::North
        }
    }

    /// Quarter turns to add to a key intent when the camera faces `self`.
    fn facing_offset(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::West => 1,
            Direction::South => 2,
            Direction::East => 3,
        }
    }

    /// Grid direction for a key pressed relative to a camera facing `facing`.
    ///
    /// With the camera turned around (facing south) pressing up moves the
    /// ball south, i.e. away from the viewer.
    pub fn remap(self, facing: Direction) -> Self {
        self.rotated(facing.facing_offset())
    }

    /// Shorthand for `key.remap(Direction::facing(rotation))`.
    pub fn for_camera(self, rotation: f32) -> Self {
        self.remap(Direction::facing(rotation))
    }

    /// Arrow keys as on-screen intents. Everything else is not a move.
    pub fn from_key(key: KeyboardKey) -> Option<Self> {
        match key {
            KeyboardKey::KEY_UP => Some(Direction::North),
            KeyboardKey::KEY_RIGHT => Some(Direction::East),
            KeyboardKey::KEY_DOWN => Some(Direction::South),
            KeyboardKey::KEY_LEFT => Some(Direction::West),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::f32::consts::TAU;

    #[test]
    fn rotation_wraps() {
        assert_eq!(Direction::North.rotated(1), Direction::East);
        assert_eq!(Direction::West.rotated(1), Direction::North);
        assert_eq!(Direction::South.rotated(2), Direction::North);
        assert_eq!(Direction::East.rotated(7), Direction::North);
    }

    #[test]
    fn facing_sectors() {
        assert_eq!(Direction::facing(0.0), Direction::North);
        assert_eq!(Direction::facing(0.5), Direction::North);
        assert_eq!(Direction::facing(PI / 2.0), Direction::West);
        assert_eq!(Direction::facing(PI), Direction::South);
        assert_eq!(Direction::facing(3.0 * PI / 2.0), Direction::East);
        assert_eq!(Direction::facing(TAU - 0.01), Direction::North);
    }

    #[test]
    fn facing_boundaries_are_half_open() {
        assert_eq!(Direction::facing(ROTATION_NORTH_WEST), Direction::West);
        assert_eq!(Direction::facing(ROTATION_SOUTH_WEST), Direction::South);
        assert_eq!(Direction::facing(ROTATION_SOUTH_EAST), Direction::East);
        assert_eq!(Direction::facing(ROTATION_NORTH_EAST), Direction::North);
        assert_eq!(Direction::facing(TAU), Direction::North);
        assert_eq!(Direction::facing(f32::NAN), Direction::North);
    }

    #[test]
    fn facing_folds_unnormalized_yaw() {
        assert_eq!(Direction::facing(-PI / 2.0), Direction::East);
        assert_eq!(Direction::facing(-PI), Direction::South);
        assert_eq!(Direction::facing(TAU + PI), Direction::South);
        assert_eq!(Direction::facing(-TAU + PI / 2.0), Direction::West);
        assert_eq!(Direction::North.for_camera(-PI / 2.0), Direction::West);
    }

    #[test]
    fn remap_table() {
        assert_eq!(Direction::North.remap(Direction::North), Direction::North);
        assert_eq!(Direction::North.remap(Direction::West), Direction::East);
        assert_eq!(Direction::North.remap(Direction::South), Direction::South);
        assert_eq!(Direction::North.remap(Direction::East), Direction::West);
        assert_eq!(Direction::East.remap(Direction::South), Direction::West);
        assert_eq!(Direction::West.remap(Direction::East), Direction::South);
    }

    #[test]
    fn remap_is_a_permutation_for_every_facing() {
        for facing in Direction::ALL {
            let out: HashSet<_> = Direction::ALL.iter().map(|d| d.remap(facing)).collect();
            assert_eq!(out.len(), 4, "facing {:?} collapses directions", facing);
        }
    }

    #[test]
    fn arrow_keys_only() {
        assert_eq!(Direction::from_key(KeyboardKey::KEY_UP), Some(Direction::North));
        assert_eq!(Direction::from_key(KeyboardKey::KEY_RIGHT), Some(Direction::East));
        assert_eq!(Direction::from_key(KeyboardKey::KEY_DOWN), Some(Direction::South));
        assert_eq!(Direction::from_key(KeyboardKey::KEY_LEFT), Some(Direction::West));
        assert_eq!(Direction::from_key(KeyboardKey::KEY_W), None);
        assert_eq!(Direction::from_key(KeyboardKey::KEY_SPACE), None);
    }

    #[test]
    fn deltas_are_unit_steps() {
        for d in Direction::ALL {
            let (dr, dc) = d.delta();
            assert_eq!(dr.abs() + dc.abs(), 1);
            let (or, oc) = d.rotated(2).delta();
            assert_eq!((dr, dc), (-or, -oc));
        }
    }
}
