//! Grid-to-world mapping and the orbit camera.
//!
//! The maze is a square of side `maze_width` centred on the origin in the
//! XZ plane. Columns run along +x and rows along +z, so the north edge
//! (row 0) is the far side for the starting camera.
use raylib::prelude::*;

use maze_viewer::core::GridPos;

/// Camera distance and height, as multiples of the maze width.
const EYE_DISTANCE: f32 = 1.05;
const EYE_HEIGHT: f32 = 1.05;
pub const FOV_Y_DEG: f32 = 60.0;

/// Relative sizes of the pieces, in cell widths.
pub const SPHERE_RADIUS: f32 = 0.43;
pub const SPHERE_LIFT: f32 = 0.6;
pub const FLOOR_HEIGHT: f32 = 0.5;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    pub maze_width: f32,
    pub cell: f32,
    origin: Vector3,
}

impl Layout {
    pub fn new(maze_width: f32, grid_size: usize) -> Self {
        let cell = maze_width / grid_size.max(1) as f32;
        let half = maze_width * 0.5;
        Self {
            maze_width,
            cell,
            origin: Vector3::new(-half + cell * 0.5, 0.0, -half + cell * 0.5),
        }
    }

    /// Centre of a cell at floor level.
    pub fn cell_center(&self, pos: GridPos) -> Vector3 {
        Vector3::new(
            self.origin.x + pos.col as f32 * self.cell,
            0.0,
            self.origin.z + pos.row as f32 * self.cell,
        )
    }

    pub fn floor_center(&self, pos: GridPos) -> Vector3 {
        let c = self.cell_center(pos);
        Vector3::new(c.x, -FLOOR_HEIGHT * 0.5 * self.cell, c.z)
    }

    pub fn block_center(&self, pos: GridPos) -> Vector3 {
        let c = self.cell_center(pos);
        Vector3::new(c.x, self.cell * 0.5, c.z)
    }

    pub fn sphere_center(&self, pos: GridPos) -> Vector3 {
        let c = self.cell_center(pos);
        Vector3::new(c.x, SPHERE_LIFT * self.cell, c.z)
    }

    pub fn sphere_radius(&self) -> f32 {
        SPHERE_RADIUS * self.cell
    }

    /// Eye position for a camera yaw (anticlockwise, radians).
    ///
    /// At yaw 0 the eye sits south of the maze looking north; as the yaw
    /// grows it orbits so that at π/2 it looks east, which is what the key
    /// remapping expects.
    pub fn eye(&self, rotation: f32) -> Vector3 {
        let d = EYE_DISTANCE * self.maze_width;
        let h = EYE_HEIGHT * self.maze_width;
        let (s, c) = rotation.sin_cos();
        Vector3::new(-d * s, h, d * c)
    }

    pub fn camera(&self, rotation: f32) -> Camera3D {
        Camera3D::perspective(
            self.eye(rotation),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            FOV_Y_DEG,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn corners_are_symmetric() {
        let l = Layout::new(10.0, 4);
        assert!(close(l.cell, 2.5));
        let nw = l.cell_center(GridPos::new(0, 0));
        let se = l.cell_center(GridPos::new(3, 3));
        assert!(close(nw.x, -3.75) && close(nw.z, -3.75));
        assert!(close(se.x, 3.75) && close(se.z, 3.75));
    }

    #[test]
    fn columns_run_east_rows_run_south() {
        let l = Layout::new(9.0, 3);
        let a = l.cell_center(GridPos::new(1, 1));
        let east = l.cell_center(GridPos::new(1, 2));
        let south = l.cell_center(GridPos::new(2, 1));
        assert!(east.x > a.x && close(east.z, a.z));
        assert!(south.z > a.z && close(south.x, a.x));
    }

    #[test]
    fn eye_orbits_with_yaw() {
        let l = Layout::new(10.0, 5);
        let e0 = l.eye(0.0);
        assert!(close(e0.x, 0.0) && close(e0.z, 10.5) && close(e0.y, 10.5));
        // looking east means standing west of the maze
        let e1 = l.eye(PI / 2.0);
        assert!(close(e1.x, -10.5) && close(e1.z, 0.0));
        let e2 = l.eye(PI);
        assert!(close(e2.z, -10.5));
    }

    #[test]
    fn pieces_sit_on_the_floor() {
        let l = Layout::new(10.0, 2);
        let p = GridPos::new(0, 1);
        assert!(close(l.floor_center(p).y, -1.25));
        assert!(close(l.block_center(p).y, 2.5));
        assert!(close(l.sphere_center(p).y, 3.0));
        assert!(close(l.sphere_radius(), 2.15));
    }
}
