//! Ball-in-a-maze game: slide a ball across a grid of cubes with the arrow
//! keys while orbiting the camera with the mouse.
//!
//! The library holds everything that is not window or GPU glue:
//! - `core`: grid, directions, camera yaw tracking, move resolution
//! - `config`: command line options

pub mod config;
pub mod core;

pub use crate::core::{
    CameraOrientationTracker, Cell, Direction, GridPos, Maze, MazeError, MoveOutcome, PointerDrag,
    Session,
};
