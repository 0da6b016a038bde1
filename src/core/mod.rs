//! Core game types and logic (grid, input, camera yaw, movement).
//!
//! Re-exports:
//! - `direction`: compass directions, camera facing and key remapping
//! - `input`: pointer drag accumulator
//! - `camera`: cumulative yaw from mouse drags
//! - `maze`: maze loading and validation
//! - `session`: ball position, move counter and sliding movement

pub mod camera;
pub mod direction;
pub mod input;
pub mod maze;
pub mod session;

pub use camera::CameraOrientationTracker;
pub use direction::Direction;
pub use input::PointerDrag;
pub use maze::{Cell, GridPos, Maze, MazeError};
pub use session::{MoveOutcome, Session};
