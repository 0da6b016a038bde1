//! Drawing for the maze scene.
//!
//! Re-exports:
//! - `layout`: grid cell to world mapping and orbit camera placement
//! - `scene`: floor, blocks, goal and ball in 3D
//! - `hud`: 2D overlay (FPS, move counter, completion banner)

pub mod hud;
pub mod layout;
pub mod scene;
