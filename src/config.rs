//! Command line options.
use std::path::PathBuf;

use clap::Parser;

use crate::core::camera::DEFAULT_ROTATE_SPEED_DEG;

#[derive(Parser, Debug)]
#[command(name = "maze")]
#[command(about = "Maze game: roll the ball to the goal", long_about = None)]
pub struct Cli {
    /// Path to the maze definition file
    #[arg(value_name = "MAZE_FILE")]
    pub maze: PathBuf,

    /// Window width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: i32,

    /// World-space side length of the maze
    #[arg(long, default_value_t = 10.0)]
    pub maze_width: f32,

    /// Camera yaw in degrees per pixel of mouse drag
    #[arg(long, default_value_t = DEFAULT_ROTATE_SPEED_DEG)]
    pub rotate_speed: f32,

    /// Disable sound
    #[arg(long)]
    pub mute: bool,
}

/// Settings consumed by the game loop.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub maze_path: PathBuf,
    pub window_width: i32,
    pub window_height: i32,
    pub maze_width: f32,
    pub rotate_speed_deg: f32,
    pub audio: bool,
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        Self {
            maze_path: cli.maze,
            window_width: cli.width.max(1),
            window_height: cli.height.max(1),
            maze_width: cli.maze_width,
            rotate_speed_deg: cli.rotate_speed,
            audio: !cli.mute,
        }
    }
}
