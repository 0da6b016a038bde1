mod audio_manager;
mod process_events;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use raylib::prelude::*;

use audio_manager::AudioManager;
use maze_viewer::config::{Cli, GameConfig};
use maze_viewer::core::{CameraOrientationTracker, Maze, MoveOutcome, PointerDrag, Session};
use process_events::{FrameEvent, process_events};
use render::hud::{Banner, draw_hud};
use render::layout::Layout;
use render::scene::draw_scene;

const BACKGROUND: Color = Color::new(128, 128, 128, 255);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::from(Cli::parse());

    // Load before opening the window so a bad file never shows one.
    let maze = Maze::load(&config.maze_path)
        .with_context(|| format!("loading maze {}", config.maze_path.display()))?;
    info!(
        "maze {}: {}x{}, goal at {:?}",
        config.maze_path.display(),
        maze.size(),
        maze.size(),
        maze.goal()
    );

    run(config, maze);
    Ok(())
}

fn run(config: GameConfig, maze: Maze) {
    let (mut window, thread) = raylib::init()
        .size(config.window_width, config.window_height)
        .title("Maze")
        .resizable()
        .msaa_4x()
        .build();
    window.set_target_fps(60);
    window.set_exit_key(Some(KeyboardKey::KEY_ESCAPE));

    let audio = if config.audio { AudioManager::new() } else { None };

    let layout = Layout::new(config.maze_width, maze.size());
    let mut session = Session::new(maze);
    let mut camera = CameraOrientationTracker::new(config.rotate_speed_deg);
    let mut pointer = PointerDrag::new();
    let mut banner = Banner::default();

    while !window.window_should_close() {
        let events = process_events(&mut window, &mut pointer, &mut camera, &mut session);
        for ev in events {
            match ev {
                FrameEvent::Move(MoveOutcome::Ignored) => {}
                FrameEvent::Move(outcome) => {
                    if let Some(a) = &audio {
                        if outcome.changed() {
                            a.play_roll();
                        } else {
                            a.play_bump();
                        }
                    }
                    if let MoveOutcome::GoalReached { moves } = outcome {
                        banner.show_completion(moves);
                        if let Some(a) = &audio {
                            a.play_goal();
                        }
                    }
                }
                FrameEvent::Restart => banner = Banner::default(),
            }
        }
        banner.tick(window.get_frame_time());

        let screen_w = window.get_screen_width();
        let cam3d = layout.camera(camera.normalized_rotation());

        let mut d = window.begin_drawing(&thread);
        d.clear_background(BACKGROUND);
        {
            let mut d3 = d.begin_mode3D(cam3d);
            draw_scene(&mut d3, &layout, &session);
        }
        draw_hud(&mut d, screen_w, session.moves(), &banner);
    }
}
