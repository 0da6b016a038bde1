//! 3D maze scene: floor tiles, blocks, goal and ball.
use raylib::prelude::*;

use crate::render::layout::{FLOOR_HEIGHT, Layout};
use maze_viewer::core::{GridPos, Session};

const FLOOR: Color = Color::new(200, 200, 190, 255);
const FLOOR_EDGE: Color = Color::new(120, 120, 115, 255);
const BLOCK: Color = Color::new(70, 90, 140, 255);
const BLOCK_EDGE: Color = Color::new(30, 40, 70, 255);
const GOAL: Color = Color::new(60, 200, 90, 255);
const BALL: Color = Color::new(220, 60, 50, 255);

// floor tiles are inset so the grid lines show between them
const FLOOR_INSET: f32 = 0.96;

fn draw_floor<D: RaylibDraw3D>(d: &mut D, layout: &Layout, size: usize) {
    let w = layout.cell * FLOOR_INSET;
    let h = layout.cell * FLOOR_HEIGHT;
    for row in 0..size {
        for col in 0..size {
            let p = layout.floor_center(GridPos::new(row, col));
            d.draw_cube(p, w, h, w, FLOOR);
            d.draw_cube_wires(p, layout.cell, h, layout.cell, FLOOR_EDGE);
        }
    }
}

fn draw_blocks<D: RaylibDraw3D>(d: &mut D, layout: &Layout, session: &Session) {
    let c = layout.cell;
    for pos in session.maze().blocks() {
        let p = layout.block_center(pos);
        d.draw_cube(p, c, c, c, BLOCK);
        d.draw_cube_wires(p, c, c, c, BLOCK_EDGE);
    }
}

/// Draw the whole maze for the current session state.
pub fn draw_scene<D: RaylibDraw3D>(d: &mut D, layout: &Layout, session: &Session) {
    draw_floor(d, layout, session.maze().size());
    draw_blocks(d, layout, session);
    let r = layout.sphere_radius();
    d.draw_sphere(layout.sphere_center(session.goal()), r, GOAL);
    d.draw_sphere(layout.sphere_center(session.ball()), r, BALL);
}
