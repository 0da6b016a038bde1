//! Ball position, move counter and slide-until-wall movement.
use log::{debug, info};
use raylib::prelude::KeyboardKey;

use crate::core::direction::Direction;
use crate::core::maze::{GridPos, Maze};

/// Result of one movement request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The key is not a movement key.
    Ignored,
    /// Already against a block or the edge in that direction.
    Blocked,
    Moved { to: GridPos, moves: u32 },
    /// The ball landed on the goal after `moves` moves. The session has
    /// already been reset.
    GoalReached { moves: u32 },
}

impl MoveOutcome {
    /// True when position or counter changed and the scene needs a redraw.
    pub fn changed(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. } | MoveOutcome::GoalReached { .. })
    }
}

pub fn completion_message(moves: u32) -> String {
    format!("Maze completed in {moves} moves. Well done!")
}

/// One game on one maze.
#[derive(Clone, Debug)]
pub struct Session {
    maze: Maze,
    ball: GridPos,
    moves: u32,
}

impl Session {
    pub fn new(maze: Maze) -> Self {
        Self {
            maze,
            ball: GridPos::ORIGIN,
            moves: 0,
        }
    }

    /// Put the ball back on (0,0) and clear the counter.
    pub fn reset(&mut self) {
        self.ball = GridPos::ORIGIN;
        self.moves = 0;
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn ball(&self) -> GridPos {
        self.ball
    }

    pub fn goal(&self) -> GridPos {
        self.maze.goal()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Put the ball on `pos` without counting a move. Refuses cells outside
    /// the grid and blocks.
    pub fn place_ball(&mut self, pos: GridPos) -> bool {
        if !self.maze.contains(pos.row as isize, pos.col as isize) || self.maze.is_block(pos) {
            return false;
        }
        self.ball = pos;
        true
    }

    /// Furthest cell reachable from `from` going `dir` before a block or the
    /// edge of the grid.
    pub fn slide(&self, from: GridPos, dir: Direction) -> GridPos {
        let (dr, dc) = dir.delta();
        let mut cur = from;
        loop {
            let (r, c) = (cur.row as isize + dr, cur.col as isize + dc);
            if !self.maze.contains(r, c) {
                break;
            }
            let next = GridPos::new(r as usize, c as usize);
            if self.maze.is_block(next) {
                break;
            }
            cur = next;
        }
        cur
    }

    /// Move the ball for an on-screen `key` intent with the camera at
    /// `camera_rotation` radians. The yaw need not be normalized.
    pub fn move_ball(&mut self, key: Direction, camera_rotation: f32) -> MoveOutcome {
        let dir = key.for_camera(camera_rotation);
        let target = self.slide(self.ball, dir);

        debug_assert!(self.maze.contains(target.row as isize, target.col as isize));
        debug_assert!(!self.maze.is_block(target));

        if target == self.ball {
            debug!("{:?} (key {:?}) blocked at {:?}", dir, key, self.ball);
            return MoveOutcome::Blocked;
        }

        self.ball = target;
        self.moves += 1;
        debug!("ball slid {:?} to {:?}, move {}", dir, target, self.moves);

        if target == self.maze.goal() {
            let moves = self.moves;
            info!("{}", completion_message(moves));
            self.reset();
            return MoveOutcome::GoalReached { moves };
        }

        MoveOutcome::Moved {
            to: target,
            moves: self.moves,
        }
    }

    /// Like [`Session::move_ball`] for a raw key code. Non-arrow keys are
    /// ignored.
    pub fn handle_key(&mut self, key: KeyboardKey, camera_rotation: f32) -> MoveOutcome {
        match Direction::from_key(key) {
            Some(dir) => self.move_ball(dir, camera_rotation),
            None => MoveOutcome::Ignored,
        }
    }
}
