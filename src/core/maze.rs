//! Maze loading and validation.
//!
//! File format: the first line is the grid size N (N >= 2), followed by N
//! rows of at least N characters. `*` is a block, `X` the goal, anything
//! else open floor.
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

pub const MIN_SIZE: usize = 2;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("File is not readable: {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("maze file is empty")]
    Empty,
    #[error("maze size {0:?} is not an integer")]
    InvalidSize(String),
    #[error("Please enter a maze size >= 2. (got {0})")]
    TooSmall(i64),
    #[error("expected {expected} rows, found {found}")]
    MissingRows { expected: usize, found: usize },
    #[error("row {row} has {len} cells, expected at least {size}")]
    ShortRow { row: usize, len: usize, size: usize },
    #[error("maze has no goal ('X')")]
    MissingGoal,
    #[error("the start cell (0,0) is a block")]
    BlockedOrigin,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Open,
    Block,
    Goal,
}

impl Cell {
    pub fn from_symbol(c: char) -> Self {
        match c {
            '*' => Cell::Block,
            'X' => Cell::Goal,
            _ => Cell::Open,
        }
    }
}

/// A (row, col) cell of the grid. Row 0 is north, col 0 is west.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub const ORIGIN: GridPos = GridPos { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Immutable N x N grid with a single goal cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Maze {
    size: usize,
    cells: Vec<Vec<Cell>>,
    goal: GridPos,
}

impl Maze {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let maze = Self::parse(&text)?;
        debug!("loaded {}x{} maze from {}", maze.size, maze.size, path.display());
        Ok(maze)
    }

    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let mut lines = text.lines().map(|l| l.strip_suffix('\r').unwrap_or(l));

        let header = lines.next().ok_or(MazeError::Empty)?.trim();
        let n: i64 = header
            .parse()
            .map_err(|_| MazeError::InvalidSize(header.to_string()))?;
        if n < MIN_SIZE as i64 {
            return Err(MazeError::TooSmall(n));
        }
        let size = n as usize;

        // rows are pushed as they are read; the header alone must not size
        // an allocation
        let mut cells = Vec::new();
        let mut goal = None;
        for row in 0..size {
            let line = lines.next().ok_or(MazeError::MissingRows {
                expected: size,
                found: row,
            })?;
            let len = line.chars().count();
            if len < size {
                return Err(MazeError::ShortRow { row, len, size });
            }

            let mut cells_row = Vec::with_capacity(size);
            for (col, ch) in line.chars().take(size).enumerate() {
                let cell = match Cell::from_symbol(ch) {
                    Cell::Goal if goal.is_some() => {
                        warn!("extra goal marker at ({row},{col}) treated as open floor");
                        Cell::Open
                    }
                    Cell::Goal => {
                        goal = Some(GridPos::new(row, col));
                        Cell::Goal
                    }
                    other => other,
                };
                cells_row.push(cell);
            }
            cells.push(cells_row);
        }

        let goal = goal.ok_or(MazeError::MissingGoal)?;
        if cells[0][0] == Cell::Block {
            return Err(MazeError::BlockedOrigin);
        }

        Ok(Self { size, cells, goal })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn goal(&self) -> GridPos {
        self.goal
    }

    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Cell at `pos`. Panics if `pos` is outside the grid.
    pub fn cell(&self, pos: GridPos) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub fn is_block(&self, pos: GridPos) -> bool {
        self.cell(pos) == Cell::Block
    }

    /// Positions of every block, row-major.
    pub fn blocks(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells_row)| {
            cells_row
                .iter()
                .enumerate()
                .filter(|(_, c)| **c == Cell::Block)
                .map(move |(col, _)| GridPos::new(row, col))
        })
    }
}
