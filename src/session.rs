//! Game session: player position, move validation and win detection

use std::collections::HashSet;
use std::ops::Range;

use log::info;

use crate::config::MazeConfig;
use crate::error::Result;
use crate::grid::{Direction, Grid, Point};
use crate::maze_generator::MazeGenerator;
use crate::path_finder::{self, Enumeration, Path};

/// Game status
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Status {
    /// Player is still looking for the exit
    Playing,
    /// Player reached the exit; terminal until reset
    Won,
}

/// Cells shown by a zoomed view, half-open ranges
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Viewport {
    pub columns: Range<usize>,
    pub rows: Range<usize>,
}

/// One playthrough of a generated maze
pub struct GameSession {
    generator: MazeGenerator,
    config: MazeConfig,
    grid: Grid,

    /// Current player position, always an open cell
    player: Point,
    /// Accepted moves since the last reset
    moves: usize,
    /// Every cell the player has stood on
    visited: HashSet<Point>,
    status: Status,
}

impl GameSession {
    /// Player position at the start of every session
    pub const START: Point = Point::new(1, 1);

    /// Start a session on a freshly generated maze
    pub fn new(config: MazeConfig, mut generator: MazeGenerator) -> Result<Self> {
        let grid = generator.generate(&config)?;
        Ok(Self {
            generator,
            config,
            grid,
            player: Self::START,
            moves: 0,
            visited: HashSet::from([Self::START]),
            status: Status::Playing,
        })
    }

    /// Regenerate the maze with the current configuration and start over
    pub fn reset(&mut self) -> Result<()> {
        self.grid = self.generator.generate(&self.config)?;
        self.player = Self::START;
        self.moves = 0;
        self.visited.clear();
        self.visited.insert(Self::START);
        self.status = Status::Playing;
        info!(
            "New {}x{} {} maze",
            self.config.width(),
            self.config.height(),
            self.config.difficulty()
        );
        Ok(())
    }

    /// Switch to a new configuration; this also resets the session.
    pub fn change_difficulty(&mut self, config: MazeConfig) -> Result<()> {
        self.config = config;
        self.reset()
    }

    /// Try to move the player one cell into `direction`
    ///
    /// Moves into walls, off the grid or after winning are ignored.
    /// Returns whether the move was accepted.
    pub fn attempt_move(&mut self, direction: Direction) -> bool {
        if self.status == Status::Won {
            return false;
        }
        let Some(target) = self.player.step(direction) else {
            return false;
        };
        if !self.grid.is_open(target) {
            return false;
        }

        self.player = target;
        self.moves += 1;
        self.visited.insert(target);
        if target == self.grid.exit() {
            self.status = Status::Won;
            info!("Exit reached in {} moves", self.moves);
        }
        true
    }

    /// Shortest path from the player to the exit
    pub fn shortest_path(&self) -> Path {
        path_finder::shortest_path(&self.grid, self.player, self.grid.exit())
    }

    /// All simple paths from the player to the exit
    ///
    /// See [`path_finder::all_paths_until`] for the cost of this query.
    pub fn all_paths<F: FnMut() -> bool>(&self, should_stop: F) -> Enumeration {
        path_finder::all_paths_until(&self.grid, self.player, self.grid.exit(), should_stop)
    }

    /// Cells around the player that a zoomed view displays
    pub fn viewport(&self) -> Viewport {
        let range = self.config.difficulty().view_range();
        Viewport {
            columns: self.player.x.saturating_sub(range)
                ..(self.player.x + range + 1).min(self.grid.width()),
            rows: self.player.y.saturating_sub(range)
                ..(self.player.y + range + 1).min(self.grid.height()),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn player(&self) -> Point {
        self.player
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn visited(&self) -> &HashSet<Point> {
        &self.visited
    }

    pub fn status(&self) -> Status {
        self.status
    }
}
