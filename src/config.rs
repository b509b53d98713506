//! Difficulty tiers and generation parameters

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::{MazeError, Result};

/// Difficulty tier of a maze
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default, ValueEnum)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of extra wall openings added after the spanning tree is
    /// carved.
    pub const fn extra_passages(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Default `(width, height)` for the tier
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (15, 15),
            Difficulty::Medium => (35, 35),
            Difficulty::Hard => (55, 55),
        }
    }

    /// How many cells around the player a zoomed view shows
    pub const fn view_range(self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 3,
            Difficulty::Hard => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        <Difficulty as ValueEnum>::from_str(s, true)
    }
}

/// Validated input for [`MazeGenerator`](crate::MazeGenerator)
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct MazeConfig {
    width: usize,
    height: usize,
    difficulty: Difficulty,
}

impl MazeConfig {
    /// Build configuration for a `width` x `height` maze
    ///
    /// Both dimensions must be odd and at least 3, so that the lattice of
    /// odd-coordinate cells reaches the cell next to the exit.
    pub fn new(width: usize, height: usize, difficulty: Difficulty) -> Result<Self> {
        if width < 3 || height < 3 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        if width % 2 == 0 || height % 2 == 0 {
            return Err(MazeError::EvenDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            difficulty,
        })
    }

    /// Tier defaults, see [`Difficulty::dimensions`]
    pub fn preset(difficulty: Difficulty) -> Self {
        let (width, height) = difficulty.dimensions();
        Self {
            width,
            height,
            difficulty,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
