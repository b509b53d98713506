//! Random mazes with tunable difficulty, and the searches that solve them
//!
//! Mazes are carved by a randomized depth-first backtracker, which yields
//! a perfect maze: exactly one route between any two cells. Medium and
//! hard mazes then get a few extra openings, creating loops and spurs.
//! The entry is always at `(0, 1)` and the exit at
//! `(width - 1, height - 2)`.
//!
//! # Examples
//! ## Generate and play
//! ```
//! use labyrinthe::{Difficulty, Direction, GameSession, MazeConfig, MazeGenerator, Status};
//!
//! let config = MazeConfig::new(15, 15, Difficulty::Medium).unwrap();
//! let mut session = GameSession::new(config, MazeGenerator::new(Some(7))).unwrap();
//!
//! // Follow the shortest route to the exit
//! let path = session.shortest_path();
//! for pair in path.windows(2) {
//!     let direction = Direction::ALL
//!         .into_iter()
//!         .find(|d| pair[0].step(*d) == Some(pair[1]))
//!         .unwrap();
//!     assert!(session.attempt_move(direction));
//! }
//! assert_eq!(session.status(), Status::Won);
//! assert_eq!(session.moves(), path.len() - 1);
//! ```
//!
//! ## Solve a hand-drawn maze
//! ```
//! use labyrinthe::{all_paths, shortest_path, Grid, Point};
//!
//! let maze_emojis = "
//! 🟫🟫🟫🟫🟫
//! 🟩🟩🟩🟩🟫
//! 🟫🟩🟫🟩🟫
//! 🟫🟩🟩🟩🟩
//! 🟫🟫🟫🟫🟫";
//! let grid = Grid::parse_emojis(maze_emojis.trim()).unwrap();
//!
//! let path = shortest_path(&grid, Point::new(1, 1), grid.exit());
//! assert_eq!(path.len(), 6);
//! assert_eq!(all_paths(&grid, Point::new(1, 1), grid.exit()).len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod maze_generator;
pub mod path_finder;
pub mod session;

pub use config::{Difficulty, MazeConfig};
pub use error::{MazeError, Result};
pub use grid::{Cell, Direction, Grid, Point};
pub use maze_generator::MazeGenerator;
pub use path_finder::{all_paths, all_paths_until, deadline, shortest_path, Enumeration, Path};
pub use session::{GameSession, Status, Viewport};
