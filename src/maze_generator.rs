//! Maze generation

use log::{debug, warn};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::config::{Difficulty, MazeConfig};
use crate::error::Result;
use crate::grid::{Cell, Direction, Grid, Point};

/// Random maze generator
///
/// Carves a perfect maze with a depth-first backtracker over the lattice
/// of odd-coordinate cells, then opens a few extra walls depending on the
/// difficulty.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Random placements tried while looking for extra openings
    const DENSIFY_TRIALS: usize = 100;
    /// Chance on the hardest tier to open a second wall next to an opening
    const BRANCH_PROBABILITY: f64 = 0.25;

    /// Create generator; with `seed` the generated mazes are reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a maze for `config`
    ///
    /// The entry and exit cells are opened last, after carving and
    /// densification.
    pub fn generate(&mut self, config: &MazeConfig) -> Result<Grid> {
        let mut grid = self.carve_passages(config.width(), config.height())?;
        self.densify(&mut grid, config.difficulty())?;
        open_entrances(&mut grid)?;

        if !grid.is_connected(grid.entry(), grid.exit()) {
            warn!(
                "Exit {} is not reachable from entry {} in generated {}x{} maze",
                grid.exit(),
                grid.entry(),
                grid.width(),
                grid.height()
            );
        }
        Ok(grid)
    }

    /// Carve a spanning tree over the lattice, starting from (1, 1)
    ///
    /// Lattice cells sit two steps apart; moving to an unvisited one opens
    /// the wall cell in between. The result has no cycles.
    pub(crate) fn carve_passages(&mut self, width: usize, height: usize) -> Result<Grid> {
        let mut grid = Grid::new(width, height)?;
        let start = Point::new(1, 1);
        grid.set(start, Cell::Open)?;

        let mut stack = vec![start];
        let mut carved = 1;
        while let Some(&current) = stack.last() {
            let candidates: Vec<(Point, Point)> = Direction::ALL
                .into_iter()
                .filter_map(|d| {
                    let wall = current.step(d)?;
                    let next = wall.step(d)?;
                    Some((wall, next))
                })
                .filter(|(_, next)| grid.is_interior(*next) && !grid.is_open(*next))
                .collect();

            if let Some(&(wall, next)) = candidates.choose(&mut self.random) {
                grid.set(wall, Cell::Open)?;
                grid.set(next, Cell::Open)?;
                stack.push(next);
                carved += 1;
            } else {
                stack.pop();
            }
        }
        debug!("Carved {} lattice cells in {}x{} maze", carved, width, height);
        Ok(grid)
    }

    /// Open interior walls next to existing passages
    ///
    /// Each opening adds a cycle or a short dead end. Cells are only ever
    /// opened, never closed. Returns the number of openings made.
    pub(crate) fn densify(&mut self, grid: &mut Grid, difficulty: Difficulty) -> Result<usize> {
        let target = difficulty.extra_passages();
        let mut added = 0;
        let mut trials = 0;

        while added < target && trials < Self::DENSIFY_TRIALS {
            trials += 1;
            let candidate = Point::new(
                self.random.gen_range(1..grid.width() - 1),
                self.random.gen_range(1..grid.height() - 1),
            );
            if grid.is_open(candidate) || grid.neighbours(candidate).next().is_none() {
                continue;
            }
            grid.set(candidate, Cell::Open)?;
            added += 1;

            if difficulty == Difficulty::Hard && self.random.gen_bool(Self::BRANCH_PROBABILITY) {
                let walls: Vec<Point> = Direction::ALL
                    .into_iter()
                    .filter_map(|d| candidate.step(d))
                    .filter(|p| grid.is_interior(*p) && !grid.is_open(*p))
                    .collect();
                if let Some(&branch) = walls.choose(&mut self.random) {
                    grid.set(branch, Cell::Open)?;
                }
            }
        }
        debug!(
            "Opened {}/{} extra passages in {} trials ({})",
            added, target, trials, difficulty
        );
        Ok(added)
    }
}

/// Force the entry and exit cells open
fn open_entrances(grid: &mut Grid) -> Result<()> {
    grid.set(grid.entry(), Cell::Open)?;
    grid.set(grid.exit(), Cell::Open)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::path_finder::{all_paths, shortest_path};

    /// Number of open-cell adjacencies, each counted once
    fn edge_count(grid: &Grid) -> usize {
        grid.open_cells()
            .map(|p| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter_map(|d| p.step(d))
                    .filter(|n| grid.is_open(*n))
                    .count()
            })
            .sum()
    }

    fn lattice(width: usize, height: usize) -> Vec<Point> {
        (1..height - 1)
            .step_by(2)
            .flat_map(|y| (1..width - 1).step_by(2).map(move |x| Point::new(x, y)))
            .collect()
    }

    #[test]
    fn spanning_tree_is_perfect() {
        let mut gen = MazeGenerator::new(Some(0));
        let grid = gen.carve_passages(9, 7).unwrap();
        let cells = lattice(9, 7);
        assert_eq!(cells.len(), 12);

        // Every lattice cell plus one broken wall per tree edge
        assert!(cells.iter().all(|p| grid.is_open(*p)));
        assert_eq!(grid.open_cells().count(), 2 * cells.len() - 1);
        assert_eq!(edge_count(&grid), grid.open_cells().count() - 1);

        for target in &cells {
            assert_eq!(all_paths(&grid, Point::new(1, 1), *target).len(), 1);
        }
    }

    #[test]
    fn easy_maze_has_single_route() {
        let mut gen = MazeGenerator::new(Some(3));
        let config = MazeConfig::new(11, 9, Difficulty::Easy).unwrap();
        let grid = gen.generate(&config).unwrap();

        // Spanning tree plus the two forced border cells
        assert_eq!(grid.open_cells().count(), 2 * lattice(11, 9).len() + 1);
        assert_eq!(all_paths(&grid, grid.entry(), grid.exit()).len(), 1);
    }

    #[test]
    fn smallest_maze() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut gen = MazeGenerator::new(Some(1));
            let grid = gen
                .generate(&MazeConfig::new(3, 3, difficulty).unwrap())
                .unwrap();
            assert_eq!(grid.to_string(), "🟫🟫🟫\n🟩🟩🟩\n🟫🟫🟫");
        }
    }

    #[test]
    fn densify_reaches_target() {
        let mut gen = MazeGenerator::new(Some(11));
        let mut grid = gen.carve_passages(35, 35).unwrap();
        let before = grid.open_cells().count();

        let added = gen.densify(&mut grid, Difficulty::Medium).unwrap();
        assert_eq!(added, 2);
        assert_eq!(grid.open_cells().count(), before + 2);

        // Nothing to open inside a 3x3 grid
        let mut tiny = gen.carve_passages(3, 3).unwrap();
        assert_eq!(gen.densify(&mut tiny, Difficulty::Hard).unwrap(), 0);
    }

    #[test]
    fn even_width_leaves_exit_sealed() {
        // The lattice stops at x = 3, so (4, 3) next to the exit is never
        // carved and the forced exit is cut off. MazeConfig rejects such
        // dimensions for that reason.
        let mut gen = MazeGenerator::new(Some(5));
        let mut grid = gen.carve_passages(6, 5).unwrap();
        open_entrances(&mut grid).unwrap();

        assert!(!grid.is_open(Point::new(4, 3)));
        assert!(grid.is_open(grid.exit()));
        assert!(!grid.is_connected(grid.entry(), grid.exit()));
    }

    fn odd_dimension() -> impl Strategy<Value = usize> {
        (1usize..16).prop_map(|n| 2 * n + 1)
    }

    fn any_difficulty() -> impl Strategy<Value = Difficulty> {
        prop_oneof![
            Just(Difficulty::Easy),
            Just(Difficulty::Medium),
            Just(Difficulty::Hard)
        ]
    }

    proptest! {
        #[test]
        fn generated_maze_is_solvable(
            seed in any::<u64>(),
            width in odd_dimension(),
            height in odd_dimension(),
            difficulty in any_difficulty(),
        ) {
            let config = MazeConfig::new(width, height, difficulty).unwrap();
            let grid = MazeGenerator::new(Some(seed)).generate(&config).unwrap();

            let (entry, exit) = (grid.entry(), grid.exit());
            prop_assert!(grid.is_open(entry));
            prop_assert!(grid.is_open(exit));
            let path = shortest_path(&grid, entry, exit);
            prop_assert!(!path.is_empty());
            prop_assert_eq!(path.first(), Some(&entry));
            prop_assert_eq!(path.last(), Some(&exit));
        }

        #[test]
        fn densify_only_opens_cells(
            seed in any::<u64>(),
            width in odd_dimension(),
            height in odd_dimension(),
        ) {
            let mut gen = MazeGenerator::new(Some(seed));
            let tree = gen.carve_passages(width, height).unwrap();
            let mut dense = tree.clone();
            gen.densify(&mut dense, Difficulty::Hard).unwrap();

            prop_assert!(tree.open_cells().all(|p| dense.is_open(p)));
            open_entrances(&mut dense).unwrap();
            prop_assert!(dense.is_connected(dense.exit(), dense.entry()));
        }

        #[test]
        fn same_seed_same_maze(seed in any::<u64>(), difficulty in any_difficulty()) {
            let config = MazeConfig::new(15, 11, difficulty).unwrap();
            let first = MazeGenerator::new(Some(seed)).generate(&config).unwrap();
            let second = MazeGenerator::new(Some(seed)).generate(&config).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
