//! Path queries over a finished grid
//!
//! Both searches visit neighbours in [`Direction::ALL`] order (up, right,
//! down, left), which makes their results reproducible.
//!
//! [`Direction::ALL`]: crate::Direction::ALL

use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

use log::debug;

use crate::grid::{Grid, Point};

/// Walk through open cells, start and goal included
pub type Path = Vec<Point>;

/// Shortest path from `start` to `goal` by breadth-first search
///
/// Returns an empty path if no route exists, or if `start` is not an open
/// cell of the grid. When `start == goal` the path is `[start]`.
pub fn shortest_path(grid: &Grid, start: Point, goal: Point) -> Path {
    if !grid.is_open(start) {
        return vec![];
    }

    // Predecessor of every discovered cell, row-major
    let mut prev: Vec<Option<Point>> = vec![None; grid.width() * grid.height()];
    let index = |p: Point| p.y * grid.width() + p.x;
    let mut discovered = vec![false; grid.width() * grid.height()];
    discovered[index(start)] = true;

    let mut frontier = VecDeque::from([start]);
    while let Some(current) = frontier.pop_front() {
        if current == goal {
            let mut path = vec![goal];
            let mut node = goal;
            while let Some(p) = prev[index(node)] {
                path.push(p);
                node = p;
            }
            path.reverse();
            return path;
        }
        for next in grid.neighbours(current) {
            if !discovered[index(next)] {
                discovered[index(next)] = true;
                prev[index(next)] = Some(current);
                frontier.push_back(next);
            }
        }
    }
    vec![]
}

/// Outcome of an all-paths enumeration
#[derive(PartialEq, Eq, Debug, Default)]
pub struct Enumeration {
    /// Every simple path found, in discovery order
    pub paths: Vec<Path>,
    /// `false` if the search was stopped before exhausting the maze
    pub complete: bool,
}

/// Every simple path from `start` to `goal` by depth-first search
///
/// The running time is exponential in the number of cycles in the maze.
/// A perfect maze has exactly one path, but each extra opening can
/// double the work. Use [`all_paths_until`] with a [`deadline`] on large
/// or densified grids.
pub fn all_paths(grid: &Grid, start: Point, goal: Point) -> Vec<Path> {
    all_paths_until(grid, start, goal, || false).paths
}

/// Depth-first enumeration with cooperative cancellation
///
/// `should_stop` is polled before each cell is expanded; once it returns
/// `true` the search unwinds and the paths found so far are returned with
/// `complete` set to `false`.
pub fn all_paths_until<F>(
    grid: &Grid,
    start: Point,
    goal: Point,
    mut should_stop: F,
) -> Enumeration
where
    F: FnMut() -> bool,
{
    let mut search = Search {
        grid,
        goal,
        on_path: HashSet::new(),
        path: vec![],
        found: vec![],
        stopped: false,
    };
    if grid.is_open(start) {
        search.visit(start, &mut should_stop);
    }
    if search.stopped {
        debug!(
            "All-paths search from {} stopped after {} paths",
            start,
            search.found.len()
        );
    }
    Enumeration {
        paths: search.found,
        complete: !search.stopped,
    }
}

/// Cancellation hook that fires once `timeout` has elapsed
pub fn deadline(timeout: Duration) -> impl FnMut() -> bool {
    let started = Instant::now();
    move || started.elapsed() >= timeout
}

/// Mutable state of one depth-first enumeration
struct Search<'a> {
    grid: &'a Grid,
    goal: Point,
    /// Cells of the path currently being extended
    on_path: HashSet<Point>,
    path: Path,
    found: Vec<Path>,
    stopped: bool,
}

impl Search<'_> {
    fn visit<F: FnMut() -> bool>(&mut self, cell: Point, should_stop: &mut F) {
        if self.stopped || should_stop() {
            self.stopped = true;
            return;
        }

        self.path.push(cell);
        self.on_path.insert(cell);

        if cell == self.goal {
            self.found.push(self.path.clone());
        } else {
            let next: Vec<Point> = self
                .grid
                .neighbours(cell)
                .filter(|p| !self.on_path.contains(p))
                .collect();
            for p in next {
                self.visit(p, should_stop);
            }
        }

        // Clear the marker so the cell can appear on later paths
        self.on_path.remove(&cell);
        self.path.pop();
    }
}
