//! Cell grid, coordinates and directions

use std::fmt;

use itertools::Itertools;

use crate::error::{MazeError, Result};
use crate::path_finder;

/// State of a single grid square
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Cell {
    #[default]
    Wall,
    Open,
}

impl Cell {
    const S_WALL: char = '🟫';
    const S_OPEN: char = '🟩';

    /// Emoji used for this cell in the text format
    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => Self::S_WALL,
            Cell::Open => Self::S_OPEN,
        }
    }

    fn from_symbol(symbol: char, x: usize, y: usize) -> Result<Self> {
        match symbol {
            Self::S_WALL => Ok(Cell::Wall),
            Self::S_OPEN => Ok(Cell::Open),
            symbol => Err(MazeError::UnexpectedSymbol { symbol, x, y }),
        }
    }
}

/// Location in the maze, `x` is the column and `y` the row
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Unit step into `direction`, `None` when it would leave the
    /// non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Point> {
        let (dx, dy) = direction.delta();
        Some(Point {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four movement directions
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Search order shared by every traversal in the crate
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Column and row delta of a single step
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Parse a move script such as `"RRDD"`
    ///
    /// Whitespace and commas are ignored, letters are case-insensitive.
    pub fn parse_moves(moves: &str) -> Result<Vec<Direction>> {
        moves
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(Direction::try_from)
            .collect()
    }
}

impl TryFrom<char> for Direction {
    type Error = MazeError;

    fn try_from(value: char) -> Result<Self> {
        match value.to_ascii_uppercase() {
            'U' => Ok(Direction::Up),
            'R' => Ok(Direction::Right),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            _ => Err(MazeError::UnknownDirection(value)),
        }
    }
}

/// Rectangular matrix of walls and open squares
///
/// The grid has two fixed special cells: the entry at `(0, 1)` on the
/// left border and the exit at `(width - 1, height - 2)` on the right
/// border.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cell states
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid filled with walls
    ///
    /// Returns error if either dimension is below 3.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width < 3 || height < 3 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Wall; width * height],
        })
    }

    /// Parse grid from its emoji representation
    ///
    /// - `emojis`: One line per row, `🟫` for walls and `🟩` for open
    ///   squares.
    ///
    /// Returns error on unknown characters, rows of unequal length or
    /// dimensions below 3.
    ///
    /// # Examples
    /// ```
    /// use labyrinthe::{Cell, Grid, Point};
    ///
    /// let grid = Grid::parse_emojis("
    /// 🟫🟫🟫
    /// 🟩🟩🟩
    /// 🟫🟫🟫".trim()).unwrap();
    /// assert_eq!(grid.get(Point::new(1, 1)), Ok(Cell::Open));
    /// ```
    pub fn parse_emojis(emojis: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = emojis
            .lines()
            .map(|row| row.trim_end().chars().collect())
            .filter(|row: &Vec<char>| !row.is_empty())
            .collect();
        let width = rows.first().ok_or(MazeError::Empty)?.len();

        let mut grid = Grid::new(width, rows.len())?;
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::RaggedRows {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }
            for (x, symbol) in row.iter().enumerate() {
                grid.set(Point { x, y }, Cell::from_symbol(*symbol, x, y)?)?;
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Fixed start cell on the left border
    pub fn entry(&self) -> Point {
        Point { x: 0, y: 1 }
    }

    /// Fixed goal cell on the right border
    pub fn exit(&self) -> Point {
        Point {
            x: self.width - 1,
            y: self.height - 2,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Whether `point` lies strictly inside the outer border
    pub fn is_interior(&self, point: Point) -> bool {
        point.x > 0 && point.y > 0 && point.x < self.width - 1 && point.y < self.height - 1
    }

    fn index(&self, point: Point) -> Result<usize> {
        if self.contains(point) {
            Ok(point.y * self.width + point.x)
        } else {
            Err(MazeError::OutOfBounds {
                x: point.x,
                y: point.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Cell state at `point`, error if out of bounds
    pub fn get(&self, point: Point) -> Result<Cell> {
        let idx = self.index(point)?;
        Ok(self.cells[idx])
    }

    /// Overwrite cell state at `point`, error if out of bounds
    pub fn set(&mut self, point: Point, cell: Cell) -> Result<()> {
        let idx = self.index(point)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Whether `point` is inside the grid and open
    pub fn is_open(&self, point: Point) -> bool {
        self.get(point) == Ok(Cell::Open)
    }

    /// Open 4-neighbours of `point`, in [`Direction::ALL`] order
    pub fn neighbours(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| point.step(d))
            .filter(move |p| self.is_open(*p))
    }

    /// All open cells, row by row
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Open)
            .map(move |(idx, _)| Point {
                x: idx % self.width,
                y: idx / self.width,
            })
    }

    /// Whether an open walk exists between `a` and `b`
    pub fn is_connected(&self, a: Point, b: Point) -> bool {
        !path_finder::shortest_path(self, a, b).is_empty()
    }

    /// Emoji picture of the grid with marker layers drawn on top
    ///
    /// Later layers overwrite earlier ones; points outside the grid are
    /// skipped.
    pub fn draw(&self, layers: &[(char, &[Point])]) -> String {
        let mut symbols: Vec<Vec<char>> = self
            .cells
            .chunks(self.width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect();
        for (symbol, points) in layers {
            for p in points.iter().filter(|p| self.contains(**p)) {
                symbols[p.y][p.x] = *symbol;
            }
        }
        symbols.iter().map(|row| row.iter().join("")).join("\n")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.draw(&[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_walls() {
        let grid = Grid::new(5, 7).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 7);
        assert_eq!(grid.open_cells().count(), 0);
        assert_eq!(grid.get(Point::new(4, 6)), Ok(Cell::Wall));
    }

    #[test]
    fn too_small_dimensions_rejected() {
        assert_eq!(
            Grid::new(2, 5),
            Err(MazeError::InvalidDimensions {
                width: 2,
                height: 5
            })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn out_of_bounds_access_is_an_error() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(
            grid.get(Point::new(3, 0)),
            Err(MazeError::OutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 3
            })
        );
        assert!(grid.set(Point::new(0, 3), Cell::Open).is_err());
        assert!(!grid.is_open(Point::new(10, 10)));
    }

    #[test]
    fn entry_and_exit_positions() {
        let grid = Grid::new(7, 5).unwrap();
        assert_eq!(grid.entry(), Point::new(0, 1));
        assert_eq!(grid.exit(), Point::new(6, 3));
    }

    #[test]
    fn parse_and_display() {
        let emojis = "
🟫🟫🟫🟫🟫
🟩🟩🟩🟩🟫
🟫🟫🟫🟩🟫
🟫🟩🟩🟩🟩
🟫🟫🟫🟫🟫"
            .trim();
        let grid = Grid::parse_emojis(emojis).unwrap();

        assert_eq!(grid.open_cells().count(), 9);
        assert!(grid.is_open(grid.entry()));
        assert!(grid.is_open(grid.exit()));
        assert_eq!(grid.to_string(), emojis);
    }

    #[test]
    fn draw_marker_layers() {
        let grid = Grid::parse_emojis("🟫🟫🟫\n🟩🟩🟩\n🟫🟫🟫").unwrap();
        let path = [Point::new(0, 1), Point::new(1, 1), Point::new(2, 1)];
        let player = [Point::new(1, 1), Point::new(7, 7)];
        assert_eq!(
            grid.draw(&[('🟨', &path[..]), ('🏃', &player[..])]),
            "🟫🟫🟫\n🟨🏃🟨\n🟫🟫🟫"
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Grid::parse_emojis(""), Err(MazeError::Empty));
        assert_eq!(
            Grid::parse_emojis("🟫🟫🟫\n🟩x🟩\n🟫🟫🟫"),
            Err(MazeError::UnexpectedSymbol {
                symbol: 'x',
                x: 1,
                y: 1
            })
        );
        assert_eq!(
            Grid::parse_emojis("🟫🟫🟫\n🟩🟩\n🟫🟫🟫"),
            Err(MazeError::RaggedRows {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn neighbours_follow_direction_order() {
        let grid = Grid::parse_emojis(
            "
🟫🟩🟫
🟩🟩🟩
🟫🟩🟫"
                .trim(),
        )
        .unwrap();
        let found: Vec<Point> = grid.neighbours(Point::new(1, 1)).collect();
        assert_eq!(
            found,
            vec![
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1)
            ]
        );
        // Corner cell: up and left fall off the grid
        assert_eq!(
            grid.neighbours(Point::new(0, 0)).collect::<Vec<_>>(),
            vec![Point::new(1, 0), Point::new(0, 1)]
        );
    }

    #[test]
    fn parse_move_script() {
        assert_eq!(
            Direction::parse_moves("r, R d\nu l").unwrap(),
            vec![
                Direction::Right,
                Direction::Right,
                Direction::Down,
                Direction::Up,
                Direction::Left
            ]
        );
        assert_eq!(
            Direction::parse_moves("RX"),
            Err(MazeError::UnknownDirection('X'))
        );
    }
}
