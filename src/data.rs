use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapCell {
    Wall,
    Empty,
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Box,
    Player,
}

impl Default for Contents {
    fn default() -> Self {
        Contents::Empty
    }
}

/// A cell of the warehouse.
///
/// `x` is the column and `y` the row, the same convention the warehouse files use.
/// Coordinates are signed so that stepping off the edge of the grid is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Pos {
        Pos { x, y }
    }

    /// Builds a position from the `(row, column)` convention used by macro actions.
    pub fn from_row_col(row: i32, col: i32) -> Pos {
        Pos { x: col, y: row }
    }

    pub fn row_col(self) -> (i32, i32) {
        (self.y, self.x)
    }

    /// Manhattan distance
    pub fn dist(self, other: Pos) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }

    pub(crate) fn neighbors(self) -> [Pos; 4] {
        [self + Dir::Up, self + Dir::Down, self + Dir::Left, self + Dir::Right]
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

// order matters - it's the order in which elementary actions are offered
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    pub fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Dir::Left || self == Dir::Right
    }

    /// `(dx, dy)`, `y` grows downwards
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Dir::Up => "Up",
            Dir::Down => "Down",
            Dir::Left => "Left",
            Dir::Right => "Right",
        };
        write!(f, "{}", name)
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dx, dy) = dir.offset();
        Pos::new(self.x + dx, self.y + dy)
    }
}

impl Sub<Dir> for Pos {
    type Output = Pos;

    fn sub(self, dir: Dir) -> Pos {
        self + dir.inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping() {
        let pos = Pos::new(3, 1);
        assert_eq!(pos + Dir::Right, Pos::new(4, 1));
        assert_eq!(pos + Dir::Up, Pos::new(3, 0));
        assert_eq!(pos - Dir::Right, Pos::new(2, 1));
        for &dir in &DIRECTIONS {
            assert_eq!(pos + dir - dir, pos);
            assert_eq!(dir.inverse().inverse(), dir);
        }
    }

    #[test]
    fn row_col_convention() {
        let pos = Pos::from_row_col(1, 3);
        assert_eq!(pos, Pos::new(3, 1));
        assert_eq!(pos.row_col(), (1, 3));
    }

    #[test]
    fn manhattan() {
        assert_eq!(Pos::new(0, 0).dist(Pos::new(3, -4)), 7);
        assert_eq!(Pos::new(2, 2).dist(Pos::new(2, 2)), 0);
    }
}
