use fnv::FnvHashSet;

use crate::data::{Dir, Pos, DIRECTIONS};

/// Number of columns and rows spanned by the walls: `(max_x + 1, max_y + 1)`.
pub(crate) fn grid_size(walls: &FnvHashSet<Pos>) -> Option<(i32, i32)> {
    let cols = walls.iter().map(|w| w.x + 1).max()?;
    let rows = walls.iter().map(|w| w.y + 1).max()?;
    Some((cols, rows))
}

/// Directions in which the neighbor of a cell is not a wall.
///
/// Neighbors outside the grid are not walls either.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FreeDirs([bool; 4]);

impl FreeDirs {
    pub(crate) fn of(pos: Pos, walls: &FnvHashSet<Pos>) -> Self {
        let mut free = [false; 4];
        for &dir in &DIRECTIONS {
            free[dir.index()] = !walls.contains(&(pos + dir));
        }
        FreeDirs(free)
    }

    pub(crate) fn contains(self, dir: Dir) -> bool {
        self.0[dir.index()]
    }

    pub(crate) fn iter(self) -> impl Iterator<Item = Dir> {
        DIRECTIONS.iter().cloned().filter(move |&dir| self.contains(dir))
    }

    pub(crate) fn horizontal(self) -> impl Iterator<Item = Dir> {
        self.iter().filter(|dir| dir.is_horizontal())
    }

    pub(crate) fn vertical(self) -> impl Iterator<Item = Dir> {
        self.iter().filter(|dir| !dir.is_horizontal())
    }

    /// At most one open side horizontally and one vertically - an L-shaped pocket
    /// or a dead end, never a straight corridor.
    pub(crate) fn is_dead_corner(self) -> bool {
        self.iter().count() <= 2 && self.horizontal().count() <= 1 && self.vertical().count() <= 1
    }
}
