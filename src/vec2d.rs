use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Row-major grid indexed by `Pos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: i32,
    cols: i32,
}

impl<T> Vec2d<T> {
    pub(crate) fn rows(&self) -> i32 {
        self.rows
    }

    pub(crate) fn cols(&self) -> i32 {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.cols && pos.y < self.rows
    }

    /// Like indexing but positions outside the grid give `None` instead of panicking.
    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self.data[self.offset_of(pos)])
        } else {
            None
        }
    }

    /// All positions in row-major order.
    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |y| (0..cols).map(move |x| Pos::new(x, y)))
    }

    pub(crate) fn scratchpad<U: Default + Clone>(&self) -> Vec2d<U> {
        self.scratchpad_with_default(U::default())
    }

    pub(crate) fn scratchpad_with_default<U: Clone>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn offset_of(&self, pos: Pos) -> usize {
        pos.y as usize * self.cols as usize + pos.x as usize
    }
}

impl<T: Clone> Vec2d<T> {
    pub(crate) fn new(rows: i32, cols: i32, default: T) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Vec2d {
            data: vec![default; rows as usize * cols as usize],
            rows,
            cols,
        }
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &Self::Output {
        let index = self.offset_of(pos);
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        let index = self.offset_of(pos);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let mut grid = Vec2d::new(2, 3, false);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert!(grid.contains(Pos::new(2, 1)));
        assert!(!grid.contains(Pos::new(3, 1)));
        assert!(!grid.contains(Pos::new(0, -1)));
        assert_eq!(grid.get(Pos::new(-1, 0)), None);

        grid[Pos::new(2, 0)] = true;
        grid[Pos::new(0, 1)] = true;
        assert_eq!(grid.get(Pos::new(2, 0)), Some(&true));
        assert_eq!(grid.get(Pos::new(1, 0)), Some(&false));
        assert_eq!(grid.get(Pos::new(0, 1)), Some(&true));
    }

    #[test]
    fn positions_are_row_major() {
        let grid = Vec2d::new(2, 2, 0u8);
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(0, 1), Pos::new(1, 1)]
        );
    }
}
