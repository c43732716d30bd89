use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;

use crate::config::glyphs;
use crate::data::{Contents, MapCell, Pos};
use crate::state::State;
use crate::vec2d::Vec2d;

// Both formatters print every row at full width and separate rows with newlines
// without a trailing one, which is what the warehouse files look like.

pub struct MapFormatter<'a> {
    grid: &'a Vec2d<MapCell>,
    state: Option<&'a State>,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(grid: &'a Vec2d<MapCell>, state: Option<&'a State>) -> Self {
        Self { grid, state }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut state_grid: Vec2d<Contents> = self.grid.scratchpad();
        if let Some(state) = self.state {
            for &b in &state.boxes {
                if state_grid.contains(b) {
                    state_grid[b] = Contents::Box;
                }
            }
            if state_grid.contains(state.worker) {
                state_grid[state.worker] = Contents::Player;
            }
        }

        for pos in self.grid.positions() {
            if pos.x == 0 && pos.y > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", Self::glyph(self.grid[pos], state_grid[pos]))?;
        }
        Ok(())
    }

    fn glyph(cell: MapCell, contents: Contents) -> char {
        match (cell, contents) {
            (MapCell::Wall, _) => glyphs::WALL,
            (MapCell::Empty, Contents::Empty) => glyphs::FLOOR,
            (MapCell::Empty, Contents::Box) => glyphs::BOX,
            (MapCell::Empty, Contents::Player) => glyphs::WORKER,
            (MapCell::Goal, Contents::Empty) => glyphs::TARGET,
            (MapCell::Goal, Contents::Box) => glyphs::BOX_ON_TARGET,
            (MapCell::Goal, Contents::Player) => glyphs::WORKER_ON_TARGET,
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Only walls and taboo cells are marked, targets, boxes and the worker are left out.
pub struct TabooFormatter<'a> {
    grid: &'a Vec2d<MapCell>,
    taboo: FnvHashSet<Pos>,
}

impl<'a> TabooFormatter<'a> {
    pub(crate) fn new(grid: &'a Vec2d<MapCell>, taboo: FnvHashSet<Pos>) -> Self {
        Self { grid, taboo }
    }
}

impl<'a> Display for TabooFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for pos in self.grid.positions() {
            if pos.x == 0 && pos.y > 0 {
                writeln!(f)?;
            }
            let glyph = if self.grid[pos] == MapCell::Wall {
                glyphs::WALL
            } else if self.taboo.contains(&pos) {
                glyphs::TABOO
            } else {
                glyphs::FLOOR
            };
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}

impl<'a> Debug for TabooFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::warehouse::Warehouse;

    #[test]
    fn formatting_layout_only() {
        let warehouse: Warehouse = "#####\n#@$.#\n#####".parse().unwrap();
        let layout = super::MapFormatter::new(&warehouse.grid, None);
        assert_eq!(layout.to_string(), "#####\n#  .#\n#####");
    }

    #[test]
    fn formatting_state() {
        let warehouse: Warehouse = "######\n#@$ .#\n######".parse().unwrap();
        let moved = warehouse.state.with_push(
            crate::data::Pos::new(2, 1),
            crate::data::Pos::new(2, 1),
            crate::data::Pos::new(3, 1),
        );
        assert_eq!(
            warehouse.format_with_state(&moved).to_string(),
            "######\n# @$.#\n######"
        );
    }

    #[test]
    fn formatting_taboo_hides_everything_else() {
        let warehouse: Warehouse = "#######\n#@ $. #\n#######".parse().unwrap();
        assert_eq!(
            warehouse.format_taboo().to_string(),
            "#######\n#X   X#\n#######"
        );
    }
}
