use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;

use crate::data::{MapCell, Pos};
use crate::map_formatter::{MapFormatter, TabooFormatter};
use crate::solver::taboo;
use crate::state::State;
use crate::vec2d::Vec2d;

/// Walls, targets and the initial worker and box positions.
///
/// The grid spans from `(0, 0)` to the bottom-right-most wall,
/// anything outside of it is not a wall.
#[derive(Clone)]
pub struct Warehouse {
    pub(crate) grid: Vec2d<MapCell>,
    pub(crate) walls: FnvHashSet<Pos>,
    pub(crate) targets: Vec<Pos>,
    pub state: State,
}

impl Warehouse {
    pub fn new(walls: Vec<Pos>, mut targets: Vec<Pos>, worker: Pos, boxes: Vec<Pos>) -> Self {
        let cols = walls.iter().map(|w| w.x + 1).max().unwrap_or(0);
        let rows = walls.iter().map(|w| w.y + 1).max().unwrap_or(0);

        let mut grid = Vec2d::new(rows, cols, MapCell::Empty);
        for &target in &targets {
            if grid.contains(target) {
                grid[target] = MapCell::Goal;
            }
        }
        for &wall in &walls {
            if grid.contains(wall) {
                grid[wall] = MapCell::Wall;
            }
        }

        targets.sort();
        targets.dedup();

        Warehouse {
            grid,
            walls: walls.into_iter().collect(),
            targets,
            state: State::new(worker, boxes),
        }
    }

    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    pub fn walls(&self) -> &FnvHashSet<Pos> {
        &self.walls
    }

    /// Sorted
    pub fn targets(&self) -> &[Pos] {
        &self.targets
    }

    pub fn worker(&self) -> Pos {
        self.state.worker
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.state.boxes
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Wall)
    }

    pub fn is_target(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Goal)
    }

    /// Same walls and targets, different worker and boxes.
    pub fn with_state(&self, state: State) -> Warehouse {
        Warehouse {
            grid: self.grid.clone(),
            walls: self.walls.clone(),
            targets: self.targets.clone(),
            state,
        }
    }

    pub fn taboo_cells(&self) -> FnvHashSet<Pos> {
        let targets = self.targets.iter().cloned().collect();
        taboo::taboo_cells(&self.walls, &targets)
    }

    pub fn format_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(&self.grid, Some(state))
    }

    pub fn format_taboo(&self) -> TabooFormatter<'_> {
        TabooFormatter::new(&self.grid, self.taboo_cells())
    }
}

impl Display for Warehouse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_state(&self.state))
    }
}

impl Debug for Warehouse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // warehouse_0001 from the level collection
    const WAREHOUSE_0001: &str = "####  \n# .#  \n#  ###\n#*@  #\n#  $ #\n#  ###\n####  ";

    #[test]
    fn bounds_come_from_walls() {
        let warehouse: Warehouse = WAREHOUSE_0001.parse().unwrap();
        assert_eq!(warehouse.rows(), 7);
        assert_eq!(warehouse.cols(), 6);
        assert!(warehouse.is_wall(Pos::new(0, 0)));
        assert!(!warehouse.is_wall(Pos::new(5, 0)));
        assert!(!warehouse.is_wall(Pos::new(6, 0)));
        assert!(!warehouse.is_wall(Pos::new(-1, 3)));
    }

    #[test]
    fn elements() {
        let warehouse: Warehouse = WAREHOUSE_0001.parse().unwrap();
        assert_eq!(warehouse.worker(), Pos::new(2, 3));
        assert_eq!(warehouse.boxes(), &[Pos::new(1, 3), Pos::new(3, 4)]);
        assert_eq!(warehouse.targets(), &[Pos::new(1, 3), Pos::new(2, 1)]);
        assert!(warehouse.is_target(Pos::new(2, 1)));
        assert!(!warehouse.is_target(Pos::new(3, 4)));
    }

    #[test]
    fn rendering_round_trips() {
        let warehouse: Warehouse = WAREHOUSE_0001.parse().unwrap();
        assert_eq!(warehouse.to_string(), WAREHOUSE_0001);
        assert_eq!(format!("{:?}", warehouse), WAREHOUSE_0001);
    }

    #[test]
    fn with_state_keeps_layout() {
        let warehouse: Warehouse = WAREHOUSE_0001.parse().unwrap();
        let moved = warehouse.with_state(State::new(
            Pos::new(4, 4),
            vec![Pos::new(1, 3), Pos::new(3, 4)],
        ));
        assert_eq!(
            moved.to_string(),
            "####  \n# .#  \n#  ###\n#*   #\n#  $@#\n#  ###\n####  "
        );
        assert_eq!(moved.targets(), warehouse.targets());
    }

    #[test]
    fn built_from_coordinates() {
        let walls = vec![
            Pos::new(0, 0),
            Pos::new(1, 0),
            Pos::new(2, 0),
            Pos::new(3, 0),
            Pos::new(0, 1),
            Pos::new(3, 1),
            Pos::new(0, 2),
            Pos::new(1, 2),
            Pos::new(2, 2),
            Pos::new(3, 2),
        ];
        let warehouse = Warehouse::new(walls, vec![Pos::new(2, 1)], Pos::new(1, 1), vec![]);
        assert_eq!(warehouse.to_string(), "####\n#@.#\n####");
    }
}
