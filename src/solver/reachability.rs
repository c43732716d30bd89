use std::collections::VecDeque;

use fnv::FnvHashSet;
use log::trace;

use crate::data::{Dir, Pos, DIRECTIONS};
use crate::search::{self, Problem};
use crate::warehouse::Warehouse;

/// Every cell reachable from `start` without crossing `obstacles` or leaving the grid.
///
/// `start` itself is always included.
pub fn reachable_from(
    start: Pos,
    obstacles: &FnvHashSet<Pos>,
    rows: i32,
    cols: i32,
) -> FnvHashSet<Pos> {
    let in_grid = |pos: Pos| pos.x >= 0 && pos.y >= 0 && pos.x < cols && pos.y < rows;

    let mut reachable = FnvHashSet::default();
    let mut to_visit = VecDeque::new();
    reachable.insert(start);
    to_visit.push_back(start);

    while let Some(cur) = to_visit.pop_front() {
        for &next in cur.neighbors().iter() {
            if in_grid(next) && !obstacles.contains(&next) && reachable.insert(next) {
                to_visit.push_back(next);
            }
        }
    }

    reachable
}

/// The worker walking around without pushing anything.
#[derive(Debug)]
pub struct WalkProblem<'a> {
    warehouse: &'a Warehouse,
    dest: Pos,
}

impl<'a> WalkProblem<'a> {
    pub fn new(warehouse: &'a Warehouse, dest: Pos) -> Self {
        WalkProblem { warehouse, dest }
    }

    fn is_free(&self, pos: Pos) -> bool {
        self.warehouse.grid.contains(pos)
            && !self.warehouse.is_wall(pos)
            && !self.warehouse.state.has_box(pos)
    }
}

impl<'a> Problem for WalkProblem<'a> {
    type State = Pos;
    type Action = Dir;

    fn initial_state(&self) -> &Pos {
        &self.warehouse.state.worker
    }

    fn actions(&self, &worker: &Pos) -> Vec<Dir> {
        DIRECTIONS
            .iter()
            .cloned()
            .filter(|&dir| self.is_free(worker + dir))
            .collect()
    }

    fn result(&self, &worker: &Pos, &dir: &Dir) -> Pos {
        worker + dir
    }

    fn goal_test(&self, &worker: &Pos) -> bool {
        worker == self.dest
    }

    fn heuristic(&self, &worker: &Pos) -> u32 {
        worker.dist(self.dest)
    }
}

/// Can the worker walk to `(row, column)` without pushing any box?
pub fn can_go_there(warehouse: &Warehouse, (row, col): (i32, i32)) -> bool {
    let dest = Pos::from_row_col(row, col);
    let problem = WalkProblem::new(warehouse, dest);
    let result = search::breadth_first_graph_search(&problem, false);
    trace!(
        "Walk to {} explored {} cells",
        dest,
        result.stats.total_unique_visited()
    );
    result.path.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flood_fill_stops_at_obstacles() {
        let warehouse: Warehouse = "#######\n#@ $. #\n#######".parse().unwrap();
        let mut obstacles = warehouse.walls().clone();
        obstacles.extend(warehouse.boxes());

        let reachable = reachable_from(
            warehouse.worker(),
            &obstacles,
            warehouse.rows(),
            warehouse.cols(),
        );
        let mut cells: Vec<_> = reachable.into_iter().collect();
        cells.sort();
        assert_eq!(cells, vec![Pos::new(1, 1), Pos::new(2, 1)]);
    }

    #[test]
    fn flood_fill_stays_in_grid() {
        let obstacles: FnvHashSet<Pos> = [Pos::new(1, 1)].iter().cloned().collect();
        let reachable = reachable_from(Pos::new(0, 0), &obstacles, 2, 2);
        assert_eq!(reachable.len(), 3);
        assert!(!reachable.contains(&Pos::new(1, 1)));
        assert!(!reachable.contains(&Pos::new(2, 0)));
    }

    #[test]
    fn going_places() {
        let warehouse: Warehouse = "#######\n#@ $. #\n#######".parse().unwrap();
        assert!(can_go_there(&warehouse, (1, 2)));
        assert!(can_go_there(&warehouse, (1, 1)));
        // behind the box
        assert!(!can_go_there(&warehouse, (1, 5)));
        // the box itself and a wall
        assert!(!can_go_there(&warehouse, (1, 3)));
        assert!(!can_go_there(&warehouse, (0, 0)));
    }

    #[test]
    fn walking_around_corners() {
        let level = r"
#####
#@ ##
## ##
#  $#
# # #
#   #
#####";
        let warehouse: Warehouse = level.parse().unwrap();
        assert!(can_go_there(&warehouse, (5, 3)));
        assert!(can_go_there(&warehouse, (4, 3)));
        assert!(!can_go_there(&warehouse, (4, 2)));
    }
}
