//! The two ways of moving through the state space of a warehouse.
//!
//! `ElementaryProblem` moves the worker one cell at a time,
//! `MacroProblem` only considers pushes and lets the worker walk to the box for free.

use fnv::FnvHashSet;
use log::debug;

use crate::config::SolverConfig;
use crate::data::{Dir, Pos, DIRECTIONS};
use crate::moves::{MacroAction, StepErr};
use crate::search::Problem;
use crate::solver::{heuristic, reachability, SolverErr};
use crate::state::State;
use crate::warehouse::Warehouse;

/// Moves the worker one cell in `dir`, pushing a box if there is one.
///
/// Taboo cells are not considered here.
pub(crate) fn try_step(warehouse: &Warehouse, state: &State, dir: Dir) -> Result<State, StepErr> {
    let next = state.worker + dir;
    if warehouse.is_wall(next) {
        return Err(StepErr::WalkIntoWall);
    }
    if !warehouse.grid.contains(next) {
        return Err(StepErr::LeaveWarehouse);
    }
    if !state.has_box(next) {
        return Ok(state.with_worker(next));
    }

    let behind = next + dir;
    if warehouse.is_wall(behind) {
        Err(StepErr::PushIntoWall)
    } else if state.has_box(behind) {
        Err(StepErr::PushTwoBoxes)
    } else if !warehouse.grid.contains(behind) {
        Err(StepErr::LeaveWarehouse)
    } else {
        Ok(state.with_push(next, next, behind))
    }
}

/// What both problems share - the layout, the taboo cells and the starting state.
#[derive(Debug)]
struct Puzzle<'a> {
    warehouse: &'a Warehouse,
    /// Empty when taboo pushes are allowed.
    taboo: FnvHashSet<Pos>,
}

impl<'a> Puzzle<'a> {
    fn new(warehouse: &'a Warehouse, config: SolverConfig) -> Result<Self, SolverErr> {
        super::validate(warehouse)?;

        let taboo = if config.allow_taboo_push {
            FnvHashSet::default()
        } else {
            warehouse.taboo_cells()
        };
        debug!("Pruning pushes onto {} taboo cells", taboo.len());

        Ok(Puzzle { warehouse, taboo })
    }

    fn goal_test(&self, state: &State) -> bool {
        // both sorted
        state.boxes.as_slice() == self.warehouse.targets()
    }

    fn heuristic(&self, state: &State) -> u32 {
        heuristic::estimate(self.warehouse.targets(), state)
    }
}

/// Actions are single steps of the worker.
#[derive(Debug)]
pub struct ElementaryProblem<'a> {
    puzzle: Puzzle<'a>,
}

impl<'a> ElementaryProblem<'a> {
    pub fn new(warehouse: &'a Warehouse, config: SolverConfig) -> Result<Self, SolverErr> {
        Ok(ElementaryProblem {
            puzzle: Puzzle::new(warehouse, config)?,
        })
    }

    /// A legal step that doesn't push a box onto a taboo cell.
    fn step(&self, state: &State, dir: Dir) -> Option<State> {
        let next = try_step(self.puzzle.warehouse, state, dir).ok()?;
        let pushed = state.worker + dir;
        if state.has_box(pushed) && self.puzzle.taboo.contains(&(pushed + dir)) {
            None
        } else {
            Some(next)
        }
    }
}

impl<'a> Problem for ElementaryProblem<'a> {
    type State = State;
    type Action = Dir;

    fn initial_state(&self) -> &State {
        &self.puzzle.warehouse.state
    }

    fn actions(&self, state: &State) -> Vec<Dir> {
        DIRECTIONS
            .iter()
            .cloned()
            .filter(|&dir| self.step(state, dir).is_some())
            .collect()
    }

    fn result(&self, state: &State, &dir: &Dir) -> State {
        self.step(state, dir).unwrap_or_else(|| state.clone())
    }

    fn goal_test(&self, state: &State) -> bool {
        self.puzzle.goal_test(state)
    }

    fn heuristic(&self, state: &State) -> u32 {
        self.puzzle.heuristic(state)
    }
}

/// Actions are pushes, walking between them is free.
#[derive(Debug)]
pub struct MacroProblem<'a> {
    puzzle: Puzzle<'a>,
}

impl<'a> MacroProblem<'a> {
    pub fn new(warehouse: &'a Warehouse, config: SolverConfig) -> Result<Self, SolverErr> {
        Ok(MacroProblem {
            puzzle: Puzzle::new(warehouse, config)?,
        })
    }

    fn is_free(&self, state: &State, pos: Pos) -> bool {
        let warehouse = self.puzzle.warehouse;
        warehouse.grid.contains(pos) && !warehouse.is_wall(pos) && !state.has_box(pos)
    }
}

impl<'a> Problem for MacroProblem<'a> {
    type State = State;
    type Action = MacroAction;

    fn initial_state(&self) -> &State {
        &self.puzzle.warehouse.state
    }

    fn actions(&self, state: &State) -> Vec<MacroAction> {
        let warehouse = self.puzzle.warehouse;
        let mut obstacles = warehouse.walls.clone();
        obstacles.extend(state.boxes.iter().cloned());
        let reachable = reachability::reachable_from(
            state.worker,
            &obstacles,
            warehouse.rows(),
            warehouse.cols(),
        );

        let mut actions = Vec::new();
        for &box_pos in &state.boxes {
            for &dir in &DIRECTIONS {
                let action = MacroAction::new(box_pos, dir);
                let dest = action.box_dest();
                if reachable.contains(&action.push_origin())
                    && self.is_free(state, dest)
                    && !self.puzzle.taboo.contains(&dest)
                {
                    actions.push(action);
                }
            }
        }
        actions
    }

    fn result(&self, state: &State, action: &MacroAction) -> State {
        state.with_push(action.box_pos, action.box_pos, action.box_dest())
    }

    fn goal_test(&self, state: &State) -> bool {
        self.puzzle.goal_test(state)
    }

    fn heuristic(&self, state: &State) -> u32 {
        self.puzzle.heuristic(state)
    }
}
