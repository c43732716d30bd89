pub(crate) mod cells;
pub(crate) mod heuristic;
pub mod puzzle;
pub mod reachability;
pub mod taboo;

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use log::{debug, info};

use crate::config::SolverConfig;
use crate::data::Dir;
use crate::moves::{ActionErr, MacroAction};
use crate::search::{self, SearchResult};
use crate::warehouse::Warehouse;

pub use self::puzzle::{ElementaryProblem, MacroProblem};
pub use self::reachability::{can_go_there, reachable_from, WalkProblem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    NoWalls,
    BoxesGoals,
    WorkerOnWall,
    BoxOnWall,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::NoWalls => write!(f, "No walls"),
            SolverErr::BoxesGoals => write!(f, "Different number of boxes and goals"),
            SolverErr::WorkerOnWall => write!(f, "Worker is inside a wall"),
            SolverErr::BoxOnWall => write!(f, "A box is inside a wall"),
        }
    }
}

impl Error for SolverErr {}

/// Checks the guarantees the rest of the solver relies on.
pub(crate) fn validate(warehouse: &Warehouse) -> Result<(), SolverErr> {
    if warehouse.walls.is_empty() {
        return Err(SolverErr::NoWalls);
    }
    if warehouse.is_wall(warehouse.worker()) {
        return Err(SolverErr::WorkerOnWall);
    }
    if warehouse.boxes().iter().any(|&b| warehouse.is_wall(b)) {
        return Err(SolverErr::BoxOnWall);
    }
    if warehouse.boxes().len() != warehouse.targets().len() {
        return Err(SolverErr::BoxesGoals);
    }
    Ok(())
}

/// Searches for a sequence of worker steps that puts every box on a target.
pub fn solve_elementary(
    warehouse: &Warehouse,
    config: SolverConfig,
    print_status: bool,
) -> Result<SearchResult<Dir>, SolverErr> {
    debug!("Processing warehouse...");
    let problem = ElementaryProblem::new(warehouse, config)?;
    debug!("Processed warehouse");

    let result = search::graph_search(&problem, config.method, print_status);
    info!("Elementary search finished: {:?}", result.stats);
    Ok(result)
}

/// Searches for a sequence of pushes that puts every box on a target.
pub fn solve_macro(
    warehouse: &Warehouse,
    config: SolverConfig,
    print_status: bool,
) -> Result<SearchResult<MacroAction>, SolverErr> {
    debug!("Processing warehouse...");
    let problem = MacroProblem::new(warehouse, config)?;
    debug!("Processed warehouse");

    let result = search::graph_search(&problem, config.method, print_status);
    info!("Macro search finished: {:?}", result.stats);
    Ok(result)
}

/// Replays `actions` from the initial state, taboo cells are ignored.
///
/// Returns the warehouse in its final state or the first step that failed.
pub fn check_action_seq(warehouse: &Warehouse, actions: &[Dir]) -> Result<Warehouse, ActionErr> {
    let mut state = warehouse.state.clone();
    for (index, &dir) in actions.iter().enumerate() {
        state = puzzle::try_step(warehouse, &state, dir).map_err(|reason| ActionErr {
            index,
            dir,
            reason,
        })?;
    }
    Ok(warehouse.with_state(state))
}
