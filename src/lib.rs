// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]

pub mod config;
pub mod map_formatter;
pub mod moves;
pub mod search;
pub mod solver;
pub mod warehouse;

mod data;
mod fs;
mod parser;
mod state;
mod vec2d;

use std::error::Error;

use crate::config::SolverConfig;
use crate::moves::MacroAction;
use crate::search::SearchResult;
use crate::solver::SolverErr;

pub use crate::data::{Dir, Pos, DIRECTIONS};
pub use crate::parser::ParserErr;
pub use crate::state::State;
pub use crate::warehouse::Warehouse;

pub trait LoadLevel {
    fn load_level(&self) -> Result<Warehouse, Box<dyn Error>>;
}

pub trait Solve {
    fn solve_elementary(
        &self,
        config: SolverConfig,
        print_status: bool,
    ) -> Result<SearchResult<Dir>, SolverErr>;

    fn solve_macro(
        &self,
        config: SolverConfig,
        print_status: bool,
    ) -> Result<SearchResult<MacroAction>, SolverErr>;
}

impl Solve for Warehouse {
    fn solve_elementary(
        &self,
        config: SolverConfig,
        print_status: bool,
    ) -> Result<SearchResult<Dir>, SolverErr> {
        solver::solve_elementary(self, config, print_status)
    }

    fn solve_macro(
        &self,
        config: SolverConfig,
        print_status: bool,
    ) -> Result<SearchResult<MacroAction>, SolverErr> {
        solver::solve_macro(self, config, print_status)
    }
}
