use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Dir, Pos};

/// Walk to the box and push it one cell in `dir`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacroAction {
    pub box_pos: Pos,
    pub dir: Dir,
}

impl MacroAction {
    pub fn new(box_pos: Pos, dir: Dir) -> Self {
        MacroAction { box_pos, dir }
    }

    /// Where the worker has to stand to push.
    pub fn push_origin(&self) -> Pos {
        self.box_pos - self.dir
    }

    pub fn box_dest(&self) -> Pos {
        self.box_pos + self.dir
    }
}

impl Display for MacroAction {
    // ((row, column), 'Dir')
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (r, c) = self.box_pos.row_col();
        write!(f, "(({}, {}), '{}')", r, c, self.dir)
    }
}

impl Debug for MacroAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Why a single elementary step is illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepErr {
    WalkIntoWall,
    PushIntoWall,
    PushTwoBoxes,
    /// Only possible in warehouses that aren't fully enclosed by walls.
    LeaveWarehouse,
}

impl Display for StepErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            StepErr::WalkIntoWall => write!(f, "worker walks into a wall"),
            StepErr::PushIntoWall => write!(f, "box pushed into a wall"),
            StepErr::PushTwoBoxes => write!(f, "two boxes pushed at once"),
            StepErr::LeaveWarehouse => write!(f, "step outside the warehouse"),
        }
    }
}

/// A sequence of elementary actions failed at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionErr {
    pub index: usize,
    pub dir: Dir,
    pub reason: StepErr,
}

impl Display for ActionErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failure: action {} ({}): {}",
            self.index, self.dir, self.reason
        )
    }
}

impl Error for ActionErr {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_macro_actions() {
        let action = MacroAction::new(Pos::new(3, 1), Dir::Right);
        assert_eq!(action.to_string(), "((1, 3), 'Right')");
        assert_eq!(format!("{:?}", action), "((1, 3), 'Right')");
    }

    #[test]
    fn push_geometry() {
        let action = MacroAction::new(Pos::new(3, 1), Dir::Up);
        assert_eq!(action.push_origin(), Pos::new(3, 2));
        assert_eq!(action.box_dest(), Pos::new(3, 0));
    }

    #[test]
    fn formatting_failures() {
        let err = ActionErr {
            index: 2,
            dir: Dir::Right,
            reason: StepErr::WalkIntoWall,
        };
        assert_eq!(err.to_string(), "Failure: action 2 (Right): worker walks into a wall");
    }
}
