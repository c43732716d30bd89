use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Characters used when reading and rendering warehouses.
pub mod glyphs {
    pub const WALL: char = '#';
    pub const FLOOR: char = ' ';
    pub const TARGET: char = '.';
    pub const BOX: char = '$';
    pub const BOX_ON_TARGET: char = '*';
    pub const WORKER: char = '@';
    pub const WORKER_ON_TARGET: char = '!';
    /// Accepted when parsing, `WORKER_ON_TARGET` is used when rendering.
    pub const WORKER_ON_TARGET_XSB: char = '+';
    pub const TABOO: char = 'X';
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    AStar,
    BreadthFirst,
}

impl Default for Method {
    fn default() -> Self {
        Method::AStar
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::AStar => write!(f, "astar"),
            Method::BreadthFirst => write!(f, "bfs"),
        }
    }
}

impl FromStr for Method {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "astar" | "a*" => Ok(Method::AStar),
            "bfs" | "breadth-first" => Ok(Method::BreadthFirst),
            _ => Err(ConfigErr::UnknownMethod(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErr {
    UnknownMethod(String),
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::UnknownMethod(name) => {
                write!(f, "Unknown search method: {} (expected astar or bfs)", name)
            }
        }
    }
}

impl Error for ConfigErr {}

/// Fixed for the whole lifetime of a problem.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub method: Method,
    /// When false, actions that put a box on a taboo cell are never offered.
    pub allow_taboo_push: bool,
}

impl SolverConfig {
    pub fn new(method: Method, allow_taboo_push: bool) -> Self {
        Self {
            method,
            allow_taboo_push,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_methods() {
        assert_eq!("astar".parse::<Method>().unwrap(), Method::AStar);
        assert_eq!("bfs".parse::<Method>().unwrap(), Method::BreadthFirst);
        assert_eq!(
            "dfs".parse::<Method>().unwrap_err(),
            ConfigErr::UnknownMethod("dfs".to_owned())
        );
    }

    #[test]
    fn method_names_round_trip() {
        for &method in &[Method::AStar, Method::BreadthFirst] {
            assert_eq!(method.to_string().parse::<Method>().unwrap(), method);
        }
    }
}
