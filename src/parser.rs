use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::glyphs;
use crate::data::Pos;
use crate::warehouse::Warehouse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    /// Row, column
    Pos(usize, usize),
    MultipleWorkers,
    NoWorker,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::MultipleWorkers => write!(f, "More than one worker"),
            ParserErr::NoWorker => write!(f, "No worker"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Warehouse {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the text format of the warehouse files:
/// `#` wall, `.` target, `$` box, `*` box on target, `@` worker, `!` or `+` worker on target.
pub(crate) fn parse(level: &str) -> Result<Warehouse, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    // (only newlines - trailing spaces are part of the rows)
    let level = level.trim_matches(|c| c == '\n' || c == '\r');

    let mut walls = Vec::new();
    let mut targets = Vec::new();
    let mut boxes = Vec::new();
    let mut worker = None;

    for (r, line) in level.lines().enumerate() {
        for (c, cur_char) in line.chars().enumerate() {
            let pos = Pos::new(c as i32, r as i32);
            let (is_target, has_box, has_worker) = match cur_char {
                glyphs::WALL => {
                    walls.push(pos);
                    continue;
                }
                glyphs::FLOOR | '-' | '_' => (false, false, false),
                glyphs::TARGET => (true, false, false),
                glyphs::BOX => (false, true, false),
                glyphs::BOX_ON_TARGET => (true, true, false),
                glyphs::WORKER => (false, false, true),
                glyphs::WORKER_ON_TARGET | glyphs::WORKER_ON_TARGET_XSB => (true, false, true),
                _ => return Err(ParserErr::Pos(r, c)),
            };

            if is_target {
                targets.push(pos);
            }
            if has_box {
                boxes.push(pos);
            }
            if has_worker {
                if worker.is_some() {
                    return Err(ParserErr::MultipleWorkers);
                }
                worker = Some(pos);
            }
        }
    }

    let worker = worker.ok_or(ParserErr::NoWorker)?;
    Ok(Warehouse::new(walls, targets, worker, boxes))
}
