//! Cells where a box can never be moved to a target again.
//!
//! Only two rules are used and boxes are ignored:
//!
//! 1. A dead corner that is not a target is taboo.
//! 2. The cells along a wall between two such corners are taboo
//!    if none of them is a target.

use fnv::FnvHashSet;
use log::debug;

use crate::data::{Dir, Pos};
use crate::solver::cells::{self, FreeDirs};

#[derive(Debug, Clone, Copy)]
struct Corner {
    pos: Pos,
    free: FreeDirs,
}

pub fn taboo_cells(walls: &FnvHashSet<Pos>, targets: &FnvHashSet<Pos>) -> FnvHashSet<Pos> {
    let mut taboo = FnvHashSet::default();

    let (cols, rows) = match cells::grid_size(walls) {
        Some(size) => size,
        None => return taboo,
    };

    // row-major
    let mut corners = Vec::new();
    for y in 0..rows {
        for x in 0..cols {
            let pos = Pos::new(x, y);
            if walls.contains(&pos) || targets.contains(&pos) {
                continue;
            }
            let free = FreeDirs::of(pos, walls);
            if free.is_dead_corner() {
                corners.push(Corner { pos, free });
            }
        }
    }

    // Rule 1
    // Corners lying outside the warehouse face the void, there is no wall further along
    // their open side. Those are skipped.
    for corner in &corners {
        let enclosed = corner
            .free
            .iter()
            .any(|dir| wall_ahead(walls, corner.pos, dir, cols, rows));
        if enclosed {
            taboo.insert(corner.pos);
        }
    }

    // Rule 2 - horizontal, pairs of neighboring corners in the same row
    for pair in corners.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        if left.pos.y == right.pos.y
            && left.free.contains(Dir::Right)
            && right.free.contains(Dir::Left)
        {
            mark_run(walls, targets, &mut taboo, left.pos, right.pos, Dir::Right);
        }
    }

    // Rule 2 - vertical, same as above in column-major order
    corners.sort_by_key(|corner| (corner.pos.x, corner.pos.y));
    for pair in corners.windows(2) {
        let (top, bottom) = (pair[0], pair[1]);
        if top.pos.x == bottom.pos.x
            && top.free.contains(Dir::Down)
            && bottom.free.contains(Dir::Up)
        {
            mark_run(walls, targets, &mut taboo, top.pos, bottom.pos, Dir::Down);
        }
    }

    debug!("Found {} taboo cells", taboo.len());
    taboo
}

/// Is there a wall anywhere further from `pos` in direction `dir`?
fn wall_ahead(walls: &FnvHashSet<Pos>, pos: Pos, dir: Dir, cols: i32, rows: i32) -> bool {
    let mut cur = pos + dir;
    // all walls are inside the grid so there's no point looking further
    while cur.x >= 0 && cur.y >= 0 && cur.x < cols && cur.y < rows {
        if walls.contains(&cur) {
            return true;
        }
        cur = cur + dir;
    }
    false
}

/// Marks the cells strictly between `from` and `to` if they're all free, none is a target
/// and the whole run is backed by a wall on the same side.
fn mark_run(
    walls: &FnvHashSet<Pos>,
    targets: &FnvHashSet<Pos>,
    taboo: &mut FnvHashSet<Pos>,
    from: Pos,
    to: Pos,
    dir: Dir,
) {
    let mut run = Vec::new();
    let mut cur = from + dir;
    while cur != to {
        if walls.contains(&cur) || targets.contains(&cur) {
            return;
        }
        run.push(cur);
        cur = cur + dir;
    }
    if run.is_empty() {
        return;
    }

    let sides = if dir.is_horizontal() {
        [Dir::Up, Dir::Down]
    } else {
        [Dir::Left, Dir::Right]
    };
    let along_wall = sides
        .iter()
        .any(|&side| run.iter().all(|&cell| walls.contains(&(cell + side))));
    if along_wall {
        taboo.extend(run);
    }
}
