use crate::data::Pos;
use crate::state::State;

/// Placing boxes matters more than getting the worker to them.
pub(crate) const BOX_WEIGHT: u32 = 2;
pub(crate) const WORKER_WEIGHT: u32 = 1;

/// Estimated remaining cost, 0 in goal states.
///
/// Boxes that are not on a target and targets that have no box are paired up in sorted
/// order, not by a minimum-cost matching. With several boxes this can overestimate,
/// so A* is not guaranteed to find the shortest solution.
///
/// The worker term only looks at boxes that still need to move, boxes already on a target
/// are not considered even when they are closer to the worker.
pub(crate) fn estimate(targets: &[Pos], state: &State) -> u32 {
    let loose_boxes: Vec<Pos> = state
        .boxes
        .iter()
        .cloned()
        .filter(|b| targets.binary_search(b).is_err())
        .collect();
    let free_targets = targets.iter().cloned().filter(|&t| !state.has_box(t));

    let goal_dist_sum: u32 = loose_boxes
        .iter()
        .zip(free_targets)
        .map(|(b, t)| b.dist(t))
        .sum();

    let closest_box = loose_boxes
        .iter()
        .map(|&b| state.worker.dist(b))
        .min()
        .unwrap_or(0);

    BOX_WEIGHT * goal_dist_sum + WORKER_WEIGHT * closest_box
}
