//! Graph search over anything that implements [`Problem`].

mod stats;

use std::collections::{BTreeMap, VecDeque};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use fnv::{FnvHashMap, FnvHashSet};
use log::{debug, trace};
use typed_arena::Arena;

use crate::config::Method;

pub use self::stats::Stats;

/// A state space the search functions can explore.
pub trait Problem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    fn initial_state(&self) -> &Self::State;

    /// Actions legal in `state`, in the order they should be tried.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn goal_test(&self, state: &Self::State) -> bool;

    fn step_cost(&self, _from: &Self::State, _action: &Self::Action, _to: &Self::State) -> u32 {
        1
    }

    /// Estimate of the remaining cost, used to order the A* frontier.
    fn heuristic(&self, _state: &Self::State) -> u32 {
        0
    }
}

#[derive(Debug)]
pub struct Node<'a, S, A> {
    pub state: S,
    pub parent: Option<&'a Node<'a, S, A>>,
    /// The action that led from `parent` to this node, `None` for the root.
    pub action: Option<A>,
    pub path_cost: u32,
    pub depth: usize,
}

impl<'a, S, A: Clone> Node<'a, S, A> {
    fn root(state: S) -> Self {
        Node {
            state,
            parent: None,
            action: None,
            path_cost: 0,
            depth: 0,
        }
    }

    fn child(&'a self, state: S, action: A, step_cost: u32) -> Self {
        Node {
            state,
            parent: Some(self),
            action: Some(action),
            path_cost: self.path_cost + step_cost,
            depth: self.depth + 1,
        }
    }

    /// Actions from the root to this node.
    pub fn solution(&self) -> Vec<A> {
        let mut actions = Vec::with_capacity(self.depth);
        let mut cur = self;
        while let (Some(parent), Some(action)) = (cur.parent, &cur.action) {
            actions.push(action.clone());
            cur = parent;
        }
        actions.reverse();
        actions
    }
}

pub struct SearchResult<A> {
    /// `None` when the whole reachable state space was explored without finding a goal.
    pub path: Option<Vec<A>>,
    pub path_cost: Option<u32>,
    pub stats: Stats,
    pub method: Method,
}

impl<A> SearchResult<A> {
    fn new(path: Option<(Vec<A>, u32)>, stats: Stats, method: Method) -> Self {
        let (path, path_cost) = match path {
            Some((path, cost)) => (Some(path), Some(cost)),
            None => (None, None),
        };
        Self {
            path,
            path_cost,
            stats,
            method,
        }
    }
}

impl<A: Display> Display for SearchResult<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path {
            None => writeln!(f, "Impossible")?,
            Some(ref path) => {
                let names: Vec<_> = path.iter().map(|a| a.to_string()).collect();
                writeln!(f, "[{}]", names.join(", "))?;
                writeln!(f, "{}: {} actions", self.method, path.len())?;
            }
        }
        write!(f, "{}", self.stats)
    }
}

impl<A: Display> Debug for SearchResult<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

pub fn graph_search<P: Problem>(
    problem: &P,
    method: Method,
    print_status: bool,
) -> SearchResult<P::Action> {
    match method {
        Method::AStar => astar_graph_search(problem, print_status),
        Method::BreadthFirst => breadth_first_graph_search(problem, print_status),
    }
}

/// Returns a path with the fewest actions.
pub fn breadth_first_graph_search<P: Problem>(
    problem: &P,
    print_status: bool,
) -> SearchResult<P::Action> {
    debug!("Breadth-first search started");

    let arena = Arena::new();
    let mut stats = Stats::new();
    let mut frontier = VecDeque::new();
    let mut in_frontier = FnvHashSet::default();
    let mut explored = FnvHashSet::default();

    let root: &Node<'_, P::State, P::Action> =
        arena.alloc(Node::root(problem.initial_state().clone()));
    stats.add_created(root.depth);
    in_frontier.insert(root.state.clone());
    frontier.push_back(root);

    while let Some(node) = frontier.pop_front() {
        in_frontier.remove(&node.state);
        report_visit(&mut stats, node.depth, print_status);

        if problem.goal_test(&node.state) {
            debug!("Goal reached at depth {}, backtracking path", node.depth);
            return SearchResult::new(
                Some((node.solution(), node.path_cost)),
                stats,
                Method::BreadthFirst,
            );
        }
        explored.insert(node.state.clone());

        for action in problem.actions(&node.state) {
            let child_state = problem.result(&node.state, &action);
            if explored.contains(&child_state) || in_frontier.contains(&child_state) {
                stats.add_reached_duplicate(node.depth + 1);
                continue;
            }

            let cost = problem.step_cost(&node.state, &action, &child_state);
            let child: &Node<'_, P::State, P::Action> =
                arena.alloc(node.child(child_state, action, cost));
            stats.add_created(child.depth);
            in_frontier.insert(child.state.clone());
            frontier.push_back(child);
        }
    }

    debug!("Frontier exhausted");
    SearchResult::new(None, stats, Method::BreadthFirst)
}

/// Best-first search ordered by path cost plus the problem's heuristic.
///
/// Nodes with the same priority are expanded in the order they were added.
pub fn astar_graph_search<P: Problem>(problem: &P, print_status: bool) -> SearchResult<P::Action> {
    debug!("A* search started");

    let arena = Arena::new();
    let mut stats = Stats::new();
    // (cost + heuristic, insertion order) -> node
    let mut frontier = BTreeMap::new();
    // lets us find and replace a frontier entry when a cheaper path to its state shows up
    let mut frontier_keys: FnvHashMap<P::State, (u32, u64)> = FnvHashMap::default();
    let mut explored = FnvHashSet::default();
    let mut counter = 0u64;

    let root: &Node<'_, P::State, P::Action> =
        arena.alloc(Node::root(problem.initial_state().clone()));
    stats.add_created(root.depth);
    let root_key = (problem.heuristic(&root.state), counter);
    frontier_keys.insert(root.state.clone(), root_key);
    frontier.insert(root_key, root);

    while let Some((_, node)) = frontier.pop_first() {
        frontier_keys.remove(&node.state);
        report_visit(&mut stats, node.depth, print_status);

        if problem.goal_test(&node.state) {
            debug!("Goal reached at depth {}, backtracking path", node.depth);
            return SearchResult::new(
                Some((node.solution(), node.path_cost)),
                stats,
                Method::AStar,
            );
        }
        explored.insert(node.state.clone());

        for action in problem.actions(&node.state) {
            let child_state = problem.result(&node.state, &action);
            if explored.contains(&child_state) {
                stats.add_reached_duplicate(node.depth + 1);
                continue;
            }

            let cost = problem.step_cost(&node.state, &action, &child_state);
            let priority = node.path_cost + cost + problem.heuristic(&child_state);
            if let Some(&old_key) = frontier_keys.get(&child_state) {
                if old_key.0 <= priority {
                    stats.add_reached_duplicate(node.depth + 1);
                    continue;
                }
                trace!("Found a cheaper path to a frontier state: {} -> {}", old_key.0, priority);
                frontier.remove(&old_key);
            }

            let child: &Node<'_, P::State, P::Action> =
                arena.alloc(node.child(child_state, action, cost));
            stats.add_created(child.depth);
            counter += 1;
            let key = (priority, counter);
            frontier_keys.insert(child.state.clone(), key);
            frontier.insert(key, child);
        }
    }

    debug!("Frontier exhausted");
    SearchResult::new(None, stats, Method::AStar)
}

fn report_visit(stats: &mut Stats, depth: usize, print_status: bool) {
    if stats.add_unique_visited(depth) && print_status {
        println!("Visited new depth: {}", depth);
        println!("{:?}", stats);
    }
}
