//! A best-first search in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! adapted to the grid semantics of this crate: costs may be floating point,
//! ties on the estimated cost are broken by the heuristic and then by discovery
//! order, and expanded nodes are closed for good.
//!
//! All per-node search state (cost, heuristic, parent) lives in a scratch table that
//! is created for every call. The parent of a node is stored as an index into that
//! table, so nothing on the searched graph itself is mutated.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use std::ops::Add;

use crate::{GridError, Result};

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Scratch entry for a discovered node.
struct SearchNode<C> {
    parent: usize,
    cost: C,
    heuristic: C,
    closed: bool,
}

struct SmallestCostHolder<C> {
    estimated_cost: C,
    heuristic: C,
    cost: C,
    index: usize,
}

impl<C: PartialOrd> Eq for SmallestCostHolder<C> {}

impl<C: PartialOrd> PartialEq for SmallestCostHolder<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: PartialOrd> PartialOrd for SmallestCostHolder<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: PartialOrd> Ord for SmallestCostHolder<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so every comparison is reversed: smallest estimated
        // cost first, then smallest heuristic, then the earliest discovered node.
        let by_estimate = other
            .estimated_cost
            .partial_cmp(&self.estimated_cost)
            .unwrap_or(Ordering::Equal);
        let by_heuristic = other
            .heuristic
            .partial_cmp(&self.heuristic)
            .unwrap_or(Ordering::Equal);
        by_estimate
            .then(by_heuristic)
            .then_with(|| other.index.cmp(&self.index))
    }
}

fn reverse_path<N, C>(nodes: &FxIndexMap<N, SearchNode<C>>, end: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = std::iter::successors(Some(end), |&i| {
        nodes.get_index(i).map(|(_, n)| n.parent)
    })
    .map_while(|i| nodes.get_index(i).map(|(node, _)| node.clone()))
    .collect();
    path.reverse();
    path
}

/// Searches from `start` until `success` holds for a popped node and returns the
/// path to it together with its cost. `Ok(None)` means the reachable graph was
/// exhausted. With `expansion_limit` set, the search fails once that many nodes
/// have been closed without success.
pub(crate) fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    expansion_limit: Option<usize>,
) -> Result<Option<(Vec<N>, C)>>
where
    N: Eq + Hash + Clone,
    C: Zero + PartialOrd + Add<Output = C> + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let start_h = heuristic(start);
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: start_h,
        heuristic: start_h,
        cost: Zero::zero(),
        index: 0,
    });
    let mut nodes: FxIndexMap<N, SearchNode<C>> = FxIndexMap::default();
    nodes.insert(
        start.clone(),
        SearchNode {
            parent: usize::MAX,
            cost: Zero::zero(),
            heuristic: start_h,
            closed: false,
        },
    );
    let mut expanded = 0;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, entry)) = nodes.get_index_mut(index) else {
                continue;
            };
            // A node is pushed again whenever a cheaper route to it is found, so
            // older heap entries for it are skipped here.
            if entry.closed || cost > entry.cost {
                continue;
            }
            if success(node) {
                debug!("Search succeeded after expanding {} nodes", expanded);
                let path = reverse_path(&nodes, index);
                return Ok(Some((path, cost)));
            }
            if let Some(limit) = expansion_limit {
                if expanded >= limit {
                    return Err(GridError::ExpansionLimitReached { limit });
                }
            }
            entry.closed = true;
            expanded += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h;
            let n;
            match nodes.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(SearchNode {
                        parent: index,
                        cost: new_cost,
                        heuristic: h,
                        closed: false,
                    });
                }
                Occupied(mut e) => {
                    let entry = e.get_mut();
                    if entry.closed || new_cost >= entry.cost {
                        continue;
                    }
                    entry.parent = index;
                    entry.cost = new_cost;
                    h = entry.heuristic;
                    n = e.index();
                }
            }
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                heuristic: h,
                cost: new_cost,
                index: n,
            });
        }
    }
    debug!("Open set exhausted after expanding {} nodes", expanded);
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    // A line graph 0 - 1 - 2 - ... - 9 with unit costs.
    fn line_successors(n: &i32) -> Vec<(i32, u32)> {
        [n - 1, n + 1]
            .into_iter()
            .filter(|m| (0..10).contains(m))
            .map(|m| (m, 1))
            .collect()
    }

    #[test]
    fn finds_path_on_line() {
        let (path, cost) = astar(
            &2,
            line_successors,
            |n| (7 - *n).unsigned_abs(),
            |n| *n == 7,
            None,
        )
        .unwrap()
        .unwrap();
        assert_eq!(path, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(cost, 5);
    }

    #[test]
    fn start_is_goal() {
        let (path, cost) = astar(&4, line_successors, |_| 0, |n| *n == 4, None)
            .unwrap()
            .unwrap();
        assert_eq!(path, vec![4]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn exhausted_without_goal() {
        let result = astar(&4, line_successors, |_| 0, |n| *n == 42, None).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn expansion_limit() {
        let result = astar(&0, line_successors, |_| 0, |n| *n == 9, Some(3));
        assert_eq!(result, Err(GridError::ExpansionLimitReached { limit: 3 }));
    }

    #[test]
    fn cheaper_route_replaces_parent() {
        // 0 -> 1 costs 10, 0 -> 2 -> 1 costs 2.
        let successors = |n: &u8| -> Vec<(u8, u32)> {
            match n {
                0 => vec![(1, 10), (2, 1)],
                2 => vec![(1, 1)],
                _ => vec![],
            }
        };
        let (path, cost) = astar(&0, successors, |_| 0, |n| *n == 1, None)
            .unwrap()
            .unwrap();
        assert_eq!(path, vec![0, 2, 1]);
        assert_eq!(cost, 2);
    }

    #[test]
    fn heap_order_breaks_ties_on_heuristic_then_index() {
        let a = SmallestCostHolder {
            estimated_cost: 3.0,
            heuristic: 1.0,
            cost: 2.0,
            index: 5,
        };
        let b = SmallestCostHolder {
            estimated_cost: 3.0,
            heuristic: 2.0,
            cost: 1.0,
            index: 1,
        };
        let c = SmallestCostHolder {
            estimated_cost: 3.0,
            heuristic: 1.0,
            cost: 2.0,
            index: 2,
        };
        let mut heap = BinaryHeap::from(vec![a, b, c]);
        assert_eq!(heap.pop().map(|h| h.index), Some(2));
        assert_eq!(heap.pop().map(|h| h.index), Some(5));
        assert_eq!(heap.pop().map(|h| h.index), Some(1));
    }
}
