//! Single-source shortest distances on an arbitrary weighted graph, independent of any grid.
//!
//! Weights must be nonnegative. Negative weights are not detected and give unspecified distances.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Adjacency mapping from a node to its neighbours and the weight of the edge to each.
pub type WeightedGraph<N, C> = FxIndexMap<N, FxIndexMap<N, C>>;

struct SmallestDistanceHolder<C> {
    distance: C,
    index: usize,
}

impl<C: PartialEq> Eq for SmallestDistanceHolder<C> {}

impl<C: PartialEq> PartialEq for SmallestDistanceHolder<C> {
    fn eq(&self, other: &Self) -> bool {
        self.distance.eq(&other.distance) && self.index == other.index
    }
}

impl<C: Ord> PartialOrd for SmallestDistanceHolder<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for SmallestDistanceHolder<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest distance first, earlier discovered node on ties
        match other.distance.cmp(&self.distance) {
            Ordering::Equal => other.index.cmp(&self.index),
            s => s,
        }
    }
}

/// Computes the distance from `start` to every node reachable through `successors`.
///
/// Nodes that cannot be reached are absent from the returned table. Entries are in discovery
/// order, starting with `start` at distance zero.
pub fn dijkstra_all<N, C, FN, IN>(start: &N, mut successors: FN) -> FxIndexMap<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestDistanceHolder {
        distance: C::zero(),
        index: 0,
    });
    let mut distances: FxIndexMap<N, C> = FxIndexMap::default();
    distances.insert(start.clone(), C::zero());
    let mut skipped = 0usize;
    while let Some(SmallestDistanceHolder { distance, index }) = to_see.pop() {
        let successors = {
            let Some((node, &best)) = distances.get_index(index) else {
                continue;
            };
            // A node is pushed again whenever a shorter route to it turns up; only the
            // entry carrying its best distance is expanded.
            if distance > best {
                skipped += 1;
                continue;
            }
            successors(node)
        };
        for (successor, weight) in successors {
            let new_distance = distance + weight;
            let n = match distances.entry(successor) {
                Vacant(e) => {
                    let n = e.index();
                    e.insert(new_distance);
                    n
                }
                Occupied(mut e) => {
                    if *e.get() > new_distance {
                        e.insert(new_distance);
                        e.index()
                    } else {
                        continue;
                    }
                }
            };
            to_see.push(SmallestDistanceHolder {
                distance: new_distance,
                index: n,
            });
        }
    }
    debug!(
        "Settled {} nodes, skipped {} stale entries",
        distances.len(),
        skipped
    );
    distances
}

/// [dijkstra_all] over an explicit adjacency mapping. A `start` that is not a key of `graph` has no
/// outgoing edges and only reaches itself.
pub fn dijkstra_distances<N, C>(graph: &WeightedGraph<N, C>, start: &N) -> FxIndexMap<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    dijkstra_all(start, |node| {
        graph
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(n, w)| (n.clone(), *w)))
            .collect::<Vec<_>>()
    })
}
