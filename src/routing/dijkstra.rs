//! Dijkstra shortest-path engine shared by both graph tiers

use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::model::campus::CampusEdge;
use crate::model::interior::InteriorEdge;

/// Edge weight accessor, letting one algorithm serve both graph tiers
///
/// Costs must be non-negative; distances and fixed traversal costs always
/// are.
pub trait EdgeCost {
    fn cost(&self) -> f64;
}

impl EdgeCost for CampusEdge {
    fn cost(&self) -> f64 {
        self.weight
    }
}

impl EdgeCost for InteriorEdge {
    fn cost(&self) -> f64 {
        self.weight
    }
}

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeIndex,
}

impl Eq for State {}

// Min-heap by cost (reversed from standard Rust BinaryHeap); the node index
// breaks exact-cost ties to keep the ordering total
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source single-target Dijkstra with path reconstruction
///
/// Returns the node sequence from source to target and the total weight, or
/// `None` when either endpoint is absent or no path exists. The first pop of
/// the target from the queue carries its final distance, so the search stops
/// there.
pub fn shortest_path<N, E: EdgeCost>(
    graph: &UnGraph<N, E>,
    source: NodeIndex,
    target: NodeIndex,
) -> Option<(Vec<NodeIndex>, f64)> {
    if graph.node_weight(source).is_none() || graph.node_weight(target).is_none() {
        return None;
    }
    if source == target {
        return Some((vec![source], 0.0));
    }

    let mut distances: HashMap<NodeIndex, f64> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut heap = BinaryHeap::new();

    heap.push(State {
        cost: 0.0,
        node: source,
    });
    distances.insert(source, 0.0);

    let mut total = None;
    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            total = Some(cost);
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().cost();

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    let total = total?;

    // Follow predecessors backward from target to source
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        current = *predecessors.get(&current)?;
        path.push(current);
    }
    path.reverse();

    Some((path, total))
}

/// One-to-many Dijkstra: distances from `start` to every reachable node,
/// optionally bounded by a maximum cost
pub fn shortest_path_weights<N, E: EdgeCost>(
    graph: &UnGraph<N, E>,
    start: NodeIndex,
    max_cost: Option<f64>,
) -> HashMap<NodeIndex, f64> {
    let mut distances: HashMap<NodeIndex, f64> = HashMap::new();
    let mut heap = BinaryHeap::new();

    if graph.node_weight(start).is_none() {
        return distances;
    }

    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        if let Some(max) = max_cost {
            if cost > max {
                continue;
            }
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().cost();

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    distances
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> (UnGraph<(), CampusEdge>, Vec<NodeIndex>) {
        // a - b - d with a cheaper detour a - c - d
        let mut graph = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..4).map(|_| graph.add_node(())).collect();
        graph.add_edge(nodes[0], nodes[1], CampusEdge { weight: 10.0 });
        graph.add_edge(nodes[1], nodes[3], CampusEdge { weight: 10.0 });
        graph.add_edge(nodes[0], nodes[2], CampusEdge { weight: 4.0 });
        graph.add_edge(nodes[2], nodes[3], CampusEdge { weight: 5.0 });
        (graph, nodes)
    }

    #[test]
    fn source_equals_target_is_trivial() {
        let (graph, nodes) = diamond();
        let (path, weight) = shortest_path(&graph, nodes[0], nodes[0]).unwrap();
        assert_eq!(path, vec![nodes[0]]);
        assert_eq!(weight, 0.0);
    }

    #[test]
    fn picks_the_cheaper_detour() {
        let (graph, nodes) = diamond();
        let (path, weight) = shortest_path(&graph, nodes[0], nodes[3]).unwrap();
        assert_eq!(path, vec![nodes[0], nodes[2], nodes[3]]);
        assert_eq!(weight, 9.0);
    }

    #[test]
    fn weight_is_symmetric() {
        let (graph, nodes) = diamond();
        let forward = shortest_path(&graph, nodes[0], nodes[3]).unwrap().1;
        let backward = shortest_path(&graph, nodes[3], nodes[0]).unwrap().1;
        assert_eq!(forward, backward);
    }

    #[test]
    fn reported_weight_equals_edge_sum() {
        let (graph, nodes) = diamond();
        let (path, weight) = shortest_path(&graph, nodes[0], nodes[3]).unwrap();
        let sum: f64 = path
            .windows(2)
            .map(|pair| {
                let edge = graph.find_edge(pair[0], pair[1]).unwrap();
                graph[edge].weight
            })
            .sum();
        assert!((weight - sum).abs() < 1e-12);
    }

    #[test]
    fn disconnected_pair_yields_none() {
        let (mut graph, nodes) = diamond();
        let island = graph.add_node(());
        assert!(shortest_path(&graph, nodes[0], island).is_none());
        assert!(shortest_path(&graph, island, nodes[0]).is_none());
    }

    #[test]
    fn one_to_many_covers_reachable_nodes() {
        let (mut graph, nodes) = diamond();
        let island = graph.add_node(());
        let weights = shortest_path_weights(&graph, nodes[0], None);
        assert_eq!(weights.len(), 4);
        assert_eq!(weights[&nodes[3]], 9.0);
        assert!(!weights.contains_key(&island));
    }

    #[test]
    fn one_to_many_respects_max_cost() {
        let (graph, nodes) = diamond();
        let weights = shortest_path_weights(&graph, nodes[0], Some(4.0));
        // Nodes past the cutoff keep their discovery distance but are never
        // expanded, so d is reached only through the direct relaxation from c
        assert_eq!(weights[&nodes[0]], 0.0);
        assert_eq!(weights[&nodes[2]], 4.0);
        assert_eq!(weights[&nodes[3]], 9.0);
    }
}
