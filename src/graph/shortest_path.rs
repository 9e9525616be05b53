//! Single-source shortest paths over non-negative edge weights.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{Edge, Graph, VertexId};

/// Frontier entry for the min-heap.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    vertex: VertexId,
    distance: f64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Shortest accumulated cost from `source` to every vertex of `graph`.
///
/// The result is indexed by `VertexId`; unreachable vertices hold
/// `f64::INFINITY`. `weight` must never return a negative value.
pub fn single_source<P, W>(graph: &Graph<P>, source: VertexId, weight: W) -> Vec<f64>
where
    W: Fn(&Edge<P>) -> f64,
{
    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut visited = vec![false; n];
    if source.index() >= n {
        return dist;
    }

    let mut heap = BinaryHeap::with_capacity(n);
    dist[source.index()] = 0.0;
    heap.push(FrontierEntry { vertex: source, distance: 0.0 });

    let mut settled = 0usize;
    while let Some(FrontierEntry { vertex, distance }) = heap.pop() {
        let u = vertex.index();
        if visited[u] {
            continue;
        }
        // Stale entry: a shorter path was recorded after this one was pushed.
        if distance > dist[u] {
            continue;
        }
        visited[u] = true;
        settled += 1;

        for edge in graph.edges_at(vertex) {
            let v = edge.to.index();
            if visited[v] {
                continue;
            }
            let w = weight(edge);
            debug_assert!(w >= 0.0, "negative edge weight {w}");
            let candidate = dist[u] + w;
            if candidate < dist[v] {
                dist[v] = candidate;
                heap.push(FrontierEntry { vertex: edge.to, distance: candidate });
            }
        }
    }

    tracing::trace!(vertices = n, settled, "single-source pass complete");
    dist
}
