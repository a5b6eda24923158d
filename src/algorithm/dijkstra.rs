use log::{debug, trace};
use num_traits::Float;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPaths};
use crate::data_structures::MinQueue;
use crate::graph::{Graph, VertexRef};
use crate::Result;

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: VertexRef) -> Result<ShortestPaths<W>> {
        let src = graph.resolve(source)?;
        let n = graph.vertex_count();

        let mut run = ShortestPaths::new(graph.graph_id(), src, n);
        run.distances[src] = Some(W::zero());
        run.paths[src] = vec![src];

        // Frontier ordered by (distance, index): the global minimum-distance
        // unvisited vertex is settled next, ties broken by lowest index.
        let mut queue = MinQueue::new();
        queue.push(src, OrderedFloat(W::zero()));

        while let Some((u, OrderedFloat(dist_u))) = queue.pop() {
            // Stale entry for an already settled vertex
            if run.visited[u] {
                continue;
            }
            run.visited[u] = true;
            trace!("settled vertex {} at distance {:?}", u, dist_u);

            // Relax outgoing edges toward unvisited neighbors. A candidate of
            // +infinity (an unweighted edge) is never strictly smaller than
            // the neighbor's distance, so it propagates nothing.
            for (v, weight) in graph.outgoing_edges(u) {
                if run.visited[v] {
                    continue;
                }
                let candidate = dist_u + weight;
                let improves = match run.distances[v] {
                    None => candidate < W::infinity(),
                    Some(current) => candidate < current,
                };
                if improves {
                    run.distances[v] = Some(candidate);
                    // Fresh copy; the neighbor's route must never alias ours
                    let mut path = run.paths[u].clone();
                    path.push(v);
                    run.paths[v] = path;
                    queue.push(v, OrderedFloat(candidate));
                }
            }
        }

        debug!(
            "dijkstra from {} settled {}/{} vertices",
            src,
            run.visited.iter().filter(|&&v| v).count(),
            n
        );
        Ok(run)
    }
}
