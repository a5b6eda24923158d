use num_traits::Float;
use std::fmt::Debug;

use crate::graph::{Graph, GraphId, VertexRef};
use crate::{Error, Result};

/// Result of one shortest-path run from a fixed source.
///
/// All per-run state lives here rather than on the graph's vertices: best
/// known distances, the full vertex sequence of the best route to each
/// vertex, and which vertices the run settled. The graph itself stays
/// untouched, so independent runs over the same graph never interfere.
#[derive(Debug, Clone)]
pub struct ShortestPaths<W>
where
    W: Float + Debug,
{
    graph: GraphId,
    source: usize,
    /// Best known cost per vertex; `None` means unreachable
    pub(crate) distances: Vec<Option<W>>,
    /// Route from source to each vertex as arena indices; empty means unset
    pub(crate) paths: Vec<Vec<usize>>,
    /// Vertices whose distance the run finalized
    pub(crate) visited: Vec<bool>,
}

impl<W> ShortestPaths<W>
where
    W: Float + Debug,
{
    pub(crate) fn new(graph: GraphId, source: usize, vertex_count: usize) -> Self {
        ShortestPaths {
            graph,
            source,
            distances: vec![None; vertex_count],
            paths: vec![Vec::new(); vertex_count],
            visited: vec![false; vertex_count],
        }
    }

    /// Returns the source vertex of this run
    pub fn source(&self) -> VertexRef {
        VertexRef::new(self.graph, self.source)
    }

    fn resolve(&self, vertex: VertexRef) -> Result<usize> {
        if vertex.graph == self.graph && vertex.index < self.distances.len() {
            Ok(vertex.index)
        } else {
            Err(Error::InvalidReference(vertex.index))
        }
    }

    /// Returns the cost of the best route to a vertex, or `None` if the
    /// vertex is unreachable from the source
    pub fn distance(&self, vertex: VertexRef) -> Result<Option<W>> {
        let index = self.resolve(vertex)?;
        Ok(self.distances[index])
    }

    /// Returns the best route to a vertex as a vertex sequence starting at
    /// the source, or `None` if the vertex is unreachable
    pub fn path(&self, vertex: VertexRef) -> Result<Option<Vec<VertexRef>>> {
        let index = self.resolve(vertex)?;
        if self.distances[index].is_none() {
            return Ok(None);
        }
        Ok(Some(
            self.paths[index]
                .iter()
                .map(|&i| VertexRef::new(self.graph, i))
                .collect(),
        ))
    }

    /// Returns true if the run settled this vertex
    pub fn visited(&self, vertex: VertexRef) -> Result<bool> {
        let index = self.resolve(vertex)?;
        Ok(self.visited[index])
    }

    /// Returns the total cost and vertex sequence of the best route to
    /// `destination`, or [`Error::Unreachable`] if no route exists
    pub fn route(&self, destination: VertexRef) -> Result<(W, Vec<VertexRef>)> {
        let index = self.resolve(destination)?;
        match self.distances[index] {
            Some(total) => {
                let sequence = self.paths[index]
                    .iter()
                    .map(|&i| VertexRef::new(self.graph, i))
                    .collect();
                Ok((total, sequence))
            }
            None => Err(Error::Unreachable {
                from: self.source,
                destination: index,
            }),
        }
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: VertexRef) -> Result<ShortestPaths<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute the shortest path between two vertices.
    ///
    /// Always recomputes from `source`; results are not cached across calls.
    /// An unreachable destination is reported as [`Error::Unreachable`], never
    /// as an infinite cost in a successful result.
    fn find_path(
        &self,
        graph: &G,
        source: VertexRef,
        destination: VertexRef,
    ) -> Result<(W, Vec<VertexRef>)> {
        graph.resolve(destination)?;
        let run = self.compute_shortest_paths(graph, source)?;
        run.route(destination)
    }
}
