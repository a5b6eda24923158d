use num_traits::Float;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{Error, Result};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of a graph instance.
///
/// Every [`VertexRef`] carries the id of the graph that minted it, so a
/// handle presented to the wrong graph can be detected instead of silently
/// resolving to an unrelated vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(u64);

impl GraphId {
    pub(crate) fn next() -> Self {
        GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Opaque handle to a vertex in a specific graph.
///
/// Identity is the (graph id, arena index) pair; the vertex payload plays no
/// part in it, so two vertices with equal payloads remain distinct and the
/// payload type needs no `Eq` or `Hash` bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexRef {
    pub(crate) graph: GraphId,
    pub(crate) index: usize,
}

impl VertexRef {
    pub(crate) fn new(graph: GraphId, index: usize) -> Self {
        VertexRef { graph, index }
    }

    /// Returns the vertex's arena index (insertion order, 0-based).
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Trait representing the read-only view of a weighted graph
pub trait Graph<W>: Debug
where
    W: Float + Debug,
{
    /// Returns the identity of this graph instance
    fn graph_id(&self) -> GraphId;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of stored edges (mirrored edges count separately)
    fn edge_count(&self) -> usize;

    /// Returns true if edges are one-way only
    fn is_directed(&self) -> bool;

    /// Returns true if the vertex index exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Checks a handle against this graph and returns its arena index
    fn resolve(&self, vertex: VertexRef) -> Result<usize> {
        if vertex.graph == self.graph_id() && self.has_vertex(vertex.index) {
            Ok(vertex.index)
        } else {
            Err(Error::InvalidReference(vertex.index))
        }
    }
}
