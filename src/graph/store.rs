use num_traits::Float;
use std::fmt::Debug;

use crate::graph::traits::{Graph, GraphId, VertexRef};
use crate::{Error, Result};

/// A directed edge stored in its origin vertex's adjacency list.
///
/// The destination is an arena index, not a reference, so the graph owns a
/// flat vertex array with no cycles between vertices.
#[derive(Debug, Clone)]
struct Edge<W> {
    to: usize,
    weight: W,
}

#[derive(Debug, Clone)]
struct Vertex<V, W> {
    value: V,
    edges: Vec<Edge<W>>,
}

/// An append-only weighted graph backed by a vertex arena.
///
/// Vertices are created in insertion order and never removed; their index is
/// their position in the arena. An undirected graph mirrors every inserted
/// edge, which doubles storage but keeps traversal directed-only.
///
/// The store holds no per-run algorithm state, so shared references can serve
/// any number of concurrent shortest-path queries.
#[derive(Debug)]
pub struct GraphStore<V, W = f64>
where
    W: Float + Debug,
{
    id: GraphId,
    directed: bool,
    vertices: Vec<Vertex<V, W>>,
}

impl<V, W> GraphStore<V, W>
where
    V: Debug,
    W: Float + Debug,
{
    /// Creates a new empty graph
    pub fn new(directed: bool) -> Self {
        GraphStore {
            id: GraphId::next(),
            directed,
            vertices: Vec::new(),
        }
    }

    /// Creates a new empty directed graph
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates a new empty undirected graph
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Appends a vertex with the given payload and returns its handle.
    ///
    /// Payloads are stored as-is with no deduplication; two vertices may
    /// carry equal payloads and remain distinct by index.
    pub fn add_vertex(&mut self, value: V) -> VertexRef {
        let index = self.vertices.len();
        self.vertices.push(Vertex {
            value,
            edges: Vec::new(),
        });
        VertexRef::new(self.id, index)
    }

    /// Adds an edge from `from` to `to` with the given weight.
    ///
    /// In an undirected graph a mirrored edge `to -> from` with the same
    /// weight is appended as well. Self-loops are permitted. A `+infinity`
    /// weight is stored literally; negative weights are rejected.
    pub fn add_edge(&mut self, from: VertexRef, to: VertexRef, weight: W) -> Result<()> {
        let f = self.resolve(from)?;
        let t = self.resolve(to)?;

        if weight < W::zero() {
            return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }

        self.vertices[f].edges.push(Edge { to: t, weight });
        if !self.directed {
            self.vertices[t].edges.push(Edge { to: f, weight });
        }
        Ok(())
    }

    /// Adds an edge without a weight, stored as `+infinity`.
    ///
    /// Such an edge is structurally present but never improves a finite
    /// route, so the shortest-path engine treats it as "no real connection".
    pub fn add_edge_unweighted(&mut self, from: VertexRef, to: VertexRef) -> Result<()> {
        self.add_edge(from, to, W::infinity())
    }

    /// Returns the payload of a vertex
    pub fn value(&self, vertex: VertexRef) -> Result<&V> {
        let index = self.resolve(vertex)?;
        Ok(&self.vertices[index].value)
    }

    /// Returns true if the handle belongs to this graph
    pub fn contains(&self, vertex: VertexRef) -> bool {
        self.resolve(vertex).is_ok()
    }

    /// Returns an iterator over all vertex handles in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = VertexRef> + '_ {
        (0..self.vertices.len()).map(move |index| VertexRef::new(self.id, index))
    }

    /// Returns an iterator over the outgoing edges of a vertex as
    /// `(destination handle, weight)` pairs
    pub fn edges(&self, vertex: VertexRef) -> Result<impl Iterator<Item = (VertexRef, W)> + '_> {
        let index = self.resolve(vertex)?;
        Ok(self.vertices[index]
            .edges
            .iter()
            .map(move |edge| (VertexRef::new(self.id, edge.to), edge.weight)))
    }
}

impl<V, W> Graph<W> for GraphStore<V, W>
where
    V: Debug,
    W: Float + Debug,
{
    fn graph_id(&self) -> GraphId {
        self.id
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.iter().map(|vertex| vertex.edges.len()).sum()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertices.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.vertices.get(vertex) {
            Some(v) => Box::new(v.edges.iter().map(|edge| (edge.to, edge.weight))),
            None => Box::new(std::iter::empty()),
        }
    }
}
