use core::fmt;
use core::iter::FusedIterator;

use crate::graph::cursor::{EdgeCursor, PredCursor, SuccCursor, UndirCursor};
use crate::graph::list::Listed;
use crate::graph::Graph;
use crate::handle::{EdgeId, NodeId};

/// Iterator over a node's edges, specialized by a cursor strategy `C`.
///
/// Besides the [`Iterator`] impl (which yields edges) it offers the explicit
/// begin/end protocol: [`edge`](Self::edge), [`node`](Self::node),
/// [`advance`](Self::advance), and equality against the strategy's end
/// iterator. Two iterators are equal iff they sit on the same edge.
pub struct EdgeIter<'g, 'brand, N, E, C> {
    graph: &'g Graph<'brand, N, E>,
    cursor: C,
}

/// Outgoing-edge iterator.
pub type Succs<'g, 'brand, N, E> = EdgeIter<'g, 'brand, N, E, SuccCursor<'brand>>;
/// Incoming-edge iterator.
pub type Preds<'g, 'brand, N, E> = EdgeIter<'g, 'brand, N, E, PredCursor<'brand>>;
/// Incoming-then-outgoing edge iterator.
pub type UndirEdges<'g, 'brand, N, E> = EdgeIter<'g, 'brand, N, E, UndirCursor<'brand>>;

impl<'g, 'brand, N, E, C: EdgeCursor<'brand>> EdgeIter<'g, 'brand, N, E, C> {
    /// Iterator positioned on the first edge of `node`.
    #[inline]
    pub fn begin(graph: &'g Graph<'brand, N, E>, node: NodeId<'brand>) -> Self {
        Self {
            graph,
            cursor: C::begin(graph, node),
        }
    }

    /// The end sentinel: holds no edge.
    #[inline]
    pub fn end(graph: &'g Graph<'brand, N, E>) -> Self {
        Self {
            graph,
            cursor: C::default(),
        }
    }

    /// Current edge, or `None` at the end.
    #[inline]
    pub fn edge(&self) -> Option<EdgeId<'brand>> {
        self.cursor.edge()
    }

    /// Neighbor across the current edge, or `None` at the end.
    #[inline]
    pub fn node(&self) -> Option<NodeId<'brand>> {
        self.cursor.node(self.graph)
    }

    /// Returns `true` once every edge has been visited.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.cursor.edge().is_none()
    }

    /// Steps to the next edge.
    ///
    /// # Panics
    /// In debug builds, panics if the iterator is already at its end.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        debug_assert!(!self.is_end(), "Edge iterator is at end");
        self.cursor.next_edge(self.graph);
        self
    }

    /// The underlying cursor state.
    #[inline]
    pub fn cursor(&self) -> C {
        self.cursor
    }

    /// Adapts the iterator to yield `(edge, neighbor)` pairs.
    #[inline]
    pub fn neighbors(self) -> Neighbors<'g, 'brand, N, E, C> {
        Neighbors { inner: self }
    }
}

impl<'brand, N, E, C: EdgeCursor<'brand>> Iterator for EdgeIter<'_, 'brand, N, E, C> {
    type Item = EdgeId<'brand>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.cursor.edge()?;
        self.cursor.next_edge(self.graph);
        Some(edge)
    }
}

impl<'brand, N, E, C: EdgeCursor<'brand>> FusedIterator for EdgeIter<'_, 'brand, N, E, C> {}

impl<N, E, C: Copy> Clone for EdgeIter<'_, '_, N, E, C> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            cursor: self.cursor,
        }
    }
}

impl<N, E, C: PartialEq> PartialEq for EdgeIter<'_, '_, N, E, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor
    }
}

impl<N, E, C: Eq> Eq for EdgeIter<'_, '_, N, E, C> {}

impl<N, E, C: fmt::Debug> fmt::Debug for EdgeIter<'_, '_, N, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeIter")
            .field("graph", &self.graph.graph_id())
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// `(edge, neighbor)` adapter returned by [`EdgeIter::neighbors`].
pub struct Neighbors<'g, 'brand, N, E, C> {
    inner: EdgeIter<'g, 'brand, N, E, C>,
}

impl<'brand, N, E, C: EdgeCursor<'brand>> Iterator for Neighbors<'_, 'brand, N, E, C> {
    type Item = (EdgeId<'brand>, NodeId<'brand>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.inner.edge()?;
        let node = self.inner.node()?;
        self.inner.cursor.next_edge(self.inner.graph);
        Some((edge, node))
    }
}

impl<'brand, N, E, C: EdgeCursor<'brand>> FusedIterator for Neighbors<'_, 'brand, N, E, C> {}

/// Iterator over the graph's nodes in creation order.
pub struct NodeIter<'g, 'brand, N, E> {
    pub(super) graph: &'g Graph<'brand, N, E>,
    pub(super) current: Option<NodeId<'brand>>,
}

impl<'brand, N, E> Iterator for NodeIter<'_, 'brand, N, E> {
    type Item = NodeId<'brand>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.graph.node(id).links().next;
        Some(id)
    }
}

impl<'brand, N, E> FusedIterator for NodeIter<'_, 'brand, N, E> {}

/// Iterator over the graph's edges in creation order.
pub struct EdgeListIter<'g, 'brand, N, E> {
    pub(super) graph: &'g Graph<'brand, N, E>,
    pub(super) current: Option<EdgeId<'brand>>,
}

impl<'brand, N, E> Iterator for EdgeListIter<'_, 'brand, N, E> {
    type Item = EdgeId<'brand>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.graph.edge(id).links().next;
        Some(id)
    }
}

impl<'brand, N, E> FusedIterator for EdgeListIter<'_, 'brand, N, E> {}
