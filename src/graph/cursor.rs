//! Cursor strategies for walking a node's edge chains.
//!
//! A cursor is the direction-specific half of an [`EdgeIter`](super::EdgeIter):
//! it knows where to start, how to step, and which endpoint of the current
//! edge is the neighbor. The iterator is generic over the cursor, so each
//! strategy compiles to its own monomorphic loop.
//!
//! `Default` is the end sentinel for every strategy.

use crate::graph::Graph;
use crate::handle::{Direction, EdgeId, NodeId};

/// Traversal strategy over one node's edge chains.
pub trait EdgeCursor<'brand>: Copy + Default + Eq {
    /// Cursor positioned on the first edge of `node` for this strategy.
    fn begin<N, E>(graph: &Graph<'brand, N, E>, node: NodeId<'brand>) -> Self;

    /// Current edge, or `None` at the end.
    fn edge(&self) -> Option<EdgeId<'brand>>;

    /// Neighbor reached through the current edge, or `None` at the end.
    fn node<N, E>(&self, graph: &Graph<'brand, N, E>) -> Option<NodeId<'brand>>;

    /// Steps to the next edge.
    ///
    /// Advancing an end cursor is a caller bug; it is asserted in debug builds
    /// and a no-op otherwise.
    fn next_edge<N, E>(&mut self, graph: &Graph<'brand, N, E>);
}

macro_rules! chain_cursor {
    ($(#[$meta:meta])* $name:ident, $dir:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name<'brand> {
            edge: Option<EdgeId<'brand>>,
        }

        impl<'brand> EdgeCursor<'brand> for $name<'brand> {
            #[inline]
            fn begin<N, E>(graph: &Graph<'brand, N, E>, node: NodeId<'brand>) -> Self {
                Self {
                    edge: graph.node(node).first_edge($dir),
                }
            }

            #[inline]
            fn edge(&self) -> Option<EdgeId<'brand>> {
                self.edge
            }

            #[inline]
            fn node<N, E>(&self, graph: &Graph<'brand, N, E>) -> Option<NodeId<'brand>> {
                self.edge.map(|e| graph.edge(e).node_in_dir($dir))
            }

            #[inline]
            fn next_edge<N, E>(&mut self, graph: &Graph<'brand, N, E>) {
                debug_assert!(self.edge.is_some(), "Edge iterator is at end");
                if let Some(current) = self.edge {
                    self.edge = graph.edge(current).next_in($dir);
                }
            }
        }
    };
}

chain_cursor!(
    /// Walks outgoing edges; the neighbor is each edge's successor.
    SuccCursor,
    Direction::Down
);

chain_cursor!(
    /// Walks incoming edges; the neighbor is each edge's predecessor.
    PredCursor,
    Direction::Up
);

/// Walks all incident edges regardless of direction.
///
/// The incoming chain is visited first (neighbor = predecessor), then the
/// outgoing chain (neighbor = successor). No combined list is built; the
/// cursor switches chains when the incoming one runs out.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndirCursor<'brand> {
    edge: Option<EdgeId<'brand>>,
    is_pred: bool,
}

impl<'brand> UndirCursor<'brand> {
    /// Whether the cursor is still in the incoming phase.
    #[inline]
    pub fn in_pred_phase(&self) -> bool {
        self.is_pred && self.edge.is_some()
    }
}

impl<'brand> EdgeCursor<'brand> for UndirCursor<'brand> {
    #[inline]
    fn begin<N, E>(graph: &Graph<'brand, N, E>, node: NodeId<'brand>) -> Self {
        let record = graph.node(node);
        match record.first_pred() {
            Some(edge) => Self {
                edge: Some(edge),
                is_pred: true,
            },
            None => Self {
                edge: record.first_succ(),
                is_pred: false,
            },
        }
    }

    #[inline]
    fn edge(&self) -> Option<EdgeId<'brand>> {
        self.edge
    }

    #[inline]
    fn node<N, E>(&self, graph: &Graph<'brand, N, E>) -> Option<NodeId<'brand>> {
        let edge = graph.edge(self.edge?);
        Some(if self.is_pred { edge.pred() } else { edge.succ() })
    }

    #[inline]
    fn next_edge<N, E>(&mut self, graph: &Graph<'brand, N, E>) {
        debug_assert!(self.edge.is_some(), "Edge iterator is at end");
        let Some(current) = self.edge else {
            return;
        };
        let edge = graph.edge(current);

        if self.is_pred {
            match edge.next_pred() {
                Some(next) => self.edge = Some(next),
                None => {
                    // An incoming edge's successor is the node being iterated.
                    self.is_pred = false;
                    self.edge = graph.node(edge.succ()).first_succ();
                }
            }
        } else {
            self.edge = edge.next_succ();
        }
    }
}

// Equality is by edge identity only; the phase flag is not part of it.
impl PartialEq for UndirCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.edge == other.edge
    }
}

impl Eq for UndirCursor<'_> {}
