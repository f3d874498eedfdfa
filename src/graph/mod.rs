//! The graph container.
//!
//! Vertical split:
//! - `node` / `edge`: the records, each carrying its intrusive links
//! - `list`: graph-global insertion-ordered node and edge lists
//! - `cursor`: successor / predecessor / undirected traversal strategies
//! - `iter`: the generic iterator adapter plus graph-list iterators
//! - `tests`: module tests
//!
//! # Performance
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `new_node` | \(O(1)\) amortized | arena slot + list append |
//! | `new_edge` | \(O(1)\) amortized | pushed at the head of both chains |
//! | `remove_outgoing` / `remove_incoming` | \(O(1)\) | head pop only |
//! | `delete_edge` | \(O(\text{degree})\) | chains are singly linked |
//! | `delete_node` | \(O(1)\) | rejected while edges remain |
//! | `first_outgoing` / `first_incoming` | \(O(1)\) | |
//! | iteration | \(O(\text{degree})\) | no allocation |

use core::fmt;
use core::marker::PhantomData;
use core::mem;

use crate::arena::Arena;
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::handle::{ArenaHandle, Brand, Direction, EdgeId, GraphId, NodeId, Uid};
use crate::payload::ExternalId;

mod cursor;
mod edge;
mod iter;
mod list;
mod node;
#[cfg(test)]
mod tests;

pub use cursor::{EdgeCursor, PredCursor, SuccCursor, UndirCursor};
pub use edge::Edge;
pub use iter::{EdgeIter, EdgeListIter, Neighbors, NodeIter, Preds, Succs, UndirEdges};
pub use node::Node;

use list::{ListEnds, Listed};

/// A directed graph built on intrusive per-direction edge chains.
///
/// Every edge is spliced into its predecessor's outgoing chain and its
/// successor's incoming chain; nodes only store the two chain heads. New edges
/// always become the head, so each chain iterates most-recent-first.
///
/// The graph is the sole owner of its nodes and edges and the only way to
/// create or destroy them. Handles are branded with `'brand`, which is unique
/// per graph (see [`Graph::scope`]), so a handle can never be used with a
/// different graph. Mutation requires `&mut self`.
pub struct Graph<'brand, N = (), E = ()> {
    id: GraphId,
    config: GraphConfig,
    nodes: Arena<Node<'brand, N>>,
    edges: Arena<Edge<'brand, E>>,
    node_list: ListEnds<NodeId<'brand>>,
    edge_list: ListEnds<EdgeId<'brand>>,
    next_uid: Uid,
    _brand: Brand<'brand>,
}

impl<N, E> Graph<'_, N, E> {
    /// Creates an empty graph with a fresh brand and runs `f` with it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use showgraph::Graph;
    ///
    /// let order = Graph::<(), ()>::scope(|mut graph| {
    ///     let a = graph.new_node(());
    ///     let b = graph.new_node(());
    ///     let e1 = graph.new_edge(a, b, ());
    ///     let e2 = graph.new_edge(a, b, ());
    ///     let succs: Vec<_> = graph.succs(a).collect();
    ///     succs == vec![e2, e1]
    /// });
    /// assert!(order);
    /// ```
    pub fn scope<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(Graph<'new_brand, N, E>) -> R,
    {
        Self::scope_with(GraphConfig::default(), f)
    }

    /// Like [`Graph::scope`], with explicit options.
    pub fn scope_with<F, R>(config: GraphConfig, f: F) -> R
    where
        F: for<'new_brand> FnOnce(Graph<'new_brand, N, E>) -> R,
    {
        let graph = Graph {
            id: GraphId::fresh(),
            nodes: Arena::with_capacity(config.node_capacity),
            edges: Arena::with_capacity(config.edge_capacity),
            node_list: ListEnds::new(),
            edge_list: ListEnds::new(),
            next_uid: Uid::FIRST,
            config,
            _brand: PhantomData,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(graph = %graph.id, "graph created");
        f(graph)
    }
}

impl<'brand, N, E> Graph<'brand, N, E> {
    /// Process-unique identity of this graph.
    #[inline]
    pub fn graph_id(&self) -> GraphId {
        self.id
    }

    /// Options the graph was created with.
    #[inline]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of live nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes (and therefore no edges).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// The identifier the next created node or edge will receive.
    #[inline]
    pub fn peek_uid(&self) -> Uid {
        self.next_uid
    }

    fn allocate_uid(&mut self) -> Uid {
        let uid = self.next_uid;
        self.next_uid = uid.successor();
        uid
    }

    // ------------------------------------------------------------------
    // Creation / destruction
    // ------------------------------------------------------------------

    /// Creates a node and appends it to the graph's node list.
    pub fn new_node(&mut self, payload: N) -> NodeId<'brand> {
        let uid = self.allocate_uid();
        let id = NodeId::from_raw(self.nodes.alloc(Node::new(self.id, uid, payload)));
        self.node_list.push_back(&mut self.nodes, id);
        #[cfg(feature = "tracing")]
        tracing::trace!(graph = %self.id, node = %uid, "node created");
        id
    }

    /// Like [`Graph::new_node`], then mirrors the new [`Uid`] into the payload.
    pub fn new_node_with_id(&mut self, payload: N) -> NodeId<'brand>
    where
        N: ExternalId,
    {
        let id = self.new_node(payload);
        self.refresh_node_id(id);
        id
    }

    /// Creates an edge `pred -> succ`.
    ///
    /// The edge becomes the head of `pred`'s outgoing chain and of `succ`'s
    /// incoming chain, and is appended to the graph's edge list.
    ///
    /// # Panics
    /// Panics if either endpoint is not a live node of this graph.
    pub fn new_edge(&mut self, pred: NodeId<'brand>, succ: NodeId<'brand>, payload: E) -> EdgeId<'brand> {
        assert!(self.contains_node(pred), "new_edge: predecessor {pred:?} is not a live node");
        assert!(self.contains_node(succ), "new_edge: successor {succ:?} is not a live node");

        let uid = self.allocate_uid();
        let id = EdgeId::from_raw(self.edges.alloc(Edge::new(self.id, uid, pred, succ, payload)));
        self.add_outgoing(pred, id);
        self.add_incoming(succ, id);
        self.node_record_mut(pred).add_incident(Direction::Down);
        self.node_record_mut(succ).add_incident(Direction::Up);
        self.edge_list.push_back(&mut self.edges, id);
        #[cfg(feature = "tracing")]
        tracing::trace!(graph = %self.id, edge = %uid, pred = %self.node(pred).uid(), succ = %self.node(succ).uid(), "edge created");
        id
    }

    /// Like [`Graph::new_edge`], then mirrors the new [`Uid`] into the payload.
    ///
    /// # Panics
    /// See [`Graph::new_edge`].
    pub fn new_edge_with_id(&mut self, pred: NodeId<'brand>, succ: NodeId<'brand>, payload: E) -> EdgeId<'brand>
    where
        E: ExternalId,
    {
        let id = self.new_edge(pred, succ, payload);
        self.refresh_edge_id(id);
        id
    }

    /// Removes an edge from both of its chains and from the graph.
    ///
    /// Unlike the node-level head pops this handles interior edges: chains are
    /// singly linked, so the predecessor in each chain is found by a scan.
    ///
    /// # Errors
    /// [`GraphError::StaleEdge`] if `edge` was already deleted.
    pub fn delete_edge(&mut self, edge: EdgeId<'brand>) -> Result<E> {
        let record = self.try_edge(edge).ok_or(GraphError::StaleEdge)?;
        let (pred, succ) = (record.pred(), record.succ());

        let spliced = self.unlink_from_chain(pred, edge, Direction::Down)
            & self.unlink_from_chain(succ, edge, Direction::Up);
        debug_assert!(spliced, "linked edge missing from its chain");
        self.node_record_mut(pred).remove_incident(Direction::Down);
        self.node_record_mut(succ).remove_incident(Direction::Up);
        self.edge_list.unlink(&mut self.edges, edge);

        let record = self.edges.free(edge.raw()).ok_or(GraphError::StaleEdge)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(graph = %self.id, edge = %record.uid(), "edge deleted");
        Ok(record.into_payload())
    }

    /// Removes a node that has no edges left.
    ///
    /// Edges popped off the node's chains still count: they stay in the graph,
    /// endpoints included, until [`Graph::delete_edge`].
    ///
    /// # Errors
    /// - [`GraphError::StaleNode`] if `node` was already deleted.
    /// - [`GraphError::NodeHasEdges`] if any live edge starts or ends at
    ///   `node`; the graph is left unchanged.
    pub fn delete_node(&mut self, node: NodeId<'brand>) -> Result<N> {
        let record = self.try_node(node).ok_or(GraphError::StaleNode)?;
        if record.has_edges() {
            let err = GraphError::NodeHasEdges {
                node: record.uid(),
                incoming: record.incident_edges(Direction::Up),
                outgoing: record.incident_edges(Direction::Down),
            };
            #[cfg(feature = "tracing")]
            tracing::debug!(graph = %self.id, error = %err, "node deletion rejected");
            return Err(err);
        }

        self.node_list.unlink(&mut self.nodes, node);
        let record = self.nodes.free(node.raw()).ok_or(GraphError::StaleNode)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(graph = %self.id, node = %record.uid(), "node deleted");
        Ok(record.into_payload())
    }

    /// Deletes every edge incident to `node`, then the node itself.
    ///
    /// Chained edges go first; edges popped off the chains are found by a
    /// walk of the global edge list, which only happens if any remain.
    ///
    /// # Errors
    /// [`GraphError::StaleNode`] if `node` was already deleted.
    pub fn delete_node_cascade(&mut self, node: NodeId<'brand>) -> Result<N> {
        if !self.contains_node(node) {
            return Err(GraphError::StaleNode);
        }
        for dir in Direction::ALL {
            while let Some(edge) = self.node(node).first_edge(dir) {
                self.delete_edge(edge)?;
            }
        }
        if self.node(node).has_edges() {
            let popped: Vec<_> = self
                .edges()
                .filter(|&e| {
                    let record = self.edge(e);
                    record.pred() == node || record.succ() == node
                })
                .collect();
            for edge in popped {
                self.delete_edge(edge)?;
            }
        }
        self.delete_node(node)
    }

    // ------------------------------------------------------------------
    // Chain primitives
    // ------------------------------------------------------------------

    /// Pushes `edge` onto the front of `node`'s outgoing chain.
    ///
    /// [`Graph::new_edge`] already does this; the primitive is public for
    /// callers that pop and re-push edges themselves.
    ///
    /// # Panics
    /// Panics on a stale handle. In debug builds also panics if `node` is not
    /// the edge's predecessor or the edge is already on this chain.
    #[inline]
    pub fn add_outgoing(&mut self, node: NodeId<'brand>, edge: EdgeId<'brand>) {
        self.add_edge_in_dir(node, edge, Direction::Down);
    }

    /// Pushes `edge` onto the front of `node`'s incoming chain.
    ///
    /// # Panics
    /// As [`Graph::add_outgoing`], with `node` required to be the successor.
    #[inline]
    pub fn add_incoming(&mut self, node: NodeId<'brand>, edge: EdgeId<'brand>) {
        self.add_edge_in_dir(node, edge, Direction::Up);
    }

    /// Pushes `edge` onto the front of `node`'s `dir` chain.
    ///
    /// # Panics
    /// See [`Graph::add_outgoing`].
    pub fn add_edge_in_dir(&mut self, node: NodeId<'brand>, edge: EdgeId<'brand>, dir: Direction) {
        let head = self.node(node).first_edge(dir);
        debug_assert!(head != Some(edge), "edge is already the head of the {dir} chain");

        let record = self.edge_record_mut(edge);
        debug_assert!(
            record.chain_owner(dir) == node,
            "edge {} does not belong on the {dir} chain of {node:?}",
            record.uid()
        );
        record.attach(dir, head);
        self.node_record_mut(node).set_first(dir, Some(edge));
    }

    /// Head of `node`'s outgoing chain.
    #[inline]
    pub fn first_outgoing(&self, node: NodeId<'brand>) -> Option<EdgeId<'brand>> {
        self.node(node).first_succ()
    }

    /// Head of `node`'s incoming chain.
    #[inline]
    pub fn first_incoming(&self, node: NodeId<'brand>) -> Option<EdgeId<'brand>> {
        self.node(node).first_pred()
    }

    /// Head of `node`'s `dir` chain.
    #[inline]
    pub fn first_edge_in_dir(&self, node: NodeId<'brand>, dir: Direction) -> Option<EdgeId<'brand>> {
        self.node(node).first_edge(dir)
    }

    /// Pops `edge` off the front of `node`'s outgoing chain.
    ///
    /// # Errors
    /// See [`Graph::remove_edge_in_dir`].
    #[inline]
    pub fn remove_outgoing(&mut self, node: NodeId<'brand>, edge: EdgeId<'brand>) -> Result<()> {
        self.remove_edge_in_dir(node, edge, Direction::Down)
    }

    /// Pops `edge` off the front of `node`'s incoming chain.
    ///
    /// # Errors
    /// See [`Graph::remove_edge_in_dir`].
    #[inline]
    pub fn remove_incoming(&mut self, node: NodeId<'brand>, edge: EdgeId<'brand>) -> Result<()> {
        self.remove_edge_in_dir(node, edge, Direction::Up)
    }

    /// Pops `edge` off the front of `node`'s `dir` chain.
    ///
    /// Only the head can be popped: the head moves to the edge's next link and
    /// the edge leaves the chain (it stays in the graph). For any other edge
    /// the chain is left untouched; use [`Graph::delete_edge`] to remove an
    /// interior edge.
    ///
    /// # Errors
    /// - [`GraphError::StaleNode`] / [`GraphError::StaleEdge`] for deleted handles.
    /// - [`GraphError::NotChainHead`] if `edge` is not the head and the graph
    ///   was configured with `strict_removal` (the default). Otherwise the
    ///   call is a silent no-op.
    pub fn remove_edge_in_dir(
        &mut self,
        node: NodeId<'brand>,
        edge: EdgeId<'brand>,
        dir: Direction,
    ) -> Result<()> {
        let node_record = self.try_node(node).ok_or(GraphError::StaleNode)?;
        let head = node_record.first_edge(dir);
        let node_uid = node_record.uid();
        let edge_uid = self.try_edge(edge).ok_or(GraphError::StaleEdge)?.uid();

        if head == Some(edge) {
            let next = self.edge_record_mut(edge).detach(dir);
            self.node_record_mut(node).set_first(dir, next);
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(graph = %self.id, node = %node_uid, edge = %edge_uid, %dir, "removal of non-head edge ignored");
        if self.config.strict_removal {
            Err(GraphError::NotChainHead {
                node: node_uid,
                edge: edge_uid,
                dir,
            })
        } else {
            Ok(())
        }
    }

    /// Scan-and-splice removal of `edge` from `node`'s `dir` chain.
    ///
    /// Returns `false` if the edge claims to be linked but is not on the chain.
    fn unlink_from_chain(&mut self, node: NodeId<'brand>, edge: EdgeId<'brand>, dir: Direction) -> bool {
        if !self.edge(edge).is_linked(dir) {
            return true;
        }

        let mut prev: Option<EdgeId<'brand>> = None;
        let mut current = self.node(node).first_edge(dir);
        while let Some(idx) = current {
            let next = self.edge(idx).next_in(dir);
            if idx == edge {
                match prev {
                    Some(p) => self.edge_record_mut(p).set_next(dir, next),
                    None => self.node_record_mut(node).set_first(dir, next),
                }
                self.edge_record_mut(edge).detach(dir);
                return true;
            }
            prev = Some(idx);
            current = next;
        }
        false
    }

    // ------------------------------------------------------------------
    // Iteration
    // ------------------------------------------------------------------

    /// Outgoing edges of `node`, most recent first.
    #[inline]
    pub fn succs(&self, node: NodeId<'brand>) -> Succs<'_, 'brand, N, E> {
        EdgeIter::begin(self, node)
    }

    /// End iterator matching [`Graph::succs`].
    #[inline]
    pub fn succs_end(&self) -> Succs<'_, 'brand, N, E> {
        EdgeIter::end(self)
    }

    /// Incoming edges of `node`, most recent first.
    #[inline]
    pub fn preds(&self, node: NodeId<'brand>) -> Preds<'_, 'brand, N, E> {
        EdgeIter::begin(self, node)
    }

    /// End iterator matching [`Graph::preds`].
    #[inline]
    pub fn preds_end(&self) -> Preds<'_, 'brand, N, E> {
        EdgeIter::end(self)
    }

    /// All edges of `node`: incoming first, then outgoing.
    #[inline]
    pub fn undirected(&self, node: NodeId<'brand>) -> UndirEdges<'_, 'brand, N, E> {
        EdgeIter::begin(self, node)
    }

    /// End iterator matching [`Graph::undirected`].
    #[inline]
    pub fn undirected_end(&self) -> UndirEdges<'_, 'brand, N, E> {
        EdgeIter::end(self)
    }

    /// Length of `node`'s outgoing chain.
    pub fn out_degree(&self, node: NodeId<'brand>) -> usize {
        self.succs(node).count()
    }

    /// Length of `node`'s incoming chain.
    pub fn in_degree(&self, node: NodeId<'brand>) -> usize {
        self.preds(node).count()
    }

    /// All nodes in creation order.
    #[inline]
    pub fn nodes(&self) -> NodeIter<'_, 'brand, N, E> {
        NodeIter {
            graph: self,
            current: self.node_list.head(),
        }
    }

    /// All edges in creation order.
    #[inline]
    pub fn edges(&self) -> EdgeListIter<'_, 'brand, N, E> {
        EdgeListIter {
            graph: self,
            current: self.edge_list.head(),
        }
    }

    /// Oldest live node.
    #[inline]
    pub fn first_node(&self) -> Option<NodeId<'brand>> {
        self.node_list.head()
    }

    /// Newest live node.
    #[inline]
    pub fn last_node(&self) -> Option<NodeId<'brand>> {
        self.node_list.tail()
    }

    /// Oldest live edge.
    #[inline]
    pub fn first_edge(&self) -> Option<EdgeId<'brand>> {
        self.edge_list.head()
    }

    /// Newest live edge.
    #[inline]
    pub fn last_edge(&self) -> Option<EdgeId<'brand>> {
        self.edge_list.tail()
    }

    // ------------------------------------------------------------------
    // Record access
    // ------------------------------------------------------------------

    /// Returns `true` if `node` is live.
    #[inline]
    pub fn contains_node(&self, node: NodeId<'brand>) -> bool {
        self.nodes.contains(node.raw())
    }

    /// Returns `true` if `edge` is live.
    #[inline]
    pub fn contains_edge(&self, edge: EdgeId<'brand>) -> bool {
        self.edges.contains(edge.raw())
    }

    /// Node record, or `None` for a deleted node.
    #[inline]
    pub fn try_node(&self, node: NodeId<'brand>) -> Option<&Node<'brand, N>> {
        self.nodes.get(node.raw())
    }

    /// Edge record, or `None` for a deleted edge.
    #[inline]
    pub fn try_edge(&self, edge: EdgeId<'brand>) -> Option<&Edge<'brand, E>> {
        self.edges.get(edge.raw())
    }

    /// Node record.
    ///
    /// # Panics
    /// Panics if `node` was deleted.
    #[inline]
    #[track_caller]
    pub fn node(&self, node: NodeId<'brand>) -> &Node<'brand, N> {
        match self.try_node(node) {
            Some(record) => record,
            None => stale_handle(node),
        }
    }

    /// Edge record.
    ///
    /// # Panics
    /// Panics if `edge` was deleted.
    #[inline]
    #[track_caller]
    pub fn edge(&self, edge: EdgeId<'brand>) -> &Edge<'brand, E> {
        match self.try_edge(edge) {
            Some(record) => record,
            None => stale_handle(edge),
        }
    }

    #[track_caller]
    fn node_record_mut(&mut self, node: NodeId<'brand>) -> &mut Node<'brand, N> {
        match self.nodes.get_mut(node.raw()) {
            Some(record) => record,
            None => stale_handle(node),
        }
    }

    #[track_caller]
    fn edge_record_mut(&mut self, edge: EdgeId<'brand>) -> &mut Edge<'brand, E> {
        match self.edges.get_mut(edge.raw()) {
            Some(record) => record,
            None => stale_handle(edge),
        }
    }

    // ------------------------------------------------------------------
    // Payloads
    // ------------------------------------------------------------------

    /// Node payload.
    ///
    /// # Panics
    /// Panics if `node` was deleted.
    #[inline]
    #[track_caller]
    pub fn node_payload(&self, node: NodeId<'brand>) -> &N {
        self.node(node).payload()
    }

    /// Mutable node payload.
    ///
    /// # Panics
    /// Panics if `node` was deleted.
    #[inline]
    #[track_caller]
    pub fn node_payload_mut(&mut self, node: NodeId<'brand>) -> &mut N {
        self.node_record_mut(node).payload_mut()
    }

    /// Replaces the node payload, returning the old one.
    ///
    /// # Panics
    /// Panics if `node` was deleted.
    #[track_caller]
    pub fn set_node_payload(&mut self, node: NodeId<'brand>, payload: N) -> N {
        mem::replace(self.node_payload_mut(node), payload)
    }

    /// Replaces the node payload and mirrors the node's [`Uid`] into the new one.
    ///
    /// # Panics
    /// Panics if `node` was deleted.
    #[track_caller]
    pub fn set_node_payload_with_id(&mut self, node: NodeId<'brand>, payload: N) -> N
    where
        N: ExternalId,
    {
        let old = self.set_node_payload(node, payload);
        self.refresh_node_id(node);
        old
    }

    /// Edge payload.
    ///
    /// # Panics
    /// Panics if `edge` was deleted.
    #[inline]
    #[track_caller]
    pub fn edge_payload(&self, edge: EdgeId<'brand>) -> &E {
        self.edge(edge).payload()
    }

    /// Mutable edge payload.
    ///
    /// # Panics
    /// Panics if `edge` was deleted.
    #[inline]
    #[track_caller]
    pub fn edge_payload_mut(&mut self, edge: EdgeId<'brand>) -> &mut E {
        self.edge_record_mut(edge).payload_mut()
    }

    /// Replaces the edge payload, returning the old one.
    ///
    /// # Panics
    /// Panics if `edge` was deleted.
    #[track_caller]
    pub fn set_edge_payload(&mut self, edge: EdgeId<'brand>, payload: E) -> E {
        mem::replace(self.edge_payload_mut(edge), payload)
    }

    /// Replaces the edge payload and mirrors the edge's [`Uid`] into the new one.
    ///
    /// # Panics
    /// Panics if `edge` was deleted.
    #[track_caller]
    pub fn set_edge_payload_with_id(&mut self, edge: EdgeId<'brand>, payload: E) -> E
    where
        E: ExternalId,
    {
        let old = self.set_edge_payload(edge, payload);
        self.refresh_edge_id(edge);
        old
    }

    /// Writes the node's [`Uid`] into its payload's mirrored id.
    ///
    /// Creation does not do this implicitly; use the `*_with_id` variants or
    /// call this after assigning a payload.
    ///
    /// # Panics
    /// Panics if `node` was deleted.
    #[track_caller]
    pub fn refresh_node_id(&mut self, node: NodeId<'brand>)
    where
        N: ExternalId,
    {
        let record = self.node_record_mut(node);
        let uid = record.uid();
        record.payload_mut().refresh_id(uid);
    }

    /// Writes the edge's [`Uid`] into its payload's mirrored id.
    ///
    /// # Panics
    /// Panics if `edge` was deleted.
    #[track_caller]
    pub fn refresh_edge_id(&mut self, edge: EdgeId<'brand>)
    where
        E: ExternalId,
    {
        let record = self.edge_record_mut(edge);
        let uid = record.uid();
        record.payload_mut().refresh_id(uid);
    }

    /// Refreshes the mirrored id of every node and edge payload.
    pub fn refresh_all_ids(&mut self)
    where
        N: ExternalId,
        E: ExternalId,
    {
        let mut next = self.first_node();
        while let Some(node) = next {
            self.refresh_node_id(node);
            next = self.node(node).next_node();
        }
        let mut next = self.first_edge();
        while let Some(edge) = next {
            self.refresh_edge_id(edge);
            next = self.edge_list_next(edge);
        }
    }

    fn edge_list_next(&self, edge: EdgeId<'brand>) -> Option<EdgeId<'brand>> {
        self.edge(edge).links().next
    }

    /// Human-readable listing of nodes and their chains, by uid.
    pub fn debug_dump(&self) -> String {
        self.dump().to_string()
    }

    /// [`Display`](fmt::Display) form of [`Graph::debug_dump`].
    #[inline]
    pub fn dump(&self) -> GraphDump<'_, 'brand, N, E> {
        GraphDump { graph: self }
    }
}

/// Listing of a graph's nodes, their chains and its edges, keyed by uid.
///
/// Returned by [`Graph::dump`].
pub struct GraphDump<'g, 'brand, N, E> {
    graph: &'g Graph<'brand, N, E>,
}

impl<'brand, N, E> GraphDump<'_, 'brand, N, E> {
    fn write_uids(
        &self,
        f: &mut fmt::Formatter<'_>,
        edges: impl Iterator<Item = EdgeId<'brand>>,
    ) -> fmt::Result {
        for (i, edge) in edges.enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", self.graph.edge(edge).uid())?;
        }
        Ok(())
    }
}

impl<N, E> fmt::Display for GraphDump<'_, '_, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.graph;
        writeln!(
            f,
            "graph {} ({} nodes, {} edges)",
            graph.id,
            graph.node_count(),
            graph.edge_count()
        )?;
        for node in graph.nodes() {
            write!(f, "node {}: succs [", graph.node(node).uid())?;
            self.write_uids(f, graph.succs(node))?;
            f.write_str("] preds [")?;
            self.write_uids(f, graph.preds(node))?;
            f.write_str("]\n")?;
        }
        for edge in graph.edges() {
            let record = graph.edge(edge);
            writeln!(
                f,
                "edge {}: {} -> {}",
                record.uid(),
                graph.node(record.pred()).uid(),
                graph.node(record.succ()).uid()
            )?;
        }
        Ok(())
    }
}

impl<N, E> fmt::Debug for Graph<'_, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("id", &self.id)
            .field("nodes", &self.node_count())
            .field("edges", &self.edge_count())
            .field("next_uid", &self.next_uid)
            .finish_non_exhaustive()
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn stale_handle<H: fmt::Debug>(handle: H) -> ! {
    panic!("stale graph handle {handle:?}: the record was deleted")
}
