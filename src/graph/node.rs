use crate::graph::list::{ListLinks, Listed};
use crate::handle::{Direction, EdgeId, GraphId, NodeId, Uid};

/// A node record owned by a [`Graph`](crate::Graph).
///
/// The node holds no adjacency storage of its own, only the heads of its two
/// intrusive edge chains:
/// - `first_edge(Direction::Down)`: most recently attached outgoing edge,
/// - `first_edge(Direction::Up)`: most recently attached incoming edge.
///
/// The rest of each chain is threaded through the edges. Chain mutation goes
/// through the graph (`add_outgoing`, `remove_incoming`, ...) because it has
/// to touch both the node and the edge records.
///
/// Separately from the chains, the node counts the live edges that name it as
/// an endpoint. An edge popped off a chain still counts until it is deleted.
#[derive(Debug)]
pub struct Node<'brand, N> {
    uid: Uid,
    graph: GraphId,
    first: [Option<EdgeId<'brand>>; 2],
    incident: [usize; 2],
    links: ListLinks<NodeId<'brand>>,
    payload: N,
}

impl<'brand, N> Node<'brand, N> {
    pub(crate) fn new(graph: GraphId, uid: Uid, payload: N) -> Self {
        Self {
            uid,
            graph,
            first: [None, None],
            incident: [0, 0],
            links: ListLinks::default(),
            payload,
        }
    }

    /// Unique identifier, fixed at construction.
    #[inline]
    pub fn uid(&self) -> Uid {
        self.uid
    }

    /// The graph this node belongs to.
    #[inline]
    pub fn graph_id(&self) -> GraphId {
        self.graph
    }

    /// Head of the chain in `dir`, or `None` if the chain is empty.
    #[inline]
    pub fn first_edge(&self, dir: Direction) -> Option<EdgeId<'brand>> {
        self.first[dir.index()]
    }

    /// First outgoing edge.
    #[inline]
    pub fn first_succ(&self) -> Option<EdgeId<'brand>> {
        self.first_edge(Direction::Down)
    }

    /// First incoming edge.
    #[inline]
    pub fn first_pred(&self) -> Option<EdgeId<'brand>> {
        self.first_edge(Direction::Up)
    }

    /// Live edges whose `dir` chain belongs to this node, whether or not they
    /// are currently linked on it.
    #[inline]
    pub fn incident_edges(&self, dir: Direction) -> usize {
        self.incident[dir.index()]
    }

    /// Returns `true` while any live edge has this node as an endpoint.
    #[inline]
    pub fn has_edges(&self) -> bool {
        self.incident != [0, 0]
    }

    /// Next node in the graph's node list.
    #[inline]
    pub fn next_node(&self) -> Option<NodeId<'brand>> {
        self.links.next
    }

    /// Previous node in the graph's node list.
    #[inline]
    pub fn prev_node(&self) -> Option<NodeId<'brand>> {
        self.links.prev
    }

    /// The externally owned attribute payload.
    #[inline]
    pub fn payload(&self) -> &N {
        &self.payload
    }

    #[inline]
    pub(crate) fn payload_mut(&mut self) -> &mut N {
        &mut self.payload
    }

    #[inline]
    pub(crate) fn set_first(&mut self, dir: Direction, edge: Option<EdgeId<'brand>>) {
        self.first[dir.index()] = edge;
    }

    #[inline]
    pub(crate) fn add_incident(&mut self, dir: Direction) {
        self.incident[dir.index()] += 1;
    }

    #[inline]
    pub(crate) fn remove_incident(&mut self, dir: Direction) {
        debug_assert!(self.incident[dir.index()] > 0, "node {} has no {dir} edges", self.uid);
        self.incident[dir.index()] -= 1;
    }

    pub(crate) fn into_payload(self) -> N {
        self.payload
    }
}

impl<'brand, N> Listed<NodeId<'brand>> for Node<'brand, N> {
    fn links(&self) -> &ListLinks<NodeId<'brand>> {
        &self.links
    }

    fn links_mut(&mut self) -> &mut ListLinks<NodeId<'brand>> {
        &mut self.links
    }
}
