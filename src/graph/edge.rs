use crate::graph::list::{ListLinks, Listed};
use crate::handle::{Direction, EdgeId, GraphId, NodeId, Uid};

/// An edge record owned by a [`Graph`](crate::Graph).
///
/// One edge is a member of two singly linked chains at once: its
/// predecessor's outgoing chain (`next[Down]`) and its successor's incoming
/// chain (`next[Up]`). Both endpoints are fixed for the edge's lifetime.
#[derive(Debug)]
pub struct Edge<'brand, E> {
    uid: Uid,
    graph: GraphId,
    pred: NodeId<'brand>,
    succ: NodeId<'brand>,
    next: [Option<EdgeId<'brand>>; 2],
    linked: [bool; 2],
    links: ListLinks<EdgeId<'brand>>,
    payload: E,
}

impl<'brand, E> Edge<'brand, E> {
    pub(crate) fn new(
        graph: GraphId,
        uid: Uid,
        pred: NodeId<'brand>,
        succ: NodeId<'brand>,
        payload: E,
    ) -> Self {
        Self {
            uid,
            graph,
            pred,
            succ,
            next: [None, None],
            linked: [false, false],
            links: ListLinks::default(),
            payload,
        }
    }

    /// Unique identifier, fixed at construction.
    #[inline]
    pub fn uid(&self) -> Uid {
        self.uid
    }

    /// The graph this edge belongs to.
    #[inline]
    pub fn graph_id(&self) -> GraphId {
        self.graph
    }

    /// Source endpoint.
    #[inline]
    pub fn pred(&self) -> NodeId<'brand> {
        self.pred
    }

    /// Target endpoint.
    #[inline]
    pub fn succ(&self) -> NodeId<'brand> {
        self.succ
    }

    /// Endpoint reached by following this edge in `dir`.
    ///
    /// `Down` leads to the successor, `Up` back to the predecessor.
    #[inline]
    pub fn node_in_dir(&self, dir: Direction) -> NodeId<'brand> {
        match dir {
            Direction::Down => self.succ,
            Direction::Up => self.pred,
        }
    }

    /// Endpoint whose `dir` chain this edge belongs to.
    #[inline]
    pub fn chain_owner(&self, dir: Direction) -> NodeId<'brand> {
        self.node_in_dir(dir.reverse())
    }

    /// Next edge in the `dir` chain, or `None` at the end.
    #[inline]
    pub fn next_in(&self, dir: Direction) -> Option<EdgeId<'brand>> {
        self.next[dir.index()]
    }

    /// Next edge in the predecessor's outgoing chain.
    #[inline]
    pub fn next_succ(&self) -> Option<EdgeId<'brand>> {
        self.next_in(Direction::Down)
    }

    /// Next edge in the successor's incoming chain.
    #[inline]
    pub fn next_pred(&self) -> Option<EdgeId<'brand>> {
        self.next_in(Direction::Up)
    }

    /// Whether the edge is currently threaded on its `dir` chain.
    #[inline]
    pub fn is_linked(&self, dir: Direction) -> bool {
        self.linked[dir.index()]
    }

    /// Whether this edge starts and ends at the same node.
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.pred == self.succ
    }

    /// The externally owned attribute payload.
    #[inline]
    pub fn payload(&self) -> &E {
        &self.payload
    }

    #[inline]
    pub(crate) fn payload_mut(&mut self) -> &mut E {
        &mut self.payload
    }

    /// Prepares the edge to become the head of its `dir` chain.
    ///
    /// The caller installs the edge as the node's head in the same `&mut`
    /// section.
    #[inline]
    pub(crate) fn attach(&mut self, dir: Direction, previous_head: Option<EdgeId<'brand>>) {
        debug_assert!(
            !self.linked[dir.index()],
            "edge {} is already linked in its {dir} chain",
            self.uid
        );
        self.next[dir.index()] = previous_head;
        self.linked[dir.index()] = true;
    }

    /// Takes the edge off its `dir` chain, returning its former successor in that chain.
    #[inline]
    pub(crate) fn detach(&mut self, dir: Direction) -> Option<EdgeId<'brand>> {
        self.linked[dir.index()] = false;
        self.next[dir.index()].take()
    }

    /// Splices around a removed neighbor.
    #[inline]
    pub(crate) fn set_next(&mut self, dir: Direction, next: Option<EdgeId<'brand>>) {
        self.next[dir.index()] = next;
    }

    pub(crate) fn into_payload(self) -> E {
        self.payload
    }
}

impl<'brand, E> Listed<EdgeId<'brand>> for Edge<'brand, E> {
    fn links(&self) -> &ListLinks<EdgeId<'brand>> {
        &self.links
    }

    fn links_mut(&mut self) -> &mut ListLinks<EdgeId<'brand>> {
        &mut self.links
    }
}
