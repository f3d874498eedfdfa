//! Recoverable graph errors.
//!
//! Caller bugs (a stale handle on a hot-path accessor, attaching an edge
//! twice, advancing an end iterator) panic instead; see the individual
//! operations. The variants here are conditions a caller can reasonably
//! check for and handle.

use thiserror::Error;

use crate::handle::{Direction, Uid};

/// Errors reported by graph mutation.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Node-level removal only pops the head of a chain.
    #[error("edge {edge} is not the head of node {node}'s {dir} chain")]
    NotChainHead {
        /// Node whose chain was targeted.
        node: Uid,
        /// Edge that was asked to be removed.
        edge: Uid,
        /// Chain that was targeted.
        dir: Direction,
    },

    /// Nodes are only deleted once their edges are gone.
    #[error("node {node} still has {incoming} incoming and {outgoing} outgoing edges")]
    NodeHasEdges {
        /// Node that was asked to be deleted.
        node: Uid,
        /// Live edges ending at the node, linked or popped.
        incoming: usize,
        /// Live edges starting at the node, linked or popped.
        outgoing: usize,
    },

    /// The node handle refers to a deleted node.
    #[error("stale node handle")]
    StaleNode,

    /// The edge handle refers to a deleted edge.
    #[error("stale edge handle")]
    StaleEdge,

    /// A graph configuration document failed to parse.
    #[error("invalid graph configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
