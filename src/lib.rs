//! # `showgraph` - intrusive dual-chain directed graphs
//!
//! An in-memory directed graph where nodes own no adjacency arrays. Each edge
//! is spliced into two singly linked chains at once: its predecessor's
//! outgoing chain and its successor's incoming chain. That gives O(1) edge
//! insertion and O(1) access to a node's first neighbor in either direction
//! with a single allocation per connection.
//!
//! ## Architecture
//!
//! 1. **Arena ownership**: the [`Graph`] owns a generational arena for nodes
//!    and one for edges. Everything else refers to records through `Copy`
//!    handles ([`NodeId`], [`EdgeId`]) that are generation-checked, so a
//!    handle to a deleted record is detected rather than aliased.
//! 2. **Branding**: handles carry the graph's invariant `'brand` lifetime,
//!    created fresh by [`Graph::scope`]. A handle from one graph does not
//!    type-check against another.
//! 3. **Cursor strategies**: [`EdgeIter`] is generic over an [`EdgeCursor`]
//!    ([`SuccCursor`], [`PredCursor`], [`UndirCursor`]), so the three traversal
//!    shapes share one interface without dynamic dispatch.
//!
//! ## Ordering guarantee
//!
//! New edges are always pushed at the head of a chain, so iteration in either
//! direction yields the most recently added edge first. Undirected iteration
//! yields all incoming edges before all outgoing ones.
//!
//! ## Example
//!
//! ```rust
//! use showgraph::{Graph, GraphError};
//!
//! Graph::<&str, ()>::scope(|mut graph| {
//!     let entry = graph.new_node("entry");
//!     let exit = graph.new_node("exit");
//!     let e1 = graph.new_edge(entry, exit, ());
//!     let e2 = graph.new_edge(entry, exit, ());
//!
//!     // LIFO per direction.
//!     assert_eq!(graph.succs(entry).collect::<Vec<_>>(), vec![e2, e1]);
//!     assert_eq!(graph.first_incoming(exit), Some(e2));
//!
//!     // Node-level removal only pops the head.
//!     assert!(matches!(
//!         graph.remove_outgoing(entry, e1),
//!         Err(GraphError::NotChainHead { .. })
//!     ));
//!
//!     // Nodes go only once their edges are gone.
//!     assert!(graph.delete_node(exit).is_err());
//!     graph.delete_edge(e1).unwrap();
//!     graph.delete_edge(e2).unwrap();
//!     assert_eq!(graph.delete_node(exit).unwrap(), "exit");
//! });
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod arena;
pub mod config;
pub mod error;
pub mod graph;
pub mod handle;
pub mod payload;

pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use graph::{
    Edge, EdgeCursor, EdgeIter, EdgeListIter, Graph, GraphDump, Neighbors, Node, NodeIter,
    PredCursor, Preds, SuccCursor, Succs, UndirCursor, UndirEdges,
};
pub use handle::{Direction, EdgeId, GraphId, NodeId, Uid};
pub use payload::ExternalId;

// Compile-time assertions for handle and link layout.
const _: () = {
    use core::mem;

    // The brand is a ZST.
    assert!(mem::size_of::<handle::Brand<'static>>() == 0);

    // Handles are two u32s, and the 1-based slot gives `Option` a niche, so a
    // chain link costs no more than the handle itself.
    assert!(mem::size_of::<EdgeId<'static>>() == 8);
    assert!(mem::size_of::<Option<EdgeId<'static>>>() == mem::size_of::<EdgeId<'static>>());
    assert!(mem::size_of::<Option<NodeId<'static>>>() == mem::size_of::<NodeId<'static>>());

    // Direction is the slot index into the two-element link arrays.
    assert!(mem::size_of::<Direction>() == 1);
    assert!(Direction::Up as usize == 0 && Direction::Down as usize == 1);

    // Cursors are a handle plus at most a phase flag.
    assert!(mem::size_of::<SuccCursor<'static>>() == mem::size_of::<Option<EdgeId<'static>>>());
    assert!(mem::size_of::<UndirCursor<'static>>() <= 2 * mem::size_of::<EdgeId<'static>>());
};
