//! Handles, identifiers and directions.
//!
//! Nodes and edges never hand out references into the graph's storage as
//! their identity. Instead the graph issues small `Copy` handles:
//!
//! - [`NodeId`] / [`EdgeId`]: slot index + generation, branded with the
//!   graph's `'brand` lifetime so a handle cannot be used with another graph.
//!   A handle whose slot has since been freed fails the generation check.
//! - [`Uid`]: the graph-scoped unique identifier. Strictly increasing and never
//!   reused, so it is what external attribute payloads are keyed by.

use core::fmt;
use core::marker::PhantomData;
use core::num::NonZeroU32;
use core::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Invariant lifetime marker shared by a graph and all of its handles.
pub(crate) type Brand<'brand> = PhantomData<fn(&'brand ()) -> &'brand ()>;

/// Unbranded slot reference used by the arena.
///
/// The slot is stored 1-based so `Option<RawHandle>` stays the size of `RawHandle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct RawHandle {
    slot: NonZeroU32,
    generation: u32,
}

impl RawHandle {
    #[inline(always)]
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self {
            slot: NonZeroU32::MIN.saturating_add(index),
            generation,
        }
    }

    #[inline(always)]
    pub(crate) const fn index(self) -> usize {
        (self.slot.get() - 1) as usize
    }

    #[inline(always)]
    pub(crate) const fn index_u32(self) -> u32 {
        self.slot.get() - 1
    }

    #[inline(always)]
    pub(crate) const fn generation(self) -> u32 {
        self.generation
    }
}

/// Conversion between branded handles and arena slots.
pub(crate) trait ArenaHandle: Copy + Eq + fmt::Debug {
    fn raw(self) -> RawHandle;
    fn from_raw(raw: RawHandle) -> Self;
}

macro_rules! branded_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name<'brand> {
            raw: RawHandle,
            _brand: Brand<'brand>,
        }

        impl<'brand> $name<'brand> {
            /// Slot index inside the owning graph's arena.
            ///
            /// Slots are reused after deletion; use the generation or the
            /// record's [`Uid`] when a stable key is needed.
            #[inline(always)]
            pub const fn index(self) -> usize {
                self.raw.index()
            }

            /// Generation of the slot at the time the handle was issued.
            #[inline(always)]
            pub const fn generation(self) -> u32 {
                self.raw.generation()
            }
        }

        impl<'brand> ArenaHandle for $name<'brand> {
            #[inline(always)]
            fn raw(self) -> RawHandle {
                self.raw
            }

            #[inline(always)]
            fn from_raw(raw: RawHandle) -> Self {
                Self {
                    raw,
                    _brand: PhantomData,
                }
            }
        }

        impl fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($name), "({}v{})"),
                    self.index(),
                    self.generation()
                )
            }
        }
    };
}

branded_handle!(
    /// Handle to a node of a specific branded graph.
    NodeId
);

branded_handle!(
    /// Handle to an edge of a specific branded graph.
    EdgeId
);

/// Graph-scoped unique identifier of a node or an edge.
///
/// Issued from a single monotonic counter per graph; never reused within the
/// graph's lifetime, even across deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uid(u64);

impl Uid {
    /// The first identifier a fresh graph issues.
    pub const FIRST: Uid = Uid(1);

    /// Returns the raw numeric value.
    #[inline(always)]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub(crate) const fn successor(self) -> Uid {
        Uid(self.0 + 1)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uid> for u64 {
    fn from(uid: Uid) -> Self {
        uid.0
    }
}

/// Process-unique identity of a graph instance.
///
/// Every node and edge records the id of the graph that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(u64);

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

impl GraphId {
    pub(crate) fn fresh() -> Self {
        GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Which endpoint role a node plays for an edge.
///
/// `Down` walks a node's outgoing chain (the node is the edge's predecessor),
/// `Up` walks its incoming chain (the node is the edge's successor). The
/// discriminant doubles as the slot index in both the node's chain heads and
/// the edge's `next` links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    /// Incoming edges; neighbors are predecessors.
    Up = 0,
    /// Outgoing edges; neighbors are successors.
    Down = 1,
}

impl Direction {
    /// Both directions, in slot order.
    pub const ALL: [Direction; 2] = [Direction::Up, Direction::Down];

    /// Slot index of this direction.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The opposite direction.
    #[inline(always)]
    #[must_use]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "incoming",
            Direction::Down => "outgoing",
        })
    }
}
