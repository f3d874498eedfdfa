//! Graph-global doubly linked lists threaded through arena records.
//!
//! The graph keeps every node and every edge on an insertion-ordered list.
//! Links live inside the records themselves, so append and detach are O(1)
//! and need no allocation.

use core::mem;

use crate::arena::Arena;
use crate::handle::ArenaHandle;

/// `prev`/`next` position of a record in a graph-global list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ListLinks<H> {
    pub(crate) prev: Option<H>,
    pub(crate) next: Option<H>,
}

impl<H> Default for ListLinks<H> {
    fn default() -> Self {
        Self {
            prev: None,
            next: None,
        }
    }
}

/// Records that can sit on a graph-global list.
pub(crate) trait Listed<H> {
    fn links(&self) -> &ListLinks<H>;
    fn links_mut(&mut self) -> &mut ListLinks<H>;
}

/// Head and tail of one graph-global list.
#[derive(Debug)]
pub(crate) struct ListEnds<H> {
    head: Option<H>,
    tail: Option<H>,
}

impl<H: ArenaHandle> ListEnds<H> {
    pub(crate) const fn new() -> Self {
        Self {
            head: None,
            tail: None,
        }
    }

    #[inline]
    pub(crate) fn head(&self) -> Option<H> {
        self.head
    }

    #[inline]
    pub(crate) fn tail(&self) -> Option<H> {
        self.tail
    }

    /// Appends `item`, which must be live in `arena` and not already listed.
    pub(crate) fn push_back<T: Listed<H>>(&mut self, arena: &mut Arena<T>, item: H) {
        let old_tail = self.tail;

        if let Some(tail) = old_tail {
            record_mut(arena, tail).links_mut().next = Some(item);
        } else {
            self.head = Some(item);
        }

        let links = record_mut(arena, item).links_mut();
        links.prev = old_tail;
        links.next = None;

        self.tail = Some(item);
    }

    /// Detaches `item` from the list, leaving its own links cleared.
    pub(crate) fn unlink<T: Listed<H>>(&mut self, arena: &mut Arena<T>, item: H) {
        let ListLinks { prev, next } = mem::take(record_mut(arena, item).links_mut());

        match prev {
            Some(p) => record_mut(arena, p).links_mut().next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => record_mut(arena, n).links_mut().prev = prev,
            None => self.tail = prev,
        }
    }
}

#[inline]
fn record_mut<H: ArenaHandle, T>(arena: &mut Arena<T>, item: H) -> &mut T {
    match arena.get_mut(item.raw()) {
        Some(record) => record,
        None => panic!("Corrupted graph list: {item:?} is not live"),
    }
}
