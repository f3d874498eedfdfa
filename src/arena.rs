//! Generational slot arena backing a graph's nodes and edges.
//!
//! Freed slots are threaded onto a free list and reused; every free bumps the
//! slot's generation so handles issued before the free no longer resolve.
//! A slot whose generation would wrap is retired instead of reused.

use core::mem;

use crate::handle::RawHandle;

enum Slot<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32, next_free: Option<u32> },
}

/// Owning storage for graph records, addressed by [`RawHandle`].
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Stores `value`, reusing the most recently freed slot if there is one.
    pub(crate) fn alloc(&mut self, value: T) -> RawHandle {
        self.len += 1;

        if let Some(index) = self.free_head {
            let slot = &mut self.slots[index as usize];
            let (generation, next_free) = match *slot {
                Slot::Vacant {
                    generation,
                    next_free,
                } => (generation, next_free),
                Slot::Occupied { .. } => panic!("Corrupted free list: slot {index} is occupied"),
            };
            self.free_head = next_free;
            *slot = Slot::Occupied { generation, value };
            return RawHandle::new(index, generation);
        }

        let index = u32::try_from(self.slots.len())
            .ok()
            .filter(|&i| i < u32::MAX)
            .unwrap_or_else(|| panic!("arena exhausted: more than {} live slots", u32::MAX - 1));
        self.slots.push(Slot::Occupied {
            generation: 0,
            value,
        });
        RawHandle::new(index, 0)
    }

    #[inline]
    pub(crate) fn get(&self, handle: RawHandle) -> Option<&T> {
        match self.slots.get(handle.index())? {
            Slot::Occupied { generation, value } if *generation == handle.generation() => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: RawHandle) -> Option<&mut T> {
        match self.slots.get_mut(handle.index())? {
            Slot::Occupied { generation, value } if *generation == handle.generation() => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn contains(&self, handle: RawHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Releases the slot and returns its value, or `None` if `handle` is stale.
    pub(crate) fn free(&mut self, handle: RawHandle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index())?;
        match slot {
            Slot::Occupied { generation, .. } if *generation == handle.generation() => {}
            _ => return None,
        }

        let retired = handle.generation() == u32::MAX;
        let vacant = Slot::Vacant {
            generation: handle.generation().wrapping_add(1),
            next_free: if retired { None } else { self.free_head },
        };
        let Slot::Occupied { value, .. } = mem::replace(slot, vacant) else {
            unreachable!("slot checked occupied above");
        };

        if !retired {
            self.free_head = Some(handle.index_u32());
        }
        self.len -= 1;
        Some(value)
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
