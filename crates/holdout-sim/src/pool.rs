//! Fixed-capacity entity pools.
//!
//! A pool never grows and never compacts: an entity keeps its slot index for
//! its whole life, and a free slot is found by scanning from index 0, so the
//! lowest free index always wins. A full pool refuses the spawn.

/// Fixed array of slots for one entity kind. `None` marks a free slot.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<Option<T>>,
}

impl<T> Pool<T> {
    /// Create a pool with `capacity` free slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index of the first free slot, if any.
    pub fn acquire(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Place `value` in the first free slot. Returns `None` when full.
    pub fn spawn(&mut self, value: T) -> Option<usize> {
        let index = self.acquire()?;
        self.slots[index] = Some(value);
        Some(index)
    }

    /// Free a slot, handing back whatever occupied it.
    pub fn release(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index)?.take()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (i, v)))
    }

    /// Occupied slots in index order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|v| (i, v)))
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Free every slot, dropping all occupants.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}
