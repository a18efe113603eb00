use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OWNER: AtomicU64 = AtomicU64::new(0);

/// A stable handle to a node of a [`List`](crate::List).
///
/// A handle stays valid until its node is removed. After that the slot may
/// be reused, but the handle carries the generation it was issued with and
/// is reported as detached instead of aliasing the new occupant. A handle
/// is only honored by the list that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) owner: u64,
    pub(crate) slot: usize,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Returns the raw slot number, for debugging or external maps.
    pub fn as_raw(&self) -> usize {
        self.slot
    }
}

struct Entry<N> {
    generation: u32,
    node: Option<N>,
}

/// Slot storage for nodes, addressed by index.
///
/// Released slots go onto a free list and are handed out again by the next
/// `alloc`, with their generation bumped. Every arena gets its own owner
/// id, stamped into the handles it issues.
pub(crate) struct Arena<N> {
    owner: u64,
    entries: Vec<Entry<N>>,
    free: Vec<usize>,
}

impl<N> Arena<N> {
    pub(crate) fn new() -> Self {
        Self {
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            entries: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, node: N) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.entries[slot].node = Some(node);
                slot
            }
            None => {
                self.entries.push(Entry {
                    generation: 0,
                    node: Some(node),
                });
                self.entries.len() - 1
            }
        }
    }

    /// Take the node out of `slot` and make the slot reusable.
    pub(crate) fn release(&mut self, slot: usize) -> Option<N> {
        let entry = self.entries.get_mut(slot)?;
        let node = entry.node.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(slot);
        Some(node)
    }

    pub(crate) fn id(&self, slot: usize) -> NodeId {
        NodeId {
            owner: self.owner,
            slot,
            generation: self.entries[slot].generation,
        }
    }

    /// Map a handle back to its slot, if this arena issued it and the node
    /// it was issued for is still live.
    pub(crate) fn resolve(&self, id: NodeId) -> Option<usize> {
        if id.owner != self.owner {
            return None;
        }
        let entry = self.entries.get(id.slot)?;
        (entry.generation == id.generation && entry.node.is_some()).then(|| id.slot)
    }

    pub(crate) fn get(&self, slot: usize) -> Option<&N> {
        self.entries.get(slot)?.node.as_ref()
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<&mut N> {
        self.entries.get_mut(slot)?.node.as_mut()
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<usize> for Arena<N> {
    type Output = N;

    fn index(&self, slot: usize) -> &N {
        match self.get(slot) {
            Some(node) => node,
            None => panic!("dangling link to arena slot {}", slot),
        }
    }
}

impl<N> IndexMut<usize> for Arena<N> {
    fn index_mut(&mut self, slot: usize) -> &mut N {
        match self.get_mut(slot) {
            Some(node) => node,
            None => panic!("dangling link to arena slot {}", slot),
        }
    }
}
