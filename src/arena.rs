//! Index-addressed node storage.
//!
//! Both trees keep their nodes in an [`Arena`] and link them together with [`NodeId`]s instead of
//! pointers. A rotation is then just a handful of index assignments, and a removed node's slot is
//! put on a free list so the next insertion can reuse it.

use std::fmt;
use std::ops::{Index, IndexMut};

use log::trace;

/// A stable handle to a node inside an [`Arena`]. Ids are only ever handed out by the arena that
/// owns the node, and they stay valid until that node is freed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
enum Slot<N> {
    Occupied(N),
    /// A freed slot. Holds the next entry of the free list.
    Vacant(Option<usize>),
}

/// A pool of nodes with a free list threaded through the vacant slots.
#[derive(Clone, Debug)]
pub struct Arena<N> {
    slots: Vec<Slot<N>>,
    free: Option<usize>,
    len: usize,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` nodes before it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            len: 0,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `node` and returns its id. The most recently freed slot is reused first.
    pub fn alloc(&mut self, node: N) -> NodeId {
        self.len += 1;
        match self.free {
            Some(index) => {
                let Slot::Vacant(next) = &self.slots[index] else {
                    unreachable!("free list points at an occupied slot");
                };
                trace!("reusing arena slot {}", index);
                self.free = *next;
                self.slots[index] = Slot::Occupied(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Vacates the slot named by `id` and hands back its node.
    ///
    /// ## Panics
    ///
    /// When `id` was already freed.
    pub fn free(&mut self, id: NodeId) -> N {
        let slot = std::mem::replace(&mut self.slots[id.0], Slot::Vacant(self.free));
        match slot {
            Slot::Occupied(node) => {
                self.free = Some(id.0);
                self.len -= 1;
                node
            }
            Slot::Vacant(_) => panic!("double free of arena slot {}", id),
        }
    }

    /// Drops every node. Previously issued ids must not be used afterwards.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }

    /// Returns the node at `id`, or `None` if the slot is vacant or out of range.
    pub fn get(&self, id: NodeId) -> Option<&N> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Mutable counterpart of [`Arena::get`].
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut N> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        match self.get(id) {
            Some(node) => node,
            None => panic!("dangling node id {}", id),
        }
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("dangling node id {}", id),
        }
    }
}
