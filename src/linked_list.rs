//! A linked list that flattens all its nodes onto a Vec for storage, gaining
//! data locality at the expense of never giving memory back. Every bucket of a
//! [`ChainedHashMap`](crate::ChainedHashMap) is one of these.

/// Alias for the index of a node in the linked list's storage vec.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeHandle(usize);

/// A node that lives in a linked list.
struct Node<T> {
    /// The value being stored. Taken out when the node is removed, so a
    /// freelisted node never hands back a stale value.
    value: Option<T>,

    /// The index of the node previous to this one.
    prev: NodeHandle,

    /// The index of the next node in the list.
    next: NodeHandle,
}

/// A circular, doubly linked list addressed by position in a single
/// contiguous Vec. Removed nodes are freelisted and reused by later appends.
/// There is no compaction.
///
/// The head's `prev` is the tail, so appending to the back is O(1) without a
/// separate tail pointer.
pub(crate) struct LinkedList<T> {
    /// The nodes in the list.
    store: Vec<Node<T>>,

    /// Entries in the list which aren't in use anymore. These will be reused.
    free: Vec<NodeHandle>,

    /// The first node in the list.
    head: Option<NodeHandle>,
}

/// Walks a [`LinkedList`] front to back.
pub(crate) struct Nodes<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<NodeHandle>,
    remaining: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    pub(crate) fn new() -> Self {
        Self {
            store: Vec::new(),
            free: Vec::new(),
            head: None,
        }
    }

    /// The length of this linked list.
    pub(crate) fn len(&self) -> usize {
        self.store.len() - self.free.len()
    }

    #[allow(unused)]
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Gets an element from the list.
    pub(crate) fn get(&self, node: NodeHandle) -> Option<&T> {
        self.store.get(node.0).and_then(|n| n.value.as_ref())
    }

    /// Gets a mutable reference to an element in the list.
    pub(crate) fn get_mut(&mut self, node: NodeHandle) -> Option<&mut T> {
        self.store.get_mut(node.0).and_then(|n| n.value.as_mut())
    }

    /// Appends t onto the back of the list and returns a handle to the node.
    pub(crate) fn append(&mut self, t: T) -> NodeHandle {
        // use the first available location in the storage vec, or infer what
        // the next location will be on push.
        let idx = self
            .free
            .pop()
            .unwrap_or_else(|| NodeHandle(self.store.len()));

        let mut n = Node {
            value: Some(t),
            prev: idx,
            next: idx,
        };

        if let Some(head) = self.head {
            // link this node in between the current tail and the head
            n.prev = self.store[head.0].prev;
            n.next = head;

            self.store[n.prev.0].next = idx;
            self.store[head.0].prev = idx;
        } else {
            self.head = Some(idx);
        }

        if self.store.len() <= idx.0 {
            self.store.push(n);
        } else {
            self.store[idx.0] = n;
        }

        idx
    }

    /// Visits each item front to back along with its position. The visitor
    /// returns true to stop iterating, in which case the handle of the node it
    /// stopped on is returned.
    pub(crate) fn each<F>(&self, mut visitor: F) -> Option<NodeHandle>
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.nodes()
            .enumerate()
            .find(|(index, (_, value))| visitor(*value, *index))
            .map(|(_, (handle, _))| handle)
    }

    /// Remove an arbitrary node from the list, returning its value. Handles
    /// which were already removed give back `None`.
    pub(crate) fn remove_node(&mut self, node: NodeHandle) -> Option<T> {
        let value = self.store.get_mut(node.0)?.value.take()?;

        if self.len() == 1 {
            // just reset head and freelist the node
            self.head = None;
        } else {
            // link prev to next and next to prev so node doesn't exist in the
            // chain anymore
            let prev = self.store[node.0].prev;
            let next = self.store[node.0].next;

            self.store[prev.0].next = next;
            self.store[next.0].prev = prev;

            if self.head == Some(node) {
                self.head = Some(next);
            }
        }

        self.free.push(node);
        Some(value)
    }

    /// Clears this linked list. Does not free the underlying buffers.
    pub(crate) fn clear(&mut self) {
        self.store.clear();
        self.free.clear();
        self.head = None;
    }

    /// Iterates over nodes front to back, yielding each handle and value.
    pub(crate) fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            list: self,
            cursor: self.head,
            remaining: self.len(),
        }
    }

    /// Iterates over values front to back.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.nodes().map(|(_, value)| value)
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = (NodeHandle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let handle = self.cursor?;
        let node = &self.list.store[handle.0];
        self.remaining -= 1;
        self.cursor = Some(node.next);

        node.value.as_ref().map(|value| (handle, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
