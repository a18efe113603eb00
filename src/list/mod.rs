use std::fmt::{self, Debug, Display, Formatter};

use log::{debug, trace};

use crate::arena::{Arena, NodeId};
use crate::error::ListError;
use crate::list::database::{Database, IdentityKey};
use crate::node::{Node, NIL};
use crate::value::{Element, FromValue, Value};

pub mod cursor;
pub mod iterator;

mod algorithms;
pub(crate) mod database;

pub use algorithms::drain::{Drain, DrainFilter};
pub use algorithms::sort::compare_ignore_case;
pub use algorithms::value_equality;

/// Arena slot of the head sentinel.
pub(crate) const HEAD: usize = 0;
/// Arena slot of the tail sentinel.
pub(crate) const TAIL: usize = 1;

/// The `List` is a doubly-linked list bounded by two permanent sentinel
/// nodes, with a traversal cursor, a one-deep bookmark and an occurrence
/// index over the identity keys of its values.
///
/// Nodes live in an arena and link to each other by slot number. The head
/// sentinel always occupies slot 0 and the tail sentinel slot 1; neither of
/// them ever holds a value or leaves the chain.
///
/// # Naming Conventions
///
/// - *index*: the logical position of a real node, `0..len`. Methods taking
///   an `isize` accept negative indices counted from the back, so `-1` is
///   the last element;
/// - *position*: a node of the chain including the sentinels, paired with
///   its index (`0` at head, `len` at tail).
pub struct List<T> {
    pub(crate) nodes: Arena<Node<T>>,
    /// the number of real nodes
    pub(crate) len: usize,
    max_len: usize,
    pub(crate) cursor: Position,
    pub(crate) bookmark: Option<Position>,
    pub(crate) database: Database,
}

/// A node of the chain plus its logical index.
///
/// The index is `None` when a removal through a bare [`NodeId`] left it
/// unknown; it is then recounted on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    pub(crate) node: usize,
    pub(crate) index: Option<usize>,
}

impl Position {
    pub(crate) const START: Position = Position {
        node: HEAD,
        index: Some(0),
    };

    pub(crate) fn at(node: usize, index: usize) -> Self {
        Self {
            node,
            index: Some(index),
        }
    }
}

// private methods
impl<T> List<T> {
    pub(crate) fn connect(&mut self, prev: usize, next: usize) {
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    pub(crate) fn first_node(&self) -> usize {
        self.nodes[HEAD].next
    }

    pub(crate) fn last_node(&self) -> usize {
        self.nodes[TAIL].prev
    }

    /// Locate the node at `index`, or the tail sentinel when `index == len`.
    ///
    /// The walk starts from whichever sentinel is closer.
    pub(crate) fn node_at(&self, index: usize) -> usize {
        debug_assert!(index <= self.len);
        if index < self.len / 2 {
            (0..index).fold(self.first_node(), |node, _| self.nodes[node].next)
        } else {
            (index..self.len).fold(TAIL, |node, _| self.nodes[node].prev)
        }
    }

    /// Map a possibly negative index into `0..len`.
    pub(crate) fn resolve(&self, index: isize) -> Option<usize> {
        let len = self.len as isize;
        let index = if index < 0 { index + len } else { index };
        (0..len).contains(&index).then(|| index as usize)
    }

    pub(crate) fn position_index(&self, position: Position) -> usize {
        match position.node {
            HEAD => 0,
            TAIL => self.len,
            node => position
                .index
                .unwrap_or_else(|| self.count_before(node)),
        }
    }

    fn count_before(&self, mut node: usize) -> usize {
        let mut count = 0;
        while self.nodes[node].prev != HEAD {
            node = self.nodes[node].prev;
            count += 1;
        }
        count
    }

    pub(crate) fn slot_of(&self, id: NodeId) -> Result<usize, ListError> {
        match self.nodes.resolve(id) {
            None => {
                debug!("refusing detached node handle {:?}", id);
                Err(ListError::Detached)
            }
            Some(HEAD) | Some(TAIL) => {
                debug!("refusing to move sentinel node {:?}", id);
                Err(ListError::Sentinel)
            }
            Some(slot) => Ok(slot),
        }
    }

    /// Where `position` ends up once the node in `slot`, at index `at`, is
    /// unlinked from between `prev` and `next`.
    ///
    /// A position on the removed node moves to its successor, else to its
    /// predecessor, else to head. Positions behind the removed node shift
    /// down by one.
    fn relocate(
        position: Position,
        slot: usize,
        at: Option<usize>,
        prev: usize,
        next: usize,
    ) -> Position {
        if position.node == slot {
            if next != TAIL {
                Position { node: next, index: at }
            } else if prev != HEAD {
                Position {
                    node: prev,
                    index: at.map(|i| i - 1),
                }
            } else {
                Position::START
            }
        } else if position.node == HEAD || position.node == TAIL {
            position
        } else {
            let index = match (position.index, at) {
                (Some(i), Some(k)) if i > k => Some(i - 1),
                (Some(i), Some(_)) => Some(i),
                _ => None,
            };
            Position { index, ..position }
        }
    }

    fn shift(position: &mut Position, at: usize) {
        if position.node == HEAD {
            return;
        }
        if let Some(index) = position.index.as_mut() {
            if *index >= at {
                *index += 1;
            }
        }
    }
}

// private methods that keep the occurrence index in sync
impl<T: Element> List<T> {
    fn check_capacity(&self) -> Result<(), ListError> {
        if self.len >= self.max_len {
            debug!(
                "refusing insertion into a full list ({} elements)",
                self.max_len
            );
            return Err(ListError::CapacityExhausted { max: self.max_len });
        }
        Ok(())
    }

    /// Link a new node holding `element` right before `next`, which sits
    /// at index `at`.
    pub(crate) fn attach_before(&mut self, next: usize, at: usize, element: T) -> usize {
        let prev = self.nodes[next].prev;
        self.database.insert(IdentityKey::of(&element));
        let slot = self.nodes.alloc(Node::new(prev, next, element));
        self.connect(prev, slot);
        self.connect(slot, next);
        self.len += 1;
        Self::shift(&mut self.cursor, at);
        if let Some(bookmark) = self.bookmark.as_mut() {
            Self::shift(bookmark, at);
        }
        slot
    }

    /// Unlink the node in `slot`, whose index is `at` if known, and return
    /// its value. Returns `None` for sentinels and released slots.
    pub(crate) fn detach(&mut self, slot: usize, at: Option<usize>) -> Option<T> {
        let node = self.nodes.get(slot)?;
        if node.is_sentinel() {
            return None;
        }
        let (prev, next) = (node.prev, node.next);
        if self.cursor.node == slot {
            trace!("relocating cursor off removed slot {}", slot);
        }
        self.cursor = Self::relocate(self.cursor, slot, at, prev, next);
        self.bookmark = self
            .bookmark
            .map(|bookmark| Self::relocate(bookmark, slot, at, prev, next));
        self.connect(prev, next);
        self.len -= 1;
        let element = self.nodes.release(slot)?.element?;
        self.database.remove(&IdentityKey::of(&element));
        Some(element)
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use cursor_list::List;
    /// let list: List<i64> = List::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_max_len(usize::MAX)
    }

    /// Create an empty `List` that refuses to grow beyond `max_len` values.
    ///
    /// # Examples
    /// ```
    /// use cursor_list::{List, ListError};
    ///
    /// let mut list = List::with_max_len(1);
    /// assert!(list.append(1).is_ok());
    /// assert_eq!(list.append(2), Err(ListError::CapacityExhausted { max: 1 }));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn with_max_len(max_len: usize) -> Self {
        let mut nodes = Arena::new();
        let head = nodes.alloc(Node::sentinel(NIL, TAIL));
        let tail = nodes.alloc(Node::sentinel(HEAD, NIL));
        debug_assert_eq!((head, tail), (HEAD, TAIL));
        Self {
            nodes,
            len: 0,
            max_len,
            cursor: Position::START,
            bookmark: None,
            database: Database::default(),
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first_node() == TAIL
    }

    /// Returns the number of values in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len >= self.max_len
    }

    /// The handle of the head sentinel.
    pub fn head(&self) -> NodeId {
        self.nodes.id(HEAD)
    }

    /// The handle of the tail sentinel.
    pub fn tail(&self) -> NodeId {
        self.nodes.id(TAIL)
    }

    /// Returns `true` if `id` can never be removed or swapped: it is a
    /// sentinel, or it no longer belongs to the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// let id = list.append(1).unwrap();
    /// assert!(list.is_immovable(list.head()));
    /// assert!(list.is_immovable(list.tail()));
    /// assert!(!list.is_immovable(id));
    ///
    /// list.remove_node(id).unwrap();
    /// assert!(list.is_immovable(id));
    /// ```
    pub fn is_immovable(&self, id: NodeId) -> bool {
        match self.nodes.resolve(id) {
            Some(slot) => slot == HEAD || slot == TAIL,
            None => true,
        }
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.nodes[self.first_node()].element.as_ref()
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.nodes[self.last_node()].element.as_ref()
    }

    /// Provides a reference to the element at `index`, or `None` if it is
    /// out of range. Negative indices count from the back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, walking at most
    /// half of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let list = List::from_iter([10, 20, 30]);
    /// assert_eq!(list.get(0), Some(&10));
    /// assert_eq!(list.get(-1), Some(&30));
    /// assert_eq!(list.get(3), None);
    /// assert_eq!(list.get(-4), None);
    /// ```
    pub fn get(&self, index: isize) -> Option<&T> {
        let at = self.resolve(index)?;
        self.nodes[self.node_at(at)].element.as_ref()
    }

    /// The handle of the node at `index`.
    pub fn node(&self, index: isize) -> Option<NodeId> {
        let at = self.resolve(index)?;
        Some(self.nodes.id(self.node_at(at)))
    }

    /// The value held by the node `id`, or `None` for sentinels and
    /// detached handles.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        let slot = self.nodes.resolve(id)?;
        self.nodes.get(slot)?.element.as_ref()
    }

    /// Removes all elements from the `List`, releasing every node and
    /// resetting the cursor. The bookmark is discarded.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        let mut node = self.first_node();
        while node != TAIL {
            let next = self.nodes[node].next;
            self.nodes.release(node);
            node = next;
        }
        self.connect(HEAD, TAIL);
        self.len = 0;
        self.database.clear();
        self.cursor = Position::START;
        self.bookmark = None;
    }

    /// Approximate membership through the occurrence index: `true` if some
    /// value of the same kind prints exactly like `value`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time, plus formatting
    /// `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, Value};
    ///
    /// let list = List::from_iter([Value::from(1), Value::from("a")]);
    /// assert!(list.approx_contains(&Value::from(1)));
    /// assert!(list.approx_contains(&1_i64));
    /// assert!(!list.approx_contains(&Value::from("1")));
    /// ```
    pub fn approx_contains<Q: Element + ?Sized>(&self, value: &Q) -> bool {
        self.occurrences(value) > 0
    }

    /// The number of values sharing the identity key of `value`.
    pub fn occurrences<Q: Element + ?Sized>(&self, value: &Q) -> usize {
        self.database.count(&IdentityKey::of(value))
    }

    /// The number of distinct identity keys held by the list.
    pub fn distinct(&self) -> usize {
        self.database.distinct()
    }
}

impl<T: Element> List<T> {
    /// Appends an element to the back of the list.
    ///
    /// Fails without touching the list if it already holds
    /// [`max_len`](List::max_len) values.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// let id = list.append("x").unwrap();
    /// assert_eq!(list.value(id), Some(&"x"));
    /// assert_eq!(list.back(), Some(&"x"));
    /// ```
    pub fn append(&mut self, elt: T) -> Result<NodeId, ListError> {
        self.check_capacity()?;
        let slot = self.attach_before(TAIL, self.len, elt);
        Ok(self.nodes.id(slot))
    }

    /// Prepends an element to the front of the list.
    pub fn push_front(&mut self, elt: T) -> Result<NodeId, ListError> {
        self.check_capacity()?;
        let slot = self.attach_before(self.first_node(), 0, elt);
        Ok(self.nodes.id(slot))
    }

    /// Inserts an element so that it ends up at `index`, which may equal
    /// `len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, walking at most
    /// half of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, ListError};
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.insert_at(2, 4).unwrap();
    /// list.insert_at(4, 5).unwrap();
    /// assert_eq!(
    ///     list.insert_at(9, 6),
    ///     Err(ListError::OutOfRange { index: 9, len: 5 })
    /// );
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert_at(&mut self, index: usize, elt: T) -> Result<NodeId, ListError> {
        if index > self.len {
            debug!("refusing insertion at {} into a list of {}", index, self.len);
            return Err(ListError::OutOfRange {
                index: index as isize,
                len: self.len,
            });
        }
        self.check_capacity()?;
        let next = self.node_at(index);
        let slot = self.attach_before(next, index, elt);
        Ok(self.nodes.id(slot))
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn set(&mut self, index: isize, elt: T) -> Result<T, ListError> {
        let at = self.resolve(index).ok_or(ListError::OutOfRange {
            index,
            len: self.len,
        })?;
        let slot = self.node_at(at);
        let key = IdentityKey::of(&elt);
        let element = self.nodes[slot]
            .element
            .as_mut()
            .ok_or(ListError::Sentinel)?;
        let old = std::mem::replace(element, elt);
        self.database.remove(&IdentityKey::of(&old));
        self.database.insert(key);
        Ok(old)
    }

    /// Removes the element at `index` and returns it, or returns `None` if
    /// the index is out of range.
    ///
    /// The cursor and the bookmark, if they pointed at the removed node,
    /// move to its successor, else its predecessor, else the head sentinel.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// assert_eq!(list.remove_at(1), Some(2));
    /// assert_eq!(list.remove_at(-1), Some(3));
    /// assert_eq!(list.remove_at(5), None);
    /// assert_eq!(list.remove_at(0), Some(1));
    /// assert_eq!(list.remove_at(0), None);
    /// ```
    pub fn remove_at(&mut self, index: isize) -> Option<T> {
        let at = self.resolve(index)?;
        let slot = self.node_at(at);
        self.detach(slot, Some(at))
    }

    /// Removes the node `id` and returns its value.
    ///
    /// Fails for the sentinels and for handles whose node is already gone.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// let a = list.append('a').unwrap();
    /// list.append('b').unwrap();
    ///
    /// assert_eq!(list.remove_node(a), Ok('a'));
    /// assert_eq!(list.remove_node(a), Err(ListError::Detached));
    /// assert_eq!(list.remove_node(list.head()), Err(ListError::Sentinel));
    /// assert_eq!(Vec::from_iter(list), vec!['b']);
    /// ```
    pub fn remove_node(&mut self, id: NodeId) -> Result<T, ListError> {
        let slot = self.slot_of(id)?;
        self.detach(slot, None).ok_or(ListError::Detached)
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.detach(self.first_node(), Some(0))
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let at = self.len.checked_sub(1)?;
        self.detach(self.last_node(), Some(at))
    }

    /// Removes every element, returning them in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.reset(), vec![1, 2, 3]);
    /// assert!(list.is_empty());
    /// assert!(list.reset().is_empty());
    /// ```
    pub fn reset(&mut self) -> Vec<T> {
        self.drain().collect()
    }
}

impl List<Value> {
    /// Borrow the element at `index` as a `V`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{Kind, List, ListError, Value};
    ///
    /// let list = List::from_iter([Value::from(1), Value::from("a")]);
    /// assert_eq!(list.get_as::<i64>(0), Ok(&1));
    /// assert_eq!(list.get_as::<str>(-1), Ok("a"));
    /// assert_eq!(
    ///     list.get_as::<i64>(1),
    ///     Err(ListError::TypeMismatch { expected: Kind::Int, found: Kind::Text })
    /// );
    /// assert_eq!(
    ///     list.get_as::<i64>(2),
    ///     Err(ListError::OutOfRange { index: 2, len: 2 })
    /// );
    /// ```
    pub fn get_as<V: FromValue + ?Sized>(&self, index: isize) -> Result<&V, ListError> {
        self.get(index)
            .ok_or(ListError::OutOfRange {
                index,
                len: self.len,
            })?
            .try_as()
    }
}

impl<T: Display> List<T> {
    /// Render every value in brackets, in order, under a header line.
    ///
    /// With `wrap` set, a line break follows every `wrap` values.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.render(None), "List with 3 items:\n[ 1 ] [ 2 ] [ 3 ] \n");
    /// assert_eq!(list.render(Some(2)), "List with 3 items:\n[ 1 ] [ 2 ] \n[ 3 ] \n");
    /// assert_eq!(List::<i64>::new().render(None), "List with 0 items:\n[ ]\n");
    /// ```
    pub fn render(&self, wrap: Option<usize>) -> String {
        let mut out = format!("List with {} items:\n", self.len);
        if self.is_empty() {
            out.push_str("[ ]\n");
            return out;
        }
        let wrap = wrap.filter(|&w| w > 0);
        for (i, item) in self.iter().enumerate() {
            out.push_str(&format!("[ {} ] ", item));
            if let Some(w) = wrap {
                if (i + 1) % w == 0 {
                    out.push('\n');
                }
            }
        }
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::list::List;
    use crate::value::Value;
    use proptest::prelude::*;
    use std::fmt::Debug;

    fn list_eq<T, I>(list: &List<T>, expected: I)
    where
        T: Debug + Clone + PartialEq,
        I: IntoIterator<Item = T>,
    {
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
        assert_eq!(
            Vec::from_iter(list.iter().rev().cloned()),
            Vec::from_iter(list.iter().cloned()).into_iter().rev().collect::<Vec<_>>()
        );
    }

    #[test]
    fn list_create() {
        let mut list = List::<i64>::new();
        assert!(list.is_empty());
        list.append(1).unwrap();
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.append(1).unwrap();
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());

        list.push_front(1).unwrap();
        list.push_front(2).unwrap();
        list.append(3).unwrap();
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = List::from_iter(0..10);
        list.insert_at(5, 10).unwrap();
        list_eq(&list, (0..5).chain(Some(10)).chain(5..10));

        assert_eq!(list.remove_at(10), Some(9));
        assert_eq!(list.back(), Some(&8));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert_at(0, 11).unwrap();
        assert_eq!(list.front(), Some(&11));
        assert_eq!(list.remove_at(0), Some(11));

        // walks from the tail half
        list.insert_at(8, 12).unwrap();
        list_eq(&list, (0..5).chain(Some(10)).chain(5..7).chain(Some(12)).chain(7..9));
        assert_eq!(list.get(8), Some(&12));
        assert_eq!(list.get(-3), Some(&12));
    }

    #[test]
    fn list_empty_queries_never_fail() {
        let mut list = List::<i64>::new();
        assert_eq!(list.remove_at(0), None);
        assert_eq!(list.get(0), None);
        assert_eq!(list.get(-1), None);
        assert!(!list.restore());
        assert_eq!(list.cursor_index(), 0);
        assert_eq!(list.set(0, 1), Err(ListError::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn list_nodes_are_reused_safely() {
        let mut list = List::new();
        let a = list.append(1).unwrap();
        list.remove_node(a).unwrap();
        let b = list.append(2).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
        assert_eq!(list.value(a), None);
        assert_eq!(list.value(b), Some(&2));
        assert_eq!(list.remove_node(a), Err(ListError::Detached));
        assert_eq!(list.remove_node(list.tail()), Err(ListError::Sentinel));
    }

    #[test]
    fn list_ignores_handles_from_other_lists() {
        let mut a = List::new();
        let mut b = List::new();
        let id_a = a.append(1).unwrap();
        let id_b = b.append(5).unwrap();
        assert_eq!(id_a.as_raw(), id_b.as_raw());

        assert_eq!(b.remove_node(id_a), Err(ListError::Detached));
        assert_eq!(b.value(id_a), None);
        assert!(b.is_immovable(id_a));
        assert_eq!(b.swap_nodes(id_a, id_b), Err(ListError::Detached));
        assert_eq!(b.remove_node(a.head()), Err(ListError::Detached));
        list_eq(&b, [5]);
        list_eq(&a, [1]);

        let copy = a.clone();
        assert_eq!(copy.value(id_a), None);
        assert_eq!(a.remove_node(id_a), Ok(1));
    }

    #[test]
    fn list_full_refuses_every_insertion() {
        let full = Err(ListError::CapacityExhausted { max: 1 });
        let mut list = List::<i64>::with_max_len(1);
        list.append(1).unwrap();
        assert!(list.is_full());

        assert_eq!(list.insert_at(0, 2), full);
        assert_eq!(list.insert_at(1, 2), full);
        assert_eq!(list.push_front(2), full);
        list.rewind();
        assert_eq!(list.cursor_mut().insert(2), full);
        assert_eq!(list.cursor_mut().insert_after(2), full);

        list_eq(&list, [1]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.occurrences(&2_i64), 0);
        assert_eq!(list.current(), Some(&1));
        assert_eq!(list.cursor_index(), 0);
    }

    #[test]
    fn list_set_updates_database() {
        let mut list = List::from_iter([Value::from(1), Value::from(2)]);
        assert_eq!(list.set(-1, Value::from("two")), Ok(Value::from(2)));
        assert!(!list.approx_contains(&2_i64));
        assert!(list.approx_contains("two"));
        assert_eq!(list.occurrences(&1_i64), 1);
    }

    #[test]
    fn list_database_tracks_removals() {
        let mut list = List::from_iter([1, 1, 2]);
        assert_eq!(list.occurrences(&1), 2);
        assert_eq!(list.distinct(), 2);
        list.remove_at(0);
        assert_eq!(list.occurrences(&1), 1);
        list.clear();
        assert_eq!(list.occurrences(&1), 0);
        assert_eq!(list.distinct(), 0);
        assert!(list.is_empty());
        list.append(5).unwrap();
        list_eq(&list, [5]);
    }

    #[test]
    fn list_display() {
        let list = List::from_iter([Value::from(1), Value::from("a"), Value::Empty]);
        assert_eq!(list.to_string(), "List with 3 items:\n[ 1 ] [ a ] [ EMPTY ] \n");
        assert_eq!(
            list.render(Some(3)),
            "List with 3 items:\n[ 1 ] [ a ] [ EMPTY ] \n"
        );
        assert_eq!(list.render(Some(0)), list.render(None));
        assert_eq!(format!("{:?}", list), r#"[Int(1), Text("a"), Empty]"#);
    }

    proptest! {
        #[test]
        fn appends_then_front_removals_empty_the_list(values in proptest::collection::vec(any::<i64>(), 0..64)) {
            let mut list = List::new();
            for v in &values {
                list.append(*v).unwrap();
            }
            prop_assert_eq!(list.len(), values.len());
            for v in &values {
                prop_assert_eq!(list.remove_at(0), Some(*v));
            }
            prop_assert_eq!(list.len(), 0);
            prop_assert!(list.is_empty());
            prop_assert_eq!(list.distinct(), 0);
        }

        #[test]
        fn negative_one_is_the_last_index(values in proptest::collection::vec(any::<i64>(), 1..32)) {
            let list = List::from_iter(values.iter().copied());
            prop_assert_eq!(list.get(-1), list.get(values.len() as isize - 1));
            prop_assert_eq!(list.get(-1), values.last());
        }

        #[test]
        fn database_matches_contents(ops in proptest::collection::vec((any::<bool>(), 0_i64..5), 0..64)) {
            let mut list = List::new();
            for (push, v) in ops {
                if push {
                    list.append(v).unwrap();
                } else {
                    list.remove_at(0);
                }
            }
            for v in 0_i64..5 {
                prop_assert_eq!(list.occurrences(&v), list.iter().filter(|x| **x == v).count());
            }
        }
    }
}
