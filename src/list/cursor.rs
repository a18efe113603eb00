use crate::arena::NodeId;
use crate::error::ListError;
use crate::list::{List, Position, HEAD, TAIL};
use crate::value::Element;
use std::fmt;
use std::fmt::Formatter;

/// The traversal cursor of a list.
///
/// Every `List` owns one cursor, always sitting on a node of its chain
/// (sentinels included), and one bookmark slot. [`rewind`](List::rewind)
/// and [`unwind`](List::unwind) save the cursor into the bookmark before
/// jumping to an end of the list, and [`restore`](List::restore) pops it
/// back. Saving again before restoring overwrites the earlier bookmark.
///
/// # Examples
///
/// Here is a simple example showing how the cursor works. (The sentinels
/// are denoted by `^` and `$`).
/// ```
/// use cursor_list::List;
///
/// // Create a list: [^ A B C D $]
/// let mut list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Rewind to the first node: [^|A B C D $] (index = 0)
/// list.rewind();
/// assert_eq!(list.current(), Some(&'A'));
///
/// // Step forward: [^ A|B C D $] (index = 1)
/// assert_eq!(list.advance(), Some(&'B'));
/// assert_eq!(list.cursor_index(), 1);
///
/// // Unwind to the last node, bookmarking B: [^ A B C|D $] (index = 3)
/// list.unwind();
/// assert_eq!(list.current(), Some(&'D'));
/// assert_eq!(list.advance(), None);
///
/// // Pop the bookmark: back at B
/// assert!(list.restore());
/// assert_eq!(list.current(), Some(&'B'));
/// assert!(!list.restore());
/// ```
impl<T> List<T> {
    /// Save the cursor into the bookmark and move it to the first node, or
    /// to the head sentinel if the list is empty.
    pub fn rewind(&mut self) {
        self.bookmark = Some(self.cursor);
        self.cursor = if self.is_empty() {
            Position::START
        } else {
            Position::at(self.first_node(), 0)
        };
    }

    /// Save the cursor into the bookmark and move it to the last node, or
    /// to the tail sentinel if the list is empty.
    pub fn unwind(&mut self) {
        self.bookmark = Some(self.cursor);
        self.cursor = match self.len.checked_sub(1) {
            Some(last) => Position::at(self.last_node(), last),
            None => Position::at(TAIL, 0),
        };
    }

    /// Pop the bookmark back into the cursor.
    ///
    /// Returns `false`, leaving the cursor alone, if nothing was saved
    /// since the last restore.
    pub fn restore(&mut self) -> bool {
        match self.bookmark.take() {
            Some(bookmark) => {
                self.cursor = bookmark;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if a real node follows the cursor.
    pub fn has_next(&self) -> bool {
        self.cursor.node != TAIL && self.nodes[self.cursor.node].next != TAIL
    }

    /// Returns `true` if a real node precedes the cursor.
    pub fn has_prev(&self) -> bool {
        self.cursor.node != HEAD && self.nodes[self.cursor.node].prev != HEAD
    }

    /// Move the cursor to the next real node and return its value, or
    /// return `None` and stay put if there is none.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn advance(&mut self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }
        let Position { node, index } = self.cursor;
        let index = if node == HEAD { Some(0) } else { index.map(|i| i + 1) };
        self.cursor = Position {
            node: self.nodes[node].next,
            index,
        };
        self.current()
    }

    /// Move the cursor to the previous real node and return its value, or
    /// return `None` and stay put if there is none.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn retreat(&mut self) -> Option<&T> {
        if !self.has_prev() {
            return None;
        }
        let Position { node, index } = self.cursor;
        let index = if node == TAIL {
            Some(self.len - 1)
        } else {
            index.map(|i| i - 1)
        };
        self.cursor = Position {
            node: self.nodes[node].prev,
            index,
        };
        self.current()
    }

    /// The value under the cursor, or `None` on a sentinel.
    pub fn current(&self) -> Option<&T> {
        self.nodes[self.cursor.node].element.as_ref()
    }

    /// The number of real nodes between the head sentinel and the cursor.
    pub fn cursor_index(&self) -> usize {
        self.position_index(self.cursor)
    }

    pub fn cursor_node(&self) -> NodeId {
        self.nodes.id(self.cursor.node)
    }

    /// Borrow the list through its cursor for editing at the cursor.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }
}

/// The list cursor with editing operations.
///
/// A `CursorMut` borrows the list mutably and works on the list's own
/// cursor, so moves made through it persist after it is dropped.
///
/// # Examples
///
/// ```
/// use cursor_list::List;
///
/// let mut list = List::from_iter([1, 2, 3, 4]);
/// list.rewind();
///
/// let mut cursor = list.cursor_mut();
/// cursor.insert(0).unwrap(); // becomes [0, 1, 2, 3, 4], still at 1
/// assert_eq!(cursor.current(), Some(&1));
/// assert_eq!(cursor.index(), 1);
///
/// assert!(cursor.move_next());
/// assert_eq!(cursor.remove(), Some(2)); // becomes [0, 1, 3, 4], at 3
/// assert_eq!(cursor.current(), Some(&3));
///
/// assert_eq!(Vec::from_iter(list), vec![0, 1, 3, 4]);
/// ```
pub struct CursorMut<'a, T: 'a> {
    list: &'a mut List<T>,
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self { list }
    }

    /// Return the index of the cursor
    pub fn index(&self) -> usize {
        self.list.cursor_index()
    }

    pub fn current(&self) -> Option<&T> {
        self.list.current()
    }

    pub fn move_next(&mut self) -> bool {
        self.list.advance().is_some()
    }

    pub fn move_prev(&mut self) -> bool {
        self.list.retreat().is_some()
    }

    /// Temporarily view the list read-only.
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

impl<'a, T: Element + 'a> CursorMut<'a, T> {
    /// Insert a new item right before the cursor. On the head sentinel the
    /// item becomes the first element. The cursor keeps its node.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn insert(&mut self, item: T) -> Result<NodeId, ListError> {
        let list = &mut *self.list;
        list.check_capacity()?;
        let (next, at) = match list.cursor.node {
            HEAD => (list.first_node(), 0),
            node => (node, list.cursor_index()),
        };
        let slot = list.attach_before(next, at, item);
        Ok(list.nodes.id(slot))
    }

    /// Insert a new item right after the cursor. On the tail sentinel the
    /// item becomes the last element. The cursor keeps its node.
    pub fn insert_after(&mut self, item: T) -> Result<NodeId, ListError> {
        let list = &mut *self.list;
        list.check_capacity()?;
        let (next, at) = match list.cursor.node {
            HEAD => (list.first_node(), 0),
            TAIL => (TAIL, list.len),
            node => (list.nodes[node].next, list.cursor_index() + 1),
        };
        let slot = list.attach_before(next, at, item);
        Ok(list.nodes.id(slot))
    }

    /// Remove the element under the cursor and return it, or return `None`
    /// on a sentinel. The cursor moves to the successor, else the
    /// predecessor, else the head sentinel.
    ///
    /// This operation should compute in *O*(*1*) time while the cursor
    /// index is known.
    pub fn remove(&mut self) -> Option<T> {
        let list = &mut *self.list;
        let at = list.cursor_index();
        list.detach(list.cursor.node, Some(at))
    }

    /// Replace the element under the cursor, returning the old one.
    pub fn replace(&mut self, item: T) -> Result<T, ListError> {
        let list = &mut *self.list;
        match list.cursor.node {
            HEAD | TAIL => Err(ListError::Sentinel),
            _ => list.set(list.cursor_index() as isize, item),
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("list", &self.list)
            .field("current", &self.current())
            .field("index", &self.index())
            .finish()
    }
}
