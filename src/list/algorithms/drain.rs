use crate::list::{List, TAIL};
use crate::value::{Element, Kind};
use log::trace;
use std::fmt;

/// A draining iterator over the elements of a `List`, front to back.
///
/// Whatever is left when the `Drain` is dropped is removed as well.
pub struct Drain<'a, T: Element + 'a> {
    list: &'a mut List<T>,
}

impl<'a, T: Element + 'a> Drain<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self { list }
    }
}

impl<T: Element> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T: Element> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.list.clear();
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&*self.list).finish()
    }
}

/// An iterator that removes, in order, the elements matching a predicate.
///
/// Elements the predicate rejects stay where they are. Dropping the
/// iterator early still removes every remaining match.
pub struct DrainFilter<'a, T: Element + 'a, F: 'a>
where
    F: FnMut(&T) -> bool,
{
    list: &'a mut List<T>,
    /// next slot to test
    current: usize,
    /// index of `current` in the list
    index: usize,
    filter: F,
}

impl<'a, T: Element, F> DrainFilter<'a, T, F>
where
    F: FnMut(&T) -> bool,
{
    pub(crate) fn new(list: &'a mut List<T>, filter: F) -> Self {
        let current = list.first_node();
        Self {
            list,
            current,
            index: 0,
            filter,
        }
    }
}

impl<T: Element, F> Iterator for DrainFilter<'_, T, F>
where
    F: FnMut(&T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current != TAIL {
            let slot = self.current;
            let node = &self.list.nodes[slot];
            self.current = node.next;
            if (self.filter)(node.element.as_ref()?) {
                return self.list.detach(slot, Some(self.index));
            }
            self.index += 1;
        }
        None
    }
}

impl<T: Element, F> Drop for DrainFilter<'_, T, F>
where
    F: FnMut(&T) -> bool,
{
    fn drop(&mut self) {
        self.for_each(drop);
    }
}

impl<T: Element + fmt::Debug, F> fmt::Debug for DrainFilter<'_, T, F>
where
    F: FnMut(&T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DrainFilter").field(&*self.list).finish()
    }
}

impl<T: Element> List<T> {
    /// Removes every element, yielding them front to back.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    /// Removes and yields the elements for which `filter` returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from_iter(1..=6);
    /// let evens = Vec::from_iter(list.drain_filter(|x| x % 2 == 0));
    /// assert_eq!(evens, vec![2, 4, 6]);
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 5]);
    /// ```
    pub fn drain_filter<F>(&mut self, filter: F) -> DrainFilter<'_, T, F>
    where
        F: FnMut(&T) -> bool,
    {
        DrainFilter::new(self, filter)
    }

    /// Removes every value of exactly the given kind in a single pass,
    /// returning them in their original order.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{Kind, List, Value};
    ///
    /// let mut list = List::from_iter([
    ///     Value::from(1),
    ///     Value::from("a"),
    ///     Value::from(2),
    /// ]);
    /// assert_eq!(list.extract_by_type(Kind::Int), vec![Value::Int(1), Value::Int(2)]);
    /// assert_eq!(Vec::from_iter(list), vec![Value::from("a")]);
    /// ```
    pub fn extract_by_type(&mut self, kind: Kind) -> Vec<T> {
        let extracted = Vec::from_iter(self.drain_filter(|v| v.kind() == kind));
        trace!("extracted {} values of kind {}", extracted.len(), kind);
        extracted
    }
}
