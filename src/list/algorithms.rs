use crate::arena::NodeId;
use crate::error::ListError;
use crate::list::List;
use crate::value::{Element, Kind};
use log::debug;
use std::hash::{Hash, Hasher};
use std::ptr;

pub mod drain;
pub mod sort;

/// The equality used by every exact membership and search operation.
///
/// Two values are equal if they are the same object, if they compare equal,
/// or if their addresses coincide once cast to an untyped pointer.
///
/// # Examples
///
/// ```
/// use cursor_list::value_equality;
///
/// let a = String::from("x");
/// assert!(value_equality(&a, &a));
/// assert!(value_equality(&a, &String::from("x")));
/// assert!(!value_equality(&a, &String::from("y")));
/// ```
pub fn value_equality<T: PartialEq>(a: &T, b: &T) -> bool {
    ptr::eq(a, b) || a == b || ptr::eq(a as *const T as *const (), b as *const T as *const ())
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

/// A clone starts with a fresh cursor and no bookmark.
impl<T: Element + Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list = List::with_max_len(self.max_len());
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elt in self {
            elt.hash(state);
        }
        self.len().hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given
    /// value, walking the whole list.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let list = List::from_iter([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| value_equality(e, x))
    }

    /// Returns `true` if every one of `values` is contained in the list.
    pub fn contains_all<'a, I>(&self, values: I) -> bool
    where
        T: PartialEq + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        values.into_iter().all(|x| self.contains(x))
    }

    /// The index of the first element equal to `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let list = List::from_iter(['a', 'b', 'a']);
    /// assert_eq!(list.index_of(&'a'), Some(0));
    /// assert_eq!(list.last_index_of(&'a'), Some(2));
    /// assert_eq!(list.index_of(&'z'), None);
    /// ```
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|e| value_equality(e, x))
    }

    /// The index of the last element equal to `x`, scanning from the back.
    pub fn last_index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|e| value_equality(e, x))
    }

    /// Exchange the values at `i` and `j`, leaving the nodes in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, ListError};
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.swap(0, -1).unwrap();
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![3, 2, 1]);
    ///
    /// assert_eq!(list.swap(1, 1), Err(ListError::SameNode));
    /// assert_eq!(list.swap(0, 3), Err(ListError::OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn swap(&mut self, i: isize, j: isize) -> Result<(), ListError> {
        let len = self.len();
        let a = self
            .resolve(i)
            .ok_or(ListError::OutOfRange { index: i, len })?;
        let b = self
            .resolve(j)
            .ok_or(ListError::OutOfRange { index: j, len })?;
        if a == b {
            debug!("refusing to swap index {} with itself", a);
            return Err(ListError::SameNode);
        }
        let (a, b) = (self.node_at(a), self.node_at(b));
        self.swap_slots(a, b);
        Ok(())
    }

    /// Exchange the values of the nodes `a` and `b`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn swap_nodes(&mut self, a: NodeId, b: NodeId) -> Result<(), ListError> {
        let (a, b) = (self.slot_of(a)?, self.slot_of(b)?);
        if a == b {
            debug!("refusing to swap slot {} with itself", a);
            return Err(ListError::SameNode);
        }
        self.swap_slots(a, b);
        Ok(())
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        let first = self.nodes[a].element.take();
        let second = std::mem::replace(&mut self.nodes[b].element, first);
        self.nodes[a].element = second;
    }
}

impl<T: Element> List<T> {
    /// The first value of the given kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{Kind, List, Value};
    ///
    /// let list = List::from_iter([Value::from("a"), Value::from(1), Value::from(2)]);
    /// assert_eq!(list.first_of_kind(Kind::Int), Some(&Value::Int(1)));
    /// assert_eq!(list.last_of_kind(Kind::Int), Some(&Value::Int(2)));
    /// assert_eq!(list.first_of_kind(Kind::Bool), None);
    /// ```
    pub fn first_of_kind(&self, kind: Kind) -> Option<&T> {
        self.iter().find(|v| v.kind() == kind)
    }

    pub fn last_of_kind(&self, kind: Kind) -> Option<&T> {
        self.iter().rev().find(|v| v.kind() == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::value_equality;
    use crate::error::ListError;
    use crate::list::List;
    use crate::value::Value;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_eq_and_hash() {
        let a = List::from_iter([1, 2, 3]);
        let mut b = List::from_iter([1, 2]);
        assert_ne!(a, b);
        b.append(3).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        b.advance();
        assert_eq!(a, b);
    }

    #[test]
    fn test_clone_keeps_capacity() {
        let mut list = List::with_max_len(2);
        list.extend([Value::from(1), Value::from("a")]);
        list.unwind();
        let copy = list.clone();
        assert_eq!(copy, list);
        assert_eq!(copy.max_len(), 2);
        assert_eq!(copy.current(), None);
        assert_eq!(copy.occurrences(&1_i64), 1);
    }

    #[test]
    fn test_membership() {
        let list = List::from_iter([Value::from(1), Value::from(2.5), Value::from("b")]);
        assert!(list.contains(&Value::from(2.5)));
        assert!(!list.contains(&Value::from("B")));
        assert!(list.contains_all(&[Value::from(1), Value::from("b")]));
        assert!(!list.contains_all(&[Value::from(1), Value::Empty]));
        assert!(list.contains_all(&[]));
        assert_eq!(list.index_of(&Value::from("b")), Some(2));
        assert_eq!(List::<i64>::new().last_index_of(&1), None);
    }

    #[test]
    fn test_swap_nodes() {
        let mut list = List::new();
        let a = list.append('a').unwrap();
        let b = list.append('b').unwrap();
        list.swap_nodes(a, b).unwrap();
        assert_eq!(list.value(a), Some(&'b'));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec!['b', 'a']);
        assert_eq!(list.occurrences(&'a'), 1);

        assert_eq!(list.swap_nodes(a, a), Err(ListError::SameNode));
        assert_eq!(list.swap_nodes(a, list.head()), Err(ListError::Sentinel));
        list.remove_node(b).unwrap();
        assert_eq!(list.swap_nodes(a, b), Err(ListError::Detached));
    }

    #[test]
    fn test_swap_keeps_cursor_on_node() {
        let mut list = List::from_iter([1, 2, 3]);
        list.rewind();
        list.swap(0, 2).unwrap();
        assert_eq!(list.current(), Some(&3));
        assert_eq!(list.cursor_index(), 0);
    }

    proptest! {
        #[test]
        fn swap_twice_restores_order(
            values in proptest::collection::vec(any::<i64>(), 2..32),
            i in any::<prop::sample::Index>(),
            j in any::<prop::sample::Index>(),
        ) {
            let (i, j) = (i.index(values.len()), j.index(values.len()));
            prop_assume!(i != j);
            let mut list = List::from_iter(values.iter().copied());
            list.swap(i as isize, j as isize).unwrap();
            list.swap(i as isize, j as isize).unwrap();
            prop_assert_eq!(Vec::from_iter(list), values);
        }

        #[test]
        fn address_branch_of_equality_is_subsumed(a in any::<i64>(), b in any::<i64>()) {
            let (x, y) = (Value::from(a), Value::from(b));
            prop_assert_eq!(value_equality(&x, &y), x == y);
            prop_assert!(value_equality(&x, &x));
            let same = &x;
            prop_assert_eq!(
                std::ptr::eq(same as *const Value as *const (), &x as *const Value as *const ()),
                std::ptr::eq(same, &x)
            );
        }
    }
}
