use crate::list::{List, TAIL};
use crate::value::{Element, Kind, Value};
use log::trace;
use std::cmp::Ordering;

/// Compare two strings lexically, ignoring case.
///
/// # Examples
///
/// ```
/// use cursor_list::compare_ignore_case;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_ignore_case("apple", "Banana"), Ordering::Less);
/// assert_eq!(compare_ignore_case("ABC", "abc"), Ordering::Equal);
/// assert_eq!(compare_ignore_case("abcd", "ABC"), Ordering::Greater);
/// ```
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    let a = a.chars().flat_map(char::to_lowercase);
    let b = b.chars().flat_map(char::to_lowercase);
    a.cmp(b)
}

impl<T: Element> List<T> {
    /// Move every value of the given kind to the back of the list, sorted
    /// with `compare`.
    ///
    /// Values of other kinds keep their relative order. The sort is stable
    /// (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m* * log(*m*)) time,
    /// where *m* is the number of values of `kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{Kind, List, Value};
    ///
    /// let mut list = List::from_iter([
    ///     Value::from(3.5),
    ///     Value::from("x"),
    ///     Value::from(-1.0),
    /// ]);
    /// list.sort_by_type(Kind::Float, |a, b| b.to_string().cmp(&a.to_string()));
    /// assert_eq!(
    ///     Vec::from_iter(list),
    ///     vec![Value::from("x"), Value::from(3.5), Value::from(-1.0)]
    /// );
    /// ```
    pub fn sort_by_type<F>(&mut self, kind: Kind, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut extracted = self.extract_by_type(kind);
        extracted.sort_by(compare);
        trace!("re-appending {} sorted values of kind {}", extracted.len(), kind);
        for value in extracted {
            self.attach_before(TAIL, self.len, value);
        }
    }
}

impl List<Value> {
    /// Move the integers to the back of the list in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, Value};
    ///
    /// let mut list = List::from_iter([
    ///     Value::from(3),
    ///     Value::from("b"),
    ///     Value::from(1),
    ///     Value::from("a"),
    ///     Value::from(2),
    /// ]);
    /// list.sort_ints();
    /// assert_eq!(list.to_string(), "List with 5 items:\n[ b ] [ a ] [ 1 ] [ 2 ] [ 3 ] \n");
    /// ```
    pub fn sort_ints(&mut self) {
        self.sort_by_type(Kind::Int, |a, b| match (a, b) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            _ => Ordering::Equal,
        });
    }

    /// Move the text values to the back of the list in case-insensitive
    /// lexical order.
    pub fn sort_text(&mut self) {
        self.sort_by_type(Kind::Text, |a, b| match (a, b) {
            (Value::Text(a), Value::Text(b)) => compare_ignore_case(a, b),
            _ => Ordering::Equal,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::compare_ignore_case;
    use crate::list::List;
    use crate::value::{Kind, Value};
    use std::cmp::Ordering;

    #[test]
    fn test_compare_ignore_case() {
        assert_eq!(compare_ignore_case("", ""), Ordering::Equal);
        assert_eq!(compare_ignore_case("", "a"), Ordering::Less);
        assert_eq!(compare_ignore_case("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(compare_ignore_case("ÉTÉ", "été"), Ordering::Equal);
    }

    #[test]
    fn test_sort_text_is_stable() {
        let mut list = List::from_iter([
            Value::from("b"),
            Value::from(7),
            Value::from("B"),
            Value::from("a"),
            Value::from(true),
        ]);
        list.sort_text();
        assert_eq!(
            Vec::from_iter(list.iter().map(|v| v.to_string())),
            vec!["7", "true", "a", "b", "B"]
        );
        assert_eq!(list.occurrences("B"), 1);
    }

    #[test]
    fn test_sort_ints_keeps_cursor_on_survivors() {
        let mut list = List::from_iter([Value::from(2), Value::from('c'), Value::from(1)]);
        list.rewind();
        list.advance();
        assert_eq!(list.current(), Some(&Value::Char('c')));
        list.sort_ints();
        assert_eq!(list.current(), Some(&Value::Char('c')));
        assert_eq!(list.cursor_index(), 0);
        assert_eq!(list.get_as::<i64>(1), Ok(&1));
        assert_eq!(list.get_as::<i64>(2), Ok(&2));
    }

    #[test]
    fn test_sort_by_type_on_generic_list() {
        let mut list = List::from_iter([3, 1, 2]);
        list.sort_by_type(Kind::Int, |a, b| a.cmp(b));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3]);
        list.sort_by_type(Kind::Text, |a, b| a.cmp(b));
        assert_eq!(list.len(), 3);
    }
}
