use crate::arena::Arena;
use crate::grid::{Slot, TriangularGrid};
use crate::node::{BiNode, NIL};
use std::iter::FusedIterator;

/// An iterator over every cell of a `TriangularGrid`, row by row.
///
/// # Examples
///
/// ```
/// use cursor_list::{Slot, TriangularGrid};
///
/// let mut grid = TriangularGrid::new();
/// grid.append_row([1]);
/// grid.append_row([2, 3]);
/// let cells = Vec::from_iter(grid.iter().filter_map(Slot::value));
/// assert_eq!(cells, vec![&1, &2, &3]);
/// ```
pub struct Iter<'a, T: 'a> {
    nodes: &'a Arena<BiNode<Slot<T>>>,
    row_head: usize,
    node: usize,
    remaining: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(grid: &'a TriangularGrid<T>) -> Self {
        let first = grid.first_row();
        Self {
            nodes: &grid.nodes,
            row_head: first,
            node: first,
            remaining: grid.len(),
        }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a Slot<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = &self.nodes[self.node];
        self.remaining -= 1;
        self.node = match current.link.next {
            NIL => {
                self.row_head = self.nodes[self.row_head].down;
                self.row_head
            }
            next => next,
        };
        current.link.element.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// An iterator over the cells of one grid row, front to back.
pub struct RowIter<'a, T: 'a> {
    nodes: &'a Arena<BiNode<Slot<T>>>,
    node: usize,
    remaining: usize,
}

impl<'a, T: 'a> RowIter<'a, T> {
    pub(crate) fn new(grid: &'a TriangularGrid<T>, row_head: usize, width: usize) -> Self {
        Self {
            nodes: &grid.nodes,
            node: row_head,
            remaining: width,
        }
    }
}

impl<'a, T: 'a> Iterator for RowIter<'a, T> {
    type Item = &'a Slot<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = &self.nodes[self.node];
        self.node = current.link.next;
        self.remaining -= 1;
        current.link.element.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a> ExactSizeIterator for RowIter<'a, T> {}

impl<'a, T: 'a> FusedIterator for RowIter<'a, T> {}

impl<'a, T> IntoIterator for &'a TriangularGrid<T> {
    type Item = &'a Slot<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Slot, TriangularGrid};

    #[test]
    fn test_iter_rows_in_order() {
        let mut grid = TriangularGrid::new();
        for r in 0..4 {
            grid.append_row(std::iter::repeat(r).take(r + 1));
        }
        let mut iter = grid.iter();
        assert_eq!(iter.len(), 10);
        let flat = Vec::from_iter(iter.by_ref().map(|c| c.value().copied()));
        assert_eq!(
            flat,
            [0, 1, 1, 2, 2, 2, 3, 3, 3, 3].map(Some).to_vec()
        );
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_row_iter() {
        let mut grid = TriangularGrid::new();
        grid.append_row(['x']);
        grid.append_row(['y']);
        let mut row = grid.row(-1).unwrap();
        assert_eq!(row.len(), 2);
        assert_eq!(row.next(), Some(&Slot::Filled('y')));
        assert_eq!(row.next(), Some(&Slot::Empty));
        assert_eq!(row.next(), None);
        assert_eq!((&grid).into_iter().count(), 3);
        assert_eq!(TriangularGrid::<char>::new().iter().next(), None);
    }
}
