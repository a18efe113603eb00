//! A triangular stack of rows built from doubly-linked row chains.
//!
//! Row *r* (0-indexed) holds exactly *r + 1* cells, so a grid of *k* rows
//! holds *k(k+1)/2* cells, the shape of Pascal's triangle:
//!
//! ```text
//!   ^                      (head sentinel)
//!   │ down
//!   [1]                    row 0
//!   │
//!   [1]─[1]                row 1
//!   │
//!   [1]─[2]─[1]            row 2
//!   │
//!   $                      (tail sentinel)
//! ```
//!
//! Only the first cell of each row carries vertical links. Rows are pushed
//! and popped at the bottom; a row's length is fixed at creation.

use std::fmt::{self, Debug, Display, Formatter};

use log::trace;

use crate::arena::Arena;
use crate::list::{value_equality, HEAD, TAIL};
use crate::node::{BiNode, NIL};

pub mod iterator;

pub use iterator::{Iter, RowIter};

/// The content of a grid cell.
///
/// Cells a row was not given a value for hold `Empty`, which is distinct
/// from any stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slot<T> {
    #[default]
    Empty,
    Filled(T),
}

impl<T> Slot<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Slot::Filled(v) => Some(v),
            Slot::Empty => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Slot::Filled(v) => Some(v),
            Slot::Empty => None,
        }
    }
}

impl<T: Display> Display for Slot<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Filled(v) => Display::fmt(v, f),
            Slot::Empty => f.write_str("EMPTY"),
        }
    }
}

/// A cell of the grid (or a sentinel) with its coordinates.
///
/// `row_head` is the first cell of the row holding `node`; on a sentinel
/// it is the sentinel itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GridPosition {
    pub(crate) row_head: usize,
    pub(crate) node: usize,
    pub(crate) row: usize,
    pub(crate) column: usize,
}

impl GridPosition {
    const START: GridPosition = GridPosition {
        row_head: HEAD,
        node: HEAD,
        row: 0,
        column: 0,
    };

    const END: GridPosition = GridPosition {
        row_head: TAIL,
        node: TAIL,
        row: 0,
        column: 0,
    };
}

/// A triangular grid whose row *r* holds *r + 1* cells.
///
/// Like [`List`](crate::List), the grid owns a traversal cursor and a
/// single bookmark slot. The cursor walks the cells in row-major order.
///
/// # Examples
///
/// ```
/// use cursor_list::{Slot, TriangularGrid};
///
/// let mut grid = TriangularGrid::new();
/// grid.append_row([1]);
/// grid.append_row([1, 1]);
/// grid.append_row([1, 2, 1]);
///
/// assert_eq!(grid.row_count(), 3);
/// assert_eq!(grid.len(), 6);
/// assert_eq!(grid.at(2, 2), Some(&Slot::Filled(2)));
/// assert_eq!(grid.get(-1, -1), Some(&1));
/// ```
pub struct TriangularGrid<T> {
    pub(crate) nodes: Arena<BiNode<Slot<T>>>,
    rows: usize,
    cursor: GridPosition,
    bookmark: Option<GridPosition>,
}

// private methods
impl<T> TriangularGrid<T> {
    pub(crate) fn first_row(&self) -> usize {
        self.nodes[HEAD].down
    }

    fn last_row(&self) -> usize {
        self.nodes[TAIL].up
    }

    /// The first cell of row `row`, walking from whichever end is closer.
    fn row_head_at(&self, row: usize) -> usize {
        debug_assert!(row < self.rows);
        if row < self.rows / 2 {
            (0..row).fold(self.first_row(), |node, _| self.nodes[node].down)
        } else {
            (row + 1..self.rows).fold(self.last_row(), |node, _| self.nodes[node].up)
        }
    }

    fn cell_in_row(&self, row_head: usize, column: usize) -> usize {
        (0..column).fold(row_head, |node, _| self.nodes[node].link.next)
    }

    /// The last cell of the row starting at `row_head`, with its column.
    fn row_end(&self, row_head: usize) -> (usize, usize) {
        let mut node = row_head;
        let mut column = 0;
        while self.nodes[node].link.next != NIL {
            node = self.nodes[node].link.next;
            column += 1;
        }
        (node, column)
    }

    fn last_cell_of(&self, row_head: usize, row: usize) -> GridPosition {
        let (node, column) = self.row_end(row_head);
        GridPosition {
            row_head,
            node,
            row,
            column,
        }
    }

    /// Map a possibly negative `(row, column)` pair to a row index and a
    /// 0-based column.
    ///
    /// Columns are 1-based: column *c* of row *r* is valid for
    /// `1 <= c <= r + 1`. A negative column counts from the end of the row,
    /// so `-1` is the last cell.
    fn resolve(&self, row: isize, column: isize) -> Option<(usize, usize)> {
        let rows = self.rows as isize;
        let row = if row < 0 { row + rows } else { row };
        if !(0..rows).contains(&row) {
            return None;
        }
        let width = row + 1;
        let column = match column {
            0 => return None,
            c if c < 0 => c + width,
            c => c - 1,
        };
        (0..width)
            .contains(&column)
            .then(|| (row as usize, column as usize))
    }

    fn locate(&self, row: isize, column: isize) -> Option<usize> {
        let (row, column) = self.resolve(row, column)?;
        Some(self.cell_in_row(self.row_head_at(row), column))
    }

    fn relocate(&self, position: GridPosition, removed: usize) -> GridPosition {
        if position.row_head != removed {
            return position;
        }
        match self.last_row() {
            HEAD => GridPosition::START,
            above => self.last_cell_of(above, self.rows - 1),
        }
    }
}

impl<T> TriangularGrid<T> {
    /// Create an empty grid.
    pub fn new() -> Self {
        let mut nodes = Arena::new();
        let head = nodes.alloc(BiNode::sentinel(NIL, TAIL));
        let tail = nodes.alloc(BiNode::sentinel(HEAD, NIL));
        debug_assert_eq!((head, tail), (HEAD, TAIL));
        Self {
            nodes,
            rows: 0,
            cursor: GridPosition::START,
            bookmark: None,
        }
    }

    /// The number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// The number of cells, *k(k+1)/2* for *k* rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * (self.rows + 1) / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Removes every row, resetting the cursor and discarding the bookmark.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Push a row of `row_count() + 1` cells below the last row and return
    /// the new row count.
    ///
    /// Missing values leave [`Slot::Empty`] cells; values past the row
    /// length are ignored.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*r*) time, *r* being the row
    /// length.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{Slot, TriangularGrid};
    ///
    /// let mut grid = TriangularGrid::new();
    /// assert_eq!(grid.append_row(['a', 'b']), 1);
    /// assert_eq!(grid.append_row(None), 2);
    /// assert_eq!(
    ///     Vec::from_iter(grid.row(1).unwrap()),
    ///     vec![&Slot::Empty, &Slot::Empty]
    /// );
    /// ```
    pub fn append_row<I: IntoIterator<Item = T>>(&mut self, values: I) -> usize {
        let width = self.rows + 1;
        let mut values = values.into_iter();
        let mut next_cell = || values.next().map_or(Slot::Empty, Slot::Filled);

        let above = self.last_row();
        let row_head = self
            .nodes
            .alloc(BiNode::row_head(above, TAIL, next_cell()));
        self.nodes[above].down = row_head;
        self.nodes[TAIL].up = row_head;

        let mut prev = row_head;
        for _ in 1..width {
            let cell = self.nodes.alloc(BiNode::member(prev, next_cell()));
            self.nodes[prev].link.next = cell;
            prev = cell;
        }
        let ignored = values.count();
        if ignored > 0 {
            trace!("row {} ignored {} surplus values", self.rows, ignored);
        }
        self.rows += 1;
        trace!("appended row {} of {} cells", self.rows - 1, width);
        self.rows
    }

    /// Pop the bottom row, returning its cells in order, or `None` if the
    /// grid has no rows.
    ///
    /// A cursor or bookmark on the removed row moves to the last cell of
    /// the row above, or to the head sentinel if no row is left.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{Slot, TriangularGrid};
    ///
    /// let mut grid = TriangularGrid::new();
    /// grid.append_row([1]);
    /// grid.append_row([2]);
    /// assert_eq!(grid.remove_last_row(), Some(vec![Slot::Filled(2), Slot::Empty]));
    /// assert_eq!(grid.remove_last_row(), Some(vec![Slot::Filled(1)]));
    /// assert_eq!(grid.remove_last_row(), None);
    /// ```
    pub fn remove_last_row(&mut self) -> Option<Vec<Slot<T>>> {
        if self.is_empty() {
            return None;
        }
        let removed = self.last_row();
        let above = self.nodes[removed].up;
        self.nodes[above].down = TAIL;
        self.nodes[TAIL].up = above;
        self.rows -= 1;

        self.cursor = self.relocate(self.cursor, removed);
        self.bookmark = self
            .bookmark
            .map(|bookmark| self.relocate(bookmark, removed));

        let mut cells = Vec::with_capacity(self.rows + 1);
        let mut node = removed;
        while node != NIL {
            let Some(cell) = self.nodes.release(node) else {
                break;
            };
            node = cell.link.next;
            cells.extend(cell.link.element);
        }
        trace!("removed row {} of {} cells", self.rows, cells.len());
        Some(cells)
    }

    /// The cell at `(row, column)`, or `None` if it is out of range.
    ///
    /// Negative rows count from the bottom, negative columns from the end
    /// of the row. Columns are 1-based, so `column` 0 is never valid.
    pub fn at(&self, row: isize, column: isize) -> Option<&Slot<T>> {
        let node = self.locate(row, column)?;
        self.nodes[node].link.element.as_ref()
    }

    /// The value at `(row, column)`, or `None` if it is out of range or the
    /// cell is empty.
    pub fn get(&self, row: isize, column: isize) -> Option<&T> {
        self.at(row, column)?.value()
    }

    /// Fill the cell at `(row, column)`, returning its previous content.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{Slot, TriangularGrid};
    ///
    /// let mut grid = TriangularGrid::new();
    /// grid.append_row(["x"]);
    /// assert_eq!(grid.set(0, 1, "y"), Some(Slot::Filled("x")));
    /// assert_eq!(grid.vacate(0, -1), Some(Slot::Filled("y")));
    /// assert_eq!(grid.set(0, 2, "z"), None);
    /// assert_eq!(grid.at(0, 1), Some(&Slot::Empty));
    /// ```
    pub fn set(&mut self, row: isize, column: isize, value: T) -> Option<Slot<T>> {
        self.replace(row, column, Slot::Filled(value))
    }

    /// Empty the cell at `(row, column)`, returning its previous content.
    pub fn vacate(&mut self, row: isize, column: isize) -> Option<Slot<T>> {
        self.replace(row, column, Slot::Empty)
    }

    fn replace(&mut self, row: isize, column: isize, slot: Slot<T>) -> Option<Slot<T>> {
        let node = self.locate(row, column)?;
        let cell = self.nodes[node].link.element.as_mut()?;
        Some(std::mem::replace(cell, slot))
    }

    /// Iterate over the cells of one row. Negative rows count from the
    /// bottom.
    pub fn row(&self, row: isize) -> Option<RowIter<'_, T>> {
        let (row, _) = self.resolve(row, 1)?;
        Some(RowIter::new(self, self.row_head_at(row), row + 1))
    }

    /// Iterate over every cell, row by row.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns `true` if some filled cell holds a value equal to `x`.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter()
            .filter_map(Slot::value)
            .any(|v| value_equality(v, x))
    }

    pub fn contains_all<'a, I>(&self, values: I) -> bool
    where
        T: PartialEq + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        values.into_iter().all(|x| self.contains(x))
    }
}

/// The traversal cursor walks cells in row-major order. Only one position
/// can be bookmarked at a time.
impl<T> TriangularGrid<T> {
    /// Save the cursor into the bookmark and move it to the first cell, or
    /// to the head sentinel if the grid is empty.
    pub fn rewind(&mut self) {
        self.bookmark = Some(self.cursor);
        self.cursor = match self.first_row() {
            TAIL => GridPosition::START,
            first => GridPosition {
                row_head: first,
                node: first,
                row: 0,
                column: 0,
            },
        };
    }

    /// Save the cursor into the bookmark and move it to the last cell of
    /// the last row, or to the tail sentinel if the grid is empty.
    pub fn unwind(&mut self) {
        self.bookmark = Some(self.cursor);
        self.cursor = match self.last_row() {
            HEAD => GridPosition::END,
            last => self.last_cell_of(last, self.rows - 1),
        };
    }

    /// Pop the bookmark back into the cursor, or return `false` if nothing
    /// was saved.
    pub fn restore(&mut self) -> bool {
        match self.bookmark.take() {
            Some(bookmark) => {
                self.cursor = bookmark;
                true
            }
            None => false,
        }
    }

    /// Move to the next cell, crossing into the next row at the end of a
    /// row, and return it. Stays put and returns `None` at the last cell.
    pub fn advance(&mut self) -> Option<&Slot<T>> {
        let GridPosition {
            row_head,
            node,
            row,
            column,
        } = self.cursor;
        let next = match node {
            TAIL => return None,
            HEAD => match self.first_row() {
                TAIL => return None,
                first => GridPosition {
                    row_head: first,
                    node: first,
                    row: 0,
                    column: 0,
                },
            },
            _ => match (self.nodes[node].link.next, self.nodes[row_head].down) {
                (NIL, TAIL) => return None,
                (NIL, below) => GridPosition {
                    row_head: below,
                    node: below,
                    row: row + 1,
                    column: 0,
                },
                (next, _) => GridPosition {
                    node: next,
                    column: column + 1,
                    ..self.cursor
                },
            },
        };
        self.cursor = next;
        self.current()
    }

    /// Move to the previous cell, dropping to the first cell of the row
    /// above at the start of a row, and return it. Stays put and returns
    /// `None` in the top row's first cell.
    pub fn retreat(&mut self) -> Option<&Slot<T>> {
        let GridPosition {
            row_head,
            node,
            row,
            column,
        } = self.cursor;
        let prev = match node {
            HEAD => return None,
            TAIL => match self.last_row() {
                HEAD => return None,
                last => self.last_cell_of(last, self.rows - 1),
            },
            _ if column > 0 => GridPosition {
                node: self.nodes[node].link.prev,
                column: column - 1,
                ..self.cursor
            },
            _ => match self.nodes[row_head].up {
                HEAD => return None,
                above => GridPosition {
                    row_head: above,
                    node: above,
                    row: row - 1,
                    column: 0,
                },
            },
        };
        self.cursor = prev;
        self.current()
    }

    /// The cell under the cursor, or `None` on a sentinel.
    pub fn current(&self) -> Option<&Slot<T>> {
        self.nodes[self.cursor.node].link.element.as_ref()
    }

    /// The cursor's `(row, column)`, with a 1-based column as taken by
    /// [`at`](TriangularGrid::at), or `None` on a sentinel.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self.cursor.node {
            HEAD | TAIL => None,
            _ => Some((self.cursor.row, self.cursor.column + 1)),
        }
    }
}

impl<T: Display> TriangularGrid<T> {
    /// Render every row on its own line, cells in brackets.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::TriangularGrid;
    ///
    /// let mut grid = TriangularGrid::new();
    /// assert_eq!(grid.render(), "Triangle with 0 rows:\n[ ]\n");
    /// grid.append_row([1]);
    /// grid.append_row([2]);
    /// assert_eq!(grid.render(), "Triangle with 2 rows:\n[ 1 ] \n[ 2 ] [ EMPTY ] \n");
    /// ```
    pub fn render(&self) -> String {
        let mut out = format!("Triangle with {} rows:\n", self.rows);
        if self.is_empty() {
            out.push_str("[ ]\n");
            return out;
        }
        for row in 0..self.rows {
            for cell in RowIter::new(self, self.row_head_at(row), row + 1) {
                out.push_str(&format!("[ {} ] ", cell));
            }
            out.push('\n');
        }
        out
    }
}

impl<T: Display> Display for TriangularGrid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<T: Debug> Debug for TriangularGrid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut rows = f.debug_list();
        let mut row_head = self.first_row();
        let mut width = 1;
        while row_head != TAIL {
            rows.entry(&Vec::from_iter(RowIter::new(self, row_head, width)));
            row_head = self.nodes[row_head].down;
            width += 1;
        }
        rows.finish()
    }
}

impl<T> Default for TriangularGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Slot, TriangularGrid};
    use proptest::prelude::*;

    fn pascal(rows: usize) -> TriangularGrid<u64> {
        let mut grid = TriangularGrid::new();
        let mut row = vec![1_u64];
        for _ in 0..rows {
            grid.append_row(row.iter().copied());
            let mut next = vec![1_u64];
            next.extend(row.windows(2).map(|w| w[0] + w[1]));
            next.push(1);
            row = next;
        }
        grid
    }

    #[test]
    fn grid_pascal_rows() {
        let grid = pascal(5);
        assert_eq!(grid.row_count(), 5);
        assert_eq!(grid.len(), 15);
        assert_eq!(grid.get(2, 2), Some(&2));
        assert_eq!(grid.get(4, 3), Some(&6));
        assert_eq!(
            Vec::from_iter(grid.row(-1).unwrap().filter_map(Slot::value)),
            vec![&1, &4, &6, &4, &1]
        );
        assert!(grid.contains(&6));
        assert!(!grid.contains(&5));
        assert!(grid.contains_all(&[1, 2, 3, 4]));
    }

    #[test]
    fn grid_coordinates_wrap() {
        let grid = pascal(3);
        assert_eq!(grid.get(-1, -1), grid.get(2, 3));
        assert_eq!(grid.get(-1, 1), Some(&1));
        assert_eq!(grid.get(2, -3), Some(&1));
        assert_eq!(grid.get(-3, -1), Some(&1));
        assert_eq!(grid.at(2, -4), None);
        assert_eq!(grid.at(-4, 1), None);
        assert_eq!(grid.at(3, 1), None);
        assert_eq!(grid.at(0, 0), None);
        assert_eq!(grid.at(0, 2), None);
        assert!(grid.row(3).is_none());
        assert!(TriangularGrid::<u64>::new().at(0, 1).is_none());
    }

    #[test]
    fn grid_pads_and_truncates_rows() {
        let mut grid = TriangularGrid::new();
        grid.append_row(["a", "b", "c"]);
        grid.append_row(["d"]);
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.at(0, 1), Some(&Slot::Filled("a")));
        assert_eq!(grid.at(1, 2), Some(&Slot::Empty));
        assert_eq!(grid.get(1, 2), None);
        assert_eq!(
            grid.to_string(),
            "Triangle with 2 rows:\n[ a ] \n[ d ] [ EMPTY ] \n"
        );
        assert_eq!(format!("{:?}", grid), r#"[[Filled("a")], [Filled("d"), Empty]]"#);
    }

    #[test]
    fn grid_traversal_crosses_rows() {
        let mut grid = TriangularGrid::new();
        grid.append_row([1]);
        grid.append_row([2, 3]);
        grid.append_row([4, 5, 6]);
        assert_eq!(grid.current(), None);
        assert_eq!(grid.position(), None);
        let mut seen = Vec::new();
        while let Some(cell) = grid.advance() {
            seen.extend(cell.value().copied());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(grid.position(), Some((2, 3)));

        // backwards, each row start drops to the first cell of the row above
        let mut back = Vec::new();
        while let Some(cell) = grid.retreat() {
            back.extend(cell.value().copied());
        }
        assert_eq!(back, vec![5, 4, 2, 1]);
        assert_eq!(grid.position(), Some((0, 1)));
        assert_eq!(grid.retreat(), None);
        assert_eq!(grid.position(), Some((0, 1)));
    }

    #[test]
    fn grid_retreat_from_row_start_lands_on_row_above_head() {
        let mut grid = TriangularGrid::new();
        grid.append_row([1]);
        grid.append_row([2, 3]);
        grid.append_row([4, 5, 6]);
        grid.rewind();
        grid.advance();
        grid.advance();
        grid.advance();
        assert_eq!(grid.position(), Some((2, 1)));
        assert_eq!(grid.retreat(), Some(&Slot::Filled(2)));
        assert_eq!(grid.position(), Some((1, 1)));
        assert_eq!(grid.advance(), Some(&Slot::Filled(3)));
        assert_eq!(grid.position(), Some((1, 2)));
    }

    #[test]
    fn grid_bookmark() {
        let mut grid = pascal(3);
        grid.rewind();
        grid.advance();
        grid.advance();
        assert_eq!(grid.position(), Some((1, 2)));
        grid.unwind();
        assert_eq!(grid.position(), Some((2, 3)));
        assert!(grid.restore());
        assert_eq!(grid.position(), Some((1, 2)));
        assert!(!grid.restore());

        let mut empty = TriangularGrid::<u64>::new();
        empty.unwind();
        assert_eq!(empty.advance(), None);
        assert_eq!(empty.retreat(), None);
        empty.append_row([9]);
        assert_eq!(empty.retreat(), Some(&Slot::Filled(9)));
    }

    #[test]
    fn grid_row_removal_relocates_cursor() {
        let mut grid = pascal(3);
        grid.rewind();
        grid.advance();
        grid.unwind();
        assert_eq!(grid.position(), Some((2, 3)));

        assert_eq!(
            grid.remove_last_row(),
            Some(vec![Slot::Filled(1), Slot::Filled(2), Slot::Filled(1)])
        );
        assert_eq!(grid.position(), Some((1, 2)));
        assert!(grid.restore());
        assert_eq!(grid.position(), Some((1, 1)));

        grid.remove_last_row();
        assert_eq!(grid.position(), Some((0, 1)));
        grid.remove_last_row();
        assert_eq!(grid.position(), None);
        assert!(grid.is_empty());
        assert_eq!(grid.advance(), None);

        grid.append_row([5]);
        assert_eq!(grid.advance(), Some(&Slot::Filled(5)));
    }

    #[test]
    fn grid_reuses_released_cells() {
        let mut grid = pascal(4);
        grid.remove_last_row();
        grid.remove_last_row();
        grid.append_row([7, 7, 7]);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.get(-1, -1), Some(&7));
        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.render(), "Triangle with 0 rows:\n[ ]\n");
    }

    proptest! {
        #[test]
        fn k_rows_hold_triangular_number_of_cells(k in 0_usize..24) {
            let mut grid = TriangularGrid::<usize>::new();
            for r in 0..k {
                grid.append_row(0..r);
            }
            prop_assert_eq!(grid.row_count(), k);
            prop_assert_eq!(grid.len(), k * (k + 1) / 2);
            prop_assert_eq!(grid.iter().count(), k * (k + 1) / 2);
            for r in 0..k {
                prop_assert_eq!(grid.row(r as isize).map(|row| row.len()), Some(r + 1));
                prop_assert_eq!(grid.at(r as isize, -1), Some(&Slot::Empty));
            }
        }
    }
}
