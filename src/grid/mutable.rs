use tracing::*;

use super::{Grid, Store};
use crate::GridError;

/// A two-dimensional grid of `E` whose cells can be reassigned.
///
/// Writes go through [`MutableGrid::set`], [`MutableGrid::get_mut`],
/// [`MutableGrid::fill`] or `IndexMut`; the width and height never change.
///
/// # Example
/// ```
/// use basiks::{GridLike, MutableGrid};
///
/// let mut grid = MutableGrid::filled(2, 2, '.');
/// grid.set(1, 1, '#').unwrap();
/// grid[(0, 1)] = '@';
/// assert_eq!(grid.to_list(), vec!['.', '.', '@', '#']);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct MutableGrid<E> {
    store: Store<E>,
}

impl_grid_kind!(MutableGrid);

impl<E> MutableGrid<E> {
    pub(crate) fn from_store(store: Store<E>) -> Self {
        Self { store }
    }

    /// Creates a grid by calling `generator(x, y)` for every cell in row-major order.
    pub fn from_fn<F>(width: usize, height: usize, generator: F) -> Self
    where
        F: FnMut(usize, usize) -> E,
    {
        Self::from_store(Store::from_fn(width, height, generator))
    }

    /// Creates a grid with every cell set to a clone of `value`.
    pub fn filled(width: usize, height: usize, value: E) -> Self
    where
        E: Clone,
    {
        trace!("Filling new {}x{} grid", width, height);
        Self::from_store(Store::filled(width, height, value))
    }

    /// Creates a grid from its rows. All rows must have the same length.
    ///
    /// # Errors
    /// [`GridError::PreconditionViolation`] if there are no rows or the rows
    /// differ in length.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = E>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        Store::from_rows(rows).map(Self::from_store)
    }

    /// Creates a grid from its columns. All columns must have the same length.
    ///
    /// # Errors
    /// [`GridError::PreconditionViolation`] if there are no columns or the
    /// columns differ in length.
    pub fn from_columns<I, C>(columns: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = E>,
    {
        let columns = columns
            .into_iter()
            .map(|column| column.into_iter().collect())
            .collect();
        Store::from_columns(columns).map(Self::from_store)
    }

    /// Replaces the cell at `(x, y)`.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] if the coordinate is outside the grid; the
    /// grid is left unchanged.
    pub fn set(&mut self, x: usize, y: usize, value: E) -> Result<(), GridError> {
        self.store.set(x, y, value)
    }

    /// A mutable reference to the cell at `(x, y)`.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut E, GridError> {
        self.store.get_mut(x, y)
    }

    /// Sets every cell to a clone of `value` and returns the grid for chaining.
    ///
    /// # Example
    /// ```
    /// use basiks::{GridLike, MutableGrid};
    ///
    /// let mut grid = MutableGrid::<Option<&str>>::of_nones(3, 3);
    /// let filled = grid.fill(Some("Filled"));
    /// assert!(filled.iter().all(|cell| *cell == Some("Filled")));
    /// ```
    pub fn fill(&mut self, value: E) -> &mut Self
    where
        E: Clone,
    {
        trace!(
            "Filling {}x{} grid",
            self.store.width(),
            self.store.height()
        );
        self.store.fill(value);
        self
    }

    /// Copies the cells into a new immutable [`Grid`]; later writes to this grid do not reach it.
    pub fn to_immutable_grid(&self) -> Grid<E>
    where
        E: Clone,
    {
        debug!(
            "Copying {}x{} grid into an immutable grid",
            self.store.width(),
            self.store.height()
        );
        Grid::from_store(self.store.clone())
    }

    /// Returns this grid itself.
    pub fn to_mutable_grid(&mut self) -> &mut Self {
        self
    }

    /// Freezes this grid into an immutable [`Grid`] without copying its cells.
    pub fn into_immutable(self) -> Grid<E> {
        Grid::from_store(self.store)
    }
}

impl<T> MutableGrid<Option<T>> {
    /// Creates a grid with every cell absent.
    pub fn of_nones(width: usize, height: usize) -> Self {
        Self::from_fn(width, height, |_, _| None)
    }
}

/// Panics on an out-of-bounds coordinate; use `set` or `get_mut` for the checked form.
impl<E> std::ops::IndexMut<(usize, usize)> for MutableGrid<E> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut E {
        self.store.at_mut(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridLike, Precondition};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;
    use test_case::test_case;

    #[test]
    fn test_fill_returns_same_grid() {
        let mut grid = MutableGrid::<Option<&str>>::of_nones(3, 3);
        let address: *const MutableGrid<Option<&str>> = &grid;
        let filled = grid.fill(Some("Filled"));

        assert!(std::ptr::eq(address, filled));
        assert!(filled.iter().all(|cell| *cell == Some("Filled")));
    }

    #[test]
    fn test_fill_shares_handles() {
        let shared = Rc::new(RefCell::new(0));
        let mut grid = MutableGrid::filled(2, 2, Rc::new(RefCell::new(-1)));
        grid.fill(Rc::clone(&shared));

        *grid[(1, 1)].borrow_mut() = 7;
        assert!(grid.iter().all(|cell| Rc::ptr_eq(cell, &shared)));
        assert_eq!(*grid[(0, 0)].borrow(), 7);
    }

    #[test]
    fn test_to_mutable_grid_is_identity() {
        let mut grid = MutableGrid::filled(2, 2, 1);
        let address: *const MutableGrid<i32> = &grid;
        let same = grid.to_mutable_grid().to_mutable_grid();
        assert!(std::ptr::eq(address, same));
    }

    #[test]
    fn test_to_immutable_grid_copies() {
        let mut grid = MutableGrid::from_fn(2, 2, |x, y| x + y);
        let frozen = grid.to_immutable_grid();
        assert_eq!(frozen, grid);

        grid.set(1, 1, 100).unwrap();
        assert_eq!(frozen.get(1, 1), Ok(&2));
        assert_eq!(grid.get(1, 1), Ok(&100));
    }

    #[test]
    fn test_round_trip_preserves_equality() {
        let grid = MutableGrid::from_fn(4, 3, |x, y| format!("{x}:{y}"));
        assert_eq!(grid.to_immutable_grid().to_mutable_grid(), grid);
    }

    #[test]
    fn test_set_matches_generator() {
        let generator = |x: usize, y: usize| x * 3 + y;
        let mut grid = MutableGrid::filled(3, 4, 0);
        for (x, y) in crate::combine(0..3, 0..4) {
            grid.set(x, y, generator(x, y)).unwrap();
        }
        assert_eq!(grid.into_immutable(), Grid::from_fn(3, 4, generator));
    }

    #[test_case(2, 0 ; "x equal to width")]
    #[test_case(0, 3 ; "y equal to height")]
    fn test_set_out_of_bounds(x: usize, y: usize) {
        let mut grid = MutableGrid::filled(2, 3, 'a');
        assert_eq!(
            grid.set(x, y, 'b'),
            Err(GridError::OutOfBounds {
                x,
                y,
                width: 2,
                height: 3
            })
        );
        assert!(grid.iter().all(|cell| *cell == 'a'));
    }

    #[test]
    fn test_get_mut() {
        let mut grid = MutableGrid::filled(2, 2, 1);
        *grid.get_mut(1, 0).unwrap() += 10;
        assert_eq!(grid.to_list(), vec![1, 11, 1, 1]);
        assert!(grid.get_mut(0, 2).is_err());
    }

    #[test]
    fn test_from_columns_ragged() {
        assert_eq!(
            MutableGrid::from_columns([vec![1, 2], vec![3, 4], vec![5]]),
            Err(GridError::PreconditionViolation(Precondition::RaggedColumns {
                index: 2,
                expected: 2,
                found: 1
            }))
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_mut_panics_out_of_bounds() {
        let mut grid = MutableGrid::filled(1, 1, 0);
        grid[(0, 1)] = 1;
    }
}
