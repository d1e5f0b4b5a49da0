use tracing::*;

use super::store::cell_count;
use super::{MutableGrid, Store};
use crate::{GridError, Precondition};

/// An immutable two-dimensional grid of `E`.
///
/// Cells are fixed once the grid is built. Use [`Grid::to_mutable_grid`] to
/// get an independent copy that can be written to.
///
/// # Example
/// ```
/// use basiks::{Grid, GridLike};
///
/// let grid = Grid::from_fn(3, 2, |x, y| x + 1 + y * 3);
/// assert_eq!(grid.to_list(), vec![1, 2, 3, 4, 5, 6]);
/// assert_eq!(grid[(2, 1)], 6);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Grid<E> {
    store: Store<E>,
}

impl_grid_kind!(Grid);

impl<E> Grid<E> {
    pub(crate) fn from_store(store: Store<E>) -> Self {
        Self { store }
    }

    /// Creates a grid by calling `generator(x, y)` for every cell in row-major order.
    pub fn from_fn<F>(width: usize, height: usize, generator: F) -> Self
    where
        F: FnMut(usize, usize) -> E,
    {
        MutableGrid::from_fn(width, height, generator).into_immutable()
    }

    /// Creates a grid with every cell set to a clone of `value`.
    ///
    /// For shared handles such as `Rc<RefCell<_>>` every cell points at the
    /// same underlying value.
    pub fn filled(width: usize, height: usize, value: E) -> Self
    where
        E: Clone,
    {
        MutableGrid::filled(width, height, value).into_immutable()
    }

    /// Creates a grid from its rows. All rows must have the same length.
    ///
    /// # Errors
    /// [`GridError::PreconditionViolation`] if there are no rows or the rows
    /// differ in length.
    ///
    /// # Example
    /// ```
    /// use basiks::{Grid, GridLike};
    ///
    /// let grid = Grid::from_rows([[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!((grid.width(), grid.height()), (3, 2));
    /// ```
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = E>,
    {
        MutableGrid::from_rows(rows).map(MutableGrid::into_immutable)
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
        MutableGrid::from_columns(columns).map(MutableGrid::into_immutable)
    }

    /// Returns this grid itself.
    pub fn to_immutable_grid(&self) -> &Self {
        self
    }

    /// Copies the cells into a new [`MutableGrid`]; this grid is unaffected by later writes.
    pub fn to_mutable_grid(&self) -> MutableGrid<E>
    where
        E: Clone,
    {
        debug!(
            "Copying {}x{} grid into a mutable grid",
            self.store.width(),
            self.store.height()
        );
        MutableGrid::from_store(self.store.clone())
    }

    /// Turns this grid into a [`MutableGrid`] without copying its cells.
    pub fn into_mutable(self) -> MutableGrid<E> {
        MutableGrid::from_store(self.store)
    }
}

impl<T> Grid<Option<T>> {
    /// Creates a grid with every cell absent.
    pub fn of_nones(width: usize, height: usize) -> Self {
        Self::from_fn(width, height, |_, _| None)
    }
}

/// Creates a grid from `width * height` values in row-major order, so cell
/// `(x, y)` holds `values[x + y * width]`.
///
/// # Errors
/// [`GridError::PreconditionViolation`] if the number of values is not
/// exactly `width * height`, or if `width * height` overflows `usize`.
///
/// # Example
/// ```
/// use basiks::{grid_of, GridLike};
///
/// let grid = grid_of(2, 2, ["A", "B", "C", "D"]).unwrap();
/// assert_eq!(grid.rows()[1].as_slice(), &["C", "D"]);
/// assert!(grid_of(2, 2, ["A", "B", "C"]).is_err());
/// ```
pub fn grid_of<E, I>(width: usize, height: usize, values: I) -> Result<Grid<E>, GridError>
where
    I: IntoIterator<Item = E>,
{
    let expected = cell_count(width, height)?;
    let cells: Vec<E> = values.into_iter().collect();
    if cells.len() != expected {
        let violation = Precondition::ValueCount {
            expected,
            found: cells.len(),
        };
        error!("Cannot build a {}x{} grid: {}", width, height, violation);
        return Err(violation.into());
    }
    Ok(Grid::from_store(Store::from_cells(width, height, cells)))
}
