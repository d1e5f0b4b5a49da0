use std::iter::{Enumerate, FusedIterator};
use std::slice;

use tracing::*;

use crate::grid::{Grid, SmallVecLine, Store};
use crate::{GridError, Side};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// The read-only contract shared by [`Grid`] and [`MutableGrid`](crate::MutableGrid).
///
/// Every provided method reads through [`GridLike::store`]; all orders are
/// row-major (`y` outer, `x` inner).
pub trait GridLike: sealed::Sealed {
    type Elem;

    /// The backing store of this grid.
    fn store(&self) -> &Store<Self::Elem>;

    fn width(&self) -> usize {
        self.store().width()
    }

    fn height(&self) -> usize {
        self.store().height()
    }

    /// Number of cells, `width * height`.
    fn len(&self) -> usize {
        self.store().cells().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cell at `(x, y)`.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] if `x >= width` or `y >= height`.
    fn get(&self, x: usize, y: usize) -> Result<&Self::Elem, GridError> {
        self.store().get(x, y)
    }

    /// Borrows row `y`.
    ///
    /// # Errors
    /// [`GridError::RowOutOfBounds`] if `y >= height`.
    fn row(&self, y: usize) -> Result<&[Self::Elem], GridError> {
        let store = self.store();
        if y >= store.height() {
            error!("Row out of bounds: y={}, height={}", y, store.height());
            return Err(GridError::RowOutOfBounds {
                y,
                height: store.height(),
            });
        }
        Ok(store.row_unchecked(y))
    }

    /// A copy of the rows; changing it never affects the grid.
    ///
    /// # Example
    /// ```
    /// use basiks::{grid_of, GridLike};
    ///
    /// let grid = grid_of(3, 2, 1..=6).unwrap();
    /// let mut rows = grid.rows();
    /// rows[0][0] = 100;
    /// assert_eq!(rows.len(), 2);
    /// assert_eq!(rows[1].as_slice(), &[4, 5, 6]);
    /// assert_eq!(grid.get(0, 0).unwrap(), &1);
    /// ```
    fn rows(&self) -> Vec<SmallVecLine<Self::Elem>>
    where
        Self::Elem: Clone,
    {
        let store = self.store();
        (0..store.height())
            .map(|y| store.row_unchecked(y).iter().cloned().collect())
            .collect()
    }

    /// A copy of the columns, the transpose of [`GridLike::rows`].
    fn columns(&self) -> Vec<SmallVecLine<Self::Elem>>
    where
        Self::Elem: Clone,
    {
        let store = self.store();
        (0..store.width())
            .map(|x| {
                (0..store.height())
                    .map(|y| store.row_unchecked(y)[x].clone())
                    .collect()
            })
            .collect()
    }

    /// All cells, flattened row by row.
    fn to_list(&self) -> Vec<Self::Elem>
    where
        Self::Elem: Clone,
    {
        self.store().cells().to_vec()
    }

    /// Iterates over the cells in row-major order.
    fn iter(&self) -> slice::Iter<'_, Self::Elem> {
        self.store().cells().iter()
    }

    /// Iterates over `(x, y, cell)` in row-major order.
    ///
    /// # Example
    /// ```
    /// use basiks::{Grid, GridLike};
    ///
    /// let grid = Grid::filled(5, 5, 3);
    /// let total: usize = grid.grid_iter().map(|(x, y, _)| x + y).sum();
    /// assert_eq!(total, 100);
    /// ```
    fn grid_iter(&self) -> GridIter<'_, Self::Elem> {
        let store = self.store();
        GridIter {
            width: store.width(),
            cells: store.cells().iter().enumerate(),
        }
    }

    /// A new grid without the `count` leftmost columns.
    ///
    /// # Errors
    /// [`GridError::InvalidDimension`] unless `count < width`.
    ///
    /// # Example
    /// ```
    /// use basiks::{grid_of, GridLike};
    ///
    /// let grid = grid_of(3, 2, [1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(grid.drop_left(1).unwrap(), grid_of(2, 2, [2, 3, 5, 6]).unwrap());
    /// assert!(grid.drop_left(3).is_err());
    /// ```
    fn drop_left(&self, count: usize) -> Result<Grid<Self::Elem>, GridError>
    where
        Self::Elem: Clone,
    {
        trim(self.store(), Side::Left, count)
    }

    /// A new grid without the `count` rightmost columns.
    ///
    /// # Errors
    /// [`GridError::InvalidDimension`] unless `count < width`.
    fn drop_right(&self, count: usize) -> Result<Grid<Self::Elem>, GridError>
    where
        Self::Elem: Clone,
    {
        trim(self.store(), Side::Right, count)
    }

    /// A new grid without the `count` topmost rows.
    ///
    /// # Errors
    /// [`GridError::InvalidDimension`] unless `count < height`.
    fn drop_top(&self, count: usize) -> Result<Grid<Self::Elem>, GridError>
    where
        Self::Elem: Clone,
    {
        trim(self.store(), Side::Top, count)
    }

    /// A new grid without the `count` bottommost rows.
    ///
    /// # Errors
    /// [`GridError::InvalidDimension`] unless `count < height`.
    fn drop_bottom(&self, count: usize) -> Result<Grid<Self::Elem>, GridError>
    where
        Self::Elem: Clone,
    {
        trim(self.store(), Side::Bottom, count)
    }
}

/// Copies the part of `store` left after removing `count` lines from `side`.
fn trim<E: Clone>(store: &Store<E>, side: Side, count: usize) -> Result<Grid<E>, GridError> {
    let (width, height) = (store.width(), store.height());
    let size = match side {
        Side::Left | Side::Right => width,
        Side::Top | Side::Bottom => height,
    };
    if count >= size {
        error!(
            "Cannot drop {} lines from the {} of a {}x{} grid",
            count, side, width, height
        );
        return Err(GridError::InvalidDimension { side, count, size });
    }
    debug!("Dropping {} lines from the {} of a {}x{} grid", count, side, width, height);

    let (dx, dy, width, height) = match side {
        Side::Left => (count, 0, width - count, height),
        Side::Right => (0, 0, width - count, height),
        Side::Top => (0, count, width, height - count),
        Side::Bottom => (0, 0, width, height - count),
    };
    Ok(Grid::from_fn(width, height, |x, y| {
        store.row_unchecked(y + dy)[x + dx].clone()
    }))
}

/// Iterator over `(x, y, &cell)`, see [`GridLike::grid_iter`].
#[derive(Debug, Clone)]
pub struct GridIter<'a, E> {
    width: usize,
    cells: Enumerate<slice::Iter<'a, E>>,
}

impl<'a, E> Iterator for GridIter<'a, E> {
    type Item = (usize, usize, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        self.cells
            .next()
            .map(|(i, cell)| (i % self.width, i / self.width, cell))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl<E> ExactSizeIterator for GridIter<'_, E> {}

impl<E> FusedIterator for GridIter<'_, E> {}
