use std::fmt;

use tracing::*;

use crate::{combine, GridError, Precondition};

/// The row-major backing buffer of a grid.
///
/// Holds exactly `width * height` cells; cell `(x, y)` lives at index
/// `x + y * width`. Only the grid kinds in this crate can build or write one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Store<E> {
    width: usize,
    height: usize,
    cells: Vec<E>,
}

impl<E> Store<E> {
    /// Panics if `cells` does not hold exactly `width * height` elements.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<E>) -> Self {
        assert_eq!(cells.len(), expect_cell_count(width, height));
        Self {
            width,
            height,
            cells,
        }
    }

    /// Calls `generator(x, y)` once per cell, in row-major order.
    pub(crate) fn from_fn<F>(width: usize, height: usize, mut generator: F) -> Self
    where
        F: FnMut(usize, usize) -> E,
    {
        trace!("Generating {}x{} store", width, height);
        let mut cells = Vec::with_capacity(expect_cell_count(width, height));
        cells.extend(combine(0..height, 0..width).map(|(y, x)| generator(x, y)));
        Self::from_cells(width, height, cells)
    }

    pub(crate) fn filled(width: usize, height: usize, value: E) -> Self
    where
        E: Clone,
    {
        Self::from_cells(width, height, vec![value; expect_cell_count(width, height)])
    }

    pub(crate) fn from_rows(rows: Vec<Vec<E>>) -> Result<Self, GridError> {
        let width = line_length(&rows, Precondition::EmptyRows, |index, expected, found| {
            Precondition::RaggedRows {
                index,
                expected,
                found,
            }
        })?;
        let height = rows.len();
        cell_count(width, height)?;
        Ok(Self::from_cells(
            width,
            height,
            rows.into_iter().flatten().collect(),
        ))
    }

    pub(crate) fn from_columns(columns: Vec<Vec<E>>) -> Result<Self, GridError> {
        let height = line_length(&columns, Precondition::EmptyColumns, |index, expected, found| {
            Precondition::RaggedColumns {
                index,
                expected,
                found,
            }
        })?;
        let width = columns.len();
        let mut columns: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();
        let mut cells = Vec::with_capacity(cell_count(width, height)?);
        for _ in 0..height {
            for column in columns.iter_mut() {
                cells.extend(column.next());
            }
        }
        Ok(Self::from_cells(width, height, cells))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[E] {
        &self.cells
    }

    pub(crate) fn into_cells(self) -> Vec<E> {
        self.cells
    }

    pub(crate) fn index_of(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            error!(
                "Coordinate out of bounds: x={}, y={}, width={}, height={}",
                x, y, self.width, self.height
            );
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x + y * self.width)
    }

    pub(crate) fn get(&self, x: usize, y: usize) -> Result<&E, GridError> {
        let index = self.index_of(x, y)?;
        Ok(&self.cells[index])
    }

    pub(crate) fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut E, GridError> {
        let index = self.index_of(x, y)?;
        Ok(&mut self.cells[index])
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, value: E) -> Result<(), GridError> {
        *self.get_mut(x, y)? = value;
        Ok(())
    }

    pub(crate) fn fill(&mut self, value: E)
    where
        E: Clone,
    {
        self.cells.fill(value);
    }

    /// Row `y` as a slice. The caller guarantees `y < height`.
    pub(crate) fn row_unchecked(&self, y: usize) -> &[E] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Panicking access backing the `Index` impls.
    pub(crate) fn at(&self, x: usize, y: usize) -> &E {
        match self.get(x, y) {
            Ok(cell) => cell,
            Err(e) => panic!("{e}"),
        }
    }

    pub(crate) fn at_mut(&mut self, x: usize, y: usize) -> &mut E {
        match self.get_mut(x, y) {
            Ok(cell) => cell,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Renders the cells as nested rows, e.g. `[[1, 2], [3, 4]]`.
impl<E: fmt::Display> fmt::Display for Store<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for y in 0..self.height {
            if y > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (x, cell) in self.row_unchecked(y).iter().enumerate() {
                if x > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{cell}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}

/// `width * height`, or [`Precondition::SizeOverflow`] when it does not fit in `usize`.
pub(crate) fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
    width.checked_mul(height).ok_or_else(|| {
        let violation = Precondition::SizeOverflow { width, height };
        error!("Cannot build a grid: {}", violation);
        violation.into()
    })
}

/// Like [`cell_count`], but panics on overflow the way `Vec` does on capacity overflow.
fn expect_cell_count(width: usize, height: usize) -> usize {
    match cell_count(width, height) {
        Ok(count) => count,
        Err(e) => panic!("{e}"),
    }
}

/// Common length of `lines`, or the violated precondition.
fn line_length<E>(
    lines: &[Vec<E>],
    empty: Precondition,
    ragged: impl Fn(usize, usize, usize) -> Precondition,
) -> Result<usize, GridError> {
    let Some(first) = lines.first() else {
        error!("Cannot build a grid: {}", empty);
        return Err(empty.into());
    };
    let expected = first.len();
    if let Some((index, line)) = lines
        .iter()
        .enumerate()
        .find(|(_, line)| line.len() != expected)
    {
        let violation = ragged(index, expected, line.len());
        error!("Cannot build a grid: {}", violation);
        return Err(violation.into());
    }
    Ok(expected)
}
