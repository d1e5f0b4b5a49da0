//! Small generic-programming utilities centred on a two-dimensional [`Grid`].
//!
//! A grid comes in two kinds: the immutable [`Grid`] and the [`MutableGrid`].
//! Both share the read-only [`GridLike`] contract (bounds-checked access,
//! row and column views, row-major iteration, border trimming) and convert
//! into each other by copying their cells.
//!
//! # Example
//! ```
//! use basiks::{grid_of, GridLike, MutableGrid};
//!
//! let grid = grid_of(2, 2, ["A", "B", "C", "D"]).unwrap();
//! assert_eq!(grid.get(1, 0).unwrap(), &"B");
//! assert_eq!(grid.get(0, 1).unwrap(), &"C");
//!
//! let mut copy: MutableGrid<&str> = grid.to_mutable_grid();
//! copy.set(0, 0, "Z").unwrap();
//! assert_eq!(grid.get(0, 0).unwrap(), &"A");
//! ```

/// Lazy cartesian product of two sequences.
pub mod combine;
/// Right-biased `Either` sum type.
pub mod either;
/// The immutable and mutable grid kinds and their backing store.
pub mod grid;
/// The read-only contract shared by both grid kinds.
pub mod grid_like;

pub use combine::{combine, CombineExt, Combined};
pub use either::Either;
pub use grid::{grid_of, Grid, MutableGrid, SmallVecLine, Store};
pub use grid_like::{GridIter, GridLike};

use thiserror::Error;

/// The border of a grid a trim operation removes lines from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Top => "top",
            Side::Bottom => "bottom",
        })
    }
}

/// A shape requirement of a grid factory that the input did not meet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Precondition {
    #[error("rows must not be empty")]
    EmptyRows,

    #[error("columns must not be empty")]
    EmptyColumns,

    #[error("row {index} has {found} elements, expected {expected}")]
    RaggedRows {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("column {index} has {found} elements, expected {expected}")]
    RaggedColumns {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected {expected} values, got {found}")]
    ValueCount { expected: usize, found: usize },

    #[error("a {width}x{height} grid overflows usize")]
    SizeOverflow { width: usize, height: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Coordinate out of bounds: x={x}, y={y} in a {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Row out of bounds: y={y} in a grid of height {height}")]
    RowOutOfBounds { y: usize, height: usize },

    #[error("Precondition violated: {0}")]
    PreconditionViolation(#[from] Precondition),

    #[error("Invalid dimension: cannot drop {count} lines from the {side} of a grid of size {size}")]
    InvalidDimension { side: Side, count: usize, size: usize },
}

/// Creates an immutable [`Grid`] from a row-major list of values.
///
/// Expands to a call to [`grid_of`], so it evaluates to a
/// `Result<Grid<_>, GridError>`.
///
/// # Example
/// ```
/// use basiks::{grid_of, GridLike};
///
/// let grid = grid_of!(2, 2; "A", "B", "C", "D").unwrap();
/// assert_eq!(grid.to_list(), vec!["A", "B", "C", "D"]);
/// assert_eq!(grid.get(1, 1).unwrap(), &"D");
/// ```
#[macro_export]
macro_rules! grid_of {
    ($width:expr, $height:expr; $($value:expr),* $(,)?) => {
        $crate::grid_of($width, $height, [$($value),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_messages() {
        let error = GridError::OutOfBounds {
            x: 3,
            y: 0,
            width: 3,
            height: 2,
        };
        assert_eq!(
            error.to_string(),
            "Coordinate out of bounds: x=3, y=0 in a 3x2 grid"
        );

        let error = GridError::RowOutOfBounds { y: 5, height: 2 };
        assert_eq!(error.to_string(), "Row out of bounds: y=5 in a grid of height 2");

        let error: GridError = Precondition::EmptyRows.into();
        assert_eq!(error.to_string(), "Precondition violated: rows must not be empty");

        let error = GridError::InvalidDimension {
            side: Side::Top,
            count: 2,
            size: 2,
        };
        assert_eq!(
            error.to_string(),
            "Invalid dimension: cannot drop 2 lines from the top of a grid of size 2"
        );
    }

    #[test]
    fn test_grid_of_macro_trailing_comma() {
        let grid = grid_of!(1, 2; 3, 6,).unwrap();
        assert_eq!(grid.to_list(), vec![3, 6]);
    }
}
